use clap::Parser;
use db_chat_widget::cli::Args;
use dotenv::dotenv;
use log::info;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    dotenv().ok();
    let args = Args::parse();
    let default_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    info!("--- Widget Configuration ---");
    info!("Chat Endpoint: {}", args.endpoint);
    info!("Session Store Type: {}", args.session_store);
    info!("Session Path: {}", args.session_path);
    info!("Renderer: {}", args.renderer);
    info!("Viewport: {}", args.viewport);
    info!("----------------------------");

    db_chat_widget::run(args).await
}
