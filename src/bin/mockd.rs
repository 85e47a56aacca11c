use clap::Parser;
use db_chat_widget::server::MockServer;
use dotenv::dotenv;
use log::info;
use std::error::Error;

#[derive(Parser, Debug)]
#[command(author, version, about = "Development chat endpoint for the widget", long_about = None)]
struct Args {
    /// Host address and port for the mock endpoint to listen on.
    #[arg(long, env = "MOCK_ADDR", default_value = "127.0.0.1:8000")]
    addr: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    info!("Starting mock chat endpoint on: {}", args.addr);
    let server = MockServer::new(args.addr);
    server.run().await
}
