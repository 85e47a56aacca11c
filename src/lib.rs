pub mod cli;
pub mod models;
pub mod render;
pub mod server;
pub mod session;
pub mod transport;
pub mod widget;

use cli::Args;
use log::{ error, info };
use std::error::Error;
use tokio::io::AsyncBufReadExt;

use models::chat::Sender;
use render::create_renderer;
use session::{ create_session_store, get_or_create_session };
use transport::create_transport;
use widget::{ ChatWidget, Visibility };

/// Embeds the widget into a line-oriented terminal host. The collapsed
/// indicator stands in for the floating icon; `/toggle` is its activation.
pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    let store = create_session_store(&args)?;
    let session_id = get_or_create_session(store.as_ref())?;
    let transport = create_transport(&args)?;
    let renderer = create_renderer(&args)?;

    let mut widget = ChatWidget::new(session_id, transport, renderer);
    if args.open {
        widget.toggle();
    }

    info!("Chat session: {}", widget.session_id());
    draw(&widget, &args);

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        match input {
            "/quit" | "/q" => {
                break;
            }
            "/toggle" | "/t" => {
                widget.toggle();
            }
            _ if widget.visibility() == Visibility::Hidden => {
                if !input.is_empty() {
                    println!("(chat is closed, /toggle to open)");
                }
                continue;
            }
            _ => {
                if !input.is_empty() {
                    println!("  {}", widget::PLACEHOLDER_TEXT);
                }
                if let Err(e) = widget.submit(input).await {
                    error!("Chat request failed: {}", e);
                    println!("(the agent could not be reached: {})", e);
                }
            }
        }
        draw(&widget, &args);
    }

    Ok(())
}

fn draw(widget: &ChatWidget, args: &Args) {
    match widget.visibility() {
        Visibility::Hidden => {
            println!("[{}] collapsed. /toggle to open, /quit to exit", args.title);
        }
        Visibility::Visible => {
            println!("┌── {} ──", args.title);
            for bubble in widget.transcript().tail(args.viewport) {
                let who = match bubble.sender {
                    Sender::User => "you",
                    Sender::Agent => "agent",
                };
                for (i, line) in bubble.body.lines().enumerate() {
                    if i == 0 {
                        println!("│ {:>5}> {}", who, line);
                    } else {
                        println!("│        {}", line);
                    }
                }
                if let Some(sql) = &bubble.sql {
                    for line in sql.lines() {
                        println!("│        {}", line);
                    }
                }
            }
            println!("└── type a message, /toggle to close");
        }
    }
}
