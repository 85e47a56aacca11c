use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Chat endpoint URL the widget posts messages to.
    #[arg(long, env = "CHAT_ENDPOINT", default_value = "http://localhost:8000/chat")]
    pub endpoint: String,

    /// Session store type (file, memory)
    #[arg(long, env = "SESSION_STORE", default_value = "file")]
    pub session_store: String,

    /// Path of the file holding the persisted session identifier.
    #[arg(long, env = "SESSION_PATH", default_value = ".db-chat-session")]
    pub session_path: String,

    /// Renderer applied to agent replies (markdown, plain)
    #[arg(long, env = "CHAT_RENDERER", default_value = "markdown")]
    pub renderer: String,

    /// Title shown in the widget header.
    #[arg(long, env = "CHAT_TITLE", default_value = "DB Chat")]
    pub title: String,

    /// Number of transcript bubbles kept in view.
    #[arg(long, env = "CHAT_VIEWPORT", default_value = "12")]
    pub viewport: usize,

    /// Open the chat window on startup instead of starting collapsed.
    #[arg(long, env = "CHAT_OPEN", default_value = "false")]
    pub open: bool,

    /// Enable debug logging/output
    #[arg(long, env = "DEBUG", default_value = "false")]
    pub debug: bool,
}
