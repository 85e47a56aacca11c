mod http;

use async_trait::async_trait;
use std::error::Error;
use std::sync::Arc;
use thiserror::Error as ThisError;

use crate::cli::Args;
use crate::models::chat::ChatResponse;

pub use http::HttpChatTransport;

/// Seam between the widget and the remote chat endpoint.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send(
        &self,
        session_id: &str,
        message: &str
    ) -> Result<ChatResponse, TransportError>;
}

#[derive(Debug, ThisError)]
pub enum TransportError {
    #[error("invalid chat endpoint '{url}': {source}")] InvalidEndpoint {
        url: String,
        source: url::ParseError,
    },

    #[error("chat request failed: {0}")] Http(#[from] reqwest::Error),

    #[error("chat endpoint returned a malformed reply: {0}")] MalformedReply(String),
}

pub fn create_transport(
    args: &Args
) -> Result<Arc<dyn ChatTransport>, Box<dyn Error + Send + Sync>> {
    let transport = HttpChatTransport::new(&args.endpoint)?;
    Ok(Arc::new(transport))
}
