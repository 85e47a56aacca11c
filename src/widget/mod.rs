mod transcript;

use log::{ debug, info };
use std::sync::Arc;
use thiserror::Error as ThisError;
use uuid::Uuid;

use crate::models::chat::Bubble;
use crate::render::MessageRenderer;
use crate::session::SessionError;
use crate::transport::{ ChatTransport, TransportError };

pub use transcript::Transcript;

pub const PLACEHOLDER_TEXT: &str = "Thinking...";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Visible,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was empty after trimming; nothing happened.
    Ignored,
    /// The round trip completed and the agent bubble is in the transcript.
    Answered,
}

#[derive(Debug, ThisError)]
pub enum WidgetError {
    #[error(transparent)] Transport(#[from] TransportError),

    #[error(transparent)] Session(#[from] SessionError),

    #[error("transcript lost placeholder {0}")] LostPlaceholder(Uuid),
}

/// One embedded chat widget: owns its transcript, visibility state, session
/// identifier, transport, and renderer.
pub struct ChatWidget {
    session_id: String,
    visibility: Visibility,
    transcript: Transcript,
    transport: Arc<dyn ChatTransport>,
    renderer: Box<dyn MessageRenderer>,
}

impl ChatWidget {
    pub fn new(
        session_id: String,
        transport: Arc<dyn ChatTransport>,
        renderer: Box<dyn MessageRenderer>
    ) -> Self {
        Self {
            session_id,
            visibility: Visibility::Hidden,
            transcript: Transcript::new(),
            transport,
            renderer,
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Icon activation: Hidden <-> Visible. Returns the new state.
    pub fn toggle(&mut self) -> Visibility {
        self.visibility = match self.visibility {
            Visibility::Hidden => Visibility::Visible,
            Visibility::Visible => Visibility::Hidden,
        };
        debug!("Chat window is now {:?}", self.visibility);
        self.visibility
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Full submission flow: trim the input, append the user bubble, hold a
    /// pending placeholder while the endpoint answers, then swap it for the
    /// agent bubble. On transport failure the placeholder is cleared before
    /// the error surfaces.
    pub async fn submit(&mut self, input: &str) -> Result<SubmitOutcome, WidgetError> {
        let message = input.trim();
        if message.is_empty() {
            return Ok(SubmitOutcome::Ignored);
        }

        self.transcript.push(Bubble::user(message));
        let placeholder = self.transcript.push_placeholder(PLACEHOLDER_TEXT);

        let reply = match self.transport.send(&self.session_id, message).await {
            Ok(reply) => reply,
            Err(e) => {
                self.transcript.remove(placeholder);
                return Err(e.into());
            }
        };

        if !self.transcript.remove(placeholder) {
            return Err(WidgetError::LostPlaceholder(placeholder));
        }

        let body = self.renderer.render(&reply.response);
        let sql = reply.sql.as_deref().map(|s| self.renderer.render_sql(s));
        self.transcript.push(Bubble::agent(body, sql));
        info!(
            "Agent replied ({} chars{})",
            reply.response.len(),
            if reply.sql.is_some() {
                ", with SQL"
            } else {
                ""
            }
        );

        Ok(SubmitOutcome::Answered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::models::chat::{ ChatResponse, Sender };
    use crate::render::PlainRenderer;

    struct StubTransport {
        reply: Result<ChatResponse, String>,
    }

    #[async_trait]
    impl ChatTransport for StubTransport {
        async fn send(
            &self,
            _session_id: &str,
            _message: &str
        ) -> Result<ChatResponse, TransportError> {
            match &self.reply {
                Ok(reply) => Ok(reply.clone()),
                Err(msg) => Err(TransportError::MalformedReply(msg.clone())),
            }
        }
    }

    fn widget_with(reply: Result<ChatResponse, String>) -> ChatWidget {
        ChatWidget::new(
            "abc123".to_string(),
            Arc::new(StubTransport { reply }),
            Box::new(PlainRenderer)
        )
    }

    #[tokio::test]
    async fn empty_and_whitespace_input_is_ignored() {
        let mut widget = widget_with(
            Ok(ChatResponse { response: "unused".to_string(), sql: None })
        );

        assert_eq!(widget.submit("").await.unwrap(), SubmitOutcome::Ignored);
        assert_eq!(widget.submit("   \t ").await.unwrap(), SubmitOutcome::Ignored);
        assert!(widget.transcript().is_empty());
    }

    #[tokio::test]
    async fn submission_appends_user_then_agent_and_clears_the_placeholder() {
        let mut widget = widget_with(
            Ok(ChatResponse {
                response: "Here are your tables".to_string(),
                sql: Some("SHOW TABLES;".to_string()),
            })
        );

        let outcome = widget.submit("  show tables  ").await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Answered);

        let entries = widget.transcript().entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].sender, Sender::User);
        assert_eq!(entries[0].body, "show tables");
        assert_eq!(entries[1].sender, Sender::Agent);
        assert!(entries[1].body.contains("Here are your tables"));
        assert!(entries[1].sql.as_deref().unwrap().contains("SHOW TABLES;"));
        assert_eq!(widget.transcript().pending_count(), 0);
    }

    #[tokio::test]
    async fn transport_failure_clears_the_placeholder_and_surfaces_the_error() {
        let mut widget = widget_with(Err("connection refused".to_string()));

        let err = widget.submit("show tables").await.unwrap_err();
        assert!(matches!(err, WidgetError::Transport(_)));

        // The user bubble stays; the placeholder does not leak.
        let entries = widget.transcript().entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].sender, Sender::User);
        assert_eq!(widget.transcript().pending_count(), 0);
    }

    #[tokio::test]
    async fn toggling_twice_restores_the_original_visibility() {
        let mut widget = widget_with(
            Ok(ChatResponse { response: "unused".to_string(), sql: None })
        );

        assert_eq!(widget.visibility(), Visibility::Hidden);
        assert_eq!(widget.toggle(), Visibility::Visible);
        assert_eq!(widget.toggle(), Visibility::Hidden);
    }
}
