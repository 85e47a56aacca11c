use serde::{ Serialize, Deserialize };
use uuid::Uuid;

/// Wire request posted to the chat endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    pub session_id: String,
    pub message: String,
}

/// Wire response from the chat endpoint. `sql` is only present when the
/// agent produced a statement alongside its answer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sql: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Agent,
}

/// One transcript entry. `pending` marks the transient "Thinking..." bubble
/// that lives between request dispatch and response arrival.
#[derive(Clone, Debug)]
pub struct Bubble {
    pub id: Uuid,
    pub sender: Sender,
    pub body: String,
    pub sql: Option<String>,
    pub pending: bool,
}

impl Bubble {
    pub fn user(body: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender: Sender::User,
            body: body.to_string(),
            sql: None,
            pending: false,
        }
    }

    pub fn agent(body: String, sql: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender: Sender::Agent,
            body,
            sql,
            pending: false,
        }
    }

    pub fn placeholder(body: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender: Sender::Agent,
            body: body.to_string(),
            sql: None,
            pending: true,
        }
    }
}
