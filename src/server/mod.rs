use axum::{ routing::{ get, post }, Json, Router, extract::State };
use log::{ debug, info };
use serde::{ Deserialize, Serialize };
use std::collections::HashMap;
use std::error::Error;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tower_http::cors::{ Any, CorsLayer };
use uuid::Uuid;

/// One remembered exchange inside a mock session.
#[derive(Clone, Debug)]
struct Turn {
    role: &'static str,
    content: String,
    sql: Option<String>,
}

#[derive(Clone, Default)]
struct AppState {
    sessions: Arc<Mutex<HashMap<String, Vec<Turn>>>>,
}

#[derive(Debug, Deserialize)]
struct MockChatRequest {
    #[serde(default)]
    session_id: Option<String>,
    message: String,
}

#[derive(Debug, Serialize)]
struct MockChatResponse {
    session_id: String,
    response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    sql: Option<String>,
}

/// Development stand-in for the real chat endpoint: serves `POST /chat`
/// with canned agent replies and keeps an in-memory per-session turn log.
pub struct MockServer {
    addr: String,
}

impl MockServer {
    pub fn new(addr: String) -> Self {
        Self { addr }
    }

    pub fn router() -> Router {
        let state = AppState::default();

        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/health", get(health_handler))
            .route("/chat", post(chat_handler))
            .layer(cors)
            .with_state(state)
    }

    pub async fn run(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let listener = TcpListener::bind(&self.addr).await?;
        info!("Mock chat endpoint listening on: http://{}", listener.local_addr()?);
        axum::serve(listener, Self::router().into_make_service()).await?;
        Ok(())
    }
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn chat_handler(
    State(state): State<AppState>,
    Json(req): Json<MockChatRequest>
) -> Json<MockChatResponse> {
    let session_id = req.session_id
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let response = canned_reply(&req.message);
    let sql = extract_sql_block(&response);

    let mut sessions = state.sessions.lock().await;
    let turns = sessions.entry(session_id.clone()).or_default();
    turns.push(Turn { role: "user", content: req.message.clone(), sql: None });
    turns.push(Turn { role: "agent", content: response.clone(), sql: sql.clone() });
    for turn in turns.iter().rev().take(2) {
        debug!(
            "[{}] {}: {} chars, sql: {}",
            session_id,
            turn.role,
            turn.content.len(),
            turn.sql.is_some()
        );
    }

    Json(MockChatResponse { session_id, response, sql })
}

/// Pulls the first ```sql fenced block out of agent text. The surrounding
/// text is left untouched.
pub fn extract_sql_block(text: &str) -> Option<String> {
    let start = text.find("```sql")?;
    let after = &text[start + "```sql".len()..];
    let end = after.find("```")?;
    let block = after[..end].trim();
    if block.is_empty() {
        None
    } else {
        Some(block.to_string())
    }
}

fn canned_reply(message: &str) -> String {
    let lower = message.to_lowercase();
    if lower.contains("table") {
        "Here are the tables in your database:\n```sql\nSHOW TABLES;\n```".to_string()
    } else if lower.contains("count") {
        "This query returns the row count:\n```sql\nSELECT COUNT(*) FROM orders;\n```".to_string()
    } else {
        format!("You asked: \"{}\". Name a table and I will draft the query.", message.trim())
    }
}
