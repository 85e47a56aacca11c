mod file;
mod memory;

use chrono::Utc;
use log::info;
use rand::Rng;
use std::error::Error;
use std::sync::Arc;
use thiserror::Error as ThisError;

use crate::cli::Args;

pub use file::FileSessionStore;
pub use memory::MemorySessionStore;

/// Where the widget keeps its one persisted string: the session identifier.
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Result<Option<String>, SessionError>;
    fn save(&self, session_id: &str) -> Result<(), SessionError>;
}

#[derive(Debug, ThisError)]
pub enum SessionError {
    #[error("session store IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("session store error: {0}")]
    Store(String),
}

pub fn create_session_store(
    args: &Args
) -> Result<Arc<dyn SessionStore>, Box<dyn Error + Send + Sync>> {
    match args.session_store.to_lowercase().as_str() {
        "file" => {
            let store = FileSessionStore::new(&args.session_path);
            Ok(Arc::new(store))
        }
        "memory" => Ok(Arc::new(MemorySessionStore::new())),
        _ =>
            Err(
                Box::new(
                    std::io::Error::new(
                        std::io::ErrorKind::InvalidInput,
                        format!("Unsupported session store type: {}", args.session_store)
                    )
                )
            ),
    }
}

const SESSION_FRAGMENT_LEN: usize = 12;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Loads the persisted identifier, or generates and stores a fresh one.
/// Idempotent across calls against the same store. The generated form is a
/// pseudo-random base-36 fragment followed by the current epoch-millisecond
/// timestamp; it is a UI correlation key, not a security token.
pub fn get_or_create_session(store: &dyn SessionStore) -> Result<String, SessionError> {
    if let Some(existing) = store.load()? {
        let existing = existing.trim();
        if !existing.is_empty() {
            return Ok(existing.to_string());
        }
    }

    let session_id = generate_session_id();
    store.save(&session_id)?;
    info!("Created new chat session: {}", session_id);
    Ok(session_id)
}

fn generate_session_id() -> String {
    let mut rng = rand::rng();
    let fragment: String = (0..SESSION_FRAGMENT_LEN)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect();
    format!("{}{}", fragment, Utc::now().timestamp_millis())
}
