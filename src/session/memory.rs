use std::sync::Mutex;

use super::{ SessionError, SessionStore };

/// Ephemeral store; the session lives only as long as the process.
pub struct MemorySessionStore {
    slot: Mutex<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self { slot: Mutex::new(None) }
    }
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<String>, SessionError> {
        let slot = self.slot
            .lock()
            .map_err(|_| SessionError::Store("session slot poisoned".to_string()))?;
        Ok(slot.clone())
    }

    fn save(&self, session_id: &str) -> Result<(), SessionError> {
        let mut slot = self.slot
            .lock()
            .map_err(|_| SessionError::Store("session slot poisoned".to_string()))?;
        *slot = Some(session_id.to_string());
        Ok(())
    }
}
