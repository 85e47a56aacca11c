use log::debug;
use std::fs;
use std::path::PathBuf;

use super::{ SessionError, SessionStore };

/// File-backed store holding the session identifier as a single line.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: &str) -> Self {
        Self { path: PathBuf::from(path) }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<String>, SessionError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let id = contents.trim().to_string();
                Ok(if id.is_empty() { None } else { Some(id) })
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SessionError::Io(e)),
        }
    }

    fn save(&self, session_id: &str) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, session_id)?;
        debug!("Persisted session id to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::get_or_create_session;

    #[test]
    fn missing_file_reads_as_no_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session_id");
        let store = FileSessionStore::new(path.to_str().unwrap());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn session_survives_a_second_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session_id");

        let store = FileSessionStore::new(path.to_str().unwrap());
        let first = get_or_create_session(&store).unwrap();

        // Fresh store over the same path, as on the next run.
        let store = FileSessionStore::new(path.to_str().unwrap());
        let second = get_or_create_session(&store).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state").join("session_id");
        let store = FileSessionStore::new(path.to_str().unwrap());
        store.save("abc123").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("abc123"));
    }
}
