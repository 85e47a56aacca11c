use uuid::Uuid;

use crate::models::chat::Bubble;

/// Ordered bubble list plus placeholder bookkeeping. Placeholders are
/// tracked and removed by id, never by scanning for the last agent entry.
#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<Bubble>,
}

impl Transcript {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn push(&mut self, bubble: Bubble) {
        self.entries.push(bubble);
    }

    /// Appends a pending agent bubble and returns its id.
    pub fn push_placeholder(&mut self, body: &str) -> Uuid {
        let bubble = Bubble::placeholder(body);
        let id = bubble.id;
        self.entries.push(bubble);
        id
    }

    /// Removes the entry with the given id. Returns false when no such
    /// entry exists.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.entries.len();
        self.entries.retain(|b| b.id != id);
        self.entries.len() != before
    }

    pub fn entries(&self) -> &[Bubble] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn pending_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|b| b.pending)
            .count()
    }

    /// Last `viewport` entries, oldest first. Drawing the tail keeps the
    /// view pinned to the bottom after every append.
    pub fn tail(&self, viewport: usize) -> &[Bubble] {
        let start = self.entries.len().saturating_sub(viewport);
        &self.entries[start..]
    }
}
