use super::MessageRenderer;

/// Degraded default: agent text passes through untouched.
pub struct PlainRenderer;

impl MessageRenderer for PlainRenderer {
    fn render(&self, text: &str) -> String {
        text.to_string()
    }
}
