mod markdown;
mod plain;

use std::error::Error;

use crate::cli::Args;

pub use markdown::MarkdownRenderer;
pub use plain::PlainRenderer;

/// Rendering strategy injected into the widget. Agent replies pass through
/// `render`; an attached SQL statement is shown via `render_sql` as a
/// preformatted block reproducing the statement text verbatim.
pub trait MessageRenderer: Send + Sync {
    fn render(&self, text: &str) -> String;

    fn render_sql(&self, sql: &str) -> String {
        sql.lines()
            .map(|line| format!("    {}", line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub fn create_renderer(args: &Args) -> Result<Box<dyn MessageRenderer>, Box<dyn Error + Send + Sync>> {
    match args.renderer.to_lowercase().as_str() {
        "markdown" => Ok(Box::new(MarkdownRenderer::new())),
        "plain" => Ok(Box::new(PlainRenderer)),
        _ =>
            Err(
                Box::new(
                    std::io::Error::new(
                        std::io::ErrorKind::InvalidInput,
                        format!("Unsupported renderer type: {}", args.renderer)
                    )
                )
            ),
    }
}
