pub mod components;
pub mod layouts;
pub mod pages;

use crate::errors::PipelineError;
use maud::Markup;
use std::path::Path;

// Re-exports for convenience
pub use pages::{render_map, MapDocument, MapInput};

/// Writes a rendered page to `path`, replacing any previous run's output.
pub fn write_document(path: &Path, markup: Markup) -> Result<(), PipelineError> {
    std::fs::write(path, markup.into_string())
        .map_err(|e| PipelineError::Io(format!("cannot write {}: {e}", path.display())))
}
