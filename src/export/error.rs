//! Export error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while exporting scrambles
#[derive(Debug, Error)]
pub enum ExportError {
    /// The list holds no scrambles
    #[error("Nothing to save: the scramble list is empty")]
    NothingToSave,

    /// A copy was requested with nothing selected
    #[error("Select at least one scramble to copy")]
    EmptySelection,

    /// Writing the export file failed
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
