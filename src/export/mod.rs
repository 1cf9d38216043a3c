//! Roster exports: tiled PNG images and semicolon-delimited CSV.
//!
//! Every export starts with a save prompt. A cancelled prompt is a no-op and
//! write failures are logged and reported in the outcome, never propagated.

pub mod canvas;
pub mod grid;
pub mod prompt;
pub mod roster_csv;
pub mod roster_image;

use std::path::PathBuf;
use thiserror::Error;

pub use prompt::{ExtensionFilter, FixedPath, SavePrompt, StdinPrompt, CSV_FILTER, PNG_FILTER};
pub use roster_csv::as_csv;
pub use roster_image::as_image;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to write {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode image {path}")]
    Encode {
        path: PathBuf,
        #[source]
        source: ::image::ImageError,
    },
}

/// Result of an export as seen by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The user dismissed the save prompt
    Cancelled,
    /// Files written, in order
    Written(Vec<PathBuf>),
    /// Writing failed; the message has already been logged
    Failed(String),
}

impl ExportOutcome {
    fn failed(error: ExportError) -> Self {
        let message = format!("{:#}", anyhow::Error::new(error));
        tracing::error!("Export failed: {}", message);
        ExportOutcome::Failed(message)
    }

    /// One-line summary for status bars and CLI output
    pub fn summary(&self) -> String {
        match self {
            ExportOutcome::Cancelled => "Export cancelled".to_string(),
            ExportOutcome::Written(paths) if paths.is_empty() => "Nothing to export".to_string(),
            ExportOutcome::Written(paths) => {
                let names: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
                format!("Saved {}", names.join(", "))
            }
            ExportOutcome::Failed(message) => format!("Export failed: {}", message),
        }
    }
}
