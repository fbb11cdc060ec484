use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort loading a recording or building its layout.
#[derive(Debug, Error)]
pub enum ExplorerError {
    /// The text could not be read as a preamble followed by a `Time` table.
    #[error("format error: {0}")]
    Format(String),

    /// Nothing is left to draw once exclusion and the channel cap apply.
    #[error("no channels to plot")]
    EmptyChannelSet,

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExplorerError {
    pub fn format(msg: impl Into<String>) -> Self {
        ExplorerError::Format(msg.into())
    }
}
