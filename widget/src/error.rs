//! Widget error types.

use crate::util::upload::UploadKind;

/// Failures while configuring or mounting the widget.
#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    #[error("invalid widget config: {0}")]
    InvalidConfig(String),

    #[error("no document available")]
    MissingDocument,

    #[error("chat frame document is not accessible")]
    FrameDocumentUnavailable,

    #[error("mount point #{0} not found")]
    MountPointMissing(&'static str),

    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl From<serde_json::Error> for WidgetError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidConfig(e.to_string())
    }
}

/// Reasons a picked file is refused before it ever becomes a message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("{name} is not a valid {expected} file")]
    WrongKind { name: String, expected: UploadKind },

    #[error("{name} is too large ({size} bytes, limit {limit})")]
    TooLarge { name: String, size: u64, limit: u64 },

    #[error("{name} is empty")]
    Empty { name: String },
}
