//! Attachment picking rules: accepted types, size limits, and conversion of
//! an accepted file into a message part.
//!
//! Files never leave the browser. The component creates an object URL for
//! the picked file and the message renders from that.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use std::fmt;

use crate::error::UploadError;
use crate::state::chat::{Attachment, MessagePart};

const MIB: u64 = 1024 * 1024;

/// Which toolbar button the file came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadKind {
    Image,
    Video,
    File,
}

impl UploadKind {
    pub const ALL: [UploadKind; 3] = [UploadKind::Image, UploadKind::Video, UploadKind::File];

    /// Value for the hidden input's `accept` attribute.
    pub fn accept(self) -> Option<&'static str> {
        match self {
            Self::Image => Some("image/*"),
            Self::Video => Some("video/*"),
            Self::File => None,
        }
    }

    pub fn limit_bytes(self) -> u64 {
        match self {
            Self::Image => 10 * MIB,
            Self::Video => 50 * MIB,
            Self::File => 20 * MIB,
        }
    }

    /// Toolbar button tooltip.
    pub fn title(self) -> &'static str {
        match self {
            Self::Image => "Image",
            Self::Video => "Video",
            Self::File => "Attachment",
        }
    }

    fn matches(self, mime: &str) -> bool {
        match self {
            Self::Image => mime.starts_with("image/"),
            Self::Video => mime.starts_with("video/"),
            Self::File => true,
        }
    }
}

impl fmt::Display for UploadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::File => "file",
        })
    }
}

/// Metadata of a file chosen in a file input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickedFile {
    pub name: String,
    pub mime: String,
    pub size: u64,
}

/// Check `file` against the rules for `kind`.
///
/// # Errors
///
/// Returns [`UploadError`] when the file is empty, of the wrong media type
/// for the button it came from, or over the size limit.
pub fn validate(kind: UploadKind, file: &PickedFile) -> Result<(), UploadError> {
    if file.size == 0 {
        return Err(UploadError::Empty { name: file.name.clone() });
    }
    if !kind.matches(&file.mime) {
        return Err(UploadError::WrongKind { name: file.name.clone(), expected: kind });
    }
    let limit = kind.limit_bytes();
    if file.size > limit {
        return Err(UploadError::TooLarge { name: file.name.clone(), size: file.size, limit });
    }
    Ok(())
}

/// Build the message part for an accepted file served from `url`.
pub fn to_part(kind: UploadKind, file: &PickedFile, url: String) -> MessagePart {
    let attachment = Attachment {
        url: Some(url),
        file_name: Some(file.name.clone()),
        file_size: Some(file.size),
    };
    match kind {
        UploadKind::Image => MessagePart::Image(attachment),
        UploadKind::Video => MessagePart::Video(attachment),
        UploadKind::File => MessagePart::File(attachment),
    }
}
