//! Object-storage paths for uploaded images.
//!
//! Uploads are namespaced by entity type and named after the upload time:
//! `<entityType>/<timestamp>.<originalExtension>`, e.g.
//! `projects/1717171717171.jpg`.

use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Extension used when the uploaded file name has none we can keep.
const FALLBACK_EXTENSION: &str = "bin";

/// Longest extension kept from the original file name.
const MAX_EXTENSION_LEN: usize = 10;

/// Entity types that own uploaded media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Projects,
    Clients,
}

impl MediaKind {
    /// Path namespace for this entity type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Projects => "projects",
            Self::Clients => "clients",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A storage path relative to the media root or bucket.
///
/// Only constructed through [`MediaPath::for_upload`], so every path is made
/// of a known namespace, a decimal timestamp and an ASCII-alphanumeric
/// extension. There is no way to smuggle `..` or separators into it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MediaPath(String);

impl MediaPath {
    /// Build the path for a file uploaded at `uploaded_at`.
    ///
    /// The timestamp is in milliseconds since the Unix epoch. The extension is
    /// the text after the last `.` in `original_name`, lower-cased with
    /// anything non-alphanumeric dropped.
    #[must_use]
    pub fn for_upload(kind: MediaKind, original_name: &str, uploaded_at: DateTime<Utc>) -> Self {
        let extension = extension_of(original_name);
        Self(format!(
            "{}/{}.{}",
            kind.as_str(),
            uploaded_at.timestamp_millis(),
            extension
        ))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The file extension, without the dot.
    #[must_use]
    pub fn extension(&self) -> &str {
        self.0.rsplit_once('.').map_or("", |(_, ext)| ext)
    }

    /// Best-effort MIME type, derived from the extension.
    #[must_use]
    pub fn content_type(&self) -> &'static str {
        match self.extension() {
            "jpg" | "jpeg" => "image/jpeg",
            "png" => "image/png",
            "gif" => "image/gif",
            "webp" => "image/webp",
            "svg" => "image/svg+xml",
            "avif" => "image/avif",
            _ => "application/octet-stream",
        }
    }
}

impl fmt::Display for MediaPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MediaPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn extension_of(original_name: &str) -> String {
    let Some((_, raw)) = original_name.rsplit_once('.') else {
        return FALLBACK_EXTENSION.to_string();
    };

    let cleaned: String = raw
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .take(MAX_EXTENSION_LEN)
        .collect::<String>()
        .to_ascii_lowercase();

    if cleaned.is_empty() {
        FALLBACK_EXTENSION.to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn at_millis(ms: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(ms).unwrap()
    }

    #[test]
    fn test_for_upload_uses_namespace_timestamp_and_extension() {
        let path = MediaPath::for_upload(MediaKind::Projects, "front-porch.JPG", at_millis(1_717_171_717_171));
        assert_eq!(path.as_str(), "projects/1717171717171.jpg");
        assert_eq!(path.extension(), "jpg");
        assert_eq!(path.content_type(), "image/jpeg");
    }

    #[test]
    fn test_for_upload_keeps_last_extension_only() {
        let path = MediaPath::for_upload(MediaKind::Clients, "lucy.headshot.webp", at_millis(5));
        assert_eq!(path.as_str(), "clients/5.webp");
    }

    #[test]
    fn test_for_upload_without_extension() {
        let path = MediaPath::for_upload(MediaKind::Clients, "headshot", at_millis(5));
        assert_eq!(path.as_str(), "clients/5.bin");
        assert_eq!(path.content_type(), "application/octet-stream");
    }

    #[test]
    fn test_for_upload_strips_traversal() {
        let path = MediaPath::for_upload(MediaKind::Projects, "evil./../../etc", at_millis(9));
        assert_eq!(path.as_str(), "projects/9.etc");

        let path = MediaPath::for_upload(MediaKind::Projects, "trailing.", at_millis(9));
        assert_eq!(path.as_str(), "projects/9.bin");
    }
}
