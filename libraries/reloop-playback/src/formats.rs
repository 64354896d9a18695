//! Supported audio format allow-list

use std::path::Path;

/// Extensions accepted when no configuration overrides them
pub const DEFAULT_EXTENSIONS: &[&str] = &["xm", "wav", "ogg", "mp3", "qoa", "mod"];

/// Fixed allow-list of file extensions
///
/// Matching is exact and case-sensitive: `song.MP3` is rejected when only
/// `mp3` is listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedFormats {
    extensions: Vec<String>,
}

impl SupportedFormats {
    /// Build from configured extensions; a leading `.` is accepted and stripped
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim_start_matches('.').to_string())
            .filter(|ext| !ext.is_empty())
            .collect();
        Self { extensions }
    }

    /// Check whether a path carries a supported extension
    pub fn is_supported(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|allowed| allowed == ext))
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }
}

impl Default for SupportedFormats {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSIONS)
    }
}
