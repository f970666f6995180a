//! Host-supplied configuration for the composer widget.
//!
//! Embedding pages deliver these options as JSON, so the serde derives accept
//! the camelCase field names a JavaScript host would write.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

/// Flags controlling which auxiliary controls are rendered.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct UploadsConfig {
    /// Show the image upload button next to the field.
    pub is_image_upload_allowed: bool,
    /// Show the microphone button next to the field.
    pub is_speech_to_text_enabled: bool,
}

/// Character limit policy for the input field.
///
/// Lengths are counted in Unicode scalar values, not bytes, so a multi-byte
/// character costs one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharLimit {
    /// Maximum accepted length; `None` disables the limit entirely.
    pub max_chars: Option<usize>,
    /// Host override for the warning shown while an edit is rejected.
    pub warning_message: Option<String>,
}

impl CharLimit {
    /// Limit that accepts every edit.
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// Whether `len` characters fit within the limit.
    pub fn allows(&self, len: usize) -> bool {
        self.max_chars.is_none_or(|max| len <= max)
    }

    /// Warning shown while an over-limit edit is being rejected.
    pub fn warning_text(&self, max: usize) -> String {
        self.warning_message
            .clone()
            .unwrap_or_else(|| format!("Message exceeds the {max} character limit."))
    }
}
