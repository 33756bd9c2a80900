//! Alignment formatter options.

use super::Alignment;

/// Default suffix inserted before the extension of the output file.
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_formatted";

/// Options for the alignment formatter.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Alignment requested by the caller.
    ///
    /// Validated and recorded, but images without a wrapper are always
    /// rendered `left`; existing wrappers keep their own alignment.
    pub default_alignment: Alignment,

    /// Suffix for the derived output file name
    pub output_suffix: String,
}

impl FormatOptions {
    /// Create new format options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the requested default alignment.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.default_alignment = alignment;
        self
    }

    /// Set the output file suffix.
    pub fn with_output_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.output_suffix = suffix.into();
        self
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            default_alignment: Alignment::Center,
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
        }
    }
}
