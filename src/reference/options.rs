//! Reference converter options.

use super::sanitize::DEFAULT_ID_PREFIX;

/// Default prefix for identifiers of images without alt text.
pub const DEFAULT_POSITIONAL_PREFIX: &str = "image-";

/// Default comment line placed above the definitions block.
pub const DEFAULT_DEFINITIONS_HEADER: &str = "<!-- Image Link Definitions -->";

/// Options for the reference converter.
#[derive(Debug, Clone)]
pub struct ReferenceOptions {
    /// Prefix for identifiers that do not start with a letter
    pub id_prefix: String,

    /// Prefix for positional identifiers (`image-<n>`)
    pub positional_prefix: String,

    /// Comment line placed above the definitions
    pub definitions_header: String,
}

impl ReferenceOptions {
    /// Create new reference options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the identifier prefix.
    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    /// Set the positional identifier prefix.
    pub fn with_positional_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.positional_prefix = prefix.into();
        self
    }

    /// Set the definitions header line.
    pub fn with_definitions_header(mut self, header: impl Into<String>) -> Self {
        self.definitions_header = header.into();
        self
    }
}

impl Default for ReferenceOptions {
    fn default() -> Self {
        Self {
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
            positional_prefix: DEFAULT_POSITIONAL_PREFIX.to_string(),
            definitions_header: DEFAULT_DEFINITIONS_HEADER.to_string(),
        }
    }
}
