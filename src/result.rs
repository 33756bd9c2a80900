//! Transformation results with statistics.

use crate::align::Alignment;
use crate::reference::ReferenceDefinition;
use serde::{Deserialize, Serialize};

/// Result of running the alignment formatter over a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatResult {
    /// The formatted text
    pub content: String,

    /// Alignment the caller asked for
    pub requested_alignment: Alignment,

    /// Formatting statistics
    pub stats: FormatStats,
}

impl FormatResult {
    /// Create a new format result.
    pub fn new(content: String, requested_alignment: Alignment, stats: FormatStats) -> Self {
        Self {
            content,
            requested_alignment,
            stats,
        }
    }

    /// Split the formatted text back into lines, terminators included.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.content.split_inclusive('\n')
    }
}

/// Statistics collected by the alignment formatter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatStats {
    /// Lines read
    pub lines: usize,

    /// Lines rewritten into a wrapper
    pub images_formatted: usize,

    /// Image tags dropped because they shared a line with an earlier tag
    pub extra_images_dropped: usize,
}

/// Result of converting inline images to reference-style definitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Document body with citations in place of inline images
    pub content: String,

    /// Definitions in creation order
    pub definitions: Vec<ReferenceDefinition>,

    /// Comment line placed above the definitions
    pub definitions_header: String,

    /// Conversion statistics
    pub stats: ConversionStats,
}

impl ConversionResult {
    /// Create a new conversion result.
    pub fn new(
        content: String,
        definitions: Vec<ReferenceDefinition>,
        definitions_header: impl Into<String>,
        stats: ConversionStats,
    ) -> Self {
        Self {
            content,
            definitions,
            definitions_header: definitions_header.into(),
            stats,
        }
    }

    /// The definitions in creation order.
    pub fn definitions(&self) -> &[ReferenceDefinition] {
        &self.definitions
    }

    /// The conversion statistics.
    pub fn stats(&self) -> &ConversionStats {
        &self.stats
    }

    /// Look up the definition line for an identifier.
    pub fn definition(&self, id: &str) -> Option<&ReferenceDefinition> {
        self.definitions.iter().find(|d| d.id == id)
    }

    /// Body followed by the definitions block.
    ///
    /// Without definitions the body is returned unchanged.
    pub fn render(&self) -> String {
        if self.definitions.is_empty() {
            return self.content.clone();
        }

        let mut output = String::with_capacity(
            self.content.len() + self.definitions.len() * 32 + self.definitions_header.len() + 3,
        );
        output.push_str(&self.content);
        output.push_str("\n\n");
        output.push_str(&self.definitions_header);
        output.push('\n');
        for (i, definition) in self.definitions.iter().enumerate() {
            if i > 0 {
                output.push('\n');
            }
            output.push_str(&definition.line);
        }
        output.push('\n');
        output
    }
}

/// Statistics collected by the reference converter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Inline images matched in the document
    pub images_found: usize,

    /// Inline images replaced by citations
    pub images_converted: usize,

    /// Unique definitions appended
    pub definitions_added: usize,
}

impl ConversionStats {
    /// Encode the statistics as pretty-printed JSON.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
