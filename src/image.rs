//! Inline image references extracted from Markdown text.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// An inline image found in Markdown: `![alt](src "title")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Alt text between the brackets
    pub alt: String,

    /// Source URL, verbatim
    pub src: String,

    /// Optional quoted title
    pub title: Option<String>,

    /// Byte span of the whole match in the scanned text
    #[serde(skip)]
    pub span: Range<usize>,
}

impl ImageRef {
    /// Create an image reference without a title.
    pub fn new(alt: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            alt: alt.into(),
            src: src.into(),
            title: None,
            span: 0..0,
        }
    }

    /// Set the title. An empty title is treated as no title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        self.title = if title.is_empty() { None } else { Some(title) };
        self
    }

    /// Set the byte span of the match.
    pub fn with_span(mut self, span: Range<usize>) -> Self {
        self.span = span;
        self
    }

    /// Inline Markdown form, `![alt](src)` or `![alt](src "title")`.
    pub fn to_inline(&self) -> String {
        match &self.title {
            Some(title) => format!("![{}]({} \"{}\")", self.alt, self.src, title),
            None => format!("![{}]({})", self.alt, self.src),
        }
    }

    /// Reference-style citation, `![alt][id]`.
    pub fn to_reference(&self, id: &str) -> String {
        format!("![{}][{}]", self.alt, id)
    }

    /// Whether the image has alt text.
    pub fn has_alt(&self) -> bool {
        !self.alt.is_empty()
    }
}
