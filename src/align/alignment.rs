//! Alignment wrappers around image tags.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Horizontal alignment of a wrapped image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// `<p align="left">`
    Left,
    /// `<p align="center">`
    #[default]
    Center,
    /// `<p align="right">`
    Right,
}

impl Alignment {
    /// All alignments, in the order they are offered to users.
    pub const ALL: [Alignment; 3] = [Alignment::Left, Alignment::Center, Alignment::Right];

    /// Lowercase name used on the command line and in the wrapper.
    pub fn as_str(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }

    /// Opening tag of the wrapper; its presence in a line marks the alignment.
    pub fn marker(&self) -> &'static str {
        match self {
            Alignment::Left => r#"<p align="left">"#,
            Alignment::Center => r#"<p align="center">"#,
            Alignment::Right => r#"<p align="right">"#,
        }
    }

    /// Render the wrapper template around an image.
    pub fn wrap(&self, alt: &str, src: &str) -> String {
        format!("{}![{}]({})</p>", self.marker(), alt, src)
    }

    /// Derive the alignment of an existing line from its wrapper markers.
    ///
    /// `center` wins over `right`; a line without either marker is `left`.
    pub fn detect(line: &str) -> Self {
        if line.contains(Alignment::Center.marker()) {
            Alignment::Center
        } else if line.contains(Alignment::Right.marker()) {
            Alignment::Right
        } else {
            Alignment::Left
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Alignment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Alignment::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| Error::InvalidAlignment(s.to_string()))
    }
}
