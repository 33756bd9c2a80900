//! Inline image to reference-style definition conversion.

use std::collections::{HashMap, HashSet};

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{sanitize::sanitize_ref_id_with_prefix, ReferenceOptions};
use crate::image::ImageRef;
use crate::result::{ConversionResult, ConversionStats};

/// Inline image pattern: `![alt](url)` or `![alt](url "title")`.
const INLINE_IMAGE_PATTERN: &str = r#"!\[(.*?)\]\((.*?)(?:\s+"(.*?)")?\)"#;

/// Convert inline images in `text` using default options.
///
/// # Example
///
/// ```
/// use mdimage::convert_images_to_link_definitions;
///
/// let result = convert_images_to_link_definitions(r#"![Cat Photo](cat.png "A cat")"#);
/// assert_eq!(result.content, "![Cat Photo][cat-photo]");
/// assert_eq!(result.definitions[0].line, r#"[cat-photo]: cat.png "A cat""#);
/// ```
pub fn convert_images_to_link_definitions(text: &str) -> ConversionResult {
    ReferenceConverter::default().convert(text)
}

/// A generated reference definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceDefinition {
    /// Unique identifier within the document
    pub id: String,

    /// Image URL
    pub url: String,

    /// Optional title
    pub title: Option<String>,

    /// Rendered definition line, `[id]: url "title"`
    pub line: String,
}

impl ReferenceDefinition {
    /// Create a definition for an image under the given identifier.
    pub fn new(id: impl Into<String>, image: &ImageRef) -> Self {
        let id = id.into();
        let line = match &image.title {
            Some(title) => format!("[{}]: {} \"{}\"", id, image.src, title),
            None => format!("[{}]: {}", id, image.src),
        };
        Self {
            id,
            url: image.src.clone(),
            title: image.title.clone(),
            line,
        }
    }
}

/// Converts inline images into citations plus a definitions block.
pub struct ReferenceConverter {
    options: ReferenceOptions,
    image_regex: Regex,
}

impl ReferenceConverter {
    /// Create a new converter with the given options.
    pub fn new(options: ReferenceOptions) -> Self {
        Self {
            options,
            image_regex: Regex::new(INLINE_IMAGE_PATTERN).unwrap(),
        }
    }

    /// The converter options.
    pub fn options(&self) -> &ReferenceOptions {
        &self.options
    }

    /// Find every inline image in scan order.
    pub fn scan(&self, text: &str) -> Vec<ImageRef> {
        self.image_regex
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let title = caps.get(3).map_or("", |m| m.as_str());
                Some(
                    ImageRef::new(&caps[1], &caps[2])
                        .with_title(title)
                        .with_span(whole.range()),
                )
            })
            .collect()
    }

    /// Convert a whole document.
    ///
    /// Each match is replaced at its own position. Byte-identical matches
    /// share the identifier assigned at their first occurrence.
    pub fn convert(&self, text: &str) -> ConversionResult {
        let images = self.scan(text);

        let mut output = String::with_capacity(text.len());
        let mut definitions: Vec<ReferenceDefinition> = Vec::new();
        let mut taken: HashSet<String> = HashSet::new();
        let mut seen: HashMap<&str, String> = HashMap::new();
        let mut stats = ConversionStats::default();
        let mut last = 0;

        for (index, image) in images.iter().enumerate() {
            stats.images_found += 1;
            let original = &text[image.span.clone()];

            let id = match seen.get(original) {
                Some(id) => id.clone(),
                None => {
                    let id = self.unique_id(self.candidate_id(image, index + 1), &taken);
                    log::debug!("Assigned [{}] to {}", id, original);

                    taken.insert(id.clone());
                    definitions.push(ReferenceDefinition::new(id.clone(), image));
                    seen.insert(original, id.clone());
                    id
                }
            };

            output.push_str(&text[last..image.span.start]);
            output.push_str(&image.to_reference(&id));
            last = image.span.end;
            stats.images_converted += 1;
        }
        output.push_str(&text[last..]);

        stats.definitions_added = definitions.len();

        ConversionResult::new(
            output,
            definitions,
            self.options.definitions_header.clone(),
            stats,
        )
    }

    /// Identifier derived from alt text, or positional when alt text is empty.
    fn candidate_id(&self, image: &ImageRef, position: usize) -> String {
        if image.has_alt() {
            sanitize_ref_id_with_prefix(&image.alt, &self.options.id_prefix)
        } else {
            format!("{}{}", self.options.positional_prefix, position)
        }
    }

    /// Append `-1`, `-2`, ... until the identifier is free.
    fn unique_id(&self, base: String, taken: &HashSet<String>) -> String {
        if !taken.contains(&base) {
            return base;
        }
        let mut counter = 1;
        loop {
            let candidate = format!("{}-{}", base, counter);
            if !taken.contains(&candidate) {
                return candidate;
            }
            counter += 1;
        }
    }
}

impl Default for ReferenceConverter {
    fn default() -> Self {
        Self::new(ReferenceOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_order_and_titles() {
        let converter = ReferenceConverter::default();
        let images = converter.scan("![a](a.png)\ntext ![b](b.png \"Bee\")");
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].alt, "a");
        assert_eq!(images[0].title, None);
        assert_eq!(images[1].src, "b.png");
        assert_eq!(images[1].title.as_deref(), Some("Bee"));
    }

    #[test]
    fn test_single_image_with_title() {
        let result = convert_images_to_link_definitions("![Cat Photo](cat.png \"A cat\")");
        assert_eq!(result.content, "![Cat Photo][cat-photo]");
        assert_eq!(result.definitions.len(), 1);
        assert_eq!(result.definitions[0].line, "[cat-photo]: cat.png \"A cat\"");
    }

    #[test]
    fn test_no_images() {
        let text = "# Title\n\nJust text, [a link](https://example.com).\n";
        let result = convert_images_to_link_definitions(text);
        assert_eq!(result.content, text);
        assert!(result.definitions.is_empty());
        assert_eq!(result.render(), text);
    }

    #[test]
    fn test_collision_suffix() {
        let result = convert_images_to_link_definitions("![x](a.png)\n![x](b.png)\n![x](c.png)\n");
        let ids: Vec<_> = result.definitions.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["x", "x-1", "x-2"]);
        assert_eq!(result.definition("x-1").unwrap().url, "b.png");
        assert_eq!(result.content, "![x][x]\n![x][x-1]\n![x][x-2]\n");
    }

    #[test]
    fn test_suffix_skips_taken_ids() {
        let result = convert_images_to_link_definitions("![x-1](a.png) ![x](b.png) ![x](c.png)");
        let ids: Vec<_> = result.definitions.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["x-1", "x", "x-2"]);
    }

    #[test]
    fn test_empty_alt_is_positional() {
        let result = convert_images_to_link_definitions("![a](a.png) ![](b.png) ![](c.png)");
        assert_eq!(result.content, "![a][a] ![][image-2] ![][image-3]");
    }

    #[test]
    fn test_identical_occurrences_share_id() {
        let text = "![x](a.png) and again ![x](a.png)";
        let result = convert_images_to_link_definitions(text);
        assert_eq!(result.content, "![x][x] and again ![x][x]");
        assert_eq!(result.definitions.len(), 1);
        assert_eq!(result.stats.images_found, 2);
        assert_eq!(result.stats.images_converted, 2);
        assert_eq!(result.stats.definitions_added, 1);
    }

    #[test]
    fn test_empty_title_dropped() {
        let result = convert_images_to_link_definitions("![a](a.png \"\")");
        assert_eq!(result.definitions[0].line, "[a]: a.png");
    }

    #[test]
    fn test_custom_options() {
        let converter = ReferenceConverter::new(
            ReferenceOptions::new()
                .with_id_prefix("fig-")
                .with_positional_prefix("figure-")
                .with_definitions_header("<!-- Figures -->"),
        );
        let result = converter.convert("![2024](a.png) ![](b.png)");
        assert_eq!(result.content, "![2024][fig-2024] ![][figure-2]");
        assert_eq!(
            result.render(),
            "![2024][fig-2024] ![][figure-2]\n\n<!-- Figures -->\n[fig-2024]: a.png\n[figure-2]: b.png\n"
        );
    }
}
