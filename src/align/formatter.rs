//! Line-by-line alignment formatter.

use std::borrow::Cow;

use regex::Regex;

use super::{Alignment, FormatOptions};
use crate::error::Result;
use crate::image::ImageRef;
use crate::result::{FormatResult, FormatStats};

/// Image tag pattern: `![alt](src)`. The source group keeps any title verbatim.
const IMAGE_TAG_PATTERN: &str = r"!\[(.*?)\]\((.*?)\)";

/// Format every image in `text`, validating the alignment name first.
pub fn format_images(text: &str, alignment: &str) -> Result<FormatResult> {
    let alignment: Alignment = alignment.parse()?;
    let formatter = AlignmentFormatter::new(FormatOptions::new().with_alignment(alignment));
    Ok(formatter.format(text))
}

/// Rewrites image lines into canonical alignment wrappers.
pub struct AlignmentFormatter {
    options: FormatOptions,
    image_regex: Regex,
}

impl AlignmentFormatter {
    /// Create a new formatter with the given options.
    pub fn new(options: FormatOptions) -> Self {
        Self {
            options,
            image_regex: Regex::new(IMAGE_TAG_PATTERN).unwrap(),
        }
    }

    /// The formatter options.
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Extract the first image tag of a line.
    pub fn parse_image_tag(&self, line: &str) -> Option<ImageRef> {
        let caps = self.image_regex.captures(line)?;
        let whole = caps.get(0)?;
        Some(ImageRef::new(&caps[1], &caps[2]).with_span(whole.range()))
    }

    /// Format a single line. The line may carry its terminator.
    pub fn format_line<'a>(&self, line: &'a str) -> Cow<'a, str> {
        if line.trim().is_empty() {
            return Cow::Borrowed(line);
        }

        let Some(image) = self.parse_image_tag(line) else {
            return Cow::Borrowed(line);
        };

        let alignment = Alignment::detect(line);
        let terminator = if line.ends_with("\r\n") { "\r\n" } else { "\n" };

        Cow::Owned(format!(
            "{}{}",
            alignment.wrap(&image.alt, &image.src),
            terminator
        ))
    }

    /// Format a whole document.
    pub fn format(&self, text: &str) -> FormatResult {
        let mut output = String::with_capacity(text.len());
        let mut stats = FormatStats::default();

        for (index, line) in text.split_inclusive('\n').enumerate() {
            stats.lines += 1;

            let formatted = self.format_line(line);
            if let Cow::Owned(_) = formatted {
                stats.images_formatted += 1;

                let extra = self.image_regex.find_iter(line).count().saturating_sub(1);
                if extra > 0 {
                    log::warn!(
                        "Line {}: {} additional image tag(s) dropped",
                        index + 1,
                        extra
                    );
                    stats.extra_images_dropped += extra;
                }
                log::debug!("Line {}: {}", index + 1, formatted.trim_end());
            }

            output.push_str(&formatted);
        }

        FormatResult::new(output, self.options.default_alignment, stats)
    }
}

impl Default for AlignmentFormatter {
    fn default() -> Self {
        Self::new(FormatOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_parse_image_tag() {
        let formatter = AlignmentFormatter::default();
        let image = formatter.parse_image_tag("see ![Logo](img/logo.png) here").unwrap();
        assert_eq!(image.alt, "Logo");
        assert_eq!(image.src, "img/logo.png");
        assert_eq!(image.span, 4..25);

        assert!(formatter.parse_image_tag("no image").is_none());
    }

    #[test]
    fn test_title_stays_in_source() {
        let formatter = AlignmentFormatter::default();
        let line = formatter.format_line("![a](b.png \"t\")\n");
        assert_eq!(line, "<p align=\"left\">![a](b.png \"t\")</p>\n");
    }

    #[test]
    fn test_passthrough() {
        let formatter = AlignmentFormatter::default();
        assert!(matches!(formatter.format_line("# Title\n"), Cow::Borrowed(_)));
        assert_eq!(formatter.format_line("   \n"), "   \n");
        assert_eq!(formatter.format_line("\n"), "\n");
        assert_eq!(formatter.format_line("plain"), "plain");
    }

    #[test]
    fn test_unwrapped_is_left() {
        let formatter = AlignmentFormatter::default();
        assert_eq!(
            formatter.format_line("![Cat](cat.png)\n"),
            "<p align=\"left\">![Cat](cat.png)</p>\n"
        );
    }

    #[test]
    fn test_existing_wrapper_kept() {
        let formatter = AlignmentFormatter::default();
        assert_eq!(
            formatter.format_line("<p align=\"right\">![Cat](cat.png)</p>\n"),
            "<p align=\"right\">![Cat](cat.png)</p>\n"
        );
        assert_eq!(
            formatter.format_line("<p align=\"center\">  ![Cat](cat.png)  </p>"),
            "<p align=\"center\">![Cat](cat.png)</p>\n"
        );
    }

    #[test]
    fn test_first_tag_only() {
        let formatter = AlignmentFormatter::default();
        let result = formatter.format("Intro ![a](a.png) and ![b](b.png)\n");
        assert_eq!(result.content, "<p align=\"left\">![a](a.png)</p>\n");
        assert_eq!(result.stats.images_formatted, 1);
        assert_eq!(result.stats.extra_images_dropped, 1);
    }

    #[test]
    fn test_crlf_terminator() {
        let formatter = AlignmentFormatter::default();
        assert_eq!(
            formatter.format_line("![a](a.png)\r\n"),
            "<p align=\"left\">![a](a.png)</p>\r\n"
        );
    }

    #[test]
    fn test_format_images_rejects_invalid_alignment() {
        let result = format_images("![a](a.png)\n", "middle");
        assert!(matches!(result, Err(Error::InvalidAlignment(_))));
    }

    #[test]
    fn test_format_empty_text() {
        let result = AlignmentFormatter::default().format("");
        assert_eq!(result.content, "");
        assert_eq!(result.stats, FormatStats::default());
    }
}
