//! # mdimage
//!
//! Rewrite image references inside Markdown documents.
//!
//! Two independent transformations are provided:
//!
//! - **Alignment formatter**: rewrites every line holding an image tag into a
//!   canonical `<p align="...">` wrapper, keeping the alignment of an
//!   existing wrapper.
//! - **Reference converter**: replaces inline images with reference-style
//!   citations and appends a block of link definitions.
//!
//! ## Quick Start
//!
//! ```
//! use mdimage::{convert_images_to_link_definitions, format_images};
//!
//! fn main() -> mdimage::Result<()> {
//!     let formatted = format_images("![Logo](logo.png)\n", "center")?;
//!     assert_eq!(formatted.content, "<p align=\"left\">![Logo](logo.png)</p>\n");
//!
//!     let converted = convert_images_to_link_definitions("![Logo](logo.png)");
//!     assert_eq!(converted.content, "![Logo][logo]");
//!     Ok(())
//! }
//! ```

pub mod align;
pub mod error;
pub mod image;
pub mod output;
pub mod reference;
pub mod result;

// Re-export commonly used types
pub use align::{format_images, Alignment, AlignmentFormatter, FormatOptions};
pub use error::{Error, Result};
pub use image::ImageRef;
pub use output::{formatted_output_path, read_input, write_output};
pub use reference::{
    convert_images_to_link_definitions, sanitize_ref_id, ReferenceConverter, ReferenceDefinition,
    ReferenceOptions,
};
pub use result::{ConversionResult, ConversionStats, FormatResult, FormatStats};

use std::path::{Path, PathBuf};

/// Format the images of a Markdown file and write the derived output file.
///
/// The alignment name is validated before the file is touched. The output
/// is written next to the input with the `_formatted` suffix, and only
/// after the whole document was formatted.
///
/// # Returns
///
/// The output path and the format result.
///
/// # Example
///
/// ```no_run
/// use mdimage::format_file;
///
/// let (output, result) = format_file("README.md", "center").unwrap();
/// println!("{} images -> {}", result.stats.images_formatted, output.display());
/// ```
pub fn format_file<P: AsRef<Path>>(path: P, alignment: &str) -> Result<(PathBuf, FormatResult)> {
    let alignment: Alignment = alignment.parse()?;
    format_file_with_options(path, FormatOptions::new().with_alignment(alignment))
}

/// Format the images of a Markdown file with custom options.
pub fn format_file_with_options<P: AsRef<Path>>(
    path: P,
    options: FormatOptions,
) -> Result<(PathBuf, FormatResult)> {
    let path = path.as_ref();
    let text = read_input(path)?;

    let output_path = formatted_output_path(path, &options.output_suffix);
    let result = AlignmentFormatter::new(options).format(&text);
    write_output(&output_path, &result.content)?;

    Ok((output_path, result))
}

/// Convert the inline images of a Markdown file.
///
/// Nothing is written; use [`ConversionResult::render`] to obtain the
/// output document.
///
/// # Example
///
/// ```no_run
/// use mdimage::convert_file;
///
/// let result = convert_file("README.md").unwrap();
/// std::fs::write("README.refs.md", result.render()).unwrap();
/// ```
pub fn convert_file<P: AsRef<Path>>(path: P) -> Result<ConversionResult> {
    convert_file_with_options(path, ReferenceOptions::default())
}

/// Convert the inline images of a Markdown file with custom options.
pub fn convert_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ReferenceOptions,
) -> Result<ConversionResult> {
    let text = read_input(path)?;
    Ok(ReferenceConverter::new(options).convert(&text))
}
