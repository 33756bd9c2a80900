//! Alignment formatter: normalizes `<p align="...">` wrappers around images.

mod alignment;
mod formatter;
mod options;

pub use alignment::Alignment;
pub use formatter::{format_images, AlignmentFormatter};
pub use options::{FormatOptions, DEFAULT_OUTPUT_SUFFIX};
