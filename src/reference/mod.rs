//! Reference converter: turns inline images into reference-style definitions.

mod converter;
mod options;
mod sanitize;

pub use converter::{convert_images_to_link_definitions, ReferenceConverter, ReferenceDefinition};
pub use options::{ReferenceOptions, DEFAULT_DEFINITIONS_HEADER, DEFAULT_POSITIONAL_PREFIX};
pub use sanitize::{sanitize_ref_id, sanitize_ref_id_with_prefix, DEFAULT_ID_PREFIX};
