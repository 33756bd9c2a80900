//! Input and output file handling.

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Read a Markdown file, reporting a missing file as [`Error::FileNotFound`].
pub fn read_input<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }
    log::info!("Reading {}", path.display());
    Ok(fs::read_to_string(path)?)
}

/// Write transformed content to a file.
pub fn write_output<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    log::info!("Writing {} bytes to {}", content.len(), path.display());
    fs::write(path, content)?;
    Ok(())
}

/// Insert `suffix` between the file stem and its extension.
///
/// # Example
///
/// ```
/// use mdimage::formatted_output_path;
/// use std::path::Path;
///
/// let path = formatted_output_path(Path::new("docs/notes.md"), "_formatted");
/// assert_eq!(path, Path::new("docs/notes_formatted.md"));
/// ```
pub fn formatted_output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let file_name = match input.extension() {
        Some(ext) => format!("{}{}.{}", stem, suffix, ext.to_string_lossy()),
        None => format!("{}{}", stem, suffix),
    };
    input.with_file_name(file_name)
}
