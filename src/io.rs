//! File access for table text

use std::fs;
use std::path::Path;

use tracing::debug;

/// Read a whole file into a string
pub fn read_text(path: &Path) -> std::io::Result<String> {
    let text = fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = text.len(), "read table text");
    Ok(text)
}

/// Write a string to a file, replacing any previous contents
pub fn write_text(path: &Path, text: &str) -> std::io::Result<()> {
    fs::write(path, text)?;
    debug!(path = %path.display(), bytes = text.len(), "wrote table text");
    Ok(())
}
