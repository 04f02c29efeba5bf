//! File system utilities.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Writes content to a file atomically using a temp file and rename.
///
/// The temp file is created next to the target so the rename stays on one
/// filesystem. A run that fails part way leaves any previous output intact.
///
/// # Errors
///
/// Returns an error if the temp file cannot be written or renamed.
pub fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path.file_name().unwrap_or_default().to_string_lossy();
    let temp_path = parent.join(format!(".{file_name}.tmp"));

    fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write {}", temp_path.display()))?;

    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}

/// Appends `line` to a file, creating it if needed.
///
/// The whole line goes out in one `write_all` on an append-mode handle, so
/// entries from concurrent runs do not interleave within a line.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or written.
pub fn append_line(path: &Path, line: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let mut entry = String::with_capacity(line.len() + 1);
    entry.push_str(line);
    if !entry.ends_with('\n') {
        entry.push('\n');
    }

    file.write_all(entry.as_bytes())
        .with_context(|| format!("Failed to append to {}", path.display()))?;

    Ok(())
}
