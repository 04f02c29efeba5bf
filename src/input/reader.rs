use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub struct InputReader;

impl InputReader {
    /// Reads a UTF-8 document of any size.
    pub fn read(path: &Path) -> Result<String> {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))
    }
}
