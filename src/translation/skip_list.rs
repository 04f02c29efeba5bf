//! Per-language word skip lists for the word-by-word gloss.

use regex::Regex;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Directory (inside the resources directory) holding `<lang>.txt` lists.
pub const SKIP_LIST_DIR: &str = "word_skip_lists";

/// Regular expressions matched against whole cleaned words.
///
/// A pattern `the` skips `the` but not `theory`.
#[derive(Debug, Clone, Default)]
pub struct SkipList {
    patterns: Vec<Regex>,
}

impl SkipList {
    /// Parses one pattern per line; blank lines are ignored.
    pub fn parse(text: &str, path: &Path) -> Result<Self> {
        let patterns = text
            .lines()
            .enumerate()
            .map(|(index, line)| (index + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty())
            .map(|(line_number, pattern)| {
                Regex::new(&format!("^(?:{pattern})$")).map_err(|source| Error::SkipPattern {
                    path: path.to_path_buf(),
                    line: line_number,
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Path of the list for `language` under `resources`.
    pub fn path_for(resources: &Path, language: &str) -> PathBuf {
        resources.join(SKIP_LIST_DIR).join(format!("{language}.txt"))
    }

    /// Loads the list for `language`.
    ///
    /// # Errors
    ///
    /// [`Error::MissingResource`] if no list exists for the language,
    /// [`Error::SkipPattern`] if a line is not a valid regular expression.
    pub fn load(resources: &Path, language: &str) -> Result<Self> {
        let path = Self::path_for(resources, language);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(Error::MissingResource { path });
            }
            Err(source) => return Err(Error::Io { path, source }),
        };
        Self::parse(&text, &path)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Whether `word` is fully matched by any pattern.
    pub fn matches(&self, word: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.is_match(word))
    }
}
