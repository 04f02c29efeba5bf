//! Language support table: which codes each provider and polyglossia accept.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::config::{Provider, WriteMode};
use crate::error::{Direction, Error, Result};

/// File name of the language support table inside the resources directory.
pub const LANG_SUPPORT_FILE: &str = "lang_support.csv";

/// Column holding the polyglossia language/environment name.
pub const TYPESETTING_COLUMN: &str = "polyglossia";

const BUILTIN_TABLE: &str = include_str!("../../resources/lang_support.csv");

/// Immutable lookup from language code to per-column capability identifiers.
///
/// The table is `;`-separated. The first row names the columns (its first
/// cell belongs to the code column and is ignored); every further row starts
/// with a language code. An empty cell means "unsupported".
#[derive(Debug, Clone)]
pub struct LanguageSupport {
    columns: Vec<String>,
    entries: BTreeMap<String, Vec<Option<String>>>,
}

impl LanguageSupport {
    pub fn parse(text: &str) -> Result<Self> {
        let mut rows = text.lines().filter(|line| !line.trim().is_empty());

        let header = rows
            .next()
            .ok_or_else(|| Error::LanguageTable("missing header row".to_string()))?;
        let columns: Vec<String> = header
            .split(';')
            .skip(1)
            .map(|name| name.trim().to_string())
            .collect();

        if columns.is_empty() {
            return Err(Error::LanguageTable(
                "header row has no provider columns".to_string(),
            ));
        }

        let mut entries = BTreeMap::new();
        for row in rows {
            let mut cells = row.split(';').map(str::trim);
            let code = cells.next().unwrap_or_default();
            if code.is_empty() {
                return Err(Error::LanguageTable(format!("row without code: \"{row}\"")));
            }

            let mut values: Vec<Option<String>> = cells
                .map(|cell| (!cell.is_empty()).then(|| cell.to_string()))
                .collect();
            if values.len() > columns.len() {
                return Err(Error::LanguageTable(format!(
                    "row \"{code}\" has {} cells, header has {}",
                    values.len(),
                    columns.len()
                )));
            }
            values.resize(columns.len(), None);

            entries.insert(code.to_string(), values);
        }

        Ok(Self { columns, entries })
    }

    /// The table compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN_TABLE)
    }

    /// Loads `lang_support.csv` from `resources`, falling back to the built-in table.
    pub fn load(resources: &Path) -> Result<Self> {
        let path = resources.join(LANG_SUPPORT_FILE);
        if !path.exists() {
            return Self::builtin();
        }

        let text = fs::read_to_string(&path).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Language codes in sorted order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    /// Capability identifier of `code` in `column`, if supported.
    pub fn capability_id(&self, code: &str, column: &str) -> Option<&str> {
        let index = self.columns.iter().position(|c| c == column)?;
        self.entries.get(code)?.get(index)?.as_deref()
    }

    pub fn is_supported(&self, code: &str, provider: Provider) -> bool {
        self.capability_id(code, self.provider_column(provider))
            .is_some()
    }

    /// Column consulted for `provider`.
    ///
    /// `google_cloud` shares Google's language list unless the table carries
    /// a dedicated column.
    pub fn provider_column(&self, provider: Provider) -> &'static str {
        match provider {
            Provider::GoogleCloud if !self.columns.iter().any(|c| c == "google_cloud") => {
                Provider::Google.as_str()
            }
            _ => provider.as_str(),
        }
    }

    /// Code to send to `provider` for the table code `code`.
    pub fn provider_code<'a>(&'a self, code: &'a str, provider: Provider) -> &'a str {
        self.capability_id(code, self.provider_column(provider))
            .unwrap_or(code)
    }

    /// Maps a code reported by `provider` back to the table's code.
    pub fn table_code(&self, provider: Provider, reported: &str) -> Option<&str> {
        if let Some((code, _)) = self.entries.get_key_value(reported) {
            return Some(code.as_str());
        }
        let column = self.provider_column(provider);
        self.codes()
            .find(|code| self.capability_id(code, column) == Some(reported))
    }

    /// Validates that `code` can be translated by `provider`.
    ///
    /// Returns a hyphenation warning when writing LaTeX for a language
    /// polyglossia does not know.
    pub fn check(
        &self,
        code: &str,
        provider: Provider,
        direction: Direction,
        write_mode: WriteMode,
    ) -> Result<Option<String>> {
        if !self.contains(code) {
            return Err(Error::UnsupportedLanguage {
                direction,
                lang: code.to_string(),
                provider: None,
            });
        }

        if !self.is_supported(code, provider) {
            return Err(Error::UnsupportedLanguage {
                direction,
                lang: code.to_string(),
                provider: Some(provider.to_string()),
            });
        }

        if write_mode == WriteMode::Tex && self.capability_id(code, TYPESETTING_COLUMN).is_none() {
            return Ok(Some(format!(
                "{direction} language \"{code}\" is not supported by polyglossia. \
                 When using LaTeX, hyphenation may be incorrect or missing."
            )));
        }

        Ok(None)
    }
}
