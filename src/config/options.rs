use std::fmt;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Translation backend selected by `translator_provider`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Provider {
    #[default]
    Google,
    GoogleCloud,
    Bing,
}

impl Provider {
    pub const ALL: [Self; 3] = [Self::Google, Self::GoogleCloud, Self::Bing];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::GoogleCloud => "google_cloud",
            Self::Bing => "bing",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output format selected by `write_mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    #[default]
    Txt,
    Tex,
}

impl WriteMode {
    pub const ALL: [Self; 2] = [Self::Txt, Self::Tex];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Tex => "tex",
        }
    }

    /// File extension of the rendered document.
    pub const fn extension(self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for WriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source language: either detected by the provider or given explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SourceLanguage {
    #[default]
    Auto,
    Code(String),
}

impl SourceLanguage {
    pub const AUTO: &'static str = "auto";

    pub fn parse(value: &str) -> Self {
        if value == Self::AUTO {
            Self::Auto
        } else {
            Self::Code(value.to_string())
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Auto => None,
            Self::Code(code) => Some(code),
        }
    }
}

impl fmt::Display for SourceLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code().unwrap_or(Self::AUTO))
    }
}

/// Recognized configuration keys, in the order they are displayed.
pub const KEYS: [&str; 10] = [
    "output_dir",
    "translator_provider",
    "source_lang",
    "target_lang",
    "verbose",
    "write_mode",
    "tex_build_dir",
    "learning_method",
    "skip_words",
    "track_translated_chars",
];

const BOOLEANS: [(&str, bool); 2] = [("true", true), ("false", false)];

/// Validated run options.
///
/// Built once per run from `config.txt` (plus command-line overrides) and
/// passed by reference to every component that needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Config {
    pub output_dir: PathBuf,
    pub provider: Provider,
    pub source_lang: SourceLanguage,
    pub target_lang: String,
    pub verbose: bool,
    pub write_mode: WriteMode,
    pub tex_build_dir: bool,
    pub learning_method: bool,
    pub skip_words: bool,
    pub track_translated_chars: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("./"),
            provider: Provider::Google,
            source_lang: SourceLanguage::Auto,
            target_lang: "en".to_string(),
            verbose: false,
            write_mode: WriteMode::Txt,
            tex_build_dir: false,
            learning_method: false,
            skip_words: false,
            track_translated_chars: false,
        }
    }
}

impl Config {
    /// Parses `key = value` lines.
    ///
    /// All whitespace is removed from a line before it is interpreted, so
    /// `target_lang = fr` and `target_lang=fr` are equivalent. Blank lines and
    /// lines starting with `#` are ignored. A later line overrides an earlier
    /// one; an empty value restores the default.
    pub fn parse(text: &str) -> Result<Self> {
        let mut config = Self::default();

        for (index, raw) in text.lines().enumerate() {
            let line_number = index + 1;
            let line: String = raw.split_whitespace().collect();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(Error::ConfigSyntax {
                    line: line_number,
                    content: raw.trim_end().to_string(),
                });
            };

            config.set(key, value, Some(line_number))?;
        }

        Ok(config)
    }

    /// Sets a single option, validating it against the key's legal values.
    ///
    /// `line` is the config file line the value came from, or `None` for
    /// values given on the command line.
    pub fn set(&mut self, key: &str, value: &str, line: Option<usize>) -> Result<()> {
        let defaults = Self::default();

        match key {
            "output_dir" => {
                self.output_dir = if value.is_empty() {
                    defaults.output_dir
                } else {
                    PathBuf::from(value)
                };
            }
            "translator_provider" => {
                let choices = Provider::ALL.map(|p| (p.as_str(), p));
                self.provider = choose(key, value, line, &choices)?.unwrap_or(defaults.provider);
            }
            "source_lang" => {
                self.source_lang = if value.is_empty() {
                    defaults.source_lang
                } else {
                    SourceLanguage::parse(value)
                };
            }
            "target_lang" => {
                self.target_lang = if value.is_empty() {
                    defaults.target_lang
                } else {
                    value.to_string()
                };
            }
            "verbose" => {
                self.verbose = choose(key, value, line, &BOOLEANS)?.unwrap_or(defaults.verbose);
            }
            "write_mode" => {
                let choices = WriteMode::ALL.map(|m| (m.as_str(), m));
                self.write_mode =
                    choose(key, value, line, &choices)?.unwrap_or(defaults.write_mode);
            }
            "tex_build_dir" => {
                self.tex_build_dir =
                    choose(key, value, line, &BOOLEANS)?.unwrap_or(defaults.tex_build_dir);
            }
            "learning_method" => {
                self.learning_method =
                    choose(key, value, line, &BOOLEANS)?.unwrap_or(defaults.learning_method);
            }
            "skip_words" => {
                self.skip_words =
                    choose(key, value, line, &BOOLEANS)?.unwrap_or(defaults.skip_words);
            }
            "track_translated_chars" => {
                self.track_translated_chars = choose(key, value, line, &BOOLEANS)?
                    .unwrap_or(defaults.track_translated_chars);
            }
            _ => {
                return Err(Error::UnknownKey {
                    key: key.to_string(),
                    line,
                });
            }
        }

        Ok(())
    }

    /// Returns the displayed value of a recognized key.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "output_dir" => self.output_dir.display().to_string(),
            "translator_provider" => self.provider.to_string(),
            "source_lang" => self.source_lang.to_string(),
            "target_lang" => self.target_lang.clone(),
            "verbose" => self.verbose.to_string(),
            "write_mode" => self.write_mode.to_string(),
            "tex_build_dir" => self.tex_build_dir.to_string(),
            "learning_method" => self.learning_method.to_string(),
            "skip_words" => self.skip_words.to_string(),
            "track_translated_chars" => self.track_translated_chars.to_string(),
            _ => return None,
        };
        Some(value)
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for key in KEYS {
            if let Some(value) = self.get(key) {
                writeln!(f, "  {key:24} = {value}")?;
            }
        }
        Ok(())
    }
}

/// Looks `value` up among `choices`; an empty value yields `None` (use the default).
fn choose<T: Copy>(
    key: &str,
    value: &str,
    line: Option<usize>,
    choices: &[(&str, T)],
) -> Result<Option<T>> {
    if value.is_empty() {
        return Ok(None);
    }

    choices
        .iter()
        .find(|(name, _)| *name == value)
        .map(|(_, choice)| Some(*choice))
        .ok_or_else(|| Error::InvalidOption {
            key: key.to_string(),
            value: value.to_string(),
            expected: choices
                .iter()
                .map(|(name, _)| *name)
                .collect::<Vec<_>>()
                .join(", "),
            line,
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_yields_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.output_dir, PathBuf::from("./"));
        assert_eq!(config.provider, Provider::Google);
        assert_eq!(config.source_lang, SourceLanguage::Auto);
        assert_eq!(config.target_lang, "en");
        assert!(!config.verbose);
        assert_eq!(config.write_mode, WriteMode::Txt);
        assert!(!config.tex_build_dir);
        assert!(!config.learning_method);
        assert!(!config.skip_words);
        assert!(!config.track_translated_chars);
    }

    #[test]
    fn test_parse_full_file() {
        let text = "\
# translation settings
output_dir = out/
translator_provider = bing
source_lang = de
  target_lang   =   fr
verbose = true

write_mode = tex
tex_build_dir = true
learning_method = true
skip_words = true
track_translated_chars = true
";
        let config = Config::parse(text).unwrap();

        assert_eq!(config.output_dir, PathBuf::from("out/"));
        assert_eq!(config.provider, Provider::Bing);
        assert_eq!(config.source_lang, SourceLanguage::Code("de".to_string()));
        assert_eq!(config.target_lang, "fr");
        assert!(config.verbose);
        assert_eq!(config.write_mode, WriteMode::Tex);
        assert!(config.tex_build_dir);
        assert!(config.learning_method);
        assert!(config.skip_words);
        assert!(config.track_translated_chars);
    }

    #[test]
    fn test_empty_value_keeps_default() {
        let config = Config::parse("write_mode =\ntarget_lang=").unwrap();
        assert_eq!(config.write_mode, WriteMode::Txt);
        assert_eq!(config.target_lang, "en");
    }

    #[test]
    fn test_empty_value_resets_earlier_line() {
        let config = Config::parse("write_mode = tex\nwrite_mode =").unwrap();
        assert_eq!(config.write_mode, WriteMode::Txt);
    }

    #[test]
    fn test_internal_whitespace_is_removed() {
        let config = Config::parse("translator_provider = google _cloud").unwrap();
        assert_eq!(config.provider, Provider::GoogleCloud);
    }

    #[test]
    fn test_comment_after_leading_whitespace() {
        let config = Config::parse("   # write_mode = pdf").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_value_split_on_first_equals() {
        let config = Config::parse("output_dir = a=b").unwrap();
        assert_eq!(config.output_dir, PathBuf::from("a=b"));
    }

    #[test]
    fn test_missing_equals_is_syntax_error() {
        match Config::parse("verbose\n").unwrap_err() {
            Error::ConfigSyntax { line, content } => {
                assert_eq!(line, 1);
                assert_eq!(content, "verbose");
            }
            other => panic!("expected ConfigSyntax, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_key() {
        match Config::parse("# header\nfoo = bar").unwrap_err() {
            Error::UnknownKey { key, line } => {
                assert_eq!(key, "foo");
                assert_eq!(line, Some(2));
            }
            other => panic!("expected UnknownKey, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_option() {
        match Config::parse("write_mode = pdf").unwrap_err() {
            Error::InvalidOption {
                key,
                value,
                expected,
                line,
            } => {
                assert_eq!(key, "write_mode");
                assert_eq!(value, "pdf");
                assert_eq!(expected, "txt, tex");
                assert_eq!(line, Some(1));
            }
            other => panic!("expected InvalidOption, got {other:?}"),
        }
    }

    #[test]
    fn test_booleans_are_case_sensitive() {
        assert!(matches!(
            Config::parse("verbose = True"),
            Err(Error::InvalidOption { .. })
        ));
    }

    #[test]
    fn test_languages_accept_any_value() {
        let config = Config::parse("source_lang = xx\ntarget_lang = yy").unwrap();
        assert_eq!(config.source_lang, SourceLanguage::Code("xx".to_string()));
        assert_eq!(config.target_lang, "yy");
    }

    #[test]
    fn test_display_lists_every_key() {
        let shown = Config::default().to_string();
        for key in KEYS {
            assert!(shown.contains(key), "missing {key}");
        }
        assert!(shown.contains("auto"));
    }
}
