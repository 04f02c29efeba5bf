//! Error taxonomy for configuration, language support and translation.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which side of the translation a language code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Source,
    Target,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => f.write_str("source"),
            Self::Target => f.write_str("target"),
        }
    }
}

/// Errors raised by the translation pipeline.
///
/// Everything except [`Error::MissingResource`] aborts the run.
#[derive(Debug, Error)]
pub enum Error {
    /// A config line without `=`.
    #[error("syntax error in config line {line}: \"{content}\"")]
    ConfigSyntax { line: usize, content: String },

    #[error("key \"{key}\" unknown{}", at_line(.line))]
    UnknownKey { key: String, line: Option<usize> },

    #[error(
        "option \"{value}\" unknown for key \"{key}\"{} (expected one of: {expected})",
        at_line(.line)
    )]
    InvalidOption {
        key: String,
        value: String,
        expected: String,
        line: Option<usize>,
    },

    #[error("{direction} language \"{lang}\" is not supported{}", by_provider(.provider))]
    UnsupportedLanguage {
        direction: Direction,
        lang: String,
        provider: Option<String>,
    },

    /// Opaque failure reported by (or while talking to) a translation backend.
    #[error("translator provider \"{provider}\" failed: {message}")]
    Provider { provider: String, message: String },

    #[error("provider \"{provider}\" requires the {var} environment variable")]
    MissingCredential { provider: String, var: String },

    /// An optional resource file was not found. Callers downgrade this to a warning.
    #[error("resource not found: {}", .path.display())]
    MissingResource { path: PathBuf },

    #[error("invalid word skip pattern in {} line {line}: {source}", .path.display())]
    SkipPattern {
        path: PathBuf,
        line: usize,
        #[source]
        source: regex::Error,
    },

    #[error("malformed language support table: {0}")]
    LanguageTable(String),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn provider(provider: &str, message: impl fmt::Display) -> Self {
        Self::Provider {
            provider: provider.to_string(),
            message: message.to_string(),
        }
    }

    /// Process exit status (sysexits) for this error.
    pub const fn exit_code(&self) -> exitcode::ExitCode {
        match self {
            Self::ConfigSyntax { .. }
            | Self::UnknownKey { .. }
            | Self::InvalidOption { .. }
            | Self::MissingCredential { .. } => exitcode::CONFIG,
            Self::UnsupportedLanguage { .. }
            | Self::SkipPattern { .. }
            | Self::LanguageTable(_) => exitcode::DATAERR,
            Self::Provider { .. } => exitcode::UNAVAILABLE,
            Self::MissingResource { .. } | Self::Io { .. } => exitcode::NOINPUT,
        }
    }
}

#[allow(clippy::ref_option)]
fn at_line(line: &Option<usize>) -> String {
    line.map_or_else(String::new, |line| format!(" in config line {line}"))
}

#[allow(clippy::ref_option)]
fn by_provider(provider: &Option<String>) -> String {
    provider.as_deref().map_or_else(String::new, |provider| {
        format!(" by translator provider \"{provider}\"")
    })
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Picks the exit status for an application error.
///
/// Walks the context chain looking for a domain [`Error`] or an I/O error;
/// anything else is an internal failure.
pub fn exit_code(err: &anyhow::Error) -> exitcode::ExitCode {
    for cause in err.chain() {
        if let Some(domain) = cause.downcast_ref::<Error>() {
            return domain.exit_code();
        }
        if cause.downcast_ref::<std::io::Error>().is_some() {
            return exitcode::NOINPUT;
        }
    }
    exitcode::SOFTWARE
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_unsupported_language_messages() {
        let absent = Error::UnsupportedLanguage {
            direction: Direction::Source,
            lang: "xx".to_string(),
            provider: None,
        };
        assert_eq!(absent.to_string(), "source language \"xx\" is not supported");

        let by_bing = Error::UnsupportedLanguage {
            direction: Direction::Target,
            lang: "la".to_string(),
            provider: Some("bing".to_string()),
        };
        assert_eq!(
            by_bing.to_string(),
            "target language \"la\" is not supported by translator provider \"bing\""
        );
    }

    #[test]
    fn test_invalid_option_message_names_line() {
        let err = Error::InvalidOption {
            key: "write_mode".to_string(),
            value: "pdf".to_string(),
            expected: "txt, tex".to_string(),
            line: Some(4),
        };
        let message = err.to_string();
        assert!(message.contains("\"pdf\""));
        assert!(message.contains("config line 4"));
        assert!(message.contains("txt, tex"));
    }

    #[test]
    fn test_exit_code_through_context() {
        let err = Err::<(), _>(Error::UnknownKey {
            key: "foo".to_string(),
            line: Some(1),
        })
        .context("Failed to load configuration")
        .unwrap_err();
        assert_eq!(exit_code(&err), exitcode::CONFIG);
    }

    #[test]
    fn test_exit_code_for_provider_and_internal_errors() {
        let provider = anyhow::Error::new(Error::provider("google", "HTTP 503"));
        assert_eq!(exit_code(&provider), exitcode::UNAVAILABLE);

        let other = anyhow::anyhow!("something else");
        assert_eq!(exit_code(&other), exitcode::SOFTWARE);
    }
}
