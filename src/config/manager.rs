use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::options::Config;
use crate::paths;
use crate::ui::Style;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "config.txt";

/// Command-line overrides applied on top of the config file.
///
/// Values are raw strings and go through the same validation as file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Source language override (`--from`).
    pub from: Option<String>,
    /// Target language override (`--to`).
    pub to: Option<String>,
    /// Provider override (`--provider`).
    pub provider: Option<String>,
    /// Write mode override (`--mode`).
    pub mode: Option<String>,
    /// Output directory override (`--output-dir`).
    pub output_dir: Option<String>,
    /// Forces learning mode on (`--learning`).
    pub learning: bool,
}

/// Merges command-line overrides into the configuration read from file.
///
/// Priority: command line, then config file, then built-in defaults.
///
/// # Errors
///
/// Returns an error if an override value is not legal for its key.
pub fn resolve_config(options: &ResolveOptions, file_config: Config) -> Result<Config> {
    let mut config = file_config;

    let overrides = [
        ("source_lang", options.from.as_deref()),
        ("target_lang", options.to.as_deref()),
        ("translator_provider", options.provider.as_deref()),
        ("write_mode", options.mode.as_deref()),
        ("output_dir", options.output_dir.as_deref()),
        ("learning_method", options.learning.then_some("true")),
    ];

    for (key, value) in overrides {
        if let Some(value) = value {
            config
                .set(key, value.trim(), None)
                .with_context(|| format!("Invalid command-line value for '{key}'"))?;
        }
    }

    Ok(config)
}

/// Locates and loads `config.txt`.
pub struct ConfigManager {
    config_path: PathBuf,
    explicit: bool,
}

impl ConfigManager {
    /// Creates a config manager.
    ///
    /// Resolution order:
    /// 1. the explicit path, if given (must exist)
    /// 2. `./config.txt`
    /// 3. `$XDG_CONFIG_HOME/auto-translate/config.txt`
    pub fn new(explicit: Option<&Path>) -> Self {
        if let Some(path) = explicit {
            return Self {
                config_path: path.to_path_buf(),
                explicit: true,
            };
        }

        let local = PathBuf::from(CONFIG_FILE_NAME);
        let config_path = if local.exists() {
            local
        } else {
            paths::config_dir().map_or(local, |dir| dir.join(CONFIG_FILE_NAME))
        };

        Self {
            config_path,
            explicit: false,
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Loads the configuration file.
    ///
    /// A missing file that was not requested explicitly yields the defaults.
    pub fn load(&self) -> Result<Config> {
        if !self.explicit && !self.config_path.exists() {
            crate::warn!(
                "{} no {} found, using default settings",
                Style::warning("Warning:"),
                CONFIG_FILE_NAME
            );
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config = Config::parse(&contents).with_context(|| {
            format!("Failed to parse config file: {}", self.config_path.display())
        })?;

        Ok(config)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::{Provider, SourceLanguage, WriteMode};
    use crate::error::Error;
    use tempfile::TempDir;

    fn write_config(temp_dir: &TempDir, contents: &str) -> PathBuf {
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_explicit_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "target_lang = ja\nwrite_mode = tex\n");

        let config = ConfigManager::new(Some(&path)).load().unwrap();

        assert_eq!(config.target_lang, "ja");
        assert_eq!(config.write_mode, WriteMode::Tex);
    }

    #[test]
    fn test_load_explicit_missing_config_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nope.txt");

        let result = ConfigManager::new(Some(&path)).load();

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to read"));
    }

    #[test]
    fn test_load_keeps_domain_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "foo = bar\n");

        let err = ConfigManager::new(Some(&path)).load().unwrap_err();

        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::UnknownKey { .. })
        ));
    }

    #[test]
    fn test_resolve_config_overrides_file() {
        let file_config = Config::parse("target_lang = ja\ntranslator_provider = bing").unwrap();
        let options = ResolveOptions {
            to: Some("de".to_string()),
            from: Some("en".to_string()),
            ..ResolveOptions::default()
        };

        let config = resolve_config(&options, file_config).unwrap();

        assert_eq!(config.target_lang, "de");
        assert_eq!(config.source_lang, SourceLanguage::Code("en".to_string()));
        assert_eq!(config.provider, Provider::Bing);
    }

    #[test]
    fn test_resolve_config_learning_flag() {
        let options = ResolveOptions {
            learning: true,
            ..ResolveOptions::default()
        };

        let config = resolve_config(&options, Config::default()).unwrap();

        assert!(config.learning_method);
    }

    #[test]
    fn test_resolve_config_rejects_invalid_mode() {
        let options = ResolveOptions {
            mode: Some("pdf".to_string()),
            ..ResolveOptions::default()
        };

        let err = resolve_config(&options, Config::default()).unwrap_err();

        assert!(err.to_string().contains("write_mode"));
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::InvalidOption { line: None, .. })
        ));
    }
}
