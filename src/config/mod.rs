//! Configuration loading and validation.

mod manager;
mod options;

pub use manager::{CONFIG_FILE_NAME, ConfigManager, ResolveOptions, resolve_config};
pub use options::{Config, KEYS, Provider, SourceLanguage, WriteMode};
