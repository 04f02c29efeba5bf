use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::{Config, ConfigManager, KEYS, ResolveOptions, resolve_config};
use crate::pipeline::{Pipeline, RunReport};
use crate::translation::{LanguageSupport, build_translator};
use crate::ui::Style;
use crate::{info, status};

pub struct TranslateOptions {
    pub file: PathBuf,
    pub config: Option<PathBuf>,
    pub resources: PathBuf,
    pub log_file: PathBuf,
    pub overrides: ResolveOptions,
}

pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let manager = ConfigManager::new(options.config.as_deref());
    let config = resolve_config(&options.overrides, manager.load()?)?;

    if config.verbose {
        print_config(&config, manager.config_path());
    }

    let languages = LanguageSupport::load(&options.resources).with_context(|| {
        format!(
            "Failed to load language table from {}",
            options.resources.display()
        )
    })?;
    let translator = build_translator(config.provider)?;

    let report = Pipeline::new(&config, &languages, translator.as_ref(), &options.resources)
        .run(&options.file, &options.log_file)
        .await?;

    print_report(&config, &report);
    Ok(())
}

fn print_config(config: &Config, path: &Path) {
    info!(
        "{} {}",
        Style::header("Configuration"),
        Style::secondary(format!("({})", path.display()))
    );
    for key in KEYS {
        if let Some(value) = config.get(key) {
            info!("  {} = {}", Style::label(format!("{key:24}")), Style::value(value));
        }
    }
}

fn print_report(config: &Config, report: &RunReport) {
    if config.track_translated_chars {
        status!(
            "{} characters translated",
            Style::value(report.translated_chars)
        );
    }

    status!(
        "{} Translation written to {} ({} sentences, {} to {})",
        Style::success("✓"),
        Style::value(report.output_path.display()),
        report.sentences,
        Style::code(&report.source_lang),
        Style::code(&config.target_lang)
    );
}
