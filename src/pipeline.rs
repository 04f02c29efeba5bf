//! One translation run: validate, read, detect, translate, render, write.

use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDateTime};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{Config, SourceLanguage, WriteMode};
use crate::error::{self, Direction, Error};
use crate::fs::{append_line, atomic_write};
use crate::input::InputReader;
use crate::render::{GlossEntry, RenderOptions, Renderer};
use crate::segment::{collapse_lines, gloss_words, split_sentences};
use crate::translation::{LanguageSupport, SkipList, TYPESETTING_COLUMN, Translator};
use crate::ui::{Spinner, Style};
use crate::{info, status, warn};

/// Default usage log, relative to the working directory.
pub const USAGE_LOG_FILE: &str = "translated_chars.log";

/// Rendered output of a run, before anything touches the disk.
#[derive(Debug, Clone)]
pub struct TranslatedDocument {
    pub content: String,
    /// Resolved source language (detected when configured as `auto`).
    pub source_lang: String,
    pub sentences: usize,
    pub translated_chars: usize,
}

/// Summary of a completed run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub output_path: PathBuf,
    pub source_lang: String,
    pub sentences: usize,
    pub translated_chars: usize,
}

/// Drives a run with explicitly injected configuration, language table and
/// translator.
pub struct Pipeline<'a> {
    config: &'a Config,
    languages: &'a LanguageSupport,
    translator: &'a dyn Translator,
    resources: &'a Path,
}

impl<'a> Pipeline<'a> {
    pub const fn new(
        config: &'a Config,
        languages: &'a LanguageSupport,
        translator: &'a dyn Translator,
        resources: &'a Path,
    ) -> Self {
        Self {
            config,
            languages,
            translator,
            resources,
        }
    }

    /// Translates `input`, writes the result and appends to the usage log.
    ///
    /// The configured languages are validated before the input is read.
    /// Nothing is written unless every provider call succeeds.
    pub async fn run(&self, input: &Path, log_path: &Path) -> Result<RunReport> {
        self.check_configured_languages()?;
        let text = InputReader::read(input)?;
        let document = self.translate_checked(&text).await?;

        let output_path = self.config.output_dir.join(output_file_name(
            input,
            &document.source_lang,
            &self.config.target_lang,
            self.config.write_mode,
            self.config.tex_build_dir,
        ));
        if let Some(parent) = output_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        atomic_write(&output_path, &document.content)?;

        append_line(
            log_path,
            &usage_log_entry(Local::now().naive_local(), document.translated_chars),
        )?;

        Ok(RunReport {
            output_path,
            source_lang: document.source_lang,
            sentences: document.sentences,
            translated_chars: document.translated_chars,
        })
    }

    /// Translates and renders `text` without touching the file system
    /// (apart from reading the word skip list).
    pub async fn translate_document(&self, text: &str) -> Result<TranslatedDocument> {
        self.check_configured_languages()?;
        self.translate_checked(text).await
    }

    /// Validates the explicit source language (if any) and the target
    /// language, printing non-fatal warnings.
    pub fn check_configured_languages(&self) -> error::Result<()> {
        if let SourceLanguage::Code(source) = &self.config.source_lang {
            self.check_language(source, Direction::Source)?;
        }
        self.check_language(&self.config.target_lang, Direction::Target)
    }

    async fn translate_checked(&self, text: &str) -> Result<TranslatedDocument> {
        let collapsed = collapse_lines(text);
        if collapsed.trim().is_empty() {
            bail!("Input is empty");
        }
        let sentences = split_sentences(&collapsed);

        let provider = self.config.provider;
        let target_lang = self.config.target_lang.as_str();
        let target = self.languages.provider_code(target_lang, provider);

        let mut translated_chars = 0;
        let mut detection = None;

        let source_lang = match &self.config.source_lang {
            SourceLanguage::Code(code) => code.clone(),
            SourceLanguage::Auto => {
                let first = sentences.first().copied().unwrap_or_default();
                let translation = self
                    .translator
                    .translate(first, &SourceLanguage::Auto, target)
                    .await?;
                translated_chars += translation.char_count;

                let reported = translation.detected_source_lang.clone().ok_or_else(|| {
                    Error::provider(self.translator.name(), "no source language detected")
                })?;
                let code = self
                    .languages
                    .table_code(provider, &reported)
                    .unwrap_or(reported.as_str())
                    .to_string();
                status!("Detected source language: \"{}\"", Style::code(&code));

                self.check_language(&code, Direction::Source)?;
                detection = Some(translation);
                code
            }
        };
        let source =
            SourceLanguage::Code(self.languages.provider_code(&source_lang, provider).to_string());

        let skip_list = self.word_skip_list(&source_lang)?;

        let options = RenderOptions::from_config(
            self.config,
            self.languages.capability_id(&source_lang, TYPESETTING_COLUMN),
            self.languages.capability_id(target_lang, TYPESETTING_COLUMN),
        );
        let mut renderer = Renderer::new(options, &collapsed);

        let spinner = (!self.config.verbose).then(|| Spinner::new("Translating..."));

        for (index, sentence) in sentences.iter().enumerate() {
            if let Some(spinner) = &spinner {
                spinner.set_message(format!(
                    "Translating sentence {}/{}",
                    index + 1,
                    sentences.len()
                ));
            }

            // The detection call already translated the first sentence.
            let translation = if let Some(translation) = detection.take() {
                translation
            } else {
                let translation = self.translator.translate(sentence, &source, target).await?;
                translated_chars += translation.char_count;
                translation
            };

            let gloss = if self.config.learning_method {
                self.gloss(sentence, &source, target, skip_list.as_ref(), &mut translated_chars)
                    .await?
            } else {
                Vec::new()
            };

            if self.config.verbose {
                info!("{} {}", Style::label("[source]"), sentence);
                info!("{} {}", Style::label("[target]"), translation.text);
            }

            renderer.push_sentence(sentence, &translation.text, &gloss);
        }

        if let Some(spinner) = spinner {
            spinner.stop();
        }

        Ok(TranslatedDocument {
            content: renderer.finish(),
            source_lang,
            sentences: sentences.len(),
            translated_chars,
        })
    }

    fn check_language(&self, code: &str, direction: Direction) -> error::Result<()> {
        if let Some(warning) =
            self.languages
                .check(code, self.config.provider, direction, self.config.write_mode)?
        {
            warn!("{} {}", Style::warning("Warning:"), warning);
        }
        Ok(())
    }

    /// Loads the skip list when word skipping applies; a missing list only warns.
    fn word_skip_list(&self, source_lang: &str) -> error::Result<Option<SkipList>> {
        if !self.config.skip_words {
            return Ok(None);
        }

        if !self.config.learning_method {
            warn!(
                "{} skip_words was enabled while learning_method was disabled. \
                 Words are only skipped in the word-by-word translation generated \
                 when learning_method is enabled.",
                Style::warning("Warning:")
            );
            return Ok(None);
        }

        match SkipList::load(self.resources, source_lang) {
            Ok(list) => Ok(Some(list)),
            Err(Error::MissingResource { path }) => {
                warn!(
                    "{} no word skip list was found for source language \"{}\" ({}). \
                     No words will be skipped in the word-by-word translation.",
                    Style::warning("Warning:"),
                    source_lang,
                    path.display()
                );
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Translates every word of `sentence` that is not empty after cleaning
    /// and not on the skip list.
    async fn gloss(
        &self,
        sentence: &str,
        source: &SourceLanguage,
        target: &str,
        skip_list: Option<&SkipList>,
        translated_chars: &mut usize,
    ) -> error::Result<Vec<GlossEntry>> {
        let mut gloss = Vec::new();

        for word in gloss_words(sentence) {
            if word.cleaned.is_empty() || skip_list.is_some_and(|list| list.matches(&word.cleaned))
            {
                continue;
            }

            let translation = self
                .translator
                .translate(&word.cleaned, source, target)
                .await?;
            *translated_chars += translation.char_count;
            gloss.push(GlossEntry::new(word.display, translation.text));
        }

        Ok(gloss)
    }
}

/// Output path relative to the output directory.
///
/// `<base>_translated_<source>_<target>.<ext>`, where `<base>` is the input
/// file name up to its first dot. In tex build-dir mode the file sits in a
/// directory named after its own stem.
pub fn output_file_name(
    input: &Path,
    source_lang: &str,
    target_lang: &str,
    mode: WriteMode,
    build_dir: bool,
) -> PathBuf {
    let file_name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let base = file_name.split('.').next().unwrap_or_default();

    let stem = format!("{base}_translated_{source_lang}_{target_lang}");
    let name = format!("{stem}.{}", mode.extension());

    if mode == WriteMode::Tex && build_dir {
        PathBuf::from(stem).join(name)
    } else {
        PathBuf::from(name)
    }
}

/// Usage log line: `[YYYY-MM-DD HH:MM:SS]\t<count>`.
pub fn usage_log_entry(timestamp: NaiveDateTime, translated_chars: usize) -> String {
    format!(
        "[{}]\t{}",
        timestamp.format("%Y-%m-%d %H:%M:%S"),
        translated_chars
    )
}
