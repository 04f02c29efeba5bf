//! # auto-translate - Document Translation for Language Learners
//!
//! `auto-translate` reads a text document, splits it into sentences and
//! translates them one by one through Google Translate, Google Cloud
//! Translation or Bing Translator. The result is written as plain text or as
//! a LaTeX document using polyglossia.
//!
//! ## Features
//!
//! - **Source detection**: `source_lang = auto` lets the provider detect the language
//! - **Learning mode**: a word-by-word gloss below every sentence
//! - **Word skip lists**: regular expressions for words not worth glossing
//! - **Usage log**: translated characters appended to a log after each run
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate a document with the settings from ./config.txt
//! auto-translate story.txt
//!
//! # German to English LaTeX with a word-by-word gloss
//! auto-translate --from de --to en --mode tex --learning story.txt
//!
//! # Languages known to each provider
//! auto-translate languages
//! ```
//!
//! ## Configuration
//!
//! Settings are read from `./config.txt` (or `~/.config/auto-translate/config.txt`):
//!
//! ```text
//! translator_provider = google
//! source_lang = auto
//! target_lang = en
//! write_mode = tex
//! learning_method = true
//! skip_words = true
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file parsing and command-line overrides.
pub mod config;

/// Domain error type and exit codes.
pub mod error;

/// File system utilities.
pub mod fs;

/// Input document reading.
pub mod input;

/// Global output configuration (quiet mode, colors, stderr routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// End-to-end translation run.
pub mod pipeline;

/// Plain-text and LaTeX output.
pub mod render;

/// Sentence segmentation and word extraction.
pub mod segment;

/// Translation providers, language table and word skip lists.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
