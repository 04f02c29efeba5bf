//! Plain-text and LaTeX rendering of translated documents.
//!
//! The renderer receives sentences one at a time and assembles discrete
//! blocks; the final text is produced once, by [`Renderer::finish`].

mod document;

pub use document::{Block, Document, Spacing};

use crate::config::{Config, WriteMode};

const PREAMBLE: &str = r"\input{preamble.tex}";
const PREAMBLE_BUILD_DIR: &str = r"\input{../preamble.tex}";
const BEGIN_DOCUMENT: &str = r"\begin{document}";
const END_DOCUMENT: &str = r"\end{document}";
const GLOSS_COLOR: &str = "darkgreen";

/// One `word = translation` pair of a word-by-word gloss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlossEntry {
    pub word: String,
    pub translation: String,
}

impl GlossEntry {
    pub fn new(word: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            translation: translation.into(),
        }
    }
}

/// Layout choices for a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub mode: WriteMode,
    pub learning: bool,
    /// Output lives one directory below the preamble.
    pub build_dir: bool,
    /// Polyglossia environment of the source language, if supported.
    pub source_env: Option<String>,
    /// Polyglossia environment of the target language, if supported.
    pub target_env: Option<String>,
}

impl RenderOptions {
    pub fn from_config(
        config: &Config,
        source_env: Option<&str>,
        target_env: Option<&str>,
    ) -> Self {
        Self {
            mode: config.write_mode,
            learning: config.learning_method,
            build_dir: config.tex_build_dir,
            source_env: source_env.map(str::to_string),
            target_env: target_env.map(str::to_string),
        }
    }
}

/// Incremental document builder.
#[derive(Debug)]
pub struct Renderer {
    options: RenderOptions,
    document: Document,
    translated: Block,
}

impl Renderer {
    /// Starts a document for the (line-collapsed) `source_text`.
    ///
    /// In tex mode this emits the preamble, language declarations and the
    /// full source block up front.
    pub fn new(options: RenderOptions, source_text: &str) -> Self {
        let document = match options.mode {
            WriteMode::Txt if options.learning => Document::new(Spacing::BlankLine),
            WriteMode::Txt => Document::new(Spacing::Tight),
            WriteMode::Tex => {
                let mut document = Document::new(Spacing::BlankLine);
                document.push(Block::new().line(if options.build_dir {
                    PREAMBLE_BUILD_DIR
                } else {
                    PREAMBLE
                }));
                document.push(language_declarations(
                    options.source_env.as_deref(),
                    options.target_env.as_deref(),
                ));
                document.push(Block::new().line(BEGIN_DOCUMENT));
                document.push(
                    Block::new()
                        .line(source_text)
                        .wrapped(options.source_env.as_deref()),
                );
                document
            }
        };

        Self {
            options,
            document,
            translated: Block::new(),
        }
    }

    /// Adds one translated sentence and its gloss.
    ///
    /// The gloss is ignored outside learning mode.
    pub fn push_sentence(&mut self, source: &str, target: &str, gloss: &[GlossEntry]) {
        match (self.options.mode, self.options.learning) {
            (WriteMode::Txt, false) => self.document.push(Block::new().line(target)),
            (WriteMode::Txt, true) => {
                let mut block = Block::new().line(source).line(target);
                if let Some(gloss) = gloss_line(gloss) {
                    block.push(gloss);
                }
                self.document.push(block);
            }
            (WriteMode::Tex, false) => self.translated.push(target),
            (WriteMode::Tex, true) => {
                let bold_source = format!("{{\\bf {source}}}\\\\");
                let block = match gloss_line(gloss) {
                    Some(gloss) => Block::new()
                        .line(bold_source)
                        .line(format!("{target}\\\\"))
                        .line(format!("{{\\color{{{GLOSS_COLOR}}} {gloss}}}")),
                    None => Block::new().line(bold_source).line(target),
                };
                self.document.push(block);
            }
        }
    }

    /// Closes open environments and returns the document text.
    pub fn finish(mut self) -> String {
        if self.options.mode == WriteMode::Tex {
            if !self.options.learning {
                let translated = std::mem::take(&mut self.translated);
                self.document
                    .push(translated.wrapped(self.options.target_env.as_deref()));
            }
            self.document.set_trailer(END_DOCUMENT);
        }

        self.document.render()
    }
}

/// `word = translation` pairs joined by `"; "`; `None` for an empty gloss.
pub fn gloss_line(gloss: &[GlossEntry]) -> Option<String> {
    if gloss.is_empty() {
        return None;
    }

    Some(
        gloss
            .iter()
            .map(|entry| format!("{} = {}", entry.word, entry.translation))
            .collect::<Vec<_>>()
            .join("; "),
    )
}

/// The source language is main when polyglossia knows it; the target is
/// then declared as the other language. A supported target alone becomes
/// the main language.
fn language_declarations(source_env: Option<&str>, target_env: Option<&str>) -> Block {
    match (source_env, target_env) {
        (Some(source), Some(target)) => Block::new()
            .line(format!("\\setmainlanguage{{{source}}}"))
            .line(format!("\\setotherlanguage{{{target}}}")),
        (Some(main), None) | (None, Some(main)) => {
            Block::new().line(format!("\\setmainlanguage{{{main}}}"))
        }
        (None, None) => Block::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(mode: WriteMode, learning: bool) -> RenderOptions {
        RenderOptions {
            mode,
            learning,
            build_dir: false,
            source_env: Some("english".to_string()),
            target_env: Some("french".to_string()),
        }
    }

    fn render(options: RenderOptions, source: &str, sentences: &[(&str, &str, Vec<GlossEntry>)]) -> String {
        let mut renderer = Renderer::new(options, source);
        for (source, target, gloss) in sentences {
            renderer.push_sentence(source, target, gloss);
        }
        renderer.finish()
    }

    #[test]
    fn test_txt_without_learning() {
        let out = render(
            options(WriteMode::Txt, false),
            "A. B.",
            &[("A. ", "X.", vec![]), ("B.", "Y.", vec![])],
        );
        assert_eq!(out, "X.\nY.\n");
    }

    #[test]
    fn test_txt_learning_with_gloss() {
        let out = render(
            options(WriteMode::Txt, true),
            "Hello world. Bye.",
            &[
                (
                    "Hello world. ",
                    "Bonjour le monde.",
                    vec![
                        GlossEntry::new("hello", "bonjour"),
                        GlossEntry::new("world.", "monde"),
                    ],
                ),
                ("Bye.", "Au revoir.", vec![GlossEntry::new("bye.", "au revoir")]),
            ],
        );
        assert_eq!(
            out,
            "Hello world. \nBonjour le monde.\nhello = bonjour; world. = monde\n\n\
             Bye.\nAu revoir.\nbye. = au revoir\n\n"
        );
    }

    #[test]
    fn test_txt_learning_empty_gloss_omits_line() {
        let out = render(
            options(WriteMode::Txt, true),
            "The.",
            &[("The.", "Le.", vec![])],
        );
        assert_eq!(out, "The.\nLe.\n\n");
    }

    #[test]
    fn test_tex_without_learning() {
        let out = render(
            options(WriteMode::Tex, false),
            "A. B.",
            &[("A. ", "X.", vec![]), ("B.", "Y.", vec![])],
        );
        assert_eq!(
            out,
            "\\input{preamble.tex}\n\n\
             \\setmainlanguage{english}\n\\setotherlanguage{french}\n\n\
             \\begin{document}\n\n\
             \\begin{english}\nA. B.\n\\end{english}\n\n\
             \\begin{french}\nX.\nY.\n\\end{french}\n\n\
             \\end{document}"
        );
    }

    #[test]
    fn test_tex_learning_gloss_has_no_trailing_separator() {
        let out = render(
            options(WriteMode::Tex, true),
            "Hello world.",
            &[(
                "Hello world.",
                "Bonjour le monde.",
                vec![
                    GlossEntry::new("hello", "bonjour"),
                    GlossEntry::new("world.", "monde"),
                ],
            )],
        );
        assert!(out.contains(
            "{\\bf Hello world.}\\\\\nBonjour le monde.\\\\\n\
             {\\color{darkgreen} hello = bonjour; world. = monde}\n\n\\end{document}"
        ));
        assert!(!out.contains("; }"));
        assert!(out.ends_with("\\end{document}"));
    }

    #[test]
    fn test_tex_learning_empty_gloss_has_no_color_group() {
        let out = render(
            options(WriteMode::Tex, true),
            "The.",
            &[("The.", "Le.", vec![])],
        );
        assert!(!out.contains("\\color"));
        assert!(out.contains("{\\bf The.}\\\\\nLe.\n\n\\end{document}"));
    }

    #[test]
    fn test_tex_build_dir_preamble() {
        let mut opts = options(WriteMode::Tex, false);
        opts.build_dir = true;
        let out = render(opts, "A.", &[("A.", "X.", vec![])]);
        assert!(out.starts_with("\\input{../preamble.tex}\n\n"));
    }

    #[test]
    fn test_tex_without_polyglossia_support() {
        let mut opts = options(WriteMode::Tex, false);
        opts.source_env = None;
        opts.target_env = None;
        let out = render(opts, "A.", &[("A.", "X.", vec![])]);
        assert_eq!(
            out,
            "\\input{preamble.tex}\n\n\\begin{document}\n\nA.\n\nX.\n\n\\end{document}"
        );
    }

    #[test]
    fn test_language_declarations() {
        let render_block = |block: Block| {
            let mut doc = Document::new(Spacing::Tight);
            doc.push(block);
            doc.render()
        };

        assert_eq!(
            render_block(language_declarations(Some("english"), Some("french"))),
            "\\setmainlanguage{english}\n\\setotherlanguage{french}\n"
        );
        assert_eq!(
            render_block(language_declarations(Some("english"), None)),
            "\\setmainlanguage{english}\n"
        );
        assert_eq!(
            render_block(language_declarations(None, Some("french"))),
            "\\setmainlanguage{french}\n"
        );
        assert!(language_declarations(None, None).is_empty());
    }

    #[test]
    fn test_gloss_line() {
        assert_eq!(gloss_line(&[]), None);
        assert_eq!(
            gloss_line(&[GlossEntry::new("a", "b")]).as_deref(),
            Some("a = b")
        );
    }
}
