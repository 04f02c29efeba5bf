//! Sentence segmentation and word extraction.

use regex::Regex;
use std::sync::LazyLock;

/// A run of sentence terminators followed by a space.
#[allow(clippy::expect_used)]
static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.?!…]+ ").expect("sentence pattern is valid"));

#[allow(clippy::expect_used)]
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\W").expect("word pattern is valid"));

/// Joins the lines of `text` with single spaces.
pub fn collapse_lines(text: &str) -> String {
    text.lines().collect::<Vec<_>>().join(" ")
}

/// Splits collapsed text into sentences.
///
/// Each terminator run and its trailing space stay attached to the sentence
/// they end; the remainder after the last terminator is kept as a final
/// sentence. Concatenating the result reproduces `text` exactly.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for terminator in SENTENCE_END.find_iter(text) {
        sentences.push(&text[start..terminator.end()]);
        start = terminator.end();
    }

    if start < text.len() {
        sentences.push(&text[start..]);
    }

    sentences
}

/// A word of a sentence as shown in the gloss and as sent for translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlossWord {
    /// Lowercased token, punctuation kept.
    pub display: String,
    /// Token with every non-word character removed.
    pub cleaned: String,
}

/// Lowercases `sentence` and splits it on whitespace into gloss words.
pub fn gloss_words(sentence: &str) -> Vec<GlossWord> {
    sentence
        .to_lowercase()
        .split_whitespace()
        .map(|token| GlossWord {
            display: token.to_string(),
            cleaned: NON_WORD.replace_all(token, "").into_owned(),
        })
        .collect()
}
