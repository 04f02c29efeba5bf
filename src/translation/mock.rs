//! Deterministic, network-free translator.
//!
//! Drives the pipeline in tests without API keys.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use super::client::{Translation, Translator};
use crate::config::SourceLanguage;
use crate::error::{Error, Result};

/// How the mock answers a request.
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Append the target code: `"hello"` → `"hello_fr"`.
    Suffix,
    /// Look the text up; unknown texts come back unchanged.
    Mappings(HashMap<String, String>),
    /// Fail every request with this message.
    Error(String),
}

/// Mock translator that records every request it receives.
#[derive(Debug)]
pub struct MockTranslator {
    mode: MockMode,
    detected_language: String,
    requests: Mutex<Vec<String>>,
}

impl MockTranslator {
    pub fn new(mode: MockMode) -> Self {
        Self {
            mode,
            detected_language: "en".to_string(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Builds a [`MockMode::Mappings`] translator from `(source, translation)` pairs.
    pub fn with_mappings<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mappings = pairs
            .into_iter()
            .map(|(source, target)| (source.to_string(), target.to_string()))
            .collect();
        Self::new(MockMode::Mappings(mappings))
    }

    /// Language reported when asked to detect.
    #[must_use]
    pub fn detecting(mut self, language: &str) -> Self {
        self.detected_language = language.to_string();
        self
    }

    /// Texts submitted so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        source: &SourceLanguage,
        target: &str,
    ) -> Result<Translation> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(text.to_string());
        }

        let translated = match &self.mode {
            MockMode::Suffix => format!("{text}_{target}"),
            MockMode::Mappings(mappings) => mappings
                .get(text)
                .cloned()
                .unwrap_or_else(|| text.to_string()),
            MockMode::Error(message) => return Err(Error::provider(self.name(), message)),
        };

        Ok(Translation::new(
            text,
            translated,
            Some(self.detected_language.clone()),
            source,
        ))
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
