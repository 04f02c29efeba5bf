use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::bing::BingTranslator;
use super::google::GoogleTranslator;
use super::google_cloud::GoogleCloudTranslator;
use crate::config::{Provider, SourceLanguage};
use crate::error::{Error, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Outcome of a single translation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// Translated text.
    pub text: String,
    /// Provider-detected source language; only set when the source was `auto`.
    pub detected_source_lang: Option<String>,
    /// Characters submitted to the provider (an accounting value).
    pub char_count: usize,
}

impl Translation {
    /// Builds a result for `submitted`, keeping the detected language only
    /// when detection was requested.
    pub fn new(
        submitted: &str,
        text: String,
        detected: Option<String>,
        source: &SourceLanguage,
    ) -> Self {
        Self {
            text,
            detected_source_lang: match source {
                SourceLanguage::Auto => detected,
                SourceLanguage::Code(_) => None,
            },
            char_count: submitted.chars().count(),
        }
    }
}

/// Uniform contract over the supported translation backends.
///
/// Language codes passed in are already in the provider's own vocabulary.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source: &SourceLanguage,
        target: &str,
    ) -> Result<Translation>;

    /// Provider name used in messages.
    fn name(&self) -> &'static str;
}

/// Shared HTTP client for all providers.
pub fn http_client() -> Result<Client> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(concat!("auto-translate/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| Error::provider("http", format!("failed to create HTTP client: {e}")))
}

/// Creates the translator for the configured provider.
///
/// # Errors
///
/// Returns an error if the provider needs credentials that are not set.
pub fn build_translator(provider: Provider) -> Result<Box<dyn Translator>> {
    let client = http_client()?;

    Ok(match provider {
        Provider::Google => Box::new(GoogleTranslator::new(client)),
        Provider::GoogleCloud => Box::new(GoogleCloudTranslator::from_env(client)?),
        Provider::Bing => Box::new(BingTranslator::from_env(client)?),
    })
}

/// Sends a prepared request and returns the body, turning HTTP failures
/// into provider errors.
pub(super) async fn send(provider: &str, request: reqwest::RequestBuilder) -> Result<String> {
    let response = request
        .send()
        .await
        .map_err(|e| Error::provider(provider, format!("request failed: {e}")))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| Error::provider(provider, format!("failed to read response: {e}")))?;

    if !status.is_success() {
        return Err(Error::provider(
            provider,
            format!("API request failed with status {status}: {body}"),
        ));
    }

    Ok(body)
}

/// Reads an API key from the environment.
pub(super) fn env_key(provider: Provider, var: &str) -> Result<String> {
    std::env::var(var)
        .ok()
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| Error::MissingCredential {
            provider: provider.to_string(),
            var: var.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_count_is_submitted_length() {
        let translation = Translation::new(
            "Grüße, Welt!",
            "Greetings, world!".to_string(),
            None,
            &SourceLanguage::Code("de".to_string()),
        );
        assert_eq!(translation.char_count, 12);
    }

    #[test]
    fn test_detected_language_only_kept_for_auto() {
        let explicit = Translation::new(
            "Hallo",
            "Hello".to_string(),
            Some("de".to_string()),
            &SourceLanguage::Code("de".to_string()),
        );
        assert_eq!(explicit.detected_source_lang, None);

        let auto = Translation::new(
            "Hallo",
            "Hello".to_string(),
            Some("de".to_string()),
            &SourceLanguage::Auto,
        );
        assert_eq!(auto.detected_source_lang.as_deref(), Some("de"));
    }

    #[test]
    fn test_http_client_builds() {
        assert!(http_client().is_ok());
    }
}
