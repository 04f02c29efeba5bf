//! Google Translate through the public web endpoint (no API key).

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;

use super::client::{Translation, Translator, send};
use crate::config::SourceLanguage;
use crate::error::{Error, Result};

const ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

pub struct GoogleTranslator {
    client: Client,
}

impl GoogleTranslator {
    pub const fn new(client: Client) -> Self {
        Self { client }
    }

    fn url(&self, text: &str, source: &SourceLanguage, target: &str) -> Result<Url> {
        let source = source.code().unwrap_or(SourceLanguage::AUTO);
        Url::parse_with_params(
            ENDPOINT,
            &[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ],
        )
        .map_err(|e| Error::provider(self.name(), format!("invalid endpoint: {e}")))
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(
        &self,
        text: &str,
        source: &SourceLanguage,
        target: &str,
    ) -> Result<Translation> {
        let url = self.url(text, source, target)?;
        let body = send(self.name(), self.client.get(url)).await?;

        let value: Value = serde_json::from_str(&body)
            .map_err(|e| Error::provider(self.name(), format!("invalid response: {e}")))?;
        let (translated, detected) =
            parse_response(&value).map_err(|message| Error::provider(self.name(), message))?;

        Ok(Translation::new(text, translated, detected, source))
    }

    fn name(&self) -> &'static str {
        "google"
    }
}

/// Extracts the translation and detected language.
///
/// The endpoint answers with nested arrays: element 0 holds one
/// `[translated, original, ...]` entry per segment, element 2 the source
/// language.
fn parse_response(value: &Value) -> std::result::Result<(String, Option<String>), String> {
    let segments = value
        .get(0)
        .and_then(Value::as_array)
        .ok_or("invalid response: missing translation segments")?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    let detected = value.get(2).and_then(Value::as_str).map(str::to_string);

    Ok((translated, detected))
}
