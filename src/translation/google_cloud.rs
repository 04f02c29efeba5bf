//! Google Cloud Translation API v2.
//!
//! The API key is read from the `GOOGLE_TRANSLATE_API_KEY` environment
//! variable. Obtain a key from <https://console.cloud.google.com/>.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use super::client::{Translation, Translator, env_key, send};
use crate::config::{Provider, SourceLanguage};
use crate::error::{Error, Result};

pub const API_KEY_ENV: &str = "GOOGLE_TRANSLATE_API_KEY";

const ENDPOINT: &str = "https://translation.googleapis.com/language/translate/v2";

#[derive(Debug, Deserialize)]
struct Response {
    data: Data,
}

#[derive(Debug, Deserialize)]
struct Data {
    translations: Vec<Entry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Entry {
    translated_text: String,
    detected_source_language: Option<String>,
}

pub struct GoogleCloudTranslator {
    client: Client,
    api_key: String,
}

impl GoogleCloudTranslator {
    pub fn from_env(client: Client) -> Result<Self> {
        let api_key = env_key(Provider::GoogleCloud, API_KEY_ENV)?;
        Ok(Self { client, api_key })
    }
}

impl std::fmt::Debug for GoogleCloudTranslator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleCloudTranslator")
            .field("api_key", &"***")
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Translator for GoogleCloudTranslator {
    async fn translate(
        &self,
        text: &str,
        source: &SourceLanguage,
        target: &str,
    ) -> Result<Translation> {
        let mut body = json!({
            "q": text,
            "target": target,
            "format": "text",
        });
        if let Some(code) = source.code() {
            body["source"] = json!(code);
        }

        let request = self
            .client
            .post(ENDPOINT)
            .header("x-goog-api-key", &self.api_key)
            .json(&body);
        let response = send(self.name(), request).await?;

        let (translated, detected) =
            parse_response(&response).map_err(|message| Error::provider(self.name(), message))?;

        Ok(Translation::new(text, translated, detected, source))
    }

    fn name(&self) -> &'static str {
        "google_cloud"
    }
}

fn parse_response(body: &str) -> std::result::Result<(String, Option<String>), String> {
    let response: Response =
        serde_json::from_str(body).map_err(|e| format!("invalid response: {e}"))?;

    let entry = response
        .data
        .translations
        .into_iter()
        .next()
        .ok_or("invalid response: no translations returned")?;

    Ok((entry.translated_text, entry.detected_source_language))
}
