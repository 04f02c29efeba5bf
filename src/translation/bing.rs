//! Microsoft Translator (Bing) Text API v3.
//!
//! Credentials come from `BING_TRANSLATOR_KEY` and, for regional resources,
//! `BING_TRANSLATOR_REGION`.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use super::client::{Translation, Translator, env_key, send};
use crate::config::{Provider, SourceLanguage};
use crate::error::{Error, Result};

pub const API_KEY_ENV: &str = "BING_TRANSLATOR_KEY";
pub const REGION_ENV: &str = "BING_TRANSLATOR_REGION";

const ENDPOINT: &str = "https://api.cognitive.microsofttranslator.com/translate";

#[derive(Debug, Serialize)]
struct RequestItem<'a> {
    #[serde(rename = "Text")]
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseItem {
    detected_language: Option<DetectedLanguage>,
    translations: Vec<TranslationItem>,
}

#[derive(Debug, Deserialize)]
struct DetectedLanguage {
    language: String,
}

#[derive(Debug, Deserialize)]
struct TranslationItem {
    text: String,
}

pub struct BingTranslator {
    client: Client,
    api_key: String,
    region: Option<String>,
}

impl BingTranslator {
    pub fn from_env(client: Client) -> Result<Self> {
        let api_key = env_key(Provider::Bing, API_KEY_ENV)?;
        let region = std::env::var(REGION_ENV)
            .ok()
            .filter(|region| !region.trim().is_empty());
        Ok(Self {
            client,
            api_key,
            region,
        })
    }

    fn url(&self, source: &SourceLanguage, target: &str) -> Result<Url> {
        let mut params = vec![("api-version", "3.0"), ("to", target)];
        if let Some(code) = source.code() {
            params.push(("from", code));
        }
        Url::parse_with_params(ENDPOINT, &params)
            .map_err(|e| Error::provider(self.name(), format!("invalid endpoint: {e}")))
    }
}

impl std::fmt::Debug for BingTranslator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BingTranslator")
            .field("api_key", &"***")
            .field("region", &self.region)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Translator for BingTranslator {
    async fn translate(
        &self,
        text: &str,
        source: &SourceLanguage,
        target: &str,
    ) -> Result<Translation> {
        let mut request = self
            .client
            .post(self.url(source, target)?)
            .header("Ocp-Apim-Subscription-Key", &self.api_key)
            .json(&[RequestItem { text }]);
        if let Some(region) = &self.region {
            request = request.header("Ocp-Apim-Subscription-Region", region);
        }

        let body = send(self.name(), request).await?;
        let (translated, detected) =
            parse_response(&body).map_err(|message| Error::provider(self.name(), message))?;

        Ok(Translation::new(text, translated, detected, source))
    }

    fn name(&self) -> &'static str {
        "bing"
    }
}

fn parse_response(body: &str) -> std::result::Result<(String, Option<String>), String> {
    let items: Vec<ResponseItem> =
        serde_json::from_str(body).map_err(|e| format!("invalid response: {e}"))?;

    let item = items
        .into_iter()
        .next()
        .ok_or("invalid response: empty result list")?;
    let detected = item.detected_language.map(|d| d.language);
    let translation = item
        .translations
        .into_iter()
        .next()
        .ok_or("invalid response: no translations returned")?;

    Ok((translation.text, detected))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn translator() -> BingTranslator {
        BingTranslator {
            client: Client::new(),
            api_key: "test".to_string(),
            region: None,
        }
    }

    #[test]
    fn test_parse_response_with_detection() {
        let body = r#"[{
            "detectedLanguage": {"language": "en", "score": 1.0},
            "translations": [{"text": "Bonjour le monde.", "to": "fr"}]
        }]"#;

        let (text, detected) = parse_response(body).unwrap();

        assert_eq!(text, "Bonjour le monde.");
        assert_eq!(detected.as_deref(), Some("en"));
    }

    #[test]
    fn test_parse_response_without_detection() {
        let body = r#"[{"translations": [{"text": "Hallo", "to": "de"}]}]"#;

        let (text, detected) = parse_response(body).unwrap();

        assert_eq!(text, "Hallo");
        assert!(detected.is_none());
    }

    #[test]
    fn test_parse_response_error_object() {
        let body = r#"{"error": {"code": 401000, "message": "invalid key"}}"#;
        assert!(parse_response(body).is_err());
    }

    #[test]
    fn test_url_omits_from_for_auto() {
        let url = translator().url(&SourceLanguage::Auto, "fr").unwrap();
        assert!(!url.query_pairs().any(|(key, _)| key == "from"));

        let url = translator()
            .url(&SourceLanguage::Code("en".to_string()), "fr")
            .unwrap();
        assert!(url.query_pairs().any(|(key, value)| key == "from" && value == "en"));
        assert!(url.query_pairs().any(|(key, value)| key == "to" && value == "fr"));
    }
}
