//! Language table listing.

use anyhow::{Context, Result};
use std::path::Path;

use crate::config::Provider;
use crate::error::Error;
use crate::translation::{LanguageSupport, TYPESETTING_COLUMN};
use crate::ui::Style;

/// Prints every language code with its provider and polyglossia identifiers.
///
/// With `provider`, only codes that provider can translate are listed.
pub fn print_languages(resources: &Path, provider: Option<&str>) -> Result<()> {
    let provider = provider.map(parse_provider).transpose()?;
    let languages = LanguageSupport::load(resources).with_context(|| {
        format!(
            "Failed to load language table from {}",
            resources.display()
        )
    })?;

    let providers: Vec<Provider> = provider.map_or_else(|| Provider::ALL.to_vec(), |p| vec![p]);

    let mut header = format!("  {:<8}", "code");
    for provider in &providers {
        header.push_str(&format!("{:<14}", provider.as_str()));
    }
    header.push_str(TYPESETTING_COLUMN);
    println!("{}", Style::header(header.trim_end()));

    for code in languages.codes() {
        if provider.is_some_and(|p| !languages.is_supported(code, p)) {
            continue;
        }

        let mut row = format!("  {}", Style::code(format!("{code:<8}")));
        for provider in &providers {
            let cell = if languages.is_supported(code, *provider) {
                languages.provider_code(code, *provider).to_string()
            } else {
                "-".to_string()
            };
            row.push_str(&format!("{cell:<14}"));
        }
        row.push_str(
            &languages
                .capability_id(code, TYPESETTING_COLUMN)
                .map_or_else(|| Style::secondary("-"), str::to_string),
        );
        println!("{row}");
    }

    Ok(())
}

fn parse_provider(value: &str) -> Result<Provider, Error> {
    Provider::ALL
        .into_iter()
        .find(|p| p.as_str() == value)
        .ok_or_else(|| Error::InvalidOption {
            key: "translator_provider".to_string(),
            value: value.to_string(),
            expected: Provider::ALL.map(Provider::as_str).join(", "),
            line: None,
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_provider() {
        assert_eq!(parse_provider("google_cloud").unwrap(), Provider::GoogleCloud);
        assert!(matches!(
            parse_provider("yandex"),
            Err(Error::InvalidOption { .. })
        ));
    }
}
