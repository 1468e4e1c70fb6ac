use crate::domain::{models::Template, source::TemplateSource};
use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_LISTING_URL: &str =
    "https://api.github.com/repos/toptal/gitignore/contents/templates";

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Unexpected listing format: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

// The contents API returns more fields than this; the rest are ignored.
#[derive(Debug, Deserialize)]
struct ListingEntry {
    name: String,
    download_url: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

/// Parses a contents-API listing. Directories (null `download_url` or a
/// non-file `type`) are skipped; order is preserved.
pub fn parse_listing(body: &str) -> Result<Vec<Template>, SourceError> {
    let entries: Vec<ListingEntry> = serde_json::from_str(body)?;
    Ok(entries
        .into_iter()
        .filter(|e| e.kind.as_deref().map_or(true, |k| k == "file"))
        .filter_map(|e| {
            e.download_url.map(|download_url| Template {
                name: e.name,
                download_url,
            })
        })
        .collect())
}

fn validate_url(url: &str) -> Result<(), SourceError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(SourceError::InvalidUrl(url.to_string()))
    }
}

pub struct GithubAdapter {
    client: reqwest::Client,
    listing_url: String,
}

impl GithubAdapter {
    pub fn new(
        listing_url: impl Into<String>,
        user_agent: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, SourceError> {
        let listing_url = listing_url.into();
        validate_url(&listing_url)?;

        let mut builder = reqwest::Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            listing_url,
        })
    }

    pub fn listing_url(&self) -> &str {
        &self.listing_url
    }

    async fn get_text(&self, url: &str) -> Result<String, SourceError> {
        validate_url(url)?;
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl TemplateSource for GithubAdapter {
    async fn list_templates(&self) -> Result<Vec<Template>> {
        tracing::debug!(url = %self.listing_url, "requesting template listing");
        let body = self.get_text(&self.listing_url).await?;
        Ok(parse_listing(&body)?)
    }

    async fn fetch_template(&self, template: &Template) -> Result<String> {
        tracing::debug!(name = %template.name, url = %template.download_url, "downloading template");
        Ok(self.get_text(&template.download_url).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_listing_keeps_files_in_order() {
        let body = r#"[
            {"name": "Node.gitignore", "download_url": "https://raw.example/Node.gitignore", "type": "file", "size": 12},
            {"name": "Python.gitignore", "download_url": "https://raw.example/Python.gitignore", "type": "file"}
        ]"#;
        let templates = parse_listing(body).unwrap();
        assert_eq!(templates.len(), 2);
        assert_eq!(templates[0].name, "Node.gitignore");
        assert_eq!(
            templates[1].download_url,
            "https://raw.example/Python.gitignore"
        );
    }

    #[test]
    fn test_parse_listing_skips_directories() {
        let body = r#"[
            {"name": "order", "download_url": null, "type": "dir"},
            {"name": "Rust.gitignore", "download_url": "https://raw.example/Rust.gitignore"}
        ]"#;
        let templates = parse_listing(body).unwrap();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].name, "Rust.gitignore");
    }

    #[test]
    fn test_parse_listing_rejects_non_array() {
        let err = parse_listing(r#"{"message": "API rate limit exceeded"}"#).unwrap_err();
        assert!(matches!(err, SourceError::Decode(_)));
    }

    #[test]
    fn test_new_rejects_non_http_url() {
        let err = GithubAdapter::new("ftp://example.invalid", "gaas-test", None)
            .err()
            .unwrap();
        assert!(err.to_string().contains("Invalid URL"));
    }
}
