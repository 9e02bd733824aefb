use std::collections::BTreeMap;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;
use wa_core::config::SourceConfig;
use wa_core::{ContentSource, Error, Result, SourceText};

const USER_AGENT: &str = concat!("wa/", env!("CARGO_PKG_VERSION"), " (article generator)");

#[derive(Debug, Deserialize)]
struct QueryResponse {
    query: Option<Query>,
}

#[derive(Debug, Deserialize)]
struct Query {
    #[serde(default)]
    redirects: Vec<Redirect>,
    #[serde(default)]
    pages: BTreeMap<String, Page>,
}

#[derive(Debug, Deserialize)]
struct Redirect {
    from: String,
    to: String,
}

#[derive(Debug, Deserialize)]
struct Page {
    title: Option<String>,
    extract: Option<String>,
}

/// Plain-text extracts from the MediaWiki action API.
#[derive(Debug, Clone)]
pub struct WikipediaSource {
    client: Client,
    api_url: Url,
    language: String,
}

impl WikipediaSource {
    pub fn new(config: &SourceConfig) -> Result<Self> {
        let api_url = Url::parse(&config.api_url)
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", config.api_url, e)))?;
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            api_url,
            language: config.language.clone(),
        })
    }

    fn query_url(&self, topic: &str) -> Url {
        let mut url = self.api_url.clone();
        url.query_pairs_mut()
            .append_pair("action", "query")
            .append_pair("prop", "extracts")
            .append_pair("exlimit", "1")
            .append_pair("explaintext", "1")
            .append_pair("titles", topic)
            .append_pair("format", "json")
            .append_pair("utf8", "1")
            .append_pair("redirects", "1");
        url
    }
}

fn extract_text(response: QueryResponse) -> SourceText {
    let Some(query) = response.query else {
        return SourceText::NotFound;
    };
    for redirect in &query.redirects {
        tracing::debug!("Followed redirect {} -> {}", redirect.from, redirect.to);
    }
    query
        .pages
        .into_values()
        .next()
        .and_then(|page| {
            tracing::debug!("Resolved page {:?}", page.title);
            page.extract
        })
        .filter(|extract| !extract.trim().is_empty())
        .map(SourceText::Found)
        .unwrap_or(SourceText::NotFound)
}

#[async_trait]
impl ContentSource for WikipediaSource {
    fn name(&self) -> &str {
        "Wikipedia"
    }

    async fn fetch(&self, topic: &str) -> Result<SourceText> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(Error::InvalidTopic("topic must not be empty".to_string()));
        }

        let response = self
            .client
            .get(self.query_url(topic))
            .send()
            .await?
            .error_for_status()?;
        let body: QueryResponse = response
            .json()
            .await
            .map_err(|e| Error::Source(format!("unexpected Wikipedia response: {}", e)))?;

        let text = extract_text(body);
        match &text {
            SourceText::Found(extract) => tracing::info!(
                "📖 Fetched '{}' from {}.wikipedia ({} words)",
                topic,
                self.language,
                extract.split_whitespace().count()
            ),
            SourceText::NotFound => tracing::info!("📭 No {}.wikipedia page for '{}'", self.language, topic),
        }
        Ok(text)
    }
}
