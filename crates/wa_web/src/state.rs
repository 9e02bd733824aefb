use std::sync::Arc;
use wa_core::{Config, ContentSource, Result};
use wa_inference::{ArticleNormalizer, ModelKind};
use wa_sources::WikipediaSource;

pub struct AppState {
    pub source: Arc<dyn ContentSource>,
    pub normalizer: Arc<ArticleNormalizer>,
    pub min_words: usize,
}

impl AppState {
    /// Builds every collaborator up front so configuration errors abort startup.
    pub fn from_config(kind: ModelKind, config: &Config) -> Result<Self> {
        let source = WikipediaSource::new(&config.source)?;
        let normalizer = ArticleNormalizer::from_config(kind, config)?;
        Ok(Self {
            source: Arc::new(source),
            normalizer: Arc::new(normalizer),
            min_words: config.min_words,
        })
    }
}
