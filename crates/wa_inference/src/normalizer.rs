use std::sync::Arc;

use tracing::{info, warn};
use wa_core::config::{Config, NormalizerConfig};
use wa_core::text::{ensure_word_count, truncate_words, word_count};
use wa_core::{GenerationRequest, GenerationResult, InferenceModel, NormalizationRequest, Result, TextExpander};

use crate::expander::Expander;
use crate::models::{create_model, ModelKind};

/// Brings base text to a word-count target by summarizing, expanding or passing it through.
pub struct ArticleNormalizer {
    expander: Arc<dyn TextExpander>,
    config: NormalizerConfig,
}

impl ArticleNormalizer {
    pub fn new(expander: Arc<dyn TextExpander>, config: NormalizerConfig) -> Self {
        Self { expander, config }
    }

    pub fn with_model(model: Arc<dyn InferenceModel>, config: &Config) -> Self {
        let expander = Expander::new(model, config.expander.clone());
        Self::new(Arc::new(expander), config.normalizer.clone())
    }

    /// Builds the backend from configuration; a missing credential fails here.
    pub fn from_config(kind: ModelKind, config: &Config) -> Result<Self> {
        let model = create_model(kind, &config.generation)?;
        Ok(Self::with_model(model, config))
    }

    pub async fn normalize(&self, request: &NormalizationRequest) -> String {
        let base = request.base_text.as_str();
        let count = word_count(base);

        if count > self.config.upper_threshold {
            let (truncated, _) = truncate_words(base, self.config.summarize_truncate_words);
            info!(words = count, "Summarizing long source text");
            let summary = self.render(self.expander.generate(&GenerationRequest::summarize(truncated)).await);
            return self.ensure_word_count(&summary, request.min_words);
        }

        if count < request.min_words {
            let needed = request.min_words - count;
            let prompt = match (&request.seed, base.trim().is_empty()) {
                (Some(seed), true) => seed.as_str(),
                _ => base,
            };
            info!(words = count, needed, "Expanding short source text");
            let generation = GenerationRequest::expand(prompt, needed + self.config.expand_margin);
            let continuation = self.render(self.expander.generate(&generation).await);

            let article = if base.trim().is_empty() {
                continuation
            } else {
                format!("{}\n\n{}", base, continuation)
            };
            return self.ensure_word_count(&article, request.min_words);
        }

        base.to_string()
    }

    pub fn ensure_word_count(&self, text: &str, min_words: usize) -> String {
        ensure_word_count(text, min_words, &self.config.filler_word)
    }

    fn render(&self, result: GenerationResult<String>) -> String {
        match result {
            Ok(content) => content,
            Err(e) => {
                warn!("Using failure text after generation error: {}", e);
                self.config.failure_text.clone()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use wa_core::{GenerationError, GenerationMode};

    /// Records every request and answers with a fixed number of words.
    struct RecordingExpander {
        response: GenerationResult<String>,
        requests: Mutex<Vec<GenerationRequest>>,
    }

    impl RecordingExpander {
        fn words(count: usize) -> Arc<Self> {
            Self::responding(Ok(vec!["gerado"; count].join(" ")))
        }

        fn responding(response: GenerationResult<String>) -> Arc<Self> {
            Arc::new(Self {
                response,
                requests: Mutex::new(Vec::new()),
            })
        }

        fn requests(&self) -> Vec<GenerationRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TextExpander for RecordingExpander {
        async fn generate(&self, request: &GenerationRequest) -> GenerationResult<String> {
            self.requests.lock().unwrap().push(request.clone());
            self.response.clone()
        }
    }

    fn words(count: usize) -> String {
        (0..count).map(|i| format!("palavra{}", i)).collect::<Vec<_>>().join(" ")
    }

    fn normalizer(expander: Arc<RecordingExpander>) -> ArticleNormalizer {
        ArticleNormalizer::new(expander, NormalizerConfig::default())
    }

    #[tokio::test]
    async fn test_in_range_text_is_unchanged() {
        let expander = RecordingExpander::words(10);
        let normalizer = normalizer(expander.clone());

        for count in [300, 350, 500] {
            let text = words(count);
            let result = normalizer.normalize(&NormalizationRequest::new(text.clone(), 300)).await;
            assert_eq!(result, text);
        }
        assert!(expander.requests().is_empty());
    }

    #[tokio::test]
    async fn test_empty_text_expands_with_margin() {
        let expander = RecordingExpander::words(250);
        let normalizer = normalizer(expander.clone());

        let request = NormalizationRequest::new("", 300).with_seed("Lisboa");
        let result = normalizer.normalize(&request).await;

        let requests = expander.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].mode, GenerationMode::Expand);
        assert_eq!(requests[0].words_needed, Some(320));
        assert_eq!(requests[0].prompt, "Lisboa");
        assert!(word_count(&result) >= 300);
        assert!(result.starts_with("gerado"));
    }

    #[tokio::test]
    async fn test_short_text_keeps_base_and_appends_continuation() {
        let expander = RecordingExpander::words(400);
        let normalizer = normalizer(expander.clone());

        let base = words(100);
        let result = normalizer
            .normalize(&NormalizationRequest::new(base.clone(), 300).with_seed("ignored"))
            .await;

        assert!(result.starts_with(&format!("{}\n\ngerado", base)));
        assert_eq!(word_count(&result), 500);
        let requests = expander.requests();
        assert_eq!(requests[0].prompt, base);
        assert_eq!(requests[0].words_needed, Some(220));
    }

    #[tokio::test]
    async fn test_short_text_always_reaches_floor() {
        let normalizer = normalizer(RecordingExpander::words(3));

        for (count, min_words) in [(0, 300), (1, 300), (299, 300), (10, 50)] {
            let result = normalizer.normalize(&NormalizationRequest::new(words(count), min_words)).await;
            assert!(word_count(&result) >= min_words, "{} words for floor {}", count, min_words);
        }
    }

    #[tokio::test]
    async fn test_long_text_summarized_once_with_bounded_prompt() {
        let expander = RecordingExpander::words(250);
        let normalizer = normalizer(expander.clone());

        let result = normalizer.normalize(&NormalizationRequest::new(words(600), 300)).await;

        let requests = expander.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].mode, GenerationMode::Summarize);
        assert_eq!(requests[0].words_needed, None);
        assert_eq!(word_count(&requests[0].prompt), 600);
        assert!(word_count(&result) >= 300);
    }

    #[tokio::test]
    async fn test_very_long_text_truncated_before_summarizing() {
        let expander = RecordingExpander::words(350);
        let normalizer = normalizer(expander.clone());

        let result = normalizer.normalize(&NormalizationRequest::new(words(5000), 300)).await;

        let requests = expander.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(word_count(&requests[0].prompt), 2000);
        assert!(requests[0].prompt.ends_with("palavra1999"));
        assert_eq!(word_count(&result), 350);
    }

    #[tokio::test]
    async fn test_generation_failure_renders_failure_text_and_pads() {
        let expander = RecordingExpander::responding(Err(GenerationError::EmptyContent));
        let normalizer = normalizer(expander);

        let result = normalizer.normalize(&NormalizationRequest::new("curto", 300)).await;
        let failure_text = NormalizerConfig::default().failure_text;
        assert!(result.starts_with(&format!("curto\n\n{}", failure_text)));
        assert_eq!(word_count(&result), 300);
        assert!(result.ends_with("informação"));
    }

    #[tokio::test]
    async fn test_padding_is_deterministic() {
        let normalizer = normalizer(RecordingExpander::words(5));
        let request = NormalizationRequest::new("pouco texto", 120);

        let first = normalizer.normalize(&request).await;
        let second = normalizer.normalize(&request).await;
        assert_eq!(first, second);
        assert_eq!(normalizer.ensure_word_count(&first, 120), first);
    }

    #[tokio::test]
    async fn test_thresholds_are_independent() {
        let expander = RecordingExpander::words(50);
        let config = NormalizerConfig {
            upper_threshold: 100,
            summarize_truncate_words: 150,
            ..NormalizerConfig::default()
        };
        let normalizer = ArticleNormalizer::new(expander.clone(), config);

        normalizer.normalize(&NormalizationRequest::new(words(400), 10)).await;
        let requests = expander.requests();
        assert_eq!(requests[0].mode, GenerationMode::Summarize);
        assert_eq!(word_count(&requests[0].prompt), 150);
    }

    #[test]
    fn test_from_config_without_key_fails() {
        let result = ArticleNormalizer::from_config(ModelKind::Groq, &Config::default());
        assert!(result.is_err());
    }
}
