//! Mode-aware prompting on top of an [`InferenceModel`].
//!
//! Every prompt is cut to a word limit before submission. When the backend
//! rejects a payload as too large, the call is repeated with half the limit
//! until `max_attempts` backend calls have been made.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};
use wa_core::config::ExpanderConfig;
use wa_core::text::truncate_words;
use wa_core::{GenerationError, GenerationMode, GenerationRequest, GenerationResult, InferenceModel, TextExpander};

pub const SUMMARY_MIN_WORDS: usize = 200;
pub const SUMMARY_MAX_WORDS: usize = 400;

pub struct Expander {
    model: Arc<dyn InferenceModel>,
    config: ExpanderConfig,
}

impl Expander {
    pub fn new(model: Arc<dyn InferenceModel>, config: ExpanderConfig) -> Self {
        Self { model, config }
    }

    fn bounded_text(&self, text: &str, limit: usize) -> String {
        let (mut kept, truncated) = truncate_words(text, limit);
        if truncated {
            kept.push(' ');
            kept.push_str(&self.config.continuation_marker);
        }
        kept
    }
}

pub fn instruction(mode: GenerationMode, words_needed: Option<usize>, text: &str) -> String {
    match mode {
        GenerationMode::Expand => {
            let length = match words_needed {
                Some(words) => format!("approximately {} additional words", words),
                None => "a few additional paragraphs".to_string(),
            };
            format!(
                "Continue the following text, writing {}. Keep the same language, tone and subject, \
                 and do not repeat the original text.\n\n{}",
                length, text
            )
        }
        GenerationMode::Summarize => format!(
            "Summarize the following text in {} to {} words, preserving its key information. \
             Write the summary in the same language as the text.\n\n{}",
            SUMMARY_MIN_WORDS, SUMMARY_MAX_WORDS, text
        ),
    }
}

#[async_trait]
impl TextExpander for Expander {
    async fn generate(&self, request: &GenerationRequest) -> GenerationResult<String> {
        let max_attempts = self.config.max_attempts.max(1);
        let mut limit = self.config.prompt_word_limit;
        let mut attempt = 1;

        loop {
            let text = self.bounded_text(&request.prompt, limit);
            let prompt = instruction(request.mode, request.words_needed, &text);
            debug!(mode = ?request.mode, attempt, word_limit = limit, "submitting generation request");

            match self.model.complete(&prompt).await {
                Ok(content) => return Ok(content),
                Err(GenerationError::PayloadTooLarge) if attempt < max_attempts => {
                    let reduced = (limit / 2).max(1);
                    warn!(
                        model = self.model.name(),
                        attempt,
                        "Payload too large, retrying with the first {} words",
                        reduced
                    );
                    limit = reduced;
                    attempt += 1;
                }
                Err(e) => {
                    warn!(model = self.model.name(), attempt, "Generation failed: {}", e);
                    return Err(e);
                }
            }
        }
    }
}
