use std::fmt;
use wa_core::{GenerationError, GenerationResult, InferenceModel};

/// Offline model echoing the tail of the prompt, for local runs without credentials.
pub struct DummyModel {
    words: usize,
}

impl fmt::Debug for DummyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyModel").field("words", &self.words).finish()
    }
}

impl DummyModel {
    pub fn new() -> Self {
        Self { words: 60 }
    }

    pub fn with_words(words: usize) -> Self {
        Self { words }
    }
}

impl Default for DummyModel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl InferenceModel for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn complete(&self, prompt: &str) -> GenerationResult<String> {
        let words: Vec<&str> = prompt.split_whitespace().collect();
        let start = words.len().saturating_sub(self.words);
        let output = words[start..].join(" ");
        if output.is_empty() {
            return Err(GenerationError::EmptyContent);
        }
        Ok(output)
    }
}
