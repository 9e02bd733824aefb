use serde::{Deserialize, Serialize};

/// Final article returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub content: String,
}

/// Result of an encyclopedia lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceText {
    Found(String),
    NotFound,
}

impl SourceText {
    /// Text to normalize; a missing page contributes no words.
    pub fn as_text(&self) -> &str {
        match self {
            SourceText::Found(text) => text,
            SourceText::NotFound => "",
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SourceText::Found(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizationRequest {
    pub base_text: String,
    pub min_words: usize,
    /// Used as the generation prompt when `base_text` is blank.
    pub seed: Option<String>,
}

impl NormalizationRequest {
    pub fn new(base_text: impl Into<String>, min_words: usize) -> Self {
        Self {
            base_text: base_text.into(),
            min_words,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    /// Builds a request from a lookup, seeding with the topic.
    pub fn from_source(topic: &str, source: &SourceText, min_words: usize) -> Self {
        Self::new(source.as_text(), min_words).with_seed(topic)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    Expand,
    Summarize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub mode: GenerationMode,
    pub words_needed: Option<usize>,
}

impl GenerationRequest {
    pub fn expand(prompt: impl Into<String>, words_needed: usize) -> Self {
        Self {
            prompt: prompt.into(),
            mode: GenerationMode::Expand,
            words_needed: Some(words_needed),
        }
    }

    pub fn summarize(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            mode: GenerationMode::Summarize,
            words_needed: None,
        }
    }
}
