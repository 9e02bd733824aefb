//! Typed configuration resolved from the process environment and `.env`.

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::{Error, Result};

pub const DEFAULT_GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_GROQ_MODEL: &str = "llama-3.1-8b-instant";
pub const DEFAULT_WIKI_LANG: &str = "pt";

/// Settings for the chat-completions backend.
#[derive(Clone)]
pub struct GenerationConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    /// Completion budget sent with every request, independent of the words requested.
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl fmt::Debug for GenerationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationConfig")
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_GROQ_BASE_URL.to_string(),
            model: DEFAULT_GROQ_MODEL.to_string(),
            max_tokens: 1024,
            timeout: Duration::from_secs(60),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub language: String,
    pub api_url: String,
    pub timeout: Duration,
}

impl SourceConfig {
    pub fn for_language(language: &str) -> Self {
        Self {
            language: language.to_string(),
            api_url: format!("https://{}.wikipedia.org/w/api.php", language),
            timeout: Duration::from_secs(10),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self::for_language(DEFAULT_WIKI_LANG)
    }
}

/// Word-count policy. The summarize trigger and the truncation bound are independent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizerConfig {
    pub upper_threshold: usize,
    pub summarize_truncate_words: usize,
    pub expand_margin: usize,
    pub filler_word: String,
    pub failure_text: String,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            upper_threshold: 500,
            summarize_truncate_words: 2000,
            expand_margin: 20,
            filler_word: "informação".to_string(),
            failure_text: "Não foi possível gerar conteúdo adicional neste momento.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpanderConfig {
    pub prompt_word_limit: usize,
    /// Backend calls per generation; each retry halves the word limit.
    pub max_attempts: usize,
    pub continuation_marker: String,
}

impl Default for ExpanderConfig {
    fn default() -> Self {
        Self {
            prompt_word_limit: 2000,
            max_attempts: 2,
            continuation_marker: "...".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub generation: GenerationConfig,
    pub source: SourceConfig,
    pub normalizer: NormalizerConfig,
    pub expander: ExpanderConfig,
    /// Word floor applied to every generated article.
    pub min_words: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generation: GenerationConfig::default(),
            source: SourceConfig::default(),
            normalizer: NormalizerConfig::default(),
            expander: ExpanderConfig::default(),
            min_words: 300,
        }
    }
}

impl Config {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!("Failed to load .env file: {}", e);
            }
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        config.generation.api_key = get("GROQ_API_KEY");
        if let Some(url) = get("GROQ_BASE_URL") {
            config.generation.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(model) = get("GROQ_MODEL") {
            config.generation.model = model;
        }
        if let Some(tokens) = parse_var(&get, "GROQ_MAX_TOKENS")? {
            config.generation.max_tokens = tokens;
        }
        if let Some(secs) = parse_var(&get, "GROQ_TIMEOUT_SECS")? {
            config.generation.timeout = Duration::from_secs(secs);
        }

        if let Some(lang) = get("WIKI_LANG") {
            config.source = SourceConfig::for_language(&lang);
        }
        if let Some(url) = get("WIKI_API_URL") {
            config.source.api_url = url;
        }
        if let Some(secs) = parse_var(&get, "WIKI_TIMEOUT_SECS")? {
            config.source.timeout = Duration::from_secs(secs);
        }

        if let Some(min_words) = parse_var(&get, "ARTICLE_MIN_WORDS")? {
            config.min_words = min_words;
        }
        if let Some(filler) = get("ARTICLE_FILLER_WORD") {
            if filler.split_whitespace().count() != 1 {
                return Err(Error::Configuration(
                    "ARTICLE_FILLER_WORD must be a single word".to_string(),
                ));
            }
            config.normalizer.filler_word = filler;
        }

        Ok(config)
    }
}

fn parse_var<T, F>(get: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| Error::Configuration(format!("{} has invalid value '{}': {}", key, raw, e))),
        None => Ok(None),
    }
}
