use std::fmt;
use async_trait::async_trait;
use crate::error::GenerationResult;
use crate::types::GenerationRequest;

#[async_trait]
pub trait InferenceModel: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Send a single instruction-bearing prompt and return the generated text
    async fn complete(&self, prompt: &str) -> GenerationResult<String>;
}

#[async_trait]
pub trait TextExpander: Send + Sync {
    /// Expand or summarize the request prompt according to its mode
    async fn generate(&self, request: &GenerationRequest) -> GenerationResult<String>;
}
