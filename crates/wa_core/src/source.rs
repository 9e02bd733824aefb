use async_trait::async_trait;
use crate::types::SourceText;
use crate::Result;

#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Name of the encyclopedia backing this source
    fn name(&self) -> &str;

    /// Look up the plain-text extract for a topic, following redirects
    async fn fetch(&self, topic: &str) -> Result<SourceText>;
}
