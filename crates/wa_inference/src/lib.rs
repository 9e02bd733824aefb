pub mod expander;
pub mod models;
pub mod normalizer;

pub use expander::Expander;
pub use models::{create_model, ModelKind};
pub use normalizer::ArticleNormalizer;

pub mod prelude {
    pub use super::models::create_model;
    pub use super::{ArticleNormalizer, Expander, ModelKind};
    pub use wa_core::{Article, Config, Error, GenerationRequest, NormalizationRequest, Result, TextExpander};
}
