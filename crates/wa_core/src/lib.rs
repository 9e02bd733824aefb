pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod source;
pub mod text;
pub mod types;

pub use config::Config;
pub use error::{Error, GenerationError, GenerationResult, Result};
pub use models::{InferenceModel, TextExpander};
pub use source::ContentSource;
pub use types::{Article, GenerationMode, GenerationRequest, NormalizationRequest, SourceText};
