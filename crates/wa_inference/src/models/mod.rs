use std::str::FromStr;
use std::sync::Arc;
use wa_core::config::GenerationConfig;
use wa_core::{Error, InferenceModel, Result};

pub mod dummy;
pub mod groq;

pub use dummy::DummyModel;
pub use groq::GroqModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelKind {
    #[default]
    Groq,
    Dummy,
}

impl FromStr for ModelKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "groq" => Ok(ModelKind::Groq),
            "dummy" => Ok(ModelKind::Dummy),
            other => Err(Error::Configuration(format!(
                "Unknown model '{}'. Available models: groq, dummy",
                other
            ))),
        }
    }
}

pub fn create_model(kind: ModelKind, config: &GenerationConfig) -> Result<Arc<dyn InferenceModel>> {
    let model: Arc<dyn InferenceModel> = match kind {
        ModelKind::Groq => Arc::new(GroqModel::new(config)?),
        ModelKind::Dummy => Arc::new(DummyModel::new()),
    };
    tracing::info!("🧠 Inference model initialized (using {})", model.name());
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_kind_parsing() {
        assert_eq!("groq".parse::<ModelKind>().unwrap(), ModelKind::Groq);
        assert_eq!("Dummy".parse::<ModelKind>().unwrap(), ModelKind::Dummy);
        assert!("ollama".parse::<ModelKind>().is_err());
    }

    #[test]
    fn test_create_groq_without_key_fails() {
        let result = create_model(ModelKind::Groq, &GenerationConfig::default());
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_create_dummy_without_key() {
        let model = create_model(ModelKind::Dummy, &GenerationConfig::default()).unwrap();
        assert_eq!(model.name(), "Dummy");
    }
}
