pub mod llm;
pub mod mock;
pub mod rules;

use crate::domain::ports::{AccommodationExtractor, ConfigProvider};
use crate::utils::error::{LinkerError, Result};

pub use llm::LlmExtractor;
pub use mock::MockExtractor;
pub use rules::RuleExtractor;

/// Pick the extractor the configuration asks for.
pub fn for_config<C: ConfigProvider>(config: &C) -> Result<Box<dyn AccommodationExtractor>> {
    match config.extractor_kind() {
        "mock" => Ok(Box::new(MockExtractor::new())),
        "rules" => Ok(Box::new(RuleExtractor::new())),
        "llm" => Ok(Box::new(LlmExtractor::new(
            config.extractor_endpoint(),
            config.extractor_model(),
        ))),
        other => Err(LinkerError::InvalidConfigValueError {
            field: "extractor.kind".to_string(),
            value: other.to_string(),
            reason: "Supported kinds: mock, rules, llm".to_string(),
        }),
    }
}
