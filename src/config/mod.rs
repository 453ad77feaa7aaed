pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::{LinkerError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Fallback config location when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Resolved, immutable configuration. Built once by merging layers
/// (defaults -> file -> environment -> CLI overrides, later layers win) and
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub affiliate: AffiliateConfig,
    pub extractor: ExtractorConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AffiliateConfig {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// One of: mock, rules, llm.
    pub kind: String,
    pub endpoint: String,
    pub model: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Appended to the input file stem when naming the output file.
    pub suffix: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            affiliate: AffiliateConfig {
                id: "12345".to_string(),
            },
            extractor: ExtractorConfig {
                kind: "mock".to_string(),
                endpoint: "http://localhost:11434/api/generate".to_string(),
                model: "gemma3:4b".to_string(),
            },
            output: OutputConfig {
                suffix: "_linked".to_string(),
            },
        }
    }
}

/// One configuration layer. Every field is optional; absent fields leave the
/// underlying value untouched when the layer is applied.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigLayer {
    pub affiliate: Option<AffiliateLayer>,
    pub extractor: Option<ExtractorLayer>,
    pub output: Option<OutputLayer>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AffiliateLayer {
    pub id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ExtractorLayer {
    pub kind: Option<String>,
    pub endpoint: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OutputLayer {
    pub suffix: Option<String>,
}

impl ConfigLayer {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| LinkerError::InputError {
            message: format!("cannot read config file {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content).map_err(|e| LinkerError::ConfigError {
            message: format!("invalid config file {}: {}", path.display(), e),
        })
    }

    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn from_env() -> Self {
        let mut layer = ConfigLayer::default();
        if let Ok(id) = std::env::var("AFFILIATE_ID") {
            layer.affiliate = Some(AffiliateLayer { id: Some(id) });
        }
        if let Ok(model) = std::env::var("LLM_MODEL") {
            layer.extractor = Some(ExtractorLayer {
                model: Some(model),
                ..Default::default()
            });
        }
        layer
    }
}

impl AppConfig {
    /// Defaults, then the config file (explicit path, or the default location
    /// when it exists), then environment variables. CLI overrides are applied
    /// by the caller as the final layer.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut config = AppConfig::default();

        match config_file {
            Some(path) => config = config.apply(ConfigLayer::from_file(path)?),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_PATH);
                if fallback.exists() {
                    config = config.apply(ConfigLayer::from_file(fallback)?);
                }
            }
        }

        Ok(config.apply(ConfigLayer::from_env()))
    }

    /// Merge one layer on top of this config, key by key.
    pub fn apply(mut self, layer: ConfigLayer) -> Self {
        if let Some(affiliate) = layer.affiliate {
            if let Some(id) = affiliate.id {
                self.affiliate.id = id;
            }
        }
        if let Some(extractor) = layer.extractor {
            if let Some(kind) = extractor.kind {
                self.extractor.kind = kind;
            }
            if let Some(endpoint) = extractor.endpoint {
                self.extractor.endpoint = endpoint;
            }
            if let Some(model) = extractor.model {
                self.extractor.model = model;
            }
        }
        if let Some(output) = layer.output {
            if let Some(suffix) = output.suffix {
                self.output.suffix = suffix;
            }
        }
        self
    }
}

impl ConfigProvider for AppConfig {
    fn affiliate_id(&self) -> &str {
        &self.affiliate.id
    }

    fn output_suffix(&self) -> &str {
        &self.output.suffix
    }

    fn extractor_kind(&self) -> &str {
        &self.extractor.kind
    }

    fn extractor_endpoint(&self) -> &str {
        &self.extractor.endpoint
    }

    fn extractor_model(&self) -> &str {
        &self.extractor.model
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("affiliate.id", &self.affiliate.id)?;
        validation::validate_non_empty_string("output.suffix", &self.output.suffix)?;

        match self.extractor.kind.as_str() {
            "mock" | "rules" => {}
            "llm" => validation::validate_url("extractor.endpoint", &self.extractor.endpoint)?,
            other => {
                return Err(LinkerError::InvalidConfigValueError {
                    field: "extractor.kind".to_string(),
                    value: other.to_string(),
                    reason: "Supported kinds: mock, rules, llm".to_string(),
                })
            }
        }

        Ok(())
    }
}
