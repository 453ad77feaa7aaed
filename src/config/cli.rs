use crate::config::{AffiliateLayer, ConfigLayer, ExtractorLayer};
use crate::domain::ports::Storage;
use crate::utils::error::{LinkerError, Result};
use crate::utils::validation::{self, Validate};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "blog-linker")]
#[command(about = "Insert booking affiliate links into a markdown blog post")]
pub struct CliArgs {
    /// Path to the markdown blog post file
    pub blog_post: PathBuf,

    /// Path to a TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Booking affiliate id (overrides config)
    #[arg(long)]
    pub affiliate_id: Option<String>,

    /// LLM model to use (overrides config)
    #[arg(long)]
    pub llm_model: Option<String>,

    /// Output directory for the processed file (default: same as input)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliArgs {
    /// The highest-precedence configuration layer.
    pub fn overlay(&self) -> ConfigLayer {
        ConfigLayer {
            affiliate: self.affiliate_id.clone().map(|id| AffiliateLayer { id: Some(id) }),
            extractor: self.llm_model.clone().map(|model| ExtractorLayer {
                model: Some(model),
                ..Default::default()
            }),
            output: None,
        }
    }
}

impl Validate for CliArgs {
    fn validate(&self) -> Result<()> {
        if !self.blog_post.exists() {
            return Err(LinkerError::InputError {
                message: format!("Blog post file not found: {}", self.blog_post.display()),
            });
        }
        if let Some(id) = &self.affiliate_id {
            validation::validate_non_empty_string("--affiliate-id", id)?;
        }
        if let Some(dir) = &self.output_dir {
            validation::validate_path("--output-dir", &dir.to_string_lossy())?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        let data = fs::read(full_path)?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_carries_only_given_flags() {
        let args = CliArgs::parse_from(["blog-linker", "post.md", "--affiliate-id", "54321"]);
        let layer = args.overlay();
        assert_eq!(layer.affiliate.unwrap().id.as_deref(), Some("54321"));
        assert!(layer.extractor.is_none());
        assert!(layer.output.is_none());
    }

    #[test]
    fn missing_input_file_is_an_input_error() {
        let args = CliArgs::parse_from(["blog-linker", "/definitely/not/here.md"]);
        let err = args.validate().unwrap_err();
        assert!(matches!(err, LinkerError::InputError { .. }));
    }
}
