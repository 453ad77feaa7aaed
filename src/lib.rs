pub mod config;
pub mod core;
pub mod domain;
pub mod extract;
pub mod utils;

pub use config::cli::{CliArgs, LocalStorage};
pub use config::AppConfig;
pub use core::engine::LinkEngine;
pub use core::linker::LinkInserter;
pub use domain::model::{Accommodation, LinkReport};
pub use domain::ports::{AccommodationExtractor, ConfigProvider, Storage};
pub use extract::{LlmExtractor, MockExtractor, RuleExtractor};
pub use utils::error::{LinkerError, Result};
