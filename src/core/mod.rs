pub mod engine;
pub mod linker;
pub mod url;

pub use crate::domain::model::{Accommodation, LinkReport};
pub use crate::domain::ports::{AccommodationExtractor, ConfigProvider, Storage};
pub use crate::utils::error::Result;
