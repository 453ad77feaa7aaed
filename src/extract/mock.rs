use crate::domain::model::Accommodation;
use crate::domain::ports::AccommodationExtractor;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Fixed-stub extractor for demos and tests. Always returns the properties
/// from the sample Donegal blog post, regardless of input.
#[derive(Debug, Default)]
pub struct MockExtractor;

impl MockExtractor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AccommodationExtractor for MockExtractor {
    async fn extract(&self, _text: &str) -> Result<Vec<Accommodation>> {
        Ok(vec![
            Accommodation::new("Central Hotel", "Donegal, Ireland"),
            Accommodation::new("Harvey's Point Hotel", "Donegal, Ireland"),
            Accommodation::new("Slieve League B&B", "Donegal, Ireland"),
        ])
    }
}
