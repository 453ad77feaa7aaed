use crate::core::linker::LinkInserter;
use crate::domain::model::LinkReport;
use crate::domain::ports::AccommodationExtractor;
use crate::utils::error::Result;

/// Drives one document through extraction and link insertion.
pub struct LinkEngine<E: AccommodationExtractor> {
    extractor: E,
    inserter: LinkInserter,
}

impl<E: AccommodationExtractor> LinkEngine<E> {
    pub fn new(extractor: E, affiliate_id: impl Into<String>) -> Self {
        Self {
            extractor,
            inserter: LinkInserter::new(affiliate_id),
        }
    }

    /// Each call is independent; nothing is carried over between documents.
    pub async fn run(&self, document: &str) -> Result<LinkReport> {
        tracing::info!("Extracting accommodation mentions...");
        let accommodations = self.extractor.extract(document).await?;
        tracing::info!("Found {} accommodation(s)", accommodations.len());

        for accommodation in &accommodations {
            tracing::debug!(
                "  - {} ({})",
                accommodation.name,
                if accommodation.location.is_empty() {
                    "no location"
                } else {
                    &accommodation.location
                }
            );
        }

        if accommodations.is_empty() {
            return Ok(LinkReport {
                accommodations,
                content: document.to_string(),
            });
        }

        tracing::info!("Inserting affiliate links...");
        let content = self.inserter.insert_links(document, &accommodations)?;

        Ok(LinkReport {
            accommodations,
            content,
        })
    }
}
