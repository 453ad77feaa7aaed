use serde::{Deserialize, Serialize};

/// One accommodation mentioned in a blog post.
///
/// `location` is a free-form human-readable string ("Donegal, Ireland") and may
/// be empty when the extractor could not place the property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accommodation {
    pub name: String,
    #[serde(default)]
    pub location: String,
}

impl Accommodation {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }

    /// Case-folded identity used for deduplication. Display text keeps the
    /// original casing.
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Result of one engine run over a single document.
#[derive(Debug, Clone)]
pub struct LinkReport {
    pub accommodations: Vec<Accommodation>,
    pub content: String,
}
