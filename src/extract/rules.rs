use crate::domain::model::Accommodation;
use crate::domain::ports::AccommodationExtractor;
use crate::utils::error::Result;
use async_trait::async_trait;
use regex::Regex;
use std::collections::HashSet;

/// Keywords that mark a capitalized phrase as an accommodation mention.
const KEYWORDS: &str =
    "Hotel|Hostel|Inn|B&B|Guesthouse|Lodge|Resort|Motel|Villa|Campsite|Apartments?";

/// Offline heuristic extractor: capitalized phrases that end or start with an
/// accommodation keyword ("Harvey's Point Hotel", "Hotel Aurora"). A bare
/// keyword with no accompanying name word is ignored. Locations are not
/// inferred, so the search URL falls back to the name alone.
pub struct RuleExtractor {
    pattern: Regex,
}

impl RuleExtractor {
    pub fn new() -> Self {
        let word = r"[A-Z][A-Za-z'&-]*";
        // Static pattern, cannot fail to compile.
        let pattern = Regex::new(&format!(
            r"\b(?:(?:{word}\s+)+(?:{kw})|(?:{kw})(?:\s+{word})+)\b",
            word = word,
            kw = KEYWORDS,
        ))
        .unwrap();
        Self { pattern }
    }
}

impl Default for RuleExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccommodationExtractor for RuleExtractor {
    async fn extract(&self, text: &str) -> Result<Vec<Accommodation>> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut found = Vec::new();

        for m in self.pattern.find_iter(text) {
            // Leading articles read as part of the phrase but are not part of
            // the property name ("The Central Hotel" -> "Central Hotel").
            let name = m.as_str().strip_prefix("The ").unwrap_or(m.as_str());
            if seen.insert(name.to_lowercase()) {
                found.push(Accommodation::new(name, ""));
            }
        }

        tracing::debug!("Rule extractor found {} mention(s)", found.len());
        Ok(found)
    }
}
