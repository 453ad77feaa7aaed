//! Markdown link insertion.
//!
//! For each distinct accommodation (case-folded name), the first word-bounded,
//! case-insensitive occurrence of its name in the document is wrapped in a
//! markdown link to the booking search URL. The document text threads through
//! a sequential fold, so entity order decides ties when names overlap and a
//! later entity may match text already inside an earlier link's label. That is
//! the documented behavior: first entity in the list wins.

use crate::core::url::affiliate_url;
use crate::domain::model::Accommodation;
use crate::utils::error::{LinkerError, Result};
use regex::RegexBuilder;
use std::collections::HashSet;

pub struct LinkInserter {
    affiliate_id: String,
}

impl LinkInserter {
    pub fn new(affiliate_id: impl Into<String>) -> Self {
        Self {
            affiliate_id: affiliate_id.into(),
        }
    }

    /// Rewrite `document`, linking the first mention of each accommodation.
    ///
    /// Duplicate case-folded names are processed once (first record wins, its
    /// location decides the URL). Records with an empty name and names that do
    /// not occur in the document are skipped silently.
    pub fn insert_links(
        &self,
        document: &str,
        accommodations: &[Accommodation],
    ) -> Result<String> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut result = document.to_string();

        for accommodation in accommodations {
            if accommodation.name.is_empty() {
                tracing::debug!("Skipping record with empty name");
                continue;
            }
            if !seen.insert(accommodation.key()) {
                tracing::debug!("Already linked '{}', skipping", accommodation.name);
                continue;
            }

            let url = affiliate_url(
                &self.affiliate_id,
                &accommodation.name,
                &accommodation.location,
            );
            result = link_first_mention(&result, &accommodation.name, &url)?;
        }

        Ok(result)
    }
}

/// Replace the first word-bounded, case-insensitive occurrence of `name` with
/// `[matched-text](url)`, keeping the original casing of the matched text.
/// Returns the document unchanged when the name does not occur.
fn link_first_mention(document: &str, name: &str, url: &str) -> Result<String> {
    // The name is a literal, not pattern syntax.
    let pattern = format!(r"\b{}\b", regex::escape(name));
    let re = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| LinkerError::ProcessingError {
            message: format!("failed to compile search pattern for '{}': {}", name, e),
        })?;

    // Regex::replace rewrites only the leftmost match.
    Ok(re
        .replace(document, |caps: &regex::Captures| {
            format!("[{}]({})", &caps[0], url)
        })
        .into_owned())
}
