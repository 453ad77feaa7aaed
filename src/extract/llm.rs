use crate::domain::model::Accommodation;
use crate::domain::ports::AccommodationExtractor;
use crate::utils::error::{LinkerError, Result};
use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use serde::Deserialize;

const PROMPT_TEMPLATE: &str = "Extract mentions of accommodation (hotels, hostels, B&Bs, apartments, villas, campsites, etc.)\n\
from the following text. For each accommodation found, produce a JSON object with fields:\n\
- \"name\": name of the accommodation (string)\n\
- \"place\": city, town, or locality (string or empty)\n\
- \"country\": country (string or empty)\n\n\
Return a JSON array of objects. Respond ONLY with valid JSON (no extra commentary).\n\n\
Text:\n{text}";

/// Model-backed extractor talking to an Ollama-style generate endpoint.
pub struct LlmExtractor {
    client: Client,
    endpoint: String,
    model: String,
}

/// Shape the prompt asks the model for. Every field is optional in practice,
/// models drop keys; a missing name becomes an empty string and the engine
/// skips the record downstream.
#[derive(Debug, Deserialize)]
struct RawMention {
    #[serde(default)]
    name: String,
    #[serde(default)]
    place: String,
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

impl LlmExtractor {
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            model: model.into(),
        }
    }

    /// Pull a JSON payload out of possibly chatty model output.
    ///
    /// Tries, in order: the first JSON array of objects, the first JSON
    /// object (wrapped into a list), and finally whatever sits between the
    /// outermost square brackets.
    fn parse_mentions(output: &str) -> Result<Vec<RawMention>> {
        let array_re = Regex::new(r"(?s)\[\s*\{.*?\}\s*\]").unwrap();
        if let Some(m) = array_re.find(output) {
            return Ok(serde_json::from_str(m.as_str())?);
        }

        let object_re = Regex::new(r"(?s)\{.*\}").unwrap();
        if let Some(m) = object_re.find(output) {
            let single: RawMention = serde_json::from_str(m.as_str())?;
            return Ok(vec![single]);
        }

        if let (Some(start), Some(end)) = (output.find('['), output.rfind(']')) {
            if end > start {
                return Ok(serde_json::from_str(&output[start..=end])?);
            }
        }

        Err(LinkerError::ExtractionError {
            message: "no JSON found in model output".to_string(),
        })
    }
}

#[async_trait]
impl AccommodationExtractor for LlmExtractor {
    async fn extract(&self, text: &str) -> Result<Vec<Accommodation>> {
        let prompt = PROMPT_TEMPLATE.replace("{text}", text);
        let body = serde_json::json!({
            "model": self.model,
            "prompt": prompt,
            "stream": false,
        });

        tracing::debug!("Querying {} (model {})", self.endpoint, self.model);
        let response = self.client.post(&self.endpoint).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LinkerError::ExtractionError {
                message: format!("model endpoint returned HTTP {}", status),
            });
        }

        let generated: GenerateResponse = response.json().await?;
        tracing::debug!("Model output: {}", generated.response);

        let mentions = Self::parse_mentions(&generated.response)?;
        Ok(mentions
            .into_iter()
            .map(|m| {
                let location = match (m.place.is_empty(), m.country.is_empty()) {
                    (false, false) => format!("{}, {}", m.place, m.country),
                    (false, true) => m.place,
                    (true, false) => m.country,
                    (true, true) => String::new(),
                };
                Accommodation::new(m.name, location)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_clean_json_array() {
        let out = r#"[{"name": "Hotel Aurora", "place": "Rome", "country": "Italy"}]"#;
        let mentions = LlmExtractor::parse_mentions(out).unwrap();
        assert_eq!(mentions.len(), 1);
        assert_eq!(mentions[0].name, "Hotel Aurora");
        assert_eq!(mentions[0].place, "Rome");
    }

    #[test]
    fn parses_an_array_embedded_in_commentary() {
        let out = "Sure! Here is the JSON you asked for:\n```json\n[{\"name\": \"Central Hotel\", \"place\": \"Donegal\", \"country\": \"Ireland\"}]\n```\nLet me know if you need more.";
        let mentions = LlmExtractor::parse_mentions(out).unwrap();
        assert_eq!(mentions.len(), 1);
        assert_eq!(mentions[0].country, "Ireland");
    }

    #[test]
    fn wraps_a_single_object_into_a_list() {
        let out = r#"{"name": "Slieve League B&B", "place": "", "country": "Ireland"}"#;
        let mentions = LlmExtractor::parse_mentions(out).unwrap();
        assert_eq!(mentions.len(), 1);
        assert_eq!(mentions[0].name, "Slieve League B&B");
    }

    #[test]
    fn tolerates_missing_fields() {
        let out = r#"[{"name": "Central Hotel"}, {"place": "Dublin"}]"#;
        let mentions = LlmExtractor::parse_mentions(out).unwrap();
        assert_eq!(mentions[0].place, "");
        assert_eq!(mentions[1].name, "");
    }

    #[test]
    fn errors_when_no_json_is_present() {
        let err = LlmExtractor::parse_mentions("I could not find any accommodations.");
        assert!(err.is_err());
    }
}
