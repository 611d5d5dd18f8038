use serde::{Deserialize, Serialize};

use crate::config::GeminiConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.into(),
                }],
            }],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Content,
}

impl GenerateContentResponse {
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("Failed to reach generation API: {0}")]
    Transport(reqwest::Error),

    #[error("Generation API responded with {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to decode generation API response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Generation API response contains no candidate text")]
    MissingText,

    #[error("Invalid generation API url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

// The request URL carries the API key, so it never makes it into messages.
impl From<reqwest::Error> for GeminiError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.without_url())
    }
}

#[derive(Clone)]
pub struct GeminiClient {
    api_url: reqwest::Url,
    api_key: String,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, GeminiError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            api_url: endpoint_url(&config.api_url)?,
            api_key: config.api_key,
            client,
        })
    }

    pub async fn send(&self, prompt: &str) -> Result<String, GeminiError> {
        let body = GenerateContentRequest::from_prompt(prompt);

        tracing::debug!("Posting generateContent request to {}", self.api_url);

        let response = self
            .client
            .post(self.api_url.clone())
            .query(&[("key", &self.api_key)])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(GeminiError::Status { status, body: text });
        }

        Ok(text)
    }

    pub async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        let raw = self.send(prompt).await?;
        extract_text(&raw)
    }
}

/// Parses the configured endpoint and drops any `key` query parameter, so a
/// url written as `...:generateContent?key=` still gets exactly one key.
pub fn endpoint_url(raw: &str) -> Result<reqwest::Url, GeminiError> {
    let mut url = reqwest::Url::parse(raw).map_err(|e| GeminiError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(name, _)| name != "key")
        .map(|(name, value)| (name.into_owned(), value.into_owned()))
        .collect();

    if kept.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(kept);
    }

    Ok(url)
}

// candidates[0].content.parts[0].text
pub fn extract_text(raw: &str) -> Result<String, GeminiError> {
    let response: GenerateContentResponse = serde_json::from_str(raw)?;
    response
        .first_text()
        .map(str::to_string)
        .ok_or(GeminiError::MissingText)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_envelope_shape() {
        let body = serde_json::to_value(GenerateContentRequest::from_prompt("hi")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"contents":[{"parts":[{"text":"hi"}]}]})
        );
    }

    #[test]
    fn extracts_first_candidate_text() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"Hello there"}]}}]}"#;
        assert_eq!(extract_text(raw).unwrap(), "Hello there");
    }

    #[test]
    fn ignores_extra_fields_and_later_candidates() {
        let raw = r#"{
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "first"}, {"text": "second"}]},
                 "finishReason": "STOP"},
                {"content": {"parts": [{"text": "other"}]}}
            ],
            "usageMetadata": {"totalTokenCount": 12}
        }"#;
        assert_eq!(extract_text(raw).unwrap(), "first");
    }

    #[test]
    fn missing_candidates_is_decode_error() {
        assert!(matches!(extract_text("{}"), Err(GeminiError::Decode(_))));
    }

    #[test]
    fn empty_candidates_is_missing_text() {
        assert!(matches!(
            extract_text(r#"{"candidates":[]}"#),
            Err(GeminiError::MissingText)
        ));
    }

    #[test]
    fn empty_parts_is_missing_text() {
        assert!(matches!(
            extract_text(r#"{"candidates":[{"content":{"parts":[]}}]}"#),
            Err(GeminiError::MissingText)
        ));
    }

    #[test]
    fn endpoint_url_drops_trailing_key_param() {
        let url = endpoint_url("http://example.test/v1/m:generateContent?key=").unwrap();
        assert_eq!(url.as_str(), "http://example.test/v1/m:generateContent");
    }

    #[test]
    fn endpoint_url_keeps_other_params() {
        let url = endpoint_url("http://example.test/gen?alt=json&key=old").unwrap();
        assert_eq!(url.query(), Some("alt=json"));
    }

    #[test]
    fn endpoint_url_rejects_garbage() {
        assert!(matches!(
            endpoint_url("not a url"),
            Err(GeminiError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn non_json_is_decode_error() {
        assert!(matches!(
            extract_text("<html>bad gateway</html>"),
            Err(GeminiError::Decode(_))
        ));
    }
}
