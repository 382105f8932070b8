use crate::config::Config;
use crate::encoding::to_data_uri;
use crate::i18n::LookupMetrics;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

/// Returned by [`GeminiClient::ask_text`] when the model answers with no text.
pub const NO_RESPONSE_FALLBACK: &str = "I couldn't generate a response.";

/// Returned by [`GeminiClient::ask_text`] when the call fails.
pub const UNAVAILABLE_FALLBACK: &str = "Sorry, I am temporarily unavailable.";

/// MIME type declared for uploaded images; the model also accepts JPEG under it.
const UPLOAD_MIME_TYPE: &str = "image/png";

/// MIME type of the data URI handed back for edited images.
const RESULT_MIME_TYPE: &str = "image/png";

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    #[serde(default)]
    mime_type: String,
    #[serde(default)]
    data: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

impl Part {
    fn text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            ..Default::default()
        }
    }

    fn inline(mime_type: &str, data: &str) -> Self {
        Self {
            inline_data: Some(InlineData {
                mime_type: mime_type.to_string(),
                data: data.to_string(),
            }),
            ..Default::default()
        }
    }
}

impl GenerateContentResponse {
    fn first_parts(&self) -> &[Part] {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| content.parts.as_slice())
            .unwrap_or(&[])
    }

    /// Base64 payload of the first non-empty inline-data part of the first candidate.
    fn first_image(&self) -> Option<&str> {
        self.first_parts()
            .iter()
            .filter_map(|part| part.inline_data.as_ref())
            .map(|inline| inline.data.as_str())
            .find(|data| !data.is_empty())
    }

    /// All text parts of the first candidate, concatenated.
    fn text(&self) -> String {
        self.first_parts()
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect()
    }
}

/// Thin client for the Gemini `generateContent` endpoint.
///
/// Every operation is attempt-once: no retry, no local timeout, no caching.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
    image_model: String,
    text_model: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: config.gemini_api_url.trim_end_matches('/').to_string(),
            api_key: config.gemini_api_key.clone(),
            image_model: config.image_model.clone(),
            text_model: config.text_model.clone(),
        }
    }

    /// Edit an image given bare base64 image data and an instruction.
    ///
    /// Returns the edited image as a `data:image/png;base64,...` URI. Fails when
    /// the call errors or the response carries no image part.
    pub async fn edit_image(&self, image_base64: &str, instruction: &str) -> Result<String> {
        if instruction.trim().is_empty() {
            anyhow::bail!("Image edit instruction is empty");
        }

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: None,
                parts: vec![
                    Part::inline(UPLOAD_MIME_TYPE, image_base64),
                    Part::text(instruction),
                ],
            }],
        };

        let result = async {
            let response = self.generate(&self.image_model, &request).await?;
            let image = response
                .first_image()
                .context("No image generated.")?;
            Ok::<_, anyhow::Error>(to_data_uri(RESULT_MIME_TYPE, image))
        }
        .await;

        if let Err(e) = &result {
            LookupMetrics::global().record_remote_failure();
            error!("Gemini image edit error: {:#}", e);
        }

        result
    }

    /// Answer a free-text prompt.
    ///
    /// Never fails: a failed call is logged and answered with
    /// [`UNAVAILABLE_FALLBACK`], an empty answer with [`NO_RESPONSE_FALLBACK`].
    pub async fn ask_text(&self, prompt: &str) -> String {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part::text(prompt)],
            }],
        };

        match self.generate(&self.text_model, &request).await {
            Ok(response) => {
                let text = response.text();
                if text.is_empty() {
                    NO_RESPONSE_FALLBACK.to_string()
                } else {
                    text
                }
            }
            Err(e) => {
                LookupMetrics::global().record_remote_failure();
                error!("Gemini text error: {:#}", e);
                UNAVAILABLE_FALLBACK.to_string()
            }
        }
    }

    async fn generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        LookupMetrics::global().record_remote_call();
        let url = format!("{}/models/{}:generateContent", self.api_url, model);
        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .context("Failed to send request to Gemini API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            anyhow::bail!("Gemini API error ({}): {}", status, body);
        }

        response
            .json()
            .await
            .context("Failed to parse Gemini response")
    }
}
