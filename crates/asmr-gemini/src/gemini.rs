//! Gemini `generateContent` transport.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use asmr_models::GroundingSource;

use crate::config::GeminiConfig;
use crate::error::{ConfigError, TransportError, TransportResult};
use crate::transport::{GenerateRequest, GenerateResponse, ModelTransport, SafetySetting};

/// Gemini API request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Tool>,
    #[serde(skip_serializing_if = "is_empty_slice")]
    safety_settings: &'a [SafetySetting],
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Part<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    file_data: Option<FileData<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FileData<'a> {
    file_uri: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Tool {
    google_search: EmptyObject,
}

#[derive(Debug, Serialize)]
struct EmptyObject {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
}

/// Gemini API response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<ResponseContent>,
    #[serde(default)]
    grounding_metadata: Option<GroundingMetadata>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingSource>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

/// Gemini API client.
pub struct GeminiTransport {
    api_key: String,
    model: String,
    base_url: String,
    client: Client,
}

impl GeminiTransport {
    /// Create a transport from configuration.
    pub fn new(config: &GeminiConfig) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .user_agent(concat!("asmr-trigger-finder/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl ModelTransport for GeminiTransport {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn generate(&self, request: &GenerateRequest) -> TransportResult<GenerateResponse> {
        let body = build_request_body(request);

        debug!(
            model = %self.model,
            search = request.enable_search,
            video = request.video_uri.is_some(),
            "Calling Gemini generateContent"
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let gemini_response: GeminiResponse = response
            .json()
            .await
            .map_err(|e| TransportError::decode(e.to_string()))?;

        into_generate_response(gemini_response)
    }
}

fn is_empty_slice<T>(items: &&[T]) -> bool {
    items.is_empty()
}

fn build_request_body(request: &GenerateRequest) -> GeminiRequest<'_> {
    let mut parts = Vec::with_capacity(2);
    if let Some(uri) = request.video_uri.as_deref() {
        parts.push(Part {
            text: None,
            file_data: Some(FileData { file_uri: uri }),
        });
    }
    parts.push(Part {
        text: Some(request.prompt.as_str()),
        file_data: None,
    });

    let tools = if request.enable_search {
        vec![Tool {
            google_search: EmptyObject {},
        }]
    } else {
        Vec::new()
    };

    // Gemini rejects a JSON MIME type when tools are enabled.
    let generation_config = (request.json_response && !request.enable_search).then_some(
        GenerationConfig {
            response_mime_type: "application/json",
        },
    );

    GeminiRequest {
        contents: vec![Content {
            role: "user",
            parts,
        }],
        tools,
        safety_settings: &request.safety_settings,
        generation_config,
    }
}

fn into_generate_response(response: GeminiResponse) -> TransportResult<GenerateResponse> {
    let block_reason = response
        .prompt_feedback
        .and_then(|f| f.block_reason);

    let Some(candidate) = response.candidates.into_iter().next() else {
        let reason = block_reason.unwrap_or_else(|| "no candidates".to_string());
        warn!(reason = %reason, "Gemini returned no candidates");
        return Err(TransportError::empty_response(reason));
    };

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        let reason = format!(
            "finishReason={}",
            candidate.finish_reason.as_deref().unwrap_or("unknown")
        );
        warn!(reason = %reason, "Gemini candidate had no text");
        return Err(TransportError::empty_response(reason));
    }

    let sources = candidate
        .grounding_metadata
        .map(|m| m.grounding_chunks)
        .unwrap_or_default();

    Ok(GenerateResponse { text, sources })
}
