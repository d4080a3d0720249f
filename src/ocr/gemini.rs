// src/ocr/gemini.rs
use base64::Engine;
use mime::Mime;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ocr::{ExtractionError, TextExtractor};

const PROMPT: &str = "Extract all of the text in this image. Reproduce it exactly as it appears, \
keeping line breaks and structure where possible.";

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    /// Base URL, without the model path.
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            timeout_secs: 60,
        }
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

pub struct GeminiExtractor {
    cfg: GeminiConfig,
    client: Client,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData<'a> {
    mime_type: &'a str,
    data: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestPart<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct GenerateResponse {
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct Candidate {
    content: ResponseContent,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct ResponseContent {
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct ResponsePart {
    text: Option<String>,
}

impl GeminiExtractor {
    pub fn new(cfg: GeminiConfig) -> Result<Self, ExtractionError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()
            .map_err(|e| ExtractionError::Request(e.to_string()))?;
        Ok(Self { cfg, client })
    }
}

fn build_request<'a>(image: &[u8], media_type: &'a str) -> GenerateRequest<'a> {
    GenerateRequest {
        contents: vec![RequestContent {
            parts: vec![
                RequestPart {
                    inline_data: Some(InlineData {
                        mime_type: media_type,
                        data: base64::engine::general_purpose::STANDARD.encode(image),
                    }),
                    text: None,
                },
                RequestPart {
                    inline_data: None,
                    text: Some(PROMPT),
                },
            ],
        }],
    }
}

/// Join the text parts of the first candidate.
fn collect_text(resp: GenerateResponse) -> Result<String, ExtractionError> {
    let text: String = resp
        .candidates
        .into_iter()
        .next()
        .map(|c| {
            c.content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(ExtractionError::EmptyResponse);
    }
    Ok(text)
}

impl TextExtractor for GeminiExtractor {
    fn extract_text(&self, image: &[u8], media_type: &Mime) -> Result<String, ExtractionError> {
        let payload = build_request(image, media_type.essence_str());

        let resp = self
            .client
            .post(self.cfg.url())
            .header("x-goog-api-key", &self.cfg.api_key)
            .json(&payload)
            .send()
            .map_err(|e| ExtractionError::Request(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(ExtractionError::Api(format!("{status} - {body}")));
        }

        let parsed: GenerateResponse = resp
            .json()
            .map_err(|e| ExtractionError::Api(format!("unreadable response: {e}")))?;

        collect_text(parsed)
    }
}
