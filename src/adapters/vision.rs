//! Google Cloud Vision adapter for the `LabelDetector` port

use std::env;
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::VisionConfig;
use crate::core::models::Label;
use crate::core::ports::{DetectError, LabelDetector, LabelFuture};

/// Label detector backed by the Vision `images:annotate` endpoint
#[derive(Debug, Clone)]
pub struct GoogleVisionDetector {
    client: Client,
    endpoint: String,
    api_key_env: String,
    max_results: u32,
}

impl GoogleVisionDetector {
    /// Create a detector from the `[vision]` config section
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &VisionConfig) -> Result<Self, DetectError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DetectError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key_env: config.api_key_env.clone(),
            max_results: config.max_results,
        })
    }
}

#[derive(Serialize)]
struct AnnotateRequest<'a> {
    requests: [ImageRequest<'a>; 1],
}

#[derive(Serialize)]
struct ImageRequest<'a> {
    image: ImageContent<'a>,
    features: [Feature; 1],
}

#[derive(Serialize)]
struct ImageContent<'a> {
    content: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Feature {
    #[serde(rename = "type")]
    kind: &'static str,
    max_results: u32,
}

#[derive(Deserialize)]
struct AnnotateResponse {
    #[serde(default)]
    responses: Vec<ImageResponse>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImageResponse {
    #[serde(default)]
    label_annotations: Vec<Label>,
}

#[derive(Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

fn request_body(image_base64: &str, max_results: u32) -> AnnotateRequest<'_> {
    AnnotateRequest {
        requests: [ImageRequest {
            image: ImageContent { content: image_base64 },
            features: [Feature { kind: "LABEL_DETECTION", max_results }],
        }],
    }
}

/// Pull the labels of the first image out of a response body
fn parse_labels(body: &str) -> Result<Vec<Label>, DetectError> {
    let response: AnnotateResponse =
        serde_json::from_str(body).map_err(|e| DetectError::Decode(e.to_string()))?;
    Ok(response.responses.into_iter().next().map(|r| r.label_annotations).unwrap_or_default())
}

impl LabelDetector for GoogleVisionDetector {
    fn detect_labels(&self, image_base64: &str) -> LabelFuture<'_> {
        let image = image_base64.to_string();

        Box::pin(async move {
            let api_key = env::var(&self.api_key_env)
                .map_err(|_| DetectError::MissingApiKey(self.api_key_env.clone()))?;

            let url = format!("{}?key={api_key}", self.endpoint);
            let response = self
                .client
                .post(&url)
                .json(&request_body(&image, self.max_results))
                .send()
                .await
                .map_err(|e| DetectError::Transport(e.without_url().to_string()))?;

            let status = response.status();
            let text = response
                .text()
                .await
                .map_err(|e| DetectError::Transport(format!("failed to read response: {e}")))?;

            if !status.is_success() {
                let message = serde_json::from_str::<ApiError>(&text)
                    .map(|e| e.error.message)
                    .unwrap_or(text);
                return Err(DetectError::Api { status: status.as_u16(), message });
            }

            let labels = parse_labels(&text)?;
            log::debug!("Vision returned {} labels", labels.len());
            Ok(labels)
        })
    }
}
