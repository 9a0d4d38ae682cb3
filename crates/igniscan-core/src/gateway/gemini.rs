//! Vertex AI Gemini gateway: maps the prompt bundle onto the
//! `generateContent` REST call.

use super::InferenceGateway;
use crate::errors::{InspectError, InspectResult};
use crate::model::{GenerationParams, ProbeSource, PromptBundle, PromptPart};
use async_trait::async_trait;
use base64::Engine;
use serde_json::json;
use tracing::{debug, info_span, Instrument};

/// Backend project/region/model selection, threaded in explicitly at
/// construction so tests can run against a fake gateway instead of ambient
/// process state.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BackendConfig {
    pub project: String,
    pub location: String,
    pub model: String,
}

pub struct GeminiClient {
    config: BackendConfig,
    access_token: String,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: BackendConfig, access_token: String) -> Self {
        Self {
            config,
            access_token,
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "https://{loc}-aiplatform.googleapis.com/v1/projects/{proj}/locations/{loc}/publishers/google/models/{model}:generateContent",
            loc = self.config.location,
            proj = self.config.project,
            model = self.config.model,
        )
    }
}

/// Maps the bundle onto the wire shape, preserving part order exactly.
/// Instruction text becomes a `text` part, locators become `fileData`,
/// uploaded bytes become base64 `inlineData`.
fn build_request_body(bundle: &PromptBundle, params: &GenerationParams) -> serde_json::Value {
    let parts: Vec<serde_json::Value> = bundle
        .parts
        .iter()
        .map(|part| match part {
            PromptPart::Instruction(text) => json!({ "text": text }),
            PromptPart::Probe(probe) => match &probe.source {
                ProbeSource::Locator(uri) => json!({
                    "fileData": { "mimeType": probe.kind.mime_type(), "fileUri": uri }
                }),
                ProbeSource::Bytes(bytes) => json!({
                    "inlineData": {
                        "mimeType": probe.kind.mime_type(),
                        "data": base64::engine::general_purpose::STANDARD.encode(bytes),
                    }
                }),
            },
            PromptPart::Reference(reference) => json!({
                "fileData": { "mimeType": reference.kind.mime_type(), "fileUri": reference.locator }
            }),
        })
        .collect();

    json!({
        "contents": [{ "role": "user", "parts": parts }],
        "generationConfig": {
            "maxOutputTokens": params.max_output_tokens,
            "temperature": params.temperature,
            "topP": params.top_p,
        },
    })
}

#[async_trait]
impl InferenceGateway for GeminiClient {
    async fn infer(
        &self,
        bundle: &PromptBundle,
        params: &GenerationParams,
    ) -> InspectResult<String> {
        let url = self.endpoint();
        let body = build_request_body(bundle, params);

        let span = info_span!(
            "gateway.infer",
            backend = self.backend_name(),
            model = self.config.model.as_str(),
            parts = bundle.len(),
        );

        async move {
            let start = std::time::Instant::now();
            let resp = self
                .client
                .post(&url)
                .bearer_auth(&self.access_token)
                .json(&body)
                .send()
                .await
                .map_err(|e| InspectError::inference("gemini", e.to_string()))?;

            let status = resp.status();
            if !status.is_success() {
                let error_text = resp.text().await.unwrap_or_default();
                return Err(InspectError::inference(
                    "gemini",
                    format!("generateContent error (status {status}): {error_text}"),
                ));
            }

            let json: serde_json::Value = resp
                .json()
                .await
                .map_err(|e| InspectError::inference("gemini", e.to_string()))?;

            let text = json
                .pointer("/candidates/0/content/parts/0/text")
                .and_then(|v| v.as_str())
                .ok_or_else(|| {
                    InspectError::inference("gemini", "response missing candidate text")
                })?
                .to_string();

            debug!(elapsed_ms = start.elapsed().as_millis() as u64, "inference complete");
            Ok(text)
        }
        .instrument(span)
        .await
    }

    fn backend_name(&self) -> &'static str {
        "gemini"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MediaKind, ProbeArtifact, ReferenceArtifact};

    fn bundle() -> PromptBundle {
        PromptBundle {
            parts: vec![
                PromptPart::Instruction("inspect this".to_string()),
                PromptPart::Probe(ProbeArtifact::from_bytes(MediaKind::Image, vec![1, 2, 3])),
                PromptPart::Reference(ReferenceArtifact {
                    key: "video".to_string(),
                    kind: MediaKind::Video,
                    locator: "gs://bucket/manual.mp4".to_string(),
                }),
            ],
        }
    }

    #[test]
    fn request_body_preserves_part_order() {
        let body = build_request_body(&bundle(), &GenerationParams::default());
        let parts = body["contents"][0]["parts"].as_array().unwrap();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0]["text"], "inspect this");
        assert_eq!(parts[1]["inlineData"]["mimeType"], "image/jpeg");
        assert_eq!(parts[2]["fileData"]["fileUri"], "gs://bucket/manual.mp4");
        assert_eq!(parts[2]["fileData"]["mimeType"], "video/mp4");
    }

    #[test]
    fn inline_probe_bytes_are_base64() {
        let body = build_request_body(&bundle(), &GenerationParams::default());
        let data = body["contents"][0]["parts"][1]["inlineData"]["data"]
            .as_str()
            .unwrap();
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(data)
            .unwrap();
        assert_eq!(decoded, vec![1, 2, 3]);
    }

    #[test]
    fn generation_params_are_forwarded() {
        let params = GenerationParams {
            max_output_tokens: 2048,
            temperature: 0.2,
            top_p: 0.8,
        };
        let body = build_request_body(&bundle(), &params);
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 2048);
        assert_eq!(body["generationConfig"]["temperature"], 0.2);
        assert_eq!(body["generationConfig"]["topP"], 0.8);
    }

    #[test]
    fn endpoint_embeds_project_and_location() {
        let client = GeminiClient::new(
            BackendConfig {
                project: "proj-1".to_string(),
                location: "us-central1".to_string(),
                model: "gemini-1.5-flash-001".to_string(),
            },
            "token".to_string(),
        );
        let url = client.endpoint();
        assert!(url.starts_with("https://us-central1-aiplatform.googleapis.com/"));
        assert!(url.contains("/projects/proj-1/locations/us-central1/"));
        assert!(url.ends_with("gemini-1.5-flash-001:generateContent"));
    }
}
