use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use color_eyre::{
    Result,
    eyre::{bail, eyre},
};
use log::info;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::image_model::{AspectRatio, ImageSize, ResponsePart};

mod error;
pub use error::GeminiApiError;

pub const MODEL: &str = "gemini-3-pro-image-preview";
const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentBody {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub parts: Vec<TextPart>,
}

#[derive(Debug, Serialize)]
pub struct TextPart {
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_modalities: Vec<String>,
    pub image_config: ImageConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageConfig {
    pub aspect_ratio: String,
    pub image_size: String,
}

impl GenerateContentBody {
    pub fn new(prompt: &str, aspect_ratio: AspectRatio, image_size: ImageSize) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![TextPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                response_modalities: vec!["TEXT".into(), "IMAGE".into()],
                image_config: ImageConfig {
                    aspect_ratio: aspect_ratio.to_string(),
                    image_size: image_size.to_string(),
                },
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<RawPart>,
}

/// A single response part as it appears on the wire. Text parts carry `text`,
/// image parts carry base64 bytes in `inline_data`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPart {
    pub text: Option<String>,
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
    status: String,
}

/// Sends a single generateContent request and returns the raw response
pub async fn query(
    prompt: &str,
    aspect_ratio: AspectRatio,
    image_size: ImageSize,
    api_key: &str,
    client: &Client,
) -> Result<GenerateContentResponse> {
    let body = GenerateContentBody::new(prompt, aspect_ratio, image_size);

    let resp = client
        .post(format!("{API_BASE}/{MODEL}:generateContent"))
        .header("x-goog-api-key", api_key)
        .header("content-type", "application/json")
        .json(&body)
        .send()
        .await?;

    let status = resp.status();
    let text = resp.text().await?;

    if !status.is_success() {
        if let Ok(err) = serde_json::from_str::<ErrorResponse>(&text) {
            return Err(GeminiApiError::from_status(&err.error.status, err.error.message).into());
        }
        bail!("Gemini request failed: {} - {}", status, text);
    }

    Ok(serde_json::from_str(&text)?)
}

/// Decodes the first candidate's parts into the ordered part sequence.
/// Parts that carry neither text nor image data are skipped.
pub fn decode_parts(response: GenerateContentResponse) -> Result<Vec<ResponsePart>> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| eyre!("Response contained no candidates"))?;

    let raw_parts = match candidate.content {
        Some(content) => content.parts,
        None => {
            info!(
                "Candidate without content (finish reason: {:?})",
                candidate.finish_reason
            );
            vec![]
        }
    };

    let mut parts = Vec::with_capacity(raw_parts.len());
    for raw in raw_parts {
        if let Some(inline) = raw.inline_data {
            let data = BASE64
                .decode(&inline.data)
                .map_err(|e| eyre!("Invalid base64 image data: {e}"))?;
            parts.push(ResponsePart::Image {
                mime_type: inline.mime_type,
                data,
            });
        } else if let Some(text) = raw.text {
            parts.push(ResponsePart::Text(text));
        } else {
            info!("Skipping unknown response part:\n{raw:#?}");
        }
    }

    Ok(parts)
}

#[cfg(test)]
mod test {
    use expect_test::expect;

    use super::*;

    #[test]
    fn request_serialization() {
        let body = GenerateContentBody::new("Some prompt", AspectRatio::Portrait, ImageSize::TwoK);

        let expect = expect![[
            r#"{"contents":[{"parts":[{"text":"Some prompt"}]}],"generationConfig":{"responseModalities":["TEXT","IMAGE"],"imageConfig":{"aspectRatio":"3:4","imageSize":"2K"}}}"#
        ]];
        expect.assert_eq(&serde_json::to_string(&body).unwrap());
    }

    #[test]
    fn decode_text_and_image_parts() -> Result<()> {
        let encoded = BASE64.encode(b"not really a png");
        let raw = format!(
            r#"{{
                "candidates": [{{
                    "content": {{
                        "parts": [
                            {{"text": "설명 텍스트"}},
                            {{"inlineData": {{"mimeType": "image/png", "data": "{encoded}"}}}},
                            {{"thoughtSignature": "opaque"}}
                        ],
                        "role": "model"
                    }},
                    "finishReason": "STOP"
                }}]
            }}"#
        );

        let response: GenerateContentResponse = serde_json::from_str(&raw)?;
        let parts = decode_parts(response)?;

        assert_eq!(
            parts,
            vec![
                ResponsePart::Text("설명 텍스트".into()),
                ResponsePart::Image {
                    mime_type: "image/png".into(),
                    data: b"not really a png".to_vec(),
                },
            ]
        );
        Ok(())
    }

    #[test]
    fn decode_without_candidates_fails() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        let err = decode_parts(response).unwrap_err();
        assert!(err.to_string().contains("no candidates"));
    }

    #[test]
    fn decode_candidate_without_content_yields_no_parts() -> Result<()> {
        let raw = r#"{"candidates": [{"finishReason": "PROHIBITED_CONTENT"}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(raw)?;
        assert_eq!(decode_parts(response)?, vec![]);
        Ok(())
    }
}
