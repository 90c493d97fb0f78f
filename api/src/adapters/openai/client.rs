//! OpenAI chat-completions sentiment classifier

use std::sync::OnceLock;
use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::entities::{ClassifiedSentiment, SentimentLabel};
use crate::domain::ports::SentimentClassifier;
use crate::error::ClassificationError;

const SYSTEM_PROMPT: &str = "You are a sentiment analysis expert. Respond ONLY with strict JSON like: \
{ \"sentiment\": ..., \"score\": ..., \"confidence\": ... }. \
`sentiment` must be one of \"positive\", \"negative\" or \"neutral\". \
The `score` must always be a float between 0.0 and 1.0 representing sentiment intensity; \
if the sentiment is negative, do not score it more than 0.25.";

/// Sentiment classifier backed by an OpenAI-compatible chat completions API
pub struct OpenAiClassifier {
    http: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiClassifier {
    pub fn new(
        base_url: String,
        api_key: String,
        model: String,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self {
            http: Client::builder().timeout(timeout).build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model,
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Request types for the chat completions API
#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[async_trait]
impl SentimentClassifier for OpenAiClassifier {
    async fn classify(&self, text: &str) -> Result<ClassifiedSentiment, ClassificationError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            temperature: 0.0,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: text,
                },
            ],
        };

        let response = self
            .http
            .post(self.api_url("/chat/completions"))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClassificationError::ServiceUnavailable(format!(
                "{} - {}",
                status.as_u16(),
                message
            )));
        }

        let body = response.text().await?;
        let content = completion_content(&body)?;

        parse_sentiment(&content)
    }
}

/// Pull the first choice's message content out of a completion body
fn completion_content(body: &str) -> Result<String, ClassificationError> {
    let invalid = |reason: String| ClassificationError::InvalidResponse {
        reason,
        raw: body.to_string(),
    };

    let completion: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| invalid(format!("malformed completion: {}", e)))?;

    completion
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or_else(|| invalid("no message content in completion".to_string()))
}

/// Strip a surrounding markdown code fence (optionally tagged `json`) if present
pub fn strip_code_fence(raw: &str) -> &str {
    static OPEN: OnceLock<Regex> = OnceLock::new();
    static CLOSE: OnceLock<Regex> = OnceLock::new();
    let open = OPEN.get_or_init(|| Regex::new(r"^```(?:json|JSON)?[ \t]*\r?\n?").unwrap());
    let close = CLOSE.get_or_init(|| Regex::new(r"\r?\n?```$").unwrap());

    let trimmed = raw.trim();
    if !trimmed.starts_with("```") {
        return trimmed;
    }

    let start = open.find(trimmed).map(|m| m.end()).unwrap_or(0);
    let body = &trimmed[start..];
    let end = close.find(body).map(|m| m.start()).unwrap_or(body.len());
    body[..end].trim()
}

/// Parse and validate a raw classifier reply into a normalized sentiment.
///
/// The score is scaled to 0-100, rounded half away from zero, then clamped.
/// Confidence is clamped to 0.0-1.0.
pub fn parse_sentiment(raw: &str) -> Result<ClassifiedSentiment, ClassificationError> {
    let invalid = |reason: String| ClassificationError::InvalidResponse {
        reason,
        raw: raw.to_string(),
    };

    let value: Value = serde_json::from_str(strip_code_fence(raw))
        .map_err(|e| invalid(format!("not valid JSON: {}", e)))?;
    let object = value
        .as_object()
        .ok_or_else(|| invalid("expected a JSON object".to_string()))?;

    let label = object
        .get("sentiment")
        .ok_or_else(|| invalid("missing field `sentiment`".to_string()))?
        .as_str()
        .ok_or_else(|| invalid("`sentiment` is not a string".to_string()))?
        .parse::<SentimentLabel>()
        .map_err(invalid)?;
    let score = number_field(object, "score").map_err(invalid)?;
    let confidence = number_field(object, "confidence").map_err(invalid)?;

    Ok(ClassifiedSentiment {
        label,
        intensity: (score * 100.0).round().clamp(0.0, 100.0) as u8,
        confidence: confidence.clamp(0.0, 1.0),
    })
}

/// Read a finite number, accepting numeric strings like "0.8"
fn number_field(object: &Map<String, Value>, key: &str) -> Result<f64, String> {
    let value = object
        .get(key)
        .ok_or_else(|| format!("missing field `{}`", key))?;

    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .ok_or_else(|| format!("`{}` is not a number", key))?;

    if number.is_finite() {
        Ok(number)
    } else {
        Err(format!("`{}` is not finite", key))
    }
}
