use std::env;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use journey_core::model::SurgicalAnalysis;

use crate::error::LiveTutorError;

/// Tutoring persona and method sent with every analysis request. The model
/// is instructed to reply with exactly the JSON shape `SurgicalAnalysis`
/// deserializes.
const SYSTEM_INSTRUCTION: &str = "\
You are an expert IELTS Writing Task 2 tutor, modelled after the teaching \
style of Pauline Cullen. Your methodology is \"The Invisible Work\".

When given a Task 2 Prompt:
1. Identify the General Topic vs. The Specific Question.
2. Identify \"The Trap\" (a common mistake students make, e.g., writing too generally).
3. Create a Logic Map (View A, View B, and Position).
4. Write a \"Surgical Introduction\". This introduction must be academic, \
precise, avoid cliches (like \"In this essay I will discuss...\"), and \
clearly state the position.

Tone: Clinical, Academic, Precise.

Reply with a single JSON object with exactly these fields: \"topicTitle\" \
(a short, 2-3 word title), \"specificQuestion\", \"theTrap\", \"logicMap\" \
(an object with \"viewA\", \"viewB\", \"position\"), and \"introduction\" \
(approx 40-50 words, directly answering the specific question).";

#[derive(Clone, Debug)]
pub struct LiveTutorConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl LiveTutorConfig {
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("TUTOR_AI_API_KEY").ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        let base_url =
            env::var("TUTOR_AI_BASE_URL").unwrap_or_else(|_| "https://api.openai.com/v1".into());
        let model = env::var("TUTOR_AI_MODEL").unwrap_or_else(|_| "gemini-2.5-flash".into());
        Some(Self {
            base_url,
            api_key,
            model,
        })
    }
}

/// Sends free-text essay prompts to the analysis gateway and parses the
/// structured reply.
///
/// Stateless: the caller serializes submissions by disabling re-submission
/// while a request is pending, so there is never more than one outstanding
/// request and a stale reply has no live view to act on. Failures are
/// surfaced, never retried automatically.
#[derive(Clone)]
pub struct LiveTutorService {
    client: Client,
    config: Option<LiveTutorConfig>,
}

impl LiveTutorService {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(LiveTutorConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<LiveTutorConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    /// Analyze one essay prompt.
    ///
    /// # Errors
    ///
    /// Returns `LiveTutorError` when the service is disabled, the request
    /// fails, the response is empty, or the reply does not match the
    /// analysis shape.
    pub async fn analyze(&self, prompt: &str) -> Result<SurgicalAnalysis, LiveTutorError> {
        let config = self.config.as_ref().ok_or(LiveTutorError::Disabled)?;

        let url = format!("{}/chat/completions", config.base_url.trim_end_matches('/'));
        let payload = ChatRequest {
            model: config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_INSTRUCTION.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: prompt.to_string(),
                },
            ],
            temperature: 0.3,
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        let response = self
            .client
            .post(url)
            .bearer_auth(&config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LiveTutorError::HttpStatus(response.status()));
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(LiveTutorError::EmptyResponse)?;

        parse_analysis(&content)
    }
}

/// Parses the gateway's reply content into the analysis shape. Missing
/// required fields are a hard failure, exactly like not-JSON content.
pub(crate) fn parse_analysis(content: &str) -> Result<SurgicalAnalysis, LiveTutorError> {
    Ok(serde_json::from_str(content.trim())?)
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}
