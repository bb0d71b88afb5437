use reqwest::Response;
use serde::{Deserialize, Serialize};

use crate::config::OpenAiConfig;

use super::ClassifyError;

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";

const SYSTEM_PROMPT: &str = "You are an expert school admissions assistant. \
Always return valid JSON matching the exact schema provided. Never add extra fields.";

pub fn build_prompt(subject: &str, body: &str) -> String {
    format!(
        r#"Analyze this school admissions email and extract structured information.

EMAIL SUBJECT: {subject}
EMAIL BODY: {body}

Return ONLY valid JSON with this exact schema:
{{
    "category": "Admissions|Fees|Transport|Curriculum|Complaint|Sports|General|Other",
    "priority": "High|Medium|Low",
    "student_name": "name or null",
    "grade_applying_for": "grade or null",
    "campus": "Dubai|Abu Dhabi|Sharjah|null",
    "contact_details": "phone/email or null",
    "summary": "1-sentence summary"
}}

Examples:
- Admissions inquiry -> category: "Admissions", priority: "High"
- Fee payment issue -> category: "Fees", priority: "High"
- General question -> category: "General", priority: "Medium""#
    )
}

pub fn build_request(config: &OpenAiConfig, subject: &str, body: &str) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: config.model.clone(),
        messages: vec![
            ChatMessage {
                role: "system".into(),
                content: SYSTEM_PROMPT.into(),
            },
            ChatMessage {
                role: "user".into(),
                content: build_prompt(subject, body),
            },
        ],
        temperature: config.temperature,
        max_tokens: config.max_tokens,
        response_format: ResponseFormat {
            r#type: "json_object".into(),
        },
    }
}

/// Unwraps the chat-completions envelope down to the assistant's text.
/// Everything here is a transport-level concern, so failures map to
/// [`ClassifyError::Service`]; the content itself is validated later.
pub async fn extract_content(response: Response) -> Result<String, ClassifyError> {
    let completion: ChatCompletionResponse = response
        .json()
        .await
        .map_err(|err| ClassifyError::Service(format!("malformed completion envelope: {err}")))?;

    let choice = completion
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| ClassifyError::Service("response did not contain any choices".into()))?;

    choice
        .message
        .and_then(|msg| msg.content)
        .ok_or_else(|| ClassifyError::Service("response missing message content".into()))
}

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
    pub response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub r#type: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: Option<ChatCompletionMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionMessage {
    pub content: Option<String>,
}
