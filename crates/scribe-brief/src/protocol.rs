//! Google Generative Language API wire format types

use serde::{Deserialize, Serialize};

/// `generateContent` request
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    /// Conversation contents
    pub contents: Vec<Content>,
}

/// Content object containing role and parts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// Role ("user" or "model")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Content parts
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// Individual part within a content object
///
/// Only text parts matter here. Anything else the model sends back
/// deserializes with `text: None` and is skipped during extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    /// Text content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// `generateContent` response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Generated candidates
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// Generated candidate
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content
    #[serde(default)]
    pub content: Option<Content>,
    /// Finish reason
    #[serde(default)]
    pub finish_reason: Option<String>,
}

impl GenerateContentRequest {
    /// Build the single-turn user request the brief pipeline sends
    pub fn user_text(prompt: String) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_owned()),
                parts: vec![Part { text: Some(prompt) }],
            }],
        }
    }
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate, if any
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .and_then(|content| content.parts.first())
            .and_then(|part| part.text.as_deref())
    }

    /// Finish reason of the first candidate, if the model reported one
    pub fn finish_reason(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|candidate| candidate.finish_reason.as_deref())
    }
}
