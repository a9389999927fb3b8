//! Brief request and response types

use serde::{Deserialize, Serialize};

/// A request to generate a content brief
///
/// Every field is optional on the wire. Missing fields take the defaults
/// below; fields that are present are used verbatim, even when empty.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BriefRequest {
    /// Working title for the piece
    pub title: String,
    /// Kind of content being planned
    pub content_type: String,
    /// Keywords the piece should target
    pub keywords: Vec<String>,
    /// Desired tone of voice
    pub tone: String,
    /// Intended audience
    pub audience: String,
    /// Free-form context passed through to the brief
    pub additional_notes: String,
}

impl Default for BriefRequest {
    fn default() -> Self {
        Self {
            title: "Untitled Content".to_string(),
            content_type: "blog post".to_string(),
            keywords: Vec::new(),
            tone: "informative and professional".to_string(),
            audience: "general audience interested in the topic".to_string(),
            additional_notes: String::new(),
        }
    }
}

/// A successfully generated brief
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BriefResponse {
    /// The generated brief text
    pub brief: String,
}
