//! Prompt construction for brief generation
//!
//! The model is steered entirely by this template. Section wording is part
//! of the service contract, so changes here change what editors get back.

use crate::types::BriefRequest;

/// Render the content-strategy prompt for a brief request
pub fn render(request: &BriefRequest) -> String {
    let title = &request.title;
    let content_type = &request.content_type;
    let audience = &request.audience;
    let tone = &request.tone;

    let keywords = if request.keywords.is_empty() {
        "No specific keywords provided, suggest relevant ones.".to_owned()
    } else {
        request.keywords.join(", ")
    };

    let notes = if request.additional_notes.is_empty() {
        "None."
    } else {
        request.additional_notes.as_str()
    };

    format!(
        r#"You are an expert content strategist and AI assistant tasked with generating comprehensive content briefs.
Generate a detailed content brief for a {content_type} titled "{title}".

Include the following sections:

1.  **Topic/Title:** "{title}"
2.  **Content Type:** {content_type}
3.  **Target Audience:** {audience}
4.  **Key Keywords:** {keywords}
5.  **Purpose/Goal:** What should the content achieve (e.g., inform, entertain, convert, educate)?
6.  **Key Takeaways/Main Points:** List 3-5 essential points the audience should remember.
7.  **Structure/Outline:** Suggest a logical flow (e.g., Introduction, H2 sections, Conclusion).
8.  **Call to Action (if applicable):** What action should the reader take?
9.  **Tone of Voice:** {tone}
10. **Word Count Estimate:** Provide a reasonable range (e.g., 800-1200 words).
11. **SEO Considerations:** Briefly mention any on-page SEO best practices.

Additional Notes/Context: {notes}

Ensure the brief is clear, concise, and actionable for a content editor.
"#
    )
}
