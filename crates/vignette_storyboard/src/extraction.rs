//! Utilities for extracting structured data from oracle responses.
//!
//! Oracle responses often arrive as JSON wrapped in markdown code fences
//! or mixed with explanatory text. This module locates and strips such
//! wrapping before parsing; a parse failure is reported as an error for
//! the caller to downgrade into its task fallback.

use vignette_error::{StoryboardError, StoryboardErrorKind};

/// Extract JSON from a response that may contain markdown or extra text.
///
/// Extraction strategies, in order:
/// 1. Markdown code blocks: ```json ... ```
/// 2. Balanced brackets: [ ... ]
/// 3. Balanced braces: { ... }
///
/// Whichever of brackets/braces appears first in the response is tried
/// first, so a list payload containing objects is returned whole.
///
/// # Errors
///
/// Returns an error if no JSON payload is found in the response.
///
/// # Examples
///
/// ```
/// use vignette_storyboard::extract_json;
///
/// let response = "Here are the dialogues:\n\
///     \n\
///     ```json\n\
///     [{\"speaker_name_guess\": \"Yeonghee\", \"text\": \"Find my cat.\"}]\n\
///     ```\n";
///
/// let json = extract_json(response).unwrap();
/// assert!(json.contains("Yeonghee"));
/// ```
pub fn extract_json(response: &str) -> Result<String, StoryboardError> {
    if let Some(json) = extract_from_code_block(response, "json") {
        return Ok(json);
    }

    let bracket_pos = response.find('[');
    let brace_pos = response.find('{');

    match (bracket_pos, brace_pos) {
        (Some(b_pos), Some(c_pos)) if b_pos < c_pos => {
            if let Some(json) = extract_balanced(response, '[', ']') {
                return Ok(json);
            }
            if let Some(json) = extract_balanced(response, '{', '}') {
                return Ok(json);
            }
        }
        (Some(_), None) => {
            if let Some(json) = extract_balanced(response, '[', ']') {
                return Ok(json);
            }
        }
        _ => {
            if let Some(json) = extract_balanced(response, '{', '}') {
                return Ok(json);
            }
            if let Some(json) = extract_balanced(response, '[', ']') {
                return Ok(json);
            }
        }
    }

    tracing::error!(
        response_length = response.len(),
        "No JSON found in oracle response"
    );

    Err(StoryboardError::new(StoryboardErrorKind::NoJsonFound(
        response.len(),
    )))
}

/// Extract content from markdown code blocks.
///
/// Looks for patterns like:
/// - ```language\n...\n```
/// - ``` ... ``` (no language specified)
fn extract_from_code_block(response: &str, language: &str) -> Option<String> {
    let pattern = format!("```{}", language);

    if let Some(start) = response.find(&pattern) {
        let content_start = start + pattern.len();
        if let Some(end) = response[content_start..].find("```") {
            let content = &response[content_start..content_start + end];
            return Some(content.trim().to_string());
        }
        // No closing fence - likely a truncated response
        return Some(response[content_start..].trim().to_string());
    }

    // Try without language specifier
    if let Some(start) = response.find("```") {
        let content_start = start + 3;
        // Skip to next newline (in case there's a language specifier)
        let skip_to = response[content_start..]
            .find('\n')
            .map(|n| content_start + n + 1)
            .unwrap_or(content_start);

        if let Some(end) = response[skip_to..].find("```") {
            let content = &response[skip_to..skip_to + end];
            return Some(content.trim().to_string());
        }
        return Some(response[skip_to..].trim().to_string());
    }

    None
}

/// Extract content between balanced delimiters.
///
/// Finds the first occurrence of `open` and extracts content up to
/// the matching `close`, handling nesting and string literals.
fn extract_balanced(response: &str, open: char, close: char) -> Option<String> {
    let start = response.find(open)?;
    let mut depth = 0;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in response[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match ch {
            '\\' => escape_next = true,
            '"' => in_string = !in_string,
            c if c == open && !in_string => depth += 1,
            c if c == close && !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(response[start..start + i + 1].to_string());
                }
            }
            _ => {}
        }
    }

    None
}

/// Parse extracted JSON into a specific type.
///
/// # Errors
///
/// Returns an error if the JSON string cannot be parsed into type `T`.
/// A preview of the offending payload is retained in the log.
///
/// # Examples
///
/// ```
/// use vignette_storyboard::parse_json;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Line {
///     speaker_name_guess: String,
///     text: String,
/// }
///
/// let json = r#"{"speaker_name_guess": "Cheolsu", "text": "Tell me more."}"#;
/// let line: Line = parse_json(json).unwrap();
/// assert_eq!(line.speaker_name_guess, "Cheolsu");
/// ```
pub fn parse_json<T>(json_str: &str) -> Result<T, StoryboardError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(json_str).map_err(|e| {
        let preview = json_str.chars().take(100).collect::<String>();

        tracing::error!(
            error = %e,
            json_preview = %preview,
            "JSON parsing failed"
        );

        StoryboardError::new(StoryboardErrorKind::JsonParse(format!(
            "{} (JSON: {}...)",
            e, preview
        )))
    })
}
