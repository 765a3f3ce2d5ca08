//! Defensive critique reply parsing
//!
//! The model is told to answer with a bare JSON object, but real replies
//! sometimes arrive wrapped in a markdown fence or padded with prose. The
//! extractor is an ordered list of parser strategies, tried in sequence;
//! the first one that yields a complete critique wins. There is no partial
//! result: a reply either resolves to a full [`PoemCritique`] or fails.

use domain::PoemCritique;

use crate::error::CritiqueError;

/// Parser strategies, in the order they are attempted
const STRATEGIES: &[fn(&str) -> Option<PoemCritique>] = &[parse_bare, parse_fenced];

/// Resolve raw reply text into a structured critique
///
/// # Errors
///
/// Returns `CritiqueError::Parse` when no strategy recovers a complete
/// critique from the text.
pub fn extract_critique(raw: &str) -> Result<PoemCritique, CritiqueError> {
    STRATEGIES
        .iter()
        .find_map(|strategy| strategy(raw))
        .ok_or_else(|| {
            CritiqueError::Parse("reply contained no recoverable critique JSON".to_string())
        })
}

/// Strategy 1: the whole reply is the JSON object
fn parse_bare(raw: &str) -> Option<PoemCritique> {
    serde_json::from_str(raw.trim()).ok()
}

/// Strategy 2: the JSON object is wrapped in a markdown fence
///
/// Takes the span strictly between the first opening marker and the next
/// closing marker. A tagged ```json fence is preferred over a bare ```
/// fence so prose before an untagged block does not shadow the payload.
fn parse_fenced(raw: &str) -> Option<PoemCritique> {
    let body = fenced_body(raw, "```json").or_else(|| fenced_body(raw, "```"))?;
    serde_json::from_str(body.trim()).ok()
}

/// The text between `marker` and the following ``` fence, if both exist
fn fenced_body<'a>(raw: &'a str, marker: &str) -> Option<&'a str> {
    let (_, after_open) = raw.split_once(marker)?;
    let (body, _) = after_open.split_once("```")?;
    Some(body)
}
