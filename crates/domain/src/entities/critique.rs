//! Structured poem critique
//!
//! The shape a critique reply must resolve to. Every field is required:
//! a reply missing any of them does not deserialize, which is how partial
//! or malformed model output is rejected.

use serde::{Deserialize, Serialize};

/// Structured result of a poem critique
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoemCritique {
    /// Overall score. The prompt asks for 6-10 but the model's answer is
    /// taken as-is.
    pub score: i64,
    /// What the poem does well
    pub strengths: Vec<String>,
    /// Gentle, optional suggestions
    pub improvements: Vec<String>,
    /// Literary devices recognized in the text
    pub literary_devices: Vec<String>,
    /// One word describing the overall vibe
    pub mood: String,
}

impl PoemCritique {
    /// Check whether the score falls inside the range the prompt requests
    #[must_use]
    pub fn score_in_band(&self) -> bool {
        (6..=10).contains(&self.score)
    }
}
