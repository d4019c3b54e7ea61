//! Educational video recommendation records
//!
//! These are recovered from free-form model output, so every field is
//! lenient on decode: anything missing becomes an empty string.

use serde::{Deserialize, Serialize};

/// A single recommended educational video
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecommendation {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub search_terms: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub relevance_reason: String,
}
