//! Structured extraction of video recommendations from unreliable text
//!
//! The generative model is asked for a JSON array but may answer with
//! anything: valid JSON buried in prose, a loose bulleted list, or an
//! outage placeholder. Extraction is a three-tier fallback machine, first
//! success wins, and the result always has between 1 and 4 records:
//!
//! 1. Strict: decode the span from the first `[` to the last `]` as a
//!    JSON array of records.
//! 2. Heuristic: synthesize records from lines that look like titles.
//! 3. Static: fixed catalog parameterized by crop and growth stage.
//!
//! The strict tier's span selection is deliberately greedy across the whole
//! text; unrelated bracketed content makes it fail and fall through. Kept
//! for behavioral compatibility with existing clients.

use shared::VideoRecommendation;

const MAX_RECOMMENDATIONS: usize = 4;

/// Words marking a line as a candidate title in the heuristic tier
const TITLE_HINTS: [&str; 3] = ["video", "tutorial", "guide"];

/// Recover 1-4 recommendation records from free text. Never fails.
pub fn extract_recommendations(
    text: &str,
    crop_name: &str,
    growth_stage: &str,
) -> Vec<VideoRecommendation> {
    if let Some(records) = strict_tier(text) {
        tracing::debug!(count = records.len(), "strict extraction succeeded");
        return records;
    }
    if let Some(records) = heuristic_tier(text) {
        tracing::debug!(count = records.len(), "heuristic extraction succeeded");
        return records;
    }
    tracing::debug!(crop = crop_name, "falling back to static recommendations");
    fallback_recommendations(crop_name, growth_stage)
}

/// Tier 1: decode the greedy first-`[`..last-`]` span as a JSON array
fn strict_tier(text: &str) -> Option<Vec<VideoRecommendation>> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    if end <= start {
        return None;
    }
    let span = &text[start..=end];
    let mut records: Vec<VideoRecommendation> = serde_json::from_str(span).ok()?;
    if records.is_empty() {
        return None;
    }
    records.truncate(MAX_RECOMMENDATIONS);
    Some(records)
}

/// Tier 2: synthesize records from title-looking lines
fn heuristic_tier(text: &str) -> Option<Vec<VideoRecommendation>> {
    let mut records = Vec::new();
    for line in text.lines() {
        let lower = line.to_lowercase();
        if lower.contains("title") || TITLE_HINTS.iter().any(|hint| lower.contains(hint)) {
            records.push(VideoRecommendation {
                title: line.trim().to_string(),
                description: "AI-recommended video for current conditions".to_string(),
                search_terms: format!("smart agriculture {}", line.trim().to_lowercase()),
                category: "Smart Farming".to_string(),
                relevance_reason: "Recommended based on current sensor data".to_string(),
            });
            if records.len() >= MAX_RECOMMENDATIONS {
                break;
            }
        }
    }
    if records.is_empty() {
        None
    } else {
        Some(records)
    }
}

/// Tier 3: fixed catalog parameterized by crop and growth stage
pub fn fallback_recommendations(crop_name: &str, growth_stage: &str) -> Vec<VideoRecommendation> {
    vec![
        VideoRecommendation {
            title: format!("{} Growing Guide", title_case(crop_name)),
            description: format!(
                "Complete guide for growing {} in {} stage",
                crop_name, growth_stage
            ),
            search_terms: format!("{} {} growing guide", crop_name, growth_stage),
            category: "Crop Care".to_string(),
            relevance_reason: "Based on selected crop and growth stage".to_string(),
        },
        VideoRecommendation {
            title: "Smart Agriculture Techniques".to_string(),
            description: "Modern farming methods and technology".to_string(),
            search_terms: "smart agriculture technology".to_string(),
            category: "Smart Farming".to_string(),
            relevance_reason: "General agricultural education".to_string(),
        },
        VideoRecommendation {
            title: "Soil Management Best Practices".to_string(),
            description: "How to maintain healthy soil for better yields".to_string(),
            search_terms: "soil management agriculture".to_string(),
            category: "Soil Management".to_string(),
            relevance_reason: "Essential for all crops".to_string(),
        },
        VideoRecommendation {
            title: "Weather Monitoring for Farmers".to_string(),
            description: "Understanding weather patterns and their impact".to_string(),
            search_terms: "weather monitoring farming".to_string(),
            category: "Weather Monitoring".to_string(),
            relevance_reason: "Important for crop planning".to_string(),
        },
    ]
}

/// Capitalize the first letter of each whitespace-separated word
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_tier_decodes_embedded_array() {
        let text = r#"Here are my picks:
[{"title":"Rice Irrigation Basics","description":"d","search_terms":"s","category":"Irrigation","relevance_reason":"r"}]
Hope that helps!"#;
        let records = extract_recommendations(text, "rice", "vegetative");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Rice Irrigation Basics");
    }

    #[test]
    fn test_strict_tier_tolerates_missing_fields() {
        let records = extract_recommendations(r#"[{"title":"Only a title"}]"#, "rice", "vegetative");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Only a title");
        assert_eq!(records[0].category, "");
    }

    #[test]
    fn test_strict_tier_truncates_to_four() {
        let array: Vec<String> = (0..6).map(|i| format!(r#"{{"title":"t{}"}}"#, i)).collect();
        let text = format!("[{}]", array.join(","));
        let records = extract_recommendations(&text, "rice", "vegetative");
        assert_eq!(records.len(), 4);
    }

    #[test]
    fn test_greedy_span_breaks_on_unrelated_brackets() {
        // Prose brackets before and after the real array widen the span
        // into invalid JSON, so the strict tier falls through.
        let text = r#"[note] real data: [{"title":"Guide to maize"}] [end]"#;
        let records = extract_recommendations(text, "maize", "flowering");
        // Heuristic tier catches the "guide" line instead.
        assert_eq!(records.len(), 1);
        assert!(records[0].title.contains("Guide to maize"));
        assert_eq!(records[0].category, "Smart Farming");
    }

    #[test]
    fn test_heuristic_tier_collects_title_lines() {
        let text = "Intro line\nTitle: Pest Control Tips\nWatch this tutorial on drip systems\nfooter";
        let records = extract_recommendations(text, "rice", "vegetative");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "Title: Pest Control Tips");
        assert!(records[1].search_terms.starts_with("smart agriculture "));
    }

    #[test]
    fn test_heuristic_tier_caps_at_four() {
        let text = "video one\nvideo two\nvideo three\nvideo four\nvideo five";
        let records = extract_recommendations(text, "rice", "vegetative");
        assert_eq!(records.len(), 4);
    }

    #[test]
    fn test_static_tier_on_empty_input() {
        let records = extract_recommendations("", "kidney beans", "flowering");
        assert_eq!(records.len(), 4);
        assert_eq!(records[0].title, "Kidney Beans Growing Guide");
        assert!(records[0].description.contains("flowering stage"));
        assert_eq!(records[3].category, "Weather Monitoring");
    }

    #[test]
    fn test_static_tier_on_malformed_brackets() {
        let records = extract_recommendations("]][[", "rice", "vegetative");
        assert_eq!(records.len(), 4);
        assert_eq!(records[0].title, "Rice Growing Guide");
    }

    #[test]
    fn test_empty_json_array_falls_through() {
        let records = extract_recommendations("[]", "rice", "vegetative");
        assert_eq!(records.len(), 4);
    }

    #[test]
    fn test_array_of_non_objects_falls_through() {
        let records = extract_recommendations("[1, 2, 3]", "rice", "vegetative");
        assert_eq!(records.len(), 4);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("rice"), "Rice");
        assert_eq!(title_case("kidney beans"), "Kidney Beans");
        assert_eq!(title_case(""), "");
    }
}
