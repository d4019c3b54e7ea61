//! Extraction chain property tests
//!
//! The chain must produce between 1 and 4 records for any input at all,
//! including empty strings and malformed bracket soup.

use proptest::prelude::*;

use agri_advisory_backend::services::extract_recommendations;

proptest! {
    /// Any input yields 1-4 records
    #[test]
    fn extraction_always_yields_one_to_four(input in ".*") {
        let records = extract_recommendations(&input, "rice", "vegetative");
        prop_assert!((1..=4).contains(&records.len()));
    }

    /// Bracket-heavy noise still yields 1-4 records
    #[test]
    fn extraction_survives_bracket_noise(input in r#"[\[\]{}",:a-z0-9 \n]{0,200}"#) {
        let records = extract_recommendations(&input, "maize", "flowering");
        prop_assert!((1..=4).contains(&records.len()));
    }

    /// Every record carries a non-empty title in the non-strict tiers
    #[test]
    fn fallback_records_have_titles(crop in "[a-z]{1,12}", stage in "[a-z]{1,12}") {
        let records = extract_recommendations("", &crop, &stage);
        prop_assert_eq!(records.len(), 4);
        for record in &records {
            prop_assert!(!record.title.is_empty());
        }
    }
}

#[test]
fn extraction_handles_degraded_generation_output() {
    // The exact placeholder the generation client emits on failure.
    let degraded =
        "AI service temporarily unavailable. Error: GOOGLE_GENAI_API_KEY not configured";
    let records = extract_recommendations(degraded, "wheat", "germination");
    assert_eq!(records.len(), 4);
    assert_eq!(records[0].title, "Wheat Growing Guide");
}

#[test]
fn extraction_prefers_strict_json() {
    let text = r#"Sure! [{"title":"A","search_terms":"a"},{"title":"B","search_terms":"b"}]"#;
    let records = extract_recommendations(text, "rice", "vegetative");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].title, "A");
    assert_eq!(records[1].title, "B");
}
