//! Business logic services for the Agri Advisory Platform

pub mod extract;
pub mod inference;
pub mod prompt;
pub mod sanitize;

pub use extract::extract_recommendations;
pub use inference::InferenceService;
pub use sanitize::sanitize_markdown;
