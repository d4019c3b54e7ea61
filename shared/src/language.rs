//! Language resolution for advisory text generation
//!
//! The platform serves farmers in five languages. Resolution is total:
//! any unrecognized or absent code falls back to English.

use serde::{Deserialize, Serialize};

/// Supported advisory languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
    Kn,
    Te,
    Ta,
}

impl Language {
    /// Resolve a language code to a supported language.
    ///
    /// Unknown codes and `None` both resolve to English.
    pub fn resolve(code: Option<&str>) -> Self {
        match code {
            Some("en") => Language::En,
            Some("hi") => Language::Hi,
            Some("kn") => Language::Kn,
            Some("te") => Language::Te,
            Some("ta") => Language::Ta,
            _ => Language::En,
        }
    }

    /// Instruction phrase for weather summaries
    pub fn summary_directive(&self) -> &'static str {
        match self {
            Language::En => "Respond in English",
            Language::Hi => "Respond in Hindi (हिन्दी)",
            Language::Kn => "Respond in Kannada (ಕನ್ನಡ)",
            Language::Te => "Respond in Telugu (తెలుగు)",
            Language::Ta => "Respond in Tamil (தமிழ்)",
        }
    }

    /// Instruction phrase for farming advice
    pub fn advice_directive(&self) -> &'static str {
        match self {
            Language::En => "Provide farming advice in English",
            Language::Hi => "Provide farming advice in Hindi (हिन्दी)",
            Language::Kn => "Provide farming advice in Kannada (ಕನ್ನಡ)",
            Language::Te => "Provide farming advice in Telugu (తెలుగు)",
            Language::Ta => "Provide farming advice in Tamil (தமிழ்)",
        }
    }

    /// Instruction phrase for video recommendations
    pub fn video_directive(&self) -> &'static str {
        match self {
            Language::En => "Provide video recommendations in English",
            Language::Hi => "Provide video recommendations in Hindi (हिन्दी)",
            Language::Kn => "Provide video recommendations in Kannada (ಕನ್ನಡ)",
            Language::Te => "Provide video recommendations in Telugu (తెలుగు)",
            Language::Ta => "Provide video recommendations in Tamil (தமிழ்)",
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        /// Resolution never fails and always yields usable directives
        #[test]
        fn resolution_is_total(code in ".*") {
            let language = Language::resolve(Some(&code));
            prop_assert!(!language.summary_directive().is_empty());
            prop_assert!(!language.advice_directive().is_empty());
            prop_assert!(!language.video_directive().is_empty());
        }
    }

    #[test]
    fn test_known_codes_resolve() {
        assert_eq!(Language::resolve(Some("en")), Language::En);
        assert_eq!(Language::resolve(Some("hi")), Language::Hi);
        assert_eq!(Language::resolve(Some("kn")), Language::Kn);
        assert_eq!(Language::resolve(Some("te")), Language::Te);
        assert_eq!(Language::resolve(Some("ta")), Language::Ta);
    }

    #[test]
    fn test_unknown_code_falls_back_to_english() {
        assert_eq!(Language::resolve(Some("fr")), Language::En);
        assert_eq!(Language::resolve(Some("")), Language::En);
        assert_eq!(Language::resolve(Some("EN")), Language::En);
        assert_eq!(Language::resolve(None), Language::En);
    }

    #[test]
    fn test_absent_matches_unknown() {
        assert_eq!(
            Language::resolve(None).summary_directive(),
            Language::resolve(Some("xx")).summary_directive()
        );
    }
}
