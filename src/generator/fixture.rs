//! Candidates from a prepared JSON document
//!
//! The document maps clue text to candidate lists:
//!
//! ```json
//! {
//!   "Become dry through extreme heat": [{"word": "PARCH", "justification": "..."}],
//!   "Covered entrance to a house": [{"word": "PORCH", "justification": "..."}]
//! }
//! ```
//!
//! Clue lookup ignores case and surrounding whitespace. The exclusion hint is
//! ignored: a fixture always answers the same way.

use super::{CandidateGenerator, GenerationRequest, GeneratorError, RawCandidate};
use rustc_hash::FxHashMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct FixtureGenerator {
    by_clue: FxHashMap<String, Vec<RawCandidate>>,
}

fn clue_key(clue: &str) -> String {
    clue.trim().to_lowercase()
}

impl FixtureGenerator {
    #[must_use]
    pub fn new(entries: impl IntoIterator<Item = (String, Vec<RawCandidate>)>) -> Self {
        Self {
            by_clue: entries
                .into_iter()
                .map(|(clue, candidates)| (clue_key(&clue), candidates))
                .collect(),
        }
    }

    /// Parse a fixture document
    ///
    /// # Errors
    /// Returns `GeneratorError::Malformed` if the JSON does not match the
    /// expected shape.
    pub fn from_json(json: &str) -> Result<Self, GeneratorError> {
        let entries: FxHashMap<String, Vec<RawCandidate>> = serde_json::from_str(json)
            .map_err(|e| GeneratorError::Malformed(e.to_string()))?;
        Ok(Self::new(entries))
    }

    /// Read and parse a fixture file
    ///
    /// # Errors
    /// Returns `GeneratorError::Unavailable` if the file cannot be read, or
    /// `GeneratorError::Malformed` if it cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, GeneratorError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| GeneratorError::Unavailable(format!("{}: {e}", path.display())))?;
        Self::from_json(&json)
    }
}

impl CandidateGenerator for FixtureGenerator {
    fn generate(
        &mut self,
        request: &GenerationRequest<'_>,
    ) -> Result<Vec<Vec<RawCandidate>>, GeneratorError> {
        request
            .clues
            .iter()
            .map(|clue| {
                self.by_clue
                    .get(&clue_key(clue))
                    .cloned()
                    .ok_or_else(|| GeneratorError::Malformed(format!("no candidates for {clue:?}")))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    const FIXTURE: &str = r#"{
        "Become dry through extreme heat": [
            {"word": "PARCH", "justification": "to parch is to dry out"},
            {"word": "SEARS", "justification": "searing heat"}
        ],
        "Covered entrance to a house": [
            {"word": "porch", "reasoning": "a covered entrance"}
        ]
    }"#;

    #[test]
    fn answers_in_clue_order() {
        let mut generator = FixtureGenerator::from_json(FIXTURE).unwrap();
        let clues = vec![
            "covered entrance to a house ".to_string(),
            "Become dry through extreme heat".to_string(),
        ];
        let excluded = BTreeSet::new();
        let request = GenerationRequest {
            word_length: 5,
            clues: &clues,
            excluded: &excluded,
        };

        let response = generator.generate(&request).unwrap();
        assert_eq!(response.len(), 2);
        assert_eq!(response[0][0].word, "porch");
        assert_eq!(response[1].len(), 2);
    }

    #[test]
    fn unknown_clue_is_malformed() {
        let mut generator = FixtureGenerator::from_json(FIXTURE).unwrap();
        let clues = vec!["Something else".to_string()];
        let excluded = BTreeSet::new();
        let request = GenerationRequest {
            word_length: 5,
            clues: &clues,
            excluded: &excluded,
        };
        assert!(matches!(
            generator.generate(&request),
            Err(GeneratorError::Malformed(_))
        ));
    }

    #[test]
    fn invalid_json_is_malformed() {
        assert!(matches!(
            FixtureGenerator::from_json("[1, 2, 3]"),
            Err(GeneratorError::Malformed(_))
        ));
    }

    #[test]
    fn missing_file_is_unavailable() {
        assert!(matches!(
            FixtureGenerator::from_file("/nonexistent/fixture.json"),
            Err(GeneratorError::Unavailable(_))
        ));
    }
}
