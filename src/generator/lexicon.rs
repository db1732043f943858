//! Fallback generator drawing random lexicon words
//!
//! Used when no clue-aware generator is available. Picks are random but the
//! randomness source is injected, so a seeded RNG reproduces the same
//! candidates.

use super::{
    CandidateGenerator, GenerationRequest, GeneratorError, MAX_CANDIDATES_PER_SLOT, RawCandidate,
};
use crate::core::Word;
use crate::wordlists::{LEXICON, loader::words_from_slice};
use rand::Rng;
use rand::seq::IndexedRandom;

pub struct LexiconGenerator<R: Rng> {
    words: Vec<Word>,
    rng: R,
    per_slot: usize,
}

impl<R: Rng> LexiconGenerator<R> {
    /// Generator over the embedded lexicon
    #[must_use]
    pub fn embedded(rng: R) -> Self {
        Self::new(words_from_slice(LEXICON), rng)
    }

    #[must_use]
    pub fn new(words: Vec<Word>, rng: R) -> Self {
        Self {
            words,
            rng,
            per_slot: MAX_CANDIDATES_PER_SLOT,
        }
    }

    #[must_use]
    pub fn with_per_slot(mut self, per_slot: usize) -> Self {
        self.per_slot = per_slot;
        self
    }
}

impl<R: Rng> CandidateGenerator for LexiconGenerator<R> {
    fn generate(
        &mut self,
        request: &GenerationRequest<'_>,
    ) -> Result<Vec<Vec<RawCandidate>>, GeneratorError> {
        let pool: Vec<&Word> = self
            .words
            .iter()
            .filter(|w| w.len() == request.word_length && !request.excluded.contains(w.text()))
            .collect();

        if pool.is_empty() {
            return Err(GeneratorError::Unavailable(format!(
                "lexicon has no unused {}-letter words",
                request.word_length
            )));
        }

        Ok(request
            .clues
            .iter()
            .map(|clue| {
                pool.choose_multiple(&mut self.rng, self.per_slot)
                    .map(|word| RawCandidate {
                        word: word.text().to_string(),
                        justification: format!("lexicon fallback for {clue:?}"),
                    })
                    .collect()
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::BTreeSet;

    fn request<'a>(clues: &'a [String], excluded: &'a BTreeSet<String>) -> GenerationRequest<'a> {
        GenerationRequest {
            word_length: 4,
            clues,
            excluded,
        }
    }

    #[test]
    fn picks_words_of_requested_length() {
        let mut generator = LexiconGenerator::embedded(StdRng::seed_from_u64(7));
        let clues = vec!["a".to_string(), "b".to_string()];
        let excluded = BTreeSet::new();

        let response = generator.generate(&request(&clues, &excluded)).unwrap();
        assert_eq!(response.len(), 2);
        for slot in &response {
            assert_eq!(slot.len(), MAX_CANDIDATES_PER_SLOT);
            assert!(slot.iter().all(|c| c.word.len() == 4));
            assert!(slot.iter().all(|c| !c.justification.is_empty()));
        }
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let clues = vec!["a".to_string()];
        let excluded = BTreeSet::new();

        let first = LexiconGenerator::embedded(StdRng::seed_from_u64(42))
            .generate(&request(&clues, &excluded))
            .unwrap();
        let second = LexiconGenerator::embedded(StdRng::seed_from_u64(42))
            .generate(&request(&clues, &excluded))
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn honours_exclusions() {
        let words = words_from_slice(&["cold", "cord", "card", "warm"]);
        let mut generator = LexiconGenerator::new(words, StdRng::seed_from_u64(1));
        let clues = vec!["a".to_string()];
        let excluded: BTreeSet<String> = ["COLD", "CORD"].iter().map(ToString::to_string).collect();

        let response = generator.generate(&request(&clues, &excluded)).unwrap();
        let mut words: Vec<_> = response[0].iter().map(|c| c.word.as_str()).collect();
        words.sort_unstable();
        assert_eq!(words, vec!["CARD", "WARM"]);
    }

    #[test]
    fn empty_pool_is_unavailable() {
        let words = words_from_slice(&["cold"]);
        let mut generator = LexiconGenerator::new(words, StdRng::seed_from_u64(1)).with_per_slot(3);
        let clues = vec!["a".to_string()];
        let excluded: BTreeSet<String> = std::iter::once("COLD".to_string()).collect();

        assert!(matches!(
            generator.generate(&request(&clues, &excluded)),
            Err(GeneratorError::Unavailable(_))
        ));
    }
}
