//! Parallel scoring of a whole vocabulary

use super::complexity::{ComplexityScore, ComplexityScorer};
use crate::core::Word;
use rayon::prelude::*;

/// Score every word, preserving input order
///
/// Position `i` of the result belongs to `words[i]`, so the output can be
/// indexed by `WordId`.
#[must_use]
pub fn score_all(scorer: &ComplexityScorer<'_>, words: &[Word]) -> Vec<ComplexityScore> {
    words.par_iter().map(|word| scorer.score(word)).collect()
}

/// Word with the highest complexity, or `None` for an empty slice
///
/// Ties resolve to the alphabetically first word.
#[must_use]
pub fn hardest<'a>(words: &'a [Word], scores: &[ComplexityScore]) -> Option<(&'a Word, f64)> {
    words
        .par_iter()
        .zip(scores.par_iter())
        .map(|(word, score)| (word, score.value()))
        .max_by(|(w1, s1), (w2, s2)| s1.total_cmp(s2).then_with(|| w2.text().cmp(w1.text())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ScoringWeights;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    #[test]
    fn score_all_preserves_order() {
        let scorer = ComplexityScorer::new(ScoringWeights::default(), 8);
        let vocab = words(&["cat", "strength", "a"]);

        let scores = score_all(&scorer, &vocab);
        assert_eq!(scores.len(), 3);
        for (word, score) in vocab.iter().zip(&scores) {
            assert_eq!(*score, scorer.score(word));
        }
    }

    #[test]
    fn score_all_empty() {
        let scorer = ComplexityScorer::new(ScoringWeights::default(), 8);
        assert!(score_all(&scorer, &[]).is_empty());
    }

    #[test]
    fn hardest_picks_highest_score() {
        let scorer = ComplexityScorer::new(ScoringWeights::default(), 8);
        let vocab = words(&["cat", "jazz", "a"]);
        let scores = score_all(&scorer, &vocab);

        let (best, _) = hardest(&vocab, &scores).unwrap();
        assert_eq!(best.text(), "jazz");
    }

    #[test]
    fn hardest_ties_resolved_consistently() {
        let scorer = ComplexityScorer::new(ScoringWeights::default(), 8);
        let vocab = words(&["tac", "cat", "act"]);
        let only_length = ComplexityScorer::new(
            ScoringWeights {
                length: 1.0,
                rarity: 0.0,
                structure: 0.0,
            },
            8,
        );
        let scores = score_all(&only_length, &vocab);
        let (best, _) = hardest(&vocab, &scores).unwrap();
        assert_eq!(best.text(), "act");

        assert!(hardest(&[], &score_all(&scorer, &[])).is_none());
    }
}
