//! Word complexity scoring
//!
//! A word's complexity is a weighted sum of three independent terms:
//!
//! ```text
//! score = length_weight × L + rarity_weight × R + structure_weight × S
//!
//! L = n                          if n <= knee
//!   = knee + ln(1 + n - knee)    otherwise
//! R = n × mean letter rarity (+ log10(rank) when a frequency rank is known)
//! S = extra repeated letters + adjacent consonant links + glyph points / 4
//! ```
//!
//! Every term is non-negative and finite, so with non-negative weights the
//! score is too. Appending a letter never lowers L, R or S, so a word never
//! scores below any of its prefixes. Frequency ranks belong to whole words and
//! are outside that guarantee.

use crate::core::letters::{glyph_confusion, is_vowel, letter_rarity};
use crate::core::{FrequencySource, Word};

/// Divisor turning glyph-confusion table points into structure units
const GLYPH_POINTS_PER_UNIT: f64 = 4.0;

/// Weights of the three complexity terms
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub length: f64,
    pub rarity: f64,
    pub structure: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            length: 1.0,
            rarity: 1.5,
            structure: 1.0,
        }
    }
}

/// Scalar difficulty contribution of a word's shape
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ComplexityScore(f64);

impl ComplexityScore {
    pub(crate) fn new(value: f64) -> Self {
        debug_assert!(
            value.is_finite() && value >= 0.0,
            "complexity must be finite and non-negative, got {value}"
        );
        Self(value)
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

/// Unweighted values of each term, for inspection and tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub length: f64,
    pub rarity: f64,
    pub structure: f64,
    pub repeated_letters: usize,
    pub consonant_links: usize,
    pub glyph_points: u32,
}

impl ScoreBreakdown {
    /// Combine the terms with the given weights
    #[must_use]
    pub fn total(&self, weights: ScoringWeights) -> f64 {
        weights.length * self.length
            + weights.rarity * self.rarity
            + weights.structure * self.structure
    }
}

/// Pure, per-word complexity scorer
///
/// Holds no mutable state, so one scorer can be shared across threads.
#[derive(Clone, Copy)]
pub struct ComplexityScorer<'a> {
    weights: ScoringWeights,
    length_knee: usize,
    frequency: Option<&'a dyn FrequencySource>,
}

impl<'a> ComplexityScorer<'a> {
    #[must_use]
    pub const fn new(weights: ScoringWeights, length_knee: usize) -> Self {
        Self {
            weights,
            length_knee,
            frequency: None,
        }
    }

    /// Augment letter rarity with per-word frequency ranks
    #[must_use]
    pub fn with_frequency(mut self, frequency: &'a dyn FrequencySource) -> Self {
        self.frequency = Some(frequency);
        self
    }

    #[must_use]
    pub const fn weights(&self) -> ScoringWeights {
        self.weights
    }

    /// Score a word
    ///
    /// # Examples
    /// ```
    /// use lexiglyph::core::Word;
    /// use lexiglyph::scoring::{ComplexityScorer, ScoringWeights};
    ///
    /// let scorer = ComplexityScorer::new(ScoringWeights::default(), 8);
    /// let cat = scorer.score(&Word::new("cat").unwrap());
    /// let cats = scorer.score(&Word::new("cats").unwrap());
    /// assert!(cats.value() > cat.value());
    /// ```
    #[must_use]
    pub fn score(&self, word: &Word) -> ComplexityScore {
        ComplexityScore::new(self.breakdown(word).total(self.weights))
    }

    /// Compute each term separately
    #[must_use]
    pub fn breakdown(&self, word: &Word) -> ScoreBreakdown {
        let repeated_letters = repeated_letters(word);
        let consonant_links = consonant_links(word.letters());
        let glyph_points = glyph_points(word);

        let structure = repeated_letters as f64
            + consonant_links as f64
            + f64::from(glyph_points) / GLYPH_POINTS_PER_UNIT;

        ScoreBreakdown {
            length: length_term(word.len(), self.length_knee),
            rarity: self.rarity_term(word),
            structure,
            repeated_letters,
            consonant_links,
            glyph_points,
        }
    }

    /// Mean letter rarity weighted by letter count
    fn rarity_term(&self, word: &Word) -> f64 {
        let letters = word.letters();
        if letters.is_empty() {
            return 0.0;
        }

        let total: u32 = letters.iter().map(|&c| u32::from(letter_rarity(c))).sum();

        let rank_bonus = self
            .frequency
            .and_then(|source| source.rank(word.text()))
            .map_or(0.0, |rank| f64::from(rank.max(1)).log10());

        f64::from(total) + rank_bonus
    }
}

/// Sub-linear length term: linear up to `knee`, logarithmic beyond
#[must_use]
pub fn length_term(len: usize, knee: usize) -> f64 {
    if len <= knee {
        len as f64
    } else {
        knee as f64 + ((len - knee) as f64).ln_1p()
    }
}

/// Extra instances of letters that occur more than once
fn repeated_letters(word: &Word) -> usize {
    word.letter_counts()
        .values()
        .map(|&count| usize::from(count.saturating_sub(1)))
        .sum()
}

/// Adjacent positions where both letters are consonants
fn consonant_links(letters: &[char]) -> usize {
    letters
        .windows(2)
        .filter(|pair| !is_vowel(pair[0]) && !is_vowel(pair[1]))
        .count()
}

/// Glyph-confusion points over distinct letter pairs present in the word
fn glyph_points(word: &Word) -> u32 {
    let mut distinct: Vec<char> = word.letters().to_vec();
    distinct.sort_unstable();
    distinct.dedup();

    let mut points = 0;
    for (i, &a) in distinct.iter().enumerate() {
        for &b in &distinct[i + 1..] {
            points += u32::from(glyph_confusion(a, b));
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn only<'a>(length: f64, rarity: f64, structure: f64) -> ComplexityScorer<'a> {
        ComplexityScorer::new(
            ScoringWeights {
                length,
                rarity,
                structure,
            },
            8,
        )
    }

    struct Ranks;

    impl FrequencySource for Ranks {
        fn rank(&self, normalized: &str) -> Option<u32> {
            match normalized {
                "cat" => Some(1),
                "act" => Some(1000),
                _ => None,
            }
        }
    }

    #[test]
    fn length_term_is_linear_then_sublinear() {
        assert!((length_term(3, 8) - 3.0).abs() < 1e-12);
        assert!((length_term(8, 8) - 8.0).abs() < 1e-12);

        let step_before = length_term(8, 8) - length_term(7, 8);
        let step_after = length_term(10, 8) - length_term(9, 8);
        assert!(step_after < step_before);
        assert!(step_after > 0.0);
    }

    #[test]
    fn length_term_non_decreasing() {
        for n in 0..40 {
            assert!(length_term(n + 1, 6) >= length_term(n, 6));
        }
    }

    #[test]
    fn length_only_scorer_isolates_length() {
        let scorer = only(1.0, 0.0, 0.0);
        assert!((scorer.score(&word("zzzz")).value() - 4.0).abs() < 1e-12);
        assert!((scorer.score(&word("eeee")).value() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn rarity_only_scorer_sums_letter_rarity() {
        let scorer = only(0.0, 1.0, 0.0);
        // c=3, a=1, t=1
        assert!((scorer.score(&word("cat")).value() - 5.0).abs() < 1e-12);
        // j=8, a=1, z=10
        assert!((scorer.score(&word("jaz")).value() - 19.0).abs() < 1e-12);
    }

    #[test]
    fn default_score_matches_hand_computation() {
        let scorer = ComplexityScorer::new(ScoringWeights::default(), 8);
        // 3 + 1.5 * 5
        assert!((scorer.score(&word("cat")).value() - 10.5).abs() < 1e-12);
        // 4 + 1.5 * 6 + one t-s link
        assert!((scorer.score(&word("cats")).value() - 14.0).abs() < 1e-12);
    }

    #[test]
    fn appending_a_letter_never_lowers_score() {
        let scorer = ComplexityScorer::new(ScoringWeights::default(), 4);
        let stems = ["jazz", "quiz", "zzz", "rhythm", "a", "strength", "xylophone"];
        let tails = ('a'..='z').chain(['é']);

        for stem in stems {
            let base = scorer.score(&word(stem)).value();
            for tail in tails.clone() {
                let longer = format!("{stem}{tail}");
                let extended = scorer.score(&word(&longer)).value();
                assert!(extended >= base, "{stem}={base} {longer}={extended}");
            }
        }
    }

    #[test]
    fn structure_counts_repeats_and_clusters() {
        let scorer = only(0.0, 0.0, 1.0);

        let cat = scorer.breakdown(&word("cat"));
        assert_eq!(cat.repeated_letters, 0);
        assert_eq!(cat.consonant_links, 0);
        assert!(cat.structure.abs() < 1e-12);

        let act = scorer.breakdown(&word("act"));
        assert_eq!(act.consonant_links, 1);

        let strength = scorer.breakdown(&word("strength"));
        // s-t, t-r, n-g, g-t, t-h
        assert_eq!(strength.consonant_links, 5);
        assert_eq!(strength.repeated_letters, 1);
    }

    #[test]
    fn structure_includes_glyph_pairs() {
        let scorer = only(0.0, 0.0, 1.0);
        let breakdown = scorer.breakdown(&word("lid"));
        assert_eq!(breakdown.glyph_points, 2);
        assert!((breakdown.structure - 0.5).abs() < 1e-12);
    }

    #[test]
    fn repeated_letters_increase_score() {
        let scorer = only(0.0, 0.0, 1.0);
        let plain = scorer.score(&word("abc"));
        let doubled = scorer.score(&word("aba"));
        assert!(doubled.value() >= plain.value());
        assert_eq!(scorer.breakdown(&word("aaaa")).repeated_letters, 3);
    }

    #[test]
    fn frequency_rank_augments_rarity() {
        let ranks = Ranks;
        let plain = only(0.0, 1.0, 0.0);
        let ranked = plain.with_frequency(&ranks);

        let cat = word("cat");
        assert!((ranked.score(&cat).value() - plain.score(&cat).value()).abs() < 1e-12);

        let act = word("act");
        let diff = ranked.score(&act).value() - plain.score(&act).value();
        assert!((diff - 3.0).abs() < 1e-9);
    }

    #[test]
    fn scores_are_finite_and_non_negative() {
        let scorer = ComplexityScorer::new(ScoringWeights::default(), 8);
        for text in ["a", "zzz", "pneumonoultramicroscopicsilicovolcanoconiosis", "ÉCOLE"] {
            let score = scorer.score(&word(text)).value();
            assert!(score.is_finite() && score >= 0.0, "{text}: {score}");
        }
    }

    #[test]
    fn scoring_is_deterministic() {
        let scorer = ComplexityScorer::new(ScoringWeights::default(), 8);
        let w = word("rhythm");
        assert_eq!(scorer.score(&w), scorer.score(&w));
    }
}
