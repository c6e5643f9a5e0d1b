//! Edit distance and deletion keys
//!
//! Two words one edit apart always share a key when each word is indexed
//! under itself and under every string obtained by deleting one letter:
//!
//! - substitution: `cat` / `cot` share `ct`
//! - insertion/deletion: `cat` / `cats` share `cat`
//!
//! Sharing a key only bounds the distance by 2, so candidates are verified
//! with the exact Levenshtein distance.

use rustc_hash::FxHashSet;

/// Keys a word is filed under in the single-edit index
///
/// Contains the word itself and each one-letter deletion, without duplicates
/// (deleting either `o` of `book` yields `bok` once). Words shorter than two
/// letters get no keys: every one-letter word would share the empty key.
///
/// # Examples
/// ```
/// use lexiglyph::confusion::deletion_keys;
///
/// let chars: Vec<char> = "cat".chars().collect();
/// let keys = deletion_keys(&chars);
/// assert!(keys.contains("cat"));
/// assert!(keys.contains("at"));
/// assert!(keys.contains("ct"));
/// assert!(keys.contains("ca"));
/// assert_eq!(keys.len(), 4);
///
/// assert!(deletion_keys(&['a']).is_empty());
/// ```
#[must_use]
pub fn deletion_keys(letters: &[char]) -> FxHashSet<String> {
    let mut keys = FxHashSet::default();
    if letters.len() < 2 {
        return keys;
    }

    keys.insert(letters.iter().collect());
    for skip in 0..letters.len() {
        let key: String = letters
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != skip)
            .map(|(_, &c)| c)
            .collect();
        keys.insert(key);
    }
    keys
}

/// Levenshtein distance (insertions, deletions, substitutions)
///
/// Two-row dynamic programme, O(|a|·|b|) time and O(|b|) space.
#[must_use]
pub fn edit_distance(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            current[j + 1] = (previous[j] + cost)
                .min(previous[j + 1] + 1)
                .min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}
