//! Fixed English letter tables
//!
//! These constants determine score reproducibility across runs and builds, so
//! changing any of them changes every output document.

/// Rarity of each letter `a..=z` (1 = common, 10 = rare)
const LETTER_RARITY: [u8; 26] = [
    1, 4, 3, 2, 1, 4, 3, 2, 1, 8, 5, 2, 3, // a-m
    2, 1, 3, 9, 1, 1, 1, 2, 5, 4, 8, 4, 10, // n-z
];

/// Rarity assigned to letters outside `a..=z`
pub const UNKNOWN_LETTER_RARITY: u8 = 10;

/// Highest value in the rarity table
pub const MAX_LETTER_RARITY: u8 = 10;

/// Letter pairs that are easy to mistake for one another when drawn
///
/// Keys are stored with the smaller letter first.
const GLYPH_CONFUSION: [((char, char), u8); 7] = [
    (('e', 'f'), 3),
    (('i', 'l'), 2),
    (('o', 'q'), 4),
    (('p', 'r'), 3),
    (('c', 'g'), 2),
    (('m', 'n'), 1),
    (('v', 'w'), 2),
];

/// Rarity score of a single letter
#[inline]
#[must_use]
pub fn letter_rarity(letter: char) -> u8 {
    if letter.is_ascii_lowercase() {
        LETTER_RARITY[(letter as u8 - b'a') as usize]
    } else {
        UNKNOWN_LETTER_RARITY
    }
}

#[inline]
#[must_use]
pub fn is_vowel(letter: char) -> bool {
    matches!(letter, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Glyph confusion points for an unordered letter pair (0 when unlisted)
#[must_use]
pub fn glyph_confusion(a: char, b: char) -> u8 {
    let key = if a <= b { (a, b) } else { (b, a) };
    GLYPH_CONFUSION
        .iter()
        .find(|(pair, _)| *pair == key)
        .map_or(0, |&(_, points)| points)
}

/// Sound class of a letter
///
/// Vowels share one class and common consonant confusions are merged.
/// Letters without a listed class stand for themselves.
#[must_use]
pub fn phonetic_class(letter: char) -> char {
    match letter {
        'a' | 'e' | 'i' | 'o' | 'u' | 'y' => 'A',
        'b' | 'p' => 'B',
        'c' | 'k' | 'q' => 'K',
        'd' | 't' => 'T',
        'f' | 'v' => 'F',
        'g' | 'j' => 'G',
        'l' => 'L',
        'm' | 'n' => 'N',
        'r' => 'R',
        's' | 'z' => 'S',
        'x' => 'X',
        'h' | 'w' => 'H',
        other => other,
    }
}

/// Phonetic code: class per letter with adjacent duplicates collapsed
///
/// # Examples
/// ```
/// use lexiglyph::core::letters::phonetic_code;
///
/// let cat: Vec<char> = "cat".chars().collect();
/// let kat: Vec<char> = "katt".chars().collect();
/// assert_eq!(phonetic_code(&cat), "KAT");
/// assert_eq!(phonetic_code(&cat), phonetic_code(&kat));
/// ```
#[must_use]
pub fn phonetic_code(letters: &[char]) -> String {
    let mut code = String::with_capacity(letters.len());
    let mut previous = None;
    for &letter in letters {
        let class = phonetic_class(letter);
        if previous != Some(class) {
            code.push(class);
            previous = Some(class);
        }
    }
    code
}

/// Sorted-letter anagram key
#[must_use]
pub fn signature(letters: &[char]) -> String {
    let mut sorted = letters.to_vec();
    sorted.sort_unstable();
    sorted.into_iter().collect()
}
