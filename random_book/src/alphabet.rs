// alphabet.rs - The ordered character set cells are sampled from

use rand::Rng;

use crate::config::{BASE_ALPHABET, DEFAULT_EXTRA};

/// Deduplicated characters in first-occurrence order. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Builds `base` followed by every character of `extra` not already present.
    /// An empty result falls back to the default alphabet.
    pub fn new(base: &str, extra: &str) -> Self {
        let chars = unique(base.chars().chain(extra.chars()));
        if chars.is_empty() {
            return Self::default();
        }
        Self { chars }
    }

    /// The base Russian letters plus the user's extra characters.
    pub fn with_extra(extra: &str) -> Self {
        Self::new(BASE_ALPHABET, extra)
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    /// Uniform draw.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> char {
        self.chars[rng.random_range(0..self.chars.len())]
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            chars: unique(BASE_ALPHABET.chars().chain(DEFAULT_EXTRA.chars())),
        }
    }
}

fn unique(chars: impl Iterator<Item = char>) -> Vec<char> {
    let mut out: Vec<char> = Vec::new();
    for ch in chars {
        if !out.contains(&ch) {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn extra_characters_are_deduplicated_in_order() {
        let alphabet = Alphabet::new("аб", "аб!");
        assert_eq!(alphabet.chars(), &['а', 'б', '!']);
    }

    #[test]
    fn duplicates_inside_extra_are_dropped() {
        let alphabet = Alphabet::new("x", "yyxz y");
        assert_eq!(alphabet.chars(), &['x', 'y', 'z', ' ']);
    }

    #[test]
    fn empty_input_falls_back_to_default() {
        let alphabet = Alphabet::new("", "");
        assert_eq!(alphabet, Alphabet::default());
        assert!(!alphabet.is_empty());
    }

    #[test]
    fn default_is_russian_letters_space_and_semicolon() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.len(), 35);
        assert_eq!(alphabet.chars()[0], 'а');
        assert!(alphabet.contains('ё'));
        assert!(alphabet.contains(' '));
        assert!(alphabet.contains(';'));
    }

    #[test]
    fn with_extra_keeps_the_base_set() {
        let alphabet = Alphabet::with_extra("!?");
        assert_eq!(alphabet.len(), 35);
        assert_eq!(&alphabet.chars()[33..], &['!', '?']);
    }

    #[test]
    fn samples_stay_inside_the_alphabet() {
        let alphabet = Alphabet::new("xyz", "");
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            assert!(alphabet.contains(alphabet.sample(&mut rng)));
        }
    }

    #[test]
    fn single_character_alphabet_always_samples_it() {
        let alphabet = Alphabet::new("", "#");
        let mut rng = StdRng::seed_from_u64(1);
        assert!((0..50).all(|_| alphabet.sample(&mut rng) == '#'));
    }
}
