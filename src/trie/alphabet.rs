use crate::labelset::{Label, MAX_LABEL};
use crate::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Lowercase a letter. Words, racks and boards are compared in lowercase.
pub fn normalize(letter: char) -> char {
    letter.to_lowercase().next().unwrap_or(letter)
}

/// Translate between letters and trie labels.
/// - 0: root node (no letter)
/// - 1 ..= 63: the letters of the word list, in ascending order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Alphabet {
    letters: Vec<char>,
}

impl Alphabet {
    /// Collect the distinct (normalized) letters used in `words`.
    /// ## Errors
    /// If the words use more than 63 distinct letters.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Result<Alphabet, Error> {
        let letters: BTreeSet<char> = words
            .iter()
            .flat_map(|word| word.as_ref().chars())
            .map(normalize)
            .collect();
        if letters.len() > MAX_LABEL as usize {
            return Err(Error::AlphabetTooLarge(letters.len()));
        }
        Ok(Alphabet {
            letters: letters.into_iter().collect(),
        })
    }

    /// Label for `letter`, or None if the letter does not occur in any word.
    pub fn label(&self, letter: char) -> Option<Label> {
        self.letters
            .binary_search(&normalize(letter))
            .ok()
            .map(|i| i as Label + 1)
    }

    /// Letter for `label`, or None for the root label and unknown labels.
    pub fn letter(&self, label: Label) -> Option<char> {
        match label {
            0 => None,
            n => self.letters.get(n as usize - 1).copied(),
        }
    }

    /// Encode a word, or None if it contains a letter outside the alphabet.
    pub fn encode(&self, word: &str) -> Option<Vec<Label>> {
        word.chars().map(|letter| self.label(letter)).collect()
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }
}
