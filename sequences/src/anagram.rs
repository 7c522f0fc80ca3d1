//! An anagram dictionary.
//!
//! Words are filed under a key which is equal for any two words made of the
//! same letters, so all anagrams of a word can be looked up at once.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use failure::Fail;
use log::*;

#[derive(Debug, Fail, PartialEq)]
pub enum AnagramError {
    #[fail(display = "Invalid letter {:?} in {:?}", _0, _1)]
    InvalidLetter(char, String),
}

/// Computes the key under which a word is filed in an [`AnagramDict`].
///
/// Two words must get the same key exactly when they are anagrams.
pub trait KeyCalculator {
    type Key: Hash + Eq;

    fn calculate_key(&self, word: &str) -> Result<Self::Key, AnagramError>;
}

/// Keys words by how often each letter occurs, ignoring case.
///
/// Only alphabetic characters are accepted.
#[derive(Debug, Default, Clone, Copy)]
pub struct LetterCounts;

impl KeyCalculator for LetterCounts {
    type Key = BTreeMap<char, usize>;

    fn calculate_key(&self, word: &str) -> Result<Self::Key, AnagramError> {
        let mut counts = BTreeMap::new();
        for c in word.chars() {
            if !c.is_alphabetic() {
                return Err(AnagramError::InvalidLetter(c, word.to_string()));
            }
            for letter in c.to_uppercase() {
                *counts.entry(letter).or_insert(0) += 1;
            }
        }
        Ok(counts)
    }
}

/// A collection of words which can be searched for anagrams.
///
/// Like a multimap, inserting a word twice stores it twice.
pub struct AnagramDict<C = LetterCounts>
where
    C: KeyCalculator,
{
    calculator: C,
    words: HashMap<C::Key, Vec<String>>,
    count: usize,
}

impl AnagramDict<LetterCounts> {
    pub fn new() -> Self {
        Self::with_calculator(LetterCounts)
    }

    /// Build a dictionary from a list of words, failing on the first
    /// word which has no valid key.
    pub fn from_words<I, S>(words: I) -> Result<Self, AnagramError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut dict = Self::new();
        for word in words {
            dict.insert(word)?;
        }
        Ok(dict)
    }
}

impl<C> Default for AnagramDict<C>
where
    C: KeyCalculator + Default,
{
    fn default() -> Self {
        Self::with_calculator(C::default())
    }
}

impl<C> AnagramDict<C>
where
    C: KeyCalculator,
{
    pub fn with_calculator(calculator: C) -> Self {
        Self {
            calculator,
            words: HashMap::new(),
            count: 0,
        }
    }

    pub fn insert<S>(&mut self, word: S) -> Result<(), AnagramError>
    where
        S: Into<String>,
    {
        let word = word.into();
        let key = self.calculator.calculate_key(&word)?;
        trace!("Inserting {:?}", word);
        self.words.entry(key).or_insert_with(Vec::new).push(word);
        self.count += 1;
        Ok(())
    }

    /// All words in the dictionary which are anagrams of `word`,
    /// in insertion order. The word itself counts as its own anagram.
    pub fn find_anagrams(&self, word: &str) -> Result<&[String], AnagramError> {
        let key = self.calculator.calculate_key(word)?;
        Ok(self.words.get(&key).map(Vec::as_slice).unwrap_or(&[]))
    }

    /// Number of words stored, counting repeats.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
