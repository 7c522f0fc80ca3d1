//! Generic algorithms over sequences.
//!
//! - [`min_window`] finds the shortest run of a sequence containing every
//!   distinct element of the whole sequence.
//! - [`next_greater_in_place`] rearranges a sequence into the next greater
//!   permutation of its elements.
//! - [`AnagramDict`] groups words which are anagrams of each other.
//!
//! The algorithms are written against the views in [`view`], so they work
//! with anything from plain slices to reversed views of a `VecDeque`.

pub mod anagram;
pub mod permutation;
pub mod view;
pub mod window;

pub use crate::anagram::{AnagramDict, AnagramError, KeyCalculator, LetterCounts};
pub use crate::permutation::{min_greater_number, next_greater_in_place, next_greater_in_place_by};
pub use crate::view::{Bidirectional, Forward, Reversed};
pub use crate::window::{last_min_window, min_window, Window};
