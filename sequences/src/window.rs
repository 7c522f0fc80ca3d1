//! Minimum window search.
//!
//! A *full* window is a contiguous run of a sequence which contains at least
//! one copy of every distinct value appearing anywhere in that sequence.
//! [`min_window`] finds the shortest one in a single sliding pass.

use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Range;

use log::*;

use crate::view::Forward;

/// A `[start, end)` run of positions within a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window {
    start: usize,
    end: usize,
}

impl Window {
    fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// The empty window reported when no full window exists,
    /// positioned at the end of a sequence of `size` elements.
    fn not_found(size: usize) -> Self {
        Self::new(size, size)
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The elements of `sequence` covered by this window.
    ///
    /// Panics if the window does not fit in `sequence`.
    pub fn slice<'a, T>(&self, sequence: &'a [T]) -> &'a [T] {
        &sequence[self.range()]
    }
}

/// Find the shortest window containing every distinct element of `sequence`.
///
/// Among several shortest windows the one starting first wins. An empty
/// sequence yields an empty window at position 0.
///
/// Runs in O(n) time and O(k) space, for n elements of which k are distinct.
/// The sequence is traversed three times: once to collect the distinct
/// values, then by the two ends of the sliding window.
pub fn min_window<I>(sequence: I) -> Window
where
    I: IntoIterator,
    I::IntoIter: Forward,
    I::Item: Hash + Eq,
{
    let sequence = sequence.into_iter();

    let mut counts = HashMap::new();
    let mut size = 0;
    for item in sequence.clone() {
        counts.entry(item).or_insert(0usize);
        size += 1;
    }
    let unique = counts.len();

    let mut best: Option<Window> = None;
    let mut present = 0;
    let mut start = 0;
    let mut trailing = sequence.clone();

    for (end, item) in sequence.enumerate() {
        // No full window is shorter than the number of distinct values.
        if best.map_or(false, |w| w.len() == unique) {
            break;
        }

        if let Some(count) = counts.get_mut(&item) {
            *count += 1;
            if *count == 1 {
                present += 1;
            }
        }

        while present == unique {
            let candidate = Window::new(start, end + 1);
            if best.map_or(true, |w| candidate.len() < w.len()) {
                trace!("shorter window {:?}", candidate.range());
                best = Some(candidate);
            }

            let leaving = match trailing.next() {
                Some(item) => item,
                None => break,
            };
            if let Some(count) = counts.get_mut(&leaving) {
                *count -= 1;
                if *count == 0 {
                    present -= 1;
                }
            }
            start += 1;
        }
    }

    debug!(
        "{} distinct values in {} elements, minimum window {:?}",
        unique, size, best
    );
    best.unwrap_or_else(|| Window::not_found(size))
}

/// Find the shortest window containing every distinct element of `sequence`,
/// preferring the one which starts last.
///
/// This is [`min_window`] run over the reversed sequence, with the result
/// translated back into front-to-back positions.
pub fn last_min_window<I>(sequence: I) -> Window
where
    I: IntoIterator,
    I::IntoIter: DoubleEndedIterator + Forward,
    I::Item: Hash + Eq,
{
    let sequence = sequence.into_iter();
    let size = sequence.clone().count();

    let window = min_window(sequence.rev());
    if window.is_empty() {
        return Window::not_found(size);
    }
    Window::new(size - window.end(), size - window.start())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn finds_min_window_in_string() {
        let input = "abdbaadcbca";
        let window = min_window(input.chars());

        assert_eq!(window.range(), 5..9);
        assert_eq!(window.len(), 4);
        assert_eq!(&input[window.range()], "adcb");
    }

    #[test]
    fn works_on_integers() {
        let input: [u16; 10] = [1, 2, 3, 1, 3, 2, 4, 0, 1, 3];
        let window = min_window(&input);

        assert_eq!(window.start(), 3);
        assert_eq!(window.end(), 8);
        assert_eq!(window.len(), 5);
        assert_eq!(window.slice(&input), &[1u16, 3, 2, 4, 0]);
    }

    #[test]
    fn finds_first_window() {
        let input = [1, 2, 3, 1, 2, 3];
        let window = min_window(input.iter());

        assert_eq!(window.range(), 0..3);
        assert_eq!(window.len(), 3);
    }

    #[test]
    fn empty_sequence() {
        let input: Vec<u8> = Vec::new();
        let window = min_window(&input);

        assert!(window.is_empty());
        assert_eq!(window.len(), 0);
        assert_eq!((window.start(), window.end()), (0, 0));
    }

    #[test]
    fn single_distinct_value() {
        let window = min_window("zzzz".chars());
        assert_eq!(window.range(), 0..1);

        let window = min_window(vec![7]);
        assert_eq!(window.range(), 0..1);
    }

    #[test]
    fn every_value_distinct() {
        let window = min_window("abcdef".bytes());
        assert_eq!(window.range(), 0..6);
    }

    #[test]
    fn works_with_reversed_iterator() {
        let input = [1, 1, 2, 1, 3, 1, 2, 3];
        let window = min_window(input.iter().rev());

        assert_eq!(window.range(), 0..3);
        let found: Vec<_> = input.iter().rev().skip(window.start()).take(window.len()).collect();
        assert_eq!(found, vec![&3, &2, &1]);
    }

    #[test]
    fn finds_last_window() {
        let input = [1, 1, 2, 1, 3, 1, 2, 3];

        assert_eq!(min_window(&input).range(), 2..5);
        assert_eq!(last_min_window(&input).range(), 5..8);
        assert_eq!(last_min_window("abdbaadcbca".chars()).range(), 5..9);
    }

    #[test]
    fn last_window_of_empty_sequence() {
        let input: [char; 0] = [];
        let window = last_min_window(&input);
        assert!(window.is_empty());
        assert_eq!(window.start(), 0);
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Suit {
        Clubs,
        Diamonds,
        Hearts,
        Spades,
    }

    #[test]
    fn works_on_enums() {
        use self::Suit::*;
        let hand = vec![Hearts, Hearts, Clubs, Spades, Hearts, Diamonds, Clubs, Spades];
        let window = min_window(&hand);
        assert_eq!(window.range(), 2..6);
        assert_eq!(window.slice(&hand), &[Clubs, Spades, Hearts, Diamonds]);
    }
}
