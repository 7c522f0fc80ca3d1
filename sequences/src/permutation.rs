//! Lexicographic successors of sequences.
//!
//! The *minimum greater sequence* of `s` is the smallest arrangement of the
//! elements of `s` which compares lexicographically greater than `s`.
//! Repeatedly replacing a sequence with its successor walks through every
//! distinct permutation of its elements in increasing order.

use log::*;

use crate::view::Bidirectional;

/// Rearrange `sequence` into its minimum greater sequence, in place.
///
/// Returns `false`, leaving `sequence` untouched, when no greater
/// arrangement exists, i.e. the elements are already in non-increasing
/// order. Empty and single element sequences never have a successor.
///
/// Only `<` is used to compare elements. Runs in O(n) time and O(1) space.
///
/// ```
/// use sequences::next_greater_in_place;
///
/// let mut digits = vec![5, 7, 3, 1, 4, 3, 2];
/// assert!(next_greater_in_place(&mut digits));
/// assert_eq!(digits, vec![5, 7, 3, 2, 1, 3, 4]);
/// ```
pub fn next_greater_in_place<S>(sequence: &mut S) -> bool
where
    S: Bidirectional + ?Sized,
    S::Item: PartialOrd,
{
    next_greater_in_place_by(sequence, |a, b| a < b)
}

/// Rearrange `sequence` into its minimum greater sequence under the strict
/// ordering `is_less`, in place.
///
/// See [`next_greater_in_place`].
pub fn next_greater_in_place_by<S, F>(sequence: &mut S, mut is_less: F) -> bool
where
    S: Bidirectional + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let len = sequence.len();

    // The pivot is the left side of the rightmost ascent. Everything to its
    // right is non-increasing and so already at its greatest arrangement.
    let pivot = match (1..len)
        .rev()
        .find(|&i| is_less(sequence.at(i - 1), sequence.at(i)))
    {
        Some(ascent) => ascent - 1,
        None => return false,
    };

    // The suffix is non-increasing, so the first element from the right
    // which beats the pivot is the smallest such value, and of equal values
    // it is the rightmost one.
    let successor = (pivot + 1..len)
        .rev()
        .find(|&i| is_less(sequence.at(pivot), sequence.at(i)))
        .unwrap_or(pivot + 1);

    trace!("pivot at {}, successor at {}", pivot, successor);
    sequence.exchange(pivot, successor);
    sequence.reverse_range(pivot + 1, len);
    true
}

/// The smallest number greater than `number` which is written with
/// exactly the same decimal digits.
///
/// Returns `None` when the digits are already in their greatest order, or
/// when the answer does not fit in a `u64`.
pub fn min_greater_number(number: u64) -> Option<u64> {
    let mut digits = Vec::new();
    let mut rest = number;
    loop {
        digits.push((rest % 10) as u8);
        rest /= 10;
        if rest == 0 {
            break;
        }
    }

    // Least significant digit first, so the successor is taken on the
    // reversed view.
    if !next_greater_in_place(&mut digits.reversed()) {
        return None;
    }

    digits.iter().rev().try_fold(0u64, |value, &digit| {
        value.checked_mul(10)?.checked_add(u64::from(digit))
    })
}
