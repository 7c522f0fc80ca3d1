//! Views over sequences, tagged by the traversal they support.
//!
//! Algorithms ask for the weakest capability they can work with:
//! a [`Forward`] view can only be walked front to back (though it may
//! be walked more than once), while a [`Bidirectional`] view can be
//! addressed from both ends and rearranged in place.

use std::collections::VecDeque;

/// A sequence which can be traversed front to back, any number of times.
///
/// Every cloneable iterator is a forward view: cloning it gives an
/// independent cursor at the same position.
pub trait Forward: Iterator + Clone {}

impl<I> Forward for I where I: Iterator + Clone {}

/// A sequence which can be walked from either end and rearranged in place.
///
/// Positions are zero-based and always relative to the view, so a
/// [`Reversed`] view reports its first position as the last element of
/// the underlying sequence.
pub trait Bidirectional {
    type Item;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The element at `position`.
    ///
    /// Panics if `position` is out of bounds, like indexing does.
    fn at(&self, position: usize) -> &Self::Item;

    /// Swap the elements at positions `a` and `b`.
    fn exchange(&mut self, a: usize, b: usize);

    /// Reverse the order of the elements in `[start, end)`.
    fn reverse_range(&mut self, start: usize, end: usize) {
        let (mut front, mut back) = (start, end);
        while front + 1 < back {
            back -= 1;
            self.exchange(front, back);
            front += 1;
        }
    }

    /// A view of this sequence read back to front.
    fn reversed(&mut self) -> Reversed<'_, Self> {
        Reversed::new(self)
    }
}

impl<T> Bidirectional for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn at(&self, position: usize) -> &T {
        &self[position]
    }

    fn exchange(&mut self, a: usize, b: usize) {
        self.swap(a, b);
    }

    fn reverse_range(&mut self, start: usize, end: usize) {
        self[start..end].reverse();
    }
}

impl<T> Bidirectional for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn at(&self, position: usize) -> &T {
        &self[position]
    }

    fn exchange(&mut self, a: usize, b: usize) {
        self.swap(a, b);
    }

    fn reverse_range(&mut self, start: usize, end: usize) {
        self[start..end].reverse();
    }
}

impl<T> Bidirectional for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn at(&self, position: usize) -> &T {
        &self[position]
    }

    fn exchange(&mut self, a: usize, b: usize) {
        self.swap(a, b);
    }
}

/// A virtual back-to-front view over another bidirectional sequence.
///
/// Nothing is copied: positions are translated on every access and
/// exchanges land directly in the underlying sequence.
#[derive(Debug)]
pub struct Reversed<'s, S: ?Sized> {
    inner: &'s mut S,
}

impl<'s, S> Reversed<'s, S>
where
    S: Bidirectional + ?Sized,
{
    pub fn new(inner: &'s mut S) -> Self {
        Self { inner }
    }

    fn translate(&self, position: usize) -> usize {
        self.inner.len() - 1 - position
    }
}

impl<'s, S> Bidirectional for Reversed<'s, S>
where
    S: Bidirectional + ?Sized,
{
    type Item = S::Item;

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn at(&self, position: usize) -> &S::Item {
        self.inner.at(self.translate(position))
    }

    fn exchange(&mut self, a: usize, b: usize) {
        let (a, b) = (self.translate(a), self.translate(b));
        self.inner.exchange(a, b);
    }

    fn reverse_range(&mut self, start: usize, end: usize) {
        let len = self.inner.len();
        self.inner.reverse_range(len - end, len - start);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn slice_reverse_range() {
        let mut data = [1, 2, 3, 4, 5];
        data[..].reverse_range(1, 4);
        assert_eq!(data, [1, 4, 3, 2, 5]);
    }

    #[test]
    fn deque_reverse_range_uses_exchange() {
        let mut data: VecDeque<_> = vec![1, 2, 3, 4, 5, 6].into_iter().collect();
        data.push_front(0);
        data.reverse_range(0, 4);
        assert_eq!(data.iter().cloned().collect::<Vec<_>>(), vec![3, 2, 1, 0, 4, 5, 6]);

        data.reverse_range(2, 2);
        data.reverse_range(5, 6);
        assert_eq!(data.iter().cloned().collect::<Vec<_>>(), vec![3, 2, 1, 0, 4, 5, 6]);
    }

    #[test]
    fn reversed_positions() {
        let mut data = vec!['a', 'b', 'c', 'd'];
        {
            let mut view = data.reversed();
            assert_eq!(view.len(), 4);
            assert_eq!(*view.at(0), 'd');
            assert_eq!(*view.at(3), 'a');

            view.exchange(0, 1);
            assert_eq!(*view.at(0), 'c');
        }
        assert_eq!(data, vec!['a', 'b', 'd', 'c']);
    }

    #[test]
    fn reversed_reverse_range() {
        let mut data = vec![1, 2, 3, 4, 5];
        data.reversed().reverse_range(0, 3);
        // The view reads 5 4 3 2 1, so its first three elements are 3 4 5 afterwards.
        assert_eq!(data, vec![1, 2, 5, 4, 3]);
    }

    #[test]
    fn reversed_twice_is_identity() {
        let mut data = vec![1, 2, 3];
        let mut outer = data.reversed();
        let view = outer.reversed();
        assert_eq!((*view.at(0), *view.at(2)), (1, 3));
    }
}
