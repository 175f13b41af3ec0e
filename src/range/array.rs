use crate::range::{BidirectionalRange, FiniteRange, ForwardRange, RandomAccessRange};
use crate::{Error, Result};

/// A range over externally owned contiguous storage.
///
/// The range is the half-open span `[begin, end)` of the storage; popping
/// moves one of the two ends inwards and never touches the elements.
#[derive(Debug, PartialEq, Eq)]
pub struct ArrayRange<'a, T> {
    elements: &'a [T],
}

// Manual impls: the range is copyable whatever `T` is.
impl<T> Clone for ArrayRange<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ArrayRange<'_, T> {}

impl<'a, T> ArrayRange<'a, T> {
    pub fn new(elements: &'a [T]) -> Self {
        ArrayRange { elements }
    }

    /// The elements not yet popped.
    pub fn as_slice(&self) -> &'a [T] {
        self.elements
    }
}

/// A range over a whole fixed-size array; the length comes from the array
/// type.
pub fn arange<T, const N: usize>(array: &[T; N]) -> ArrayRange<'_, T> {
    ArrayRange::new(array)
}

impl<'a, T> ForwardRange for ArrayRange<'a, T> {
    type Item = &'a T;

    fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn front(&self) -> &'a T {
        &self.elements[0]
    }

    fn pop_front(&mut self) {
        self.elements = &self.elements[1..];
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.elements.len(), Some(self.elements.len()))
    }
}

impl<'a, T> BidirectionalRange for ArrayRange<'a, T> {
    fn back(&self) -> &'a T {
        &self.elements[self.elements.len() - 1]
    }

    fn pop_back(&mut self) {
        self.elements = &self.elements[..self.elements.len() - 1];
    }
}

impl<'a, T> RandomAccessRange for ArrayRange<'a, T> {
    fn at(&self, index: usize) -> Result<&'a T> {
        self.elements.get(index).ok_or(Error::OutOfBounds {
            index,
            len: self.elements.len(),
        })
    }
}

impl<'a, T> FiniteRange for ArrayRange<'a, T> {
    fn len(&self) -> usize {
        self.elements.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::RangeExt as _;

    #[test]
    fn covers_the_whole_array() {
        let a = [1, 2, 3, 4, 5];
        let r = arange(&a);
        assert_eq!(r.len(), 5);
        assert_eq!(r.into_cursor().copied().collect::<Vec<_>>(), a.to_vec());
    }

    #[test]
    fn ends_move_inwards() {
        let a = ['a', 'b', 'c'];
        let mut r = arange(&a);
        r.pop_back();
        assert_eq!(*r.back(), 'b');
        r.pop_front();
        assert_eq!(*r.front(), 'b');
        assert_eq!(r.len(), 1);
        r.pop_front();
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
    }

    #[test]
    fn indexing_is_relative_to_the_front() {
        let a = [10, 20, 30];
        let mut r = arange(&a);
        r.pop_front();
        assert_eq!(r.at(1), Ok(&30));
        assert_eq!(r.at(2), Err(Error::OutOfBounds { index: 2, len: 2 }));
    }

    #[test]
    fn storage_is_shared_not_owned() {
        let v = vec![String::from("x"), String::from("y")];
        let r = ArrayRange::new(&v[..]);
        let copy = r;
        assert_eq!(r.as_slice().as_ptr(), copy.as_slice().as_ptr());
        assert_eq!(v.len(), 2);
    }
}
