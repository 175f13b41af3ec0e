use std::iter::FusedIterator;

use crate::range::{BidirectionalRange, FiniteRange, ForwardRange};

/// Iterates a borrowed range, consuming it from the front.
///
/// `next` reads `front` and then calls `pop_front`; iteration ends exactly
/// when the range reports empty.
#[derive(Debug)]
pub struct Cursor<'a, R> {
    range: &'a mut R,
}

impl<'a, R: ForwardRange> Cursor<'a, R> {
    pub fn new(range: &'a mut R) -> Self {
        Cursor { range }
    }
}

impl<R: ForwardRange> Iterator for Cursor<'_, R> {
    type Item = R::Item;

    fn next(&mut self) -> Option<R::Item> {
        next_front(self.range)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        ForwardRange::size_hint(&*self.range)
    }
}

impl<R: BidirectionalRange> DoubleEndedIterator for Cursor<'_, R> {
    fn next_back(&mut self) -> Option<R::Item> {
        next_back(self.range)
    }
}

impl<R: ForwardRange> FusedIterator for Cursor<'_, R> {}

impl<R: FiniteRange> ExactSizeIterator for Cursor<'_, R> {
    fn len(&self) -> usize {
        self.range.len()
    }
}

/// Iterates an owned range.
#[derive(Debug, Clone)]
pub struct IntoCursor<R> {
    range: R,
}

impl<R: ForwardRange> IntoCursor<R> {
    pub fn new(range: R) -> Self {
        IntoCursor { range }
    }

    /// The part of the range not yet iterated.
    pub fn into_inner(self) -> R {
        self.range
    }
}

impl<R: ForwardRange> Iterator for IntoCursor<R> {
    type Item = R::Item;

    fn next(&mut self) -> Option<R::Item> {
        next_front(&mut self.range)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        ForwardRange::size_hint(&self.range)
    }
}

impl<R: BidirectionalRange> DoubleEndedIterator for IntoCursor<R> {
    fn next_back(&mut self) -> Option<R::Item> {
        next_back(&mut self.range)
    }
}

impl<R: ForwardRange> FusedIterator for IntoCursor<R> {}

impl<R: FiniteRange> ExactSizeIterator for IntoCursor<R> {
    fn len(&self) -> usize {
        self.range.len()
    }
}

fn next_front<R: ForwardRange>(range: &mut R) -> Option<R::Item> {
    if range.is_empty() {
        return None;
    }
    let item = range.front();
    range.pop_front();
    Some(item)
}

fn next_back<R: BidirectionalRange>(range: &mut R) -> Option<R::Item> {
    if range.is_empty() {
        return None;
    }
    let item = range.back();
    range.pop_back();
    Some(item)
}

#[cfg(test)]
mod tests {
    use crate::range::{
        arange, enumerate, filter, longzip, map, range, range_to, reverse, zip, RangeExt as _,
    };

    #[test]
    fn cursor_consumes_the_borrowed_range() {
        let mut r = range(0, 6);
        let firsts: Vec<_> = r.cursor().take(2).collect();
        assert_eq!(firsts, vec![0, 1]);
        let rest: Vec<_> = r.cursor().collect();
        assert_eq!(rest, vec![2, 3, 4, 5]);
        assert_eq!(r.cursor().next(), None);
    }

    #[test]
    fn both_ends() {
        let mut it = range(0, 5).into_cursor();
        assert_eq!(it.len(), 5);
        assert_eq!(it.next_back(), Some(4));
        assert_eq!(it.next(), Some(0));
        assert_eq!(it.len(), 3);
        assert_eq!(it.rev().collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn finite_ranges_give_exact_size_hints() {
        let mut it = range_to(5).into_cursor();
        assert_eq!(it.size_hint(), (5, Some(5)));
        it.next();
        assert_eq!(it.size_hint(), (4, Some(4)));

        let mut r = range(0, 6);
        let mut cursor = r.cursor();
        cursor.next_back();
        assert_eq!(cursor.len(), 5);
        assert_eq!(cursor.size_hint(), (5, Some(5)));

        let letters = ['a', 'b', 'c'];
        let pairs = zip((arange(&letters), range_to(10)));
        assert_eq!(pairs.into_cursor().size_hint(), (3, Some(3)));
        let padded = longzip(0, (range_to(2), range_to(7)));
        assert_eq!(padded.into_cursor().size_hint(), (7, Some(7)));
        let doubled = reverse(enumerate(map(|x: i32| x * 2, range_to(4)), 0));
        assert_eq!(doubled.into_cursor().size_hint(), (4, Some(4)));
    }

    #[test]
    fn filtered_ranges_bound_their_size() {
        let evens = filter(|x: &i32| x % 2 == 0, range(1, 10));
        assert_eq!(evens.into_cursor().size_hint(), (1, Some(8)));
        let none = filter(|x: &i32| *x > 100, range_to(10));
        assert_eq!(none.clone().into_cursor().size_hint(), (0, Some(0)));
        let unbounded = zip((none, range_to(3)));
        assert_eq!(unbounded.into_cursor().size_hint(), (0, Some(0)));
    }
}
