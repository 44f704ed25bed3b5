//! Splitting result lists into fixed-size pages.

use std::{num::NonZeroUsize, slice};

/// Read-only view of a slice cut into pages of `page_size` items.
///
/// Every page is full except possibly the last one.
#[derive(Debug, Clone)]
pub struct Paginator<'a, T> {
    /// Pages in order.
    pages: Vec<&'a [T]>,
}

impl<'a, T> Paginator<'a, T> {
    /// Splits `items` into pages.
    pub fn new(items: &'a [T], page_size: NonZeroUsize) -> Self {
        Self {
            pages: items.chunks(page_size.get()).collect(),
        }
    }

    /// Iterates over the pages.
    pub fn iter(&self) -> slice::Iter<'_, &'a [T]> {
        self.pages.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn last_page_may_be_short() {
        let items = [1, 2, 3, 4, 5];
        let pages = Paginator::new(&items, size(2));
        assert_eq!(pages.iter().count(), 3);
        let collected: Vec<&[i32]> = pages.iter().copied().collect();
        assert_eq!(collected, vec![&[1, 2][..], &[3, 4][..], &[5][..]]);
    }

    #[test]
    fn exact_multiple() {
        let items = ["a", "b", "c", "d"];
        let pages = Paginator::new(&items, size(2));
        assert_eq!(pages.iter().count(), 2);
        assert!(pages.iter().all(|page| page.len() == 2));
    }

    #[test]
    fn page_larger_than_input() {
        let items = [7];
        let pages = Paginator::new(&items, size(10));
        assert_eq!(pages.iter().count(), 1);
        assert_eq!(pages.iter().next().map(|p| p.len()), Some(1));
    }

    #[test]
    fn empty_input_has_no_pages() {
        let items: [u8; 0] = [];
        let pages = Paginator::new(&items, size(3));
        assert_eq!(pages.iter().count(), 0);
    }
}
