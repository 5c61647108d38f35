//! Fixed-size pagination over ordered records

use serde::Serialize;
use std::fmt;

/// Number of questions served per page
pub const QUESTIONS_PER_PAGE: usize = 10;

/// A 1-based page number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PageNumber(usize);

impl PageNumber {
    pub const FIRST: PageNumber = PageNumber(1);

    /// Returns `None` for page zero
    pub fn new(number: usize) -> Option<Self> {
        (number >= 1).then_some(Self(number))
    }

    /// Coerce a raw query-string value into a page number.
    ///
    /// Missing, non-numeric, zero and negative values all fall back to the
    /// first page.
    pub fn from_query(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.trim().parse::<usize>().ok())
            .and_then(Self::new)
            .unwrap_or(Self::FIRST)
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Offset of the first record on this page for the given page size.
    /// Saturates instead of overflowing.
    fn offset(self, page_size: usize) -> usize {
        (self.0 - 1).saturating_mul(page_size)
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Slice `records` to the requested page of [`QUESTIONS_PER_PAGE`] items.
///
/// Pages past the end yield an empty slice, never an error.
pub fn paginate<T>(records: &[T], page: PageNumber) -> &[T] {
    paginate_with_size(records, page, QUESTIONS_PER_PAGE)
}

/// Slice `records` to the requested page of `page_size` items.
pub fn paginate_with_size<T>(records: &[T], page: PageNumber, page_size: usize) -> &[T] {
    let start = page.offset(page_size).min(records.len());
    let end = start.saturating_add(page_size).min(records.len());
    &records[start..end]
}

/// One page of an ordered result set (View)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_number: PageNumber,
    /// Length of the full, unpaginated result set
    pub total_count: usize,
}

impl<T: Clone> Page<T> {
    /// Cut the requested page out of `records`
    pub fn of(records: &[T], page_number: PageNumber) -> Self {
        Self {
            items: paginate(records, page_number).to_vec(),
            page_number,
            total_count: records.len(),
        }
    }
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of pages needed to show `total_count` records
    pub fn total_pages(&self) -> usize {
        self.total_count.div_ceil(QUESTIONS_PER_PAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(n: usize) -> PageNumber {
        PageNumber::new(n).unwrap()
    }

    #[test]
    fn test_page_number_rejects_zero() {
        assert!(PageNumber::new(0).is_none());
        assert_eq!(PageNumber::new(3).map(PageNumber::get), Some(3));
    }

    #[test]
    fn test_from_query_defaults_to_first() {
        assert_eq!(PageNumber::from_query(None), PageNumber::FIRST);
        assert_eq!(PageNumber::from_query(Some("abc")), PageNumber::FIRST);
        assert_eq!(PageNumber::from_query(Some("")), PageNumber::FIRST);
        assert_eq!(PageNumber::from_query(Some("0")), PageNumber::FIRST);
        assert_eq!(PageNumber::from_query(Some("-2")), PageNumber::FIRST);
        assert_eq!(PageNumber::from_query(Some("1.5")), PageNumber::FIRST);
        assert_eq!(PageNumber::from_query(Some("4")), page(4));
        assert_eq!(PageNumber::from_query(Some(" 2 ")), page(2));
    }

    #[test]
    fn test_first_page() {
        let records: Vec<u32> = (1..=25).collect();
        assert_eq!(paginate(&records, PageNumber::FIRST), &records[0..10]);
    }

    #[test]
    fn test_last_partial_page() {
        let records: Vec<u32> = (1..=25).collect();
        assert_eq!(paginate(&records, page(3)), &[21, 22, 23, 24, 25]);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let records: Vec<u32> = (1..=25).collect();
        assert!(paginate(&records, page(4)).is_empty());
        assert!(paginate(&records, page(usize::MAX)).is_empty());
    }

    #[test]
    fn test_page_size_matches_formula() {
        for n in 0..=35usize {
            let records: Vec<usize> = (0..n).collect();
            for p in 1..=6usize {
                let expected = n
                    .saturating_sub((p - 1) * QUESTIONS_PER_PAGE)
                    .min(QUESTIONS_PER_PAGE);
                assert_eq!(
                    paginate(&records, page(p)).len(),
                    expected,
                    "n={n}, page={p}"
                );
            }
        }
    }

    #[test]
    fn test_pages_reconstruct_records() {
        for n in [0usize, 1, 9, 10, 11, 20, 31] {
            let records: Vec<usize> = (100..100 + n).collect();
            let pages = n.div_ceil(QUESTIONS_PER_PAGE);
            let rebuilt: Vec<usize> = (1..=pages)
                .flat_map(|p| paginate(&records, page(p)).iter().copied())
                .collect();
            assert_eq!(rebuilt, records);
        }
    }

    #[test]
    fn test_custom_page_size() {
        let records = ["a", "b", "c", "d", "e"];
        assert_eq!(paginate_with_size(&records, page(2), 2), &["c", "d"]);
        assert_eq!(paginate_with_size(&records, page(3), 2), &["e"]);
    }

    #[test]
    fn test_page_view() {
        let records: Vec<u32> = (1..=19).collect();
        let second = Page::of(&records, page(2));

        assert_eq!(second.items, (11..=19).collect::<Vec<_>>());
        assert_eq!(second.page_number, page(2));
        assert_eq!(second.total_count, 19);
        assert_eq!(second.total_pages(), 2);
        assert!(!second.is_empty());
        assert!(Page::of(&records, page(3)).is_empty());
    }
}
