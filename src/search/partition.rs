//! Index-range partitioning
//!
//! Splits a collection of `len` items into `parts` contiguous, non-overlapping
//! ranges of `ceil(len / parts)` items. The last non-empty range may be
//! shorter, and when `len < parts` the trailing ranges are empty.
//!
//! Partitioning depends only on indices, never on the data, so the same
//! `(len, parts)` always yields the same chunks.

use std::ops::Range;

/// Compute `parts` contiguous chunk ranges covering `0..len`
///
/// `parts` is floored at 1. The returned vector always has exactly `parts`
/// entries, in index order.
///
/// # Examples
///
/// ```
/// use nearport::search::partition::chunk_ranges;
///
/// assert_eq!(chunk_ranges(10, 3), vec![0..4, 4..8, 8..10]);
/// assert_eq!(chunk_ranges(2, 4), vec![0..1, 1..2, 2..2, 2..2]);
/// ```
pub fn chunk_ranges(len: usize, parts: usize) -> Vec<Range<usize>> {
    let parts = parts.max(1);
    let chunk_size = chunk_size(len, parts);

    (0..parts)
        .map(|i| {
            let start = (i * chunk_size).min(len);
            let end = ((i + 1) * chunk_size).min(len);
            start..end
        })
        .collect()
}

/// Chunk length for splitting `len` items into `parts` chunks, `ceil(len / parts)`
#[inline]
pub fn chunk_size(len: usize, parts: usize) -> usize {
    let parts = parts.max(1);
    len / parts + usize::from(len % parts != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_covers(ranges: &[Range<usize>], len: usize) {
        let mut expected_start = 0;
        for r in ranges {
            assert_eq!(r.start, expected_start, "ranges must be contiguous: {:?}", ranges);
            assert!(r.start <= r.end);
            expected_start = r.end;
        }
        assert_eq!(expected_start, len);
    }

    #[test]
    fn test_even_split() {
        let ranges = chunk_ranges(100, 4);
        assert_eq!(ranges, vec![0..25, 25..50, 50..75, 75..100]);
    }

    #[test]
    fn test_uneven_split_last_shorter() {
        let ranges = chunk_ranges(10, 4);
        assert_eq!(ranges, vec![0..3, 3..6, 6..9, 9..10]);
    }

    #[test]
    fn test_more_parts_than_items() {
        let ranges = chunk_ranges(3, 8);
        assert_eq!(ranges.len(), 8);
        assert_eq!(ranges.iter().filter(|r| !r.is_empty()).count(), 3);
        assert_covers(&ranges, 3);
    }

    #[test]
    fn test_empty_collection() {
        let ranges = chunk_ranges(0, 4);
        assert_eq!(ranges.len(), 4);
        assert!(ranges.iter().all(|r| r.is_empty()));
    }

    #[test]
    fn test_zero_parts_floors_to_one() {
        assert_eq!(chunk_ranges(7, 0), vec![0..7]);
        assert_eq!(chunk_size(7, 0), 7);
    }

    #[test]
    fn test_chunk_size_huge_parts() {
        assert_eq!(chunk_size(2, usize::MAX), 1);
        assert_eq!(chunk_size(usize::MAX, usize::MAX), 1);
        assert_eq!(chunk_size(usize::MAX, 2), usize::MAX / 2 + 1);
        assert_eq!(chunk_size(0, usize::MAX), 0);
    }

    #[test]
    fn test_coverage_many_shapes() {
        for len in [0, 1, 2, 5, 99, 100, 101, 10_000] {
            for parts in 1..=17 {
                let ranges = chunk_ranges(len, parts);
                assert_eq!(ranges.len(), parts);
                assert_covers(&ranges, len);
                let size = chunk_size(len, parts);
                assert!(ranges.iter().all(|r| r.len() <= size));
            }
        }
    }
}
