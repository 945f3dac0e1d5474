//! Work partitioning for parallel distance computation.

use std::ops::Range;

/// Split `0..len` into contiguous ranges, one per worker.
///
/// Every range but the last has `len / parts` items; the last one absorbs the
/// remainder. The number of ranges is capped at `len` so no worker receives an
/// empty chunk, and is at least 1 (an empty `0..0` range for `len == 0`).
pub fn partition(len: usize, workers: usize) -> Vec<Range<usize>> {
    let parts = workers.min(len).max(1);
    let chunk_size = len / parts;

    (0..parts)
        .map(|i| {
            let start = i * chunk_size;
            let end = if i + 1 == parts { len } else { start + chunk_size };
            start..end
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn covered(ranges: &[Range<usize>]) -> Vec<usize> {
        ranges.iter().flat_map(|r| r.clone()).collect()
    }

    #[test]
    fn test_even_split() {
        let ranges = partition(12, 4);
        assert_eq!(ranges, vec![0..3, 3..6, 6..9, 9..12]);
    }

    #[test]
    fn test_last_chunk_absorbs_remainder() {
        let ranges = partition(10, 3);
        assert_eq!(ranges, vec![0..3, 3..6, 6..10]);
    }

    #[test]
    fn test_fewer_items_than_workers() {
        let ranges = partition(3, 8);
        assert_eq!(ranges, vec![0..1, 1..2, 2..3]);
    }

    #[test]
    fn test_zero_workers_and_empty_input() {
        assert_eq!(partition(5, 0), vec![0..5]);
        assert_eq!(partition(0, 4), vec![0..0]);
    }

    #[test]
    fn test_every_item_exactly_once() {
        for len in [1, 2, 7, 64, 1000, 1001] {
            for workers in [1, 2, 3, 5, 8, 16] {
                let ranges = partition(len, workers);
                assert_eq!(covered(&ranges), (0..len).collect::<Vec<_>>());
                assert!(ranges.len() <= workers.max(1));
            }
        }
    }
}
