use std::ops::Range;

/// Splits `height` rows into `strip_count` equal-height ranges.
///
/// The last range absorbs any remainder so the ranges always cover
/// `0..height` exactly once, in order.
pub fn calculate_strip_rows(height: u32, strip_count: u32) -> Vec<Range<u32>> {
    let strip_count = strip_count.max(1);
    let strip_height = height / strip_count;

    (0..strip_count)
        .map(|strip_num| {
            let top = strip_num * strip_height;

            let bottom = if strip_num == strip_count - 1 {
                height // Last strip takes any remainder rows
            } else {
                (strip_num + 1) * strip_height
            };

            top..bottom
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_covers_exactly(ranges: &[Range<u32>], height: u32) {
        let mut next = 0;
        for range in ranges {
            assert_eq!(range.start, next, "ranges must be contiguous: {:?}", ranges);
            assert!(range.start <= range.end);
            next = range.end;
        }
        assert_eq!(next, height);
    }

    #[test]
    fn test_even_split() {
        let ranges = calculate_strip_rows(600, 4);

        assert_eq!(ranges, vec![0..150, 150..300, 300..450, 450..600]);
    }

    #[test]
    fn test_last_strip_absorbs_remainder() {
        let ranges = calculate_strip_rows(601, 4);

        assert_eq!(ranges.len(), 4);
        assert_eq!(ranges[3], 450..601);
        assert_covers_exactly(&ranges, 601);
    }

    #[test]
    fn test_single_strip_covers_everything() {
        assert_eq!(calculate_strip_rows(7, 1), vec![0..7]);
    }

    #[test]
    fn test_zero_strips_treated_as_one() {
        assert_eq!(calculate_strip_rows(7, 0), vec![0..7]);
    }

    #[test]
    fn test_coverage_for_awkward_sizes() {
        for height in [1, 2, 3, 5, 17, 599, 600, 1080] {
            for strips in 1..=12 {
                let strips = strips.min(height);
                assert_covers_exactly(&calculate_strip_rows(height, strips), height);
            }
        }
    }
}
