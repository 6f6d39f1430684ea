//! Numbering gap detection.

/// Find the numbers missing from an ordered slide sequence.
///
/// Returns the sorted integers present in the span `[lower, max]` but
/// absent from the actual number set. With `ignore_leading` the span's
/// lower bound is the second-smallest distinct number rather than the
/// smallest, so a deliberate offset between the title slide and the second
/// slide is never reported as a gap. This asymmetry is policy, not a bug.
///
/// Sequences of fewer than two slides report no gaps. Duplicate numbers
/// are collapsed before the span is computed.
#[must_use]
pub fn find_gaps(numbers: &[u32], ignore_leading: bool) -> Vec<u32> {
    if numbers.len() < 2 {
        return Vec::new();
    }

    let mut present = numbers.to_vec();
    present.sort_unstable();
    present.dedup();

    let lower = if ignore_leading {
        match present.get(1) {
            Some(&second) => second,
            None => return Vec::new(),
        }
    } else {
        present[0]
    };
    let upper = present[present.len() - 1];

    (lower..=upper)
        .filter(|n| present.binary_search(n).is_err())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_all_gaps_from_the_smallest_number() {
        assert_eq!(find_gaps(&[1, 5, 6, 9, 10], false), vec![2, 3, 4, 7, 8]);
    }

    #[test]
    fn ignores_the_leading_offset_when_asked() {
        assert_eq!(find_gaps(&[1, 5, 6, 9, 10], true), vec![7, 8]);
    }

    #[test]
    fn contiguous_sequences_have_no_gaps() {
        assert!(find_gaps(&[1, 2, 3, 4], false).is_empty());
        assert!(find_gaps(&[1, 2, 3, 4], true).is_empty());
    }

    #[test]
    fn short_sequences_never_report_gaps() {
        assert!(find_gaps(&[], false).is_empty());
        assert!(find_gaps(&[7], false).is_empty());
        assert!(find_gaps(&[3, 9], true).is_empty());
    }

    #[test]
    fn duplicates_collapse_before_the_span_is_computed() {
        assert_eq!(find_gaps(&[1, 1, 3], false), vec![2]);
        assert!(find_gaps(&[2, 2], true).is_empty());
    }

    #[test]
    fn unordered_input_is_tolerated() {
        assert_eq!(find_gaps(&[10, 1, 6, 9, 5], true), vec![7, 8]);
    }
}
