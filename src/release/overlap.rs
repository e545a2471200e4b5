//! Header overlap fraction driving the title bar opacity.

/// Fraction of the header hidden under the title bar.
///
/// `collapse_distance` is the header height in lines; values below 1 are
/// treated as 1. Returns 0 at the top and 1 once the header has scrolled
/// fully out of view.
pub fn overlap_fraction(scroll_offset: usize, collapse_distance: usize) -> f32 {
    let distance = collapse_distance.max(1) as f32;
    (scroll_offset as f32 / distance).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_fraction() {
        assert_eq!(overlap_fraction(0, 4), 0.0);
        assert_eq!(overlap_fraction(1, 4), 0.25);
        assert_eq!(overlap_fraction(4, 4), 1.0);
        assert_eq!(overlap_fraction(40, 4), 1.0);
    }

    #[test]
    fn test_zero_distance_is_treated_as_one() {
        assert_eq!(overlap_fraction(0, 0), 0.0);
        assert_eq!(overlap_fraction(1, 0), 1.0);
    }
}
