//! Formatting utilities for terminal output

/// Number of filled cells in a bar of `width` cells for `value / max`
#[must_use]
pub fn filled_cells(value: f64, max: f64, width: usize) -> usize {
    if max > 0.0 {
        // Clamped to [0, width] before the cast
        ((value / max) * width as f64).clamp(0.0, width as f64) as usize
    } else {
        0
    }
}

/// `count` as a percentage of `total`, 0 when `total` is 0
#[must_use]
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_empty_and_full() {
        assert_eq!(filled_cells(0.0, 100.0, 10), 0);
        assert_eq!(filled_cells(100.0, 100.0, 10), 10);
    }

    #[test]
    fn bar_half() {
        assert_eq!(filled_cells(3.0, 6.0, 4), 2);
    }

    #[test]
    fn bar_clamps() {
        assert_eq!(filled_cells(200.0, 100.0, 3), 3);
        assert_eq!(filled_cells(-1.0, 100.0, 3), 0);
        assert_eq!(filled_cells(1.0, 0.0, 3), 0);
    }

    #[test]
    fn percentages() {
        assert!((percentage(1, 4) - 25.0).abs() < f64::EPSILON);
        assert!(percentage(3, 0).abs() < f64::EPSILON);
    }
}
