/// Linearly maps `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// `in_min == in_max` is a precondition violation and yields a non-finite
/// result; callers guarantee non-degenerate input ranges.
#[inline]
#[must_use]
pub fn map_value(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    out_min + (out_max - out_min) * ((value - in_min) / (in_max - in_min))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_map_exactly() {
        assert_eq!(map_value(0.0, 0.0, 800.0, -2.5, 1.0), -2.5);
        assert_eq!(map_value(800.0, 0.0, 800.0, -2.5, 1.0), 1.0);
    }

    #[test]
    fn test_midpoint() {
        assert_eq!(map_value(400.0, 0.0, 800.0, -2.5, 1.0), -0.75);
        assert_eq!(map_value(300.0, 0.0, 600.0, -1.5, 1.5), 0.0);
    }

    #[test]
    fn test_inverse_mapping_recovers_input() {
        for pixel in [0.0, 1.0, 17.0, 399.5, 640.0, 799.0, 800.0] {
            let plane = map_value(pixel, 0.0, 800.0, -2.5, 1.0);
            let back = map_value(plane, -2.5, 1.0, 0.0, 800.0);

            assert!(
                (back - pixel).abs() < 1e-9,
                "pixel {} round-tripped to {}",
                pixel,
                back
            );
        }
    }

    #[test]
    fn test_iterations_to_frequency() {
        assert_eq!(map_value(0.0, 0.0, 100.0, 220.0, 880.0), 220.0);
        assert_eq!(map_value(50.0, 0.0, 100.0, 220.0, 880.0), 550.0);
    }

    #[test]
    fn test_reversed_output_range() {
        assert_eq!(map_value(0.0, 0.0, 10.0, 1.0, -1.0), 1.0);
        assert_eq!(map_value(10.0, 0.0, 10.0, 1.0, -1.0), -1.0);
    }
}
