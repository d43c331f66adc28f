use crate::core::data::render_quality::RenderQuality;

/// Budget at the reference zoom, scaled by `sqrt(zoom)` from there.
pub const BASE_ITERATIONS: f64 = 100.0;
pub const MIN_ITERATIONS: u32 = 100;
pub const MAX_ITERATIONS: u32 = 2000;
/// A fast preview uses this fraction of the full budget.
pub const FAST_BUDGET_DIVISOR: u32 = 4;

/// Iteration cap for the current zoom level.
///
/// Boundary detail grows roughly with the square root of the zoom factor, so
/// the budget follows `100·sqrt(reference_width / current_width)`, clamped to
/// `[MIN_ITERATIONS, MAX_ITERATIONS]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct IterationBudget(u32);

impl Default for IterationBudget {
    fn default() -> Self {
        Self(MIN_ITERATIONS)
    }
}

impl IterationBudget {
    #[must_use]
    pub fn for_zoom(reference_width: f64, current_width: f64) -> Self {
        let budget = BASE_ITERATIONS * (reference_width / current_width).sqrt();

        if budget.is_nan() {
            return Self::default();
        }

        Self((budget as u32).clamp(MIN_ITERATIONS, MAX_ITERATIONS))
    }

    #[must_use]
    pub fn full(&self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn for_quality(&self, quality: RenderQuality) -> u32 {
        match quality {
            RenderQuality::Precise => self.0,
            RenderQuality::Fast => (self.0 / FAST_BUDGET_DIVISOR).max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_width_gives_lower_clamp() {
        assert_eq!(IterationBudget::for_zoom(3.5, 3.5).full(), 100);
    }

    #[test]
    fn test_extreme_zoom_gives_upper_clamp() {
        assert_eq!(IterationBudget::for_zoom(3.5, 3.5 / 100_000_000.0).full(), 2000);
    }

    #[test]
    fn test_zoomed_out_stays_at_lower_clamp() {
        assert_eq!(IterationBudget::for_zoom(3.5, 35.0).full(), 100);
    }

    #[test]
    fn test_formula_between_clamps() {
        for ratio in [1.0_f64, 2.0, 4.0, 9.0, 16.0, 100.0, 250.0, 399.0, 400.0, 1e4] {
            let expected = ((100.0 * ratio.sqrt()) as u32).clamp(100, 2000);
            let budget = IterationBudget::for_zoom(3.5, 3.5 / ratio).full();

            assert!(
                budget.abs_diff(expected) <= 1,
                "ratio {} gave {}, expected {}",
                ratio,
                budget,
                expected
            );
        }

        assert_eq!(IterationBudget::for_zoom(4.0, 1.0).full(), 200);
        assert_eq!(IterationBudget::for_zoom(9.0, 1.0).full(), 300);
    }

    #[test]
    fn test_degenerate_widths_stay_in_range() {
        assert_eq!(IterationBudget::for_zoom(3.5, 0.0).full(), 2000);
        assert_eq!(IterationBudget::for_zoom(0.0, 0.0).full(), 100);
    }

    #[test]
    fn test_fast_quality_uses_a_quarter() {
        let budget = IterationBudget::for_zoom(3.5, 3.5);

        assert_eq!(budget.for_quality(RenderQuality::Precise), 100);
        assert_eq!(budget.for_quality(RenderQuality::Fast), 25);
    }
}
