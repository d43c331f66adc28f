use std::time::{Duration, Instant};

/// Where the session is in the fast-then-precise redraw cycle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum RenderPhase {
    /// The last frame was a precise render of the current view.
    #[default]
    Idle,
    /// The view changed at `since`; a fast preview is on screen and the
    /// precise pass waits for the debounce to elapse.
    PendingPrecise { since: Instant },
    /// The precise pass is running.
    RenderingPrecise,
}

impl RenderPhase {
    /// Any view change restarts the debounce, whatever the current phase.
    #[must_use]
    pub fn view_changed(self, now: Instant) -> Self {
        Self::PendingPrecise { since: now }
    }

    #[must_use]
    pub fn begin_precise(self) -> Self {
        match self {
            Self::PendingPrecise { .. } => Self::RenderingPrecise,
            other => other,
        }
    }

    #[must_use]
    pub fn finish_precise(self) -> Self {
        match self {
            Self::RenderingPrecise => Self::Idle,
            other => other,
        }
    }

    /// True once more than `debounce` has passed since the last view change.
    #[must_use]
    pub fn precise_due(&self, now: Instant, debounce: Duration) -> bool {
        match self {
            Self::PendingPrecise { since } => now.saturating_duration_since(*since) > debounce,
            _ => false,
        }
    }

    /// When the pending precise pass becomes due, if one is pending.
    #[must_use]
    pub fn deadline(&self, debounce: Duration) -> Option<Instant> {
        match self {
            Self::PendingPrecise { since } => since.checked_add(debounce),
            _ => None,
        }
    }

    #[must_use]
    pub fn needs_update(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    #[must_use]
    pub fn high_quality(&self) -> bool {
        matches!(self, Self::Idle)
    }

    #[must_use]
    pub fn rendering_high_quality(&self) -> bool {
        matches!(self, Self::RenderingPrecise)
    }

    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::PendingPrecise { .. } => "Preview",
            Self::RenderingPrecise => "Refining",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEBOUNCE: Duration = Duration::from_millis(50);

    #[test]
    fn test_idle_flags() {
        let phase = RenderPhase::Idle;

        assert!(!phase.needs_update());
        assert!(phase.high_quality());
        assert!(!phase.rendering_high_quality());
    }

    #[test]
    fn test_pending_flags() {
        let phase = RenderPhase::Idle.view_changed(Instant::now());

        assert!(phase.needs_update());
        assert!(!phase.high_quality());
        assert!(!phase.rendering_high_quality());
    }

    #[test]
    fn test_rendering_flags() {
        let phase = RenderPhase::Idle.view_changed(Instant::now()).begin_precise();

        assert_eq!(phase, RenderPhase::RenderingPrecise);
        assert!(phase.needs_update());
        assert!(!phase.high_quality());
        assert!(phase.rendering_high_quality());
    }

    #[test]
    fn test_precise_due_only_after_debounce() {
        let start = Instant::now();
        let phase = RenderPhase::Idle.view_changed(start);

        assert!(!phase.precise_due(start, DEBOUNCE));
        assert!(!phase.precise_due(start + DEBOUNCE, DEBOUNCE));
        assert!(phase.precise_due(start + DEBOUNCE + Duration::from_millis(1), DEBOUNCE));
        assert_eq!(phase.deadline(DEBOUNCE), Some(start + DEBOUNCE));
    }

    #[test]
    fn test_view_change_restarts_debounce() {
        let start = Instant::now();
        let later = start + Duration::from_millis(40);
        let phase = RenderPhase::Idle.view_changed(start).view_changed(later);

        assert!(!phase.precise_due(start + Duration::from_millis(60), DEBOUNCE));
        assert!(phase.precise_due(later + Duration::from_millis(60), DEBOUNCE));
    }

    #[test]
    fn test_idle_and_rendering_are_never_due() {
        let far_future = Instant::now() + Duration::from_secs(10);

        assert!(!RenderPhase::Idle.precise_due(far_future, DEBOUNCE));
        assert!(!RenderPhase::RenderingPrecise.precise_due(far_future, DEBOUNCE));
        assert_eq!(RenderPhase::Idle.deadline(DEBOUNCE), None);
    }

    #[test]
    fn test_transitions_ignore_wrong_phase() {
        assert_eq!(RenderPhase::Idle.begin_precise(), RenderPhase::Idle);
        assert_eq!(RenderPhase::Idle.finish_precise(), RenderPhase::Idle);
        assert_eq!(
            RenderPhase::RenderingPrecise.finish_precise(),
            RenderPhase::Idle
        );
    }
}
