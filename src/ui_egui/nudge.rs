//! Short horizontal shake played on the prev/next buttons.
//!
//! Times are egui input seconds (`InputState::time`), which keeps the
//! animation a pure function of the frame clock.

use crate::models::card::NavDirection;

/// Initial horizontal offset in points
pub const NUDGE_DISTANCE: f32 = 2.0;

/// Seconds until the button is back in place
pub const NUDGE_DURATION: f64 = 0.120;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonNudge {
    pub direction: NavDirection,
    pub started_at: f64,
}

impl ButtonNudge {
    pub fn new(direction: NavDirection, started_at: f64) -> Self {
        Self {
            direction,
            started_at,
        }
    }

    /// Horizontal offset to draw the button with at time `now`.
    pub fn offset_at(&self, now: f64) -> f32 {
        let elapsed = now - self.started_at;
        if !(0.0..NUDGE_DURATION).contains(&elapsed) {
            return 0.0;
        }

        let remaining = 1.0 - (elapsed / NUDGE_DURATION) as f32;
        let sign = match self.direction {
            NavDirection::Prev => -1.0,
            NavDirection::Next => 1.0,
        };
        sign * NUDGE_DISTANCE * remaining
    }

    pub fn is_finished(&self, now: f64) -> bool {
        now - self.started_at >= NUDGE_DURATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(NavDirection::Prev, -2.0 ; "prev moves left")]
    #[test_case(NavDirection::Next, 2.0 ; "next moves right")]
    fn test_starts_at_full_distance(direction: NavDirection, expected: f32) {
        let nudge = ButtonNudge::new(direction, 10.0);
        assert_eq!(nudge.offset_at(10.0), expected);
    }

    #[test]
    fn test_halfway() {
        let nudge = ButtonNudge::new(NavDirection::Next, 0.0);
        let offset = nudge.offset_at(NUDGE_DURATION / 2.0);
        assert!((offset - 1.0).abs() < 1e-4, "offset was {}", offset);
    }

    #[test]
    fn test_settles_after_duration() {
        let nudge = ButtonNudge::new(NavDirection::Prev, 1.0);
        assert_eq!(nudge.offset_at(1.0 + NUDGE_DURATION), 0.0);
        assert!(nudge.is_finished(1.0 + NUDGE_DURATION));
        assert!(!nudge.is_finished(1.05));
    }

    #[test]
    fn test_before_start_is_still() {
        let nudge = ButtonNudge::new(NavDirection::Next, 5.0);
        assert_eq!(nudge.offset_at(4.0), 0.0);
    }

    #[test]
    fn test_decays_monotonically() {
        let nudge = ButtonNudge::new(NavDirection::Prev, 0.0);
        let mut last = nudge.offset_at(0.0).abs();
        for step in 1..=12 {
            let current = nudge.offset_at(step as f64 * 0.01).abs();
            assert!(current <= last);
            last = current;
        }
    }
}
