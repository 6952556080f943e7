use serde::{Deserialize, Serialize};

/// Emitted once per generated sensor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressEvent {
    pub completed: usize,
    pub total: usize,
    pub estimated_remaining_seconds: f64,
}

impl ProgressEvent {
    /// Linear extrapolation from the mean time per record observed so far.
    pub fn from_elapsed(completed: usize, total: usize, elapsed_seconds: f64) -> Self {
        let estimated_total = elapsed_seconds / completed.max(1) as f64 * total as f64;
        Self {
            completed,
            total,
            estimated_remaining_seconds: estimated_total - elapsed_seconds,
        }
    }

    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed as f32 / self.total as f32
    }

    pub fn percent(&self) -> f32 {
        self.fraction() * 100.0
    }

    pub fn is_complete(&self) -> bool {
        self.completed >= self.total
    }

    /// Remaining time as whole `(minutes, seconds)`, truncated and clamped at zero.
    pub fn remaining_clock(&self) -> (u64, u64) {
        let whole_seconds = self.estimated_remaining_seconds.max(0.0) as u64;
        (whole_seconds / 60, whole_seconds % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_extrapolates_average_record_time() {
        let event = ProgressEvent::from_elapsed(2, 10, 1.0);
        assert!((event.estimated_remaining_seconds - 4.0).abs() < 1e-9);
        assert_eq!(event.fraction(), 0.2);
    }

    #[test]
    fn final_event_has_no_time_remaining() {
        let event = ProgressEvent::from_elapsed(10, 10, 3.5);
        assert!(event.estimated_remaining_seconds.abs() < 1e-9);
        assert!(event.is_complete());
        assert_eq!(event.percent(), 100.0);
    }

    #[test]
    fn remaining_clock_splits_minutes() {
        let event = ProgressEvent {
            completed: 1,
            total: 100,
            estimated_remaining_seconds: 125.9,
        };
        assert_eq!(event.remaining_clock(), (2, 5));
    }

    #[test]
    fn remaining_clock_clamps_negative_noise() {
        let event = ProgressEvent {
            completed: 3,
            total: 3,
            estimated_remaining_seconds: -1e-12,
        };
        assert_eq!(event.remaining_clock(), (0, 0));
    }
}
