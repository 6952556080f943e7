use crate::model::ProgressEvent;
use log::{info, trace};

/// Logs generation progress at every tenth of the run.
pub struct ProgressLogger {
    label: String,
    next_decile: usize,
}

impl ProgressLogger {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            next_decile: 1,
        }
    }

    /// Returns true when the event crossed a new milestone and was logged at `info`.
    pub fn observe(&mut self, event: &ProgressEvent) -> bool {
        trace!(
            "{} {}/{} (~{:.3}s left)",
            self.label,
            event.completed,
            event.total,
            event.estimated_remaining_seconds
        );

        let decile = event.completed * 10 / event.total.max(1);
        if decile < self.next_decile {
            return false;
        }
        self.next_decile = decile + 1;

        let (minutes, seconds) = event.remaining_clock();
        info!(
            "{}: {}/{} sensors ({:.0}%), about {} min {} sec left",
            self.label,
            event.completed,
            event.total,
            event.percent(),
            minutes,
            seconds
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logger_reports_each_decile_once() {
        let mut logger = ProgressLogger::new("test");
        let logged = (1..=100)
            .map(|completed| ProgressEvent::from_elapsed(completed, 100, 0.0))
            .filter(|event| logger.observe(event))
            .count();
        assert_eq!(logged, 10);
    }

    #[test]
    fn small_runs_log_every_step() {
        let mut logger = ProgressLogger::new("small");
        let logged = (1..=3)
            .map(|completed| ProgressEvent::from_elapsed(completed, 3, 0.0))
            .filter(|event| logger.observe(event))
            .count();
        assert_eq!(logged, 3);
    }
}
