use std::sync::Mutex;

/// Counters across generation requests within one session.
#[derive(Debug)]
pub struct SessionMetrics {
    inner: Mutex<MetricsSnapshot>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub networks: usize,
    pub sensors: usize,
    pub rejected: usize,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MetricsSnapshot::default()),
        }
    }

    pub fn record_network(&self, sensors: usize) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.networks += 1;
            metrics.sensors += sensors;
        }
    }

    pub fn record_rejected(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.rejected += 1;
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        if let Ok(metrics) = self.inner.lock() {
            *metrics
        } else {
            MetricsSnapshot::default()
        }
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_accumulate_across_requests() {
        let metrics = SessionMetrics::new();
        metrics.record_network(20);
        metrics.record_network(5);
        metrics.record_rejected();
        assert_eq!(
            metrics.snapshot(),
            MetricsSnapshot {
                networks: 2,
                sensors: 25,
                rejected: 1,
            }
        );
    }
}
