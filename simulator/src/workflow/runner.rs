use crate::workflow::config::WorkflowConfig;
use wsncore::telemetry::{MetricsSnapshot, ProgressLogger, SessionMetrics};
use wsncore::{run_scenario, Scenario};

pub struct Runner {
    config: WorkflowConfig,
    metrics: SessionMetrics,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self {
            config,
            metrics: SessionMetrics::new(),
        }
    }

    pub fn config(&self) -> &WorkflowConfig {
        &self.config
    }

    pub fn execute(&self) -> anyhow::Result<Scenario> {
        let mut progress = ProgressLogger::new("generation");
        let outcome = run_scenario(
            self.config.sensors,
            &self.config.to_generator_config(),
            |event| {
                progress.observe(&event);
            },
        );

        match outcome {
            Ok(scenario) => {
                self.metrics.record_network(scenario.sensor_count());
                Ok(scenario)
            }
            Err(err) => {
                self.metrics.record_rejected();
                Err(anyhow::Error::new(err).context(format!(
                    "running scenario with {} sensors",
                    self.config.sensors
                )))
            }
        }
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quick_config(sensors: usize) -> WorkflowConfig {
        WorkflowConfig::default().with_overrides(Some(sensors), Some(17), Some(0))
    }

    #[test]
    fn runner_executes_workflow() {
        let runner = Runner::new(quick_config(32));
        let scenario = runner.execute().unwrap();
        assert_eq!(scenario.sensor_count(), 32);
        assert_eq!(scenario.figure.connectors.len(), scenario.distinct_head_count());
        assert_eq!(runner.metrics().networks, 1);
    }

    #[test]
    fn runner_counts_rejected_requests() {
        let runner = Runner::new(quick_config(0));
        let err = runner.execute().unwrap_err();
        assert!(format!("{err:#}").contains("invalid argument"));
        assert_eq!(runner.metrics().rejected, 1);
        assert_eq!(runner.metrics().networks, 0);
    }
}
