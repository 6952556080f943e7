use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use wsncore::GeneratorConfig;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    pub sensors: usize,
    pub seed: Option<u64>,
    pub record_delay_micros: u64,
    pub width: u32,
    pub height: u32,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            sensors: 20,
            seed: None,
            record_delay_micros: 100,
            width: 800,
            height: 600,
        }
    }
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn with_overrides(
        mut self,
        sensors: Option<usize>,
        seed: Option<u64>,
        record_delay_micros: Option<u64>,
    ) -> Self {
        if let Some(sensors) = sensors {
            self.sensors = sensors;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        if let Some(delay) = record_delay_micros {
            self.record_delay_micros = delay;
        }
        self
    }

    pub fn to_generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            seed: self.seed,
            record_delay: Duration::from_micros(self.record_delay_micros),
        }
    }
}
