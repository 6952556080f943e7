use anyhow::Context;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use wsncore::{ClusterHeadAssignment, RenderedFigure, Scenario, SensorNetwork};

/// JSON layout of an exported scenario.
#[derive(Debug, Serialize)]
pub struct ScenarioReport<'a> {
    pub sensor_count: usize,
    pub mean_energy: Option<f64>,
    pub sensors: &'a SensorNetwork,
    pub heads: &'a ClusterHeadAssignment,
    pub distinct_heads: &'a [usize],
    pub figure: &'a RenderedFigure,
}

impl<'a> ScenarioReport<'a> {
    pub fn new(scenario: &'a Scenario) -> Self {
        Self {
            sensor_count: scenario.sensor_count(),
            mean_energy: scenario.network.mean_energy(),
            sensors: &scenario.network,
            heads: &scenario.heads,
            distinct_heads: &scenario.figure.distinct_heads,
            figure: &scenario.figure,
        }
    }
}

pub fn write_report<P: AsRef<Path>>(scenario: &Scenario, path: P) -> anyhow::Result<()> {
    let path_ref = path.as_ref();
    let file = File::create(path_ref)
        .with_context(|| format!("creating report {}", path_ref.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &ScenarioReport::new(scenario))
        .with_context(|| format!("writing report {}", path_ref.display()))?;
    writer
        .flush()
        .with_context(|| format!("flushing report {}", path_ref.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wsncore::{run_scenario, GeneratorConfig};

    #[test]
    fn report_lists_sensors_and_distinct_heads() {
        let scenario = run_scenario(6, &GeneratorConfig::seeded(21), |_| {}).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenario.json");
        write_report(&scenario, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(value["sensor_count"], 6);
        assert_eq!(value["sensors"].as_array().unwrap().len(), 6);
        assert_eq!(value["heads"].as_array().unwrap().len(), 6);
        assert_eq!(
            value["distinct_heads"].as_array().unwrap().len(),
            scenario.distinct_head_count()
        );
    }
}
