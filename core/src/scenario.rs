use crate::generation::{select_heads_with, GeneratorConfig, NetworkGenerator};
use crate::model::{BaseStation, ClusterHeadAssignment, ProgressEvent, SensorNetwork};
use crate::prelude::{ensure_positive, NetworkResult};
use crate::render::{render, RenderedFigure};
use log::info;
use serde::{Deserialize, Serialize};

/// One generate → select → render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub network: SensorNetwork,
    pub heads: ClusterHeadAssignment,
    pub base_station: BaseStation,
    pub figure: RenderedFigure,
}

impl Scenario {
    pub fn sensor_count(&self) -> usize {
        self.network.len()
    }

    pub fn distinct_head_count(&self) -> usize {
        self.figure.distinct_heads.len()
    }
}

/// Runs the full pipeline against the fixed base station.
///
/// The generator and the selector share one random source, so a seeded config
/// reproduces the whole scenario.
pub fn run_scenario<F>(
    count: usize,
    config: &GeneratorConfig,
    on_progress: F,
) -> NetworkResult<Scenario>
where
    F: FnMut(ProgressEvent),
{
    let count = ensure_positive(count)?;
    let mut rng = config.rng();

    let network = NetworkGenerator::new(&mut rng)
        .with_record_delay(config.record_delay)
        .generate(count, on_progress)?;
    let heads = select_heads_with(&mut rng, count)?;
    let base_station = BaseStation::CENTER;
    let figure = render(&network, &base_station, &heads);

    info!(
        "scenario ready: {} sensors, {} distinct cluster heads",
        network.len(),
        figure.distinct_heads.len()
    );

    Ok(Scenario {
        network,
        heads,
        base_station,
        figure,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::NetworkError;

    #[test]
    fn scenario_wires_generator_selector_and_figure() {
        let mut progress = 0;
        let scenario = run_scenario(30, &GeneratorConfig::seeded(8), |_| progress += 1).unwrap();

        assert_eq!(progress, 30);
        assert_eq!(scenario.sensor_count(), 30);
        assert_eq!(scenario.heads.len(), 30);
        assert_eq!(scenario.distinct_head_count(), scenario.heads.distinct().len());
        assert_eq!(scenario.figure.connectors.len(), scenario.distinct_head_count());
    }

    #[test]
    fn seeded_scenarios_match() {
        let config = GeneratorConfig::seeded(2024);
        let first = run_scenario(12, &config, |_| {}).unwrap();
        let second = run_scenario(12, &config, |_| {}).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_scenario_is_rejected() {
        let result = run_scenario(0, &GeneratorConfig::default(), |_| {});
        assert!(matches!(result, Err(NetworkError::InvalidArgument(_))));
    }

    #[test]
    fn scenario_report_round_trips_through_json() {
        let scenario = run_scenario(4, &GeneratorConfig::seeded(1), |_| {}).unwrap();
        let json = serde_json::to_string(&scenario).unwrap();
        let decoded: Scenario = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.heads, scenario.heads);
        assert_eq!(decoded.figure.distinct_heads, scenario.figure.distinct_heads);
    }
}
