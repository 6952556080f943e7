pub mod figure;
pub mod style;

pub use figure::{LegendEntry, Marker, PlotExtent, RenderedFigure, Segment};
pub use style::{FigureStyle, LineStyle, MarkerShape, MarkerStyle, Rgb};

use crate::model::{BaseStation, ClusterHeadAssignment, SensorNetwork};

pub const TITLE: &str = "Wireless Sensor Network Visualization";
pub const X_LABEL: &str = "X-coordinate";
pub const Y_LABEL: &str = "Y-coordinate";

/// Builds the scatter figure with the default palette.
///
/// # Panics
///
/// Panics if a head index is out of bounds for `network`. Heads drawn by
/// [`crate::select_heads`] for the same count are always valid.
pub fn render(
    network: &SensorNetwork,
    base_station: &BaseStation,
    heads: &ClusterHeadAssignment,
) -> RenderedFigure {
    render_with_style(network, base_station, heads, &FigureStyle::default())
}

pub fn render_with_style(
    network: &SensorNetwork,
    base_station: &BaseStation,
    heads: &ClusterHeadAssignment,
    style: &FigureStyle,
) -> RenderedFigure {
    let sensors = network
        .iter()
        .map(|sensor| Marker::new(sensor.position(), style.sensor))
        .collect();

    let distinct_heads = heads.distinct();
    let cluster_heads = distinct_heads
        .iter()
        .map(|&head| Marker::new(network[head].position(), style.cluster_head))
        .collect();
    let connectors = distinct_heads
        .iter()
        .map(|&head| Segment {
            head,
            from: network[head].position(),
            to: base_station.position,
            style: style.connector,
        })
        .collect();

    let mut legend = vec![LegendEntry::new("Sensors", style.sensor)];
    if !distinct_heads.is_empty() {
        legend.push(LegendEntry::new("Cluster Head", style.cluster_head));
    }
    legend.push(LegendEntry::new("Base Station", style.base_station));

    RenderedFigure {
        title: TITLE.into(),
        x_label: X_LABEL.into(),
        y_label: Y_LABEL.into(),
        extent: PlotExtent::field(),
        grid: true,
        sensors,
        distinct_heads,
        cluster_heads,
        connectors,
        base_station: Marker::new(base_station.position, style.base_station),
        legend,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::{select_heads_with, NetworkGenerator};
    use crate::model::{Position, Sensor};
    use rand::{rngs::StdRng, SeedableRng};

    fn line_network(count: usize) -> SensorNetwork {
        (0..count)
            .map(|i| Sensor::new(i as f64 * 10.0, i as f64 * 5.0, 75.0))
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn one_connector_per_distinct_head() {
        let mut rng = StdRng::seed_from_u64(5);
        let network = NetworkGenerator::new(&mut rng).generate(40, |_| {}).unwrap();
        let heads = select_heads_with(&mut rng, 40).unwrap();
        let station = BaseStation::default();

        let figure = render(&network, &station, &heads);
        assert_eq!(figure.sensors.len(), 40);
        assert_eq!(figure.connectors.len(), heads.distinct().len());
        assert_eq!(figure.cluster_heads.len(), heads.distinct().len());
        for connector in &figure.connectors {
            assert_eq!(connector.to, station.position);
            assert_eq!(connector.from, network[connector.head].position());
        }
    }

    #[test]
    fn repeated_head_draws_single_connector() {
        let network = line_network(5);
        let heads = ClusterHeadAssignment::from(vec![2, 2, 2, 2, 2]);
        let figure = render(&network, &BaseStation::default(), &heads);

        assert_eq!(figure.distinct_heads, vec![2]);
        assert_eq!(figure.connectors.len(), 1);
        assert_eq!(figure.connectors[0].from, Position::new(20.0, 10.0));
        assert_eq!(figure.connectors[0].to, Position::new(50.0, 50.0));
    }

    #[test]
    fn single_sensor_connects_to_base_station() {
        let network = line_network(1);
        let heads = ClusterHeadAssignment::from(vec![0]);
        let figure = render(&network, &BaseStation::default(), &heads);
        assert_eq!(figure.connectors.len(), 1);
        assert_eq!(figure.connectors[0].head, 0);
    }

    #[test]
    fn render_is_idempotent() {
        let network = line_network(6);
        let heads = ClusterHeadAssignment::from(vec![5, 1, 1, 3, 0, 5]);
        let station = BaseStation::default();
        assert_eq!(
            render(&network, &station, &heads),
            render(&network, &station, &heads)
        );
    }

    #[test]
    fn legend_lists_heads_only_when_present() {
        let network = line_network(3);
        let station = BaseStation::default();

        let figure = render(&network, &station, &ClusterHeadAssignment::from(vec![1]));
        let labels: Vec<_> = figure.legend.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Sensors", "Cluster Head", "Base Station"]);

        let figure = render(&network, &station, &ClusterHeadAssignment::default());
        assert_eq!(figure.legend.len(), 2);
        assert!(figure.connectors.is_empty());
    }

    #[test]
    #[should_panic]
    fn out_of_range_head_is_a_caller_error() {
        let network = line_network(2);
        render(
            &network,
            &BaseStation::default(),
            &ClusterHeadAssignment::from(vec![2]),
        );
    }
}
