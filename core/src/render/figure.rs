use super::style::{LineStyle, MarkerStyle};
use crate::model::sensor::FIELD_SIZE;
use crate::model::Position;
use serde::{Deserialize, Serialize};

/// Backend-independent description of the network scatter plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedFigure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub extent: PlotExtent,
    pub grid: bool,
    pub sensors: Vec<Marker>,
    pub distinct_heads: Vec<usize>,
    pub cluster_heads: Vec<Marker>,
    pub connectors: Vec<Segment>,
    pub base_station: Marker,
    pub legend: Vec<LegendEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub position: Position,
    pub style: MarkerStyle,
}

impl Marker {
    pub fn new(position: Position, style: MarkerStyle) -> Self {
        Self { position, style }
    }
}

/// Straight line from a cluster head to the base station.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub head: usize,
    pub from: Position,
    pub to: Position,
    pub style: LineStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub label: String,
    pub style: MarkerStyle,
}

impl LegendEntry {
    pub fn new(label: &str, style: MarkerStyle) -> Self {
        Self {
            label: label.into(),
            style,
        }
    }
}

/// Data-space bounds of the plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotExtent {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl PlotExtent {
    pub fn field() -> Self {
        Self {
            x_min: 0.0,
            x_max: FIELD_SIZE,
            y_min: 0.0,
            y_max: FIELD_SIZE,
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Maps a data point into `[0, 1]` on both axes, y pointing down.
    pub fn normalize(&self, position: Position) -> (f64, f64) {
        let u = (position.x - self.x_min) / self.width();
        let v = 1.0 - (position.y - self.y_min) / self.height();
        (u, v)
    }

    /// Evenly spaced tick values along one axis, bounds included.
    pub fn ticks(min: f64, max: f64, steps: usize) -> Vec<f64> {
        let steps = steps.max(1);
        (0..=steps)
            .map(|i| min + (max - min) * i as f64 / steps as f64)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_flips_the_y_axis() {
        let extent = PlotExtent::field();
        assert_eq!(extent.normalize(Position::new(0.0, 0.0)), (0.0, 1.0));
        assert_eq!(extent.normalize(Position::new(100.0, 100.0)), (1.0, 0.0));
        assert_eq!(extent.normalize(Position::new(50.0, 25.0)), (0.5, 0.75));
    }

    #[test]
    fn ticks_include_both_bounds() {
        assert_eq!(
            PlotExtent::ticks(0.0, 100.0, 5),
            vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]
        );
    }
}
