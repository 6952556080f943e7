use serde::{Deserialize, Serialize};
use std::ops::{Index, RangeInclusive};

/// Side length of the square sensor field.
pub const FIELD_SIZE: f64 = 100.0;

pub const COORDINATE_RANGE: RangeInclusive<f64> = 0.0..=FIELD_SIZE;
pub const ENERGY_RANGE: RangeInclusive<f64> = 50.0..=100.0;

/// A point on the sensor field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A generated sensor with its position and residual energy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sensor {
    pub x: f64,
    pub y: f64,
    pub energy: f64,
}

impl Sensor {
    pub fn new(x: f64, y: f64, energy: f64) -> Self {
        Self { x, y, energy }
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

/// Sensors in generation order. The index is the only stable identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SensorNetwork {
    sensors: Vec<Sensor>,
}

impl SensorNetwork {
    pub fn new(sensors: Vec<Sensor>) -> Self {
        Self { sensors }
    }

    pub fn len(&self) -> usize {
        self.sensors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Sensor> {
        self.sensors.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sensor> {
        self.sensors.iter()
    }

    pub fn as_slice(&self) -> &[Sensor] {
        &self.sensors
    }

    pub fn mean_energy(&self) -> Option<f64> {
        if self.sensors.is_empty() {
            return None;
        }
        let total: f64 = self.sensors.iter().map(|sensor| sensor.energy).sum();
        Some(total / self.sensors.len() as f64)
    }
}

impl Index<usize> for SensorNetwork {
    type Output = Sensor;

    fn index(&self, index: usize) -> &Self::Output {
        &self.sensors[index]
    }
}

impl<'a> IntoIterator for &'a SensorNetwork {
    type Item = &'a Sensor;
    type IntoIter = std::slice::Iter<'a, Sensor>;

    fn into_iter(self) -> Self::IntoIter {
        self.sensors.iter()
    }
}

impl From<Vec<Sensor>> for SensorNetwork {
    fn from(sensors: Vec<Sensor>) -> Self {
        Self::new(sensors)
    }
}

/// Sink that every cluster head connects to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseStation {
    pub position: Position,
}

impl BaseStation {
    /// The fixed sink at the centre of the field.
    pub const CENTER: BaseStation = BaseStation {
        position: Position {
            x: FIELD_SIZE / 2.0,
            y: FIELD_SIZE / 2.0,
        },
    };

    pub fn new(position: Position) -> Self {
        Self { position }
    }
}

impl Default for BaseStation {
    fn default() -> Self {
        Self::CENTER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_station_defaults_to_field_center() {
        let station = BaseStation::default();
        assert_eq!(station.position, Position::new(50.0, 50.0));
    }

    #[test]
    fn mean_energy_of_empty_network_is_none() {
        assert_eq!(SensorNetwork::default().mean_energy(), None);
        let network = SensorNetwork::new(vec![
            Sensor::new(1.0, 1.0, 60.0),
            Sensor::new(2.0, 2.0, 80.0),
        ]);
        assert_eq!(network.mean_energy(), Some(70.0));
    }

    #[test]
    fn network_serializes_as_plain_sequence() {
        let network = SensorNetwork::new(vec![Sensor::new(1.0, 2.0, 75.0)]);
        let json = serde_json::to_string(&network).unwrap();
        assert_eq!(json, r#"[{"x":1.0,"y":2.0,"energy":75.0}]"#);
    }
}
