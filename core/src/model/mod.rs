pub mod assignment;
pub mod progress;
pub mod sensor;

pub use assignment::ClusterHeadAssignment;
pub use progress::ProgressEvent;
pub use sensor::{BaseStation, Position, Sensor, SensorNetwork};
