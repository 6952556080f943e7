//! Core model and pipeline for the wireless sensor network visualizer.
//!
//! Sensors are drawn uniformly over a 100 x 100 field, cluster heads are
//! picked uniformly at random, and the result is turned into a plain
//! [`render::RenderedFigure`] that any drawing backend can paint.

pub mod generation;
pub mod model;
pub mod prelude;
pub mod render;
pub mod scenario;
pub mod telemetry;

pub use generation::{generate, parse_sensor_count, select_heads, GeneratorConfig};
pub use model::{BaseStation, ClusterHeadAssignment, Position, ProgressEvent, Sensor, SensorNetwork};
pub use prelude::{NetworkError, NetworkResult};
pub use render::{render, RenderedFigure};
pub use scenario::{run_scenario, Scenario};
