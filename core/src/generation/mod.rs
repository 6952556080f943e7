pub mod generator;
pub mod selector;

pub use generator::{generate, parse_sensor_count, GeneratorConfig, NetworkGenerator};
pub use selector::{select_heads, select_heads_with};
