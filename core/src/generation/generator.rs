use crate::model::sensor::{COORDINATE_RANGE, ENERGY_RANGE};
use crate::model::{ProgressEvent, Sensor, SensorNetwork};
use crate::prelude::{ensure_positive, NetworkError, NetworkResult};
use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::{Duration, Instant};

/// Settings shared by every generation run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratorConfig {
    /// Fixed seed for reproducible runs; entropy when `None`.
    pub seed: Option<u64>,
    /// Pause after each record, used by the drivers to pace the progress bar.
    pub record_delay: Duration,
}

impl GeneratorConfig {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Draws sensors from a caller-owned random source.
pub struct NetworkGenerator<'r, R: Rng + ?Sized> {
    rng: &'r mut R,
    record_delay: Duration,
}

impl<'r, R: Rng + ?Sized> NetworkGenerator<'r, R> {
    pub fn new(rng: &'r mut R) -> Self {
        Self {
            rng,
            record_delay: Duration::ZERO,
        }
    }

    pub fn with_record_delay(mut self, record_delay: Duration) -> Self {
        self.record_delay = record_delay;
        self
    }

    /// Generates `count` sensors, calling `on_progress` after every record.
    ///
    /// Fails with [`NetworkError::InvalidArgument`] when `count` is zero; no
    /// progress is reported in that case.
    pub fn generate<F>(&mut self, count: usize, mut on_progress: F) -> NetworkResult<SensorNetwork>
    where
        F: FnMut(ProgressEvent),
    {
        let count = ensure_positive(count)?;
        let started = Instant::now();
        let mut sensors = Vec::with_capacity(count);

        for index in 0..count {
            sensors.push(self.draw_sensor());

            let elapsed = started.elapsed().as_secs_f64();
            on_progress(ProgressEvent::from_elapsed(index + 1, count, elapsed));

            if !self.record_delay.is_zero() {
                std::thread::sleep(self.record_delay);
            }
        }

        debug!(
            "generated {} sensors in {:.3}s",
            count,
            started.elapsed().as_secs_f64()
        );
        Ok(SensorNetwork::new(sensors))
    }

    fn draw_sensor(&mut self) -> Sensor {
        let x = self.rng.gen_range(COORDINATE_RANGE);
        let y = self.rng.gen_range(COORDINATE_RANGE);
        let energy = self.rng.gen_range(ENERGY_RANGE);
        Sensor::new(x, y, energy)
    }
}

/// Generates `count` sensors from entropy, optionally reporting progress.
pub fn generate(
    count: usize,
    on_progress: Option<&mut dyn FnMut(ProgressEvent)>,
) -> NetworkResult<SensorNetwork> {
    let mut rng = rand::thread_rng();
    let mut generator = NetworkGenerator::new(&mut rng);
    match on_progress {
        Some(callback) => generator.generate(count, callback),
        None => generator.generate(count, |_| {}),
    }
}

/// Parses a user-supplied sensor count; rejects non-integers and values <= 0.
pub fn parse_sensor_count(raw: &str) -> NetworkResult<usize> {
    let trimmed = raw.trim();
    let value: i64 = trimmed.parse().map_err(|_| {
        NetworkError::InvalidArgument(format!("sensor count `{trimmed}` is not an integer"))
    })?;
    if value <= 0 {
        return Err(NetworkError::InvalidArgument(format!(
            "sensor count must be positive, got {value}"
        )));
    }
    usize::try_from(value).map_err(|_| {
        NetworkError::InvalidArgument(format!("sensor count {value} is too large"))
    })
}
