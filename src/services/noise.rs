use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::errors::SeriesError;

/// Source of independent standard-normal draws for the noise component.
pub trait NoiseSource {
    fn standard_normal(&mut self) -> Result<f64, SeriesError>;
}

/// Adapts any `rand` generator into a [`NoiseSource`].
#[derive(Debug, Clone)]
pub struct RngNoise<R> {
    rng: R,
}

impl<R: Rng> RngNoise<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngNoise<StdRng> {
    /// Reproducible source: the same seed always yields the same draws.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_os() -> Result<Self, SeriesError> {
        StdRng::try_from_os_rng()
            .map(Self::new)
            .map_err(|e| SeriesError::RandomSourceUnavailable(e.to_string()))
    }
}

impl<R: Rng> NoiseSource for RngNoise<R> {
    fn standard_normal(&mut self) -> Result<f64, SeriesError> {
        Ok(self.rng.sample(StandardNormal))
    }
}
