use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Largest absolute integer offset applied to a life expectancy.
pub const LIFE_EXPECTANCY_NOISE: i32 = 2;
/// Exclusive upper bound of the per-cause jitter.
pub const CAUSE_JITTER_CEILING: f64 = 0.5;

/// Source of the bounded randomness used by the model. Passed explicitly so
/// callers can pin it.
pub trait NoiseSource {
    /// Uniform integer in `[-LIFE_EXPECTANCY_NOISE, LIFE_EXPECTANCY_NOISE]`.
    fn life_expectancy_offset(&mut self) -> i32;
    /// Uniform value in `[0, CAUSE_JITTER_CEILING)`.
    fn cause_jitter(&mut self) -> f64;
}

/// `rand`-backed noise.
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
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> NoiseSource for RngNoise<R> {
    fn life_expectancy_offset(&mut self) -> i32 {
        self.rng
            .gen_range(-LIFE_EXPECTANCY_NOISE..=LIFE_EXPECTANCY_NOISE)
    }

    fn cause_jitter(&mut self) -> f64 {
        self.rng.gen_range(0.0..CAUSE_JITTER_CEILING)
    }
}

/// Constant noise for tests and reproducible demos. Values outside the
/// allowed ranges are pulled back inside.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FixedNoise {
    pub offset: i32,
    pub jitter: f64,
}

impl FixedNoise {
    pub fn new(offset: i32, jitter: f64) -> Self {
        Self { offset, jitter }
    }

    /// No offset and no jitter.
    pub fn silent() -> Self {
        Self::default()
    }
}

impl NoiseSource for FixedNoise {
    fn life_expectancy_offset(&mut self) -> i32 {
        self.offset
            .clamp(-LIFE_EXPECTANCY_NOISE, LIFE_EXPECTANCY_NOISE)
    }

    fn cause_jitter(&mut self) -> f64 {
        if self.jitter.is_finite() {
            self.jitter.clamp(0.0, CAUSE_JITTER_CEILING - f64::EPSILON)
        } else {
            0.0
        }
    }
}
