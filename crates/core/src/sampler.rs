//! Random slot selection for one (day, doctor) pair.

use rand::Rng;
use rand::seq::index;
use serde::{Deserialize, Serialize};

use crate::errors::{SeedError, SeedResult};
use crate::models::slot::{Slot, SlotUniverse};

pub const DEFAULT_MIN_SLOTS: usize = 4;
pub const DEFAULT_MAX_SLOTS: usize = 8;

/// Inclusive bounds on how many slots a doctor works per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleBounds {
    pub min: usize,
    pub max: usize,
}

impl SampleBounds {
    pub fn new(min: usize, max: usize) -> SeedResult<Self> {
        if min > max {
            return Err(SeedError::InvalidConfig(format!(
                "minimum slot count {} exceeds maximum {}",
                min, max
            )));
        }
        Ok(Self { min, max })
    }
}

impl Default for SampleBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_SLOTS,
            max: DEFAULT_MAX_SLOTS,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SlotSampler {
    bounds: SampleBounds,
}

impl SlotSampler {
    pub fn new(bounds: SampleBounds) -> Self {
        Self { bounds }
    }

    pub fn bounds(&self) -> SampleBounds {
        self.bounds
    }

    /// Picks a count uniformly from the bounds, then that many distinct slots.
    ///
    /// The returned order is arbitrary.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        universe: &SlotUniverse,
        rng: &mut R,
    ) -> SeedResult<Vec<Slot>> {
        if universe.is_empty() {
            return Err(SeedError::InvalidConfig(
                "slot universe is empty".to_string(),
            ));
        }

        let SampleBounds { min, max } = self.bounds;
        if min > max {
            return Err(SeedError::InvalidConfig(format!(
                "minimum slot count {} exceeds maximum {}",
                min, max
            )));
        }

        let count = rng.gen_range(min..=max);
        sample_exact(universe, count, rng)
    }
}

/// Draws `count` distinct slots, uniformly over all subsets of that size.
pub fn sample_exact<R: Rng + ?Sized>(
    universe: &SlotUniverse,
    count: usize,
    rng: &mut R,
) -> SeedResult<Vec<Slot>> {
    if count > universe.len() {
        return Err(SeedError::InvalidSampleSize {
            requested: count,
            available: universe.len(),
        });
    }

    let slots = universe.as_slice();
    Ok(index::sample(rng, slots.len(), count)
        .into_iter()
        .map(|i| slots[i])
        .collect())
}
