//! Turns sampled slots into `schedules` insert statements.

use chrono::NaiveDate;
use rand::Rng;
use tracing::{debug, info};

use crate::errors::SeedResult;
use crate::models::schedule::{DoctorId, ScheduleEntry};
use crate::models::slot::SlotUniverse;
use crate::sampler::SlotSampler;

#[derive(Debug, Clone, Default)]
pub struct ScheduleInsertEmitter {
    sampler: SlotSampler,
}

impl ScheduleInsertEmitter {
    pub fn new(sampler: SlotSampler) -> Self {
        Self { sampler }
    }

    /// Samples once per (date, doctor) pair, dates outermost, and returns one
    /// entry per sampled slot.
    pub fn emit_entries<R, I>(
        &self,
        dates: I,
        doctors: &[DoctorId],
        universe: &SlotUniverse,
        rng: &mut R,
    ) -> SeedResult<Vec<ScheduleEntry>>
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = NaiveDate>,
    {
        let mut entries = Vec::new();
        let mut groups = 0usize;

        for date in dates {
            for &doctor in doctors {
                let slots = self.sampler.sample(universe, rng)?;
                debug!(%date, %doctor, count = slots.len(), "Sampled slots");
                groups += 1;
                entries.extend(slots.into_iter().map(|slot| ScheduleEntry { date, slot, doctor }));
            }
        }

        info!(groups, rows = entries.len(), "Generated schedule entries");
        Ok(entries)
    }

    /// Same as [`emit_entries`](Self::emit_entries), rendered as SQL lines.
    pub fn emit<R, I>(
        &self,
        dates: I,
        doctors: &[DoctorId],
        universe: &SlotUniverse,
        rng: &mut R,
    ) -> SeedResult<Vec<String>>
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = NaiveDate>,
    {
        let entries = self.emit_entries(dates, doctors, universe, rng)?;
        Ok(entries.iter().map(ScheduleEntry::to_insert_sql).collect())
    }
}
