//! # Schedule seed core
//!
//! Pure generation logic for the `schedules` fixture: date ranges, slot
//! sampling and insert-statement rendering. Nothing here touches the
//! filesystem or the environment; randomness is always passed in.

pub mod dates;
pub mod emitter;
pub mod errors;
pub mod models;
pub mod sampler;

pub use dates::DateRange;
pub use emitter::ScheduleInsertEmitter;
pub use errors::{SeedError, SeedResult};
pub use sampler::{SampleBounds, SlotSampler};
