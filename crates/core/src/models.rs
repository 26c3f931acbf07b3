pub mod schedule;
pub mod slot;

pub use schedule::{DoctorId, ScheduleEntry};
pub use slot::{Slot, SlotUniverse};
