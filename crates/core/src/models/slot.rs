use std::fmt;

use serde::{Deserialize, Serialize};

/// One schedulable time unit within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slot(pub u32);

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The fixed, ordered set of slots a day can be split into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotUniverse {
    slots: Vec<Slot>,
}

impl SlotUniverse {
    /// Builds the universe `1..=count`.
    pub fn numbered(count: u32) -> Self {
        Self {
            slots: (1..=count).map(Slot).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn contains(&self, slot: Slot) -> bool {
        self.slots.contains(&slot)
    }

    pub fn as_slice(&self) -> &[Slot] {
        &self.slots
    }
}

impl From<Vec<Slot>> for SlotUniverse {
    fn from(mut slots: Vec<Slot>) -> Self {
        slots.sort_unstable();
        slots.dedup();
        Self { slots }
    }
}
