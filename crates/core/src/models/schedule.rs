use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::DATE_FORMAT;
use crate::models::slot::Slot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DoctorId(pub i64);

impl fmt::Display for DoctorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single row destined for the `schedules` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub date: NaiveDate,
    pub slot: Slot,
    pub doctor: DoctorId,
}

impl ScheduleEntry {
    /// Renders the row as an insert statement, newline included.
    ///
    /// Date and slot are quoted, the doctor id is not.
    pub fn to_insert_sql(&self) -> String {
        format!(
            "INSERT INTO schedules (date, slot, doctor_id) VALUES ('{}', '{}', {});\n",
            self.date.format(DATE_FORMAT),
            self.slot,
            self.doctor
        )
    }
}
