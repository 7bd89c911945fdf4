use std::fmt;

use chrono::NaiveDate;

use crate::model::constants::{EPOCH_YEAR, TICKS_PER_MONTH};

/// Tolerance applied before truncating `timestamp * 100`, so that values such as
/// `4.29` (stored as `4.2899999...`) land on the tick they were written as.
const TICK_EPSILON: f64 = 1e-6;

/// A day-level point in time: the `month.day` timestamp multiplied by 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Tick(pub i64);

impl Tick {
    /// Converts a `month.day` timestamp (e.g. `13.01`) into a tick by scaling
    /// by 100 and truncating.
    pub fn from_timestamp(timestamp: f64) -> Tick {
        Tick((timestamp * TICKS_PER_MONTH as f64 + TICK_EPSILON).trunc() as i64)
    }

    pub fn next(&self) -> Tick {
        Tick(self.0 + 1)
    }

    pub fn month(&self) -> i64 {
        self.0 / TICKS_PER_MONTH
    }

    pub fn day(&self) -> i64 {
        self.0 % TICKS_PER_MONTH
    }

    /// The calendar date this tick refers to, where month 1 is January of
    /// [`EPOCH_YEAR`]. Returns `None` if the day part is not a valid day of
    /// that month.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        let months = i32::try_from(EPOCH_YEAR as i64 * 12 + self.month() - 1).ok()?;
        let day = u32::try_from(self.day()).ok()?;

        NaiveDate::from_ymd_opt(months.div_euclid(12), months.rem_euclid(12) as u32 + 1, day)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.month(), self.day())
    }
}
