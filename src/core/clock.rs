//! Source of "now" for time-dependent views.

use chrono::{Local, NaiveDate};
use std::cell::Cell;
use std::rc::Rc;

pub trait Clock {
    /// Current local calendar date.
    fn today(&self) -> NaiveDate;

    /// Milliseconds since the Unix epoch, used to derive record ids.
    fn now_millis(&self) -> i64 {
        Local::now().timestamp_millis()
    }

    /// Current date as `YYYY-MM-DD`.
    fn today_iso(&self) -> String {
        self.today().format("%Y-%m-%d").to_string()
    }
}

/// Reads the system clock on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        crate::utils::date::today()
    }
}

/// A clock pinned to a date. Clones share the same date, so a handle kept
/// outside the app can move the date after the app was built.
#[derive(Debug, Clone)]
pub struct FixedClock {
    date: Rc<Cell<NaiveDate>>,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date: Rc::new(Cell::new(date)),
        }
    }

    pub fn set_date(&self, date: NaiveDate) {
        self.date.set(date);
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date.get()
    }
}
