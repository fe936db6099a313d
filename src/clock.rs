use chrono::{Datelike, Weekday};

/// Source of the current weekday for the shopping-list lookup.
pub trait Clock: Send + Sync {
    fn today(&self) -> Weekday;
}

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Weekday {
        chrono::Local::now().weekday()
    }
}

/// Always reports the same day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Weekday);

impl Clock for FixedClock {
    fn today(&self) -> Weekday {
        self.0
    }
}

/// Full English day name, as stored in the daily purchases table.
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
