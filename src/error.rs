use std::fmt;

use chrono::Weekday;
use thiserror::Error;

use crate::time::utility::{month_name, weekday_name};
use crate::utility::ordinal::to_ordinal_string;

/// The year bound crossed by a rejected year.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum YearBound {
    Minimum(i32),
    Maximum(i32)
}

impl fmt::Display for YearBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearBound::Minimum(bound) => write!(f, "below the minimum of {}", bound),
            YearBound::Maximum(bound) => write!(f, "above the maximum of {}", bound)
        }
    }
}

/// Errors raised by `HolidayScheduleGenerator::generate`. Each one aborts the
/// whole call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("year {year} is {bound}")]
    YearOutOfRange {
        year: i32,
        bound: YearBound
    },

    #[error("{argument} not given")]
    NullInput {
        argument: &'static str
    },

    #[error("invalid date: {} {day}, {year} for holiday {name}", month_name(*.month))]
    InvalidDate {
        name: String,
        year: i32,
        month: u32,
        day: u32
    },

    #[error(
        "could not find {} {} in {} {year} for holiday {name}",
        to_ordinal_string(*.ordinal as i64, None),
        weekday_name(*.weekday),
        month_name(*.month)
    )]
    UnresolvableRule {
        name: String,
        ordinal: i32,
        weekday: Weekday,
        month: u32,
        year: i32
    }
}

/// Errors raised while constructing a `HolidayRule`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HolidayRuleError {
    #[error("month {0} is not between 1 and 12")]
    InvalidMonth(u32),

    #[error("day {0} is not between 1 and 31")]
    InvalidDay(u32),

    #[error("ordinal {0} is neither a positive occurrence nor -1 (last)")]
    InvalidOrdinal(i32),

    #[error("weekday index {0} is not between 0 (Sunday) and 6 (Saturday)")]
    InvalidWeekday(u8)
}
