use std::fmt;

use chrono::{
    Datelike,
    Days,
    NaiveDate,
    Weekday
};

use super::recurringholiday::RecurringHoliday;
use crate::time::utility::days_of_month;
use crate::utility::ordinal::to_ordinal_string;

const ONE_DAY: Days = Days::new(1);

/// Which occurrence of a weekday within the month.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum WeekdayOccurrence {
    /// The nth occurrence, counting from 1.
    Nth(u32),
    Last
}

impl WeekdayOccurrence {
    /// Maps the conventional integer form: `-1` is the last occurrence and any
    /// positive number is that occurrence.
    pub fn from_ordinal(ordinal: i32) -> Option<WeekdayOccurrence> {
        match ordinal {
            -1 => Some(WeekdayOccurrence::Last),
            n if n >= 1 => Some(WeekdayOccurrence::Nth(n as u32)),
            _ => None
        }
    }

    pub fn ordinal(&self) -> i32 {
        match self {
            WeekdayOccurrence::Nth(n) => *n as i32,
            WeekdayOccurrence::Last => -1
        }
    }
}

impl fmt::Display for WeekdayOccurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekdayOccurrence::Nth(n) => write!(f, "{}", to_ordinal_string(*n as i64, None)),
            WeekdayOccurrence::Last => write!(f, "Last")
        }
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub struct RelativeWeekdayHoliday {
    month: u32,
    occurrence: WeekdayOccurrence,
    weekday: Weekday
}

impl RelativeWeekdayHoliday {
    pub fn new(month: u32, occurrence: WeekdayOccurrence, weekday: Weekday) -> Option<RelativeWeekdayHoliday> {
        if !(1..=12).contains(&month) || occurrence == WeekdayOccurrence::Nth(0) {
            None
        } else {
            Some(RelativeWeekdayHoliday { month, occurrence, weekday })
        }
    }

    pub fn occurrence(&self) -> WeekdayOccurrence {
        self.occurrence
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    fn last_weekday(&self, last_of_month: NaiveDate) -> Option<NaiveDate> {
        let mut d = last_of_month;
        while d.weekday() != self.weekday {
            d = d.checked_sub_days(ONE_DAY)?;
        }
        Some(d)
    }

    fn nth_weekday(&self, first_of_month: NaiveDate, last_of_month: NaiveDate, n: u32) -> Option<NaiveDate> {
        let mut d = first_of_month;
        let mut count = 0;
        while d <= last_of_month {
            if d.weekday() == self.weekday {
                count += 1;
                if count == n {
                    return Some(d);
                }
            }
            d = d.checked_add_days(ONE_DAY)?;
        }
        None
    }
}

impl RecurringHoliday for RelativeWeekdayHoliday {
    fn month(&self) -> u32 {
        self.month
    }

    fn get_holiday(&self, year: i32) -> Option<NaiveDate> {
        let first_of_month = NaiveDate::from_ymd_opt(year, self.month, 1)?;
        let last_of_month = NaiveDate::from_ymd_opt(year, self.month, days_of_month(year, self.month))?;

        match self.occurrence {
            WeekdayOccurrence::Last => self.last_weekday(last_of_month),
            WeekdayOccurrence::Nth(n) => self.nth_weekday(first_of_month, last_of_month, n)
        }
    }
}
