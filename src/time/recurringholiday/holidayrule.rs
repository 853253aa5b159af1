use std::fmt;

use chrono::{NaiveDate, Weekday};

use crate::error::HolidayRuleError;
use crate::time::utility::{month_name, weekday_from_sunday_index, weekday_name};
use crate::utility::ordinal::to_ordinal_string;
use super::fixeddateholiday::FixedDateHoliday;
use super::recurringholiday::RecurringHoliday;
use super::relativeweekdayholiday::{
    RelativeWeekdayHoliday,
    WeekdayOccurrence
};

#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum HolidayRuleKind {
    FixedDate(FixedDateHoliday),
    RelativeWeekday(RelativeWeekdayHoliday)
}

impl HolidayRuleKind {
    fn as_recurring_holiday(&self) -> &dyn RecurringHoliday {
        match self {
            HolidayRuleKind::FixedDate(h) => h as &dyn RecurringHoliday,
            HolidayRuleKind::RelativeWeekday(h) => h
        }
    }
}

/// A named holiday definition. Carries no year; the same rule resolves to a
/// different date each year.
#[derive(PartialEq, Eq, Clone, Debug, Hash)]
pub struct HolidayRule {
    name: String,
    kind: HolidayRuleKind
}

impl HolidayRule {
    /// A holiday on the same month and day every year, e.g. July 4th.
    ///
    /// Only the field ranges are checked here. A day missing from a given
    /// month or year (February 30, February 29 outside leap years) is reported
    /// when the rule is resolved.
    pub fn fixed(name: impl Into<String>, month: u32, day: u32) -> Result<HolidayRule, HolidayRuleError> {
        if !(1..=12).contains(&month) {
            return Err(HolidayRuleError::InvalidMonth(month));
        }
        let holiday = FixedDateHoliday::new(month, day).ok_or(HolidayRuleError::InvalidDay(day))?;
        Ok(HolidayRule {
            name: name.into(),
            kind: HolidayRuleKind::FixedDate(holiday)
        })
    }

    /// A holiday on the nth (or last, with `ordinal == -1`) given weekday of
    /// a month, e.g. the 4th Thursday in November.
    pub fn relative(name: impl Into<String>, month: u32, ordinal: i32, weekday: Weekday) -> Result<HolidayRule, HolidayRuleError> {
        if !(1..=12).contains(&month) {
            return Err(HolidayRuleError::InvalidMonth(month));
        }
        let occurrence = WeekdayOccurrence::from_ordinal(ordinal).ok_or(HolidayRuleError::InvalidOrdinal(ordinal))?;
        let holiday = RelativeWeekdayHoliday::new(month, occurrence, weekday)
            .ok_or(HolidayRuleError::InvalidOrdinal(ordinal))?;
        Ok(HolidayRule {
            name: name.into(),
            kind: HolidayRuleKind::RelativeWeekday(holiday)
        })
    }

    /// Same as `relative` with the weekday given as an index where 0 is
    /// Sunday and 6 is Saturday.
    pub fn relative_from_index(name: impl Into<String>, month: u32, ordinal: i32, weekday_index: u8) -> Result<HolidayRule, HolidayRuleError> {
        let weekday = weekday_from_sunday_index(weekday_index).ok_or(HolidayRuleError::InvalidWeekday(weekday_index))?;
        HolidayRule::relative(name, month, ordinal, weekday)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &HolidayRuleKind {
        &self.kind
    }

    pub fn month(&self) -> u32 {
        self.kind.as_recurring_holiday().month()
    }

    /// The weekday of a relative rule; `None` for a fixed-date rule.
    pub fn weekday(&self) -> Option<Weekday> {
        match &self.kind {
            HolidayRuleKind::FixedDate(_) => None,
            HolidayRuleKind::RelativeWeekday(h) => Some(h.weekday())
        }
    }

    /// Raw date in `year` before weekend adjustment.
    pub fn raw_date(&self, year: i32) -> Option<NaiveDate> {
        self.kind.as_recurring_holiday().get_holiday(year)
    }

    /// When the holiday occurs, e.g. "July 4th" or "Last Monday in May".
    pub fn description(&self) -> String {
        match &self.kind {
            HolidayRuleKind::FixedDate(h) => {
                format!("{} {}", month_name(h.month()), to_ordinal_string(h.day() as i64, None))
            },
            HolidayRuleKind::RelativeWeekday(h) => {
                format!("{} {} in {}", h.occurrence(), weekday_name(h.weekday()), month_name(h.month()))
            }
        }
    }
}

impl fmt::Display for HolidayRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.description())
    }
}
