use std::fmt;

use chrono::NaiveDate;

use crate::time::recurringholiday::holidayrule::HolidayRule;

/// A holiday date paired with the rule it came from.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct ResolvedHoliday<'a> {
    date: NaiveDate,
    rule: &'a HolidayRule
}

impl<'a> ResolvedHoliday<'a> {
    pub fn new(date: NaiveDate, rule: &'a HolidayRule) -> ResolvedHoliday<'a> {
        ResolvedHoliday { date, rule }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn rule(&self) -> &'a HolidayRule {
        self.rule
    }

    pub fn name(&self) -> &'a str {
        self.rule.name()
    }
}

impl fmt::Display for ResolvedHoliday<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.rule.name(), self.date)
    }
}
