use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::{ScheduleError, YearBound};
use crate::time::recurringholiday::holidayrule::{HolidayRule, HolidayRuleKind};
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;
use crate::time::recurringholiday::weekendadjustment::WeekendAdjustmentRule;
use super::resolvedholiday::ResolvedHoliday;

pub const MIN_YEAR: i32 = 1800;
pub const MAX_YEAR: i32 = 9999;

/// Resolves holiday rules to concrete dates for a year.
///
/// Fixed-date holidays falling on a weekend are moved by the weekend
/// adjustment rule (Saturday back to Friday, Sunday forward to Monday by
/// default). Relative-weekday holidays are never adjusted.
///
/// The generator keeps no state between calls.
#[derive(Clone, Debug, Default)]
pub struct HolidayScheduleGenerator {
    weekend_adjustment: WeekendAdjustmentRule
}

impl HolidayScheduleGenerator {
    pub fn new() -> HolidayScheduleGenerator {
        HolidayScheduleGenerator::default()
    }

    pub fn with_weekend_adjustment(weekend_adjustment: WeekendAdjustmentRule) -> HolidayScheduleGenerator {
        HolidayScheduleGenerator { weekend_adjustment }
    }

    pub fn weekend_adjustment(&self) -> &WeekendAdjustmentRule {
        &self.weekend_adjustment
    }

    /// Generates the holidays of `year`, ordered by date.
    ///
    /// `rules` is `None` when the caller has no rule collection at all, which
    /// is an error; an empty collection yields an empty schedule. When several
    /// rules land on the same date only the first one listed is kept. The
    /// first rule that cannot be resolved aborts the call.
    pub fn generate<'a>(&self,
                        year: i32,
                        rules: Option<&'a [HolidayRule]>) -> Result<Vec<ResolvedHoliday<'a>>, ScheduleError> {
        let rules = validate_inputs(year, rules)?;

        let mut generated: BTreeMap<NaiveDate, &'a HolidayRule> = BTreeMap::new();
        for rule in rules {
            let date = self.generate_holiday_date(year, rule)?;
            generated.entry(date).or_insert(rule);
        }

        Ok(generated
            .into_iter()
            .map(|(date, rule)| ResolvedHoliday::new(date, rule))
            .collect())
    }

    pub fn generate_for_year<'a>(&self,
                                 year: i32,
                                 rules: &'a [HolidayRule]) -> Result<Vec<ResolvedHoliday<'a>>, ScheduleError> {
        self.generate(year, Some(rules))
    }

    fn generate_holiday_date(&self, year: i32, rule: &HolidayRule) -> Result<NaiveDate, ScheduleError> {
        match rule.kind() {
            HolidayRuleKind::FixedDate(holiday) => {
                let date = holiday.get_holiday(year).ok_or_else(|| ScheduleError::InvalidDate {
                    name: rule.name().to_owned(),
                    year,
                    month: holiday.month(),
                    day: holiday.day()
                })?;
                Ok(self.weekend_adjustment.adjust(date))
            },
            HolidayRuleKind::RelativeWeekday(holiday) => {
                holiday.get_holiday(year).ok_or_else(|| ScheduleError::UnresolvableRule {
                    name: rule.name().to_owned(),
                    ordinal: holiday.occurrence().ordinal(),
                    weekday: holiday.weekday(),
                    month: holiday.month(),
                    year
                })
            }
        }
    }
}

fn validate_inputs(year: i32, rules: Option<&[HolidayRule]>) -> Result<&[HolidayRule], ScheduleError> {
    if year < MIN_YEAR {
        return Err(ScheduleError::YearOutOfRange { year, bound: YearBound::Minimum(MIN_YEAR) });
    }
    if year > MAX_YEAR {
        return Err(ScheduleError::YearOutOfRange { year, bound: YearBound::Maximum(MAX_YEAR) });
    }
    rules.ok_or(ScheduleError::NullInput { argument: "holiday rules" })
}
