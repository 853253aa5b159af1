use chrono::Weekday;

use crate::error::HolidayRuleError;
use super::holidayrule::HolidayRule;

/// United States federal holidays.
pub fn us_federal_holidays() -> Result<Vec<HolidayRule>, HolidayRuleError> {
    Ok(vec![
        HolidayRule::fixed("New Year's Day", 1, 1)?,
        HolidayRule::relative("Martin Luther King Jr. Day", 1, 3, Weekday::Mon)?,
        HolidayRule::relative("Memorial Day", 5, -1, Weekday::Mon)?,
        HolidayRule::fixed("Juneteenth", 6, 19)?,
        HolidayRule::fixed("Independence Day", 7, 4)?,
        HolidayRule::relative("Labor Day", 9, 1, Weekday::Mon)?,
        HolidayRule::fixed("Veteran's Day", 11, 11)?,
        HolidayRule::relative("Thanksgiving", 11, 4, Weekday::Thu)?,
        HolidayRule::fixed("Christmas", 12, 25)?
    ])
}
