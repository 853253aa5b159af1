
use chrono::NaiveDate;

use super::recurringholiday::RecurringHoliday;

#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub struct FixedDateHoliday {
    month: u32,
    day: u32
}

impl FixedDateHoliday {
    /// Builds the shape without checking that `day` exists in `month`; that
    /// depends on the year and is only known at resolution.
    pub fn new(month: u32, day: u32) -> Option<FixedDateHoliday> {
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            None
        } else {
            Some(FixedDateHoliday { month, day })
        }
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn month(&self) -> u32 {
        self.month
    }

    fn get_holiday(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_fields() {
        assert!(FixedDateHoliday::new(0, 1).is_none());
        assert!(FixedDateHoliday::new(13, 1).is_none());
        assert!(FixedDateHoliday::new(1, 0).is_none());
        assert!(FixedDateHoliday::new(1, 32).is_none());
    }

    #[test]
    fn missing_day_has_no_holiday() {
        let leap_day = FixedDateHoliday::new(2, 29).unwrap();
        assert_eq!(leap_day.get_holiday(2023), None);
        assert_eq!(leap_day.get_holiday(2024), NaiveDate::from_ymd_opt(2024, 2, 29));

        let april_31 = FixedDateHoliday::new(4, 31).unwrap();
        assert_eq!(april_31.get_holiday(2024), None);
    }

    #[test]
    fn is_holiday_matches_raw_date() {
        let july_4 = FixedDateHoliday::new(7, 4).unwrap();
        assert!(july_4.is_holiday(&NaiveDate::from_ymd_opt(2021, 7, 4).unwrap()));
        assert!(!july_4.is_holiday(&NaiveDate::from_ymd_opt(2021, 7, 5).unwrap()));
    }
}
