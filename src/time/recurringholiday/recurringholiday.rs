use chrono::{Datelike, NaiveDate};


/// A holiday shape that recurs every year in the same month.
pub trait RecurringHoliday {

    fn month(&self) -> u32;

    /// The raw date of the holiday in `year`, before any weekend adjustment,
    /// or `None` if the shape has no date in that year.
    fn get_holiday(&self, year: i32) -> Option<NaiveDate>;

    fn is_holiday(&self, d: &NaiveDate) -> bool {
        self.get_holiday(d.year()) == Some(*d)
    }
}
