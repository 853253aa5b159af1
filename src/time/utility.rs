use chrono::{Month, Weekday};

#[inline]
pub const fn is_leap (year: i32) -> bool {
    ((year % 4 == 0) && (year % 100!= 0)) || (year % 400 == 0)
}

/// Number of days in `month` (1-12) of `year`. Returns 0 for a month outside
/// 1-12.
pub const fn days_of_month (year: i32, month: u32) -> u32 {
    const NO_LEAP_EOM: [u32; 13] = [
        0, 31, 28, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    const LEAP_EOM: [u32; 13] = [
        0, 31, 29, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    if month > 12 {
        return 0;
    }

    if is_leap(year) {
        LEAP_EOM[month as usize]
    } else {
        NO_LEAP_EOM[month as usize]
    }
}

pub fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map_or("Unknown", |m| m.name())
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday"
    }
}

/// Maps a Sunday-based index (0 = Sunday, 6 = Saturday) to a weekday.
pub fn weekday_from_sunday_index(index: u8) -> Option<Weekday> {
    if index > 6 {
        return None;
    }
    // chrono numbers from Monday
    Weekday::try_from((index + 6) % 7).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn february_follows_leap_rules() {
        assert_eq!(days_of_month(2024, 2), 29);
        assert_eq!(days_of_month(2023, 2), 28);
        assert_eq!(days_of_month(1900, 2), 28);
        assert_eq!(days_of_month(2000, 2), 29);
        assert_eq!(days_of_month(2023, 13), 0);
    }

    #[test]
    fn sunday_index_round_trips() {
        assert_eq!(weekday_from_sunday_index(0), Some(Weekday::Sun));
        assert_eq!(weekday_from_sunday_index(1), Some(Weekday::Mon));
        assert_eq!(weekday_from_sunday_index(6), Some(Weekday::Sat));
        assert_eq!(weekday_from_sunday_index(7), None);
        for i in 0..7u8 {
            let w = weekday_from_sunday_index(i).unwrap();
            assert_eq!(w.num_days_from_sunday() as u8, i);
        }
    }

    #[test]
    fn names() {
        assert_eq!(month_name(11), "November");
        assert_eq!(month_name(0), "Unknown");
        assert_eq!(weekday_name(Weekday::Thu), "Thursday");
    }
}
