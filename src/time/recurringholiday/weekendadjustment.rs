use std::collections::HashMap;

use chrono::{
    Datelike,
    NaiveDate,
    TimeDelta,
    Weekday
};
use serde::{
    Serialize,
    Deserialize
};

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu,
    Weekday::Fri, Weekday::Sat, Weekday::Sun
];

#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub enum WeekendAdjustment {
    Unadjusted = 0,
    NextWeekday = 1,
    PreviousWeekday = -1
}

/// Weekend adjustment table indexed by weekday (0 = Monday, 6 = Sunday).
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct WeekendAdjustmentRule {
    // None means the weekday is left as is
    rule: [Option<TimeDelta>; 7]
}

impl WeekendAdjustmentRule {
    /// Builds the table from a weekday map.
    ///
    /// Every weekday mapped to a shift counts as a weekend day, so a shift
    /// keeps moving in its direction until it lands on a day that is not
    /// shifted. With Friday and Saturday both moving forward, Friday shifts
    /// two days. `Unadjusted` entries are ordinary weekdays.
    ///
    /// Returns `None` when all seven weekdays are shifted, since no shift
    /// could then leave the weekend.
    pub fn new(adjustment_map: &HashMap<Weekday, WeekendAdjustment>) -> Option<WeekendAdjustmentRule> {
        let is_shifted = |weekday: &Weekday| {
            adjustment_map.get(weekday).is_some_and(|&adj| adj != WeekendAdjustment::Unadjusted)
        };
        if WEEKDAYS.iter().all(is_shifted) {
            return None;
        }

        let mut rule: [Option<TimeDelta>; 7] = [None; 7];

        for (&weekday, &adj) in adjustment_map {
            if adj == WeekendAdjustment::Unadjusted {
                continue;
            }

            let mut to_weekday = weekday;
            let next_weekday = if adj == WeekendAdjustment::NextWeekday {
                Weekday::succ
            } else {
                Weekday::pred
            };

            let mut shift_days = 0;
            let one_day = adj as i64;

            while is_shifted(&to_weekday) {
                to_weekday = next_weekday(&to_weekday);
                shift_days += one_day;
            }

            let idx = weekday.num_days_from_monday() as usize;
            rule[idx] = Some(TimeDelta::days(shift_days));
        }

        Some(WeekendAdjustmentRule { rule })
    }

    /// Saturday moves back to Friday and Sunday moves forward to Monday.
    pub fn saturday_back_sunday_forward() -> WeekendAdjustmentRule {
        let mut rule: [Option<TimeDelta>; 7] = [None; 7];
        rule[Weekday::Sat.num_days_from_monday() as usize] = Some(TimeDelta::days(-1));
        rule[Weekday::Sun.num_days_from_monday() as usize] = Some(TimeDelta::days(1));
        WeekendAdjustmentRule { rule }
    }

    /// Leaves every date unchanged.
    pub fn unadjusted() -> WeekendAdjustmentRule {
        WeekendAdjustmentRule { rule: [None; 7] }
    }

    /// Reconstructs the adjustment map from the internal table.
    pub fn adjustment_map(&self) -> HashMap<Weekday, WeekendAdjustment> {
        let mut result: HashMap<Weekday, WeekendAdjustment> = HashMap::new();

        for (day_offset, shift) in self.rule.iter().enumerate() {
            let (Some(shift), Ok(weekday)) = (shift, Weekday::try_from(day_offset as u8)) else {
                continue;
            };

            let adjustment = match shift.num_days() {
                n if n > 0 => WeekendAdjustment::NextWeekday,
                n if n < 0 => WeekendAdjustment::PreviousWeekday,
                _ => WeekendAdjustment::Unadjusted,
            };

            result.insert(weekday, adjustment);
        }

        result
    }

    /// Shifts `d` off the weekend. A shift that would leave chrono's
    /// supported range leaves `d` unchanged; no year accepted by the schedule
    /// generator comes near that range.
    #[inline]
    pub fn adjust(&self, d: NaiveDate) -> NaiveDate {
        let idx = d.weekday().num_days_from_monday() as usize;

        match self.rule[idx] {
            Some(shift) => d.checked_add_signed(shift).unwrap_or(d),
            None => d,
        }
    }
}

impl Default for WeekendAdjustmentRule {
    fn default() -> Self {
        WeekendAdjustmentRule::saturday_back_sunday_forward()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn default_rule_moves_weekends_to_nearest_weekday() {
        let rule = WeekendAdjustmentRule::default();
        // 2021-12-25 Saturday, 2022-12-25 Sunday, 2023-12-25 Monday
        assert_eq!(rule.adjust(ymd(2021, 12, 25)), ymd(2021, 12, 24));
        assert_eq!(rule.adjust(ymd(2022, 12, 25)), ymd(2022, 12, 26));
        assert_eq!(rule.adjust(ymd(2023, 12, 25)), ymd(2023, 12, 25));
    }

    #[test]
    fn consecutive_weekend_days_shift_past_each_other() {
        let adjustment_map = HashMap::from([
            (Weekday::Fri, WeekendAdjustment::NextWeekday),
            (Weekday::Sat, WeekendAdjustment::NextWeekday)
        ]);
        let rule = WeekendAdjustmentRule::new(&adjustment_map).unwrap();
        // 2024-03-01 is a Friday
        assert_eq!(rule.adjust(ymd(2024, 3, 1)), ymd(2024, 3, 3));
        assert_eq!(rule.adjust(ymd(2024, 3, 2)), ymd(2024, 3, 3));
    }

    #[test]
    fn adjustment_map_round_trips() {
        let rule = WeekendAdjustmentRule::default();
        let map = rule.adjustment_map();
        assert_eq!(map.len(), 2);
        assert_eq!(map[&Weekday::Sat], WeekendAdjustment::PreviousWeekday);
        assert_eq!(map[&Weekday::Sun], WeekendAdjustment::NextWeekday);
        assert_eq!(WeekendAdjustmentRule::new(&map), Some(rule));
    }

    #[test]
    fn unadjusted_rule_is_identity() {
        let rule = WeekendAdjustmentRule::unadjusted();
        assert_eq!(rule.adjust(ymd(2021, 12, 25)), ymd(2021, 12, 25));
        assert!(rule.adjustment_map().is_empty());
    }

    #[test]
    fn unadjusted_entries_are_not_weekend_days() {
        let adjustment_map = HashMap::from([
            (Weekday::Fri, WeekendAdjustment::Unadjusted),
            (Weekday::Sat, WeekendAdjustment::PreviousWeekday)
        ]);
        let rule = WeekendAdjustmentRule::new(&adjustment_map).unwrap();
        // 2021-12-25 is a Saturday, 2021-12-24 a Friday
        assert_eq!(rule.adjust(ymd(2021, 12, 25)), ymd(2021, 12, 24));
        assert_eq!(rule.adjust(ymd(2021, 12, 24)), ymd(2021, 12, 24));
    }

    #[test]
    fn shifting_every_weekday_is_rejected() {
        let all_shifted: HashMap<Weekday, WeekendAdjustment> = WEEKDAYS
            .iter()
            .map(|&w| (w, WeekendAdjustment::NextWeekday))
            .collect();
        assert_eq!(WeekendAdjustmentRule::new(&all_shifted), None);

        let mut one_unadjusted = all_shifted.clone();
        one_unadjusted.insert(Weekday::Wed, WeekendAdjustment::Unadjusted);
        let rule = WeekendAdjustmentRule::new(&one_unadjusted).unwrap();
        // 2024-03-04 is a Monday, two days before Wednesday
        assert_eq!(rule.adjust(ymd(2024, 3, 4)), ymd(2024, 3, 6));
    }

    #[test]
    fn shift_past_supported_range_leaves_date_unchanged() {
        let last = NaiveDate::MAX;
        let adjustment_map = HashMap::from([(last.weekday(), WeekendAdjustment::NextWeekday)]);
        let rule = WeekendAdjustmentRule::new(&adjustment_map).unwrap();
        assert_eq!(rule.adjust(last), last);
    }
}
