use std::sync::Arc;

use chrono::Weekday;
use serde::Deserialize;

use crate::error::HolidayRuleError;
use crate::manager::manager::Manager;
use crate::manager::managererror::ManagerError;
use super::holidayrule::HolidayRule;

/// A weekday written either by name (`"Mon"`, `"Monday"`) or as an index
/// where 0 is Sunday.
#[derive(Deserialize)]
#[serde(untagged)]
enum WeekdayJsonProp {
    Name(Weekday),
    Index(u8)
}

#[derive(Deserialize)]
struct FixedDateHolidayJsonProp {
    name: String,
    month: u32,
    day: u32
}

fn fixed_date_holiday_from_json(json: serde_json::Value) -> Result<HolidayRule, ManagerError> {
    let json_prop: FixedDateHolidayJsonProp = ManagerError::from_json_or_json_parse_error(json)?;
    HolidayRule::fixed(json_prop.name.clone(), json_prop.month, json_prop.day)
        .map_err(|source| ManagerError::InvalidRuleError { name: json_prop.name, source })
}

#[derive(Deserialize)]
struct RelativeWeekdayHolidayJsonProp {
    name: String,
    month: u32,
    ordinal: i32,
    weekday: WeekdayJsonProp
}

fn relative_weekday_holiday_from_json(json: serde_json::Value) -> Result<HolidayRule, ManagerError> {
    let json_prop: RelativeWeekdayHolidayJsonProp = ManagerError::from_json_or_json_parse_error(json)?;
    let rule: Result<HolidayRule, HolidayRuleError> = match json_prop.weekday {
        WeekdayJsonProp::Name(weekday) => HolidayRule::relative(json_prop.name.clone(), json_prop.month, json_prop.ordinal, weekday),
        WeekdayJsonProp::Index(index) => HolidayRule::relative_from_index(json_prop.name.clone(), json_prop.month, json_prop.ordinal, index)
    };
    rule.map_err(|source| ManagerError::InvalidRuleError { name: json_prop.name, source })
}

#[derive(Deserialize)]
enum HolidayType {
    FixedDate,
    RelativeWeekday
}

#[derive(Deserialize)]
struct HolidayTypedObject {
    holiday_type: HolidayType
}

pub fn holiday_rule_from_json(json: serde_json::Value) -> Result<HolidayRule, ManagerError> {
    let holiday_type_obj: HolidayTypedObject = ManagerError::from_json_or_json_parse_error(json.clone())?;
    match holiday_type_obj.holiday_type {
        HolidayType::FixedDate       => fixed_date_holiday_from_json(json),
        HolidayType::RelativeWeekday => relative_weekday_holiday_from_json(json)
    }
}

#[derive(Deserialize)]
struct HolidaySetJsonProp {
    name: String,
    holidays: Vec<serde_json::Value>
}

fn get_holiday_set_from_json(json_value: serde_json::Value) -> Result<Arc<[HolidayRule]>, ManagerError> {
    let json_prop: HolidaySetJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
    let rules = json_prop.holidays
        .into_iter()
        .map(holiday_rule_from_json)
        .collect::<Result<Vec<HolidayRule>, ManagerError>>()?;
    log::debug!("loaded holiday set '{}' with {} rules", json_prop.name, rules.len());
    Ok(rules.into())
}


pub struct HolidaySetManager;


impl HolidaySetManager {
    pub fn new() -> Manager<Arc<[HolidayRule]>> {
        Manager::new(get_holiday_set_from_json)
    }
}
