use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use chrono::Weekday;
use serde::Deserialize;

use crate::manager::managererror::ManagerError;
use crate::manager::manager::{
    IManager,
    Manager
};
use crate::time::recurringholiday::holidayrule::HolidayRule;
use crate::time::recurringholiday::holidaysetmanager::HolidaySetManager;
use crate::time::recurringholiday::weekendadjustment::{
    WeekendAdjustment,
    WeekendAdjustmentRule
};
use crate::time::schedule::holidayschedulegenerator::HolidayScheduleGenerator;


#[derive(Deserialize)]
struct ConfigurationJsonProp {
    holiday_sets: Vec<serde_json::Value>,
    #[serde(default)]
    weekend_adjustment: Option<HashMap<Weekday, WeekendAdjustment>>
}

/// Named holiday sets and the weekend adjustment applied when generating
/// them, read from JSON.
pub struct Configuration {
    holiday_set_manager: Manager<Arc<[HolidayRule]>>,
    weekend_adjustment: WeekendAdjustmentRule
}


impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            holiday_set_manager: HolidaySetManager::new(),
            weekend_adjustment: WeekendAdjustmentRule::default()
        }
    }

    pub fn holiday_set_manager(&self) -> &Manager<Arc<[HolidayRule]>> {
        &self.holiday_set_manager
    }

    pub fn holiday_set(&self, name: &str) -> Result<Arc<[HolidayRule]>, ManagerError> {
        self.holiday_set_manager.get(name)
    }

    pub fn weekend_adjustment(&self) -> &WeekendAdjustmentRule {
        &self.weekend_adjustment
    }

    pub fn schedule_generator(&self) -> HolidayScheduleGenerator {
        HolidayScheduleGenerator::with_weekend_adjustment(self.weekend_adjustment.clone())
    }

    pub fn from_reader(file_path: impl AsRef<Path>) -> Result<Configuration, ManagerError> {
        let file = File::open(file_path.as_ref())?;
        log::debug!("reading configuration from {}", file_path.as_ref().display());
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        Configuration::from_json_prop(json_prop)
    }

    pub fn from_json_str(json: &str) -> Result<Configuration, ManagerError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_str(json)?;
        Configuration::from_json_prop(json_prop)
    }

    fn from_json_prop(json_prop: ConfigurationJsonProp) -> Result<Configuration, ManagerError> {
        let mut config = Configuration::new();
        config.holiday_set_manager.insert_obj_from_json_vec(&json_prop.holiday_sets)?;
        if let Some(adjustment_map) = json_prop.weekend_adjustment {
            config.weekend_adjustment = WeekendAdjustmentRule::new(&adjustment_map)
                .ok_or(ManagerError::InvalidWeekendAdjustmentError)?;
        }
        Ok(config)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}
