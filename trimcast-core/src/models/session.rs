use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::UserQuery;

/// One row of the session log. Column names are part of the file format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionLogEntry {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Age")]
    pub age: i64,
    #[serde(rename = "Exercise")]
    pub exercise: f64,
    #[serde(rename = "Water")]
    pub water: f64,
    #[serde(rename = "Sleep")]
    pub sleep: f64,
    #[serde(rename = "Calories")]
    pub calories: i64,
    #[serde(rename = "Prediction")]
    pub prediction: f64,
}

impl SessionLogEntry {
    pub fn new(date: NaiveDate, query: &UserQuery, prediction: f64) -> Self {
        Self {
            date,
            age: query.age,
            exercise: query.exercise_hours,
            water: query.water_litres,
            sleep: query.sleep_hours,
            calories: query.calories,
            prediction,
        }
    }
}
