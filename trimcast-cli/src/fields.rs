//! The five prompted inputs, described as data.
//!
//! Range checks are advisory: an out-of-range value prints its warning and is
//! still used for the prediction.

use std::fmt;
use std::ops::RangeInclusive;

use trimcast_core::{TrimcastError, UserQuery};

/// A parsed entry. Integer fields stay `i64` all the way into the query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    Integer(i64),
    Decimal(f64),
}

impl FieldValue {
    pub fn as_f64(self) -> f64 {
        match self {
            FieldValue::Integer(v) => v as f64,
            FieldValue::Decimal(v) => v,
        }
    }

    fn as_i64(self) -> i64 {
        match self {
            FieldValue::Integer(v) => v,
            FieldValue::Decimal(v) => v as i64,
        }
    }
}

/// Decimals always show a fractional part: `2.0`, not `2`.
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(v) => write!(f, "{}", v),
            FieldValue::Decimal(v) => write!(f, "{:?}", v),
        }
    }
}

pub struct FieldSpec {
    pub name: &'static str,
    pub prompt: &'static str,
    /// Label and unit suffix for the input echo.
    pub label: &'static str,
    pub unit: &'static str,
    pub parse: fn(&str) -> Option<FieldValue>,
    pub valid: RangeInclusive<f64>,
    pub warning: &'static str,
}

/// Prompt order matches `UserQuery::features()`.
pub static FIELDS: [FieldSpec; 5] = [
    FieldSpec {
        name: "age",
        prompt: "Enter your age: ",
        label: "Age",
        unit: "",
        parse: parse_integer,
        valid: 1.0..=120.0,
        warning: "Age should be between 1 and 120",
    },
    FieldSpec {
        name: "exercise hours",
        prompt: "Enter your exercise hours per week: ",
        label: "Exercise Hours per Week",
        unit: "",
        parse: parse_decimal,
        valid: 0.0..=168.0,
        warning: "Exercise hours should be between 0 and 168",
    },
    FieldSpec {
        name: "water intake",
        prompt: "Enter your daily water intake in liters: ",
        label: "Daily Water Intake",
        unit: "L",
        parse: parse_decimal,
        valid: 0.0..=20.0,
        warning: "Water intake should be between 0 and 20 liters",
    },
    FieldSpec {
        name: "sleep hours",
        prompt: "Enter your average sleep hours per day: ",
        label: "Average Sleep Hours",
        unit: "",
        parse: parse_decimal,
        valid: 0.0..=24.0,
        warning: "Sleep hours should be between 0 and 24",
    },
    FieldSpec {
        name: "calorie intake",
        prompt: "Enter your daily calorie intake: ",
        label: "Daily Calorie Intake",
        unit: "",
        parse: parse_integer,
        valid: 0.0..=10000.0,
        warning: "Calorie intake seems unusual",
    },
];

fn parse_integer(raw: &str) -> Option<FieldValue> {
    raw.trim().parse::<i64>().ok().map(FieldValue::Integer)
}

fn parse_decimal(raw: &str) -> Option<FieldValue> {
    raw.trim().parse::<f64>().ok().map(FieldValue::Decimal)
}

impl FieldSpec {
    pub fn parse_value(&self, raw: &str) -> Result<FieldValue, TrimcastError> {
        (self.parse)(raw).ok_or_else(|| TrimcastError::InputParse {
            field: self.name.to_string(),
            value: raw.trim().to_string(),
        })
    }

    /// The warning text when `value` is outside the advisory range.
    pub fn check(&self, value: f64) -> Option<&'static str> {
        if self.valid.contains(&value) {
            None
        } else {
            Some(self.warning)
        }
    }
}

/// Assemble a query from values parsed in `FIELDS` order.
pub fn query_from(values: [FieldValue; 5]) -> UserQuery {
    UserQuery {
        age: values[0].as_i64(),
        exercise_hours: values[1].as_f64(),
        water_litres: values[2].as_f64(),
        sleep_hours: values[3].as_f64(),
        calories: values[4].as_i64(),
    }
}

/// The query's values in `FIELDS` order, typed the way they were entered.
pub fn values_of(query: &UserQuery) -> [FieldValue; 5] {
    [
        FieldValue::Integer(query.age),
        FieldValue::Decimal(query.exercise_hours),
        FieldValue::Decimal(query.water_litres),
        FieldValue::Decimal(query.sleep_hours),
        FieldValue::Integer(query.calories),
    ]
}
