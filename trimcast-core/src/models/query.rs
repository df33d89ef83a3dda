/// Dataset columns used as regression features, in coefficient order.
pub const FEATURE_COLUMNS: [&str; 5] = [
    "Age",
    "Exercise_Hours_per_Week",
    "Daily_Water_Intake_L",
    "Average_Sleep_Hours",
    "Daily_Calories_Intake",
];

/// Dataset column holding the regression target.
pub const TARGET_COLUMN: &str = "Weight_Loss_1_Month_kg";

/// The five lifestyle inputs collected once per session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UserQuery {
    pub age: i64,
    pub exercise_hours: f64,
    pub water_litres: f64,
    pub sleep_hours: f64,
    pub calories: i64,
}

impl UserQuery {
    /// Feature vector in `FEATURE_COLUMNS` order.
    pub fn features(&self) -> [f64; 5] {
        [
            self.age as f64,
            self.exercise_hours,
            self.water_litres,
            self.sleep_hours,
            self.calories as f64,
        ]
    }
}
