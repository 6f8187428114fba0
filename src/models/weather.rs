use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherReport {
    pub description: String,
    pub temperature_celsius: f64,
    pub humidity_percent: f64,
}
