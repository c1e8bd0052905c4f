//! Temperature unit conversion and the assembled weather report.

use serde::Serialize;

/// Offset between Celsius and Kelvin. The precise value, used everywhere.
pub const KELVIN_OFFSET: f64 = 273.15;

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 1.8 + 32.0
}

pub fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + KELVIN_OFFSET
}

/// Final payload returned to the caller.
///
/// All three temperature fields are derived together from one Celsius
/// reading; there is no way to build a report with only some of them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReport {
    pub city: String,
    #[serde(rename = "temp_C")]
    pub temp_c: f64,
    #[serde(rename = "temp_F")]
    pub temp_f: f64,
    #[serde(rename = "temp_K")]
    pub temp_k: f64,
}

impl WeatherReport {
    pub fn from_celsius(city: String, temp_c: f64) -> Self {
        WeatherReport {
            city,
            temp_c,
            temp_f: celsius_to_fahrenheit(temp_c),
            temp_k: celsius_to_kelvin(temp_c),
        }
    }
}
