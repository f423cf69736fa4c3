use serde::{Deserialize, Serialize};

use crate::error::{DoughError, Result};

pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }

    /// Absolute reading in this unit -> °C.
    pub fn to_celsius(self, v: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => v,
            TemperatureUnit::Fahrenheit => fahrenheit_to_celsius(v),
        }
    }

    /// Absolute reading in °C -> this unit.
    pub fn from_celsius(self, c: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => c,
            TemperatureUnit::Fahrenheit => celsius_to_fahrenheit(c),
        }
    }

    /// Temperature difference (no offset) in this unit -> °C.
    pub fn delta_to_celsius(self, d: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => d,
            TemperatureUnit::Fahrenheit => d * 5.0 / 9.0,
        }
    }

    /// Temperature difference in °C -> this unit.
    pub fn delta_from_celsius(self, d: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => d,
            TemperatureUnit::Fahrenheit => d * 9.0 / 5.0,
        }
    }
}

/// All temperatures in °C.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WaterTempRequest {
    pub target_dough_temp_c: f64,
    pub room_temp_c: f64,
    pub flour_temp_c: f64,
    pub friction_factor_c: f64,
}

impl WaterTempRequest {
    /// Builds a °C request from readings taken in `unit`.
    ///
    /// The friction factor is a temperature rise, so only its scale is converted.
    pub fn from_unit(unit: TemperatureUnit, target: f64, room: f64, flour: f64, friction: f64) -> Self {
        Self {
            target_dough_temp_c: unit.to_celsius(target),
            room_temp_c: unit.to_celsius(room),
            flour_temp_c: unit.to_celsius(flour),
            friction_factor_c: unit.delta_to_celsius(friction),
        }
    }

    fn validate(&self) -> Result<()> {
        let fields = [
            ("target_dough_temp_c", self.target_dough_temp_c),
            ("room_temp_c", self.room_temp_c),
            ("flour_temp_c", self.flour_temp_c),
            ("friction_factor_c", self.friction_factor_c),
        ];
        for (field, v) in fields {
            if !v.is_finite() {
                return Err(DoughError::invalid(field, "must be a finite number"));
            }
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WaterTempResult {
    pub recommended_water_temp_c: f64,
}

impl WaterTempResult {
    pub fn in_unit(&self, unit: TemperatureUnit) -> f64 {
        unit.from_celsius(self.recommended_water_temp_c)
    }
}

/// `target * 3 - (room + flour + friction)`, unclamped.
pub fn compute_water_temp(req: &WaterTempRequest) -> Result<WaterTempResult> {
    req.validate()?;
    let water = req.target_dough_temp_c * 3.0
        - (req.room_temp_c + req.flour_temp_c + req.friction_factor_c);
    tracing::debug!(?req, water, "solved kneading water temperature");
    Ok(WaterTempResult {
        recommended_water_temp_c: water,
    })
}
