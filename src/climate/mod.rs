// src/climate/mod.rs - Standardized climate-control abstraction
//
// Mirrors the host platform's climate entity model: a device integration
// translates raw DP values into these types and back.
pub mod heater;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::device::TransportError;

/// Entity supports setting a target temperature.
pub const SUPPORT_TARGET_TEMPERATURE: u32 = 1;
/// Entity supports preset modes.
pub const SUPPORT_PRESET_MODE: u32 = 16;
/// Entity supports swing modes.
pub const SUPPORT_SWING_MODE: u32 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HvacMode {
    Off,
    Heat,
    FanOnly,
}

impl HvacMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            HvacMode::Off => "off",
            HvacMode::Heat => "heat",
            HvacMode::FanOnly => "fan_only",
        }
    }
}

impl fmt::Display for HvacMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetMode {
    Comfort,
    Eco,
    Boost,
    Fan,
}

impl PresetMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PresetMode::Comfort => "comfort",
            PresetMode::Eco => "eco",
            PresetMode::Boost => "boost",
            PresetMode::Fan => "fan",
        }
    }
}

impl fmt::Display for PresetMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwingMode {
    Off,
    Vertical,
}

impl SwingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwingMode::Off => "off",
            SwingMode::Vertical => "vertical",
        }
    }
}

impl fmt::Display for SwingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

impl Default for TemperatureUnit {
    fn default() -> Self {
        TemperatureUnit::Celsius
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        })
    }
}

/// Arguments of the platform's combined set-temperature service call.
///
/// The call is loosely typed on the platform side; fields this device does
/// not support are simply absent here. An empty request is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct SetTemperatureArgs {
    pub temperature: Option<f64>,
}

impl SetTemperatureArgs {
    pub fn temperature(value: f64) -> Self {
        Self {
            temperature: Some(value),
        }
    }
}

#[derive(Debug, Error)]
pub enum ClimateError {
    #[error("temperature ({value}) must be between {min} and {max}")]
    TemperatureOutOfRange { value: i64, min: i64, max: i64 },

    #[error(transparent)]
    Transport(#[from] TransportError),
}
