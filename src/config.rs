//! Device profile configuration.
//!
//! A profile describes one physical device: which DP ids carry which climate
//! properties, the valid setpoint range, and how the host reaches the
//! device. Field defaults are the Eurom Sani Wall 2000 wall heater, so an
//! empty TOML file yields a working profile for that device.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::climate::TemperatureUnit;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid device profile: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub device: DeviceConfig,
    #[serde(default)]
    pub climate: ClimateConfig,
    #[serde(default)]
    pub transport: TransportConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            device: DeviceConfig::default(),
            climate: ClimateConfig::default(),
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.climate.validate()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeviceConfig {
    #[serde(default = "default_device_name")]
    pub name: String,
    #[serde(default)]
    pub unit: TemperatureUnit,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            name: default_device_name(),
            unit: TemperatureUnit::default(),
        }
    }
}

/// DP assignments and setpoint range for the climate entity.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClimateConfig {
    #[serde(default = "default_power_dp")]
    pub power_dp: String,
    #[serde(default = "default_target_temperature_dp")]
    pub target_temperature_dp: String,
    #[serde(default = "default_current_temperature_dp")]
    pub current_temperature_dp: String,
    #[serde(default = "default_preset_dp")]
    pub preset_dp: String,
    #[serde(default = "default_swing_dp")]
    pub swing_dp: String,
    #[serde(default = "default_min_temp")]
    pub min_temp: i64,
    #[serde(default = "default_max_temp")]
    pub max_temp: i64,
    #[serde(default = "default_step")]
    pub step: i64,
}

impl Default for ClimateConfig {
    fn default() -> Self {
        Self {
            power_dp: default_power_dp(),
            target_temperature_dp: default_target_temperature_dp(),
            current_temperature_dp: default_current_temperature_dp(),
            preset_dp: default_preset_dp(),
            swing_dp: default_swing_dp(),
            min_temp: default_min_temp(),
            max_temp: default_max_temp(),
            step: default_step(),
        }
    }
}

impl ClimateConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_temp >= self.max_temp {
            return Err(ConfigError::Invalid(format!(
                "temperature range [{}, {}] is empty",
                self.min_temp, self.max_temp
            )));
        }
        if self.step <= 0 {
            return Err(ConfigError::Invalid(format!(
                "temperature step must be positive, got {}",
                self.step
            )));
        }
        for (field, dp) in [
            ("power_dp", &self.power_dp),
            ("target_temperature_dp", &self.target_temperature_dp),
            ("current_temperature_dp", &self.current_temperature_dp),
            ("preset_dp", &self.preset_dp),
            ("swing_dp", &self.swing_dp),
        ] {
            if dp.is_empty() {
                return Err(ConfigError::Invalid(format!("{} must not be empty", field)));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    Simulated,
    Tuya,
}

/// How the host reaches the device. The `tuya` fields are carried for a real
/// wire transport and are not interpreted by this crate.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TransportConfig {
    #[serde(default = "default_transport_kind")]
    pub kind: TransportKind,
    #[serde(default)]
    pub device_id: Option<String>,
    #[serde(default)]
    pub local_key: Option<String>,
    #[serde(default)]
    pub host: Option<String>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            kind: default_transport_kind(),
            device_id: None,
            local_key: None,
            host: None,
        }
    }
}

fn default_device_name() -> String {
    "Eurom Sani Wall 2000".to_string()
}
fn default_power_dp() -> String {
    "1".to_string()
}
fn default_target_temperature_dp() -> String {
    "2".to_string()
}
fn default_current_temperature_dp() -> String {
    "3".to_string()
}
fn default_preset_dp() -> String {
    "4".to_string()
}
fn default_swing_dp() -> String {
    "7".to_string()
}
fn default_min_temp() -> i64 {
    10
}
fn default_max_temp() -> i64 {
    35
}
fn default_step() -> i64 {
    1
}
fn default_transport_kind() -> TransportKind {
    TransportKind::Simulated
}

pub fn load_config(path: &str) -> Result<Config, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<Config>(&contents) {
            Ok(config) => {
                config.validate()?;
                Ok(config)
            }
            Err(e) => {
                tracing::error!("Failed to parse profile TOML: {}", e);
                Err(ConfigError::Toml(e))
            }
        },
        Err(e) => {
            tracing::error!("Failed to read profile '{}': {}", path, e);
            Err(ConfigError::Io(e))
        }
    }
}
