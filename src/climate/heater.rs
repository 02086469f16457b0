// src/climate/heater.rs - Climate entity for the Eurom Sani Wall 2000
//
// The heater exposes five DPs: power (bool), target temperature (integer),
// measured temperature (integer), heat level (enum: off / 50_perc /
// 100_perc / auto) and louvre swing (bool). Everything below is a
// translation between those and the platform's climate model. The heat
// level doubles as the fan-only switch: power on with level "off" runs the
// fan without the element.
use std::sync::Arc;

use super::{
    ClimateError, HvacMode, PresetMode, SUPPORT_PRESET_MODE, SUPPORT_SWING_MODE,
    SUPPORT_TARGET_TEMPERATURE, SetTemperatureArgs, SwingMode, TemperatureUnit,
};
use crate::config::ClimateConfig;
use crate::device::Device;
use crate::dps::{DpMap, DpValue};

const HVAC_MODES: [HvacMode; 3] = [HvacMode::Off, HvacMode::Heat, HvacMode::FanOnly];
const PRESET_MODES: [PresetMode; 4] = [
    PresetMode::Comfort,
    PresetMode::Eco,
    PresetMode::Boost,
    PresetMode::Fan,
];
const SWING_MODES: [SwingMode; 2] = [SwingMode::Off, SwingMode::Vertical];

fn preset_from_dp(value: &str) -> Option<PresetMode> {
    match value {
        "auto" => Some(PresetMode::Comfort),
        "50_perc" => Some(PresetMode::Eco),
        "100_perc" => Some(PresetMode::Boost),
        "off" => Some(PresetMode::Fan),
        _ => None,
    }
}

fn preset_to_dp(preset: PresetMode) -> &'static str {
    match preset {
        PresetMode::Comfort => "auto",
        PresetMode::Eco => "50_perc",
        PresetMode::Boost => "100_perc",
        PresetMode::Fan => "off",
    }
}

pub struct PanelHeater {
    device: Arc<Device>,
    config: ClimateConfig,
}

impl PanelHeater {
    pub fn new(device: Arc<Device>, config: ClimateConfig) -> Self {
        Self { device, config }
    }

    pub fn supported_features(&self) -> u32 {
        SUPPORT_TARGET_TEMPERATURE | SUPPORT_PRESET_MODE | SUPPORT_SWING_MODE
    }

    pub async fn icon(&self) -> &'static str {
        match self.power().await {
            Some(true) => {
                if self.preset_mode().await == Some(PresetMode::Fan) {
                    "mdi:fan"
                } else {
                    "mdi:radiator"
                }
            }
            _ => "mdi:radiator-disabled",
        }
    }

    pub fn temperature_unit(&self) -> TemperatureUnit {
        self.device.temperature_unit()
    }

    pub async fn target_temperature(&self) -> Option<i64> {
        self.device
            .get_property(&self.config.target_temperature_dp)
            .await?
            .as_int()
    }

    pub fn target_temperature_step(&self) -> i64 {
        self.config.step
    }

    pub fn min_temp(&self) -> i64 {
        self.config.min_temp
    }

    pub fn max_temp(&self) -> i64 {
        self.config.max_temp
    }

    pub async fn current_temperature(&self) -> Option<i64> {
        self.device
            .get_property(&self.config.current_temperature_dp)
            .await?
            .as_int()
    }

    async fn power(&self) -> Option<bool> {
        self.device
            .get_property(&self.config.power_dp)
            .await?
            .as_bool()
    }

    /// `None` means the device has not reported its power DP yet and the
    /// entity is unavailable.
    pub async fn hvac_mode(&self) -> Option<HvacMode> {
        match self.power().await? {
            false => Some(HvacMode::Off),
            true => {
                if self.preset_mode().await == Some(PresetMode::Fan) {
                    Some(HvacMode::FanOnly)
                } else {
                    Some(HvacMode::Heat)
                }
            }
        }
    }

    pub fn hvac_modes(&self) -> &'static [HvacMode] {
        &HVAC_MODES
    }

    pub async fn preset_mode(&self) -> Option<PresetMode> {
        let value = self.device.get_property(&self.config.preset_dp).await?;
        preset_from_dp(value.as_enum()?)
    }

    pub fn preset_modes(&self) -> &'static [PresetMode] {
        &PRESET_MODES
    }

    pub async fn swing_mode(&self) -> Option<SwingMode> {
        match self
            .device
            .get_property(&self.config.swing_dp)
            .await?
            .as_bool()?
        {
            true => Some(SwingMode::Vertical),
            false => Some(SwingMode::Off),
        }
    }

    pub fn swing_modes(&self) -> &'static [SwingMode] {
        &SWING_MODES
    }

    pub fn extra_state_attributes(&self) -> serde_json::Map<String, serde_json::Value> {
        serde_json::Map::new()
    }

    /// Round the setpoint to the device's integer resolution, validate it
    /// against the profile range and write it.
    pub async fn set_target_temperature(&self, temperature: f64) -> Result<(), ClimateError> {
        let rounded = temperature.round() as i64;
        if rounded < self.config.min_temp || rounded > self.config.max_temp {
            return Err(ClimateError::TemperatureOutOfRange {
                value: rounded,
                min: self.config.min_temp,
                max: self.config.max_temp,
            });
        }
        self.device
            .set_property(&self.config.target_temperature_dp, DpValue::Integer(rounded))
            .await?;
        Ok(())
    }

    /// The platform's combined set-temperature service call. With no field
    /// this device supports, the call is a no-op.
    pub async fn set_temperature(&self, args: SetTemperatureArgs) -> Result<(), ClimateError> {
        match args.temperature {
            Some(temperature) => self.set_target_temperature(temperature).await,
            None => {
                tracing::debug!("{}: set_temperature without a setpoint", self.device.name());
                Ok(())
            }
        }
    }

    pub async fn set_hvac_mode(&self, mode: HvacMode) -> Result<(), ClimateError> {
        tracing::info!("{}: hvac mode -> {}", self.device.name(), mode);
        let dps = match mode {
            HvacMode::Off => DpMap::from([(self.config.power_dp.clone(), DpValue::Bool(false))]),
            HvacMode::Heat => DpMap::from([
                (self.config.power_dp.clone(), DpValue::Bool(true)),
                (self.config.preset_dp.clone(), DpValue::from("auto")),
            ]),
            HvacMode::FanOnly => DpMap::from([
                (self.config.power_dp.clone(), DpValue::Bool(true)),
                (self.config.preset_dp.clone(), DpValue::from("off")),
            ]),
        };
        self.device.set_properties(dps).await?;
        Ok(())
    }

    pub async fn set_preset_mode(&self, preset: PresetMode) -> Result<(), ClimateError> {
        self.device
            .set_property(&self.config.preset_dp, DpValue::from(preset_to_dp(preset)))
            .await?;
        Ok(())
    }

    pub async fn set_swing_mode(&self, mode: SwingMode) -> Result<(), ClimateError> {
        self.device
            .set_property(
                &self.config.swing_dp,
                DpValue::Bool(mode == SwingMode::Vertical),
            )
            .await?;
        Ok(())
    }
}
