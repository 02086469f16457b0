// src/device/sim.rs - In-process heater used by the demo host and tests
//
// Stands in for the physical wall heater: applies DP writes to its own
// state and produces status reports, while a thermal model drifts the
// measured temperature. DP ids mirror the real device (power "1", target
// "2", measured "3", preset "4", swing "7").
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{DeviceTransport, TransportError};
use crate::dps::{DpMap, DpValue, dp_map};

const DP_POWER: &str = "1";
const DP_TARGET: &str = "2";
const DP_MEASURED: &str = "3";
const DP_PRESET: &str = "4";
const DP_SWING: &str = "7";

#[derive(Debug, Clone)]
struct SimState {
    power: bool,
    target_temp: f64,
    measured_temp: f64,
    preset: String,
    swing: bool,
}

pub struct SimulatedHeater {
    state: Mutex<SimState>,
    ambient: f64,
}

impl SimulatedHeater {
    pub fn new(ambient: f64) -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(SimState {
                power: false,
                target_temp: 20.0,
                measured_temp: ambient,
                preset: "auto".to_string(),
                swing: false,
            }),
            ambient,
        })
    }

    /// Duty level of the heating element: fixed for the percentage presets,
    /// thermostatic for "auto", zero in fan-only.
    fn duty(state: &SimState) -> f64 {
        if !state.power {
            return 0.0;
        }
        match state.preset.as_str() {
            "off" => 0.0,
            "50_perc" => 0.5,
            "100_perc" => 1.0,
            _ => {
                if state.measured_temp < state.target_temp {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }

    /// Advance the thermal model by `dt` seconds.
    pub async fn tick(&self, dt: f64) {
        let mut state = self.state.lock().await;
        let duty = Self::duty(&state);
        let heat_gain = duty * 1.5 * dt;
        let heat_loss = 0.05 * (state.measured_temp - self.ambient) * dt;
        state.measured_temp += heat_gain - heat_loss;
        state.measured_temp += 0.1 * (rand::random::<f64>() - 0.5);
    }

    /// Snapshot the device state as a DP status report.
    pub async fn report(&self) -> DpMap {
        let state = self.state.lock().await;
        dp_map([
            (DP_POWER, state.power.into()),
            (DP_TARGET, (state.target_temp.round() as i64).into()),
            (DP_MEASURED, (state.measured_temp.round() as i64).into()),
            (DP_PRESET, state.preset.as_str().into()),
            (DP_SWING, state.swing.into()),
        ])
    }
}

#[async_trait]
impl DeviceTransport for SimulatedHeater {
    async fn send_dps(&self, dps: DpMap) -> Result<(), TransportError> {
        let mut state = self.state.lock().await;
        for (id, value) in &dps {
            match (id.as_str(), value) {
                (DP_POWER, DpValue::Bool(v)) => state.power = *v,
                (DP_TARGET, DpValue::Integer(v)) => state.target_temp = *v as f64,
                (DP_PRESET, DpValue::Enum(v)) => state.preset = v.clone(),
                (DP_SWING, DpValue::Bool(v)) => state.swing = *v,
                _ => {
                    return Err(TransportError::Rejected(format!(
                        "unsupported write {:?} to dp {}",
                        value, id
                    )));
                }
            }
        }
        Ok(())
    }
}
