// Shared fixtures: a recording transport and a device wired like the real
// wall heater.
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use heaterhub::PanelHeater;
use heaterhub::climate::TemperatureUnit;
use heaterhub::config::ClimateConfig;
use heaterhub::device::{Device, DeviceTransport, TransportError};
use heaterhub::dps::{DpMap, dp_map};

/// Records every batch written through it, so tests can assert exactly which
/// device writes an operation produced.
pub struct RecordingTransport {
    writes: Mutex<Vec<DpMap>>,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            writes: Mutex::new(Vec::new()),
        })
    }

    /// Drain the recorded writes.
    pub async fn take_writes(&self) -> Vec<DpMap> {
        std::mem::take(&mut *self.writes.lock().await)
    }
}

#[async_trait]
impl DeviceTransport for RecordingTransport {
    async fn send_dps(&self, dps: DpMap) -> Result<(), TransportError> {
        self.writes.lock().await.push(dps);
        Ok(())
    }
}

/// The DP payload the real device reports after pairing.
pub fn heater_payload() -> DpMap {
    dp_map([
        ("1", true.into()),
        ("2", 25i64.into()),
        ("3", 21i64.into()),
        ("4", "auto".into()),
        ("7", false.into()),
    ])
}

/// A Sani Wall 2000 entity over a recording transport, cache primed with the
/// pairing payload.
pub async fn saniwall() -> (PanelHeater, Arc<Device>, Arc<RecordingTransport>) {
    let transport = RecordingTransport::new();
    let device = Arc::new(Device::new(
        "Eurom Sani Wall 2000",
        TemperatureUnit::Celsius,
        transport.clone(),
    ));
    device.ingest(heater_payload()).await;
    let heater = PanelHeater::new(device.clone(), ClimateConfig::default());
    (heater, device, transport)
}
