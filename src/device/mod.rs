// src/device/mod.rs - Device state cache and the transport seam
pub mod sim;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::climate::TemperatureUnit;
use crate::dps::{DpMap, DpValue};

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("device not connected")]
    NotConnected,
    #[error("device rejected write: {0}")]
    Rejected(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The wire boundary. A transport pushes property writes toward the
/// physical device; status reports flow back through [`Device::ingest`].
#[async_trait]
pub trait DeviceTransport: Send + Sync {
    async fn send_dps(&self, dps: DpMap) -> Result<(), TransportError>;
}

/// One physical device: its DP cache plus the transport used to reach it.
///
/// Reads come from the cache; writes go to the transport and update the
/// cache optimistically, so an entity reads back what it just set without
/// waiting for the device's next status report.
pub struct Device {
    name: String,
    unit: TemperatureUnit,
    dps: Arc<RwLock<DpMap>>,
    transport: Arc<dyn DeviceTransport>,
}

impl Device {
    pub fn new(name: &str, unit: TemperatureUnit, transport: Arc<dyn DeviceTransport>) -> Self {
        Self {
            name: name.to_string(),
            unit,
            dps: Arc::new(RwLock::new(DpMap::new())),
            transport,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn temperature_unit(&self) -> TemperatureUnit {
        self.unit
    }

    pub async fn get_property(&self, id: &str) -> Option<DpValue> {
        let dps = self.dps.read().await;
        dps.get(id).cloned()
    }

    pub async fn set_property(&self, id: &str, value: DpValue) -> Result<(), TransportError> {
        self.set_properties(DpMap::from([(id.to_string(), value)]))
            .await
    }

    /// Write a batch of properties as a single transport message.
    pub async fn set_properties(&self, dps: DpMap) -> Result<(), TransportError> {
        if dps.is_empty() {
            return Ok(());
        }
        tracing::debug!("{}: writing properties {:?}", self.name, dps);
        self.transport.send_dps(dps.clone()).await?;
        let mut cache = self.dps.write().await;
        cache.extend(dps);
        Ok(())
    }

    /// Merge a device-originated status report into the cache.
    pub async fn ingest(&self, report: DpMap) {
        let mut cache = self.dps.write().await;
        cache.extend(report);
    }

    /// Drop a DP from the cache, as for a device that has not reported it.
    pub async fn remove_property(&self, id: &str) {
        let mut cache = self.dps.write().await;
        cache.remove(id);
    }
}
