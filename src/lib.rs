// heaterhub: host-side local integration for a Tuya-protocol panel heater
pub mod climate;
pub mod config;
pub mod device;
pub mod dps;

pub use climate::heater::PanelHeater;
pub use config::{Config, load_config};
pub use device::Device;
