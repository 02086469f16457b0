// src/main.rs - Demo host loop driving the heater integration end to end
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;

use heaterhub::climate::{HvacMode, PresetMode};
use heaterhub::config::{self, TransportKind};
use heaterhub::device::Device;
use heaterhub::device::sim::SimulatedHeater;
use heaterhub::PanelHeater;

#[derive(Parser)]
#[command(name = "heater-host", about = "Drive the panel heater integration against a simulated device")]
struct Args {
    /// Path to the device profile
    #[arg(default_value = "heater.toml")]
    config: String,

    /// Seconds to run the demo session
    #[arg(long, default_value_t = 20)]
    duration: u64,

    /// Ambient temperature for the simulated room, in °C
    #[arg(long, default_value_t = 16.0)]
    ambient: f64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = Args::parse();

    tracing::info!("Starting heater-host");
    tracing::info!("Loading device profile from: {}", args.config);
    let config = config::load_config(&args.config).map_err(|e| {
        tracing::error!("Failed to load profile '{}': {}", args.config, e);
        Box::new(e) as Box<dyn std::error::Error + Send + Sync + 'static>
    })?;

    if config.transport.kind != TransportKind::Simulated {
        return Err(format!(
            "transport kind {:?} is not available in this build; use the simulated transport",
            config.transport.kind
        )
        .into());
    }

    tracing::info!(
        "Device: {} ({}..{} {}, step {})",
        config.device.name,
        config.climate.min_temp,
        config.climate.max_temp,
        config.device.unit,
        config.climate.step
    );

    let sim = SimulatedHeater::new(args.ambient);
    let device = Arc::new(Device::new(
        &config.device.name,
        config.device.unit,
        sim.clone(),
    ));
    let heater = PanelHeater::new(device.clone(), config.climate.clone());

    // Feed device status reports into the DP cache, like a poller would.
    let poller_sim = sim.clone();
    let poller_device = device.clone();
    tokio::spawn(async move {
        loop {
            poller_sim.tick(0.5).await;
            poller_device.ingest(poller_sim.report().await).await;
            tokio::time::sleep(Duration::from_millis(500)).await;
        }
    });

    // Scripted session: heat at eco level toward 24 °C.
    heater.set_hvac_mode(HvacMode::Heat).await?;
    heater.set_preset_mode(PresetMode::Eco).await?;
    heater.set_target_temperature(24.0).await?;

    for _ in 0..args.duration {
        tokio::time::sleep(Duration::from_secs(1)).await;
        tracing::info!(
            "{}: mode {:?}, preset {:?}, {:?} -> {:?} {} ({})",
            device.name(),
            heater.hvac_mode().await,
            heater.preset_mode().await,
            heater.current_temperature().await,
            heater.target_temperature().await,
            heater.temperature_unit(),
            heater.icon().await
        );
    }

    heater.set_hvac_mode(HvacMode::Off).await?;
    tracing::info!("{}: session complete", device.name());
    Ok(())
}
