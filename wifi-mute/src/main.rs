// Wi-Fi Triggered Audio Mute Daemon

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tokio::signal;
use tokio::time::{interval, MissedTickBehavior};
use wifi_mute::{
    config::{dangling_aliases, load_config},
    error::Error,
    mixer::CommandMixer,
    poller::{CycleReport, Poller},
    ssid_monitor::SsidMonitor,
    types::Config,
};

#[derive(Parser)]
#[command(name = "wifi-mute")]
#[command(about = "Mute or unmute system audio when joining or leaving Wi-Fi networks", long_about = None)]
struct Args {
    /// Path to configuration file (.json or .toml)
    #[arg(short, long, default_value = "config.json")]
    config: PathBuf,

    /// Validate the configuration and exit
    #[arg(long)]
    check: bool,
}

/// Log the loaded configuration and any alias that cannot be resolved
fn log_config_summary(config: &Config) {
    log::info!("Poll interval: {}ms", config.interval);
    log::info!("Audio backend: {:?}", config.mixer);
    match &config.network_interface {
        Some(iface) => log::info!("Observing interface: {}", iface),
        None => log::info!("Observing all wireless interfaces"),
    }
    log::info!(
        "{} network(s) configured, {} named profile(s)",
        config.wifi.len(),
        config.profile.as_ref().map(|p| p.len()).unwrap_or(0)
    );

    for (ssid, alias) in dangling_aliases(config) {
        log::warn!("Profile '{}' for {} is not configured", alias, ssid);
    }
}

fn main() -> Result<()> {
    // One cycle runs at a time; a single worker is plenty
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("wifi-mute")
        .thread_stack_size(2 * 1024 * 1024) // 2MB stack (vs 8MB default)
        .enable_time()
        .enable_io()
        .build()?;

    runtime.block_on(async_main())
}

async fn async_main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration
    let config = load_config(&args.config)
        .with_context(|| format!("Failed to load config from {:?}", args.config))
        .map_err(Error::ConfigLoad)?;

    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&config.log_level),
    )
    .init();

    log_config_summary(&config);

    if args.check {
        log::info!("Configuration {:?} is valid", args.config);
        return Ok(());
    }

    log::info!("Starting wifi-mute daemon");

    let ssid_monitor = SsidMonitor::new(config.network_interface.clone());
    let mixer = CommandMixer::new(config.mixer);
    let period = Duration::from_millis(config.interval);
    let mut poller = Poller::new(config);

    // Initial snapshot; if it fails the first successful tick becomes the baseline
    if let Err(e) = poller.establish_baseline(&ssid_monitor).await {
        log::error!("{}", e);
    }

    // Overrunning cycles push the next tick back instead of bursting.
    // No timeout is applied to D-Bus or mixer calls; a hung call stalls polling.
    let mut poll_timer = interval(period);
    poll_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately and the baseline was just taken
    poll_timer.tick().await;

    let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())
        .context("Failed to set up SIGTERM handler")?;
    let mut sigint = signal::unix::signal(signal::unix::SignalKind::interrupt())
        .context("Failed to set up SIGINT handler")?;

    log::info!("Daemon started successfully");

    loop {
        tokio::select! {
            _ = sigterm.recv() => {
                log::info!("Received SIGTERM");
                break;
            }
            _ = sigint.recv() => {
                log::info!("Received SIGINT");
                break;
            }

            _ = poll_timer.tick() => {
                match poller.run_cycle(&ssid_monitor, &mixer).await {
                    Ok(CycleReport::Baseline(_)) => {}
                    Ok(CycleReport::Dispatched { transitions, report }) => {
                        if !transitions.is_empty() {
                            log::debug!(
                                "Cycle done: {} applied, {} skipped, {} failed",
                                report.applied,
                                report.skipped,
                                report.failures.len()
                            );
                        }
                    }
                    Err(e) => {
                        log::error!("{}, skipping cycle", e);
                    }
                }
            }
        }
    }

    log::info!("Shutdown complete");
    Ok(())
}
