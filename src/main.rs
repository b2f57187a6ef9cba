#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::process::ExitCode;
use std::str::FromStr;
use std::sync::{Mutex, OnceLock};

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use learnhub_core::{logging, SimulationConfig};

use crate::app::Route;

/// Simulation settings, set from command line
static SIMULATION: OnceLock<SimulationConfig> = OnceLock::new();

/// Route to open on launch, consumed by the first rendered page
static START_ROUTE: Mutex<Option<Route>> = Mutex::new(None);

/// Get the simulation settings (set from command line or default)
pub fn simulation_config() -> SimulationConfig {
    SIMULATION.get().copied().unwrap_or_default()
}

/// Take the launch route, if one is still pending.
pub fn take_start_route() -> Option<Route> {
    START_ROUTE.lock().ok().and_then(|mut slot| slot.take())
}

/// LearnHub - Course catalog and enrollment
#[derive(Parser, Debug)]
#[command(name = "learnhub-desktop")]
#[command(about = "LearnHub - Browse courses, enroll and manage your learning account")]
struct Args {
    /// Multiplier for simulated request delays (0 makes submissions instant)
    #[arg(long, default_value_t = 1.0)]
    delay_scale: f64,

    /// Route path to open on launch, e.g. /courses or /auth/login
    #[arg(long, default_value = "/")]
    start: String,

    /// Log filter directive (defaults to RUST_LOG, then "info")
    #[arg(long)]
    log: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = logging::init(args.log.as_deref()) {
        eprintln!("learnhub-desktop: {e}");
        return ExitCode::from(2);
    }

    let config = match SimulationConfig::new(args.delay_scale) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::from(2);
        }
    };
    let _ = SIMULATION.set(config);

    let start = match Route::from_str(&args.start) {
        Ok(route) => route,
        Err(e) => {
            tracing::error!("Invalid --start route '{}': {}", args.start, e);
            return ExitCode::from(2);
        }
    };
    if start != (Route::Home {}) {
        if let Ok(mut slot) = START_ROUTE.lock() {
            *slot = Some(start);
        }
    }

    tracing::info!(
        "Starting LearnHub at '{}' with delay scale {}",
        args.start,
        config.delay_scale()
    );

    let window_width = 1200.0;
    let window_height = 900.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("LearnHub")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    ExitCode::SUCCESS
}
