use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use winit::event_loop::{ControlFlow, EventLoop};

use input_actions::app::{App, Controls, format_bindings};
use input_actions::build_info;
use input_actions::config::AppConfig;
use input_actions::input::{HeadlessSurface, InputManager};

/// Demo game for the input action layer
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Configuration profile (defaults to APP_PROFILE, then "release")
    #[arg(long)]
    profile: Option<String>,

    /// Start in relative mouse mode
    #[arg(long)]
    relative_mouse: bool,

    /// Print the default bindings and exit
    #[arg(long)]
    list_bindings: bool,
}

fn load_config(profile: Option<&str>) -> Result<AppConfig, config::ConfigError> {
    match profile {
        Some(profile) => AppConfig::load(profile),
        None => AppConfig::load_from_env(),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let loaded = load_config(args.profile.as_deref());
    let mut config = match &loaded {
        Ok(config) => config.clone(),
        Err(_) => AppConfig::fallback(args.profile.as_deref().unwrap_or("release")),
    };
    if args.relative_mouse {
        config.input.relative_mouse = true;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    if let Err(e) = loaded {
        warn!(error = %e, "Failed to load config, using default configuration");
    }

    if args.list_bindings {
        let input = InputManager::new(std::sync::Arc::new(HeadlessSurface));
        let controls = Controls::new();
        controls.bind(&input);
        println!("{}", "Default bindings".bold().underline());
        println!("{}", format_bindings(&controls, &input));
        return Ok(());
    }

    build_info::log_build_info();
    info!(version = %build_info::version_string(), "Starting");

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop
        .run_app(&mut app)
        .context("Event loop terminated with an error")?;

    Ok(())
}
