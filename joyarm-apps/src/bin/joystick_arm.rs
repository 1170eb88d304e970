use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use joyarm::{Dispatcher, PrintArm};
use joyarm_apps::{
    utils::{get_apps_config_path, init_tracing},
    JoyarmConfig,
};
use joyarm_gilrs::GilrsSubsystem;
use schemars::schema_for;
use tracing::{debug, info};

/// Moves a robotic arm with a joystick.
#[derive(Parser, Debug)]
#[command(name = env!("CARGO_BIN_NAME"))]
struct Args {
    /// Path to the setting file.
    #[arg(short, long)]
    config_path: Option<PathBuf>,
    /// Prints the default setting as TOML.
    #[arg(long)]
    show_default_config: bool,
    /// Prints the JSON schema of the setting file.
    #[arg(long)]
    show_config_schema: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    debug!(?args);

    if args.show_default_config {
        print!("{}", toml::to_string(&JoyarmConfig::default())?);
        return Ok(());
    }
    if args.show_config_schema {
        let schema = schema_for!(JoyarmConfig);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }

    let config = match get_apps_config_path(args.config_path) {
        Some(path) => JoyarmConfig::new(path)?,
        None => {
            info!("No config path is specified, using the default config");
            JoyarmConfig::default()
        }
    };
    let router = config.axis_router()?;
    let device_id = config.device_id();

    let mut subsystem = GilrsSubsystem::new_from_config(config.gil_joystick_config);
    #[cfg(unix)]
    joyarm_apps::utils::quit_on_signal(subsystem.quit_sender())?;

    let arm = PrintArm::new();
    let mut dispatcher = Dispatcher::new(&arm).with_axis_router(router);
    joyarm::run(&mut subsystem, device_id, &mut dispatcher)?;
    info!("bye");
    Ok(())
}
