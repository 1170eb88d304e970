use std::path::PathBuf;

#[cfg(unix)]
use joyarm_gilrs::QuitSender;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[cfg(unix)]
use crate::Error;

const JOYARM_CONFIG_ENV_NAME: &str = "JOYARM_CONFIG_PATH";

/// Logs to stderr, filtered by `RUST_LOG` (default `info`).
///
/// Stdout is kept for the axis and movement lines.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Get config path from input or env JOYARM_CONFIG_PATH
pub fn get_apps_config_path(config: Option<PathBuf>) -> Option<PathBuf> {
    if config.is_some() {
        config
    } else {
        std::env::var(JOYARM_CONFIG_ENV_NAME)
            .map(|s| {
                warn!("### ENV VAR {} is used ###", s);
                PathBuf::from(s)
            })
            .ok()
    }
}

/// Turns SIGINT, SIGTERM and SIGHUP into quit events on the joystick queue.
#[cfg(unix)]
pub fn quit_on_signal(quit: QuitSender) -> Result<(), Error> {
    use signal_hook::{consts::signal::*, iterator::Signals};
    use tracing::info;

    let mut signals = Signals::new([SIGTERM, SIGINT, SIGHUP]).map_err(Error::Signal)?;
    std::thread::spawn(move || {
        for sig in signals.forever() {
            info!("Received signal {sig}, quitting");
            if !quit.quit() {
                break;
            }
        }
    });
    Ok(())
}
