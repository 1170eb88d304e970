use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("joyarm-apps: Failed to parse {:?} as toml ({}).", .0, .1)]
    TomlParseFailure(PathBuf, #[source] toml::de::Error),
    #[error("joyarm-apps: No File {:?} is found ({}).", .0, .1)]
    NoFile(PathBuf, #[source] std::io::Error),
    #[error("joyarm-apps: Failed to register signal handlers ({}).", .0)]
    Signal(#[source] std::io::Error),
    #[error("joyarm-apps: joyarm: {}", .0)]
    Joyarm(#[from] joyarm::Error),
}
