use std::path::Path;

use joyarm::{AxisMapping, AxisRouter};
use joyarm_gilrs::GilJoystickConfig;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Error;

const fn default_num_motors() -> usize {
    5
}

#[derive(Debug, Serialize, Deserialize, Clone, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct JoyarmConfig {
    /// Number of motors on the arm. Mappings that drive a higher motor are
    /// rejected.
    #[serde(default = "default_num_motors")]
    pub num_motors: usize,
    /// Joystick axis to arm motor routing. When empty, every joystick axis
    /// drives the arm axis with the same index.
    #[serde(default)]
    pub axis_map: Vec<AxisMapping>,
    #[serde(default)]
    pub gil_joystick_config: GilJoystickConfig,
}

impl Default for JoyarmConfig {
    fn default() -> Self {
        Self {
            num_motors: default_num_motors(),
            axis_map: vec![],
            gil_joystick_config: GilJoystickConfig::default(),
        }
    }
}

impl JoyarmConfig {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        Self::from_str(
            &std::fs::read_to_string(&path)
                .map_err(|e| Error::NoFile(path.as_ref().to_owned(), e))?,
            path,
        )
    }

    pub fn from_str<P: AsRef<Path>>(s: &str, path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let config: JoyarmConfig =
            toml::from_str(s).map_err(|e| Error::TomlParseFailure(path.to_owned(), e))?;
        debug!(?path, ?config, "loaded config");
        Ok(config)
    }

    pub fn device_id(&self) -> usize {
        self.gil_joystick_config.device_id
    }

    /// Builds the axis router, rejecting mappings to motors the arm lacks.
    pub fn axis_router(&self) -> Result<AxisRouter, Error> {
        let router = AxisRouter::new(self.axis_map.clone());
        router.validate(self.num_motors)?;
        Ok(router)
    }
}
