#![doc = include_str!("../README.md")]

mod error;
mod joyarm_config;
pub mod utils;

pub use error::*;
pub use joyarm_config::*;
