#![doc = include_str!("../README.md")]

mod axis_map;
mod clients;
mod dispatch;
mod error;
mod traits;

pub use axis_map::*;
pub use clients::*;
pub use dispatch::*;
pub use error::*;
pub use traits::*;
