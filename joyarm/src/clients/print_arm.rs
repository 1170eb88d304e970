use std::{
    io::{self, Write},
    sync::{Mutex, PoisonError},
};

use crate::{
    error::Error,
    traits::{Direction, MoveArm},
};

/// Placeholder arm that only reports the movement it would make.
#[derive(Debug)]
pub struct PrintArm<W = io::Stdout> {
    out: Mutex<W>,
}

impl PrintArm {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for PrintArm {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> PrintArm<W>
where
    W: Write + Send,
{
    pub fn with_writer(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W> MoveArm for PrintArm<W>
where
    W: Write + Send,
{
    fn move_arm(&self, axis: u32, direction: Direction) -> Result<(), Error> {
        let mut out = self
            .out
            .lock()
            .map_err(|e| anyhow::anyhow!("print arm writer is poisoned: {e}"))?;
        writeln!(out, "Would move arm axis {axis} in direction {direction}")?;
        Ok(())
    }
}
