//! Busy-wait measurement of how long the line stays at a level.

use embedded_hal::delay::DelayNs;

use crate::error::DhtError;
use crate::line::{DigitalLine, Level};

/// How long the line was held at one level.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pulse {
    pub level: Level,
    pub duration_us: u32,
}

/// Polls a [`DigitalLine`] at a fixed interval until it leaves a level.
#[derive(Clone, Copy, Debug)]
pub struct LevelTimer {
    poll_interval_us: u32,
}

impl LevelTimer {
    /// Creates a timer that samples the line every `poll_interval_us`.
    ///
    /// An interval of zero is treated as 1us.
    pub const fn new(poll_interval_us: u32) -> Self {
        let poll_interval_us = if poll_interval_us == 0 {
            1
        } else {
            poll_interval_us
        };
        LevelTimer { poll_interval_us }
    }

    /// Measures how long `line` stays at `level`.
    ///
    /// Returns as soon as a sample differs from `level`. Each matching sample
    /// adds the poll interval to the elapsed count, so a successful
    /// measurement never exceeds `timeout_us`.
    ///
    /// # Errors
    ///
    /// Returns `DhtError::Timeout` if the elapsed count exceeds `timeout_us`
    /// while the line is still at `level`.
    pub fn measure<L, D>(
        &self,
        line: &mut L,
        delay: &mut D,
        level: Level,
        timeout_us: u32,
    ) -> Result<Pulse, DhtError<L::Error>>
    where
        L: DigitalLine,
        D: DelayNs,
    {
        let mut elapsed: u32 = 0;
        while line.read()? == level {
            elapsed = elapsed.saturating_add(self.poll_interval_us);
            if elapsed > timeout_us {
                return Err(DhtError::Timeout);
            }
            delay.delay_us(self.poll_interval_us);
        }
        Ok(Pulse {
            level,
            duration_us: elapsed,
        })
    }
}

impl Default for LevelTimer {
    fn default() -> Self {
        LevelTimer::new(1)
    }
}
