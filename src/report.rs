//! Logging of decode outcomes.
//!
//! The decoder never logs on its own. Callers that want the usual
//! "log and retry later" behaviour pass each result to [`report`], which logs
//! through `defmt` or `log`, whichever feature is enabled. With neither
//! feature it does nothing.

#[cfg(not(feature = "defmt"))]
use core::fmt::Debug;

use crate::error::DhtError;
use crate::reading::Reading;

/// The message [`report`] logs for `result`.
pub fn describe<E>(result: &Result<Reading, DhtError<E>>) -> &'static str {
    match result {
        Ok(_) => "Reading",
        Err(DhtError::Timeout) => "Sensor Timeout",
        Err(DhtError::ChecksumMismatch) => "CheckSum error",
        Err(DhtError::Pin(_)) => "Data line error",
    }
}

/// Logs the outcome of a decode attempt.
#[cfg(feature = "defmt")]
pub fn report<E: defmt::Format>(result: &Result<Reading, DhtError<E>>) {
    let message = describe(result);
    match result {
        Ok(reading) => defmt::info!(
            "{=str}: Hum {=f32} Tmp {=f32}",
            message,
            reading.humidity,
            reading.temperature
        ),
        Err(DhtError::Pin(e)) => defmt::error!("{=str}: {}", message, e),
        Err(_) => defmt::error!("{=str}", message),
    }
}

/// Logs the outcome of a decode attempt.
#[cfg(feature = "log")]
pub fn report<E: Debug>(result: &Result<Reading, DhtError<E>>) {
    let message = describe(result);
    match result {
        Ok(reading) => log::info!("{message}: {reading}"),
        Err(DhtError::Pin(e)) => log::error!("{message}: {e:?}"),
        Err(_) => log::error!("{message}"),
    }
}

/// Logs the outcome of a decode attempt.
#[cfg(not(any(feature = "defmt", feature = "log")))]
pub fn report<E: Debug>(_result: &Result<Reading, DhtError<E>>) {}
