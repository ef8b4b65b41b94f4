//! DHT22 Single-Wire Decoder for Embedded Rust
//!
//! This crate decodes the timing-encoded single-wire protocol of the DHT22
//! (AM2302) temperature and humidity sensor, built on top of the
//! [`embedded-hal`] traits.
//!
//! A read drives the line low for a wake pulse, times the sensor's
//! acknowledge, then times the low and high phase of each of the 40 data
//! bits. A bit is `1` when its high phase outlasts its low phase. The five
//! bytes are checksum-verified before they are turned into a [`Reading`].
//!
//! # Features
//! - Blocking synchronous API using `embedded-hal` traits
//! - Designed for `no_std` environments
//! - Per-phase timeouts and poll interval configurable through [`Config`]
//! - Optional logging support via `defmt` or `log`
//!
//! # Dependencies
//! This driver depends on the following `embedded-hal` traits:
//! - [`InputPin`] and [`OutputPin`] for GPIO access, through [`OpenDrain`]
//! - [`DelayNs`] for accurate timing
//!
//! Platforms whose data pin needs explicit direction switching implement
//! [`DigitalLine`] directly.
//!
//! # Optional Features
//! - `defmt`: Implements `defmt::Format` and logs [`report()`] through `defmt`
//! - `log`: Logs [`report()`] through `log`
//!
//! The sensor needs at least [`MIN_READ_INTERVAL_MS`] between two reads.
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal
//! [`InputPin`]: embedded_hal::digital::InputPin
//! [`OutputPin`]: embedded_hal::digital::OutputPin
//! [`DelayNs`]: embedded_hal::delay::DelayNs

#![cfg_attr(not(test), no_std)]

#[cfg(all(feature = "defmt", feature = "log"))]
compile_error!("Features \"defmt\" and \"log\" are mutually exclusive and cannot be enabled together");

pub mod config;
pub mod dht22;
pub mod error;
pub mod frame;
pub mod line;
pub mod reading;
pub mod report;
pub mod timing;

pub use config::{Config, MIN_READ_INTERVAL_MS, Timeouts};
pub use dht22::{Dht22, decode};
pub use error::DhtError;
pub use frame::{RawFrame, ValidFrame};
pub use line::{DigitalLine, Level, OpenDrain};
pub use reading::Reading;
pub use report::report;
pub use timing::{LevelTimer, Pulse};
