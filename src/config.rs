//! Timing configuration for a decode attempt.

/// Minimum quiet time between two reads of the same sensor, in milliseconds.
///
/// The decoder does not track it. Reading more often than this makes the
/// sensor answer late or with stale data, which shows up as timeouts or
/// checksum errors.
pub const MIN_READ_INTERVAL_MS: u32 = 2000;

/// Per-phase bounds (in microseconds) for each expected level transition.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timeouts {
    /// Waiting for the sensor to pull the line low after the host request.
    pub ack_us: u32,
    /// The sensor's low acknowledge pulse (nominal 80us).
    pub ack_low_us: u32,
    /// The sensor's high acknowledge pulse (nominal 80us).
    pub ack_high_us: u32,
    /// Low marker at the start of every data bit (nominal 50us).
    pub bit_low_us: u32,
    /// High phase of a data bit (26-28us for `0`, 70us for `1`).
    pub bit_high_us: u32,
}

impl Timeouts {
    /// Bounds used by the DHT22 / AM2302.
    pub const DHT22: Self = Self {
        ack_us: 100,
        ack_low_us: 100,
        ack_high_us: 100,
        bit_low_us: 70,
        bit_high_us: 100,
    };
}

impl Default for Timeouts {
    fn default() -> Self {
        Self::DHT22
    }
}

/// Configuration for a single decode attempt.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// How long the host holds the line low to wake the sensor.
    pub wake_pulse_us: u32,
    /// Busy-wait step between two samples of the line.
    pub poll_interval_us: u32,
    /// Per-phase timeouts.
    pub timeouts: Timeouts,
}

impl Config {
    /// 5ms wake pulse, 1us polling, [`Timeouts::DHT22`].
    pub const DHT22: Self = Self {
        wake_pulse_us: 5000,
        poll_interval_us: 1,
        timeouts: Timeouts::DHT22,
    };

    /// Replaces the per-phase timeouts.
    pub const fn with_timeouts(self, timeouts: Timeouts) -> Self {
        Self { timeouts, ..self }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::DHT22
    }
}
