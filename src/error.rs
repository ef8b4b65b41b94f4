use core::fmt;

/// Possible errors from a DHT22 decode attempt.
///
/// `Timeout` and `ChecksumMismatch` are the protocol failures. `Pin` carries
/// the line's own error; lines that cannot fail use
/// [`Infallible`](core::convert::Infallible) and never produce it.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DhtError<E> {
    /// An expected level transition did not happen within its phase bound.
    Timeout,
    /// All 40 bits were received but the checksum byte did not match.
    ChecksumMismatch,
    /// Error from the data line (input/output).
    Pin(E),
}

impl<E> From<E> for DhtError<E> {
    fn from(value: E) -> Self {
        Self::Pin(value)
    }
}

impl<E: fmt::Debug> fmt::Display for DhtError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DhtError::Timeout => f.write_str("sensor timeout"),
            DhtError::ChecksumMismatch => f.write_str("checksum error"),
            DhtError::Pin(e) => write!(f, "data line error: {e:?}"),
        }
    }
}
