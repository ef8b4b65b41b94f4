//! The 40-bit frame sent by the sensor and its checksum.

use crate::error::DhtError;

/// Number of bits the sensor transmits per reading.
pub const FRAME_BITS: usize = 40;

/// Number of bytes in a frame.
pub const FRAME_BYTES: usize = FRAME_BITS / 8;

/// Five bytes as received: humidity (2), temperature (2), checksum (1).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawFrame([u8; FRAME_BYTES]);

impl RawFrame {
    /// Wraps five bytes as received, checksum last.
    pub const fn from_bytes(bytes: [u8; FRAME_BYTES]) -> Self {
        RawFrame(bytes)
    }

    /// All five bytes, checksum included.
    pub const fn bytes(&self) -> [u8; FRAME_BYTES] {
        self.0
    }

    /// The checksum byte as sent by the sensor.
    pub const fn checksum(&self) -> u8 {
        self.0[4]
    }

    /// Low 8 bits of the sum of the four data bytes.
    pub fn expected_checksum(&self) -> u8 {
        self.0[..4].iter().fold(0u8, |sum, v| sum.wrapping_add(*v))
    }

    /// Checks the frame integrity.
    ///
    /// # Errors
    ///
    /// Returns `DhtError::ChecksumMismatch` if the checksum byte is not the
    /// sum of the data bytes modulo 256.
    pub fn validate<E>(self) -> Result<ValidFrame, DhtError<E>> {
        if self.expected_checksum() == self.checksum() {
            Ok(ValidFrame(self))
        } else {
            Err(DhtError::ChecksumMismatch)
        }
    }
}

/// A [`RawFrame`] whose checksum has been verified.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidFrame(RawFrame);

impl ValidFrame {
    /// The four data bytes, without the checksum.
    pub const fn data(&self) -> [u8; 4] {
        let [b0, b1, b2, b3, _] = self.0.bytes();
        [b0, b1, b2, b3]
    }

    /// The underlying frame, checksum included.
    pub const fn raw(&self) -> RawFrame {
        self.0
    }
}

/// Decides a data bit from the two phases of its cell.
///
/// The bit is `1` when the high phase lasted longer than the low marker that
/// preceded it. This is a relative comparison, not a fixed threshold.
pub const fn decide_bit(low_us: u32, high_us: u32) -> bool {
    high_us > low_us
}

/// Shifts `bit` into the low end of `byte`, so the first bit pushed ends up
/// as the most significant one.
const fn push_bit(byte: u8, bit: bool) -> u8 {
    (byte << 1) | bit as u8
}

/// Builds a frame from 40 measured `(low_us, high_us)` bit cells, in the
/// order they were received.
pub fn assemble(cells: &[(u32, u32); FRAME_BITS]) -> RawFrame {
    let mut bytes = [0u8; FRAME_BYTES];
    for (byte, chunk) in bytes.iter_mut().zip(cells.chunks_exact(8)) {
        *byte = chunk
            .iter()
            .fold(0, |acc, &(low_us, high_us)| push_bit(acc, decide_bit(low_us, high_us)));
    }
    RawFrame(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;

    fn validate(bytes: [u8; 5]) -> Result<ValidFrame, DhtError<Infallible>> {
        RawFrame::from_bytes(bytes).validate()
    }

    // xorshift32, enough to spread quadruples over the whole byte range
    fn next(state: &mut u32) -> u32 {
        *state ^= *state << 13;
        *state ^= *state >> 17;
        *state ^= *state << 5;
        *state
    }

    #[test]
    fn test_checksum_matches() {
        let frame = validate([0x02, 0x8C, 0x01, 0x5F, 0xEE]).unwrap();
        assert_eq!(frame.data(), [0x02, 0x8C, 0x01, 0x5F]);
    }

    #[test]
    fn test_checksum_wraps_modulo_256() {
        // 0xFF + 0xFF + 0x01 + 0x02 = 0x201
        assert!(validate([0xFF, 0xFF, 0x01, 0x02, 0x01]).is_ok());
    }

    #[test]
    fn test_checksum_mismatch() {
        assert_eq!(
            validate([0x02, 0x8C, 0x01, 0x5F, 0xFF]).unwrap_err(),
            DhtError::ChecksumMismatch
        );
    }

    #[test]
    fn test_checksum_accepts_exactly_one_byte_per_quadruple() {
        let mut state = 0x1234_5678;
        for _ in 0..2048 {
            let [b0, b1, b2, b3] = next(&mut state).to_be_bytes();
            let sum = (b0 as u32 + b1 as u32 + b2 as u32 + b3 as u32) % 256;
            for b4 in 0..=255u8 {
                let result = validate([b0, b1, b2, b3, b4]);
                if b4 as u32 == sum {
                    assert!(result.is_ok());
                } else {
                    assert_eq!(result.unwrap_err(), DhtError::ChecksumMismatch);
                }
            }
        }
    }

    #[test]
    fn test_decide_bit_is_relative() {
        // Nominal cells.
        assert!(!decide_bit(50, 27));
        assert!(decide_bit(50, 70));
        // A 30us high phase reads as `1` after a short 20us low marker, even
        // though it is close to a nominal `0`.
        assert!(decide_bit(20, 30));
        // Equal phases read as `0`.
        assert!(!decide_bit(40, 40));
    }

    #[test]
    fn test_assemble_packs_msb_first() {
        let expected: [u8; FRAME_BYTES] = [0b1000_0001, 0xFF, 0x00, 0b1010_0101, 0x7F];
        let mut cells: [(u32, u32); FRAME_BITS] = [(50, 27); FRAME_BITS];
        for (k, cell) in cells.iter_mut().enumerate() {
            if expected[k / 8] >> (7 - k % 8) & 1 == 1 {
                *cell = (50, 70);
            }
        }

        assert_eq!(assemble(&cells).bytes(), expected);
    }

    #[test]
    fn test_assemble_first_bit_is_msb_of_first_byte() {
        let mut cells: [(u32, u32); FRAME_BITS] = [(50, 27); FRAME_BITS];
        cells[0] = (50, 70);
        cells[39] = (50, 70);

        assert_eq!(assemble(&cells).bytes(), [0x80, 0, 0, 0, 0x01]);
    }
}
