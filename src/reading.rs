use core::fmt;

use crate::frame::ValidFrame;

/// Reading decoded from a DHT22 frame.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading {
    /// Temperature in degrees Celsius.
    pub temperature: f32,
    /// Relative humidity in percent.
    pub humidity: f32,
}

impl Reading {
    /// Converts a checksum-verified frame into physical values.
    ///
    /// Values are not range checked; a valid checksum only says the bytes
    /// arrived intact.
    pub fn from_frame(frame: ValidFrame) -> Self {
        let [hum_hi, hum_lo, temp_hi, temp_lo] = frame.data();

        let joined_humidity = u16::from_be_bytes([hum_hi, hum_lo]);
        let humidity = joined_humidity as f32 / 10.0;

        let is_temp_negative = (temp_hi >> 7) != 0;
        let temp_hi = temp_hi & 0b0111_1111;
        let joined_temp = u16::from_be_bytes([temp_hi, temp_lo]);
        let mut temperature = joined_temp as f32 / 10.0;
        if is_temp_negative {
            temperature = -temperature;
        }

        Reading {
            temperature,
            humidity,
        }
    }
}

impl From<ValidFrame> for Reading {
    fn from(frame: ValidFrame) -> Self {
        Reading::from_frame(frame)
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hum {:.1} %, Tmp {:.1} °C", self.humidity, self.temperature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DhtError;
    use crate::frame::RawFrame;
    use core::convert::Infallible;

    fn reading(bytes: [u8; 5]) -> Result<Reading, DhtError<Infallible>> {
        RawFrame::from_bytes(bytes).validate().map(Reading::from)
    }

    #[test]
    fn test_positive_temperature() {
        // 0x028C => 652, 0x015F => 351
        assert_eq!(
            reading([0x02, 0x8C, 0x01, 0x5F, 0xEE]).unwrap(),
            Reading {
                humidity: 65.2,
                temperature: 35.1,
            }
        );
    }

    #[test]
    fn test_negative_temperature() {
        // Bit 7 of temp_hi is 1 => negative
        // Clear sign bit: 0x81 & 0x7F = 0x01, so [0x01, 0x65] = 357 => 35.7 then negated
        let checksum = 0x02u8
            .wrapping_add(0x8C)
            .wrapping_add(0x81)
            .wrapping_add(0x65);
        assert_eq!(
            reading([0x02, 0x8C, 0x81, 0x65, checksum]).unwrap(),
            Reading {
                humidity: 65.2,
                temperature: -35.7,
            }
        );
    }

    #[test]
    fn test_minus_ten_point_one() {
        // Datasheet example: 1000 0000 0110 0101 => -10.1C
        let checksum = 0x02u8
            .wrapping_add(0x8C)
            .wrapping_add(0x80)
            .wrapping_add(0x65);
        assert_eq!(
            reading([0x02, 0x8C, 0x80, 0x65, checksum])
                .unwrap()
                .temperature,
            -10.1
        );
    }

    #[test]
    fn test_checksum_error_yields_no_reading() {
        assert_eq!(
            reading([0x02, 0x8C, 0x01, 0x5F, 0xFF]).unwrap_err(),
            DhtError::ChecksumMismatch
        );
    }

    #[test]
    fn test_out_of_range_values_are_not_rejected() {
        // 0xFFFF => 6553.5 %RH, clearly implausible but checksum-valid.
        let reading = reading([0xFF, 0xFF, 0x00, 0x00, 0xFE]).unwrap();
        assert_eq!(reading.humidity, 6553.5);
        assert_eq!(reading.temperature, 0.0);
    }

    #[test]
    fn test_from_frame_is_pure() {
        let frame = RawFrame::from_bytes([0x01, 0x90, 0x00, 0xF6, 0x87])
            .validate::<Infallible>()
            .unwrap();
        assert_eq!(Reading::from_frame(frame), Reading::from_frame(frame));
        assert_eq!(
            Reading::from_frame(frame),
            Reading {
                humidity: 40.0,
                temperature: 24.6,
            }
        );
    }

    #[test]
    fn test_display() {
        let reading = Reading {
            humidity: 65.2,
            temperature: -10.1,
        };
        assert_eq!(reading.to_string(), "Hum 65.2 %, Tmp -10.1 °C");
    }
}
