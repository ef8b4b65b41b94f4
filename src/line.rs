//! The data line the decoder drives and samples.

use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

/// Logical level of the data line.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

/// A bidirectional single-wire data line.
///
/// The decoder needs to drive the line for the host request and then sample
/// it while the sensor answers. Platforms with real direction registers
/// implement the mode switches; open-drain pins can use [`OpenDrain`].
pub trait DigitalLine: ErrorType {
    /// Configures the line to be driven by the host.
    fn set_output_mode(&mut self) -> Result<(), Self::Error>;

    /// Releases the line so the sensor can drive it.
    fn set_input_mode(&mut self) -> Result<(), Self::Error>;

    /// Drives the line to `level`.
    fn write(&mut self, level: Level) -> Result<(), Self::Error>;

    /// Samples the current level of the line.
    fn read(&mut self) -> Result<Level, Self::Error>;
}

impl<T: DigitalLine + ?Sized> DigitalLine for &mut T {
    fn set_output_mode(&mut self) -> Result<(), Self::Error> {
        T::set_output_mode(self)
    }

    fn set_input_mode(&mut self) -> Result<(), Self::Error> {
        T::set_input_mode(self)
    }

    fn write(&mut self, level: Level) -> Result<(), Self::Error> {
        T::write(self, level)
    }

    fn read(&mut self) -> Result<Level, Self::Error> {
        T::read(self)
    }
}

/// [`DigitalLine`] over an open-drain `embedded-hal` pin.
///
/// With an external pull-up, writing high releases the bus, so the pin already
/// behaves as an input afterwards and the mode switches do nothing.
pub struct OpenDrain<P> {
    pin: P,
}

impl<P> OpenDrain<P>
where
    P: InputPin + OutputPin,
{
    /// Wraps an open-drain pin connected to the DHT22 data line.
    pub fn new(pin: P) -> Self {
        OpenDrain { pin }
    }

    /// Returns the wrapped pin.
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: ErrorType> ErrorType for OpenDrain<P> {
    type Error = P::Error;
}

impl<P> DigitalLine for OpenDrain<P>
where
    P: InputPin + OutputPin,
{
    fn set_output_mode(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_input_mode(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn write(&mut self, level: Level) -> Result<(), Self::Error> {
        match level {
            Level::Low => self.pin.set_low(),
            Level::High => self.pin.set_high(),
        }
    }

    fn read(&mut self) -> Result<Level, Self::Error> {
        if self.pin.is_high()? {
            Ok(Level::High)
        } else {
            Ok(Level::Low)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::digital::{
        Mock as PinMock, State as PinState, Transaction as PinTx,
    };

    #[test]
    fn test_open_drain_write_and_read() {
        let mut pin = PinMock::new(&[
            PinTx::set(PinState::Low),
            PinTx::set(PinState::High),
            PinTx::get(PinState::High),
            PinTx::get(PinState::Low),
        ]);

        let mut line = OpenDrain::new(pin.clone());
        line.set_output_mode().unwrap();
        line.write(Level::Low).unwrap();
        line.write(Level::High).unwrap();
        line.set_input_mode().unwrap();
        assert_eq!(line.read().unwrap(), Level::High);
        assert_eq!(line.read().unwrap(), Level::Low);

        pin.done();
    }
}
