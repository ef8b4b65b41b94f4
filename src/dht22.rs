use embedded_hal::delay::DelayNs;

use crate::config::Config;
use crate::error::DhtError;
use crate::frame::{FRAME_BITS, ValidFrame, assemble};
use crate::line::{DigitalLine, Level};
use crate::reading::Reading;
use crate::timing::{LevelTimer, Pulse};

/// Driver for the DHT22 temperature and humidity sensor.
///
/// Owns the data line for as long as it exists, so no other code can toggle
/// or sample the line in the middle of a decode.
pub struct Dht22<LINE, D> {
    line: LINE,
    delay: D,
    config: Config,
    timer: LevelTimer,
}

impl<LINE, D> Dht22<LINE, D>
where
    LINE: DigitalLine,
    D: DelayNs,
{
    /// Creates a new instance of the DHT22 driver with [`Config::DHT22`].
    ///
    /// # Arguments
    ///
    /// * `line` - The data line the DHT22 is connected to.
    /// * `delay` - A delay provider implementing the `DelayNs` trait.
    pub fn new(line: LINE, delay: D) -> Self {
        Self::with_config(line, delay, Config::DHT22)
    }

    /// Creates a driver with custom timings.
    pub fn with_config(line: LINE, delay: D, config: Config) -> Self {
        Dht22 {
            line,
            delay,
            config,
            timer: LevelTimer::new(config.poll_interval_us),
        }
    }

    /// The timings this driver decodes with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Gives back the line and the delay provider.
    pub fn release(self) -> (LINE, D) {
        (self.line, self.delay)
    }

    /// Reads a temperature and humidity measurement from the DHT22 sensor.
    ///
    /// This method performs the complete DHT22 communication sequence:
    /// sending the wake pulse, timing the sensor's acknowledge, timing 40
    /// data bits, validating the checksum and converting the result.
    /// It blocks for the whole exchange, a few milliseconds.
    ///
    /// Successive calls must be at least
    /// [`MIN_READ_INTERVAL_MS`](crate::MIN_READ_INTERVAL_MS) apart.
    ///
    /// # Returns
    ///
    /// * `Ok(Reading)` if the read is successful and the checksum is valid.
    /// * `Err(DhtError)` if a phase timed out, the checksum is wrong or the
    ///   line failed.
    pub fn read(&mut self) -> Result<Reading, DhtError<LINE::Error>> {
        self.read_frame().map(Reading::from)
    }

    /// Like [`read`](Self::read), but returns the checksum-verified frame
    /// instead of converting it.
    pub fn read_frame(&mut self) -> Result<ValidFrame, DhtError<LINE::Error>> {
        self.start()?;

        let mut cells = [(0, 0); FRAME_BITS];
        for cell in cells.iter_mut() {
            *cell = self.read_cell()?;
        }

        assemble(&cells).validate()
    }

    /// Sends the wake pulse and waits through the sensor's acknowledge.
    ///
    /// The line is held low for the wake pulse, then released high with no
    /// extra delay. The sensor answers by pulling low, holding low for ~80us
    /// and high for ~80us before the first data bit.
    fn start(&mut self) -> Result<(), DhtError<LINE::Error>> {
        let timeouts = self.config.timeouts;

        // MCU sends start request
        self.line.set_output_mode()?;
        self.line.write(Level::Low)?;
        self.delay.delay_us(self.config.wake_pulse_us);
        self.line.write(Level::High)?;
        self.line.set_input_mode()?;

        // Waiting for DHT22 Response
        self.wait_while(Level::High, timeouts.ack_us)?;
        self.wait_while(Level::Low, timeouts.ack_low_us)?; // 80us
        self.wait_while(Level::High, timeouts.ack_high_us)?; // 80us
        Ok(())
    }

    /// Times the two phases of one data bit as `(low_us, high_us)`.
    ///
    /// Each bit starts with a ~50us low marker followed by a high phase of
    /// 26-28us for `0` or ~70us for `1`.
    fn read_cell(&mut self) -> Result<(u32, u32), DhtError<LINE::Error>> {
        let timeouts = self.config.timeouts;

        let low = self.wait_while(Level::Low, timeouts.bit_low_us)?;
        let high = self.wait_while(Level::High, timeouts.bit_high_us)?;

        Ok((low.duration_us, high.duration_us))
    }

    /// Times how long the line stays at `level`.
    fn wait_while(
        &mut self,
        level: Level,
        timeout_us: u32,
    ) -> Result<Pulse, DhtError<LINE::Error>> {
        self.timer
            .measure(&mut self.line, &mut self.delay, level, timeout_us)
    }
}

/// Runs one decode attempt on a borrowed line and delay.
///
/// Equivalent to building a [`Dht22`] with `config` and calling
/// [`Dht22::read`] once.
pub fn decode<L, D>(
    line: &mut L,
    delay: &mut D,
    config: &Config,
) -> Result<Reading, DhtError<L::Error>>
where
    L: DigitalLine,
    D: DelayNs,
{
    Dht22::with_config(line, delay, *config).read()
}
