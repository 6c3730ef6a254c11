// src/driver/async_driver.rs

use crate::common::{
    address::DeviceAddress,
    config::{MeasurementMode, MeasurementTime, Resolution, SensorConfig},
    error::Bh1750Error,
    hal_traits::{Bh1750BusAsync, Bh1750DelayAsync},
    opcode, timing,
    types::Lux,
};

/// Asynchronous driver for a single BH1750 device.
///
/// Identical register protocol and state handling as the blocking
/// [`Bh1750`](crate::driver::Bh1750); settle and pacing waits yield to the
/// executor instead of blocking the thread. The single-instance ownership
/// rules are the same.
#[derive(Debug)]
pub struct AsyncBh1750<BUS, D> {
    bus: BUS,
    delay: D,
    address: DeviceAddress,
    config: SensorConfig,
}

impl<BUS, D> AsyncBh1750<BUS, D>
where
    BUS: Bh1750BusAsync,
    D: Bh1750DelayAsync,
{
    /// Creates a driver bound to `address` and writes the default
    /// configuration to the device.
    pub async fn new(
        address: DeviceAddress,
        bus: BUS,
        delay: D,
    ) -> Result<Self, Bh1750Error<BUS::Error>> {
        let mut driver = AsyncBh1750 {
            bus,
            delay,
            address,
            config: SensorConfig::default(),
        };
        driver.apply_config().await?;
        Ok(driver)
    }

    /// Reconfigures the sensor. Validation and register sequencing match
    /// the blocking driver: an out-of-range `measurement_time` fails before
    /// any bus write, and a valid one swaps the configuration and rewrites
    /// all three registers.
    pub async fn configure(
        &mut self,
        mode: MeasurementMode,
        resolution: Resolution,
        measurement_time: u8,
    ) -> Result<(), Bh1750Error<BUS::Error>> {
        let measurement_time = MeasurementTime::new(measurement_time)
            .map_err(|_| Bh1750Error::MeasurementTimeOutOfRange(measurement_time))?;

        self.config = SensorConfig {
            mode,
            resolution,
            measurement_time,
        };
        self.apply_config().await
    }

    /// Clears the device's illuminance data register.
    pub async fn reset(&mut self) -> Result<(), Bh1750Error<BUS::Error>> {
        self.bus.write(self.address, &[opcode::RESET]).await?;
        Ok(())
    }

    /// Powers on the device.
    pub async fn power_on(&mut self) -> Result<(), Bh1750Error<BUS::Error>> {
        self.bus.write(self.address, &[opcode::POWER_ON]).await?;
        Ok(())
    }

    /// Powers off the device.
    pub async fn power_off(&mut self) -> Result<(), Bh1750Error<BUS::Error>> {
        self.bus.write(self.address, &[opcode::POWER_DOWN]).await?;
        Ok(())
    }

    /// Performs one measurement and returns the illuminance in lux,
    /// re-triggering first in one-time mode.
    pub async fn measurement(&mut self) -> Result<Lux, Bh1750Error<BUS::Error>> {
        if self.config.mode == MeasurementMode::OneTime {
            self.write_measurement_mode().await?;
        }

        let mut frame = [0u8; 2];
        self.bus.read_into(self.address, &mut frame).await?;
        let raw = u16::from_be_bytes(frame);

        Ok(Lux::from_raw(raw, &self.config))
    }

    /// Returns an unbounded lazy sequence of measurements; call
    /// [`Measurements::next`] in a loop.
    pub fn measurements(&mut self) -> Measurements<'_, BUS, D> {
        Measurements {
            driver: self,
            primed: false,
        }
    }

    /// The configuration currently mirrored in memory.
    pub fn config(&self) -> SensorConfig {
        self.config
    }

    /// The bus address this driver is bound to.
    pub fn address(&self) -> DeviceAddress {
        self.address
    }

    /// Consumes the driver, returning the bus handle and delay provider.
    pub fn release(self) -> (BUS, D) {
        (self.bus, self.delay)
    }

    async fn apply_config(&mut self) -> Result<(), Bh1750Error<BUS::Error>> {
        self.write_measurement_time().await?;
        self.write_measurement_mode().await
    }

    async fn write_measurement_time(&mut self) -> Result<(), Bh1750Error<BUS::Error>> {
        let measurement_time = self.config.measurement_time.get();

        self.bus
            .write(
                self.address,
                &[opcode::measurement_time_high_frame(measurement_time)],
            )
            .await?;
        self.bus
            .write(
                self.address,
                &[opcode::measurement_time_low_frame(measurement_time)],
            )
            .await?;
        Ok(())
    }

    async fn write_measurement_mode(&mut self) -> Result<(), Bh1750Error<BUS::Error>> {
        self.bus
            .write(
                self.address,
                &[opcode::measurement_frame(self.config.mode, self.config.resolution)],
            )
            .await?;
        self.delay
            .delay_ms(timing::settle_delay_ms(self.config.resolution))
            .await;
        Ok(())
    }
}

/// Lazy, unbounded sequence of measurements, created by
/// [`AsyncBh1750::measurements`].
///
/// Not an `Iterator` (the pulls await); drive it manually:
///
/// ```ignore
/// let mut readings = driver.measurements();
/// loop {
///     let lux = readings.next().await?;
///     // ...
/// }
/// ```
#[derive(Debug)]
pub struct Measurements<'a, BUS, D>
where
    BUS: Bh1750BusAsync,
    D: Bh1750DelayAsync,
{
    driver: &'a mut AsyncBh1750<BUS, D>,
    primed: bool,
}

impl<BUS, D> Measurements<'_, BUS, D>
where
    BUS: Bh1750BusAsync,
    D: Bh1750DelayAsync,
{
    /// Pulls the next measurement, pacing continuous-mode reads by the
    /// conversion interval exactly as the blocking sequence does.
    pub async fn next(&mut self) -> Result<Lux, Bh1750Error<BUS::Error>> {
        if self.primed && self.driver.config.mode == MeasurementMode::Continuous {
            let interval = timing::pacing_delay_ms(&self.driver.config);
            self.driver.delay.delay_ms(interval).await;
        }
        self.primed = true;

        self.driver.measurement().await
    }
}
