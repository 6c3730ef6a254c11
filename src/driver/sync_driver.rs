// src/driver/sync_driver.rs

use crate::common::{
    address::DeviceAddress,
    config::{MeasurementMode, MeasurementTime, Resolution, SensorConfig},
    error::Bh1750Error,
    hal_traits::{Bh1750Bus, Bh1750Delay},
    opcode, timing,
    types::Lux,
};

/// Blocking driver for a single BH1750 device.
///
/// Owns the bus handle, the delay provider, and the mirror of the device's
/// register configuration. All bus I/O and settle delays execute inline on
/// the calling thread; callers sharing a driver across threads must
/// serialize access themselves.
#[derive(Debug)]
pub struct Bh1750<BUS, D> {
    bus: BUS,
    delay: D,
    address: DeviceAddress,
    config: SensorConfig,
}

impl<BUS, D> Bh1750<BUS, D>
where
    BUS: Bh1750Bus,
    D: Bh1750Delay,
{
    /// Creates a driver bound to `address` and writes the default
    /// configuration (one-time mode, high resolution, measurement time 69)
    /// to the device so it matches the in-memory state.
    pub fn new(address: DeviceAddress, bus: BUS, delay: D) -> Result<Self, Bh1750Error<BUS::Error>> {
        let mut driver = Bh1750 {
            bus,
            delay,
            address,
            config: SensorConfig::default(),
        };
        driver.apply_config()?;
        Ok(driver)
    }

    /// Reconfigures the sensor.
    ///
    /// `measurement_time` must lie within
    /// [`MeasurementTime::MIN`]`..=`[`MeasurementTime::MAX`]; an
    /// out-of-range value fails before any bus write, leaving the previous
    /// configuration active in memory and on the device. On success the
    /// in-memory configuration is swapped as one value and all three
    /// registers are rewritten (timing high frame, timing low frame, mode
    /// frame).
    pub fn configure(
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
        self.apply_config()
    }

    /// Clears the device's illuminance data register. Only accepted while
    /// the device is powered on. No configuration state changes.
    pub fn reset(&mut self) -> Result<(), Bh1750Error<BUS::Error>> {
        self.bus.write(self.address, &[opcode::RESET])?;
        Ok(())
    }

    /// Powers on the device.
    pub fn power_on(&mut self) -> Result<(), Bh1750Error<BUS::Error>> {
        self.bus.write(self.address, &[opcode::POWER_ON])?;
        Ok(())
    }

    /// Powers off the device.
    pub fn power_off(&mut self) -> Result<(), Bh1750Error<BUS::Error>> {
        self.bus.write(self.address, &[opcode::POWER_DOWN])?;
        Ok(())
    }

    /// Performs one measurement and returns the illuminance in lux.
    ///
    /// In one-time mode this re-writes the mode frame first (the device
    /// powers down after each conversion, so every reading needs an
    /// explicit re-trigger) and waits out the settle delay. In continuous
    /// mode the device is assumed to hold fresh data at its conversion
    /// cadence and is read directly.
    pub fn measurement(&mut self) -> Result<Lux, Bh1750Error<BUS::Error>> {
        if self.config.mode == MeasurementMode::OneTime {
            self.write_measurement_mode()?;
        }

        let mut frame = [0u8; 2];
        self.bus.read_into(self.address, &mut frame)?;
        let raw = u16::from_be_bytes(frame);

        Ok(Lux::from_raw(raw, &self.config))
    }

    /// Returns an unbounded lazy sequence of measurements.
    ///
    /// Each pull performs one [`measurement`](Self::measurement) and yields
    /// its result. In continuous mode every pull after the first waits out
    /// the conversion interval before reading, so the consumer never sees
    /// stale data re-read mid-conversion. The sequence never ends on its
    /// own; the consumer cancels by ceasing to pull.
    pub fn measurements(&mut self) -> Measurements<'_, BUS, D> {
        Measurements {
            driver: self,
            primed: false,
        }
    }

    /// The configuration currently mirrored in memory (and, barring a bus
    /// failure mid-reconfigure, active on the device).
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

    /// Writes the full register sequence for the current configuration:
    /// timing registers first, then the mode/resolution register.
    fn apply_config(&mut self) -> Result<(), Bh1750Error<BUS::Error>> {
        self.write_measurement_time()?;
        self.write_measurement_mode()
    }

    /// Writes the measurement-time register as two single-byte
    /// transactions, high frame first.
    fn write_measurement_time(&mut self) -> Result<(), Bh1750Error<BUS::Error>> {
        let measurement_time = self.config.measurement_time.get();

        self.bus.write(
            self.address,
            &[opcode::measurement_time_high_frame(measurement_time)],
        )?;
        self.bus.write(
            self.address,
            &[opcode::measurement_time_low_frame(measurement_time)],
        )?;
        Ok(())
    }

    /// Writes the mode frame (triggering a conversion in one-time mode)
    /// and blocks until the data register is guaranteed valid.
    fn write_measurement_mode(&mut self) -> Result<(), Bh1750Error<BUS::Error>> {
        self.bus.write(
            self.address,
            &[opcode::measurement_frame(self.config.mode, self.config.resolution)],
        )?;
        self.delay
            .delay_ms(timing::settle_delay_ms(self.config.resolution));
        Ok(())
    }
}

/// Lazy, unbounded sequence of measurements, created by
/// [`Bh1750::measurements`].
#[derive(Debug)]
pub struct Measurements<'a, BUS, D>
where
    BUS: Bh1750Bus,
    D: Bh1750Delay,
{
    driver: &'a mut Bh1750<BUS, D>,
    primed: bool,
}

impl<BUS, D> Iterator for Measurements<'_, BUS, D>
where
    BUS: Bh1750Bus,
    D: Bh1750Delay,
{
    type Item = Result<Lux, Bh1750Error<BUS::Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        // Continuous mode: the device free-runs, so pace every pull after
        // the first by the conversion interval. One-time mode needs no
        // extra pacing; the re-trigger settle delay inside measurement()
        // already paces it.
        if self.primed && self.driver.config.mode == MeasurementMode::Continuous {
            let interval = timing::pacing_delay_ms(&self.driver.config);
            self.driver.delay.delay_ms(interval);
        }
        self.primed = true;

        Some(self.driver.measurement())
    }
}


// --- HAL adapter tests (need the adapter impls: --features impl-hal) ---
#[cfg(all(test, feature = "impl-hal"))]
mod hal_tests {
    use super::*;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    #[test]
    fn test_drives_embedded_hal_bus() {
        let expectations = [
            I2cTransaction::write(0x23, vec![0x42]),
            I2cTransaction::write(0x23, vec![0x65]),
            I2cTransaction::write(0x23, vec![0x20]),
            I2cTransaction::write(0x23, vec![0x20]),
            I2cTransaction::read(0x23, vec![0x03, 0xE8]),
        ];

        let mut driver =
            Bh1750::new(DeviceAddress::LOW, I2cMock::new(&expectations), NoopDelay::new())
                .unwrap();

        let lux = driver.measurement().unwrap();
        assert!((lux.as_f32() - 833.3333).abs() < 0.01);

        let (mut i2c, _delay) = driver.release();
        i2c.done();
    }
}
