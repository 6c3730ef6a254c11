// src/common/config.rs

use super::error::Bh1750Error;
use core::convert::TryFrom;

/// How the sensor produces conversions.
///
/// The discriminants are the device's own protocol codes (upper nibble of
/// the mode frame), not ordinals.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum MeasurementMode {
    /// The sensor free-runs, producing a new reading every conversion
    /// interval without re-triggering.
    Continuous = 1,
    /// The sensor performs a single conversion per explicit trigger, then
    /// powers down until re-triggered.
    OneTime = 2,
}

impl MeasurementMode {
    /// Device protocol code for this mode.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// Measurement resolution, trading precision against conversion speed.
///
/// Discriminants are the device's protocol codes (lower nibble of the mode
/// frame).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Resolution {
    /// 1 lx per count.
    High = 0,
    /// 0.5 lx per count; results are halved relative to [`Resolution::High`].
    High2 = 1,
    /// 4 lx per count, fastest conversion.
    Low = 2,
}

impl Resolution {
    /// Device protocol code for this resolution.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// Value of the sensor's measurement-time register (MTreg).
///
/// Scales both the conversion formula's denominator and the real-world
/// settling time between trigger and valid data. Invariant: always within
/// `MIN..=MAX`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MeasurementTime(u8);

impl MeasurementTime {
    pub const MIN: u8 = 31;
    pub const MAX: u8 = 254;
    /// Datasheet default, also the calibration reference point of the lux
    /// conversion.
    pub const DEFAULT: MeasurementTime = MeasurementTime(69);

    /// Creates a new `MeasurementTime` if the value lies within the
    /// register's valid range.
    pub fn new(value: u8) -> Result<Self, Bh1750Error<()>> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(MeasurementTime(value))
        } else {
            Err(Bh1750Error::MeasurementTimeOutOfRange(value))
        }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for MeasurementTime {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for MeasurementTime {
    type Error = Bh1750Error<()>;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// The sensor's full register configuration.
///
/// Owned by the driver and swapped as a single value; the register-write
/// sequence rewrites all three registers together.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorConfig {
    pub mode: MeasurementMode,
    pub resolution: Resolution,
    pub measurement_time: MeasurementTime,
}

impl Default for SensorConfig {
    /// Power-up defaults: one-time mode, high resolution, measurement
    /// time 69.
    fn default() -> Self {
        SensorConfig {
            mode: MeasurementMode::OneTime,
            resolution: Resolution::High,
            measurement_time: MeasurementTime::DEFAULT,
        }
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_codes() {
        assert_eq!(MeasurementMode::Continuous.code(), 1);
        assert_eq!(MeasurementMode::OneTime.code(), 2);
    }

    #[test]
    fn test_resolution_codes() {
        assert_eq!(Resolution::High.code(), 0);
        assert_eq!(Resolution::High2.code(), 1);
        assert_eq!(Resolution::Low.code(), 2);
    }

    #[test]
    fn test_measurement_time_range() {
        assert!(MeasurementTime::new(31).is_ok());
        assert!(MeasurementTime::new(69).is_ok());
        assert!(MeasurementTime::new(254).is_ok());

        assert!(matches!(
            MeasurementTime::new(30),
            Err(Bh1750Error::MeasurementTimeOutOfRange(30))
        ));
        assert!(matches!(
            MeasurementTime::new(255),
            Err(Bh1750Error::MeasurementTimeOutOfRange(255))
        ));
        assert!(matches!(
            MeasurementTime::new(0),
            Err(Bh1750Error::MeasurementTimeOutOfRange(0))
        ));
    }

    #[test]
    fn test_measurement_time_default() {
        assert_eq!(MeasurementTime::default().get(), 69);
        assert_eq!(MeasurementTime::DEFAULT, MeasurementTime::new(69).unwrap());
    }

    #[test]
    fn test_try_from_byte() {
        assert_eq!(MeasurementTime::try_from(100).unwrap().get(), 100);
        assert!(MeasurementTime::try_from(20).is_err());
    }

    #[test]
    fn test_default_config() {
        let config = SensorConfig::default();
        assert_eq!(config.mode, MeasurementMode::OneTime);
        assert_eq!(config.resolution, Resolution::High);
        assert_eq!(config.measurement_time.get(), 69);
    }
}
