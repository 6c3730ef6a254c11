// src/common/types.rs

use super::config::{MeasurementTime, Resolution, SensorConfig};

/// Scaling constant from the datasheet: counts per lux at the default
/// measurement time and high resolution.
const COUNTS_PER_LUX: f32 = 1.2;

/// An illuminance value in lux.
///
/// Derived from a raw sensor count and the configuration active at the
/// moment of the read; recomputed fresh per read, never stored by the
/// driver.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Lux(f32);

impl Lux {
    /// Converts a raw big-endian illuminance count into lux under the
    /// given configuration.
    ///
    /// The denominator is anchored to the *default* measurement time
    /// ([`MeasurementTime::DEFAULT`]) — that constant is the calibration
    /// reference point, regardless of the configured value. `High2`
    /// resolution halves the result.
    pub fn from_raw(raw: u16, config: &SensorConfig) -> Self {
        let lux = f32::from(raw)
            / (COUNTS_PER_LUX
                * (f32::from(MeasurementTime::DEFAULT.get())
                    / f32::from(config.measurement_time.get())));

        match config.resolution {
            Resolution::High2 => Lux(lux / 2.0),
            _ => Lux(lux),
        }
    }

    /// Returns the value as f32.
    #[inline]
    pub const fn as_f32(self) -> f32 {
        self.0
    }
}

impl From<Lux> for f32 {
    fn from(value: Lux) -> Self {
        value.0
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::config::MeasurementMode;

    fn config(resolution: Resolution, measurement_time: u8) -> SensorConfig {
        SensorConfig {
            mode: MeasurementMode::OneTime,
            resolution,
            measurement_time: MeasurementTime::new(measurement_time).unwrap(),
        }
    }

    fn assert_close(actual: Lux, expected: f32) {
        assert!(
            (actual.as_f32() - expected).abs() < 0.01,
            "expected ~{}, got {}",
            expected,
            actual.as_f32()
        );
    }

    #[test]
    fn test_default_configuration_conversion() {
        // 1000 / (1.2 * (69/69)) = 833.33...
        assert_close(Lux::from_raw(1000, &config(Resolution::High, 69)), 833.3333);
    }

    #[test]
    fn test_high2_halves_the_result() {
        let cfg_high = config(Resolution::High, 69);
        let cfg_high2 = config(Resolution::High2, 69);

        for raw in [0u16, 1, 1000, 0xFFFF] {
            let full = Lux::from_raw(raw, &cfg_high).as_f32();
            let half = Lux::from_raw(raw, &cfg_high2).as_f32();
            assert!((half - full / 2.0).abs() < f32::EPSILON * full.max(1.0));
        }
        assert_close(Lux::from_raw(1000, &cfg_high2), 416.6667);
    }

    #[test]
    fn test_denominator_uses_live_measurement_time() {
        // 1000 / (1.2 * (69/138)) = 1666.66...
        assert_close(Lux::from_raw(1000, &config(Resolution::High, 138)), 1666.6667);
        // 1000 / (1.2 * (69/31)) = 374.39...
        assert_close(Lux::from_raw(1000, &config(Resolution::High, 31)), 374.3961);
    }

    #[test]
    fn test_low_resolution_uses_plain_conversion() {
        assert_close(Lux::from_raw(1000, &config(Resolution::Low, 69)), 833.3333);
    }

    #[test]
    fn test_conversion_monotonic_in_raw_count() {
        for cfg in [
            config(Resolution::High, 69),
            config(Resolution::High2, 31),
            config(Resolution::Low, 254),
        ] {
            let mut previous = Lux::from_raw(0, &cfg);
            for raw in (0u16..=0xFFFF).step_by(257) {
                let current = Lux::from_raw(raw, &cfg);
                assert!(current >= previous);
                previous = current;
            }
        }
    }

    #[test]
    fn test_zero_raw_count_is_zero_lux() {
        assert_eq!(Lux::from_raw(0, &config(Resolution::High, 69)).as_f32(), 0.0);
    }
}
