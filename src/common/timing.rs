// src/common/timing.rs

use super::config::{MeasurementTime, Resolution, SensorConfig};

// Note: all values are nominal worst-case times in milliseconds at the
// default measurement time. The datasheet quotes 16 ms typ. for a low
// resolution conversion and 120 ms typ. / 180 ms max. for high resolution;
// delays here use the worst case so the data register is guaranteed valid.

// === Post-trigger settle delays (datasheet "Measurement Time") ===

/// Wait after triggering a low resolution conversion.
pub const SETTLE_LOW_RES_MS: u32 = 24;
/// Wait after triggering a high / high2 resolution conversion.
pub const SETTLE_HIGH_RES_MS: u32 = 180;

// === Continuous-mode pacing (typical conversion intervals) ===

/// Base interval between low resolution continuous conversions.
pub const PACING_BASE_LOW_RES_MS: u32 = 16;
/// Base interval between high / high2 resolution continuous conversions.
pub const PACING_BASE_HIGH_RES_MS: u32 = 120;

/// Delay required after a mode-frame write before the data register holds
/// valid data.
#[inline]
pub const fn settle_delay_ms(resolution: Resolution) -> u32 {
    if matches!(resolution, Resolution::Low) {
        SETTLE_LOW_RES_MS
    } else {
        SETTLE_HIGH_RES_MS
    }
}

/// Delay between consecutive continuous-mode reads.
///
/// The conversion interval scales linearly with the configured measurement
/// time relative to the default; rounded up so the sensor is never read
/// early.
#[inline]
pub const fn pacing_delay_ms(config: &SensorConfig) -> u32 {
    let base = if matches!(config.resolution, Resolution::Low) {
        PACING_BASE_LOW_RES_MS
    } else {
        PACING_BASE_HIGH_RES_MS
    };
    (base * config.measurement_time.get() as u32).div_ceil(MeasurementTime::DEFAULT.get() as u32)
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::config::MeasurementMode;

    fn config(resolution: Resolution, measurement_time: u8) -> SensorConfig {
        SensorConfig {
            mode: MeasurementMode::Continuous,
            resolution,
            measurement_time: MeasurementTime::new(measurement_time).unwrap(),
        }
    }

    #[test]
    fn test_settle_delay_by_resolution() {
        assert_eq!(settle_delay_ms(Resolution::Low), 24);
        assert_eq!(settle_delay_ms(Resolution::High), 180);
        assert_eq!(settle_delay_ms(Resolution::High2), 180);
    }

    #[test]
    fn test_pacing_at_default_measurement_time() {
        assert_eq!(pacing_delay_ms(&config(Resolution::High, 69)), 120);
        assert_eq!(pacing_delay_ms(&config(Resolution::High2, 69)), 120);
        assert_eq!(pacing_delay_ms(&config(Resolution::Low, 69)), 16);
    }

    #[test]
    fn test_pacing_scales_with_measurement_time() {
        // ceil(16 * 31 / 69) = 8
        assert_eq!(pacing_delay_ms(&config(Resolution::Low, 31)), 8);
        // ceil(120 * 31 / 69) = 54
        assert_eq!(pacing_delay_ms(&config(Resolution::High, 31)), 54);
        // ceil(16 * 254 / 69) = 59
        assert_eq!(pacing_delay_ms(&config(Resolution::Low, 254)), 59);
        // ceil(120 * 254 / 69) = 442
        assert_eq!(pacing_delay_ms(&config(Resolution::High, 254)), 442);
    }
}
