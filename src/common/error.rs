// src/common/error.rs

/// Errors returned by BH1750 driver operations.
///
/// `E` is the error type of the underlying bus implementation; operations
/// that cannot touch the bus (pure validation) use `Bh1750Error<()>`.
#[derive(Debug, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bh1750Error<E = ()>
where
    E: core::fmt::Debug,
{
    /// Underlying bus error from the transport implementation.
    #[error("bus error: {0:?}")]
    Bus(E),

    /// Measurement-time register value outside the valid range 31..=254.
    ///
    /// Raised before any bus write occurs; neither the in-memory
    /// configuration nor the device state has changed.
    #[error("measurement time {0} outside valid range 31..=254")]
    MeasurementTimeOutOfRange(u8),

    /// Not one of the two bus addresses the sensor can occupy.
    #[error("invalid device address: {0:#04x}")]
    InvalidAddress(u8),
}

// Allow mapping from the underlying bus error so `?` converts directly.
impl<E: core::fmt::Debug> From<E> for Bh1750Error<E> {
    fn from(e: E) -> Self {
        Bh1750Error::Bus(e)
    }
}
