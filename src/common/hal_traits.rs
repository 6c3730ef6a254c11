// src/common/hal_traits.rs

use super::address::DeviceAddress;
use core::fmt::Debug;

/// Abstraction for the register bus the sensor is attached to.
///
/// Note: This could potentially be replaced by directly requiring
/// `embedded_hal::i2c::I2c` if embedded-hal v1 is mandated; the `impl-hal`
/// feature bridges the two instead.
pub trait Bh1750Bus {
    /// Associated error type for bus errors.
    type Error: Debug;

    /// Sends the given bytes as a single transaction to the device at
    /// `address`.
    fn write(&mut self, address: DeviceAddress, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Fills `buffer` from a single read transaction at `address`.
    fn read_into(&mut self, address: DeviceAddress, buffer: &mut [u8])
        -> Result<(), Self::Error>;
}

/// Abstraction for the delay operations the sensor's settling times require.
pub trait Bh1750Delay {
    /// Blocks for at least the specified number of milliseconds.
    fn delay_ms(&mut self, ms: u32);
}

/// Abstraction for asynchronous bus access (requires the 'async' feature).
#[cfg(feature = "async")]
#[allow(async_fn_in_trait)]
pub trait Bh1750BusAsync {
    /// Associated error type for bus errors.
    type Error: Debug;

    /// Asynchronously sends the given bytes as a single transaction.
    async fn write(&mut self, address: DeviceAddress, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Asynchronously fills `buffer` from a single read transaction.
    async fn read_into(
        &mut self,
        address: DeviceAddress,
        buffer: &mut [u8],
    ) -> Result<(), Self::Error>;
}

/// Asynchronous delay provider (requires the 'async' feature).
#[cfg(feature = "async")]
#[allow(async_fn_in_trait)]
pub trait Bh1750DelayAsync {
    /// Waits for at least the specified number of milliseconds.
    async fn delay_ms(&mut self, ms: u32);
}

// --- embedded-hal 1.0 adapters (feature "impl-hal") ---
// Any HAL I2C peripheral / delay provider satisfies the bus and delay
// traits directly.

#[cfg(feature = "impl-hal")]
impl<T> Bh1750Bus for T
where
    T: embedded_hal::i2c::I2c,
{
    type Error = T::Error;

    fn write(&mut self, address: DeviceAddress, bytes: &[u8]) -> Result<(), Self::Error> {
        embedded_hal::i2c::I2c::write(self, address.as_byte(), bytes)
    }

    fn read_into(
        &mut self,
        address: DeviceAddress,
        buffer: &mut [u8],
    ) -> Result<(), Self::Error> {
        embedded_hal::i2c::I2c::read(self, address.as_byte(), buffer)
    }
}

#[cfg(feature = "impl-hal")]
impl<T> Bh1750Delay for T
where
    T: embedded_hal::delay::DelayNs,
{
    fn delay_ms(&mut self, ms: u32) {
        embedded_hal::delay::DelayNs::delay_ms(self, ms)
    }
}

#[cfg(all(feature = "async", feature = "impl-hal"))]
impl<T> Bh1750BusAsync for T
where
    T: embedded_hal_async::i2c::I2c,
{
    type Error = T::Error;

    async fn write(&mut self, address: DeviceAddress, bytes: &[u8]) -> Result<(), Self::Error> {
        embedded_hal_async::i2c::I2c::write(self, address.as_byte(), bytes).await
    }

    async fn read_into(
        &mut self,
        address: DeviceAddress,
        buffer: &mut [u8],
    ) -> Result<(), Self::Error> {
        embedded_hal_async::i2c::I2c::read(self, address.as_byte(), buffer).await
    }
}

#[cfg(all(feature = "async", feature = "impl-hal"))]
impl<T> Bh1750DelayAsync for T
where
    T: embedded_hal_async::delay::DelayNs,
{
    async fn delay_ms(&mut self, ms: u32) {
        embedded_hal_async::delay::DelayNs::delay_ms(self, ms).await
    }
}
