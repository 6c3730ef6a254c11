// src/common/address.rs

use super::error::Bh1750Error;
use core::convert::TryFrom;
use core::fmt;

/// Seven-bit bus address of a BH1750 device.
///
/// The sensor's ADDR pin selects one of exactly two addresses, so anything
/// else is rejected at construction.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceAddress(u8);

impl DeviceAddress {
    /// `0x23`: ADDR pin tied to GND or left floating.
    pub const LOW: DeviceAddress = DeviceAddress(0x23);
    /// `0x5C`: ADDR pin tied to VCC.
    pub const HIGH: DeviceAddress = DeviceAddress(0x5C);

    /// Creates a new `DeviceAddress` if the given byte is an address the
    /// sensor can actually occupy.
    ///
    /// Returns `Result<Self, Bh1750Error<()>>` because validation itself
    /// cannot cause a bus error.
    pub fn new(address: u8) -> Result<Self, Bh1750Error<()>> {
        if Self::is_valid_address(address) {
            Ok(DeviceAddress(address))
        } else {
            Err(Bh1750Error::InvalidAddress(address))
        }
    }

    /// Creates a `DeviceAddress` without validating it.
    ///
    /// # Safety
    ///
    /// The caller must ensure the byte is an address the attached device
    /// responds to; every bus transaction the driver issues targets it.
    pub const unsafe fn new_unchecked(address: u8) -> Self {
        DeviceAddress(address)
    }

    #[inline]
    pub const fn as_byte(&self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_valid_address(address: u8) -> bool {
        matches!(address, 0x23 | 0x5C)
    }
}

impl Default for DeviceAddress {
    fn default() -> Self {
        Self::LOW
    }
}

impl TryFrom<u8> for DeviceAddress {
    type Error = Bh1750Error<()>;

    /// Attempts to convert a raw byte into a `DeviceAddress`.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DeviceAddress> for u8 {
    fn from(value: DeviceAddress) -> Self {
        value.0
    }
}

impl fmt::Display for DeviceAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}
