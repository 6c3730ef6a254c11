// src/lib.rs

//! Platform-agnostic driver for the BH1750 digital ambient light sensor.
//!
//! The BH1750 sits on a two-wire register bus (I2C) and reports illuminance
//! as a 16-bit big-endian count. This crate owns the sensor's configuration
//! state (measurement mode, resolution, measurement-time register), encodes
//! it into register writes, converts raw counts into lux, and paces
//! continuous reads according to the sensor's settling time.
//!
//! The bus and delay primitives are abstracted behind the [`Bh1750Bus`] and
//! [`Bh1750Delay`] traits. With the `impl-hal` feature, any
//! `embedded-hal` 1.0 `I2c`/`DelayNs` implementation satisfies them
//! directly; the `async` feature adds async twins and an `AsyncBh1750`
//! driver over `embedded-hal-async`.
//!
//! The datasheet can be found at
//! <https://components101.com/sites/default/files/component_datasheet/BH1750.pdf>
//!
//! ## Unit tests
//! The HAL adapter tests need the adapter impls compiled in:
//! ```sh
//! cargo test --features impl-hal
//! ```

// The unit tests rely on std (mock HALs, float asserts), so no_std applies
// to non-test builds only.
#![cfg_attr(not(test), no_std)]

pub mod common;
pub mod driver;

// Re-export key types for convenience
pub use common::Bh1750Error;
pub use common::DeviceAddress;
pub use common::Lux;
pub use common::{Bh1750Bus, Bh1750Delay};
pub use common::{MeasurementMode, MeasurementTime, Resolution, SensorConfig};
pub use driver::Bh1750;

#[cfg(feature = "async")]
pub use common::{Bh1750BusAsync, Bh1750DelayAsync};
#[cfg(feature = "async")]
pub use driver::AsyncBh1750;
