// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod address;
pub mod config;
pub mod error;
pub mod hal_traits;
pub mod opcode;
pub mod timing;
pub mod types;

// --- Re-export key types/traits for easier access ---

// From address.rs
pub use address::DeviceAddress;

// From config.rs
pub use config::{MeasurementMode, MeasurementTime, Resolution, SensorConfig};

// From error.rs
pub use error::Bh1750Error;

// From hal_traits.rs
pub use hal_traits::{Bh1750Bus, Bh1750Delay}; // Core sync traits

// From types.rs
pub use types::Lux;

// From opcode.rs / timing.rs (constants - users access via common::opcode::*,
// common::timing::*)

// --- Feature-gated re-exports ---

// Async traits (from hal_traits.rs)
#[cfg(feature = "async")]
pub use hal_traits::{Bh1750BusAsync, Bh1750DelayAsync};
