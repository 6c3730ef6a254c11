// src/driver/mod.rs

// Blocking driver
pub mod sync_driver;

// Asynchronous driver (feature-gated)
#[cfg(feature = "async")]
pub mod async_driver;

// Re-export the public driver structs
pub use sync_driver::{Bh1750, Measurements};

#[cfg(feature = "async")]
pub use async_driver::AsyncBh1750;
