//! Driver for the MAX5417/MAX5418/MAX5419 256-tap I2C digital potentiometers.
//!
//! The chips take a raw 8-bit wiper code; this crate lets you work in ohms
//! instead, and exposes the chip's non-volatile memory commands.
//!
//! # Architecture
//!
//! - **`codec`** — [`ResistanceScale`], the pure resistance ↔ code mapping
//!   (clamping, rounding, W-to-L / W-to-H).
//! - **`driver`** (crate-private) — the single register-write primitive.
//! - **[`Max541x`]** / **[`Max541xAsync`]** (public) — blocking and async
//!   drivers over `embedded-hal` / `embedded-hal-async`.
//! - **[`Unconfigured`]** — holds the bus until the device configuration is
//!   known.
//!
//! # Quick start
//!
//! ```no_run
//! use max541x::{address_from_pins, Max541x, Model, WiperMode};
//!
//! # fn example<I2C: embedded_hal::i2c::I2c>(i2c: I2C) -> Result<(), max541x::Max541xError<I2C::Error>> {
//! let mut pot = Max541x::new(i2c, address_from_pins(0b001), Model::Max5417, WiperMode::WiperToLow);
//!
//! pot.set_resistance(10_000)?;
//! pot.commit_to_nonvolatile()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Status codes
//!
//! Operations return `Result<(), Max541xError<E>>`. Callers that want the
//! numeric `0..=4` status of the two-wire transport use
//! [`TransferStatus::of`].
//!
//! # Features
//!
//! - **`defmt`** — Enable [`defmt::Format`] implementations and trace
//!   logging of every register write.

#![cfg_attr(not(test), no_std)]

pub use asynch::Max541xAsync;
pub use codec::{ResistanceScale, MIN_REQUEST_OHMS};
pub use config::{DeviceConfig, Model, WiperMode};
pub use error::Max541xError;
pub use pending::Unconfigured;
pub use potentiometer::Max541x;
pub use registers::{address_from_pins, Register, BASE_ADDRESS, TAPS, WIPER_RESISTANCE_OHMS};
pub use status::TransferStatus;

mod asynch;
mod codec;
mod config;
mod driver;
mod error;
mod pending;
mod potentiometer;
mod registers;
mod status;
