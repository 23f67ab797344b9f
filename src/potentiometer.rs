//! Blocking interface for the MAX5417/MAX5418/MAX5419.
//!
//! [`Max541x`] converts resistances to wiper codes through
//! [`ResistanceScale`] and commits them with single I2C writes. It keeps a
//! local copy of the last code sent to the volatile register, because the
//! chip cannot be read back.

use embedded_hal::i2c::I2c;

use crate::codec::ResistanceScale;
use crate::config::{DeviceConfig, Model, WiperMode};
use crate::driver::RegisterBus;
use crate::error::Max541xError;
use crate::registers::Register;

/// Blocking MAX541x driver.
///
/// # Cached code
///
/// [`resistance()`](Self::resistance) reports what the driver last
/// *commanded*, not what the chip holds. The two can diverge:
///
/// - a volatile write that fails on the bus still updates the cache;
/// - [`recall_from_nonvolatile()`](Self::recall_from_nonvolatile) changes the
///   chip's active value without touching the cache.
///
/// # Example
///
/// ```no_run
/// use max541x::{Max541x, Model, WiperMode, BASE_ADDRESS};
///
/// # fn example(i2c: impl embedded_hal::i2c::I2c) {
/// let mut pot = Max541x::new(i2c, BASE_ADDRESS, Model::Max5417, WiperMode::WiperToLow);
/// pot.set_resistance(25_000).unwrap();
/// assert_eq!(pot.resistance(), 24_984);
/// # }
/// ```
pub struct Max541x<I2C> {
    bus: RegisterBus<I2C>,
    config: DeviceConfig,
    scale: ResistanceScale,
    code: u8,
}

impl<I2C> Max541x<I2C>
where
    I2C: I2c,
{
    /// Create a driver. No I2C traffic is generated; the cached code starts at 0.
    ///
    /// # Arguments
    /// * `i2c` — I2C peripheral (takes ownership for exclusive access)
    /// * `address` — 7-bit I2C device address (see [`address_from_pins`](crate::address_from_pins))
    /// * `model` — chip variant, selects the full-scale resistance
    /// * `mode` — wiper terminal the load is connected across
    pub fn new(i2c: I2C, address: u8, model: Model, mode: WiperMode) -> Self {
        Self::from_config(i2c, DeviceConfig::new(address, model, mode))
    }

    pub fn from_config(i2c: I2C, config: DeviceConfig) -> Self {
        Self {
            bus: RegisterBus::new(i2c, config.address),
            scale: ResistanceScale::new(config.model, config.mode),
            config,
            code: 0,
        }
    }

    // -----------------------------------------------------------------------
    // Resistance control
    // -----------------------------------------------------------------------

    /// Set the potentiometer to the code closest to `ohms`.
    ///
    /// Requests outside `[750 Ω, full scale]` are clamped silently.
    ///
    /// The cached code is updated **before** the transfer and is kept even if
    /// the transfer fails, so after an error [`resistance()`](Self::resistance)
    /// may not match the chip.
    ///
    /// # Errors
    /// * [`Max541xError::I2c`] on communication failure
    pub fn set_resistance(&mut self, ohms: u32) -> Result<(), Max541xError<I2C::Error>> {
        let code = self.scale.code_for(ohms);
        #[cfg(feature = "defmt")]
        if self.scale.clamp(ohms) != ohms {
            defmt::debug!("MAX541x: {=u32} ohms out of range, clamped", ohms);
        }
        self.write(Register::Volatile.addr(), code)
    }

    /// Resistance corresponding to the cached code, in ohms.
    ///
    /// Pure computation; no bus activity.
    pub fn resistance(&self) -> u32 {
        self.scale.ohms_for(self.code)
    }

    /// Write a raw code to the volatile register. Same caching rules as
    /// [`set_resistance()`](Self::set_resistance).
    pub fn set_code(&mut self, code: u8) -> Result<(), Max541xError<I2C::Error>> {
        self.write(Register::Volatile.addr(), code)
    }

    // -----------------------------------------------------------------------
    // Non-volatile memory
    // -----------------------------------------------------------------------

    /// Write a raw code to the non-volatile register.
    ///
    /// Code-level only; the cached code is not affected.
    pub fn write_nonvolatile(&mut self, code: u8) -> Result<(), Max541xError<I2C::Error>> {
        self.write(Register::Nonvolatile.addr(), code)
    }

    /// Copy the active (volatile) value into non-volatile memory.
    pub fn commit_to_nonvolatile(&mut self) -> Result<(), Max541xError<I2C::Error>> {
        self.write(Register::VolatileToNonvolatile.addr(), 0)
    }

    /// Load the non-volatile value into the active register.
    ///
    /// The cached code is **not** updated: the chip cannot be read back, so
    /// after this call [`resistance()`](Self::resistance) still reports the
    /// last value this driver commanded.
    pub fn recall_from_nonvolatile(&mut self) -> Result<(), Max541xError<I2C::Error>> {
        self.write(Register::NonvolatileToVolatile.addr(), 0)
    }

    // -----------------------------------------------------------------------
    // Raw access
    // -----------------------------------------------------------------------

    /// Write `data` to `register` in one transaction.
    ///
    /// Updates the cached code if and only if `register` is the volatile
    /// register, before the transfer is attempted.
    pub fn write(&mut self, register: u8, data: u8) -> Result<(), Max541xError<I2C::Error>> {
        if register == Register::Volatile.addr() {
            self.code = data;
        }
        self.bus.write_register(register, data)
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// Last code sent to the volatile register.
    pub fn code(&self) -> u8 {
        self.code
    }

    pub fn config(&self) -> DeviceConfig {
        self.config
    }

    pub fn address(&self) -> u8 {
        self.bus.address()
    }

    pub fn model(&self) -> Model {
        self.config.model
    }

    pub fn mode(&self) -> WiperMode {
        self.config.mode
    }

    pub fn scale(&self) -> ResistanceScale {
        self.scale
    }

    /// Give the I2C peripheral back.
    pub fn release(self) -> I2C {
        self.bus.release()
    }
}
