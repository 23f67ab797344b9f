//! Async interface for the MAX5417/MAX5418/MAX5419.
//!
//! [`Max541xAsync`] mirrors [`Max541x`](crate::Max541x) method for method on
//! top of `embedded-hal-async`, for use from Embassy tasks. Each call still
//! issues exactly one I2C transaction.

use embedded_hal_async::i2c::I2c;

use crate::codec::ResistanceScale;
use crate::config::{DeviceConfig, Model, WiperMode};
use crate::driver::RegisterBus;
use crate::error::Max541xError;
use crate::registers::Register;

/// Async MAX541x driver.
///
/// The cached code follows the same rules as the blocking driver: it is
/// updated before every volatile write (even one that then fails) and is
/// left alone by [`recall_from_nonvolatile()`](Self::recall_from_nonvolatile).
///
/// # Example
///
/// ```no_run
/// use max541x::{Max541xAsync, Model, WiperMode, BASE_ADDRESS};
///
/// # async fn example(i2c: impl embedded_hal_async::i2c::I2c) {
/// let mut pot = Max541xAsync::new(i2c, BASE_ADDRESS, Model::Max5418, WiperMode::WiperToHigh);
/// pot.set_resistance(47_000).await.unwrap();
/// pot.commit_to_nonvolatile().await.unwrap();
/// # }
/// ```
pub struct Max541xAsync<I2C> {
    bus: RegisterBus<I2C>,
    config: DeviceConfig,
    scale: ResistanceScale,
    code: u8,
}

impl<I2C> Max541xAsync<I2C>
where
    I2C: I2c,
{
    /// Create a driver. No I2C traffic is generated; the cached code starts at 0.
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

    /// Set the potentiometer to the code closest to `ohms`, clamping
    /// silently. The cached code is kept even if the transfer fails.
    pub async fn set_resistance(&mut self, ohms: u32) -> Result<(), Max541xError<I2C::Error>> {
        let code = self.scale.code_for(ohms);
        #[cfg(feature = "defmt")]
        if self.scale.clamp(ohms) != ohms {
            defmt::debug!("MAX541x: {=u32} ohms out of range, clamped", ohms);
        }
        self.write(Register::Volatile.addr(), code).await
    }

    /// Resistance corresponding to the cached code. No bus activity.
    pub fn resistance(&self) -> u32 {
        self.scale.ohms_for(self.code)
    }

    pub async fn set_code(&mut self, code: u8) -> Result<(), Max541xError<I2C::Error>> {
        self.write(Register::Volatile.addr(), code).await
    }

    pub async fn write_nonvolatile(&mut self, code: u8) -> Result<(), Max541xError<I2C::Error>> {
        self.write(Register::Nonvolatile.addr(), code).await
    }

    pub async fn commit_to_nonvolatile(&mut self) -> Result<(), Max541xError<I2C::Error>> {
        self.write(Register::VolatileToNonvolatile.addr(), 0).await
    }

    /// Load the non-volatile value into the active register. Does **not**
    /// update the cached code.
    pub async fn recall_from_nonvolatile(&mut self) -> Result<(), Max541xError<I2C::Error>> {
        self.write(Register::NonvolatileToVolatile.addr(), 0).await
    }

    /// Write `data` to `register`, caching it first if `register` is the
    /// volatile register.
    pub async fn write(&mut self, register: u8, data: u8) -> Result<(), Max541xError<I2C::Error>> {
        if register == Register::Volatile.addr() {
            self.code = data;
        }
        self.bus.write_register_async(register, data).await
    }

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

    pub fn release(self) -> I2C {
        self.bus.release()
    }
}
