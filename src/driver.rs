//! Low-level MAX541x register access.
//!
//! The chip has no readable registers; every operation is a single
//! two-byte I2C write `[command, data]`. This module is crate-private —
//! consumers use [`Max541x`](crate::Max541x) or
//! [`Max541xAsync`](crate::Max541xAsync).

use embedded_hal::i2c::I2c;
use embedded_hal_async::i2c::I2c as AsyncI2c;

use crate::error::Max541xError;

/// Owns the I2C peripheral and the device address.
///
/// Both the blocking and the async transports are supported; which methods
/// exist depends on the bound `I2C` satisfies.
pub(crate) struct RegisterBus<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> RegisterBus<I2C> {
    /// # Arguments
    /// * `i2c` — I2C peripheral (takes ownership for exclusive access)
    /// * `address` — 7-bit I2C device address
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn release(self) -> I2C {
        self.i2c
    }

    fn frame(&self, register: u8, data: u8) -> [u8; 2] {
        #[cfg(feature = "defmt")]
        defmt::trace!(
            "MAX541x {=u8:#x}: register {=u8:#x} <- {=u8}",
            self.address,
            register,
            data
        );
        [register, data]
    }
}

impl<I2C> RegisterBus<I2C>
where
    I2C: I2c,
{
    /// Send `[register, data]` in one blocking write transaction.
    pub fn write_register(
        &mut self,
        register: u8,
        data: u8,
    ) -> Result<(), Max541xError<I2C::Error>> {
        let buf = self.frame(register, data);
        I2c::write(&mut self.i2c, self.address, &buf)?;
        Ok(())
    }
}

impl<I2C> RegisterBus<I2C>
where
    I2C: AsyncI2c,
{
    /// Send `[register, data]` in one async write transaction.
    pub async fn write_register_async(
        &mut self,
        register: u8,
        data: u8,
    ) -> Result<(), Max541xError<I2C::Error>> {
        let buf = self.frame(register, data);
        AsyncI2c::write(&mut self.i2c, self.address, &buf).await?;
        Ok(())
    }
}
