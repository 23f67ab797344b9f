//! Deferred configuration.
//!
//! Some boards hand out the I2C bus before the potentiometer variant or
//! address is known (read from a board ID, a settings page, …).
//! [`Unconfigured`] holds the bus in the meantime. It has no device
//! operations, so an unconfigured potentiometer cannot be driven by
//! accident; [`configure`](Unconfigured::configure) turns it into a ready
//! driver.

use crate::asynch::Max541xAsync;
use crate::config::DeviceConfig;
use crate::potentiometer::Max541x;

/// An I2C bus waiting for a [`DeviceConfig`].
pub struct Unconfigured<I2C> {
    i2c: I2C,
}

impl<I2C> Unconfigured<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Finish configuration with a blocking transport.
    pub fn configure(self, config: DeviceConfig) -> Max541x<I2C>
    where
        I2C: embedded_hal::i2c::I2c,
    {
        Max541x::from_config(self.i2c, config)
    }

    /// Finish configuration with an async transport.
    pub fn configure_async(self, config: DeviceConfig) -> Max541xAsync<I2C>
    where
        I2C: embedded_hal_async::i2c::I2c,
    {
        Max541xAsync::from_config(self.i2c, config)
    }

    /// Give the I2C peripheral back without configuring.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Model, WiperMode};
    use embedded_hal_mock::eh1::i2c::{Mock, Transaction};

    #[test]
    fn configure_yields_fresh_driver() {
        let expectations = [Transaction::write(0x2C, vec![0x11, 64])];
        let pending = Unconfigured::new(Mock::new(&expectations));

        let mut pot = pending.configure(DeviceConfig::new(0x2C, Model::Max5418, WiperMode::WiperToLow));
        assert_eq!(pot.code(), 0);
        pot.set_code(64).unwrap();
        assert_eq!(pot.resistance(), 25_375);
        pot.release().done();
    }

    #[test]
    fn configure_async_yields_async_driver() {
        let expectations = [Transaction::write(0x2D, vec![0x61, 0x00])];
        let pending = Unconfigured::new(Mock::new(&expectations));

        let mut pot =
            pending.configure_async(DeviceConfig::new(0x2D, Model::Max5419, WiperMode::WiperToHigh));
        embassy_futures::block_on(pot.recall_from_nonvolatile()).unwrap();
        assert_eq!(pot.address(), 0x2D);
        assert_eq!(pot.code(), 0);
        pot.release().done();
    }

    #[test]
    fn release_without_configuring_sends_nothing() {
        let expectations: [Transaction; 0] = [];
        Unconfigured::new(Mock::new(&expectations)).release().done();
    }
}
