//! Error types for the MAX541x driver.

use core::fmt;

use crate::status::TransferStatus;

/// Errors that can occur when talking to a MAX541x.
///
/// Resistance requests never fail: out-of-range values are clamped. The
/// only failure is the bus transaction itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Max541xError<E> {
    /// Underlying I2C bus error.
    I2c(E),
}

impl<E: embedded_hal::i2c::Error> Max541xError<E> {
    /// Numeric transfer status for this error (never [`TransferStatus::Success`]).
    pub fn status(&self) -> TransferStatus {
        match self {
            Max541xError::I2c(e) => TransferStatus::from_error_kind(e.kind()),
        }
    }
}

// Allow ergonomic `?` propagation from raw I2C errors.
impl<E> From<E> for Max541xError<E> {
    fn from(error: E) -> Self {
        Max541xError::I2c(error)
    }
}

impl<E: fmt::Debug> fmt::Display for Max541xError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Max541xError::I2c(e) => write!(f, "I2C error: {:?}", e),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for Max541xError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Max541xError::I2c(e) => defmt::write!(f, "I2C error: {}", e),
        }
    }
}
