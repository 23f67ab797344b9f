//! Numeric transfer status, for callers that want the classic
//! `0 = success … 4 = other` contract instead of a typed error.

use embedded_hal::i2c::{Error, ErrorKind, NoAcknowledgeSource};

use crate::error::Max541xError;

/// Outcome of one bus transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum TransferStatus {
    Success = 0,
    /// Payload too large for the transmit buffer.
    PayloadTooLarge = 1,
    /// Address byte not acknowledged.
    AddressNack = 2,
    /// Data byte not acknowledged.
    DataNack = 3,
    /// Any other failure.
    Other = 4,
}

impl TransferStatus {
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Success),
            1 => Some(Self::PayloadTooLarge),
            2 => Some(Self::AddressNack),
            3 => Some(Self::DataNack),
            4 => Some(Self::Other),
            _ => None,
        }
    }

    /// Classify an `embedded-hal` bus error.
    ///
    /// `Overrun` is the closest `ErrorKind` to a full transmit buffer; an
    /// unattributed NACK counts as `Other`.
    pub fn from_error_kind(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address) => Self::AddressNack,
            ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data) => Self::DataNack,
            ErrorKind::Overrun => Self::PayloadTooLarge,
            _ => Self::Other,
        }
    }

    /// Status of any driver operation's result.
    pub fn of<E: Error>(result: &Result<(), Max541xError<E>>) -> Self {
        match result {
            Ok(()) => Self::Success,
            Err(e) => e.status(),
        }
    }

    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl From<TransferStatus> for u8 {
    fn from(status: TransferStatus) -> Self {
        status.code()
    }
}
