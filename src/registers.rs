//! Register map and fixed electrical constants for the MAX541x family.
//!
//! Every transfer to the chip is a two-byte write: a command (register)
//! byte followed by a data byte. The transfer commands ignore the data byte
//! but the chip still expects one, so the driver sends `0x00`.

// ---------------------------------------------------------------------------
// Register / command bytes
// ---------------------------------------------------------------------------

/// Command bytes understood by the MAX5417/MAX5418/MAX5419.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    /// Volatile wiper register (VREG). Holds the active resistance code.
    Volatile = 0x11,
    /// Non-volatile wiper register (NVREG). Loaded into VREG at power-up.
    Nonvolatile = 0x21,
    /// Copy NVREG into VREG.
    NonvolatileToVolatile = 0x61,
    /// Copy VREG into NVREG.
    VolatileToNonvolatile = 0x51,
}

impl Register {
    /// Raw command byte sent on the bus.
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

impl From<Register> for u8 {
    fn from(register: Register) -> Self {
        register.addr()
    }
}

// ---------------------------------------------------------------------------
// Electrical constants
// ---------------------------------------------------------------------------

/// Number of wiper positions.
pub const TAPS: u32 = 256;

/// Wiper resistance in ohms, in series with the tap resistance at every code.
pub const WIPER_RESISTANCE_OHMS: u32 = 375;

// ---------------------------------------------------------------------------
// Addressing
// ---------------------------------------------------------------------------

/// 7-bit I2C address with all three address pins tied low (`0101 000`).
pub const BASE_ADDRESS: u8 = 0x28;

/// Build the 7-bit I2C address from the A2/A1/A0 pin strapping.
///
/// Only the low three bits of `pins` are used (`A2 A1 A0`).
pub const fn address_from_pins(pins: u8) -> u8 {
    BASE_ADDRESS | (pins & 0b111)
}
