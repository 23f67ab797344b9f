//! Device identity: chip variant, wiper connection and bus address.

/// Chip variant. The variant fixes the end-to-end (full-scale) resistance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Model {
    /// 50 kΩ.
    Max5417,
    /// 100 kΩ.
    Max5418,
    /// 200 kΩ.
    Max5419,
}

impl Model {
    /// Full-scale resistance between H and L in ohms.
    pub const fn full_scale_ohms(self) -> u32 {
        match self {
            Model::Max5417 => 50_000,
            Model::Max5418 => 100_000,
            Model::Max5419 => 200_000,
        }
    }
}

/// Which end of the resistor string the load is connected across.
///
/// With the wiper used against L the code grows with resistance; against H
/// it shrinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WiperMode {
    /// Resistance measured from W to L.
    WiperToLow,
    /// Resistance measured from W to H.
    WiperToHigh,
}

/// Fixed configuration of one potentiometer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceConfig {
    /// 7-bit I2C address.
    pub address: u8,
    /// Chip variant.
    pub model: Model,
    /// Wiper terminal in use.
    pub mode: WiperMode,
}

impl DeviceConfig {
    pub const fn new(address: u8, model: Model, mode: WiperMode) -> Self {
        Self {
            address,
            model,
            mode,
        }
    }
}
