//! Resistance ↔ wiper code conversion.
//!
//! The MAX541x datasheet does not spell the transfer function out; it is the
//! usual digital-potentiometer one (same form as the AD5241/AD5242):
//!
//! ```text
//! W-to-L:  R = code / 256 × R_full + R_wiper
//! W-to-H:  R = (256 − code) / 256 × R_full + R_wiper
//! ```
//!
//! Requests are saturated to `[2 × R_wiper, R_full]` before conversion, so
//! no request ever produces a negative tap resistance or a code above 255.
//! Nothing in this module touches the bus.

use crate::config::{Model, WiperMode};
use crate::registers::{TAPS, WIPER_RESISTANCE_OHMS};

/// Smallest resistance accepted before conversion.
pub const MIN_REQUEST_OHMS: u32 = 2 * WIPER_RESISTANCE_OHMS;

/// Transfer function of one potentiometer (full scale + wiper terminal).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ResistanceScale {
    full_scale: u32,
    mode: WiperMode,
}

impl ResistanceScale {
    pub const fn new(model: Model, mode: WiperMode) -> Self {
        Self {
            full_scale: model.full_scale_ohms(),
            mode,
        }
    }

    /// Full-scale resistance in ohms.
    pub const fn full_scale_ohms(&self) -> u32 {
        self.full_scale
    }

    pub const fn mode(&self) -> WiperMode {
        self.mode
    }

    /// Saturate a requested resistance to `[2 × R_wiper, R_full]`.
    pub fn clamp(&self, ohms: u32) -> u32 {
        ohms.clamp(MIN_REQUEST_OHMS, self.full_scale)
    }

    /// Convert a requested resistance to the code for the volatile register.
    ///
    /// Out-of-range requests are clamped silently (see [`clamp`](Self::clamp)).
    /// In W-to-H mode the tap resistance is additionally floored at one step
    /// (`R_full / 256`) so the code stays below 256.
    pub fn code_for(&self, ohms: u32) -> u8 {
        let clamped = self.clamp(ohms);
        let full_scale = f64::from(self.full_scale);
        let taps = f64::from(TAPS);
        let mut tap = f64::from(clamped - WIPER_RESISTANCE_OHMS);

        let position = match self.mode {
            WiperMode::WiperToLow => tap * taps / full_scale,
            WiperMode::WiperToHigh => {
                let step = full_scale / taps;
                if tap < step {
                    tap = step;
                }
                taps - tap * taps / full_scale
            }
        };

        // A MAX5419 at full scale in W-to-L mode rounds 255.52 up to 256.
        round_non_negative(position).min(u32::from(u8::MAX)) as u8
    }

    /// Resistance in ohms that `code` produces, rounded to the nearest ohm.
    pub fn ohms_for(&self, code: u8) -> u32 {
        let full_scale = f64::from(self.full_scale);
        let taps = f64::from(TAPS);
        let positions = match self.mode {
            WiperMode::WiperToLow => f64::from(code),
            WiperMode::WiperToHigh => taps - f64::from(code),
        };

        round_non_negative(positions / taps * full_scale) + WIPER_RESISTANCE_OHMS
    }
}

/// Round half away from zero. Only valid for `value >= 0.0`, which holds for
/// every quotient above.
fn round_non_negative(value: f64) -> u32 {
    (value + 0.5) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODELS: [Model; 3] = [Model::Max5417, Model::Max5418, Model::Max5419];

    fn low(model: Model) -> ResistanceScale {
        ResistanceScale::new(model, WiperMode::WiperToLow)
    }

    fn high(model: Model) -> ResistanceScale {
        ResistanceScale::new(model, WiperMode::WiperToHigh)
    }

    // ── Worked examples ──────────────────────────────────────────────

    #[test]
    fn wiper_to_low_25k_on_max5417() {
        let scale = low(Model::Max5417);
        // 24 625 × 256 / 50 000 = 126.08
        assert_eq!(scale.code_for(25_000), 126);
        // 24 609.375 + 375
        assert_eq!(scale.ohms_for(126), 24_984);
    }

    #[test]
    fn wiper_to_high_25k_on_max5417() {
        let scale = high(Model::Max5417);
        // 256 − 126.08 = 129.92
        assert_eq!(scale.code_for(25_000), 130);
        assert_eq!(scale.ohms_for(130), 24_984);
    }

    // ── Clamping ─────────────────────────────────────────────────────

    #[test]
    fn requests_below_twice_wiper_clamp_to_minimum() {
        for model in MODELS {
            for scale in [low(model), high(model)] {
                let floor = scale.code_for(MIN_REQUEST_OHMS);
                for ohms in [0, 1, 374, 375, 749] {
                    assert_eq!(scale.code_for(ohms), floor, "{:?} {} Ω", scale, ohms);
                }
            }
        }
    }

    #[test]
    fn requests_above_full_scale_clamp_to_full_scale() {
        for model in MODELS {
            for scale in [low(model), high(model)] {
                let ceiling = scale.code_for(model.full_scale_ohms());
                for ohms in [model.full_scale_ohms() + 1, 1_000_000, u32::MAX] {
                    assert_eq!(scale.code_for(ohms), ceiling, "{:?} {} Ω", scale, ohms);
                }
            }
        }
    }

    #[test]
    fn clamp_bounds() {
        let scale = low(Model::Max5418);
        assert_eq!(scale.clamp(0), 750);
        assert_eq!(scale.clamp(42_000), 42_000);
        assert_eq!(scale.clamp(150_000), 100_000);
    }

    #[test]
    fn extreme_codes_on_max5417() {
        // 375 × 256 / 50 000 = 1.92
        assert_eq!(low(Model::Max5417).code_for(0), 2);
        // 49 625 × 256 / 50 000 = 254.08
        assert_eq!(low(Model::Max5417).code_for(50_000), 254);
        assert_eq!(high(Model::Max5417).code_for(0), 254);
        assert_eq!(high(Model::Max5417).code_for(50_000), 2);
    }

    #[test]
    fn max5419_wiper_to_low_full_scale_saturates_at_255() {
        // 199 625 × 256 / 200 000 = 255.52, which would round to 256.
        assert_eq!(low(Model::Max5419).code_for(200_000), 255);
    }

    #[test]
    fn wiper_to_high_floors_tap_at_one_step() {
        // Tap resistance 375 Ω is below one step (781.25 Ω) on a MAX5419,
        // so it is raised to one step: 256 − 1 = 255.
        assert_eq!(high(Model::Max5419).code_for(0), 255);
        assert_eq!(high(Model::Max5419).code_for(750), 255);
    }

    // ── Monotonicity ─────────────────────────────────────────────────

    #[test]
    fn wiper_to_low_code_never_decreases() {
        for model in MODELS {
            let scale = low(model);
            let mut previous = scale.code_for(0);
            for ohms in (0..=model.full_scale_ohms() + 5_000).step_by(97) {
                let code = scale.code_for(ohms);
                assert!(code >= previous, "{:?}: {} Ω gave {} after {}", model, ohms, code, previous);
                previous = code;
            }
        }
    }

    #[test]
    fn wiper_to_high_code_never_increases() {
        for model in MODELS {
            let scale = high(model);
            let mut previous = scale.code_for(0);
            for ohms in (0..=model.full_scale_ohms() + 5_000).step_by(97) {
                let code = scale.code_for(ohms);
                assert!(code <= previous, "{:?}: {} Ω gave {} after {}", model, ohms, code, previous);
                previous = code;
            }
        }
    }

    // ── Round trip ───────────────────────────────────────────────────

    #[test]
    fn code_survives_resistance_round_trip() {
        for model in MODELS {
            for scale in [low(model), high(model)] {
                let mut checked = 0;
                for code in 0..=u8::MAX {
                    let ohms = scale.ohms_for(code);
                    // Codes outside the request range are unreachable.
                    if scale.clamp(ohms) != ohms {
                        continue;
                    }
                    let back = scale.code_for(ohms);
                    assert!(
                        (i16::from(back) - i16::from(code)).abs() <= 1,
                        "{:?}: code {} -> {} Ω -> code {}",
                        scale,
                        code,
                        ohms,
                        back
                    );
                    checked += 1;
                }
                assert!(checked > 240, "{:?}: only {} codes in range", scale, checked);
            }
        }
    }

    #[test]
    fn ohms_for_includes_wiper_offset() {
        assert_eq!(low(Model::Max5418).ohms_for(0), 375);
        assert_eq!(high(Model::Max5418).ohms_for(0), 100_375);
        assert_eq!(low(Model::Max5418).ohms_for(128), 50_375);
    }
}
