//! Resistance sweep example
//!
//! Drives a MAX5417 (50 kΩ) on the Raspberry Pi Pico 2 with the async
//! driver. Stores a mid-scale power-up value in non-volatile memory, then
//! sweeps the W-to-L resistance up and down and logs what the driver
//! reports via defmt.
//!
//! # Wiring
//!
//! | Signal    | Pico 2 Pin | Notes                        |
//! |-----------|------------|------------------------------|
//! | I2C0 SDA  | GP20       |                              |
//! | I2C0 SCL  | GP21       |                              |
//! | A0/A1/A2  | GND        | address 0x28                 |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp as hal;
use embassy_rp::bind_interrupts;
use embassy_rp::block::ImageDef;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::{Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use max541x::{address_from_pins, Max541xAsync, Model, TransferStatus, WiperMode};

/// Tell the Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = hal::block::ImageDef::secure_exe();

// Wire the I2C0 interrupt to Embassy's handler.
bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

const SWEEP_STEP_OHMS: u32 = 2_500;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    let i2c = I2c::new_async(
        p.I2C0,
        p.PIN_21, // SCL
        p.PIN_20, // SDA
        Irqs,
        i2c::Config::default(),
    );

    let mut pot = Max541xAsync::new(
        i2c,
        address_from_pins(0b000),
        Model::Max5417,
        WiperMode::WiperToLow,
    );

    // Mid-scale becomes the power-up value.
    let result = pot.set_resistance(25_000).await;
    info!(
        "Mid-scale: code {} -> {} ohms (status {})",
        pot.code(),
        pot.resistance(),
        TransferStatus::of(&result).code(),
    );
    if let Err(e) = pot.commit_to_nonvolatile().await {
        error!("Commit to non-volatile memory failed: {}", e);
    }

    Timer::after(Duration::from_millis(1000)).await;

    info!("Sweep started");

    let full_scale = pot.scale().full_scale_ohms();
    let mut target: u32 = 0;
    let mut rising = true;

    loop {
        match pot.set_resistance(target).await {
            Ok(()) => info!(
                "Requested {} ohms: code {} -> {} ohms",
                target,
                pot.code(),
                pot.resistance(),
            ),
            Err(e) => error!("Write failed: {}", e),
        }

        if rising {
            target += SWEEP_STEP_OHMS;
            if target >= full_scale {
                rising = false;
            }
        } else {
            target = target.saturating_sub(SWEEP_STEP_OHMS);
            if target == 0 {
                rising = true;
            }
        }

        Timer::after(Duration::from_millis(500)).await;
    }
}
