//! Tonedeck - Tone Controller Firmware
//!
//! Front panel for a TDA7313 audio processor: one rotary encoder adjusts
//! volume, treble and bass, its push button cycles between them, and a
//! 20x4 character OLED shows the settings with a rolling temperature
//! readout from an LM35.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use tonedeck_core::config::ControllerConfig;
use tonedeck_core::cycle::Controller;
use tonedeck_drivers::display::Oled4Bit;
use tonedeck_drivers::input::{CountingEncoder, PinButton};
use tonedeck_drivers::processor::Tda7313;
use tonedeck_drivers::sensor::lm35::COUNTS_PER_DEGREE_12BIT_3V3;
use tonedeck_drivers::sensor::Lm35;
use tonedeck_hal_rp2040::adc::AdcInput;
use tonedeck_hal_rp2040::gpio::GpioInput;
use tonedeck_hal_rp2040::i2c::BlockingI2c;

mod board;
mod tasks;

use crate::board::Board;
use crate::tasks::ENCODER_COUNT;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Tonedeck firmware starting...");

    let p = embassy_rp::init(Default::default());
    let board = Board::new(p);

    let mut oled = Oled4Bit::new(
        board.oled_rs,
        board.oled_rw,
        board.oled_en,
        board.oled_data,
        Delay,
    );
    if oled.init().is_err() {
        warn!("OLED init failed");
    }

    spawner
        .spawn(tasks::encoder_task(board.encoder_a, board.encoder_b))
        .unwrap();

    let mut controller = Controller::new(
        CountingEncoder::new(&ENCODER_COUNT),
        PinButton::new_active_high(GpioInput::new(board.button)),
        Lm35::with_scale(
            AdcInput::new(board.adc, board.probe),
            COUNTS_PER_DEGREE_12BIT_3V3,
        ),
        Tda7313::new(BlockingI2c::new(board.i2c)),
        oled,
        ControllerConfig::default(),
    );
    controller.start();
    info!("Front panel running");

    loop {
        let report = controller.step();
        if let Some((kind, byte)) = report.device_write {
            debug!("{} register <- {=u8:#04x}", kind, byte);
        }
        embassy_futures::yield_now().await;
    }
}
