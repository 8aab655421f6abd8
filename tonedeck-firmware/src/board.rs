//! Pin assignment for the front panel board
//!
//! | Signal | GPIO |
//! |--------|------|
//! | I2C0 SDA / SCL (TDA7313) | 4 / 5 |
//! | Encoder A / B | 2 / 3 |
//! | Encoder push button | 9 |
//! | LM35 (ADC0) | 26 |
//! | OLED RS / RW / E | 12 / 10 / 11 |
//! | OLED DB4..DB7 | 6, 7, 8, 13 |

use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_rp::Peripherals;
use tonedeck_hal::I2cConfig;
use tonedeck_hal_rp2040::i2c::bus_config;

/// Peripherals configured for the tone controller
pub struct Board {
    /// Audio processor bus
    pub i2c: I2c<'static, I2C0, Blocking>,
    /// Temperature probe converter
    pub adc: Adc<'static, adc::Blocking>,
    /// LM35 output
    pub probe: Channel<'static>,
    /// Encoder push button, reads high while pressed
    pub button: Input<'static>,
    /// Encoder channel A
    pub encoder_a: Input<'static>,
    /// Encoder channel B
    pub encoder_b: Input<'static>,
    /// OLED register select
    pub oled_rs: Output<'static>,
    /// OLED read/write, held low
    pub oled_rw: Output<'static>,
    /// OLED enable strobe
    pub oled_en: Output<'static>,
    /// OLED DB4..DB7
    pub oled_data: [Output<'static>; 4],
}

impl Board {
    /// Claim and configure every pin the controller uses
    pub fn new(p: Peripherals) -> Self {
        let i2c = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, bus_config(I2cConfig::STANDARD));

        Self {
            i2c,
            adc: Adc::new_blocking(p.ADC, adc::Config::default()),
            probe: Channel::new_pin(p.PIN_26, Pull::None),
            button: Input::new(p.PIN_9, Pull::Down),
            encoder_a: Input::new(p.PIN_2, Pull::Up),
            encoder_b: Input::new(p.PIN_3, Pull::Up),
            oled_rs: Output::new(p.PIN_12, Level::Low),
            oled_rw: Output::new(p.PIN_10, Level::Low),
            oled_en: Output::new(p.PIN_11, Level::Low),
            oled_data: [
                Output::new(p.PIN_6, Level::Low),
                Output::new(p.PIN_7, Level::Low),
                Output::new(p.PIN_8, Level::Low),
                Output::new(p.PIN_13, Level::Low),
            ],
        }
    }
}
