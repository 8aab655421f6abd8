//! HD44780-compatible character OLED on a 4-bit parallel bus
//!
//! Winstar-style 20x4 character OLEDs speak the HD44780 instruction set.
//! The bus is write-only (RW tied low through its pin), so instead of
//! polling the busy flag every instruction is followed by a fixed delay.
//!
//! Each byte goes out as two nibbles, high nibble first, latched on the
//! falling edge of E.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};
use tonedeck_display::{CharacterDisplay, DisplayError};

/// Columns on the panel
pub const COLS: u8 = 20;

/// Rows on the panel
pub const ROWS: u8 = 4;

/// DDRAM address of the first cell of each row
pub const ROW_OFFSETS: [u8; 4] = [0x00, 0x40, 0x14, 0x54];

const CMD_CLEAR: u8 = 0x01;
const CMD_ENTRY_MODE: u8 = 0x04;
const CMD_DISPLAY_CONTROL: u8 = 0x08;
const CMD_FUNCTION_SET: u8 = 0x20;
const CMD_SET_CGRAM: u8 = 0x40;
const CMD_SET_DDRAM: u8 = 0x80;

const ENTRY_INCREMENT: u8 = 0x02;
const DISPLAY_ON: u8 = 0x04;
const FUNCTION_TWO_LINES: u8 = 0x08;

/// Settle time after an ordinary instruction
const INSTRUCTION_US: u32 = 50;
/// Settle time after clear
const CLEAR_US: u32 = 2_000;
/// Power-up wait before the first instruction
const POWER_UP_MS: u32 = 50;

/// 20x4 character OLED driven over RS, RW, E and DB4-DB7
///
/// All pins share one type, which is what HALs with a type-erased
/// output (such as `embassy_rp::gpio::Output`) provide.
pub struct Oled4Bit<P, D> {
    rs: P,
    rw: P,
    en: P,
    /// DB4, DB5, DB6, DB7
    data: [P; 4],
    delay: D,
    col: u8,
    row: u8,
}

impl<P: OutputPin, D: DelayNs> Oled4Bit<P, D> {
    /// Create a driver; call [`init`](Self::init) before drawing
    pub fn new(rs: P, rw: P, en: P, data: [P; 4], delay: D) -> Self {
        Self {
            rs,
            rw,
            en,
            data,
            delay,
            col: 0,
            row: 0,
        }
    }

    /// Switch the controller to 4-bit mode and clear the panel
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.delay.delay_ms(POWER_UP_MS);
        set(&mut self.rs, false)?;
        set(&mut self.rw, false)?;
        set(&mut self.en, false)?;

        // Resynchronise from any interface state, then drop to 4-bit.
        for _ in 0..3 {
            self.write_nibble(0x03)?;
            self.delay.delay_us(4_500);
        }
        self.write_nibble(0x02)?;
        self.delay.delay_us(INSTRUCTION_US);

        self.command(CMD_FUNCTION_SET | FUNCTION_TWO_LINES)?;
        self.command(CMD_DISPLAY_CONTROL)?;
        self.clear()?;
        self.command(CMD_ENTRY_MODE | ENTRY_INCREMENT)?;
        self.command(CMD_DISPLAY_CONTROL | DISPLAY_ON)
    }

    /// Blank the panel and home the cursor
    pub fn clear(&mut self) -> Result<(), DisplayError> {
        self.send(CMD_CLEAR, false)?;
        self.delay.delay_us(CLEAR_US);
        self.col = 0;
        self.row = 0;
        Ok(())
    }

    fn command(&mut self, cmd: u8) -> Result<(), DisplayError> {
        self.send(cmd, false)?;
        self.delay.delay_us(INSTRUCTION_US);
        Ok(())
    }

    fn write_data(&mut self, byte: u8) -> Result<(), DisplayError> {
        self.send(byte, true)?;
        self.delay.delay_us(INSTRUCTION_US);
        Ok(())
    }

    fn send(&mut self, byte: u8, is_data: bool) -> Result<(), DisplayError> {
        set(&mut self.rs, is_data)?;
        self.write_nibble(byte >> 4)?;
        self.write_nibble(byte & 0x0F)
    }

    fn write_nibble(&mut self, nibble: u8) -> Result<(), DisplayError> {
        for (bit, pin) in self.data.iter_mut().enumerate() {
            set(pin, nibble & (1 << bit) != 0)?;
        }
        set(&mut self.en, true)?;
        self.delay.delay_us(1);
        set(&mut self.en, false)?;
        self.delay.delay_us(1);
        Ok(())
    }

    fn put(&mut self, code: u8) -> Result<(), DisplayError> {
        if self.col >= COLS {
            return Err(DisplayError::BufferOverflow);
        }
        self.write_data(code)?;
        self.col += 1;
        Ok(())
    }
}

fn set<P: OutputPin>(pin: &mut P, high: bool) -> Result<(), DisplayError> {
    pin.set_state(PinState::from(high))
        .map_err(|_| DisplayError::Communication)
}

impl<P: OutputPin, D: DelayNs> CharacterDisplay for Oled4Bit<P, D> {
    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError> {
        if col >= COLS || row >= ROWS {
            return Err(DisplayError::InvalidCoordinates);
        }
        self.command(CMD_SET_DDRAM | (ROW_OFFSETS[row as usize] + col))?;
        self.col = col;
        self.row = row;
        Ok(())
    }

    fn write_str(&mut self, text: &str) -> Result<(), DisplayError> {
        for byte in text.bytes() {
            self.put(byte)?;
        }
        Ok(())
    }

    fn write_glyph(&mut self, slot: u8) -> Result<(), DisplayError> {
        if slot >= 8 {
            return Err(DisplayError::InvalidCoordinates);
        }
        self.put(slot)
    }

    fn define_glyph(&mut self, slot: u8, bitmap: &[u8; 8]) -> Result<(), DisplayError> {
        if slot >= 8 {
            return Err(DisplayError::InvalidCoordinates);
        }
        self.command(CMD_SET_CGRAM | (slot << 3))?;
        for &row in bitmap {
            self.write_data(row)?;
        }
        // CGRAM writes move the address counter; point it back at DDRAM.
        let (col, row) = (self.col.min(COLS - 1), self.row);
        self.set_cursor(col, row)
    }

    fn dimensions(&self) -> (u8, u8) {
        (COLS, ROWS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;
    use core::convert::Infallible;
    use heapless::Vec;
    use tonedeck_display::CharacterDisplayExt;

    const RS: u8 = 0;
    const RW: u8 = 1;
    const EN: u8 = 2;

    type Log = RefCell<Vec<(u8, bool), 2048>>;

    struct MockPin<'a> {
        id: u8,
        log: &'a Log,
    }

    impl embedded_hal::digital::ErrorType for MockPin<'_> {
        type Error = Infallible;
    }

    impl OutputPin for MockPin<'_> {
        fn set_low(&mut self) -> Result<(), Infallible> {
            let _ = self.log.borrow_mut().push((self.id, false));
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            let _ = self.log.borrow_mut().push((self.id, true));
            Ok(())
        }
    }

    struct NoDelay;

    impl DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn oled(log: &Log) -> Oled4Bit<MockPin<'_>, NoDelay> {
        let pin = |id| MockPin { id, log };
        Oled4Bit::new(pin(RS), pin(RW), pin(EN), [pin(3), pin(4), pin(5), pin(6)], NoDelay)
    }

    /// Replay the pin log and return (rs, nibble) latched on each E fall
    fn nibbles(log: &Log) -> Vec<(bool, u8), 512> {
        let mut levels = [false; 7];
        let mut out = Vec::new();
        for &(id, high) in log.borrow().iter() {
            let falling = id == EN && levels[EN as usize] && !high;
            levels[id as usize] = high;
            if falling {
                let nibble = (0..4).fold(0u8, |n, bit| n | ((levels[3 + bit] as u8) << bit));
                let _ = out.push((levels[RS as usize], nibble));
            }
        }
        out
    }

    /// Pair nibbles (after the 4 single init nibbles) into (rs, byte)
    fn bytes(log: &Log) -> Vec<(bool, u8), 256> {
        let nibbles = nibbles(log);
        let mut out = Vec::new();
        for pair in nibbles[4..].chunks(2) {
            let _ = out.push((pair[0].0, (pair[0].1 << 4) | pair[1].1));
        }
        out
    }

    #[test]
    fn test_init_sequence() {
        let log = Log::default();
        let mut display = oled(&log);
        display.init().unwrap();

        let singles: Vec<u8, 4> = nibbles(&log).iter().take(4).map(|(_, n)| *n).collect();
        assert_eq!(singles.as_slice(), &[0x3, 0x3, 0x3, 0x2]);

        let commands: Vec<u8, 8> = bytes(&log).iter().map(|(_, b)| *b).collect();
        assert_eq!(commands.as_slice(), &[0x28, 0x08, 0x01, 0x06, 0x0C]);
        assert!(log.borrow().contains(&(RW, false)));
    }

    #[test]
    fn test_cursor_rows_use_ddram_offsets() {
        let log = Log::default();
        let mut display = oled(&log);
        display.init().unwrap();
        log.borrow_mut().clear();

        display.draw_at(2, 1, "AB").unwrap();
        display.set_cursor(18, 3).unwrap();
        display.set_cursor(0, 2).unwrap();

        let sent = bytes_after_reset(&log);
        assert_eq!(
            sent.as_slice(),
            &[(false, 0xC2), (true, b'A'), (true, b'B'), (false, 0x80 | 0x66), (false, 0x94)]
        );
    }

    #[test]
    fn test_define_glyph_restores_cursor() {
        let log = Log::default();
        let mut display = oled(&log);
        display.init().unwrap();
        display.set_cursor(5, 0).unwrap();
        log.borrow_mut().clear();

        display.define_glyph(1, &[1, 2, 3, 4, 5, 6, 7, 8]).unwrap();

        let sent = bytes_after_reset(&log);
        assert_eq!(sent[0], (false, 0x48));
        for (i, &(rs, b)) in sent[1..9].iter().enumerate() {
            assert!(rs);
            assert_eq!(b, i as u8 + 1);
        }
        assert_eq!(sent[9], (false, 0x85));
    }

    #[test]
    fn test_bounds() {
        let log = Log::default();
        let mut display = oled(&log);
        assert_eq!(display.set_cursor(20, 0), Err(DisplayError::InvalidCoordinates));
        assert_eq!(display.set_cursor(0, 4), Err(DisplayError::InvalidCoordinates));
        assert_eq!(display.write_glyph(8), Err(DisplayError::InvalidCoordinates));
        display.set_cursor(19, 0).unwrap();
        assert_eq!(display.write_str("ab"), Err(DisplayError::BufferOverflow));
        assert_eq!(display.dimensions(), (20, 4));
    }

    /// Bytes sent since the log was cleared (no init nibbles to skip)
    fn bytes_after_reset(log: &Log) -> Vec<(bool, u8), 256> {
        let nibbles = nibbles(log);
        let mut out = Vec::new();
        for pair in nibbles.chunks(2) {
            let _ = out.push((pair[0].0, (pair[0].1 << 4) | pair[1].1));
        }
        out
    }
}
