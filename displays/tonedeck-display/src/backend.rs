//! Display backend trait
//!
//! Defines the interface for cursor-addressed character displays.

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Cursor or glyph slot outside the display
    InvalidCoordinates,
    /// Text ran past the end of the row
    BufferOverflow,
}

/// Character display capability
///
/// Mirrors what an HD44780-style controller offers: a cursor that advances
/// after every character and up to eight user-defined 5x8 glyphs.
pub trait CharacterDisplay {
    /// Move the cursor to `col`, `row` (both 0-based)
    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError>;

    /// Print ASCII text at the cursor
    fn write_str(&mut self, text: &str) -> Result<(), DisplayError>;

    /// Print a user-defined glyph at the cursor
    fn write_glyph(&mut self, slot: u8) -> Result<(), DisplayError>;

    /// Upload a 5x8 glyph bitmap into `slot` (0-7)
    fn define_glyph(&mut self, slot: u8, bitmap: &[u8; 8]) -> Result<(), DisplayError>;

    /// Get the display dimensions
    ///
    /// Returns (columns, rows) in character units
    fn dimensions(&self) -> (u8, u8);
}

impl<T: CharacterDisplay + ?Sized> CharacterDisplay for &mut T {
    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError> {
        (**self).set_cursor(col, row)
    }

    fn write_str(&mut self, text: &str) -> Result<(), DisplayError> {
        (**self).write_str(text)
    }

    fn write_glyph(&mut self, slot: u8) -> Result<(), DisplayError> {
        (**self).write_glyph(slot)
    }

    fn define_glyph(&mut self, slot: u8, bitmap: &[u8; 8]) -> Result<(), DisplayError> {
        (**self).define_glyph(slot, bitmap)
    }

    fn dimensions(&self) -> (u8, u8) {
        (**self).dimensions()
    }
}

/// Helper trait for drawing common UI elements
pub trait CharacterDisplayExt: CharacterDisplay {
    /// Print text starting at a position
    fn draw_at(&mut self, col: u8, row: u8, text: &str) -> Result<(), DisplayError> {
        self.set_cursor(col, row)?;
        self.write_str(text)
    }

    /// Print `count` spaces starting at a position
    fn blank(&mut self, col: u8, row: u8, count: u8) -> Result<(), DisplayError> {
        self.set_cursor(col, row)?;
        for _ in 0..count {
            self.write_str(" ")?;
        }
        Ok(())
    }

    /// Print `count` copies of a glyph at the cursor
    fn repeat_glyph(&mut self, slot: u8, count: u8) -> Result<(), DisplayError> {
        for _ in 0..count {
            self.write_glyph(slot)?;
        }
        Ok(())
    }
}

// Blanket implementation for all CharacterDisplay types
impl<T: CharacterDisplay + ?Sized> CharacterDisplayExt for T {}
