//! Screen buffer types
//!
//! Provides an in-memory character display with the same cursor semantics
//! as the panel OLED. Used on the host to observe exactly what the front
//! panel draws, cell by cell.

use heapless::String;

use crate::backend::{CharacterDisplay, DisplayError};

/// Number of character rows on the panel display
pub const SCREEN_ROWS: usize = 4;

/// Number of character columns on the panel display
pub const SCREEN_COLS: usize = 20;

/// Number of user-definable glyph slots
pub const GLYPH_SLOTS: usize = 8;

/// Character shown for glyph cells by [`Screen::line`]
pub const GLYPH_MARKER: char = '#';

/// In-memory 20x4 character display
///
/// Cells hold raw character codes; codes below [`GLYPH_SLOTS`] are custom
/// glyphs, as on the real controller. Every cell write is counted so
/// callers can check how much a redraw actually touched.
#[derive(Clone)]
pub struct Screen {
    /// Raw character codes, row-major
    cells: [[u8; SCREEN_COLS]; SCREEN_ROWS],
    /// Registered glyph bitmaps
    glyphs: [Option<[u8; 8]>; GLYPH_SLOTS],
    /// Cursor column
    col: usize,
    /// Cursor row
    row: usize,
    /// Number of cell writes since creation
    writes: usize,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    /// Create a new blank screen
    pub fn new() -> Self {
        Self {
            cells: [[b' '; SCREEN_COLS]; SCREEN_ROWS],
            glyphs: [None; GLYPH_SLOTS],
            col: 0,
            row: 0,
            writes: 0,
        }
    }

    /// Raw character code at a position
    pub fn cell(&self, col: usize, row: usize) -> Option<u8> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Get the content of a row as text
    ///
    /// Glyph cells are shown as [`GLYPH_MARKER`].
    pub fn line(&self, row: usize) -> String<SCREEN_COLS> {
        let mut out = String::new();
        if let Some(cells) = self.cells.get(row) {
            for &code in cells {
                let c = if (code as usize) < GLYPH_SLOTS {
                    GLYPH_MARKER
                } else {
                    code as char
                };
                let _ = out.push(c);
            }
        }
        out
    }

    /// Bitmap registered in a glyph slot
    pub fn glyph(&self, slot: u8) -> Option<[u8; 8]> {
        self.glyphs.get(slot as usize).copied().flatten()
    }

    /// Current cursor position as (col, row)
    pub fn cursor(&self) -> (usize, usize) {
        (self.col, self.row)
    }

    /// Number of cell writes so far
    pub fn write_count(&self) -> usize {
        self.writes
    }

    fn put(&mut self, code: u8) -> Result<(), DisplayError> {
        if self.col >= SCREEN_COLS {
            return Err(DisplayError::BufferOverflow);
        }
        self.cells[self.row][self.col] = code;
        self.col += 1;
        self.writes += 1;
        Ok(())
    }
}

impl CharacterDisplay for Screen {
    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError> {
        if col as usize >= SCREEN_COLS || row as usize >= SCREEN_ROWS {
            return Err(DisplayError::InvalidCoordinates);
        }
        self.col = col as usize;
        self.row = row as usize;
        Ok(())
    }

    fn write_str(&mut self, text: &str) -> Result<(), DisplayError> {
        for byte in text.bytes() {
            self.put(byte)?;
        }
        Ok(())
    }

    fn write_glyph(&mut self, slot: u8) -> Result<(), DisplayError> {
        if slot as usize >= GLYPH_SLOTS {
            return Err(DisplayError::InvalidCoordinates);
        }
        self.put(slot)
    }

    fn define_glyph(&mut self, slot: u8, bitmap: &[u8; 8]) -> Result<(), DisplayError> {
        let entry = self
            .glyphs
            .get_mut(slot as usize)
            .ok_or(DisplayError::InvalidCoordinates)?;
        *entry = Some(*bitmap);
        Ok(())
    }

    fn dimensions(&self) -> (u8, u8) {
        (SCREEN_COLS as u8, SCREEN_ROWS as u8)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Screen {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Screen[");
        for row in 0..SCREEN_ROWS {
            if row > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", self.line(row).as_str());
        }
        defmt::write!(f, "]");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::CharacterDisplayExt;

    #[test]
    fn test_new_screen_is_blank() {
        let screen = Screen::new();
        for row in 0..SCREEN_ROWS {
            assert_eq!(screen.line(row).as_str(), "                    ");
        }
        assert_eq!(screen.write_count(), 0);
    }

    #[test]
    fn test_cursor_advances_after_write() {
        let mut screen = Screen::new();
        screen.draw_at(3, 1, "AB").unwrap();
        assert_eq!(screen.cursor(), (5, 1));
        screen.write_str("C").unwrap();
        assert_eq!(&screen.line(1)[..6], "   ABC");
        assert_eq!(screen.write_count(), 3);
    }

    #[test]
    fn test_glyph_cells_show_marker() {
        let mut screen = Screen::new();
        screen.set_cursor(0, 0).unwrap();
        screen.repeat_glyph(0, 3).unwrap();
        assert_eq!(&screen.line(0)[..4], "### ");
        assert_eq!(screen.cell(0, 0), Some(0));
    }

    #[test]
    fn test_define_glyph_stores_bitmap() {
        let mut screen = Screen::new();
        let bitmap = [1, 2, 3, 4, 5, 6, 7, 8];
        screen.define_glyph(2, &bitmap).unwrap();
        assert_eq!(screen.glyph(2), Some(bitmap));
        assert_eq!(screen.glyph(3), None);
        assert_eq!(
            screen.define_glyph(8, &bitmap),
            Err(DisplayError::InvalidCoordinates)
        );
    }

    #[test]
    fn test_out_of_range_cursor_rejected() {
        let mut screen = Screen::new();
        assert_eq!(screen.set_cursor(20, 0), Err(DisplayError::InvalidCoordinates));
        assert_eq!(screen.set_cursor(0, 4), Err(DisplayError::InvalidCoordinates));
    }

    #[test]
    fn test_write_past_row_end_overflows() {
        let mut screen = Screen::new();
        screen.set_cursor(18, 3).unwrap();
        assert_eq!(screen.write_str("dBx"), Err(DisplayError::BufferOverflow));
        assert_eq!(&screen.line(3)[18..], "dB");
    }

    #[test]
    fn test_blank_overwrites_cells() {
        let mut screen = Screen::new();
        screen.draw_at(0, 2, "HELLO").unwrap();
        screen.blank(1, 2, 3).unwrap();
        assert_eq!(&screen.line(2)[..5], "H   O");
    }
}
