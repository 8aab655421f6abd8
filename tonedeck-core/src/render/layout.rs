//! Panel geometry and field arithmetic
//!
//! ```text
//!   col  0    5             18 19
//!   row0 VOL>|##            |
//!   row1 TRB |     FLAT     |
//!   row2 BAS |     FLAT     |
//!   row3 TEMP 21.3c  -40.00dB
//! ```

use core::fmt::Write;

use heapless::String;

/// Column of the selection marker on rows 0-2
pub const MARKER_COL: u8 = 3;

/// Selection marker character
pub const MARKER: &str = ">";

/// First graph column
pub const GRAPH_COL: u8 = 5;

/// Graph width in cells
pub const GRAPH_WIDTH: u8 = 14;

/// Column of the closing graph frame
pub const FRAME_END_COL: u8 = GRAPH_COL + GRAPH_WIDTH;

/// Status row: temperature, readout, unit
pub const STATUS_ROW: u8 = 3;

/// Start of the readout area cleared on selection change
pub const READOUT_CLEAR_COL: u8 = 10;

/// Width of the readout area cleared on selection change
pub const READOUT_CLEAR_LEN: u8 = 8;

/// Column of the "dB" unit label
pub const UNIT_COL: u8 = 18;

/// Flat tone graph text
pub const FLAT: &str = "     FLAT     ";

/// Volume at or below this many whole dB draws an empty graph
const VOLUME_GRAPH_FLOOR_DB: i16 = -50;

/// Where to print a numeric readout on the status row
///
/// The readout is right-aligned against the unit label; shorter values
/// first blank the cells a longer previous value may have left behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReadoutField {
    /// First cell to blank
    pub blank_col: u8,
    /// Number of cells to blank (0 = none)
    pub blank_len: u8,
    /// Column the value text starts at
    pub text_col: u8,
}

/// Readout field for a volume in centi-dB, printed with two decimals
pub const fn volume_field(centi_db: i16) -> ReadoutField {
    if centi_db < -900 {
        // "-40.00"
        ReadoutField { blank_col: 12, blank_len: 0, text_col: 12 }
    } else if centi_db == 0 {
        // "0.00"
        ReadoutField { blank_col: 12, blank_len: 2, text_col: 14 }
    } else {
        // "-8.75"
        ReadoutField { blank_col: 12, blank_len: 1, text_col: 13 }
    }
}

/// Readout field for a tone value in whole dB, printed as an integer
pub const fn tone_field(db: i16) -> ReadoutField {
    if db > 9 {
        ReadoutField { blank_col: 15, blank_len: 1, text_col: 16 }
    } else if db >= 0 {
        ReadoutField { blank_col: 15, blank_len: 2, text_col: 17 }
    } else if db < -9 {
        ReadoutField { blank_col: 15, blank_len: 0, text_col: 15 }
    } else {
        ReadoutField { blank_col: 15, blank_len: 1, text_col: 16 }
    }
}

/// Filled cells of the volume graph
///
/// Scales the whole-dB attenuation linearly from 14 cells at 0 dB down to
/// nothing at -50 dB. Fractional dB are truncated before scaling.
pub const fn volume_segments(centi_db: i16) -> u8 {
    let whole_db = centi_db / 100;
    if whole_db > VOLUME_GRAPH_FLOOR_DB {
        let headroom = (whole_db - VOLUME_GRAPH_FLOOR_DB) as u16;
        (headroom * GRAPH_WIDTH as u16 / 50) as u8
    } else {
        0
    }
}

/// Filled cells of a tone graph, `None` when flat
///
/// Cut fills 7 cells at -2 dB down to 1 at -14 dB; boost fills 8 at +2 dB
/// up to 14 at +14 dB.
pub const fn tone_segments(centi_db: i16) -> Option<u8> {
    let db = centi_db / 100;
    if db < 0 {
        Some((8 + db / 2) as u8)
    } else if db > 0 {
        Some((7 + db / 2) as u8)
    } else {
        None
    }
}

/// Volume readout text, e.g. `-31.25`
pub fn volume_text(db: f32) -> String<8> {
    let mut s = String::new();
    let _ = write!(s, "{:.2}", db);
    s
}

/// Tone readout text, e.g. `-4`
pub fn tone_text(db: i16) -> String<8> {
    let mut s = String::new();
    let _ = write!(s, "{}", db);
    s
}

/// Temperature line text, e.g. `TEMP 21.3c`
pub fn temperature_text(celsius: f32) -> String<16> {
    let mut s = String::new();
    let _ = write!(s, "TEMP {:.1}c", celsius);
    s
}
