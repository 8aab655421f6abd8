//! Custom glyphs

/// CGRAM slot the graph block is registered in
pub const GRAPH_BLOCK_SLOT: u8 = 0;

/// Bar-graph cell
///
/// The controller only latches the low five bits of each row, so this
/// draws as a solid block with a blank bottom line. The upper bits are
/// kept exactly as the panel has always been flashed.
pub const GRAPH_BLOCK: [u8; 8] = [
    0b0001_1111,
    0b0011_1111,
    0b0101_1111,
    0b0111_1111,
    0b1001_1111,
    0b1011_1111,
    0b1101_1111,
    0b1110_0000,
];
