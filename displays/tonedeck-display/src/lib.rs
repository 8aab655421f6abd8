//! Character display abstraction and shared components for Tonedeck
//!
//! This crate provides:
//! - `CharacterDisplay` trait for cursor-addressed text displays
//! - `Screen`, an in-memory 20x4 display used as a host-side stand-in
//! - The graph-block glyph the front panel draws its bar graphs with
//!
//! # Architecture
//!
//! The front panel talks to the display only through [`CharacterDisplay`]:
//! position the cursor, print text, print a custom glyph. The firmware
//! plugs in a real OLED driver; tests plug in a [`Screen`] and read the
//! cells back.

#![no_std]

pub mod backend;
pub mod glyph;
pub mod screen;

// Re-export key types
pub use backend::{CharacterDisplay, CharacterDisplayExt, DisplayError};
pub use glyph::{GRAPH_BLOCK, GRAPH_BLOCK_SLOT};
pub use screen::{Screen, SCREEN_COLS, SCREEN_ROWS};
