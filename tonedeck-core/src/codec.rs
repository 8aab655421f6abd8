//! TDA7313 register encoding
//!
//! Register bytes are updated incrementally from the previous byte rather
//! than computed from the position. The tone registers store boost and cut
//! as two mirrored sub-ranges with the sign bit in bit 3:
//!
//! ```text
//!   treble  0111 1xxx  boost, 0111 1111 = flat, 0111 1000 = +14 dB
//!           0111 0xxx  cut,   0111 0111 = flat, 0111 0000 = -14 dB
//!   bass    0110 1xxx / 0110 0xxx  same layout
//! ```
//!
//! Flat therefore has two codes. Leaving flat jumps to the first step of the
//! sub-range being entered; every other step moves the byte by one, toward
//! the smaller value for more boost or more cut.
//!
//! Volume is a plain attenuation byte: 1.25 dB per count, 0 = 0 dB.

use crate::params::{Direction, ParameterKind};

/// Sub-range entry points for one tone register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ToneCalibration {
    /// Byte for +2 dB when leaving flat upward
    pub boost_entry: u8,
    /// Byte for -2 dB when leaving flat downward
    pub cut_entry: u8,
}

/// Treble register entry points
pub const TREBLE: ToneCalibration = ToneCalibration {
    boost_entry: 0b0111_1110,
    cut_entry: 0b0111_0110,
};

/// Bass register entry points
pub const BASS: ToneCalibration = ToneCalibration {
    boost_entry: 0b0110_1110,
    cut_entry: 0b0110_0110,
};

/// Volume byte after one step
///
/// Louder means less attenuation, so `Increase` lowers the byte.
pub const fn next_volume_byte(current: u8, direction: Direction) -> u8 {
    match direction {
        Direction::Increase => current.wrapping_sub(1),
        Direction::Decrease => current.wrapping_add(1),
    }
}

/// Tone byte after one step from `centi_db`
///
/// `centi_db` is the position *before* the step.
pub const fn next_tone_byte(
    calibration: ToneCalibration,
    current: u8,
    centi_db: i16,
    direction: Direction,
) -> u8 {
    match direction {
        Direction::Increase => {
            if centi_db > 0 {
                current.wrapping_sub(1)
            } else if centi_db < 0 {
                current.wrapping_add(1)
            } else {
                calibration.boost_entry
            }
        }
        Direction::Decrease => {
            if centi_db > 0 {
                current.wrapping_add(1)
            } else if centi_db < 0 {
                current.wrapping_sub(1)
            } else {
                calibration.cut_entry
            }
        }
    }
}

/// Register byte for `kind` after one step
///
/// The caller checks range limits; this never saturates.
pub const fn next_register_byte(
    kind: ParameterKind,
    current: u8,
    centi_db: i16,
    direction: Direction,
) -> u8 {
    match kind {
        ParameterKind::Volume => next_volume_byte(current, direction),
        ParameterKind::Treble => next_tone_byte(TREBLE, current, centi_db, direction),
        ParameterKind::Bass => next_tone_byte(BASS, current, centi_db, direction),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_step() {
        assert_eq!(next_volume_byte(32, Direction::Increase), 31);
        assert_eq!(next_volume_byte(32, Direction::Decrease), 33);
        assert_eq!(next_volume_byte(1, Direction::Increase), 0);
    }

    #[test]
    fn test_leaving_flat_jumps_to_entry() {
        // Either flat code leaves to the same entry.
        for flat in [0b0111_1111, 0b0111_0111] {
            assert_eq!(next_tone_byte(TREBLE, flat, 0, Direction::Increase), 126);
            assert_eq!(next_tone_byte(TREBLE, flat, 0, Direction::Decrease), 118);
        }
        for flat in [0b0110_1111, 0b0110_0111] {
            assert_eq!(next_tone_byte(BASS, flat, 0, Direction::Increase), 110);
            assert_eq!(next_tone_byte(BASS, flat, 0, Direction::Decrease), 102);
        }
    }

    #[test]
    fn test_boost_region() {
        // +2 -> +4 lowers the byte, +4 -> +2 raises it
        assert_eq!(next_tone_byte(TREBLE, 126, 200, Direction::Increase), 125);
        assert_eq!(next_tone_byte(TREBLE, 125, 400, Direction::Decrease), 126);
        // +2 -> 0 lands on the boost-side flat code
        assert_eq!(next_tone_byte(TREBLE, 126, 200, Direction::Decrease), 127);
    }

    #[test]
    fn test_cut_region() {
        // -2 -> -4 lowers the byte, -4 -> -2 raises it
        assert_eq!(next_tone_byte(BASS, 102, -200, Direction::Decrease), 101);
        assert_eq!(next_tone_byte(BASS, 101, -400, Direction::Increase), 102);
        // -2 -> 0 lands on the cut-side flat code
        assert_eq!(next_tone_byte(BASS, 102, -200, Direction::Increase), 103);
    }

    #[test]
    fn test_dispatch_by_kind() {
        assert_eq!(
            next_register_byte(ParameterKind::Volume, 32, -4000, Direction::Increase),
            31
        );
        assert_eq!(
            next_register_byte(ParameterKind::Treble, 127, 0, Direction::Increase),
            TREBLE.boost_entry
        );
        assert_eq!(
            next_register_byte(ParameterKind::Bass, 111, 0, Direction::Decrease),
            BASS.cut_entry
        );
    }

    #[test]
    fn test_extremes_keep_sub_range_prefix() {
        // Walking +14 dB of boost keeps bit 3 set.
        let mut byte = 127u8;
        let mut centi = 0i16;
        for _ in 0..7 {
            byte = next_tone_byte(TREBLE, byte, centi, Direction::Increase);
            centi += 200;
        }
        assert_eq!(byte, 0b0111_1000);

        let mut byte = 111u8;
        let mut centi = 0i16;
        for _ in 0..7 {
            byte = next_tone_byte(BASS, byte, centi, Direction::Decrease);
            centi -= 200;
        }
        assert_eq!(byte, 0b0110_0000);
    }
}
