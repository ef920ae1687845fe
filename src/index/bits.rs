//! Bit twiddling.

use super::IndexMode;
use crate::{Direction, Resolution};
use std::num::NonZeroU8;

/// Offset (in bits) of the mode in a hexring index.
const MODE_OFFSET: usize = 59;
const MODE_MASK: u64 = 0b1111 << MODE_OFFSET;

/// Offset (in bits) of the cell edge in a hexring index.
const EDGE_OFFSET: usize = 56;
const EDGE_MASK: u64 = 0b111 << EDGE_OFFSET;

/// Offset (in bits) of the cell vertex in a hexring index.
const VERTEX_OFFSET: usize = 56;
const VERTEX_MASK: u64 = 0b111 << VERTEX_OFFSET;

/// The bit offset of the resolution in a hexring index.
const RESOLUTION_OFFSET: u64 = 52;
// Bitmask to select the resolution bits in a hexring index.
const RESOLUTION_MASK: u64 = 0b1111 << RESOLUTION_OFFSET;

/// Offset (in bits) of the base cell in a hexring index.
const BASE_CELL_OFFSET: u64 = 45;
// Bitmask to select the base cell bits in a hexring index.
const BASE_CELL_MASK: u64 = 0b111_1111 << BASE_CELL_OFFSET;

// Bitmask to select the directions bits in a hexring index.
pub const DIRECTIONS_MASK: u64 = 0x0000_1fff_ffff_ffff;

/// Returns the hexring index mode  bits.
#[allow(clippy::cast_possible_truncation)] // Cast safe thx to masking.
#[must_use]
pub const fn get_mode(bits: u64) -> u8 {
    ((bits & MODE_MASK) >> MODE_OFFSET) as u8
}

/// Clears the hexring index mode bits.
#[must_use]
pub const fn clr_mode(bits: u64) -> u64 {
    bits & !MODE_MASK
}

/// Sets the hexring index mode bits.
#[must_use]
pub const fn set_mode(bits: u64, mode: IndexMode) -> u64 {
    clr_mode(bits) | ((mode as u64) << MODE_OFFSET)
}

/// Returns the hexring index cell edge bits.
#[allow(clippy::cast_possible_truncation)] // Cast safe thx to masking.
#[must_use]
pub const fn get_edge(bits: u64) -> u8 {
    ((bits & EDGE_MASK) >> EDGE_OFFSET) as u8
}

/// Clears the hexring index cell edge bits.
#[must_use]
pub const fn clr_edge(bits: u64) -> u64 {
    bits & !EDGE_MASK
}

/// Sets the hexring index cell edge bits.
#[must_use]
pub const fn set_edge(bits: u64, edge: u8) -> u64 {
    clr_edge(bits) | ((edge as u64) << EDGE_OFFSET)
}

/// Returns the hexring index cell vertex bits.
#[allow(clippy::cast_possible_truncation)] // Cast safe thx to masking.
#[must_use]
pub const fn get_vertex(bits: u64) -> u8 {
    ((bits & VERTEX_MASK) >> VERTEX_OFFSET) as u8
}

/// Clears the hexring index cell vertex bits.
#[must_use]
pub const fn clr_vertex(bits: u64) -> u64 {
    bits & !VERTEX_MASK
}

/// Sets the hexring index cell vertex bits.
#[must_use]
pub const fn set_vertex(bits: u64, vertex: u8) -> u64 {
    clr_vertex(bits) | ((vertex as u64) << VERTEX_OFFSET)
}

/// Returns the hexring index resolution.
#[allow(clippy::cast_possible_truncation)] // Cast safe thx to masking.
#[must_use]
pub const fn get_resolution(bits: u64) -> Resolution {
    // SAFETY: the masking restricts the value on 4 bits (thus 0-15).
    Resolution::new_unchecked(
        ((bits & RESOLUTION_MASK) >> RESOLUTION_OFFSET) as u8,
    )
}

/// Clears the hexring index resolution bits.
#[must_use]
pub const fn clr_resolution(bits: u64) -> u64 {
    bits & !RESOLUTION_MASK
}

/// Sets the hexring index resolution bits.
#[must_use]
pub fn set_resolution(bits: u64, resolution: Resolution) -> u64 {
    clr_resolution(bits) | (u64::from(resolution) << RESOLUTION_OFFSET)
}

/// Returns the hexring index base cell bits.
#[allow(clippy::cast_possible_truncation)] // Cast safe thx to masking.
#[must_use]
pub const fn get_base_cell(bits: u64) -> u8 {
    ((bits & BASE_CELL_MASK) >> BASE_CELL_OFFSET) as u8
}

/// Sets the hexring index base cell bits.
#[must_use]
pub fn set_base_cell(bits: u64, cell: u8) -> u64 {
    (bits & !BASE_CELL_MASK) | (u64::from(cell) << BASE_CELL_OFFSET)
}

/// Returns the hexring index direction bits at the given resolution.
#[allow(clippy::cast_possible_truncation)] // Cast safe thx to masking.
#[must_use]
pub fn get_direction(bits: u64, resolution: Resolution) -> u8 {
    ((bits & resolution.direction_mask()) >> resolution.direction_offset())
        as u8
}

/// Sets the hexring index direction bits at the given resolution.
#[must_use]
pub fn set_direction(bits: u64, direction: u8, resolution: Resolution) -> u64 {
    (bits & !resolution.direction_mask())
        | (u64::from(direction) << resolution.direction_offset())
}

/// Clears the hexring index direction bits at the given resolution (sets them to
/// [`Direction::Center`]).
#[must_use]
pub fn clr_direction(bits: u64, resolution: Resolution) -> u64 {
    bits & !resolution.direction_mask()
}

/// Sets unused directions in a hexring index at the given resolution.
#[must_use]
pub fn set_unused(bits: u64, resolution: Resolution) -> u64 {
    let unused_end_offset = resolution.direction_offset();
    let unused_bits = (1 << unused_end_offset) - 1;

    bits | unused_bits
}

/// Returns the axe of the first non-center direction, from the coarsest to
/// the finest resolution, if any.
#[must_use]
pub fn first_axe(bits: u64) -> Option<NonZeroU8> {
    let resolution = get_resolution(bits);

    Resolution::range(Resolution::One, resolution)
        .find_map(|res| NonZeroU8::new(get_direction(bits, res)))
}

/// Rotates the directions of a cell index `count` times, 60° (counter)
/// clockwise depending on `CCW`.
///
/// The base cell is left untouched: callers are responsible for rotating it
/// separately when needed.
#[must_use]
pub fn rotate60<const CCW: bool>(bits: u64, count: usize) -> u64 {
    let resolution = get_resolution(bits);
    let mut bits = bits;

    for res in Resolution::range(Resolution::One, resolution) {
        // SAFETY: `get_direction` always returns a valid direction value.
        let digit = Direction::new_unchecked(get_direction(bits, res));
        bits = set_direction(bits, digit.rotate60::<CCW>(count).into(), res);
    }

    bits
}

/// Rotates the directions of a pentagon cell index once, 60° (counter)
/// clockwise depending on `CCW`, correcting for the deleted `K` axe
/// sub-sequence as it goes.
#[must_use]
pub fn pentagon_rotate60<const CCW: bool>(bits: u64) -> u64 {
    let resolution = get_resolution(bits);
    let mut bits = bits;
    let mut found_first_non_center = false;

    for res in Resolution::range(Resolution::One, resolution) {
        // SAFETY: `get_direction` always returns a valid direction value.
        let digit = Direction::new_unchecked(get_direction(bits, res));
        let rotated = digit.rotate60::<CCW>(1);
        bits = set_direction(bits, rotated.into(), res);

        if !found_first_non_center && rotated != Direction::Center {
            found_first_non_center = true;

            // Adjust for the deleted K-axe sub-sequence.
            if first_axe(bits) == Direction::K.axe() {
                bits = rotate60::<CCW>(bits, 1);
            }
        }
    }

    bits
}

#[cfg(test)]
#[path = "./bits_tests.rs"]
mod tests;
