//! Rotates an authored offset into the quadrant the arrow actually occupies.
//!
//! Offsets are authored for quadrant 0 only. Each `(motion type, grid, direction)` has a
//! row of four symmetries of the square, one per quadrant, and the arrow's resolved
//! location picks the column.

use crate::{
    domain::location::{GridMode, Location},
    domain::motion::{MotionData, MotionType, RotationDirection},
    domain::orientation::{effective_rotation, handpath_direction},
    foundation::core::Vec2,
};

/// One of the eight symmetries of the square acting on an offset `(x, y)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dihedral {
    /// `(x, y)`
    Identity,
    /// `(-y, x)`
    Rot90,
    /// `(-x, -y)`
    Rot180,
    /// `(y, -x)`
    Rot270,
    /// `(-x, y)`
    FlipX,
    /// `(x, -y)`
    FlipY,
    /// `(y, x)`
    Swap,
    /// `(-y, -x)`
    NegSwap,
}

impl Dihedral {
    /// Applies the symmetry to `v`.
    pub fn apply(self, v: Vec2) -> Vec2 {
        let (x, y) = (v.x, v.y);
        match self {
            Dihedral::Identity => Vec2::new(x, y),
            Dihedral::Rot90 => Vec2::new(-y, x),
            Dihedral::Rot180 => Vec2::new(-x, -y),
            Dihedral::Rot270 => Vec2::new(y, -x),
            Dihedral::FlipX => Vec2::new(-x, y),
            Dihedral::FlipY => Vec2::new(x, -y),
            Dihedral::Swap => Vec2::new(y, x),
            Dihedral::NegSwap => Vec2::new(-y, -x),
        }
    }
}

/// Four quadrant variants, indexed by [`Location::quadrant_index`].
pub type QuadrantRow = [Dihedral; 4];

use Dihedral::*;

const TURNING: QuadrantRow = [Identity, Rot90, Rot180, Rot270];
const TURNING_REFLECTED: QuadrantRow = [NegSwap, FlipY, Swap, FlipX];
const TURNING_FLIPPED: QuadrantRow = [FlipX, NegSwap, FlipY, Swap];
const HAND_CW: QuadrantRow = [FlipY, Swap, FlipX, NegSwap];
const HAND_CCW: QuadrantRow = [Rot180, Rot270, Identity, Rot90];
const DASH_STILL_DIAMOND: QuadrantRow = [Identity, NegSwap, FlipY, Swap];
const DASH_BOX_CW: QuadrantRow = [Rot90, Rot180, Rot270, Identity];

/// Row of symmetries for `motion` on `grid_mode`, if one is defined.
///
/// Floats are keyed by their handpath; a float that does not travel around the grid has no
/// row.
pub fn quadrant_row(motion: &MotionData, grid_mode: GridMode) -> Option<QuadrantRow> {
    use RotationDirection::{Clockwise as Cw, CounterClockwise as Ccw, NoRotation};

    let row = match motion.motion_type {
        MotionType::Pro => match (grid_mode, effective_rotation(motion)) {
            (GridMode::Diamond, Ccw) => TURNING_REFLECTED,
            (GridMode::Diamond, _) => TURNING,
            (GridMode::Box, Ccw) => TURNING,
            (GridMode::Box, _) => TURNING_FLIPPED,
        },
        MotionType::Anti => match (grid_mode, effective_rotation(motion)) {
            (GridMode::Diamond, Ccw) => TURNING,
            (GridMode::Diamond, _) => TURNING_REFLECTED,
            (GridMode::Box, Ccw) => TURNING,
            (GridMode::Box, _) => TURNING_FLIPPED,
        },
        MotionType::Static => match (grid_mode, effective_rotation(motion)) {
            (GridMode::Diamond, Ccw) => HAND_CCW,
            (GridMode::Diamond, _) => HAND_CW,
            (GridMode::Box, Ccw) => TURNING_REFLECTED,
            (GridMode::Box, _) => TURNING,
        },
        MotionType::Dash => match (grid_mode, motion.prop_rot_dir) {
            (GridMode::Diamond, Cw) => HAND_CW,
            (GridMode::Diamond, Ccw) => HAND_CCW,
            (GridMode::Diamond, NoRotation) => DASH_STILL_DIAMOND,
            (GridMode::Box, Cw) => DASH_BOX_CW,
            (GridMode::Box, Ccw) => TURNING_FLIPPED,
            (GridMode::Box, NoRotation) => TURNING,
        },
        MotionType::Float => {
            match handpath_direction(motion.start_loc, motion.end_loc).as_rotation()? {
                Ccw => TURNING_REFLECTED,
                _ => TURNING,
            }
        }
    };
    Some(row)
}

/// Moves `offset` into the quadrant of `location`; without a row the offset is returned as is.
pub fn quadrant_adjust(
    offset: Vec2,
    motion: &MotionData,
    grid_mode: GridMode,
    location: Location,
) -> Vec2 {
    match quadrant_row(motion, grid_mode) {
        Some(row) => row[location.quadrant_index()].apply(offset),
        None => {
            tracing::debug!(
                motion_type = motion.motion_type.as_str(),
                "no quadrant row; keeping authored offset"
            );
            offset
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/placement/quadrant.rs"]
mod tests;
