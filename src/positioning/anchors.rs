//! Fixed anchor coordinates arrows and props are placed against.
//!
//! Two families exist: *hand points* on the inner ring (static and dash arrows, props) and
//! *layer-two points* on the outer corners (shift arrows). Both are laid out around
//! [`SCENE_CENTER`] and must match the reference renderer within
//! [`crate::COORD_EPSILON`].

use std::f64::consts::FRAC_1_SQRT_2;

use crate::{
    domain::location::Location,
    domain::motion::MotionType,
    foundation::core::{Point, SCENE_CENTER},
};

/// Distance from the center to a cardinal hand point.
pub const HAND_POINT_RADIUS: f64 = 143.1;

/// Per-axis distance from the center to a diagonal hand point (`radius * cos 45°`).
pub const HAND_POINT_DIAGONAL: f64 = HAND_POINT_RADIUS * FRAC_1_SQRT_2;

/// Per-axis distance from the center to a layer-two corner.
pub const LAYER2_AXIS_OFFSET: f64 = 143.1;

/// Distance from the center to a layer-two corner.
pub const LAYER2_RADIUS: f64 = LAYER2_AXIS_OFFSET * std::f64::consts::SQRT_2;

/// Anchor for an arrow of `motion_type` sitting at `location`.
pub fn base_point(motion_type: MotionType, location: Location) -> Point {
    match motion_type {
        MotionType::Pro | MotionType::Anti | MotionType::Float => layer2_point(location),
        MotionType::Static | MotionType::Dash => hand_point(location),
    }
}

/// Outer-corner anchor; cardinals snap to the diagonal clockwise of them.
pub fn layer2_point(location: Location) -> Point {
    let (sx, sy) = match location {
        Location::N | Location::NE => (1.0, -1.0),
        Location::E | Location::SE => (1.0, 1.0),
        Location::S | Location::SW => (-1.0, 1.0),
        Location::W | Location::NW => (-1.0, -1.0),
    };
    offset_from_center(sx * LAYER2_AXIS_OFFSET, sy * LAYER2_AXIS_OFFSET)
}

/// Inner-ring anchor where a hand holds the prop.
pub fn hand_point(location: Location) -> Point {
    let r = HAND_POINT_RADIUS;
    let d = HAND_POINT_DIAGONAL;
    match location {
        Location::N => offset_from_center(0.0, -r),
        Location::E => offset_from_center(r, 0.0),
        Location::S => offset_from_center(0.0, r),
        Location::W => offset_from_center(-r, 0.0),
        Location::NE => offset_from_center(d, -d),
        Location::SE => offset_from_center(d, d),
        Location::SW => offset_from_center(-d, d),
        Location::NW => offset_from_center(-d, -d),
    }
}

fn offset_from_center(dx: f64, dy: f64) -> Point {
    Point::new(SCENE_CENTER.x + dx, SCENE_CENTER.y + dy)
}

#[cfg(test)]
#[path = "../../tests/unit/positioning/anchors.rs"]
mod tests;
