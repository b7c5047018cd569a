//! Pictograph is a deterministic positioning engine for two-role prop pictographs.
//!
//! A pictograph shows two performers (blue and red) on a compass grid. Each performer's
//! motion (`MotionData`) is drawn as an arrow glyph and a prop glyph. This crate turns the
//! abstract motions of a beat into concrete scene geometry: position, rotation and mirror
//! flag for every glyph, on a 950x950 scene.
//!
//! # Pipeline overview
//!
//! 1. **Locate**: `MotionData -> Location` (start, shifted corner, or dash resolution)
//! 2. **Anchor**: `Location -> Point` (hand point or layer-two corner)
//! 3. **Rotate**: `MotionData + Location -> degrees` (fixed tables, multiples of 45)
//! 4. **Adjust**: default placement, special placement, then quadrant transform
//! 5. **Mirror**: motion type and spin decide whether the glyph is flipped
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: identical inputs produce bit-identical [`Geometry`].
//! - **Total**: the `compute_*` and `position_*` entry points never fail; every table miss has
//!   a named fallback.
//! - **No IO while positioning**: placement tables are loaded once into a frozen
//!   [`PlacementConfig`] and shared behind an `Arc`.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod domain;
mod foundation;
mod placement;
mod positioning;

pub use domain::letter::{LetterCategory, LetterType};
pub use domain::location::{GridMode, Location};
pub use domain::motion::{
    ArrowData, MotionData, MotionType, Orientation, PropData, Role, RotationDirection, Turns,
};
pub use domain::orientation::{
    HandpathDirection, effective_rotation, end_orientation, handpath_direction,
};
pub use domain::pictograph::{Beat, BeatMotion, PictographContext};
pub use foundation::core::{Geometry, Point, SCENE_CENTER, SCENE_SIZE, Vec2};
pub use foundation::error::{PictographError, PictographResult};
pub use foundation::math::{COORD_EPSILON, approx_eq};
pub use placement::adjustment::{
    AdjustmentTrace, DEFAULT_OFFSET_FALLBACK, adjustment, trace_adjustment,
};
pub use placement::config::{
    ConfigLoad, ConfigSources, DefaultPlacements, PlacementConfig, SpecialPlacements,
};
pub use placement::key::{OrientationLayer, OrientationSignature, PlacementKey, Travel};
pub use placement::quadrant::{Dihedral, QuadrantRow, quadrant_adjust, quadrant_row};
pub use positioning::anchors::{
    HAND_POINT_DIAGONAL, HAND_POINT_RADIUS, LAYER2_AXIS_OFFSET, LAYER2_RADIUS, base_point,
    hand_point, layer2_point,
};
pub use positioning::dash::dash_location;
pub use positioning::engine::{ArrowPlacement, PositioningEngine};
pub use positioning::location::{arrow_location, shift_location};
pub use positioning::mirror::should_mirror;
pub use positioning::prop::{BETA_OFFSET, beta_offset, prop_geometry, prop_rotation};
pub use positioning::rotation::{DASH_FALLBACK_ROTATION, rotation_angle};
