use super::*;
use crate::domain::location::GridMode;
use crate::domain::motion::{MotionData, MotionType, RotationDirection, Turns};
use crate::foundation::math::approx_eq;

fn still(loc: Location, orientation: Orientation) -> MotionData {
    MotionData {
        motion_type: MotionType::Static,
        start_loc: loc,
        end_loc: loc,
        turns: Turns::ZERO,
        prop_rot_dir: RotationDirection::NoRotation,
        start_orientation: orientation,
        end_orientation: orientation,
    }
}

#[test]
fn rotation_matches_reference_cardinals() {
    assert_eq!(prop_rotation(Orientation::In, Location::N), 90);
    assert_eq!(prop_rotation(Orientation::In, Location::W), 0);
    assert_eq!(prop_rotation(Orientation::Out, Location::N), 270);
    assert_eq!(prop_rotation(Orientation::Clock, Location::N), 0);
    assert_eq!(prop_rotation(Orientation::Clock, Location::E), 90);
    assert_eq!(prop_rotation(Orientation::Counter, Location::S), 0);
    assert_eq!(prop_rotation(Orientation::Counter, Location::NE), 225);
}

#[test]
fn separate_locations_have_no_beta_offset() {
    let ctx = PictographContext::new(
        None,
        GridMode::Diamond,
        still(Location::N, Orientation::In),
        still(Location::S, Orientation::In),
    );
    let g = prop_geometry(ctx.prop(Role::Blue), &ctx);
    assert!(approx_eq(g.x, 475.0) && approx_eq(g.y, 331.9));
    assert!(!g.mirrored);
    assert_eq!(g.rotation_deg, 90.0);
}

#[test]
fn radial_beta_props_part_across_the_radius() {
    let ctx = PictographContext::new(
        None,
        GridMode::Diamond,
        still(Location::N, Orientation::In),
        still(Location::N, Orientation::Out),
    );
    let blue = prop_geometry(ctx.prop(Role::Blue), &ctx);
    let red = prop_geometry(ctx.prop(Role::Red), &ctx);
    assert!(approx_eq(blue.y, red.y));
    assert!(approx_eq(blue.x, 475.0 + BETA_OFFSET));
    assert!(approx_eq(red.x, 475.0 - BETA_OFFSET));
}

#[test]
fn non_radial_beta_props_part_along_the_radius() {
    let ctx = PictographContext::new(
        None,
        GridMode::Diamond,
        still(Location::E, Orientation::Clock),
        still(Location::E, Orientation::Counter),
    );
    let blue = prop_geometry(ctx.prop(Role::Blue), &ctx);
    let red = prop_geometry(ctx.prop(Role::Red), &ctx);
    assert!(approx_eq(blue.y, 475.0) && approx_eq(red.y, 475.0));
    assert!(approx_eq(blue.x, 618.1 + BETA_OFFSET));
    assert!(approx_eq(red.x, 618.1 - BETA_OFFSET));
}

#[test]
fn mixed_families_are_not_separated() {
    let ctx = PictographContext::new(
        None,
        GridMode::Diamond,
        still(Location::S, Orientation::In),
        still(Location::S, Orientation::Clock),
    );
    assert_eq!(beta_offset(ctx.prop(Role::Blue), &ctx), Vec2::ZERO);
    assert_eq!(beta_offset(ctx.prop(Role::Red), &ctx), Vec2::ZERO);
}
