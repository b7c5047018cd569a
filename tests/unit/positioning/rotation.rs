use std::collections::BTreeSet;

use super::*;
use crate::domain::motion::{Orientation, Turns};

fn motion(
    motion_type: MotionType,
    start_loc: Location,
    end_loc: Location,
    prop_rot_dir: RotationDirection,
) -> MotionData {
    MotionData {
        motion_type,
        start_loc,
        end_loc,
        turns: Turns::from_halves(2),
        prop_rot_dir,
        start_orientation: Orientation::In,
        end_orientation: Orientation::In,
    }
}

fn assert_bijection(table: impl Fn(Location) -> u16) {
    let angles: BTreeSet<u16> = Location::ALL.into_iter().map(table).collect();
    assert_eq!(angles.len(), 8);
    assert!(angles.iter().all(|a| a % 45 == 0 && *a < 360));
}

#[test]
fn every_table_is_a_bijection_onto_canonical_angles() {
    assert_bijection(static_rotation);
    for dir in [
        RotationDirection::Clockwise,
        RotationDirection::CounterClockwise,
    ] {
        assert_bijection(|loc| pro_rotation(dir, loc));
        assert_bijection(|loc| anti_rotation(dir, loc));
        assert_bijection(|loc| dash_spin_rotation(dir, loc));
    }
    assert_bijection(|loc| dash_still_rotation(loc, loc.opposite()).unwrap());
}

#[test]
fn pro_clockwise_at_northeast_points_up() {
    let m = motion(
        MotionType::Pro,
        Location::N,
        Location::E,
        RotationDirection::Clockwise,
    );
    assert_eq!(rotation_angle(&m, Location::NE), 0);
}

#[test]
fn still_dash_uses_ordered_pair() {
    let m = motion(
        MotionType::Dash,
        Location::N,
        Location::S,
        RotationDirection::NoRotation,
    );
    assert_eq!(rotation_angle(&m, Location::E), 90);
    let back = motion(
        MotionType::Dash,
        Location::S,
        Location::N,
        RotationDirection::NoRotation,
    );
    assert_eq!(rotation_angle(&back, Location::W), 270);
}

#[test]
fn still_dash_off_diameter_uses_fallback() {
    let m = motion(
        MotionType::Dash,
        Location::N,
        Location::E,
        RotationDirection::NoRotation,
    );
    assert_eq!(rotation_angle(&m, Location::N), DASH_FALLBACK_ROTATION);
}

#[test]
fn anti_uses_opposite_spin_of_pro() {
    for loc in Location::ALL {
        assert_eq!(
            anti_rotation(RotationDirection::Clockwise, loc),
            pro_rotation(RotationDirection::CounterClockwise, loc)
        );
    }
}

#[test]
fn float_reuses_pro_table_with_handpath_direction() {
    let float = motion(
        MotionType::Float,
        Location::N,
        Location::W,
        RotationDirection::NoRotation,
    );
    let pro = motion(
        MotionType::Pro,
        Location::N,
        Location::W,
        RotationDirection::CounterClockwise,
    );
    assert_eq!(
        rotation_angle(&float, Location::NW),
        rotation_angle(&pro, Location::NW)
    );
}

#[test]
fn static_arrows_point_inward() {
    let m = motion(
        MotionType::Static,
        Location::N,
        Location::N,
        RotationDirection::Clockwise,
    );
    assert_eq!(rotation_angle(&m, Location::N), 180);
    assert_eq!(rotation_angle(&m, Location::S), 0);
    assert_eq!(rotation_angle(&m, Location::W), 90);
}
