use super::*;
use crate::domain::motion::{MotionType, Orientation, Turns};

fn dash(start: Location, end: Location, halves: u32, dir: RotationDirection) -> MotionData {
    MotionData {
        motion_type: MotionType::Dash,
        start_loc: start,
        end_loc: end,
        turns: Turns::from_halves(halves),
        prop_rot_dir: dir,
        start_orientation: Orientation::In,
        end_orientation: Orientation::Out,
    }
}

fn shift(start: Location, end: Location) -> MotionData {
    MotionData {
        motion_type: MotionType::Pro,
        start_loc: start,
        end_loc: end,
        turns: Turns::ZERO,
        prop_rot_dir: RotationDirection::Clockwise,
        start_orientation: Orientation::In,
        end_orientation: Orientation::In,
    }
}

const NO_ROT: RotationDirection = RotationDirection::NoRotation;

#[test]
fn default_zero_turn_dash_sits_beside_its_path() {
    let m = dash(Location::N, Location::S, 0, NO_ROT);
    let loc = dash_location(&m, Role::Blue, None, LetterCategory::Standard, GridMode::Diamond);
    assert_eq!(loc, Location::E);

    let m = dash(Location::SW, Location::NE, 0, NO_ROT);
    let loc = dash_location(&m, Role::Red, None, LetterCategory::Standard, GridMode::Box);
    assert_eq!(loc, Location::NW);
}

#[test]
fn default_zero_turn_table_is_perpendicular_for_every_diameter() {
    for start in Location::ALL {
        let loc = default_zero_turn_location(start, start.opposite()).unwrap();
        let d = start.cw_distance_to(loc);
        assert!(d == 2 || d == 6, "{start} -> {loc}");
    }
}

#[test]
fn non_diametric_zero_turn_dash_falls_back_to_start() {
    let m = dash(Location::N, Location::E, 0, NO_ROT);
    let loc = dash_location(&m, Role::Blue, None, LetterCategory::Standard, GridMode::Diamond);
    assert_eq!(loc, Location::N);
}

#[test]
fn rotating_dash_steps_a_quarter_in_spin_direction() {
    for start in Location::ALL {
        let cw = dash(start, start.opposite(), 2, RotationDirection::Clockwise);
        let ccw = dash(start, start.opposite(), 2, RotationDirection::CounterClockwise);
        assert_eq!(rotating_dash_location(&cw), start.step_cw(2));
        assert_eq!(rotating_dash_location(&ccw), start.step_ccw(2));
    }
    let spinless = dash(Location::E, Location::W, 2, NO_ROT);
    assert_eq!(rotating_dash_location(&spinless), Location::E);
}

#[test]
fn both_zero_turn_letters_choose_per_role() {
    let blue = dash(Location::N, Location::S, 0, NO_ROT);
    let red = dash(Location::S, Location::N, 0, NO_ROT);
    let cat = LetterCategory::BothZeroTurnSpecial;
    assert_eq!(
        dash_location(&blue, Role::Blue, Some(&red), cat, GridMode::Diamond),
        Location::W
    );
    assert_eq!(
        dash_location(&red, Role::Red, Some(&blue), cat, GridMode::Diamond),
        Location::E
    );
}

#[test]
fn both_zero_turn_letters_mirror_a_turning_partner() {
    let cat = LetterCategory::BothZeroTurnSpecial;
    let blue = dash(Location::N, Location::S, 0, NO_ROT);
    let red = dash(Location::S, Location::N, 2, RotationDirection::Clockwise);
    // Red resolves to W (S stepped clockwise), so blue takes the opposite side.
    assert_eq!(
        dash_location(&blue, Role::Blue, Some(&red), cat, GridMode::Diamond),
        Location::E
    );
    assert_eq!(
        dash_location(&red, Role::Red, Some(&blue), cat, GridMode::Diamond),
        Location::W
    );
}

#[test]
fn lambda_zero_turn_dash_faces_away_from_static_partner() {
    let cat = LetterCategory::LambdaZeroTurn;
    let blue = dash(Location::N, Location::S, 0, NO_ROT);
    let mut red = shift(Location::W, Location::W);
    red.motion_type = MotionType::Static;
    assert_eq!(
        dash_location(&blue, Role::Blue, Some(&red), cat, GridMode::Diamond),
        Location::E
    );
    assert_eq!(
        dash_location(&blue, Role::Blue, None, cat, GridMode::Diamond),
        Location::N
    );
}

#[test]
fn type3_dash_steps_away_from_partner_shift() {
    let cat = LetterCategory::Type3;
    let blue = dash(Location::N, Location::S, 0, NO_ROT);
    // Partner shifts N -> E, so its arrow sits at NE; the dash moves to the west side.
    let red = shift(Location::N, Location::E);
    assert_eq!(
        dash_location(&blue, Role::Blue, Some(&red), cat, GridMode::Diamond),
        Location::W
    );

    let blue = dash(Location::NE, Location::SW, 0, NO_ROT);
    let red = shift(Location::NE, Location::SE);
    assert_eq!(
        dash_location(&blue, Role::Blue, Some(&red), cat, GridMode::Box),
        Location::NW
    );
}

#[test]
fn type3_tables_pick_the_far_perpendicular() {
    let check = |start: Location, shift: Location, resolved: Location| {
        let d = start.cw_distance_to(resolved);
        assert!(d == 2 || d == 6, "{start}/{shift} -> {resolved} not perpendicular");
        let away = resolved.cw_distance_to(shift).min(shift.cw_distance_to(resolved));
        assert_eq!(away, 3, "{start}/{shift} -> {resolved} not the far side");
    };
    for start in [Location::N, Location::E, Location::S, Location::W] {
        for sh in [Location::NE, Location::SE, Location::SW, Location::NW] {
            check(start, sh, type3_diamond_location(start, sh).unwrap());
        }
    }
    for start in [Location::NE, Location::SE, Location::SW, Location::NW] {
        for sh in [Location::N, Location::E, Location::S, Location::W] {
            check(start, sh, type3_box_location(start, sh).unwrap());
        }
    }
}

#[test]
fn type3_without_partner_uses_default_rule() {
    let blue = dash(Location::E, Location::W, 0, NO_ROT);
    assert_eq!(
        dash_location(&blue, Role::Blue, None, LetterCategory::Type3, GridMode::Diamond),
        Location::S
    );
}
