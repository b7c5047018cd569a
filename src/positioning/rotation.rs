use crate::{
    domain::location::Location,
    domain::motion::{MotionData, MotionType, RotationDirection},
    domain::orientation::effective_rotation,
};

/// Rotation for a dash without spin whose start and end are not diametric.
pub const DASH_FALLBACK_ROTATION: u16 = 0;

/// Arrow rotation in whole degrees, always one of the eight multiples of 45.
pub fn rotation_angle(motion: &MotionData, location: Location) -> u16 {
    match motion.motion_type {
        MotionType::Static => static_rotation(location),
        MotionType::Pro | MotionType::Float => pro_rotation(effective_rotation(motion), location),
        MotionType::Anti => anti_rotation(effective_rotation(motion), location),
        MotionType::Dash => match motion.prop_rot_dir {
            RotationDirection::NoRotation => {
                dash_still_rotation(motion.start_loc, motion.end_loc)
                    .unwrap_or(DASH_FALLBACK_ROTATION)
            }
            dir => dash_spin_rotation(dir, location),
        },
    }
}

/// Static arrows point at the center.
fn static_rotation(location: Location) -> u16 {
    match location {
        Location::N => 180,
        Location::NE => 225,
        Location::E => 270,
        Location::SE => 315,
        Location::S => 0,
        Location::SW => 45,
        Location::W => 90,
        Location::NW => 135,
    }
}

fn pro_rotation(dir: RotationDirection, location: Location) -> u16 {
    use Location::*;

    match (dir, location) {
        (RotationDirection::CounterClockwise, loc) => match loc {
            N => 315,
            NE => 270,
            E => 225,
            SE => 180,
            S => 135,
            SW => 90,
            W => 45,
            NW => 0,
        },
        (_, loc) => match loc {
            N => 315,
            NE => 0,
            E => 45,
            SE => 90,
            S => 135,
            SW => 180,
            W => 225,
            NW => 270,
        },
    }
}

/// Antispin arrows use the prospin table of the opposite spin.
fn anti_rotation(dir: RotationDirection, location: Location) -> u16 {
    let mirrored = match dir {
        RotationDirection::CounterClockwise => RotationDirection::Clockwise,
        _ => RotationDirection::CounterClockwise,
    };
    pro_rotation(mirrored, location)
}

fn dash_still_rotation(start: Location, end: Location) -> Option<u16> {
    use Location::*;

    match (start, end) {
        (W, E) => Some(0),
        (NW, SE) => Some(45),
        (N, S) => Some(90),
        (NE, SW) => Some(135),
        (E, W) => Some(180),
        (SE, NW) => Some(225),
        (S, N) => Some(270),
        (SW, NE) => Some(315),
        _ => None,
    }
}

fn dash_spin_rotation(dir: RotationDirection, location: Location) -> u16 {
    use Location::*;

    match (dir, location) {
        (RotationDirection::CounterClockwise, loc) => match loc {
            N => 270,
            NE => 225,
            E => 180,
            SE => 135,
            S => 90,
            SW => 45,
            W => 0,
            NW => 315,
        },
        (_, loc) => match loc {
            N => 270,
            NE => 315,
            E => 0,
            SE => 45,
            S => 90,
            SW => 135,
            W => 180,
            NW => 225,
        },
    }
}

#[cfg(test)]
#[path = "../../tests/unit/positioning/rotation.rs"]
mod tests;
