use crate::{
    domain::letter::LetterCategory,
    domain::location::{GridMode, Location},
    domain::motion::{MotionData, Role, RotationDirection},
    positioning::location::shift_location,
};

/// Location of a dash arrow, which cannot be read off its start and end alone.
///
/// Every branch is total: a key missing from its table resolves to `motion.start_loc`.
pub fn dash_location(
    motion: &MotionData,
    role: Role,
    other: Option<&MotionData>,
    category: LetterCategory,
    grid_mode: GridMode,
) -> Location {
    let zero = motion.turns.is_zero();

    match (category, other) {
        (LetterCategory::BothZeroTurnSpecial, _) if !zero => rotating_dash_location(motion),
        (LetterCategory::BothZeroTurnSpecial, Some(other)) if !other.turns.is_zero() => {
            rotating_dash_location(other).opposite()
        }
        (LetterCategory::BothZeroTurnSpecial, _) => {
            both_zero_turn_location(role, motion.start_loc, motion.end_loc)
                .unwrap_or(motion.start_loc)
        }
        (LetterCategory::LambdaZeroTurn, other) if zero => other
            .and_then(|other| {
                lambda_zero_turn_location(motion.start_loc, motion.end_loc, other.end_loc)
            })
            .unwrap_or(motion.start_loc),
        (LetterCategory::Type3, Some(other)) if zero => {
            let shift = shift_location(other.start_loc, other.end_loc).unwrap_or(other.start_loc);
            let resolved = match grid_mode {
                GridMode::Diamond => type3_diamond_location(motion.start_loc, shift),
                GridMode::Box => type3_box_location(motion.start_loc, shift),
            };
            resolved.unwrap_or(motion.start_loc)
        }
        _ if zero => default_zero_turn_location(motion.start_loc, motion.end_loc)
            .unwrap_or_else(|| {
                tracing::debug!(
                    start = %motion.start_loc,
                    end = %motion.end_loc,
                    "zero-turn dash without a table entry; using start location"
                );
                motion.start_loc
            }),
        _ => rotating_dash_location(motion),
    }
}

/// A rotating dash sits a quarter turn from its start, in the prop's spin direction.
pub(crate) fn rotating_dash_location(motion: &MotionData) -> Location {
    match motion.prop_rot_dir {
        RotationDirection::Clockwise => motion.start_loc.step_cw(2),
        RotationDirection::CounterClockwise => motion.start_loc.step_ccw(2),
        RotationDirection::NoRotation => motion.start_loc,
    }
}

fn default_zero_turn_location(start: Location, end: Location) -> Option<Location> {
    use Location::*;

    match (start, end) {
        (N, S) => Some(E),
        (E, W) => Some(S),
        (S, N) => Some(W),
        (W, E) => Some(N),
        (NE, SW) => Some(SE),
        (SE, NW) => Some(SW),
        (SW, NE) => Some(NW),
        (NW, SE) => Some(NE),
        _ => None,
    }
}

fn both_zero_turn_location(role: Role, start: Location, end: Location) -> Option<Location> {
    use Location::*;

    match (role, (start, end)) {
        (Role::Red, (N, S)) => Some(E),
        (Role::Red, (E, W)) => Some(N),
        (Role::Red, (S, N)) => Some(E),
        (Role::Red, (W, E)) => Some(N),
        (Role::Red, (NW, SE)) => Some(NE),
        (Role::Red, (NE, SW)) => Some(SE),
        (Role::Red, (SW, NE)) => Some(SE),
        (Role::Red, (SE, NW)) => Some(NE),
        (Role::Blue, (N, S)) => Some(W),
        (Role::Blue, (E, W)) => Some(S),
        (Role::Blue, (S, N)) => Some(W),
        (Role::Blue, (W, E)) => Some(S),
        (Role::Blue, (NW, SE)) => Some(SW),
        (Role::Blue, (NE, SW)) => Some(NW),
        (Role::Blue, (SW, NE)) => Some(NW),
        (Role::Blue, (SE, NW)) => Some(SW),
        _ => None,
    }
}

fn lambda_zero_turn_location(
    start: Location,
    end: Location,
    other_end: Location,
) -> Option<Location> {
    use Location::*;

    match ((start, end), other_end) {
        ((N, S), W) => Some(E),
        ((N, S), E) => Some(W),
        ((S, N), W) => Some(E),
        ((S, N), E) => Some(W),
        ((E, W), S) => Some(N),
        ((E, W), N) => Some(S),
        ((W, E), S) => Some(N),
        ((W, E), N) => Some(S),
        ((NE, SW), NW) => Some(SE),
        ((NE, SW), SE) => Some(NW),
        ((SW, NE), NW) => Some(SE),
        ((SW, NE), SE) => Some(NW),
        ((NW, SE), NE) => Some(SW),
        ((NW, SE), SW) => Some(NE),
        ((SE, NW), NE) => Some(SW),
        ((SE, NW), SW) => Some(NE),
        _ => None,
    }
}

fn type3_diamond_location(start: Location, shift: Location) -> Option<Location> {
    use Location::*;

    match (start, shift) {
        (N, NE) => Some(W),
        (N, SE) => Some(W),
        (N, SW) => Some(E),
        (N, NW) => Some(E),
        (E, NE) => Some(S),
        (E, NW) => Some(S),
        (E, SE) => Some(N),
        (E, SW) => Some(N),
        (S, NE) => Some(W),
        (S, SE) => Some(W),
        (S, SW) => Some(E),
        (S, NW) => Some(E),
        (W, NE) => Some(S),
        (W, NW) => Some(S),
        (W, SE) => Some(N),
        (W, SW) => Some(N),
        _ => None,
    }
}

fn type3_box_location(start: Location, shift: Location) -> Option<Location> {
    use Location::*;

    match (start, shift) {
        (NE, N) => Some(SE),
        (NE, W) => Some(SE),
        (NE, E) => Some(NW),
        (NE, S) => Some(NW),
        (SE, N) => Some(SW),
        (SE, E) => Some(SW),
        (SE, S) => Some(NE),
        (SE, W) => Some(NE),
        (SW, N) => Some(SE),
        (SW, W) => Some(SE),
        (SW, E) => Some(NW),
        (SW, S) => Some(NW),
        (NW, N) => Some(SW),
        (NW, E) => Some(SW),
        (NW, S) => Some(NE),
        (NW, W) => Some(NE),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/positioning/dash.rs"]
mod tests;
