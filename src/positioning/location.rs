use crate::{
    domain::location::Location,
    domain::motion::{ArrowData, MotionType},
    domain::pictograph::PictographContext,
    positioning::dash::dash_location,
};

/// Symbolic compass location where an arrow glyph sits.
pub fn arrow_location(arrow: &ArrowData, ctx: &PictographContext) -> Location {
    let motion = &arrow.motion;
    match motion.motion_type {
        MotionType::Static => motion.start_loc,
        MotionType::Pro | MotionType::Anti | MotionType::Float => {
            shift_location(motion.start_loc, motion.end_loc).unwrap_or(motion.start_loc)
        }
        MotionType::Dash => dash_location(
            motion,
            arrow.role,
            Some(ctx.motion(arrow.role.other())),
            ctx.letter_category(),
            ctx.grid_mode(),
        ),
    }
}

/// Compass point between two neighbouring grid points, order-insensitive.
///
/// Only quarter-turn pairs are defined; anything else (same point, opposite points,
/// eighth steps) has no midpoint on the compass.
pub fn shift_location(a: Location, b: Location) -> Option<Location> {
    use Location::*;

    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    match (lo, hi) {
        (N, E) => Some(NE),
        (E, S) => Some(SE),
        (S, W) => Some(SW),
        (N, W) => Some(NW),
        (NE, NW) => Some(N),
        (NE, SE) => Some(E),
        (SE, SW) => Some(S),
        (SW, NW) => Some(W),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/positioning/location.rs"]
mod tests;
