use crate::domain::{
    location::Location,
    motion::{MotionData, MotionType, Orientation, RotationDirection},
};

/// Direction the hand travels around the grid between start and end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HandpathDirection {
    /// One to three eighths clockwise.
    Clockwise,
    /// One to three eighths counter-clockwise.
    CounterClockwise,
    /// Straight through the center.
    Dash,
    /// No travel.
    Static,
}

impl HandpathDirection {
    /// The rotation sense of the path, if it goes around the grid at all.
    pub fn as_rotation(self) -> Option<RotationDirection> {
        match self {
            HandpathDirection::Clockwise => Some(RotationDirection::Clockwise),
            HandpathDirection::CounterClockwise => Some(RotationDirection::CounterClockwise),
            HandpathDirection::Dash | HandpathDirection::Static => None,
        }
    }
}

/// Classifies the hand travel from `start` to `end`.
pub fn handpath_direction(start: Location, end: Location) -> HandpathDirection {
    match start.cw_distance_to(end) {
        0 => HandpathDirection::Static,
        4 => HandpathDirection::Dash,
        1..=3 => HandpathDirection::Clockwise,
        _ => HandpathDirection::CounterClockwise,
    }
}

/// Rotation sense used by the shift-family tables.
///
/// The prop's own spin wins; a non-spinning prop borrows the handpath direction, and a
/// motion with neither falls back to clockwise.
pub fn effective_rotation(motion: &MotionData) -> RotationDirection {
    if motion.prop_rot_dir.is_rotating() {
        return motion.prop_rot_dir;
    }
    handpath_direction(motion.start_loc, motion.end_loc)
        .as_rotation()
        .unwrap_or(RotationDirection::Clockwise)
}

/// Orientation the prop ends in after performing `motion`.
pub fn end_orientation(motion: &MotionData) -> Orientation {
    let start = motion.start_orientation;
    match motion.motion_type {
        MotionType::Float => float_end_orientation(
            start,
            handpath_direction(motion.start_loc, motion.end_loc),
        ),
        MotionType::Static | MotionType::Pro | MotionType::Anti | MotionType::Dash => {
            let keeps_on_even = matches!(motion.motion_type, MotionType::Static | MotionType::Pro);
            let whole_odd = motion.turns.whole_part() % 2 == 1;

            if motion.turns.is_whole() {
                return if keeps_on_even != whole_odd {
                    start
                } else {
                    start.switched()
                };
            }

            let Some(quarter) = half_turn_orientation(start, motion.prop_rot_dir, keeps_on_even)
            else {
                return start;
            };
            if whole_odd { quarter.switched() } else { quarter }
        }
    }
}

fn half_turn_orientation(
    start: Orientation,
    dir: RotationDirection,
    prospin: bool,
) -> Option<Orientation> {
    use Orientation::*;
    use RotationDirection::*;

    let pro = match (start, dir) {
        (_, NoRotation) => return None,
        (In, Clockwise) => Clock,
        (In, CounterClockwise) => Counter,
        (Out, Clockwise) => Counter,
        (Out, CounterClockwise) => Clock,
        (Clock, Clockwise) => Out,
        (Clock, CounterClockwise) => In,
        (Counter, Clockwise) => In,
        (Counter, CounterClockwise) => Out,
    };
    // Antispin lands on the other member of the same family.
    Some(if prospin { pro } else { pro.switched() })
}

fn float_end_orientation(start: Orientation, handpath: HandpathDirection) -> Orientation {
    use Orientation::*;

    match (handpath, start) {
        (HandpathDirection::Clockwise, In) => Counter,
        (HandpathDirection::Clockwise, Out) => Clock,
        (HandpathDirection::Clockwise, Clock) => In,
        (HandpathDirection::Clockwise, Counter) => Out,
        (HandpathDirection::CounterClockwise, In) => Clock,
        (HandpathDirection::CounterClockwise, Out) => Counter,
        (HandpathDirection::CounterClockwise, Clock) => Out,
        (HandpathDirection::CounterClockwise, Counter) => In,
        (HandpathDirection::Dash | HandpathDirection::Static, _) => start,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/domain/orientation.rs"]
mod tests;
