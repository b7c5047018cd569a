use crate::domain::motion::{MotionData, MotionType, RotationDirection};

/// Whether the arrow glyph is flipped horizontally.
///
/// Antispin arrows are authored facing the other way, so they flip on clockwise spin;
/// every other type flips on counter-clockwise spin. No spin never flips.
pub fn should_mirror(motion: &MotionData) -> bool {
    match motion.motion_type {
        MotionType::Anti => motion.prop_rot_dir == RotationDirection::Clockwise,
        MotionType::Static | MotionType::Pro | MotionType::Dash | MotionType::Float => {
            motion.prop_rot_dir == RotationDirection::CounterClockwise
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/positioning/mirror.rs"]
mod tests;
