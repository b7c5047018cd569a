use crate::{
    domain::location::Location,
    domain::motion::{Orientation, PropData, Role},
    domain::pictograph::PictographContext,
    foundation::core::{Geometry, Point, SCENE_CENTER, Vec2},
    foundation::math::wrap_degrees,
    positioning::anchors::hand_point,
};

/// Distance each prop is pushed away from its partner when both share a hand point.
pub const BETA_OFFSET: f64 = 25.0;

/// Prop rotation for a prop resting at `location` in `orientation`.
pub fn prop_rotation(orientation: Orientation, location: Location) -> u16 {
    // Props held "in" lie along the radius with their head toward the center.
    let inward = match location {
        Location::N => 90,
        Location::NE => 135,
        Location::E => 180,
        Location::SE => 225,
        Location::S => 270,
        Location::SW => 315,
        Location::W => 0,
        Location::NW => 45,
    };
    let turn = match orientation {
        Orientation::In => 0,
        Orientation::Out => 180,
        Orientation::Clock => 270,
        Orientation::Counter => 90,
    };
    wrap_degrees(inward + turn)
}

/// Separation applied to `prop` when both props end on the same hand point.
pub fn beta_offset(prop: &PropData, ctx: &PictographContext) -> Vec2 {
    let own = &prop.motion;
    let other = ctx.motion(prop.role.other());
    if own.end_loc != other.end_loc
        || own.end_orientation.is_radial() != other.end_orientation.is_radial()
    {
        return Vec2::ZERO;
    }

    let radial = (hand_point(own.end_loc) - SCENE_CENTER).normalize();
    let axis = if own.end_orientation.is_radial() {
        // Radial props overlap along the radius; part them across it.
        Vec2::new(-radial.y, radial.x)
    } else {
        radial
    };
    let sign = match prop.role {
        Role::Blue => 1.0,
        Role::Red => -1.0,
    };
    axis * (BETA_OFFSET * sign)
}

/// Hand point plus beta separation, rotated by end orientation; never mirrored.
pub fn prop_geometry(prop: &PropData, ctx: &PictographContext) -> Geometry {
    let motion = &prop.motion;
    let anchor: Point = hand_point(motion.end_loc) + beta_offset(prop, ctx);
    Geometry {
        x: anchor.x,
        y: anchor.y,
        rotation_deg: f64::from(prop_rotation(motion.end_orientation, motion.end_loc)),
        mirrored: false,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/positioning/prop.rs"]
mod tests;
