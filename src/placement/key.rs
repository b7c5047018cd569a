use crate::{
    domain::location::Location,
    domain::motion::{MotionData, MotionType, Role, RotationDirection, Turns},
    domain::pictograph::PictographContext,
};

/// Compass span covered between start and end, regardless of direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Travel {
    /// Start equals end.
    Hold,
    /// One eighth of the grid.
    Eighth,
    /// A quarter of the grid.
    Quarter,
    /// Three eighths of the grid.
    ThreeEighths,
    /// Straight across.
    Half,
}

impl Travel {
    /// Shortest span between two points.
    pub fn between(start: Location, end: Location) -> Self {
        let cw = start.cw_distance_to(end);
        match cw.min(8 - cw) {
            0 => Travel::Hold,
            1 => Travel::Eighth,
            2 => Travel::Quarter,
            3 => Travel::ThreeEighths,
            _ => Travel::Half,
        }
    }

    /// Key fragment, e.g. `"quarter"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Travel::Hold => "hold",
            Travel::Eighth => "eighth",
            Travel::Quarter => "quarter",
            Travel::ThreeEighths => "three_eighths",
            Travel::Half => "half",
        }
    }
}

/// Lookup key into the default placement table.
///
/// Rendered as `{motion}_{travel}_{rotation}_{turns}`, e.g. `pro_quarter_cw_1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlacementKey {
    /// Kind of motion.
    pub motion_type: MotionType,
    /// Span travelled.
    pub travel: Travel,
    /// Prop spin.
    pub rotation: RotationDirection,
    /// Prop turns.
    pub turns: Turns,
}

impl PlacementKey {
    /// Key describing `motion`.
    pub fn for_motion(motion: &MotionData) -> Self {
        Self {
            motion_type: motion.motion_type,
            travel: Travel::between(motion.start_loc, motion.end_loc),
            rotation: motion.prop_rot_dir,
            turns: motion.turns,
        }
    }
}

impl std::fmt::Display for PlacementKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}_{}_{}_{}",
            self.motion_type.as_str(),
            self.travel.as_str(),
            self.rotation.as_str(),
            self.turns
        )
    }
}

/// Which families the two props start in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum OrientationLayer {
    /// Both props radial (in/out).
    Layer1,
    /// Both props non-radial (clock/counter).
    Layer2,
    /// Blue radial, red non-radial.
    Layer3Blue1Red2,
    /// Blue non-radial, red radial.
    Layer3Blue2Red1,
}

impl OrientationLayer {
    /// Layer of the beat, from both start orientations.
    pub fn of(ctx: &PictographContext) -> Self {
        let blue = ctx.motion(Role::Blue).start_orientation.is_radial();
        let red = ctx.motion(Role::Red).start_orientation.is_radial();
        match (blue, red) {
            (true, true) => OrientationLayer::Layer1,
            (false, false) => OrientationLayer::Layer2,
            (true, false) => OrientationLayer::Layer3Blue1Red2,
            (false, true) => OrientationLayer::Layer3Blue2Red1,
        }
    }

    /// Key fragment, e.g. `"layer1"`.
    pub fn as_str(self) -> &'static str {
        match self {
            OrientationLayer::Layer1 => "layer1",
            OrientationLayer::Layer2 => "layer2",
            OrientationLayer::Layer3Blue1Red2 => "layer3_blue1_red2",
            OrientationLayer::Layer3Blue2Red1 => "layer3_blue2_red1",
        }
    }
}

/// Beat-wide part of a special-placement key: `{layer}_({blue_turns},{red_turns})`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OrientationSignature {
    /// Orientation layer of the beat.
    pub layer: OrientationLayer,
    /// Blue role's turns.
    pub blue_turns: Turns,
    /// Red role's turns.
    pub red_turns: Turns,
}

impl OrientationSignature {
    /// Signature of the beat in `ctx`.
    pub fn of(ctx: &PictographContext) -> Self {
        Self {
            layer: OrientationLayer::of(ctx),
            blue_turns: ctx.motion(Role::Blue).turns,
            red_turns: ctx.motion(Role::Red).turns,
        }
    }

    /// Keys tried in order for one arrow: role-specific first, then motion-type-specific.
    pub fn candidate_keys(&self, role: Role, motion_type: MotionType) -> [String; 2] {
        [
            format!("{self}_{}", role.as_str()),
            format!("{self}_{}", motion_type.as_str()),
        ]
    }
}

impl std::fmt::Display for OrientationSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}_({},{})",
            self.layer.as_str(),
            self.blue_turns,
            self.red_turns
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/placement/key.rs"]
mod tests;
