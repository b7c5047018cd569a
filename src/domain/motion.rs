use crate::{
    domain::location::Location,
    foundation::core::Geometry,
    foundation::error::{PictographError, PictographResult},
};

/// Kind of motion a role performs during a beat.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum MotionType {
    /// Hand stays put.
    Static,
    /// Prospin shift around a quarter of the grid.
    Pro,
    /// Antispin shift around a quarter of the grid.
    Anti,
    /// Hand crosses through the center.
    Dash,
    /// Shift with no prop spin.
    Float,
}

impl MotionType {
    /// Every motion type.
    pub const ALL: [MotionType; 5] = [
        MotionType::Static,
        MotionType::Pro,
        MotionType::Anti,
        MotionType::Dash,
        MotionType::Float,
    ];

    /// Pro, anti and float travel a quarter around the grid and share the layer-two anchors.
    pub fn is_shift(self) -> bool {
        matches!(self, MotionType::Pro | MotionType::Anti | MotionType::Float)
    }

    /// Wire name, e.g. `"pro"`.
    pub fn as_str(self) -> &'static str {
        match self {
            MotionType::Static => "static",
            MotionType::Pro => "pro",
            MotionType::Anti => "anti",
            MotionType::Dash => "dash",
            MotionType::Float => "float",
        }
    }
}

/// Spin direction of the prop (or of the handpath, where noted).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
    serde::Deserialize,
)]
pub enum RotationDirection {
    /// Clockwise spin (`cw`).
    #[serde(rename = "cw")]
    Clockwise,
    /// Counter-clockwise spin (`ccw`).
    #[serde(rename = "ccw")]
    CounterClockwise,
    /// No spin (`no_rot`).
    #[default]
    #[serde(rename = "no_rot")]
    NoRotation,
}

impl RotationDirection {
    /// Every rotation direction.
    pub const ALL: [RotationDirection; 3] = [
        RotationDirection::Clockwise,
        RotationDirection::CounterClockwise,
        RotationDirection::NoRotation,
    ];

    /// False only for [`RotationDirection::NoRotation`].
    pub fn is_rotating(self) -> bool {
        self != RotationDirection::NoRotation
    }

    /// Wire name, e.g. `"cw"`.
    pub fn as_str(self) -> &'static str {
        match self {
            RotationDirection::Clockwise => "cw",
            RotationDirection::CounterClockwise => "ccw",
            RotationDirection::NoRotation => "no_rot",
        }
    }
}

/// How the prop is held relative to the grid center.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Head toward the center.
    #[default]
    In,
    /// Head away from the center.
    Out,
    /// Across the radius, pointing clockwise.
    Clock,
    /// Across the radius, pointing counter-clockwise.
    Counter,
}

impl Orientation {
    /// Every orientation.
    pub const ALL: [Orientation; 4] = [
        Orientation::In,
        Orientation::Out,
        Orientation::Clock,
        Orientation::Counter,
    ];

    /// In and out point along the radius; clock and counter lie across it.
    pub fn is_radial(self) -> bool {
        matches!(self, Orientation::In | Orientation::Out)
    }

    /// Flips within the same family: in <-> out, clock <-> counter.
    pub fn switched(self) -> Self {
        match self {
            Orientation::In => Orientation::Out,
            Orientation::Out => Orientation::In,
            Orientation::Clock => Orientation::Counter,
            Orientation::Counter => Orientation::Clock,
        }
    }
}

/// Non-negative turn count in half-turn steps.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
    serde::Deserialize,
)]
#[serde(try_from = "f64", into = "f64")]
pub struct Turns {
    halves: u32,
}

impl Turns {
    /// No turns.
    pub const ZERO: Turns = Turns { halves: 0 };

    /// Builds a count from a number of half turns.
    pub fn from_halves(halves: u32) -> Self {
        Self { halves }
    }

    /// Validates a finite, non-negative multiple of 0.5.
    pub fn new(turns: f64) -> PictographResult<Self> {
        if !turns.is_finite() {
            return Err(PictographError::validation("turns must be finite"));
        }
        if turns < 0.0 {
            return Err(PictographError::validation(format!(
                "turns must be >= 0, got {turns}"
            )));
        }
        let halves = turns * 2.0;
        if halves.fract() != 0.0 || halves > f64::from(u32::MAX) {
            return Err(PictographError::validation(format!(
                "turns must be a multiple of 0.5, got {turns}"
            )));
        }
        Ok(Self {
            halves: halves as u32,
        })
    }

    /// Number of half turns.
    pub fn halves(self) -> u32 {
        self.halves
    }

    /// Turn count as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.halves) / 2.0
    }

    /// True for zero turns.
    pub fn is_zero(self) -> bool {
        self.halves == 0
    }

    /// True when there is no trailing half turn.
    pub fn is_whole(self) -> bool {
        self.halves % 2 == 0
    }

    /// Number of complete turns, ignoring a trailing half.
    pub fn whole_part(self) -> u32 {
        self.halves / 2
    }
}

impl TryFrom<f64> for Turns {
    type Error = PictographError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Turns::new(value)
    }
}

impl From<Turns> for f64 {
    fn from(value: Turns) -> Self {
        value.as_f64()
    }
}

impl std::fmt::Display for Turns {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_whole() {
            write!(f, "{}", self.whole_part())
        } else {
            write!(f, "{}.5", self.whole_part())
        }
    }
}

/// Which performer a motion belongs to.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Blue performer.
    Blue,
    /// Red performer.
    Red,
}

impl Role {
    /// Both roles.
    pub const ALL: [Role; 2] = [Role::Blue, Role::Red];

    /// The partner role.
    pub fn other(self) -> Self {
        match self {
            Role::Blue => Role::Red,
            Role::Red => Role::Blue,
        }
    }

    /// Wire name, `"blue"` or `"red"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Blue => "blue",
            Role::Red => "red",
        }
    }
}

/// Abstract description of one role's motion within a beat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MotionData {
    /// Kind of motion.
    pub motion_type: MotionType,
    /// Where the hand starts.
    pub start_loc: Location,
    /// Where the hand ends.
    pub end_loc: Location,
    /// Prop turns performed during the motion.
    pub turns: Turns,
    /// Spin direction of the prop.
    #[serde(default)]
    pub prop_rot_dir: RotationDirection,
    /// Prop orientation at the start.
    #[serde(default)]
    pub start_orientation: Orientation,
    /// Prop orientation at the end.
    #[serde(default)]
    pub end_orientation: Orientation,
}

impl MotionData {
    /// Builds a motion whose end orientation is derived from the other fields.
    pub fn new(
        motion_type: MotionType,
        start_loc: Location,
        end_loc: Location,
        turns: Turns,
        prop_rot_dir: RotationDirection,
        start_orientation: Orientation,
    ) -> Self {
        let mut motion = Self {
            motion_type,
            start_loc,
            end_loc,
            turns,
            prop_rot_dir,
            start_orientation,
            end_orientation: start_orientation,
        };
        motion.end_orientation = crate::domain::orientation::end_orientation(&motion);
        motion
    }
}

/// Arrow glyph for one role.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ArrowData {
    /// Owner of the glyph.
    pub role: Role,
    /// Motion the glyph depicts.
    pub motion: MotionData,
    /// Derived value; recomputed whole from `motion` and the surrounding context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub computed: Option<Geometry>,
}

impl ArrowData {
    /// Glyph with no computed geometry yet.
    pub fn new(role: Role, motion: MotionData) -> Self {
        Self {
            role,
            motion,
            computed: None,
        }
    }
}

/// Prop glyph for one role.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PropData {
    /// Owner of the glyph.
    pub role: Role,
    /// Motion the glyph depicts.
    pub motion: MotionData,
    /// Derived value; recomputed whole from `motion` and the surrounding context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub computed: Option<Geometry>,
}

impl PropData {
    /// Glyph with no computed geometry yet.
    pub fn new(role: Role, motion: MotionData) -> Self {
        Self {
            role,
            motion,
            computed: None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/domain/motion.rs"]
mod tests;
