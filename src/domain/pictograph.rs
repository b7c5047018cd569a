use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::{
    domain::letter::LetterCategory,
    domain::location::{GridMode, Location},
    domain::motion::{
        ArrowData, MotionData, MotionType, Orientation, PropData, Role, RotationDirection, Turns,
    },
    domain::orientation::end_orientation,
    foundation::core::Geometry,
    foundation::error::{PictographError, PictographResult},
};

/// Everything the engine knows about one beat: both roles' glyphs, the letter and the grid.
///
/// Each role has exactly one motion, shared by its arrow and its prop. Motions are only
/// replaced through [`PictographContext::set_motion`], which keeps both glyphs in step.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PictographContext {
    letter: Option<String>,
    grid_mode: GridMode,
    blue: ArrowData,
    red: ArrowData,
    blue_prop: PropData,
    red_prop: PropData,
}

impl PictographContext {
    /// Builds a context; surrounding whitespace is stripped from the letter and a blank
    /// letter counts as none.
    pub fn new(
        letter: Option<String>,
        grid_mode: GridMode,
        blue: MotionData,
        red: MotionData,
    ) -> Self {
        Self {
            letter: letter
                .map(|l| l.trim().to_string())
                .filter(|l| !l.is_empty()),
            grid_mode,
            blue: ArrowData::new(Role::Blue, blue),
            red: ArrowData::new(Role::Red, red),
            blue_prop: PropData::new(Role::Blue, blue),
            red_prop: PropData::new(Role::Red, red),
        }
    }

    /// Normalized letter of the beat, if any.
    pub fn letter(&self) -> Option<&str> {
        self.letter.as_deref()
    }

    /// Grid the beat is drawn on.
    pub fn grid_mode(&self) -> GridMode {
        self.grid_mode
    }

    /// `role`'s arrow glyph.
    pub fn arrow(&self, role: Role) -> &ArrowData {
        match role {
            Role::Blue => &self.blue,
            Role::Red => &self.red,
        }
    }

    /// `role`'s prop glyph.
    pub fn prop(&self, role: Role) -> &PropData {
        match role {
            Role::Blue => &self.blue_prop,
            Role::Red => &self.red_prop,
        }
    }

    /// The single motion shared by `role`'s arrow and prop.
    pub fn motion(&self, role: Role) -> &MotionData {
        &self.arrow(role).motion
    }

    /// Replaces `role`'s motion on both glyphs and drops their stale geometry.
    pub fn set_motion(&mut self, role: Role, motion: MotionData) {
        let (arrow, prop) = match role {
            Role::Blue => (&mut self.blue, &mut self.blue_prop),
            Role::Red => (&mut self.red, &mut self.red_prop),
        };
        *arrow = ArrowData::new(role, motion);
        *prop = PropData::new(role, motion);
    }

    pub(crate) fn set_geometry(&mut self, role: Role, arrow: Geometry, prop: Geometry) {
        match role {
            Role::Blue => {
                self.blue.computed = Some(arrow);
                self.blue_prop.computed = Some(prop);
            }
            Role::Red => {
                self.red.computed = Some(arrow);
                self.red_prop.computed = Some(prop);
            }
        }
    }

    /// Category of the letter, resolved for the dash rules.
    pub fn letter_category(&self) -> LetterCategory {
        LetterCategory::classify(self.letter())
    }
}

/// JSON boundary record for one beat, as produced by the editor or the asset pipeline.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Beat {
    /// Letter glyph naming the beat.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter: Option<String>,
    /// Grid the beat is drawn on.
    #[serde(default)]
    pub grid_mode: GridMode,
    /// Blue role's motion.
    pub blue: BeatMotion,
    /// Red role's motion.
    pub red: BeatMotion,
}

/// One role's motion in a [`Beat`]; a missing end orientation is derived.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct BeatMotion {
    /// Kind of motion.
    pub motion_type: MotionType,
    /// Where the hand starts.
    pub start_loc: Location,
    /// Where the hand ends.
    pub end_loc: Location,
    /// Prop turns, zero when omitted.
    #[serde(default)]
    pub turns: Turns,
    /// Spin direction, none when omitted.
    #[serde(default)]
    pub prop_rot_dir: RotationDirection,
    /// Start orientation, `in` when omitted.
    #[serde(default)]
    pub start_orientation: Orientation,
    /// End orientation; derived from the rest when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_orientation: Option<Orientation>,
}

impl From<BeatMotion> for MotionData {
    fn from(value: BeatMotion) -> Self {
        let mut motion = MotionData {
            motion_type: value.motion_type,
            start_loc: value.start_loc,
            end_loc: value.end_loc,
            turns: value.turns,
            prop_rot_dir: value.prop_rot_dir,
            start_orientation: value.start_orientation,
            end_orientation: value.start_orientation,
        };
        motion.end_orientation = value
            .end_orientation
            .unwrap_or_else(|| end_orientation(&motion));
        motion
    }
}

impl From<Beat> for PictographContext {
    fn from(value: Beat) -> Self {
        PictographContext::new(
            value.letter,
            value.grid_mode,
            value.blue.into(),
            value.red.into(),
        )
    }
}

impl Beat {
    /// Parse a beat from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> PictographResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| PictographError::serde(format!("parse beat JSON: {e}")))
    }

    /// Parse a beat from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> PictographResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            PictographError::validation(format!("open beat JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Parse a JSON array of beats from a file on disk.
    pub fn many_from_path(path: impl AsRef<Path>) -> PictographResult<Vec<Self>> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            PictographError::validation(format!("open beats JSON '{}': {e}", path.display()))
        })?;
        serde_json::from_reader(BufReader::new(f))
            .map_err(|e| PictographError::serde(format!("parse beats JSON array: {e}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/domain/pictograph.rs"]
mod tests;
