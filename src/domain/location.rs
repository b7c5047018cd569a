use crate::foundation::error::{PictographError, PictographResult};

/// One of the eight compass points of the grid.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    /// North.
    N,
    /// North-east.
    NE,
    /// East.
    E,
    /// South-east.
    SE,
    /// South.
    S,
    /// South-west.
    SW,
    /// West.
    W,
    /// North-west.
    NW,
}

impl Location {
    /// All locations in clockwise order starting at north.
    pub const ALL: [Location; 8] = [
        Location::N,
        Location::NE,
        Location::E,
        Location::SE,
        Location::S,
        Location::SW,
        Location::W,
        Location::NW,
    ];

    /// Clockwise compass index, `N = 0` through `NW = 7`.
    pub fn index(self) -> u8 {
        match self {
            Location::N => 0,
            Location::NE => 1,
            Location::E => 2,
            Location::SE => 3,
            Location::S => 4,
            Location::SW => 5,
            Location::W => 6,
            Location::NW => 7,
        }
    }

    /// Inverse of [`Location::index`]; indices wrap modulo 8.
    pub fn from_index(idx: u8) -> Self {
        Self::ALL[usize::from(idx % 8)]
    }

    /// Diametrically opposite point.
    pub fn opposite(self) -> Self {
        self.step_cw(4)
    }

    /// Rotates clockwise by `steps` eighths of a turn.
    pub fn step_cw(self, steps: u8) -> Self {
        Self::from_index(self.index() + steps % 8)
    }

    /// Rotates counter-clockwise by `steps` eighths of a turn.
    pub fn step_ccw(self, steps: u8) -> Self {
        Self::from_index(self.index() + 8 - steps % 8)
    }

    /// N, E, S or W.
    pub fn is_cardinal(self) -> bool {
        self.index() % 2 == 0
    }

    /// NE, SE, SW or NW.
    pub fn is_diagonal(self) -> bool {
        !self.is_cardinal()
    }

    /// Quadrant slot used by the directional offset tables.
    ///
    /// Each cardinal shares a slot with the diagonal clockwise of it, so both grid families
    /// (cardinal anchors in diamond mode, diagonal anchors in box mode) index the same four
    /// variants.
    pub fn quadrant_index(self) -> usize {
        usize::from(self.index() / 2)
    }

    /// Clockwise distance from `self` to `other`, in eighths of a turn.
    pub fn cw_distance_to(self, other: Location) -> u8 {
        (other.index() + 8 - self.index()) % 8
    }

    /// Wire name, e.g. `"ne"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Location::N => "n",
            Location::NE => "ne",
            Location::E => "e",
            Location::SE => "se",
            Location::S => "s",
            Location::SW => "sw",
            Location::W => "w",
            Location::NW => "nw",
        }
    }

    /// Parses a short (`ne`) or long (`northeast`) name, case-insensitively.
    pub fn parse(s: &str) -> PictographResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "n" | "north" => Ok(Location::N),
            "ne" | "northeast" => Ok(Location::NE),
            "e" | "east" => Ok(Location::E),
            "se" | "southeast" => Ok(Location::SE),
            "s" | "south" => Ok(Location::S),
            "sw" | "southwest" => Ok(Location::SW),
            "w" | "west" => Ok(Location::W),
            "nw" | "northwest" => Ok(Location::NW),
            other => Err(PictographError::validation(format!(
                "unknown location '{other}'"
            ))),
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which family of compass points the grid emphasizes.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum GridMode {
    /// Cardinal hand points (N/E/S/W).
    #[default]
    Diamond,
    /// Diagonal hand points (NE/SE/SW/NW).
    Box,
}

impl GridMode {
    /// Both grid modes.
    pub const ALL: [GridMode; 2] = [GridMode::Diamond, GridMode::Box];

    /// Wire name, `"diamond"` or `"box"`.
    pub fn as_str(self) -> &'static str {
        match self {
            GridMode::Diamond => "diamond",
            GridMode::Box => "box",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/domain/location.rs"]
mod tests;
