//! Read-only placement tables supplied by the asset pipeline.
//!
//! Both tables are parsed once, then frozen behind an `Arc` and shared by every
//! computation. A table that fails to load is reported to the caller and replaced by an
//! empty one, so positioning keeps working with whatever loaded.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::{
    domain::location::GridMode,
    foundation::core::Vec2,
    foundation::error::{PictographError, PictographResult},
};

const BUNDLED_DEFAULTS: &str = include_str!("../../data/placements/default_placements.json");
const BUNDLED_SPECIAL: &str = include_str!("../../data/placements/special_placements.json");

type OffsetTable = BTreeMap<String, [f64; 2]>;

/// `grid_mode -> placement_key -> (dx, dy)`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DefaultPlacements {
    #[serde(default)]
    diamond: OffsetTable,
    #[serde(default, rename = "box")]
    box_: OffsetTable,
}

impl DefaultPlacements {
    /// Parses a default table from JSON.
    pub fn from_reader<R: std::io::Read>(r: R) -> PictographResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| PictographError::config(format!("parse default placements: {e}")))
    }

    /// Parses a default table from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> PictographResult<Self> {
        Self::from_reader(open(path.as_ref(), "default placements")?)
    }

    /// Adds or replaces one entry.
    pub fn insert(&mut self, grid_mode: GridMode, key: impl Into<String>, offset: Vec2) {
        self.table_mut(grid_mode)
            .insert(key.into(), [offset.x, offset.y]);
    }

    /// Offset stored under `key`, if any.
    pub fn get(&self, grid_mode: GridMode, key: &str) -> Option<Vec2> {
        self.table(grid_mode)
            .get(key)
            .map(|[dx, dy]| Vec2::new(*dx, *dy))
    }

    /// Entry count across both grids.
    pub fn len(&self) -> usize {
        self.diamond.len() + self.box_.len()
    }

    /// True when neither grid has entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn table(&self, grid_mode: GridMode) -> &OffsetTable {
        match grid_mode {
            GridMode::Diamond => &self.diamond,
            GridMode::Box => &self.box_,
        }
    }

    fn table_mut(&mut self, grid_mode: GridMode) -> &mut OffsetTable {
        match grid_mode {
            GridMode::Diamond => &mut self.diamond,
            GridMode::Box => &mut self.box_,
        }
    }
}

/// `grid_mode -> letter -> signature key -> (dx, dy)`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpecialPlacements {
    #[serde(default)]
    diamond: BTreeMap<String, OffsetTable>,
    #[serde(default, rename = "box")]
    box_: BTreeMap<String, OffsetTable>,
}

impl SpecialPlacements {
    /// Parses a special table from JSON.
    pub fn from_reader<R: std::io::Read>(r: R) -> PictographResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| PictographError::config(format!("parse special placements: {e}")))
    }

    /// Parses a special table from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> PictographResult<Self> {
        Self::from_reader(open(path.as_ref(), "special placements")?)
    }

    /// Adds or replaces one entry.
    pub fn insert(
        &mut self,
        grid_mode: GridMode,
        letter: impl Into<String>,
        key: impl Into<String>,
        offset: Vec2,
    ) {
        self.letters_mut(grid_mode)
            .entry(letter.into())
            .or_default()
            .insert(key.into(), [offset.x, offset.y]);
    }

    /// Offset stored for `letter` under `key`, if any.
    pub fn get(&self, grid_mode: GridMode, letter: &str, key: &str) -> Option<Vec2> {
        self.letters(grid_mode)
            .get(letter)?
            .get(key)
            .map(|[dx, dy]| Vec2::new(*dx, *dy))
    }

    /// True when `letter` has any entries on `grid_mode`.
    pub fn has_letter(&self, grid_mode: GridMode, letter: &str) -> bool {
        self.letters(grid_mode).contains_key(letter)
    }

    /// True when neither grid has entries.
    pub fn is_empty(&self) -> bool {
        self.diamond.is_empty() && self.box_.is_empty()
    }

    fn letters(&self, grid_mode: GridMode) -> &BTreeMap<String, OffsetTable> {
        match grid_mode {
            GridMode::Diamond => &self.diamond,
            GridMode::Box => &self.box_,
        }
    }

    fn letters_mut(&mut self, grid_mode: GridMode) -> &mut BTreeMap<String, OffsetTable> {
        match grid_mode {
            GridMode::Diamond => &mut self.diamond,
            GridMode::Box => &mut self.box_,
        }
    }
}

/// Frozen placement tables handed to the engine.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlacementConfig {
    /// Per-key default offsets.
    pub defaults: DefaultPlacements,
    /// Per-letter overrides.
    pub special: SpecialPlacements,
}

/// Where to load the tables from; `None` means "use the bundled table".
#[derive(Clone, Debug, Default)]
pub struct ConfigSources {
    /// Default table file.
    pub defaults: Option<PathBuf>,
    /// Special table file.
    pub special: Option<PathBuf>,
}

/// Result of a load: the usable config plus every problem met along the way.
#[derive(Debug)]
pub struct ConfigLoad {
    /// Tables that loaded, with empty ones standing in for failures.
    pub config: Arc<PlacementConfig>,
    /// One error per table that failed.
    pub issues: Vec<PictographError>,
}

impl ConfigLoad {
    /// True when every table loaded.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

impl PlacementConfig {
    /// Pairs two already-loaded tables.
    pub fn new(defaults: DefaultPlacements, special: SpecialPlacements) -> Self {
        Self { defaults, special }
    }

    /// Tables compiled into the crate from `data/placements`.
    pub fn bundled() -> PictographResult<Self> {
        Ok(Self {
            defaults: DefaultPlacements::from_reader(BUNDLED_DEFAULTS.as_bytes())?,
            special: SpecialPlacements::from_reader(BUNDLED_SPECIAL.as_bytes())?,
        })
    }

    /// Shares the config read-only.
    pub fn freeze(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Loads both tables, keeping whatever succeeds.
    ///
    /// A failed special table leaves default-only placement; a failed default table leaves
    /// zero offsets. Each failure is logged once and returned in [`ConfigLoad::issues`].
    #[tracing::instrument]
    pub fn load(sources: &ConfigSources) -> ConfigLoad {
        let mut issues = Vec::new();

        let defaults = match &sources.defaults {
            Some(path) => DefaultPlacements::from_path(path),
            None => DefaultPlacements::from_reader(BUNDLED_DEFAULTS.as_bytes()),
        }
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "default placements unavailable; offsets fall back to zero");
            issues.push(e);
            DefaultPlacements::default()
        });

        let special = match &sources.special {
            Some(path) => SpecialPlacements::from_path(path),
            None => SpecialPlacements::from_reader(BUNDLED_SPECIAL.as_bytes()),
        }
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "special placements unavailable; using defaults only");
            issues.push(e);
            SpecialPlacements::default()
        });

        ConfigLoad {
            config: Self::new(defaults, special).freeze(),
            issues,
        }
    }
}

fn open(path: &Path, what: &str) -> PictographResult<BufReader<File>> {
    let f = File::open(path).map_err(|e| {
        PictographError::config(format!("open {what} '{}': {e}", path.display()))
    })?;
    Ok(BufReader::new(f))
}

#[cfg(test)]
#[path = "../../tests/unit/placement/config.rs"]
mod tests;
