use crate::{
    domain::location::Location,
    domain::motion::ArrowData,
    domain::pictograph::PictographContext,
    foundation::core::Vec2,
    placement::config::PlacementConfig,
    placement::key::{OrientationSignature, PlacementKey},
    placement::quadrant::quadrant_adjust,
};

/// Offset used when the default table has no entry for a key.
pub const DEFAULT_OFFSET_FALLBACK: Vec2 = Vec2::ZERO;

/// Every intermediate value of the adjustment pipeline for one arrow.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct AdjustmentTrace {
    /// Default-table key for the motion.
    pub placement_key: String,
    /// `None` when the key is absent and [`DEFAULT_OFFSET_FALLBACK`] applies.
    pub default_offset: Option<Vec2>,
    /// Special-placement key that matched, if any.
    pub special_key: Option<String>,
    /// Offset stored under `special_key`.
    pub special_offset: Option<Vec2>,
    /// Quadrant slot the authored offset was rotated into.
    pub quadrant_index: usize,
    /// Final offset added to the base point.
    pub adjustment: Vec2,
}

/// Runs default placement, special placement and quadrant adjustment in that order.
///
/// A special entry replaces the default outright; whichever wins is then rotated into
/// the quadrant of `location`.
pub fn trace_adjustment(
    arrow: &ArrowData,
    ctx: &PictographContext,
    config: &PlacementConfig,
    location: Location,
) -> AdjustmentTrace {
    let motion = &arrow.motion;
    let placement_key = PlacementKey::for_motion(motion).to_string();
    let default_offset = config.defaults.get(ctx.grid_mode(), &placement_key);

    let special = ctx.letter().and_then(|letter| {
        OrientationSignature::of(ctx)
            .candidate_keys(arrow.role, motion.motion_type)
            .into_iter()
            .find_map(|key| {
                config
                    .special
                    .get(ctx.grid_mode(), letter, &key)
                    .map(|offset| (key, offset))
            })
    });

    let authored = match &special {
        Some((_, offset)) => *offset,
        None => default_offset.unwrap_or(DEFAULT_OFFSET_FALLBACK),
    };
    let adjustment = if authored == Vec2::ZERO {
        authored
    } else {
        quadrant_adjust(authored, motion, ctx.grid_mode(), location)
    };

    let (special_key, special_offset) = special.unzip();
    AdjustmentTrace {
        placement_key,
        default_offset,
        special_key,
        special_offset,
        quadrant_index: location.quadrant_index(),
        adjustment,
    }
}

/// Final offset only; see [`trace_adjustment`].
pub fn adjustment(
    arrow: &ArrowData,
    ctx: &PictographContext,
    config: &PlacementConfig,
    location: Location,
) -> Vec2 {
    trace_adjustment(arrow, ctx, config, location).adjustment
}

#[cfg(test)]
#[path = "../../tests/unit/placement/adjustment.rs"]
mod tests;
