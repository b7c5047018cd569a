use std::sync::Arc;

use rayon::prelude::*;

use crate::{
    domain::location::Location,
    domain::motion::{ArrowData, PropData, Role},
    domain::pictograph::PictographContext,
    foundation::core::{Geometry, Point},
    placement::adjustment::{AdjustmentTrace, trace_adjustment},
    placement::config::PlacementConfig,
    positioning::anchors::base_point,
    positioning::location::arrow_location,
    positioning::mirror::should_mirror,
    positioning::prop::prop_geometry,
    positioning::rotation::rotation_angle,
};

/// Stage-by-stage breakdown of one arrow placement.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ArrowPlacement {
    /// Arrow owner.
    pub role: Role,
    /// Resolved compass location.
    pub location: Location,
    /// Anchor before adjustment.
    pub base: Point,
    /// Rotation in whole degrees.
    pub rotation_deg: u16,
    /// Horizontal flip.
    pub mirrored: bool,
    /// Adjustment stages.
    pub trace: AdjustmentTrace,
    /// Final geometry, as returned by `compute_arrow_geometry`.
    pub geometry: Geometry,
}

/// Turns motion descriptions into scene geometry against a frozen placement config.
///
/// Cheap to clone; every clone shares the same tables.
#[derive(Clone, Debug)]
pub struct PositioningEngine {
    config: Arc<PlacementConfig>,
}

impl PositioningEngine {
    /// Engine over a frozen config.
    pub fn new(config: Arc<PlacementConfig>) -> Self {
        Self { config }
    }

    /// Tables the engine reads.
    pub fn config(&self) -> &PlacementConfig {
        &self.config
    }

    /// Geometry of one arrow glyph.
    #[tracing::instrument(skip_all, fields(role = arrow.role.as_str()))]
    pub fn compute_arrow_geometry(&self, arrow: &ArrowData, ctx: &PictographContext) -> Geometry {
        self.explain_arrow(arrow, ctx).geometry
    }

    /// Geometry of one prop glyph.
    pub fn compute_prop_geometry(&self, prop: &PropData, ctx: &PictographContext) -> Geometry {
        prop_geometry(prop, ctx)
    }

    /// Same computation as [`Self::compute_arrow_geometry`], keeping every intermediate.
    pub fn explain_arrow(&self, arrow: &ArrowData, ctx: &PictographContext) -> ArrowPlacement {
        let motion = &arrow.motion;
        let location = arrow_location(arrow, ctx);
        let base = base_point(motion.motion_type, location);
        let rotation_deg = rotation_angle(motion, location);
        let trace = trace_adjustment(arrow, ctx, &self.config, location);
        let mirrored = should_mirror(motion);
        let anchor = base + trace.adjustment;

        ArrowPlacement {
            role: arrow.role,
            location,
            base,
            rotation_deg,
            mirrored,
            geometry: Geometry {
                x: anchor.x,
                y: anchor.y,
                rotation_deg: f64::from(rotation_deg),
                mirrored,
            },
            trace,
        }
    }

    /// Returns a copy of `ctx` with all four glyph geometries filled in.
    #[tracing::instrument(
        skip_all,
        fields(letter = ctx.letter(), grid = ctx.grid_mode().as_str())
    )]
    pub fn position_pictograph(&self, ctx: &PictographContext) -> PictographContext {
        let mut out = ctx.clone();
        for role in Role::ALL {
            out.set_geometry(
                role,
                self.compute_arrow_geometry(ctx.arrow(role), ctx),
                self.compute_prop_geometry(ctx.prop(role), ctx),
            );
        }
        out
    }

    /// Positions a batch in parallel on the current rayon pool; output order matches input.
    #[tracing::instrument(skip_all, fields(count = contexts.len()))]
    pub fn position_many(&self, contexts: &[PictographContext]) -> Vec<PictographContext> {
        contexts
            .par_iter()
            .map(|ctx| self.position_pictograph(ctx))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/positioning/engine.rs"]
mod tests;
