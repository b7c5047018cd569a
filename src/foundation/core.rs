pub use kurbo::{Point, Vec2};

/// Width and height of the square pictograph scene, in scene units.
pub const SCENE_SIZE: f64 = 950.0;

/// Center of the grid; every anchor table is laid out around it.
pub const SCENE_CENTER: Point = Point::new(SCENE_SIZE / 2.0, SCENE_SIZE / 2.0);

/// Final placed geometry of one glyph.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Geometry {
    /// Scene x coordinate of the glyph center.
    pub x: f64,
    /// Scene y coordinate of the glyph center (y grows downward).
    pub y: f64,
    /// Clockwise rotation in degrees, always a multiple of 45 in `[0, 360)`.
    pub rotation_deg: f64,
    /// Whether the glyph is flipped horizontally before rotation.
    pub mirrored: bool,
}

impl Geometry {
    /// Glyph center as a point.
    pub fn position(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Bit-exact fingerprint, used to compare runs against a reference.
    pub fn fingerprint(self) -> u64 {
        let mut h = crate::foundation::math::Fnv1a64::new_default();
        h.write_f64(self.x);
        h.write_f64(self.y);
        h.write_f64(self.rotation_deg);
        h.write_u8(u8::from(self.mirrored));
        h.finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
