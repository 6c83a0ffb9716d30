use glam::Vec2;

/// Size of the drawing area in surface units (CSS pixels).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Build from viewport dimensions as the browser reports them.
    /// Negative or non-finite values collapse to zero.
    pub fn from_viewport(width: f64, height: f64) -> Self {
        let sanitize = |v: f64| if v.is_finite() { v.max(0.0) as f32 } else { 0.0 };
        Self::new(sanitize(width), sanitize(height))
    }

    /// Inclusive bounds check: `[0, width] x [0, height]`.
    pub fn contains(&self, p: Vec2) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}
