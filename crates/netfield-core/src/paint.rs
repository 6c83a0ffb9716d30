//! Rendering seam between the simulation and whatever draws it.
//!
//! The core never talks to a canvas directly. Each processed frame issues a
//! `clear`, then one `dot` per particle in population order, then one `link`
//! per connected pair. The web frontend maps these onto a 2D canvas context;
//! tests record them.

use glam::Vec2;

/// An sRGB colour with a fractional alpha, as CSS expects it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn from_rgb(rgb: [u8; 3], a: f32) -> Self {
        Self {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
            a,
        }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// `rgba(r, g, b, a)` string suitable for `fillStyle`/`strokeStyle`.
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }

    /// `#rrggbb` string, alpha ignored.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// How a particle is drawn: a filled circle with a soft glow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotStyle {
    pub fill: Rgba,
    pub glow: Rgba,
    pub glow_blur: f32,
}

/// How a connection is drawn. `color.a` is the alpha of a zero-length link;
/// each link scales it by its distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinkStyle {
    pub color: Rgba,
    pub width: f32,
}

pub trait Painter {
    /// Wipe the whole surface.
    fn clear(&mut self, width: f32, height: f32);
    fn dot(&mut self, center: Vec2, radius: f32, style: &DotStyle);
    /// Stroke a straight line. `color` already carries the per-link alpha.
    fn link(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32);
}
