use crate::constants::*;
use crate::paint::{DotStyle, LinkStyle, Rgba};
use std::time::Duration;

/// What to do with frames while the page is scrolling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameSkip {
    /// Process every frame regardless of scrolling.
    Never,
    /// Skip roughly half the frames at random.
    Random,
    /// Skip every other frame.
    Alternate,
}

/// All tuning knobs of the field. `Default` yields the fixed values the
/// background is mounted with.
#[derive(Clone, Debug)]
pub struct FieldParams {
    pub max_particles: usize,
    pub px_per_particle: f32,
    pub max_speed: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    pub connection_distance: f32,
    pub repulsion_radius: f32,
    pub repulsion_strength: f32,
    pub pointer_throttle: Duration,
    pub scroll_quiet: Duration,
    pub frame_skip: FrameSkip,
    pub dot: DotStyle,
    pub link: LinkStyle,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            max_particles: MAX_PARTICLES,
            px_per_particle: PX_PER_PARTICLE,
            max_speed: MAX_SPEED,
            min_radius: MIN_RADIUS,
            max_radius: MAX_RADIUS,
            connection_distance: CONNECTION_DISTANCE,
            repulsion_radius: REPULSION_RADIUS,
            repulsion_strength: REPULSION_STRENGTH,
            pointer_throttle: Duration::from_millis(POINTER_THROTTLE_MS),
            scroll_quiet: Duration::from_millis(SCROLL_QUIET_MS),
            frame_skip: FrameSkip::Random,
            dot: DotStyle {
                fill: Rgba::from_rgb(DOT_RGB, DOT_ALPHA),
                glow: Rgba::from_rgb(GLOW_RGB, 1.0),
                glow_blur: GLOW_BLUR,
            },
            link: LinkStyle {
                color: Rgba::from_rgb(LINK_RGB, LINK_ALPHA_MAX),
                width: LINK_WIDTH,
            },
        }
    }
}

impl FieldParams {
    /// `min(max_particles, floor(width / px_per_particle))`.
    pub fn particle_count_for_width(&self, width: f32) -> usize {
        let by_density = (width / self.px_per_particle).floor();
        // NaN and negatives saturate to 0 in the cast
        (by_density as usize).min(self.max_particles)
    }
}

/// Particle count for a viewport width using the default density.
pub fn particle_count_for_width(width: f32) -> usize {
    FieldParams::default().particle_count_for_width(width)
}
