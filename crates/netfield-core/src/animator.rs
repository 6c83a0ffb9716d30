//! The network background as an owned state machine.
//!
//! The host feeds it events (pointer, scroll, resize) whenever they happen
//! and calls [`Animator::advance`] once per display frame. All timestamps
//! come from the host so that behaviour is reproducible under test.

use crate::field::ParticleField;
use crate::paint::Painter;
use crate::params::{FieldParams, FrameSkip};
use crate::particle::Particle;
use crate::pointer::PointerTracker;
use crate::scroll::ScrollActivity;
use crate::surface::Surface;
use glam::Vec2;
use instant::Instant;
use rand::prelude::*;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Lifecycle {
    Running,
    TornDown,
}

/// Counters describing the work done so far.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameStats {
    pub processed: u64,
    pub skipped: u64,
    /// Links drawn in the last processed frame.
    pub links: usize,
    /// Time between the last two `advance` calls.
    pub last_dt: Option<Duration>,
}

pub struct Animator {
    params: FieldParams,
    field: ParticleField,
    pointer: PointerTracker,
    scroll: ScrollActivity,
    rng: StdRng,
    lifecycle: Lifecycle,
    skip_phase: bool,
    last_frame: Option<Instant>,
    stats: FrameStats,
}

impl Animator {
    pub fn new(viewport: Surface, params: FieldParams, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let field = ParticleField::seed(viewport, &params, &mut rng);
        log::debug!(
            "[field] seeded {} particles on {}x{}",
            field.len(),
            viewport.width,
            viewport.height
        );
        Self {
            pointer: PointerTracker::new(params.pointer_throttle),
            scroll: ScrollActivity::new(params.scroll_quiet),
            params,
            field,
            rng,
            lifecycle: Lifecycle::Running,
            skip_phase: false,
            last_frame: None,
            stats: FrameStats::default(),
        }
    }

    /// Animator with the fixed default tuning.
    pub fn with_defaults(viewport: Surface, seed: u64) -> Self {
        Self::new(viewport, FieldParams::default(), seed)
    }

    /// Recreate the whole population for the current surface.
    pub fn reseed(&mut self) {
        self.field.reseed(&self.params, &mut self.rng);
        log::debug!("[field] reseeded {} particles", self.field.len());
    }

    /// Track a new viewport size. The population is left untouched.
    pub fn resize(&mut self, viewport: Surface) {
        if self.is_torn_down() {
            return;
        }
        self.field.resize(viewport);
        log::debug!("[field] resized to {}x{}", viewport.width, viewport.height);
    }

    /// Rate-limited pointer update. Returns whether it was accepted.
    pub fn pointer_moved(&mut self, pos: Vec2, now: Instant) -> bool {
        if self.is_torn_down() {
            return false;
        }
        self.pointer.moved(pos, now)
    }

    pub fn pointer_left(&mut self) {
        self.pointer.left();
    }

    pub fn scrolled(&mut self, now: Instant) {
        if self.is_torn_down() {
            return;
        }
        self.scroll.scrolled(now);
    }

    pub fn is_scrolling(&self, now: Instant) -> bool {
        self.scroll.is_active(now)
    }

    /// Run one frame: move, paint particles, paint links.
    ///
    /// Returns `true` while the host should keep scheduling frames and
    /// `false` once the animator has been torn down. A frame skipped because
    /// of scrolling paints nothing but still asks for the next one.
    pub fn advance<P: Painter + ?Sized>(&mut self, now: Instant, painter: &mut P) -> bool {
        if self.is_torn_down() {
            return false;
        }
        if let Some(prev) = self.last_frame {
            if now > prev {
                self.stats.last_dt = Some(now - prev);
            }
        }
        self.last_frame = Some(now);

        if self.should_skip(now) {
            self.stats.skipped += 1;
            return true;
        }

        let surface = self.field.surface();
        painter.clear(surface.width, surface.height);
        self.field
            .step(self.pointer.position(), &self.params, painter);
        self.stats.links = self.field.paint_links(&self.params, painter);
        self.stats.processed += 1;
        true
    }

    fn should_skip(&mut self, now: Instant) -> bool {
        if !self.scroll.settle(now) {
            self.skip_phase = false;
            return false;
        }
        match self.params.frame_skip {
            FrameSkip::Never => false,
            FrameSkip::Random => self.rng.gen_bool(0.5),
            FrameSkip::Alternate => {
                self.skip_phase = !self.skip_phase;
                self.skip_phase
            }
        }
    }

    /// Stop for good. Safe to call any number of times.
    pub fn teardown(&mut self) {
        if self.is_torn_down() {
            return;
        }
        self.lifecycle = Lifecycle::TornDown;
        self.pointer.reset();
        self.scroll.cancel();
        log::info!(
            "[field] torn down after {} frames ({} skipped)",
            self.stats.processed,
            self.stats.skipped
        );
    }

    pub fn is_torn_down(&self) -> bool {
        self.lifecycle == Lifecycle::TornDown
    }

    pub fn has_pending_scroll(&self) -> bool {
        self.scroll.is_armed()
    }

    pub fn particles(&self) -> &[Particle] {
        self.field.particles()
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut ParticleField {
        &mut self.field
    }

    pub fn surface(&self) -> Surface {
        self.field.surface()
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer.position()
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }
}
