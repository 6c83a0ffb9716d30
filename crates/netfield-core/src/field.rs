use crate::paint::Painter;
use crate::params::FieldParams;
use crate::particle::Particle;
use crate::surface::Surface;
use glam::Vec2;
use rand::Rng;

/// A pair of particles close enough to be drawn connected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub distance: f32,
}

/// The particle population and the surface it lives on.
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    surface: Surface,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Fresh population sized for the surface width.
    pub fn seed<R: Rng>(surface: Surface, params: &FieldParams, rng: &mut R) -> Self {
        let mut field = Self {
            surface,
            particles: Vec::new(),
        };
        field.reseed(params, rng);
        field
    }

    pub fn from_particles(surface: Surface, particles: Vec<Particle>) -> Self {
        Self { surface, particles }
    }

    /// Throw away every particle and spawn a new population for the current
    /// surface.
    pub fn reseed<R: Rng>(&mut self, params: &FieldParams, rng: &mut R) {
        let count = params.particle_count_for_width(self.surface.width);
        let surface = self.surface;
        self.particles.clear();
        self.particles
            .extend((0..count).map(|_| Particle::spawn(rng, surface, params)));
    }

    /// Adopt new dimensions. Particles stay where they are.
    pub fn resize(&mut self, surface: Surface) {
        self.surface = surface;
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Move every particle one frame, painting each right after it moves.
    pub fn step<P: Painter + ?Sized>(
        &mut self,
        pointer: Option<Vec2>,
        params: &FieldParams,
        painter: &mut P,
    ) {
        let surface = self.surface;
        for p in &mut self.particles {
            p.step(surface, pointer, params);
            painter.dot(p.pos, p.size, &params.dot);
        }
    }

    /// All pairs `i < j` strictly closer than `threshold`, in row-major order.
    pub fn links(&self, threshold: f32) -> impl Iterator<Item = Link> + '_ {
        let limit_sq = threshold * threshold;
        let ps = &self.particles;
        (0..ps.len()).flat_map(move |i| {
            (i + 1..ps.len()).filter_map(move |j| {
                let dist_sq = ps[i].pos.distance_squared(ps[j].pos);
                (dist_sq < limit_sq).then(|| Link {
                    a: i,
                    b: j,
                    distance: dist_sq.sqrt(),
                })
            })
        })
    }

    /// Stroke every link, fading with distance. Returns how many were drawn.
    pub fn paint_links<P: Painter + ?Sized>(&self, params: &FieldParams, painter: &mut P) -> usize {
        let threshold = params.connection_distance;
        let style = params.link;
        let mut drawn = 0;
        for link in self.links(threshold) {
            let alpha = link_alpha(link.distance, threshold, style.color.a);
            painter.link(
                self.particles[link.a].pos,
                self.particles[link.b].pos,
                style.color.with_alpha(alpha),
                style.width,
            );
            drawn += 1;
        }
        drawn
    }
}

/// `(1 - distance / threshold) * alpha_max`, floored at 0.
pub fn link_alpha(distance: f32, threshold: f32, alpha_max: f32) -> f32 {
    if threshold <= 0.0 {
        return 0.0;
    }
    ((1.0 - distance / threshold) * alpha_max).max(0.0)
}
