mod support;

use glam::Vec2;
use netfield_core::*;
use rand::prelude::*;
use support::RecordingPainter;

fn still(x: f32, y: f32) -> Particle {
    Particle::new(Vec2::new(x, y), Vec2::ZERO, 2.0)
}

#[test]
fn particle_count_scenarios() {
    assert_eq!(particle_count_for_width(1200.0), 48);
    assert_eq!(particle_count_for_width(300.0), 12);
    assert_eq!(particle_count_for_width(1500.0), 60);
    assert_eq!(particle_count_for_width(3840.0), 60);
    assert_eq!(particle_count_for_width(24.9), 0);
    assert_eq!(particle_count_for_width(25.0), 1);
}

#[test]
fn particle_count_handles_degenerate_widths() {
    assert_eq!(particle_count_for_width(0.0), 0);
    assert_eq!(particle_count_for_width(-100.0), 0);
    assert_eq!(particle_count_for_width(f32::NAN), 0);
}

#[test]
fn seeded_field_has_expected_population_inside_surface() {
    let surface = Surface::new(1200.0, 800.0);
    let mut rng = StdRng::seed_from_u64(3);
    let field = ParticleField::seed(surface, &FieldParams::default(), &mut rng);
    assert_eq!(field.len(), 48);
    assert!(field.particles().iter().all(|p| surface.contains(p.pos)));
}

#[test]
fn reseed_replaces_every_particle() {
    let surface = Surface::new(600.0, 400.0);
    let params = FieldParams::default();
    let mut rng = StdRng::seed_from_u64(11);
    let mut field = ParticleField::seed(surface, &params, &mut rng);
    let before = field.particles().to_vec();
    field.reseed(&params, &mut rng);
    assert_eq!(field.len(), before.len());
    assert_ne!(field.particles(), &before[..]);
}

#[test]
fn resize_keeps_particles_in_place() {
    let surface = Surface::new(600.0, 400.0);
    let mut rng = StdRng::seed_from_u64(5);
    let mut field = ParticleField::seed(surface, &FieldParams::default(), &mut rng);
    let before = field.particles().to_vec();
    field.resize(Surface::new(200.0, 100.0));
    assert_eq!(field.particles(), &before[..]);
    assert_eq!(field.surface(), Surface::new(200.0, 100.0));
}

#[test]
fn links_only_connect_pairs_under_threshold() {
    let field = ParticleField::from_particles(
        Surface::new(1000.0, 1000.0),
        vec![still(0.0, 0.0), still(100.0, 0.0), still(250.0, 0.0), still(400.0, 0.0)],
    );
    let links: Vec<(usize, usize)> = field.links(150.0).map(|l| (l.a, l.b)).collect();
    // 0-1 at 100, 1-2 at 150 (not strictly under), 2-3 at 150
    assert_eq!(links, vec![(0, 1)]);
}

#[test]
fn links_are_listed_once_per_unordered_pair() {
    let field = ParticleField::from_particles(
        Surface::new(100.0, 100.0),
        vec![still(10.0, 10.0), still(20.0, 10.0), still(10.0, 20.0)],
    );
    let links: Vec<(usize, usize)> = field.links(150.0).map(|l| (l.a, l.b)).collect();
    assert_eq!(links, vec![(0, 1), (0, 2), (1, 2)]);
}

#[test]
fn link_alpha_fades_linearly_with_distance() {
    assert!((link_alpha(0.0, 150.0, 0.4) - 0.4).abs() < 1e-6);
    assert!((link_alpha(75.0, 150.0, 0.4) - 0.2).abs() < 1e-6);
    assert!(link_alpha(149.0, 150.0, 0.4) < 0.01);
    assert_eq!(link_alpha(200.0, 150.0, 0.4), 0.0);
    let near = link_alpha(30.0, 150.0, 0.4);
    let far = link_alpha(120.0, 150.0, 0.4);
    assert!(near > far);
}

#[test]
fn paint_links_strokes_each_pair_with_faded_colour() {
    let params = FieldParams::default();
    let field = ParticleField::from_particles(
        Surface::new(500.0, 500.0),
        vec![still(0.0, 0.0), still(75.0, 0.0)],
    );
    let mut painter = RecordingPainter::default();
    let drawn = field.paint_links(&params, &mut painter);
    assert_eq!(drawn, 1);
    let links = painter.links();
    assert_eq!(links.len(), 1);
    let (from, to, alpha) = links[0];
    assert_eq!(from, Vec2::new(0.0, 0.0));
    assert_eq!(to, Vec2::new(75.0, 0.0));
    assert!((alpha - 0.2).abs() < 1e-6);
}

#[test]
fn step_paints_each_particle_after_moving_it() {
    let params = FieldParams::default();
    let mut field = ParticleField::from_particles(
        Surface::new(500.0, 500.0),
        vec![
            Particle::new(Vec2::new(10.0, 10.0), Vec2::new(1.0, 0.0), 2.0),
            Particle::new(Vec2::new(300.0, 300.0), Vec2::new(0.0, -1.0), 3.0),
        ],
    );
    let mut painter = RecordingPainter::default();
    field.step(None, &params, &mut painter);
    assert_eq!(
        painter.dots(),
        vec![(Vec2::new(11.0, 10.0), 2.0), (Vec2::new(300.0, 299.0), 3.0)]
    );
}

#[test]
fn css_colours_match_the_page_palette() {
    let params = FieldParams::default();
    assert_eq!(params.dot.fill.to_css(), "rgba(88, 196, 220, 0.9)");
    assert_eq!(params.dot.glow.to_hex(), "#58c4dc");
    assert_eq!(params.link.color.with_alpha(0.25).to_css(), "rgba(88, 196, 220, 0.25)");
}
