use portfolio_core::*;

fn cycle() -> ColorCycle {
    ColorCycle::new(&ColorCycleConfig::default()).unwrap()
}

#[test]
fn default_palette_has_ten_three_second_segments() {
    let c = cycle();
    assert_eq!(c.len(), 10);
    assert_eq!(c.segment_secs(), 3.0);
    assert_eq!(c.period(), 30.0);
}

#[test]
fn loop_closes_on_every_period_multiple() {
    let c = cycle();
    for n in 0..200 {
        let s = c.sample(n as f32 * c.period());
        assert_eq!(s.index, 0);
        assert_eq!(s.t, 0.0);
        assert_eq!(s.color, c.palette()[0]);
    }
}

#[test]
fn every_boundary_lands_on_reference_color() {
    let c = cycle();
    for seg in 0..40 {
        let s = c.sample(seg as f32 * c.segment_secs());
        assert_eq!(s.color, c.palette()[seg % c.len()]);
    }
}

#[test]
fn after_one_segment_current_is_second_color() {
    let mut c = cycle();
    c.update(0.0);
    assert_eq!(c.current(), c.palette()[0]);
    assert_eq!(c.target(), c.palette()[1]);
    c.update(3.0);
    assert_eq!(c.current(), c.palette()[1]);
    assert_eq!(c.target(), c.palette()[2]);
    assert_eq!(c.index(), 1);
}

#[test]
fn t_is_monotonic_within_each_segment() {
    let c = cycle();
    for seg in 0..10 {
        let start = seg as f32 * 3.0;
        let mut prev = c.sample(start).t;
        assert_eq!(prev, 0.0);
        for step in 1..300 {
            let t = c.sample(start + step as f32 * 0.01).t;
            assert!(t >= prev, "segment {seg} step {step}: {t} < {prev}");
            assert!(t <= 1.0);
            prev = t;
        }
    }
}

#[test]
fn update_publishes_clear_and_fog() {
    let mut c = cycle();
    let reader = c.ambient_reader();
    let s = c.update(4.5);
    assert_eq!(reader.get().clear, s.color);
    assert_eq!(reader.get().fog, s.color);
}

#[test]
fn propagate_recolors_particles_and_skips_missing_buffer() {
    let mut c = cycle();
    let config = ExperienceConfig {
        particles: ParticleConfig {
            count: 32,
            ..Default::default()
        },
        ..Default::default()
    };
    let mut scene = SceneObjects::build(&config);
    let s = c.propagate(7.0, Some(&mut scene.particles));
    for (i, color) in scene.particles.colors.iter().enumerate() {
        assert_eq!(*color, particle_color(s.color, 7.0, i));
    }
    let s = c.propagate(8.0, None);
    assert_eq!(c.ambient().clear, s.color);
}

#[test]
fn experience_color_tick_runs_without_frames() {
    let mut exp = Experience::init(ExperienceConfig::default(), 640, 480).unwrap();
    let s = exp.tick_colors_at(3.0).unwrap();
    assert_eq!(s.index, 1);
    assert_eq!(exp.ambient().clear, exp.color_cycle().palette()[1]);
    assert_eq!(exp.frames(), 0);
}

#[test]
fn particle_color_is_complement_with_lightness_shimmer() {
    let red = Rgb::new(1.0, 0.0, 0.0);
    for (i, elapsed) in [(0usize, 0.0f32), (1, 0.5), (50, 2.0), (314, 9.25), (1999, 30.0)] {
        let hsl = particle_color(red, elapsed, i).to_hsl();
        let want_l = 0.6 + 0.2 * (elapsed * 0.5 + i as f32 * 0.01).sin();
        assert!((hsl.h - 0.5).abs() < 1e-4, "hue {} at i={i}", hsl.h);
        assert!((hsl.s - 0.7).abs() < 1e-4, "saturation {} at i={i}", hsl.s);
        assert!((hsl.l - want_l).abs() < 1e-4, "lightness {} vs {want_l}", hsl.l);
    }
}

#[test]
fn particle_hue_follows_rotated_base() {
    // cyan base lands on red, wrapping past 1.0
    let cyan = Rgb::new(0.0, 1.0, 1.0);
    let hsl = particle_color(cyan, 1.0, 0).to_hsl();
    assert!(hsl.h < 1e-4 || hsl.h > 1.0 - 1e-4, "hue {}", hsl.h);
    assert!((hsl.s - 0.7).abs() < 1e-4);
}
