use portfolio_core::*;

/// Records what each draw call saw.
#[derive(Default)]
struct Recorder {
    draws: usize,
    with_scene: usize,
    camera_x: Vec<f32>,
}

impl DrawTarget for Recorder {
    fn draw(&mut self, frame: &FrameView<'_>) {
        self.draws += 1;
        if frame.scene.is_some() {
            self.with_scene += 1;
        }
        self.camera_x.push(frame.camera.position.x);
    }
}

fn small_config() -> ExperienceConfig {
    ExperienceConfig {
        particles: ParticleConfig {
            count: 64,
            ..Default::default()
        },
        ..Default::default()
    }
}

#[test]
fn exactly_one_draw_per_tick() {
    let mut exp = Experience::init(small_config(), 800, 600).unwrap();
    let mut rec = Recorder::default();
    for i in 0..25 {
        exp.tick_frame_at(i as f32 / 60.0, &mut rec);
    }
    assert_eq!(rec.draws, 25);
    assert_eq!(rec.with_scene, 25);
    assert_eq!(exp.frames(), 25);
}

#[test]
fn particle_yaw_is_exactly_proportional_to_elapsed() {
    let mut exp = Experience::init(small_config(), 800, 600).unwrap();
    let mut rec = Recorder::default();
    for i in 0..500 {
        let e = i as f32 * 0.137;
        exp.tick_frame_at(e, &mut rec);
        let rot = exp.scene().unwrap().particles.rotation;
        assert_eq!(rot.y, e * 0.05);
        assert!((rot.x - (e * 0.1).sin() * 0.1).abs() < 1e-7);
    }
}

#[test]
fn missing_scene_still_moves_camera_and_draws() {
    let mut exp = Experience::init(small_config(), 800, 600).unwrap();
    assert!(exp.take_scene().is_some());
    exp.on_pointer_move(800.0, 300.0, 800.0, 600.0);
    let mut rec = Recorder::default();
    for i in 0..10 {
        exp.tick_frame_at(i as f32, &mut rec);
    }
    assert_eq!(rec.draws, 10);
    assert_eq!(rec.with_scene, 0);
    assert!(rec.camera_x.windows(2).all(|w| w[1] > w[0]));
}

#[test]
fn camera_contracts_toward_pointer_target_without_overshoot() {
    let mut exp = Experience::init(small_config(), 1000, 1000).unwrap();
    // bottom-right corner: pointer (1, -1), camera goal (5, 5)
    exp.on_pointer_move(1000.0, 1000.0, 1000.0, 1000.0);
    let mut rec = Recorder::default();
    let mut prev_gap = f32::MAX;
    for i in 0..400 {
        exp.tick_frame_at(i as f32 / 60.0, &mut rec);
        let pos = exp.camera().position;
        assert!(pos.x <= 5.0 && pos.y <= 5.0, "overshoot at tick {i}: {pos:?}");
        let gap = (5.0 - pos.x).hypot(5.0 - pos.y);
        assert!(gap <= prev_gap);
        prev_gap = gap;
        assert_eq!(exp.camera().target, glam::Vec3::ZERO);
    }
    assert!(prev_gap < 0.01);
}

#[test]
fn drift_stays_within_limit() {
    let mut exp = Experience::init(small_config(), 800, 600).unwrap();
    let mut rec = Recorder::default();
    for i in 0..20_000 {
        exp.tick_frame_at(i as f32 / 60.0, &mut rec);
    }
    for shape in &exp.scene().unwrap().shapes {
        assert!(shape.drift_offset().length() <= constants::SHAPE_DRIFT_LIMIT + 1e-3);
    }
}

#[test]
fn unbounded_drift_accumulates_raw_steps() {
    let mut config = small_config();
    config.motion.drift_limit = None;
    let mut exp = Experience::init(config, 800, 600).unwrap();
    let home = exp.scene().unwrap().shapes[0].home;
    let mut expected = glam::Vec2::ZERO;
    let mut rec = Recorder::default();
    for i in 0..120 {
        let e = i as f32 / 60.0;
        exp.tick_frame_at(e, &mut rec);
        expected += drift_step(e, 0);
    }
    let pos = exp.scene().unwrap().shapes[0].position;
    assert!((pos.x - home.x - expected.x).abs() < 1e-3);
    assert!((pos.y - home.y - expected.y).abs() < 1e-3);
}

#[test]
fn shapes_follow_hue_schedule() {
    let mut exp = Experience::init(small_config(), 800, 600).unwrap();
    let mut rec = Recorder::default();
    exp.tick_frame_at(4.2, &mut rec);
    for (i, shape) in exp.scene().unwrap().shapes.iter().enumerate() {
        let want = Rgb::from_hsl(Hsl::new(shape_hue(4.2, i), 0.7, 0.5));
        assert_eq!(shape.color, want);
    }
}

#[test]
fn disposed_experience_stops_drawing() {
    let mut exp = Experience::init(small_config(), 800, 600).unwrap();
    let mut rec = Recorder::default();
    exp.tick_frame_at(0.0, &mut rec);
    exp.dispose();
    exp.tick_frame_at(1.0, &mut rec);
    assert_eq!(rec.draws, 1);
    assert!(!exp.is_running());
    assert!(exp.scene().is_none());
    assert!(exp.tick_colors_at(1.0).is_none());
}

#[test]
fn cached_page_hide_keeps_both_tasks_alive() {
    let mut exp = Experience::init(small_config(), 800, 600).unwrap();
    let mut rec = Recorder::default();
    exp.tick_frame_at(0.0, &mut rec);
    assert!(!exp.on_page_hide(true));
    assert!(exp.is_running());
    assert!(exp.scene().is_some());

    // back from the cache: frames and colors keep going
    exp.tick_frame_at(1.0, &mut rec);
    assert_eq!(rec.draws, 2);
    assert_eq!(rec.with_scene, 2);
    let s = exp.tick_colors_at(3.0).unwrap();
    assert_eq!(s.index, 1);
}

#[test]
fn final_page_hide_disposes_once() {
    let mut exp = Experience::init(small_config(), 800, 600).unwrap();
    let mut rec = Recorder::default();
    assert!(exp.on_page_hide(false));
    assert!(!exp.is_running());
    assert!(!exp.on_page_hide(false));
    exp.tick_frame_at(1.0, &mut rec);
    assert_eq!(rec.draws, 0);
    assert!(exp.tick_colors_at(1.0).is_none());
}

#[test]
fn bad_config_is_rejected_at_init() {
    let mut cfg = small_config();
    cfg.color_cycle.palette.clear();
    assert_eq!(
        Experience::init(cfg, 800, 600).err(),
        Some(CoreError::EmptyPalette)
    );

    let mut cfg = small_config();
    cfg.color_cycle.segment_secs = f32::NAN;
    assert!(matches!(
        Experience::init(cfg, 800, 600).err(),
        Some(CoreError::InvalidSegmentDuration(_))
    ));

    let mut cfg = small_config();
    cfg.particles.spread = 0.0;
    assert_eq!(
        Experience::init(cfg, 800, 600).err(),
        Some(CoreError::InvalidParticleSpread(0.0))
    );
}
