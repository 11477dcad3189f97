use tatter::{
    AnchorLayout, Cloth, ClothConfig, Constraint, DistanceMetric, Euclidean, Octagonal, Particle,
    StepObserver, Vec2,
};

fn pair(d: f64) -> Vec<Particle<f64>> {
    vec![
        Particle::new(Vec2::new(0.0, 0.0), 0.5),
        Particle::new(Vec2::new(d * 0.6, d * 0.8), 0.5),
    ]
}

fn check_convergence<M: DistanceMetric>(start: f64, rest: f64, tolerance: f64) {
    let mut particles = pair(start);
    let c = Constraint::new(0, 1, rest);
    let mut last_error = (start - rest).abs();
    for _ in 0..6 {
        c.solve::<M>(&mut particles);
        let d = (particles[1].pos - particles[0].pos).length();
        let error = (d - rest).abs();
        assert!(error <= last_error + 1e-12, "error grew: {} -> {}", last_error, error);
        last_error = error;
    }
    assert!(last_error < tolerance, "start {}: error {}", start, last_error);
}

#[test]
fn single_constraint_converges_euclidean() {
    check_convergence::<Euclidean>(25.0, 10.0, 1e-9);
    check_convergence::<Euclidean>(2.0, 10.0, 1e-9);
}

#[test]
fn single_constraint_converges_octagonal() {
    // Settles where the approximate length equals the rest length, which is
    // within the metric's error band of the true rest length.
    check_convergence::<Octagonal>(25.0, 10.0, 0.4);
    check_convergence::<Octagonal>(2.0, 10.0, 0.4);
}

#[test]
fn perturbed_cloth_relaxes_back_to_rest_lengths() {
    let config = ClothConfig::new()
        .with_origin(Vec2::new(0.0, 0.0))
        .with_grid(4, 4)
        .with_rest_length(10.0)
        .with_gravity(Vec2::new(0.0, 0.0))
        .with_anchors(AnchorLayout::None);
    let mut cloth: Cloth<f64, Euclidean> = Cloth::new(config).unwrap();
    let i = cloth.index(2, 2);
    cloth.particle_mut(i).pos = Vec2::new(27.0, 24.0);
    cloth.particle_mut(i).prev_pos = Vec2::new(27.0, 24.0);

    for _ in 0..500 {
        cloth.relax();
    }
    for (a, b) in cloth.segments() {
        let len = (b - a).length();
        assert!((len - 10.0).abs() < 0.05, "link length {}", len);
    }
}

#[test]
fn anchors_are_exactly_on_target_after_every_relax() {
    let mut cloth: Cloth<f32> = Cloth::new(ClothConfig::new()).unwrap();
    let moving = cloth.index(10, 0);
    cloth.anchor(moving, Vec2::new(100.0, 20.0));

    for frame in 0..120 {
        cloth.integrate();
        if frame % 3 == 0 {
            cloth.integrate();
        }
        cloth.set_anchor_target(moving, Vec2::new(100.0 + frame as f32, 20.0));
        cloth.relax();
        for &i in cloth.anchors() {
            let p = cloth.particle(i);
            assert!(p.is_anchored());
            assert_eq!(p.pos, p.anchor_target(), "anchor {} off target at frame {}", i, frame);
        }
    }
}

#[test]
fn coincident_endpoints_never_produce_nan() {
    let config = ClothConfig::new()
        .with_grid(3, 3)
        .with_anchors(AnchorLayout::None);
    let mut cloth: Cloth<f32> = Cloth::new(config).unwrap();
    // Collapse the whole cloth onto a single point.
    for i in 0..cloth.particle_count() {
        let p = cloth.particle_mut(i);
        p.pos = Vec2::new(5.0, 5.0);
        p.prev_pos = Vec2::new(5.0, 5.0);
    }

    struct Skips(usize);
    impl StepObserver for Skips {
        fn on_relax_pass(&mut self, _pass: usize, skipped: usize) {
            self.0 += skipped;
        }
    }
    let mut skips = Skips(0);
    cloth.step(&mut skips);
    assert!(skips.0 > 0);

    for _ in 0..100 {
        cloth.integrate();
        cloth.relax();
    }
    for p in cloth.particles() {
        assert!(p.pos.is_finite() && p.prev_pos.is_finite(), "non-finite particle {:?}", p);
    }
}

#[test]
fn observer_sees_every_phase() {
    #[derive(Default)]
    struct Counts {
        integrate: usize,
        passes: Vec<usize>,
        complete: usize,
    }
    impl StepObserver for Counts {
        fn on_integrate(&mut self) { self.integrate += 1; }
        fn on_relax_pass(&mut self, pass: usize, _skipped: usize) { self.passes.push(pass); }
        fn on_step_complete(&mut self) { self.complete += 1; }
    }

    let mut cloth: Cloth<f32> = Cloth::new(ClothConfig::new().with_iterations(5)).unwrap();
    let mut counts = Counts::default();
    cloth.step(&mut counts);
    cloth.step(&mut counts);
    assert_eq!(counts.integrate, 2);
    assert_eq!(counts.passes, vec![0, 1, 2, 3, 4, 0, 1, 2, 3, 4]);
    assert_eq!(counts.complete, 2);
}

#[test]
fn hanging_cloth_sags_under_gravity() {
    let mut cloth: Cloth<f32> = Cloth::new(ClothConfig::new().with_grid(10, 8)).unwrap();
    let bottom_before = cloth.position_at(0, 0).y;
    for _ in 0..100 {
        cloth.integrate();
        cloth.relax();
    }
    assert!(cloth.position_at(0, 0).y < bottom_before);
    for p in cloth.particles() {
        assert!(p.pos.is_finite());
    }
}
