use attractor::{Boundary, ConfigError, Parameters, Scenario, ScenarioConfig, STEPS_PER_FRAME};

const TWO_BODY: &str = include_str!("../scenarios/two_body.yaml");
const BOXED: &str = include_str!("../scenarios/boxed_triangle.yaml");

fn parse(text: &str) -> ScenarioConfig {
    ScenarioConfig::from_yaml(text).expect("yaml should parse")
}

// ==================================================================================
// YAML loading tests
// ==================================================================================

#[test]
fn shipped_scenarios_build() {
    let free = Scenario::from_config(parse(TWO_BODY)).expect("two_body is valid");
    assert_eq!(free.system.len(), 2);
    assert_eq!(*free.system.boundary(), Boundary::None);
    assert!(free.system.is_running());

    let boxed = Scenario::from_config(parse(BOXED)).expect("boxed_triangle is valid");
    assert_eq!(boxed.system.len(), 3);
    assert_eq!(*boxed.system.boundary(), Boundary::window());
}

#[test]
fn defaults_fill_missing_sections() {
    let cfg = parse(
        r#"
parameters:
  dt: 0.01
particles:
  - m: 1.0
    x: [10.0, 20.0]
"#,
    );

    assert_eq!(cfg.engine.steps_per_frame, STEPS_PER_FRAME);
    assert_eq!(cfg.engine.window, [800.0, 600.0]);
    assert!(cfg.engine.boundary.is_none());
    assert_eq!(cfg.particles[0].v, vec![0.0, 0.0]);

    let scenario = Scenario::from_config(cfg).expect("valid");
    assert_eq!(scenario.system.dt(), 0.01);
}

#[test]
fn boundary_fields_default_to_window() {
    let cfg = parse(
        r#"
engine:
  boundary:
    margin: 25
parameters:
  dt: 0.01
particles: []
"#,
    );

    let b = cfg.engine.boundary.as_ref().expect("boundary present").to_boundary();
    assert_eq!(b, Boundary::Box { width: 800.0, height: 600.0, margin: 25.0 });
}

// ==================================================================================
// Validation tests
// ==================================================================================

#[test]
fn rejects_non_positive_mass() {
    let cfg = parse(
        r#"
parameters:
  dt: 0.01
particles:
  - m: 1.0
    x: [0.0, 0.0]
  - m: -2.0
    x: [5.0, 0.0]
"#,
    );

    assert_eq!(cfg.validate(), Err(ConfigError::InvalidMass { index: 1, mass: -2.0 }));
}

#[test]
fn rejects_wrong_arity() {
    let cfg = parse(
        r#"
parameters:
  dt: 0.01
particles:
  - m: 1.0
    x: [0.0, 0.0, 0.0]
"#,
    );

    assert_eq!(cfg.validate(), Err(ConfigError::WrongArity { index: 0, field: "x", len: 3 }));
}

#[test]
fn rejects_zero_dt() {
    let cfg = parse(
        r#"
parameters:
  dt: 0.0
particles: []
"#,
    );

    assert!(matches!(cfg.validate(), Err(ConfigError::NonPositive { name: "dt", .. })));
    assert!(Scenario::from_config(cfg).is_err());
}

#[test]
fn rejects_margin_wider_than_box() {
    let cfg = parse(
        r#"
engine:
  boundary:
    width: 100
    height: 40
    margin: 20
parameters:
  dt: 0.01
particles: []
"#,
    );

    assert!(matches!(cfg.validate(), Err(ConfigError::DegenerateBoundary { .. })));
}

// ==================================================================================
// Generated scenario tests
// ==================================================================================

#[test]
fn step_count_sets_dt() {
    let p = Parameters::from_step_count(1000);
    assert_eq!(p.dt, 1.0 / 60.0 / 1000.0 / 0.1);
    assert_eq!(p.steps_per_frame, STEPS_PER_FRAME);

    let scenario = Scenario::circle(4, 500).expect("valid");
    assert_eq!(scenario.system.dt(), Parameters::from_step_count(500).dt);
}

#[test]
fn zero_steps_is_rejected() {
    assert!(matches!(Scenario::circle(4, 0), Err(ConfigError::NonPositive { name: "steps", .. })));
    assert!(Scenario::random(4, 0).is_err());
}

#[test]
fn circle_places_ring_around_center() {
    let scenario = Scenario::circle(20, 1000).expect("valid");
    assert_eq!(scenario.system.len(), 20);
    assert_eq!(scenario.system.step_count(), 0);

    for p in scenario.system.particles() {
        let r = ((p.x.x - 400.0).powi(2) + (p.x.y - 300.0).powi(2)).sqrt();
        assert!((148.0..=152.0).contains(&r), "radius {r}");
        assert!([1.0, 1.5, 2.0].contains(&p.mass), "mass {}", p.mass);
        assert!(p.v.x.abs() <= 1.25 && p.v.y.abs() <= 1.25);
    }
}

#[test]
fn random_places_particles_inside_margin() {
    let scenario = Scenario::random(50, 1000).expect("valid");
    assert_eq!(scenario.system.len(), 50);

    for p in scenario.system.particles() {
        assert!(p.x.x >= 10.0 && p.x.x <= 790.0);
        assert!(p.x.y >= 10.0 && p.x.y <= 590.0);
    }
}

#[test]
fn empty_scenarios_are_allowed() {
    let mut scenario = Scenario::random(0, 1000).expect("valid");
    assert!(scenario.system.is_empty());

    scenario.advance_frame();
    assert_eq!(scenario.system.step_count(), STEPS_PER_FRAME as u64);
    assert!(scenario.system.snapshot().is_empty());
}
