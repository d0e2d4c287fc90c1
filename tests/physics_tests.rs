// Host-side tests for the skills capsule board.

use folio_core::content::SiteContent;
use folio_core::error::FolioError;
use folio_core::physics::{
    capsule_width, pack_rows, ArenaSize, BodyView, CapsuleBoard, CapsuleSpec, PhysicsConfig,
};
use glam::Vec2;

const SEED: u64 = 42;

fn board(width: f32, height: f32) -> CapsuleBoard {
    CapsuleBoard::new(
        PhysicsConfig::default(),
        SiteContent::default().skill_specs(),
        ArenaSize::resolve(width, height),
        SEED,
    )
    .unwrap()
}

fn assert_contained(board: &CapsuleBoard) {
    let arena = board.arena();
    for b in board.bodies() {
        assert!(
            (0.0..=arena.width).contains(&b.position.x)
                && (0.0..=arena.height).contains(&b.position.y),
            "{} escaped to {:?}",
            b.label,
            b.position
        );
    }
}

fn closest_on_segment(p: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    let ab = b - a;
    let len2 = ab.length_squared();
    if len2 <= f32::EPSILON {
        return a;
    }
    a + ab * ((p - a).dot(ab) / len2).clamp(0.0, 1.0)
}

fn core_segment(v: &BodyView<'_>) -> (Vec2, Vec2) {
    let half = Vec2::from_angle(v.angle) * ((v.width - v.height) * 0.5).max(0.0);
    (v.position - half, v.position + half)
}

/// Sampled distance between two capsule core segments.
fn segment_gap(a: &BodyView<'_>, b: &BodyView<'_>) -> f32 {
    let (a0, a1) = core_segment(a);
    let (b0, b1) = core_segment(b);
    (0..=64)
        .map(|i| {
            let p = a0.lerp(a1, i as f32 / 64.0);
            p.distance(closest_on_segment(p, b0, b1))
        })
        .fold(f32::INFINITY, f32::min)
}

fn overlapping_pairs(board: &CapsuleBoard) -> usize {
    let bodies = board.bodies();
    let mut count = 0;
    for (i, a) in bodies.iter().enumerate() {
        for b in &bodies[i + 1..] {
            if segment_gap(a, b) < (a.height + b.height) * 0.5 - 0.5 {
                count += 1;
            }
        }
    }
    count
}

#[test]
fn capsule_width_grows_with_label_length() {
    let config = PhysicsConfig::default();
    assert_eq!(capsule_width("Rust", &config), 4.0 * 15.0 + 40.0);
    let mut last = 0.0;
    for label in ["", "C", "Go", "SQL", "Rust", "Python", "TypeScript"] {
        let w = capsule_width(label, &config);
        assert!(w > last);
        last = w;
    }
}

#[test]
fn zero_sized_container_falls_back_to_default_arena() {
    assert_eq!(ArenaSize::resolve(0.0, f32::NAN), ArenaSize::default());
    let a = ArenaSize::resolve(800.0, -1.0);
    assert_eq!(a.width, 800.0);
    assert_eq!(a.height, ArenaSize::default().height);
}

#[test]
fn invalid_config_is_rejected() {
    let config = PhysicsConfig {
        restitution: 1.5,
        ..PhysicsConfig::default()
    };
    let err = CapsuleBoard::new(config, Vec::new(), ArenaSize::default(), SEED)
        .err()
        .unwrap();
    assert!(matches!(err, FolioError::InvalidPhysics(_)));

    let tunnelling = PhysicsConfig {
        max_speed: 10_000.0,
        ..PhysicsConfig::default()
    };
    assert!(tunnelling.validate().is_err());
    assert!(PhysicsConfig::default().validate().is_ok());
}

#[test]
fn spawns_one_body_per_skill_inside_the_arena() {
    let b = board(1200.0, 500.0);
    assert_eq!(b.bodies().len(), SiteContent::default().skills.len());
    assert_contained(&b);
    for (body, spec) in b.bodies().iter().zip(SiteContent::default().skill_specs()) {
        assert_eq!(body.label, spec.label);
        assert_eq!(body.color, spec.color);
    }
}

#[test]
fn spawn_never_overlaps_on_any_width() {
    for width in [320.0, 375.0, 600.0, 768.0, 1200.0] {
        let b = board(width, 500.0);
        assert_eq!(overlapping_pairs(&b), 0, "overlap at {} px", width);
        assert_contained(&b);
    }
}

#[test]
fn rows_pack_first_fit_in_order() {
    let rows = pack_rows(&[100.0, 200.0, 150.0, 40.0], 300.0, 10.0);
    // 150 back-fills the first row; 40 only fits beside 200.
    assert_eq!(rows, vec![vec![0, 2], vec![1, 3]]);
    // A single item wider than the row still gets a row of its own.
    assert_eq!(pack_rows(&[500.0], 300.0, 10.0), vec![vec![0]]);
    assert!(pack_rows(&[], 300.0, 10.0).is_empty());
}

#[test]
fn nonsensical_arena_falls_back_instead_of_panicking() {
    let b = CapsuleBoard::new(
        PhysicsConfig::default(),
        SiteContent::default().skill_specs(),
        ArenaSize {
            width: -200.0,
            height: f32::NAN,
        },
        SEED,
    )
    .unwrap();
    assert_eq!(b.arena(), ArenaSize::default());
    assert_contained(&b);
}

#[test]
fn same_seed_spawns_the_same_layout() {
    let a = board(1200.0, 500.0);
    let b = board(1200.0, 500.0);
    for (x, y) in a.bodies().iter().zip(b.bodies()) {
        assert_eq!(x.position, y.position);
        assert_eq!(x.angle, y.angle);
    }
}

#[test]
fn bodies_fall_and_come_to_rest() {
    let mut b = board(1200.0, 500.0);
    let start: Vec<f32> = b.bodies().iter().map(|c| c.position.y).collect();
    b.settle(2000);
    assert_contained(&b);
    let fell = b
        .bodies()
        .iter()
        .zip(&start)
        .filter(|(c, y0)| c.position.y > **y0)
        .count();
    assert!(fell > 0);
}

#[test]
fn rebuild_on_resize_keeps_every_skill() {
    let mut b = board(1200.0, 500.0);
    b.settle(300);
    b.rebuild(ArenaSize::resolve(600.0, 500.0));
    assert_eq!(b.arena().width, 600.0);
    assert_eq!(b.bodies().len(), 16);
    assert_contained(&b);
    b.settle(600);
    assert_contained(&b);
}

#[test]
fn dragging_into_a_wall_stays_inside() {
    let mut b = board(1200.0, 500.0);
    b.settle(600);
    let start = b.bodies()[0].position;
    let grabbed = b.pointer_down(start).expect("a capsule sits under its own centre");
    assert_eq!(b.grabbed(), Some(grabbed));

    let target = Vec2::new(2000.0, start.y);
    for i in 1..=120 {
        b.pointer_move(start.lerp(target, i as f32 / 120.0));
        b.advance(1.0 / 60.0);
        assert_contained(&b);
    }
    b.pointer_up();
    assert_eq!(b.grabbed(), None);
    b.settle(1200);
    assert_contained(&b);
}

#[test]
fn pointer_down_on_empty_space_grabs_nothing() {
    let mut b = CapsuleBoard::new(
        PhysicsConfig::default(),
        vec![CapsuleSpec::new("Rust", "#B7410E")],
        ArenaSize::default(),
        SEED,
    )
    .unwrap();
    assert_eq!(b.pointer_down(Vec2::new(-500.0, -500.0)), None);
    assert_eq!(b.grabbed(), None);
}

#[test]
fn advance_runs_fixed_steps_and_drops_backlog() {
    let mut b = board(1200.0, 500.0);
    let h = b.config().fixed_step;
    assert_eq!(b.advance(h * 0.5), 0);
    assert_eq!(b.advance(h * 0.6), 1);
    // A stalled frame is capped at the substep limit.
    assert_eq!(b.advance(0.25), b.config().max_substeps);
    assert_eq!(b.advance(0.0), 0);
}

#[test]
fn clear_releases_everything() {
    let mut b = board(1200.0, 500.0);
    b.clear();
    assert!(b.bodies().is_empty());
    assert_eq!(b.views().count(), 0);
}
