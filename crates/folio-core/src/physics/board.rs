use super::world::World;
use crate::constants::*;
use crate::error::{FolioError, Result};
use glam::Vec2;
use rand::prelude::*;
use rapier2d::math::{Isometry, Point, Real, Vector};
use rapier2d::parry::query::PointQuery;
use rapier2d::prelude::{ColliderBuilder, ColliderHandle, RigidBodyBuilder, RigidBodyHandle};

/// Gap kept between spawn cells (px).
const SPAWN_GAP: f32 = 12.0;
const SPAWN_MARGIN: f32 = 20.0;
const SPAWN_ROW_PITCH: f32 = 80.0;
const REST_LINEAR_SPEED: f32 = 5.0;
const REST_ANGULAR_SPEED: f32 = 0.1;

#[derive(Clone, Debug, PartialEq)]
pub struct PhysicsConfig {
    /// Pixels per second squared.
    pub gravity: Vec2,
    pub restitution: f32,
    pub friction: f32,
    /// Fraction of the grab-point error closed per step.
    pub drag_stiffness: f32,
    pub wall_thickness: f32,
    pub capsule_height: f32,
    pub char_width: f32,
    pub padding: f32,
    /// Mass per square metre of simulation space.
    pub density: f32,
    /// Velocity fraction lost per step to air drag.
    pub air_friction: f32,
    pub fixed_step: f32,
    pub max_substeps: usize,
    /// Speed cap in px/s; one step of travel must stay below the wall thickness.
    pub max_speed: f32,
    pub initial_tilt: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: Vec2::new(0.0, GRAVITY_PX_PER_S2),
            restitution: RESTITUTION,
            friction: FRICTION,
            drag_stiffness: DRAG_STIFFNESS,
            wall_thickness: WALL_THICKNESS,
            capsule_height: CAPSULE_HEIGHT,
            char_width: CAPSULE_CHAR_WIDTH,
            padding: CAPSULE_PADDING,
            density: 1.0,
            air_friction: 0.01,
            fixed_step: FIXED_STEP_SEC,
            max_substeps: MAX_SUBSTEPS_PER_FRAME,
            max_speed: 0.8 * WALL_THICKNESS / FIXED_STEP_SEC,
            initial_tilt: INITIAL_TILT_RAD,
        }
    }
}

impl PhysicsConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.fixed_step > 0.0) {
            return Err(FolioError::InvalidPhysics("fixed_step must be positive"));
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(FolioError::InvalidPhysics("restitution must be within [0, 1]"));
        }
        if self.friction < 0.0 {
            return Err(FolioError::InvalidPhysics("friction must not be negative"));
        }
        if !(0.0..=1.0).contains(&self.drag_stiffness) {
            return Err(FolioError::InvalidPhysics("drag_stiffness must be within [0, 1]"));
        }
        if !(self.capsule_height > 0.0) || self.char_width < 0.0 || self.padding < 0.0 {
            return Err(FolioError::InvalidPhysics("capsule dimensions must be positive"));
        }
        if !(self.density > 0.0) {
            return Err(FolioError::InvalidPhysics("density must be positive"));
        }
        if self.max_speed * self.fixed_step >= self.wall_thickness {
            return Err(FolioError::InvalidPhysics(
                "max_speed would tunnel through the walls in one step",
            ));
        }
        if self.max_substeps == 0 {
            return Err(FolioError::InvalidPhysics("max_substeps must be non-zero"));
        }
        Ok(())
    }
}

/// Capsule width for a label: characters times per-char width plus padding.
pub fn capsule_width(label: &str, config: &PhysicsConfig) -> f32 {
    label.chars().count() as f32 * config.char_width + config.padding
}

/// Arena size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArenaSize {
    pub width: f32,
    pub height: f32,
}

impl ArenaSize {
    /// Measured container size, falling back to the default arena when a
    /// dimension is zero or not a number (unlaid-out or hidden container).
    pub fn resolve(width: f32, height: f32) -> Self {
        let pick = |v: f32, fallback: f32| if v.is_finite() && v > 0.0 { v } else { fallback };
        Self {
            width: pick(width, ARENA_DEFAULT_WIDTH),
            height: pick(height, ARENA_DEFAULT_HEIGHT),
        }
    }
}

impl Default for ArenaSize {
    fn default() -> Self {
        Self {
            width: ARENA_DEFAULT_WIDTH,
            height: ARENA_DEFAULT_HEIGHT,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CapsuleSpec {
    pub label: String,
    pub color: String,
}

impl CapsuleSpec {
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
        }
    }
}

/// Read-only view handed to the draw step.
#[derive(Clone, Copy, Debug)]
pub struct BodyView<'a> {
    pub label: &'a str,
    pub color: &'a str,
    pub position: Vec2,
    pub angle: f32,
    pub width: f32,
    pub height: f32,
}

/// One skill capsule: label data plus its handles in the world.
struct Capsule {
    label: String,
    color: String,
    width: f32,
    height: f32,
    body: RigidBodyHandle,
    collider: ColliderHandle,
}

#[derive(Clone, Copy, Debug)]
struct Grab {
    capsule: usize,
    local_anchor: Point<Real>,
    target: Point<Real>,
}

fn to_world(p: Vec2) -> Point<Real> {
    Point::new(p.x / PX_PER_METER, p.y / PX_PER_METER)
}

fn to_px(v: &Vector<Real>) -> Vec2 {
    Vec2::new(v.x, v.y) * PX_PER_METER
}

/// First-fit shelf packing: rows of capsule indices, each row no wider than
/// `row_width` including `gap` between neighbours. Indices keep their order
/// within a row.
pub fn pack_rows(widths: &[f32], row_width: f32, gap: f32) -> Vec<Vec<usize>> {
    let mut rows: Vec<(f32, Vec<usize>)> = Vec::new();
    for (i, &w) in widths.iter().enumerate() {
        match rows
            .iter_mut()
            .find(|(used, _)| *used + gap + w <= row_width)
        {
            Some((used, row)) => {
                *used += gap + w;
                row.push(i);
            }
            None => rows.push((w, vec![i])),
        }
    }
    rows.into_iter().map(|(_, row)| row).collect()
}

/// Largest start angle that keeps a capsule's core segment within `sweep`
/// px of its row centre line.
fn tilt_limit(tilt: f32, sweep: f32, half_segment: f32) -> f32 {
    if half_segment <= 0.0 {
        return tilt;
    }
    tilt.min((sweep / half_segment).min(1.0).asin())
}

pub struct CapsuleBoard {
    config: PhysicsConfig,
    specs: Vec<CapsuleSpec>,
    arena: ArenaSize,
    world: World,
    capsules: Vec<Capsule>,
    grab: Option<Grab>,
    accumulator: f32,
    rng: StdRng,
}

impl CapsuleBoard {
    pub fn new(
        config: PhysicsConfig,
        specs: Vec<CapsuleSpec>,
        arena: ArenaSize,
        seed: u64,
    ) -> Result<Self> {
        config.validate()?;
        let mut board = Self {
            world: World::new(Vector::zeros(), config.fixed_step),
            config,
            specs,
            arena: ArenaSize::resolve(arena.width, arena.height),
            capsules: Vec::new(),
            grab: None,
            accumulator: 0.0,
            rng: StdRng::seed_from_u64(seed),
        };
        board.spawn();
        Ok(board)
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    pub fn arena(&self) -> ArenaSize {
        self.arena
    }

    pub fn views(&self) -> impl Iterator<Item = BodyView<'_>> {
        self.capsules.iter().filter_map(move |c| {
            let rb = self.world.bodies.get(c.body)?;
            Some(BodyView {
                label: &c.label,
                color: &c.color,
                position: to_px(rb.translation()),
                angle: rb.rotation().angle(),
                width: c.width,
                height: c.height,
            })
        })
    }

    /// Snapshot of every capsule in skill order.
    pub fn bodies(&self) -> Vec<BodyView<'_>> {
        self.views().collect()
    }

    pub fn grabbed(&self) -> Option<usize> {
        self.grab.map(|g| g.capsule)
    }

    /// Discard every body and respawn the full set for a new arena size.
    pub fn rebuild(&mut self, arena: ArenaSize) {
        self.arena = ArenaSize::resolve(arena.width, arena.height);
        self.spawn();
    }

    /// Release all simulation state.
    pub fn clear(&mut self) {
        self.world = World::new(Vector::zeros(), self.config.fixed_step);
        self.capsules.clear();
        self.grab = None;
        self.accumulator = 0.0;
    }

    fn build_world(&self) -> World {
        let c = &self.config;
        let s = PX_PER_METER;
        let gravity = Vector::new(c.gravity.x / s, c.gravity.y / s);
        let mut world = World::new(gravity, c.fixed_step);

        let (w, h, t) = (self.arena.width / s, self.arena.height / s, c.wall_thickness / s);
        let horizontal = Vector::new(w * 0.5 + t, t * 0.5);
        let vertical = Vector::new(t * 0.5, h * 0.5 + t);
        for (center, half) in [
            (Vector::new(w * 0.5, -t * 0.5), horizontal),
            (Vector::new(w * 0.5, h + t * 0.5), horizontal),
            (Vector::new(-t * 0.5, h * 0.5), vertical),
            (Vector::new(w + t * 0.5, h * 0.5), vertical),
        ] {
            world.add_wall(center, half, c.restitution, c.friction);
        }
        world
    }

    fn spawn(&mut self) {
        self.clear();
        self.world = self.build_world();

        let height = self.config.capsule_height;
        let widths: Vec<f32> = self
            .specs
            .iter()
            .map(|s| capsule_width(&s.label, &self.config).max(height))
            .collect();
        let widest = widths.iter().copied().fold(height, f32::max);
        let usable_w = (self.arena.width - 2.0 * SPAWN_MARGIN).max(widest);
        let usable_h = (self.arena.height - 2.0 * SPAWN_MARGIN).max(height);
        let rows = pack_rows(&widths, usable_w, SPAWN_GAP);
        let pitch = (usable_h / rows.len().max(1) as f32).min(SPAWN_ROW_PITCH);
        if pitch < height {
            log::debug!(
                "[skills] {} rows do not fit {:.0}px; spawn rows overlap",
                rows.len(),
                self.arena.height
            );
        }
        let sweep = ((pitch - height) * 0.5).max(0.0);
        let left = (self.arena.width - usable_w) * 0.5;

        let mut poses = vec![(Vec2::ZERO, 0.0f32); widths.len()];
        for (r, row) in rows.iter().enumerate() {
            let used = row.iter().map(|&i| widths[i]).sum::<f32>()
                + SPAWN_GAP * row.len().saturating_sub(1) as f32;
            let slack = (usable_w - used).max(0.0);
            let mut x = left;
            if slack > 0.0 {
                x += self.rng.gen_range(0.0..=slack);
            }
            let y = SPAWN_MARGIN + (r as f32 + 0.5) * pitch;
            for &i in row {
                let w = widths[i];
                let tilt = tilt_limit(self.config.initial_tilt, sweep, (w - height) * 0.5);
                let angle = if tilt > 0.0 {
                    self.rng.gen_range(-tilt..=tilt)
                } else {
                    0.0
                };
                let center = Vec2::new(
                    (x + w * 0.5).clamp(0.0, self.arena.width),
                    y.clamp(0.0, self.arena.height),
                );
                poses[i] = (center, angle);
                x += w + SPAWN_GAP;
            }
        }

        let s = PX_PER_METER;
        let damping = self.config.air_friction / self.config.fixed_step;
        for (i, spec) in self.specs.iter().enumerate() {
            let (center, angle) = poses[i];
            let width = widths[i];
            let body = RigidBodyBuilder::dynamic()
                .translation(Vector::new(center.x / s, center.y / s))
                .rotation(angle)
                .linear_damping(damping)
                .angular_damping(damping)
                .ccd_enabled(true)
                .build();
            let collider = ColliderBuilder::capsule_x((width - height) * 0.5 / s, height * 0.5 / s)
                .restitution(self.config.restitution)
                .friction(self.config.friction)
                .density(self.config.density)
                .build();
            let (body, collider) = self.world.add_body(body, collider);
            self.capsules.push(Capsule {
                label: spec.label.clone(),
                color: spec.color.clone(),
                width,
                height,
                body,
                collider,
            });
        }
        log::debug!(
            "[skills] spawned {} capsules in {:.0}x{:.0} ({} rows)",
            self.capsules.len(),
            self.arena.width,
            self.arena.height,
            rows.len()
        );
    }

    // ---------------- Pointer constraint ----------------

    fn pose(&self, capsule: &Capsule) -> Option<&Isometry<Real>> {
        self.world.bodies.get(capsule.body).map(|rb| rb.position())
    }

    /// Grab the top-most capsule under `point`. Returns its index.
    pub fn pointer_down(&mut self, point: Vec2) -> Option<usize> {
        let p = to_world(point);
        let idx = self.capsules.iter().rposition(|c| {
            let shape = self.world.colliders.get(c.collider).map(|co| co.shape());
            match (shape, self.pose(c)) {
                (Some(shape), Some(pose)) => shape.contains_point(pose, &p),
                _ => false,
            }
        })?;
        let local_anchor = self.pose(&self.capsules[idx])?.inverse_transform_point(&p);
        self.grab = Some(Grab {
            capsule: idx,
            local_anchor,
            target: p,
        });
        Some(idx)
    }

    pub fn pointer_move(&mut self, point: Vec2) {
        if let Some(g) = self.grab.as_mut() {
            g.target = to_world(point);
        }
    }

    pub fn pointer_up(&mut self) {
        self.grab = None;
    }

    // ---------------- Simulation ----------------

    /// Advance by a frame delta using fixed steps. Returns the step count.
    pub fn advance(&mut self, frame_dt: f32) -> usize {
        let h = self.config.fixed_step;
        self.accumulator += frame_dt.clamp(0.0, 0.25);
        let mut steps = 0;
        while self.accumulator >= h && steps < self.config.max_substeps {
            self.step();
            self.accumulator -= h;
            steps += 1;
        }
        if steps == self.config.max_substeps {
            // Tab was backgrounded or the frame stalled; drop the backlog.
            self.accumulator = 0.0;
        }
        steps
    }

    /// One fixed step: pointer spring, world step, speed cap, containment.
    pub fn step(&mut self) {
        self.apply_pointer_spring();
        self.world.step();
        self.cap_speed();
        self.contain();
    }

    fn apply_pointer_spring(&mut self) {
        let Some(g) = self.grab else { return };
        let dt = self.config.fixed_step;
        let max_speed = self.config.max_speed / PX_PER_METER;
        let stiffness = self.config.drag_stiffness;
        let Some(rb) = self
            .capsules
            .get(g.capsule)
            .and_then(|c| self.world.bodies.get_mut(c.body))
        else {
            self.grab = None;
            return;
        };
        let anchor = rb.position() * g.local_anchor;
        let mut desired = (g.target - anchor) * (stiffness / dt);
        if desired.norm() > max_speed {
            desired = desired.normalize() * max_speed;
        }
        let dv = desired - rb.velocity_at_point(&anchor);
        let impulse = dv * rb.mass();
        rb.apply_impulse_at_point(impulse, anchor, true);
    }

    fn cap_speed(&mut self) {
        let max_speed = self.config.max_speed / PX_PER_METER;
        for c in &self.capsules {
            let Some(rb) = self.world.bodies.get_mut(c.body) else { continue };
            let v = *rb.linvel();
            if v.norm() > max_speed {
                rb.set_linvel(v.normalize() * max_speed, true);
            }
        }
    }

    /// Last-resort clamp keeping every centre inside the arena.
    fn contain(&mut self) {
        let s = PX_PER_METER;
        let (w, h) = (self.arena.width / s, self.arena.height / s);
        for c in &self.capsules {
            let Some(rb) = self.world.bodies.get_mut(c.body) else { continue };
            let r = (c.height * 0.5 / s).min(w * 0.5).min(h * 0.5);
            let t = *rb.translation();
            let clamped = Vector::new(t.x.clamp(r, w - r), t.y.clamp(r, h - r));
            if clamped == t {
                continue;
            }
            let mut v = *rb.linvel();
            if clamped.x != t.x {
                v.x = 0.0;
            }
            if clamped.y != t.y {
                v.y = 0.0;
            }
            rb.set_translation(clamped, true);
            rb.set_linvel(v, true);
        }
    }

    /// True once every capsule is asleep or has (nearly) stopped moving.
    pub fn is_at_rest(&self) -> bool {
        self.grab.is_none()
            && self.capsules.iter().all(|c| {
                self.world.bodies.get(c.body).map_or(true, |rb| {
                    rb.is_sleeping()
                        || (to_px(rb.linvel()).length() < REST_LINEAR_SPEED
                            && rb.angvel().abs() < REST_ANGULAR_SPEED)
                })
            })
    }

    /// Step until at rest or `max_steps` elapse. Returns the steps taken.
    pub fn settle(&mut self, max_steps: usize) -> usize {
        for n in 0..max_steps {
            if n > 0 && self.is_at_rest() {
                return n;
            }
            self.step();
        }
        max_steps
    }
}
