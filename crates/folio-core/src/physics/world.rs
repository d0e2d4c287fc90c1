use rapier2d::prelude::*;

/// Rapier pipeline and body/collider sets for one arena.
///
/// Positions handed in and out are in metres; the board converts to pixels.
pub struct World {
    pipeline: PhysicsPipeline,
    gravity: Vector<Real>,
    params: IntegrationParameters,
    islands: IslandManager,
    broad_phase: BroadPhase,
    narrow_phase: NarrowPhase,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    pub(crate) bodies: RigidBodySet,
    pub(crate) colliders: ColliderSet,
}

impl World {
    pub fn new(gravity: Vector<Real>, dt: Real) -> Self {
        let params = IntegrationParameters {
            dt,
            ..IntegrationParameters::default()
        };
        Self {
            pipeline: PhysicsPipeline::new(),
            gravity,
            params,
            islands: IslandManager::new(),
            broad_phase: BroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
        }
    }

    /// Static box centred at `center` with the given half extents.
    pub fn add_wall(
        &mut self,
        center: Vector<Real>,
        half: Vector<Real>,
        restitution: Real,
        friction: Real,
    ) {
        let wall = ColliderBuilder::cuboid(half.x, half.y)
            .translation(center)
            .restitution(restitution)
            .friction(friction)
            .build();
        self.colliders.insert(wall);
    }

    pub fn add_body(
        &mut self,
        body: RigidBody,
        collider: Collider,
    ) -> (RigidBodyHandle, ColliderHandle) {
        let handle = self.bodies.insert(body);
        let collider = self
            .colliders
            .insert_with_parent(collider, handle, &mut self.bodies);
        (handle, collider)
    }

    pub fn step(&mut self) {
        self.pipeline.step(
            &self.gravity,
            &self.params,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            None,
            &(),
            &(),
        );
    }
}
