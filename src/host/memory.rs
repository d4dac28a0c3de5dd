use slotmap::SlotMap;

use crate::error::HostError;
use crate::horizon::HorizonBox;
use crate::mesh::{CollisionHull, Placement, RenderMesh};

use super::{PhysicsTarget, RenderTarget};

slotmap::new_key_type! {
    /// Handle of a mesh in an [`InMemoryScene`].
    pub struct MeshId;
}

slotmap::new_key_type! {
    /// Handle of a body in an [`InMemoryWorld`].
    pub struct BodyId;
}

/// A mesh held by the scene.
#[derive(Debug, Clone)]
pub struct SceneMesh {
    pub mesh: RenderMesh,
    pub placement: Placement,
}

/// Arena-backed render scene.
#[derive(Debug, Default)]
pub struct InMemoryScene {
    meshes: SlotMap<MeshId, SceneMesh>,
    horizon: Option<HorizonBox>,
}

impl InMemoryScene {
    /// Creates a new, empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the mesh with the given ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the mesh is not in the scene.
    pub fn mesh(&self, id: MeshId) -> Result<&SceneMesh, HostError> {
        self.meshes.get(id).ok_or(HostError::EntityNotFound("mesh"))
    }

    #[must_use]
    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    pub fn meshes(&self) -> impl Iterator<Item = (MeshId, &SceneMesh)> {
        self.meshes.iter()
    }

    #[must_use]
    pub fn horizon(&self) -> Option<&HorizonBox> {
        self.horizon.as_ref()
    }
}

impl RenderTarget for InMemoryScene {
    type MeshHandle = MeshId;

    fn add_mesh(&mut self, mesh: &RenderMesh, placement: &Placement) -> MeshId {
        self.meshes.insert(SceneMesh {
            mesh: mesh.clone(),
            placement: *placement,
        })
    }

    fn remove_mesh(&mut self, handle: MeshId) -> Result<(), HostError> {
        self.meshes
            .remove(handle)
            .map(|_| ())
            .ok_or(HostError::EntityNotFound("mesh"))
    }

    fn install_horizon(&mut self, horizon: &HorizonBox) {
        self.horizon = Some(horizon.clone());
    }
}

/// A static body held by the world.
#[derive(Debug, Clone)]
pub struct WorldBody {
    pub hull: CollisionHull,
    pub placement: Placement,
}

/// Arena-backed physics world.
#[derive(Debug, Default)]
pub struct InMemoryWorld {
    bodies: SlotMap<BodyId, WorldBody>,
}

impl InMemoryWorld {
    /// Creates a new, empty world.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the body with the given ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not in the world.
    pub fn body(&self, id: BodyId) -> Result<&WorldBody, HostError> {
        self.bodies.get(id).ok_or(HostError::EntityNotFound("body"))
    }

    #[must_use]
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn bodies(&self) -> impl Iterator<Item = (BodyId, &WorldBody)> {
        self.bodies.iter()
    }
}

impl PhysicsTarget for InMemoryWorld {
    type BodyHandle = BodyId;

    fn add_body(&mut self, hull: &CollisionHull, placement: &Placement) -> BodyId {
        self.bodies.insert(WorldBody {
            hull: hull.clone(),
            placement: *placement,
        })
    }

    fn remove_body(&mut self, handle: BodyId) -> Result<(), HostError> {
        self.bodies
            .remove(handle)
            .map(|_| ())
            .ok_or(HostError::EntityNotFound("body"))
    }
}
