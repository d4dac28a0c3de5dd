//! Collaborators that receive generated tracks, and the session that drives
//! them.

mod memory;
mod session;

pub use memory::{BodyId, InMemoryScene, InMemoryWorld, MeshId, SceneMesh, WorldBody};
pub use session::TrackSession;

use crate::error::HostError;
use crate::horizon::HorizonBox;
use crate::mesh::{CollisionHull, Placement, RenderMesh};

/// A render scene that can hold piece meshes and a horizon.
pub trait RenderTarget {
    type MeshHandle: Copy;

    /// Adds a mesh at `placement` and returns its handle.
    fn add_mesh(&mut self, mesh: &RenderMesh, placement: &Placement) -> Self::MeshHandle;

    /// Removes a previously added mesh.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::EntityNotFound`] for an unknown handle.
    fn remove_mesh(&mut self, handle: Self::MeshHandle) -> Result<(), HostError>;

    /// Replaces the current horizon.
    fn install_horizon(&mut self, horizon: &HorizonBox);
}

/// A physics world that can hold static collision bodies.
pub trait PhysicsTarget {
    type BodyHandle: Copy;

    /// Adds a body at `placement` and returns its handle.
    fn add_body(&mut self, hull: &CollisionHull, placement: &Placement) -> Self::BodyHandle;

    /// Removes a previously added body.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::EntityNotFound`] for an unknown handle.
    fn remove_body(&mut self, handle: Self::BodyHandle) -> Result<(), HostError>;
}
