use crate::error::{HostError, Result};
use crate::horizon::MakeHorizon;
use crate::layout::{catalog, LayoutDescriptor};
use crate::pipeline::{GenerateTrack, Track};

use super::{PhysicsTarget, RenderTarget};

/// A track together with the handles its pieces were installed under.
struct Installed<M, B> {
    track: Track,
    meshes: Vec<M>,
    bodies: Vec<B>,
}

/// Owns the current layout and keeps a scene and a world in sync with it.
///
/// Selecting a layout generates the whole track before touching either
/// collaborator, so a layout that fails to generate leaves the previous track
/// in place.
pub struct TrackSession<R: RenderTarget, P: PhysicsTarget> {
    scene: R,
    world: P,
    installed: Option<Installed<R::MeshHandle, P::BodyHandle>>,
}

impl<R: RenderTarget, P: PhysicsTarget> TrackSession<R, P> {
    /// Creates a session with nothing installed.
    #[must_use]
    pub fn new(scene: R, world: P) -> Self {
        Self {
            scene,
            world,
            installed: None,
        }
    }

    /// The currently installed track, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Track> {
        self.installed.as_ref().map(|i| &i.track)
    }

    #[must_use]
    pub fn scene(&self) -> &R {
        &self.scene
    }

    #[must_use]
    pub fn world(&self) -> &P {
        &self.world
    }

    /// Releases the collaborators.
    pub fn into_parts(self) -> (R, P) {
        (self.scene, self.world)
    }

    /// Generates `layout` and installs it in place of the current track.
    ///
    /// # Errors
    ///
    /// Returns any generation error, in which case the scene and world are
    /// untouched. If a collaborator rejects a handle of the previous track,
    /// every other handle is still removed, nothing is installed, and the
    /// first rejection is returned.
    pub fn select_layout(&mut self, layout: &LayoutDescriptor) -> Result<&Track> {
        let track = GenerateTrack::new(layout).execute()?;
        let horizon = MakeHorizon::new(layout.characteristics()).execute();

        self.teardown()?;

        self.scene.install_horizon(&horizon);
        let mut meshes = Vec::with_capacity(track.geometry().len());
        let mut bodies = Vec::with_capacity(track.geometry().len());
        for g in track.geometry() {
            meshes.push(self.scene.add_mesh(&g.mesh, &g.placement));
            bodies.push(self.world.add_body(&g.hull, &g.placement));
        }

        tracing::info!(
            sections = track.spans().len(),
            pieces = track.pieces().len(),
            "installed track"
        );
        let installed = self.installed.insert(Installed {
            track,
            meshes,
            bodies,
        });
        Ok(&installed.track)
    }

    /// Removes every handle of the installed track, continuing past handles a
    /// collaborator rejects, and returns the first rejection.
    fn teardown(&mut self) -> std::result::Result<(), HostError> {
        let Some(previous) = self.installed.take() else {
            return Ok(());
        };
        let mut rejected = Vec::new();
        for handle in previous.meshes {
            if let Err(e) = self.scene.remove_mesh(handle) {
                rejected.push(e);
            }
        }
        for handle in previous.bodies {
            if let Err(e) = self.world.remove_body(handle) {
                rejected.push(e);
            }
        }
        if rejected.is_empty() {
            return Ok(());
        }
        tracing::warn!(rejected = rejected.len(), "collaborators rejected track handles");
        Err(rejected.swap_remove(0))
    }

    /// Installs the catalog layout at `index`, clamped into range.
    ///
    /// # Errors
    ///
    /// See [`TrackSession::select_layout`].
    pub fn select_catalog(&mut self, index: usize) -> Result<&Track> {
        let layout = catalog::select(index)?;
        self.select_layout(&layout)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{ElevationError, TrackError};
    use crate::horizon::HorizonBox;
    use crate::host::{InMemoryScene, InMemoryWorld, MeshId};
    use crate::mesh::{Placement, RenderMesh};
    use crate::layout::{Characteristics, Color, HorizonSpec, Origin, Section};
    use crate::math::{Point3, Vector3};
    use approx::assert_relative_eq;

    fn session() -> TrackSession<InMemoryScene, InMemoryWorld> {
        TrackSession::new(InMemoryScene::new(), InMemoryWorld::new())
    }

    /// A scene that refuses the `reject_at`-th removal and keeps that mesh.
    struct RejectingScene {
        inner: InMemoryScene,
        removals: usize,
        reject_at: usize,
    }

    impl RenderTarget for RejectingScene {
        type MeshHandle = MeshId;

        fn add_mesh(&mut self, mesh: &RenderMesh, placement: &Placement) -> MeshId {
            self.inner.add_mesh(mesh, placement)
        }

        fn remove_mesh(&mut self, handle: MeshId) -> std::result::Result<(), HostError> {
            self.removals += 1;
            if self.removals == self.reject_at {
                return Err(HostError::EntityNotFound("mesh"));
            }
            self.inner.remove_mesh(handle)
        }

        fn install_horizon(&mut self, horizon: &HorizonBox) {
            self.inner.install_horizon(horizon);
        }
    }

    fn impossible_layout() -> LayoutDescriptor {
        LayoutDescriptor::new(
            Characteristics::new(
                20.0,
                5.0,
                10.0,
                5.0,
                Color(0),
                HorizonSpec::parse(500.0, ["!000000"; 6]).unwrap(),
            ),
            Origin::new(Point3::new(0.0, 5.0, 0.0), Vector3::x()),
            vec![
                Section::straight(200.0, 0.0),
                Section::straight(30.0, 30.0),
                Section::straight(200.0, 0.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn selection_installs_every_piece() {
        let mut s = session();
        let pieces = s.select_catalog(0).unwrap().pieces().len();
        assert_eq!(pieces, 92);
        assert_eq!(s.scene().mesh_count(), 92);
        assert_eq!(s.world().body_count(), 92);
        assert!(s.scene().horizon().is_some());
    }

    #[test]
    fn reselection_replaces_the_previous_track() {
        let mut s = session();
        s.select_catalog(0).unwrap();
        let first: Vec<_> = s.scene().meshes().map(|(id, _)| id).collect();

        let pieces = s.select_catalog(2).unwrap().pieces().len();
        assert_eq!(s.scene().mesh_count(), pieces);
        assert_eq!(s.world().body_count(), pieces);
        for id in first {
            assert!(s.scene().mesh(id).is_err());
        }
        assert_relative_eq!(s.scene().horizon().unwrap().half_extent, 1500.0);
    }

    #[test]
    fn failed_selection_keeps_the_previous_track() {
        let mut s = session();
        s.select_catalog(1).unwrap();
        let before = s.scene().mesh_count();

        let result = s.select_layout(&impossible_layout());
        assert!(matches!(
            result,
            Err(TrackError::Elevation(ElevationError::GapExhausted { section: 1 }))
        ));
        assert_eq!(s.scene().mesh_count(), before);
        assert_eq!(s.world().body_count(), before);
        assert_eq!(s.current().unwrap().layout(), &catalog::select(1).unwrap());
    }

    #[test]
    fn rejected_removal_still_clears_every_other_handle() {
        let scene = RejectingScene {
            inner: InMemoryScene::new(),
            removals: 0,
            reject_at: 10,
        };
        let mut s = TrackSession::new(scene, InMemoryWorld::new());
        s.select_catalog(0).unwrap();

        let result = s.select_catalog(0);
        assert!(matches!(
            result,
            Err(TrackError::Host(HostError::EntityNotFound("mesh")))
        ));
        assert!(s.current().is_none());
        // Only the refused mesh is left behind.
        assert_eq!(s.scene().inner.mesh_count(), 1);
        assert_eq!(s.world().body_count(), 0);

        let pieces = s.select_catalog(1).unwrap().pieces().len();
        assert_eq!(s.scene().inner.mesh_count(), pieces + 1);
        assert_eq!(s.world().body_count(), pieces);
    }

    #[test]
    fn catalog_index_is_clamped() {
        let mut s = session();
        let clamped = s.select_catalog(usize::MAX).unwrap().pieces().len();
        let last = GenerateTrack::new(&catalog::select(catalog::LAYOUT_COUNT - 1).unwrap())
            .execute()
            .unwrap()
            .pieces()
            .len();
        assert_eq!(clamped, last);
    }

    #[test]
    fn installed_meshes_carry_piece_placements() {
        let mut s = session();
        s.select_catalog(0).unwrap();
        let track = s.current().unwrap();
        let scene = s.scene();
        for (_, installed) in scene.meshes() {
            assert!(track
                .geometry()
                .iter()
                .any(|g| g.placement == installed.placement));
        }
        let (scene, world) = s.into_parts();
        assert_eq!(scene.mesh_count(), world.body_count());
    }
}
