use crate::error::{EmitError, Result};
use crate::layout::Color;
use crate::math::Point3;
use crate::mesh::{BodyMotion, CollisionHull, PieceGeometry, Placement, RenderMesh};
use crate::piece::{Piece, HULL_FACES};

/// Emits a render mesh, a collision hull and a placement for every piece.
///
/// Corners are expressed relative to the piece center, which becomes the
/// placement position.
pub struct EmitGeometry {
    color: Color,
}

impl EmitGeometry {
    /// Creates a new `EmitGeometry` operation.
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    /// Executes the emitter.
    ///
    /// # Errors
    ///
    /// Returns [`EmitError::MissingCenter`] if a piece has no center yet.
    pub fn execute(&self, pieces: &[Piece]) -> Result<Vec<PieceGeometry>> {
        let geometry = pieces
            .iter()
            .enumerate()
            .map(|(index, piece)| self.emit(index, piece))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        tracing::debug!(pieces = geometry.len(), "emitted piece geometry");
        Ok(geometry)
    }

    fn emit(&self, index: usize, piece: &Piece) -> std::result::Result<PieceGeometry, EmitError> {
        let center = piece.center.ok_or(EmitError::MissingCenter { piece: index })?;
        let layout = piece.kind.corner_layout();

        let local: Vec<Point3> = piece
            .corners
            .as_slice()
            .iter()
            .map(|corner| Point3::from(*corner - center))
            .collect();
        let hull_vertices = layout.structural.iter().map(|&i| local[i]).collect();

        Ok(PieceGeometry {
            mesh: RenderMesh {
                vertices: local,
                triangles: layout.triangles.to_vec(),
                color: self.color,
            },
            hull: CollisionHull {
                vertices: hull_vertices,
                faces: HULL_FACES.to_vec(),
                motion: BodyMotion::Static,
            },
            placement: Placement::at(center),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::TrackError;
    use crate::layout::catalog;
    use crate::math::Vector3;
    use crate::pipeline::{ComputeCenters, ProjectVertices, SolveElevations, SubdividePath};
    use approx::assert_relative_eq;

    fn pieces(index: usize) -> Vec<Piece> {
        let layout = catalog::select(index).unwrap();
        let thickness = layout.characteristics().track_thickness;
        let mut s = SubdividePath::new(&layout).execute().unwrap();
        SolveElevations::new(&layout).execute(&mut s).unwrap();
        ProjectVertices::new(thickness).execute(&mut s.pieces);
        ComputeCenters::new(thickness).execute(&mut s.pieces);
        s.pieces
    }

    fn centroid(points: &[Point3]) -> Point3 {
        #[allow(clippy::cast_precision_loss)]
        let n = points.len() as f64;
        Point3::from(points.iter().map(|p| p.coords).sum::<Vector3>() / n)
    }

    #[test]
    fn missing_center_is_reported_with_its_index() {
        let mut pieces = pieces(0);
        pieces[3].center = None;
        let result = EmitGeometry::new(Color(0)).execute(&pieces);
        assert!(matches!(
            result,
            Err(TrackError::Emit(EmitError::MissingCenter { piece: 3 }))
        ));
    }

    #[test]
    fn local_corners_reconstruct_world_corners() {
        let pieces = pieces(2);
        let geometry = EmitGeometry::new(Color(0)).execute(&pieces).unwrap();
        for (piece, g) in pieces.iter().zip(&geometry) {
            assert_relative_eq!(g.placement.position, piece.center.unwrap());
            for (world, local) in piece.corners.as_slice().iter().zip(&g.mesh.vertices) {
                assert_relative_eq!(g.placement.to_world(local), *world, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn mesh_and_hull_sizes() {
        let pieces = pieces(0);
        let geometry = EmitGeometry::new(Color(0x90_5020)).execute(&pieces).unwrap();
        let straight = &geometry[0];
        assert_eq!(straight.mesh.vertices.len(), 8);
        assert_eq!(straight.mesh.triangles.len(), 8);
        let curve = &geometry[30];
        assert_eq!(curve.mesh.vertices.len(), 10);
        assert_eq!(curve.mesh.triangles.len(), 10);
        for g in &geometry {
            assert_eq!(g.hull.vertices.len(), 8);
            assert_eq!(g.hull.faces.len(), 6);
            assert_eq!(g.hull.motion, BodyMotion::Static);
            assert_eq!(g.mesh.color, Color(0x90_5020));
            assert!(g.hull.is_closed());
        }
    }

    #[test]
    fn hull_uses_only_structural_corners() {
        let pieces = pieces(3);
        let geometry = EmitGeometry::new(Color(0)).execute(&pieces).unwrap();
        for (piece, g) in pieces.iter().zip(&geometry) {
            let structural = piece.kind.corner_layout().structural;
            for (vertex, &i) in g.hull.vertices.iter().zip(&structural) {
                assert_relative_eq!(*vertex, g.mesh.vertices[i]);
            }
        }
    }

    #[test]
    fn render_triangles_face_outward() {
        for index in 0..catalog::LAYOUT_COUNT {
            let pieces = pieces(index);
            let geometry = EmitGeometry::new(Color(0)).execute(&pieces).unwrap();
            for g in &geometry {
                let inside = centroid(&g.mesh.vertices);
                for (t, normal) in g.mesh.triangles.iter().zip(g.mesh.triangle_normals()) {
                    let on_triangle = centroid(&t.map(|i| g.mesh.vertices[i as usize]));
                    assert!(
                        normal.dot(&(on_triangle - inside)) > 0.0,
                        "layout {index}: triangle {t:?} faces inward"
                    );
                }
            }
        }
    }

    #[test]
    fn hull_faces_face_outward() {
        for index in 0..catalog::LAYOUT_COUNT {
            let pieces = pieces(index);
            let geometry = EmitGeometry::new(Color(0)).execute(&pieces).unwrap();
            for g in &geometry {
                let inside = centroid(&g.hull.vertices);
                for (f, normal) in g.hull.faces.iter().zip(g.hull.face_normals()) {
                    let on_face = centroid(&f.map(|i| g.hull.vertices[i as usize]));
                    assert!(
                        normal.dot(&(on_face - inside)) > 0.0,
                        "layout {index}: hull face {f:?} faces inward"
                    );
                }
            }
        }
    }

    #[test]
    fn flat_top_faces_point_up() {
        let pieces = pieces(0);
        let geometry = EmitGeometry::new(Color(0)).execute(&pieces).unwrap();
        for g in &geometry {
            assert_relative_eq!(g.hull.face_normals()[4], Vector3::y(), epsilon = 1e-9);
        }
    }
}
