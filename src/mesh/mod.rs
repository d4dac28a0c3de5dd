//! Per-piece output handed to the render scene and the physics world.

use std::collections::HashSet;

use crate::layout::Color;
use crate::math::{Point3, UnitQuaternion, Vector3, TOLERANCE};

/// A render mesh in piece-local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Triangle indices, counter-clockwise seen from outside.
    pub triangles: Vec<[u32; 3]>,
    /// Uniform surface color.
    pub color: Color,
}

impl RenderMesh {
    /// Unit normal of every triangle, following the winding.
    #[must_use]
    pub fn triangle_normals(&self) -> Vec<Vector3> {
        self.triangles
            .iter()
            .map(|t| {
                let [a, b, c] = t.map(|i| self.vertices[i as usize]);
                (b - a).cross(&(c - a)).try_normalize(TOLERANCE).unwrap_or_else(Vector3::zeros)
            })
            .collect()
    }
}

/// How a collision body moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyMotion {
    /// Never moves; track pieces are always static.
    #[default]
    Static,
}

/// A convex collision body in piece-local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionHull {
    pub vertices: Vec<Point3>,
    /// Quad faces, counter-clockwise seen from outside.
    pub faces: Vec<[u32; 4]>,
    pub motion: BodyMotion,
}

impl CollisionHull {
    /// Unit normal of every face.
    ///
    /// Hull quads on sloped curve pieces are slightly warped, so the normal is
    /// taken over the whole loop with Newell's method.
    #[must_use]
    pub fn face_normals(&self) -> Vec<Vector3> {
        self.faces
            .iter()
            .map(|f| newell_normal(&f.map(|i| self.vertices[i as usize])))
            .collect()
    }

    /// Whether every edge is shared by exactly two faces traversing it in
    /// opposite directions.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        let mut edges = HashSet::new();
        for face in &self.faces {
            for k in 0..face.len() {
                if !edges.insert((face[k], face[(k + 1) % face.len()])) {
                    return false;
                }
            }
        }
        edges.iter().all(|&(a, b)| edges.contains(&(b, a)))
    }
}

/// World-space pose of a piece.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: Point3,
    pub orientation: UnitQuaternion,
}

impl Placement {
    /// A placement at `position` with no rotation.
    #[must_use]
    pub fn at(position: Point3) -> Self {
        Self {
            position,
            orientation: UnitQuaternion::identity(),
        }
    }

    /// Maps a piece-local point to world space.
    #[must_use]
    pub fn to_world(&self, local: &Point3) -> Point3 {
        self.position + self.orientation * local.coords
    }
}

/// Everything emitted for one piece.
#[derive(Debug, Clone, PartialEq)]
pub struct PieceGeometry {
    pub mesh: RenderMesh,
    pub hull: CollisionHull,
    pub placement: Placement,
}

/// Newell normal of a polygon; zero for a degenerate loop.
fn newell_normal(points: &[Point3]) -> Vector3 {
    let n = points.len();
    let mut normal = Vector3::zeros();
    for i in 0..n {
        let curr = &points[i];
        let next = &points[(i + 1) % n];
        normal.x += (curr.y - next.y) * (curr.z + next.z);
        normal.y += (curr.z - next.z) * (curr.x + next.x);
        normal.z += (curr.x - next.x) * (curr.y + next.y);
    }
    normal.try_normalize(TOLERANCE).unwrap_or_else(Vector3::zeros)
}
