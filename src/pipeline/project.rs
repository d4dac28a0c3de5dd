use crate::piece::{Level, Piece, Station};

/// Lifts every corner to the elevation of its path station and drops the
/// bottom ring by the track thickness.
pub struct ProjectVertices {
    thickness: f64,
}

impl ProjectVertices {
    /// Creates a new `ProjectVertices` operation.
    #[must_use]
    pub fn new(thickness: f64) -> Self {
        Self { thickness }
    }

    /// Executes the projection in place. Horizontal coordinates are untouched.
    pub fn execute(&self, pieces: &mut [Piece]) {
        for piece in pieces.iter_mut() {
            let (start, finish) = (piece.start.y, piece.finish.y);
            let slots = piece.kind.corner_layout().slots;
            for (corner, slot) in piece.corners.as_mut_slice().iter_mut().zip(slots) {
                let top = match slot.station {
                    Station::Start => start,
                    Station::Mid => (start + finish) / 2.0,
                    Station::Finish => finish,
                };
                corner.y = match slot.level {
                    Level::Top => top,
                    Level::Bottom => top - self.thickness,
                };
            }
        }
        tracing::debug!(pieces = pieces.len(), "projected corners");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::layout::catalog;
    use crate::piece::corners::{curve_left, straight};
    use crate::pipeline::{SolveElevations, SubdividePath};
    use approx::assert_relative_eq;

    fn projected(index: usize) -> Vec<Piece> {
        let layout = catalog::select(index).unwrap();
        let mut s = SubdividePath::new(&layout).execute().unwrap();
        SolveElevations::new(&layout).execute(&mut s).unwrap();
        ProjectVertices::new(layout.characteristics().track_thickness).execute(&mut s.pieces);
        s.pieces
    }

    #[test]
    fn flat_layout_has_top_at_five_and_bottom_at_zero() {
        for piece in projected(0) {
            let n = piece.corners.as_slice().len() / 2;
            for (i, corner) in piece.corners.as_slice().iter().enumerate() {
                let expected = if i < n { 5.0 } else { 0.0 };
                assert_relative_eq!(corner.y, expected, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn sloped_straight_corners_follow_their_station() {
        let pieces = projected(1);
        let piece = &pieces[10];
        assert!(piece.rise() > 0.0);
        assert_relative_eq!(piece.corner(straight::START_LEFT_TOP).y, piece.start.y);
        assert_relative_eq!(piece.corner(straight::START_RIGHT_TOP).y, piece.start.y);
        assert_relative_eq!(piece.corner(straight::FINISH_LEFT_TOP).y, piece.finish.y);
        assert_relative_eq!(piece.corner(straight::FINISH_RIGHT_BOTTOM).y, piece.finish.y - 5.0);
    }

    #[test]
    fn curve_midpoint_takes_the_average_elevation() {
        let pieces = projected(2);
        let piece = pieces
            .iter()
            .find(|p| matches!(p.kind, crate::piece::PieceKind::CurveLeft { .. }) && p.rise() > 0.1)
            .unwrap();
        let mid = (piece.start.y + piece.finish.y) / 2.0;
        assert_relative_eq!(piece.corner(curve_left::MID_RIGHT_TOP).y, mid, epsilon = 1e-12);
        assert_relative_eq!(piece.corner(curve_left::MID_RIGHT_BOTTOM).y, mid - 5.0, epsilon = 1e-12);
    }

    #[test]
    fn horizontal_coordinates_are_untouched() {
        let layout = catalog::select(1).unwrap();
        let before = SubdividePath::new(&layout).execute().unwrap();
        let after = projected(1);
        for (a, b) in before.pieces.iter().zip(&after) {
            for (p, q) in a.corners.as_slice().iter().zip(b.corners.as_slice()) {
                assert_relative_eq!(p.x, q.x);
                assert_relative_eq!(p.z, q.z);
            }
        }
    }
}
