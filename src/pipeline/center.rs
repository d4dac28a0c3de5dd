use nalgebra::center;

use crate::piece::Piece;

/// Places each piece's reference center halfway between its path endpoints,
/// half a thickness below the running surface.
pub struct ComputeCenters {
    thickness: f64,
}

impl ComputeCenters {
    /// Creates a new `ComputeCenters` operation.
    #[must_use]
    pub fn new(thickness: f64) -> Self {
        Self { thickness }
    }

    /// Executes the calculation, filling `center` on every piece.
    pub fn execute(&self, pieces: &mut [Piece]) {
        for piece in pieces.iter_mut() {
            let mut c = center(&piece.start, &piece.finish);
            c.y -= self.thickness / 2.0;
            piece.center = Some(c);
        }
    }
}
