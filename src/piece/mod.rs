//! Pieces: the small, bounded-length slices a layout is cut into.

pub mod corners;

pub use corners::{CornerLayout, Level, Side, Slot, Station, HULL_FACES};

use crate::math::planar::slope_angle;
use crate::math::{Point3, Vector3};

/// Shape of a piece; matches the section it was cut from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PieceKind {
    Straight { length: f64 },
    CurveLeft { radius: f64, sweep: f64 },
    CurveRight { radius: f64, sweep: f64 },
}

impl PieceKind {
    /// Horizontal length of the piece's centerline.
    #[must_use]
    pub fn horizontal_length(&self) -> f64 {
        match *self {
            Self::Straight { length } => length,
            Self::CurveLeft { radius, sweep } | Self::CurveRight { radius, sweep } => radius * sweep,
        }
    }

    /// Corner slots and index tables for this kind of piece.
    #[must_use]
    pub fn corner_layout(&self) -> &'static CornerLayout {
        match self {
            Self::Straight { .. } => &corners::straight::LAYOUT,
            Self::CurveLeft { .. } => &corners::curve_left::LAYOUT,
            Self::CurveRight { .. } => &corners::curve_right::LAYOUT,
        }
    }
}

/// Corner vertices of a piece, in world coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Corners {
    Straight([Point3; corners::straight::COUNT]),
    Curved([Point3; corners::curve_left::COUNT]),
}

impl Corners {
    #[must_use]
    pub fn as_slice(&self) -> &[Point3] {
        match self {
            Self::Straight(c) => c,
            Self::Curved(c) => c,
        }
    }

    pub fn as_mut_slice(&mut self) -> &mut [Point3] {
        match self {
            Self::Straight(c) => c,
            Self::Curved(c) => c,
        }
    }
}

/// One piece of track.
///
/// Path points lie on the centerline of the running surface. During
/// subdivision every `y` equals the origin elevation; the elevation solver and
/// vertex projector fill in the vertical coordinates later, and `center` stays
/// `None` until the center calculator has run.
#[derive(Debug, Clone, PartialEq)]
pub struct Piece {
    pub kind: PieceKind,
    pub start: Point3,
    pub start_direction: Vector3,
    pub finish: Point3,
    pub finish_direction: Vector3,
    pub corners: Corners,
    pub center: Option<Point3>,
}

impl Piece {
    #[must_use]
    pub fn horizontal_length(&self) -> f64 {
        self.kind.horizontal_length()
    }

    /// Elevation gained from start to finish.
    #[must_use]
    pub fn rise(&self) -> f64 {
        self.finish.y - self.start.y
    }

    /// Slope angle of the piece in radians.
    #[must_use]
    pub fn slope(&self) -> f64 {
        slope_angle(self.rise(), self.horizontal_length())
    }

    /// Corner at `index`.
    #[must_use]
    pub fn corner(&self, index: usize) -> Point3 {
        self.corners.as_slice()[index]
    }
}
