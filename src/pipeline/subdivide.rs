use std::f64::consts::FRAC_PI_2;
use std::iter;

use crate::error::{LayoutError, Result};
use crate::layout::{LayoutDescriptor, Section, SectionSpan, Turn};
use crate::math::planar::{leftward, rightward, rotate_about_vertical};
use crate::math::{Point3, Vector3, PIECE_EPSILON};
use crate::piece::corners::{curve_left, curve_right, straight};
use crate::piece::{Corners, Piece, PieceKind, Side, Slot, Station};

/// Pieces cut from a layout, with the piece range of every section.
#[derive(Debug, Clone, Default)]
pub struct Subdivision {
    pub pieces: Vec<Piece>,
    /// One span per section, in section order.
    pub spans: Vec<SectionSpan>,
}

/// Finish pose of the previous piece; where the next piece starts.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    point: Point3,
    direction: Vector3,
}

/// Cuts a layout's sections into pieces of at most the target piece length.
///
/// Works in the horizontal plane only: every point keeps the origin's
/// elevation.
pub struct SubdividePath<'a> {
    layout: &'a LayoutDescriptor,
}

impl<'a> SubdividePath<'a> {
    /// Creates a new `SubdividePath` operation.
    #[must_use]
    pub fn new(layout: &'a LayoutDescriptor) -> Self {
        Self { layout }
    }

    /// Executes the subdivision.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::EmptySection`] if a section yields no pieces.
    pub fn execute(&self) -> Result<Subdivision> {
        let origin = self.layout.origin();
        let mut cursor = Cursor {
            point: origin.location,
            direction: origin.direction,
        };
        let mut subdivision = Subdivision::default();

        for (index, section) in self.layout.sections().iter().enumerate() {
            let begin = subdivision.pieces.len();
            match *section {
                Section::Straight { length, .. } => {
                    self.cut_straight(length, &mut cursor, &mut subdivision.pieces);
                }
                Section::CurveLeft { radius, sweep, .. } => {
                    self.cut_curve(Turn::Left, radius, sweep, &mut cursor, &mut subdivision.pieces);
                }
                Section::CurveRight { radius, sweep, .. } => {
                    self.cut_curve(Turn::Right, radius, sweep, &mut cursor, &mut subdivision.pieces);
                }
            }
            if subdivision.pieces.len() == begin {
                return Err(LayoutError::EmptySection { section: index }.into());
            }
            subdivision.spans.push(SectionSpan {
                begin,
                end: subdivision.pieces.len() - 1,
            });
        }

        tracing::debug!(
            sections = subdivision.spans.len(),
            pieces = subdivision.pieces.len(),
            "subdivided layout"
        );
        Ok(subdivision)
    }

    fn cut_straight(&self, length: f64, cursor: &mut Cursor, pieces: &mut Vec<Piece>) {
        for piece_length in piece_sizes(length, self.layout.characteristics().piece_length) {
            let piece = self.straight_piece(cursor, piece_length);
            cursor.point = piece.finish;
            cursor.direction = piece.finish_direction;
            pieces.push(piece);
        }
    }

    fn cut_curve(
        &self,
        turn: Turn,
        radius: f64,
        sweep: f64,
        cursor: &mut Cursor,
        pieces: &mut Vec<Piece>,
    ) {
        // Constant arclength per piece, whatever the radius.
        let piece_sweep = self.layout.characteristics().piece_length / radius;
        for sweep in piece_sizes(sweep, piece_sweep) {
            let piece = self.curve_piece(cursor, turn, radius, sweep);
            cursor.point = piece.finish;
            cursor.direction = piece.finish_direction;
            pieces.push(piece);
        }
    }

    fn straight_piece(&self, cursor: &Cursor, length: f64) -> Piece {
        let half_width = self.layout.characteristics().half_width();
        let direction = cursor.direction;
        let start = cursor.point;
        let finish = start + direction * length;
        let left = leftward(&direction) * half_width;
        let right = rightward(&direction) * half_width;

        let corner = |s: &Slot| {
            let path = match s.station {
                Station::Start | Station::Mid => start,
                Station::Finish => finish,
            };
            match s.side {
                Side::Left => path + left,
                Side::Right => path + right,
            }
        };
        let slots = straight::LAYOUT.slots;

        Piece {
            kind: PieceKind::Straight { length },
            start,
            start_direction: direction,
            finish,
            finish_direction: direction,
            corners: Corners::Straight(std::array::from_fn(|i| corner(&slots[i]))),
            center: None,
        }
    }

    fn curve_piece(&self, cursor: &Cursor, turn: Turn, radius: f64, sweep: f64) -> Piece {
        let half_width = self.layout.characteristics().half_width();
        let sign = turn.sign();
        let start = cursor.point;
        let start_direction = cursor.direction;

        let inward = rotate_about_vertical(&start_direction, sign * FRAC_PI_2).normalize();
        let center = start + inward * radius;

        let start_spoke = -inward;
        let mid_spoke = rotate_about_vertical(&start_spoke, sign * sweep / 2.0);
        let finish_spoke = rotate_about_vertical(&start_spoke, sign * sweep);

        let finish = center + finish_spoke * radius;
        let finish_direction = rotate_about_vertical(&start_direction, sign * sweep);

        let inner = radius - half_width;
        let outer = radius + half_width;
        // The right wall is the inner wall of a clockwise turn.
        let (right_radius, left_radius) = match turn {
            Turn::Left => (outer, inner),
            Turn::Right => (inner, outer),
        };

        let corner = |s: &Slot| {
            let side_radius = match s.side {
                Side::Left => left_radius,
                Side::Right => right_radius,
            };
            match s.station {
                Station::Start => center + start_spoke * side_radius,
                Station::Finish => center + finish_spoke * side_radius,
                // On the chord between the outer start and finish corners.
                Station::Mid => center + mid_spoke * ((sweep / 2.0).cos() * side_radius),
            }
        };

        let (kind, slots) = match turn {
            Turn::Left => (PieceKind::CurveLeft { radius, sweep }, curve_left::LAYOUT.slots),
            Turn::Right => (PieceKind::CurveRight { radius, sweep }, curve_right::LAYOUT.slots),
        };

        Piece {
            kind,
            start,
            start_direction,
            finish,
            finish_direction,
            corners: Corners::Curved(std::array::from_fn(|i| corner(&slots[i]))),
            center: None,
        }
    }
}

/// Splits `total` into full `step`-sized parts plus the remainder, dropping a
/// remainder at or below [`PIECE_EPSILON`].
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn piece_sizes(total: f64, step: f64) -> impl Iterator<Item = f64> {
    let full = (total / step).floor() as usize;
    let remainder = total - full as f64 * step;
    iter::repeat(step)
        .take(full)
        .chain(iter::once(remainder))
        .filter(|&size| size > PIECE_EPSILON)
}
