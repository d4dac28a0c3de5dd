//! The generation pipeline: subdivide, solve elevations, project corners,
//! compute centers, emit geometry.

mod center;
mod elevation;
mod emit;
mod project;
mod subdivide;

pub use center::ComputeCenters;
pub use elevation::{SolveElevations, DEFAULT_ITERATION_CAP};
pub use emit::EmitGeometry;
pub use project::ProjectVertices;
pub use subdivide::{SubdividePath, Subdivision};

use crate::error::Result;
use crate::layout::{LayoutDescriptor, SectionSpan};
use crate::mesh::PieceGeometry;
use crate::piece::Piece;

/// A fully generated track.
#[derive(Debug, Clone)]
pub struct Track {
    layout: LayoutDescriptor,
    spans: Vec<SectionSpan>,
    pieces: Vec<Piece>,
    geometry: Vec<PieceGeometry>,
}

impl Track {
    /// The layout this track was generated from.
    #[must_use]
    pub fn layout(&self) -> &LayoutDescriptor {
        &self.layout
    }

    /// Piece range of every section, in section order.
    #[must_use]
    pub fn spans(&self) -> &[SectionSpan] {
        &self.spans
    }

    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Emitted geometry, parallel to [`Track::pieces`].
    #[must_use]
    pub fn geometry(&self) -> &[PieceGeometry] {
        &self.geometry
    }

    /// Pieces of the section at `index`.
    #[must_use]
    pub fn section_pieces(&self, index: usize) -> &[Piece] {
        match self.spans.get(index) {
            Some(span) => &self.pieces[span.indices()],
            None => &[],
        }
    }
}

/// Runs the whole pipeline for one layout.
pub struct GenerateTrack<'a> {
    layout: &'a LayoutDescriptor,
    iteration_cap: usize,
}

impl<'a> GenerateTrack<'a> {
    /// Creates a new `GenerateTrack` operation.
    #[must_use]
    pub fn new(layout: &'a LayoutDescriptor) -> Self {
        Self {
            layout,
            iteration_cap: DEFAULT_ITERATION_CAP,
        }
    }

    /// Overrides the elevation solver's per-section step cap.
    #[must_use]
    pub fn with_iteration_cap(mut self, iteration_cap: usize) -> Self {
        self.iteration_cap = iteration_cap;
        self
    }

    /// Executes every stage in order. Nothing is returned unless all succeed.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any stage.
    pub fn execute(&self) -> Result<Track> {
        let characteristics = self.layout.characteristics();
        let thickness = characteristics.track_thickness;

        let Subdivision { mut pieces, spans } = {
            let mut subdivision = SubdividePath::new(self.layout).execute()?;
            SolveElevations::new(self.layout)
                .with_iteration_cap(self.iteration_cap)
                .execute(&mut subdivision)?;
            subdivision
        };
        ProjectVertices::new(thickness).execute(&mut pieces);
        ComputeCenters::new(thickness).execute(&mut pieces);
        let geometry = EmitGeometry::new(characteristics.color).execute(&pieces)?;

        Ok(Track {
            layout: self.layout.clone(),
            spans,
            pieces,
            geometry,
        })
    }
}
