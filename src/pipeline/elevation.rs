use crate::error::{ElevationError, Result};
use crate::layout::{LayoutDescriptor, Section};
use crate::math::planar::slope_angle;
use crate::piece::Piece;

use super::Subdivision;

/// Default bound on relaxation steps per section.
pub const DEFAULT_ITERATION_CAP: usize = 500;

/// Sections with fewer pieces cannot pin both seams and keep a center gap.
const MIN_SMOOTHED_PIECES: usize = 3;

/// Assigns elevations to every piece boundary.
///
/// Each section climbs exactly its declared rise. A sloped section whose
/// overall slope is close enough to the slope shared with each neighbor is a
/// single linear ramp. Otherwise every end that is too far off is pinned to
/// the shared seam slope and then steps toward the slope of the remaining
/// center gap one increment per piece until the gap can be ramped. The
/// section list is treated as cyclic when looking up neighbors.
pub struct SolveElevations<'a> {
    sections: &'a [Section],
    origin_elevation: f64,
    slope_increment: f64,
    iteration_cap: usize,
}

impl<'a> SolveElevations<'a> {
    /// Creates a new `SolveElevations` operation.
    #[must_use]
    pub fn new(layout: &'a LayoutDescriptor) -> Self {
        Self {
            sections: layout.sections(),
            origin_elevation: layout.origin().location.y,
            slope_increment: layout.characteristics().slope_increment,
            iteration_cap: DEFAULT_ITERATION_CAP,
        }
    }

    /// Overrides the per-section relaxation step cap.
    #[must_use]
    pub fn with_iteration_cap(mut self, iteration_cap: usize) -> Self {
        self.iteration_cap = iteration_cap;
        self
    }

    /// Executes the solver, writing the `y` of every piece's start and finish.
    ///
    /// # Errors
    ///
    /// Returns [`ElevationError::IterationCapExceeded`] or
    /// [`ElevationError::GapExhausted`] if a section's rise cannot be smoothed
    /// within the configured increment.
    pub fn execute(&self, subdivision: &mut Subdivision) -> Result<()> {
        let count = self.sections.len();
        let mut start_elevation = self.origin_elevation;

        for (index, (section, span)) in self.sections.iter().zip(&subdivision.spans).enumerate() {
            let pieces = &mut subdivision.pieces[span.indices()];
            let end_elevation = start_elevation + section.rise();

            #[allow(clippy::float_cmp)]
            let flat = section.rise() == 0.0;
            if flat {
                for piece in pieces.iter_mut() {
                    piece.start.y = start_elevation;
                    piece.finish.y = start_elevation;
                }
            } else {
                let previous = &self.sections[(index + count - 1) % count];
                let next = &self.sections[(index + 1) % count];
                let start = self.seam_end(previous, section, previous);
                let end = self.seam_end(section, next, next);

                let lengths: Vec<f64> = pieces.iter().map(Piece::horizontal_length).collect();
                let profile = self.relax(index, &lengths, start_elevation, end_elevation, start, end)?;
                for (k, piece) in pieces.iter_mut().enumerate() {
                    piece.start.y = profile[k];
                    piece.finish.y = profile[k + 1];
                }
            }

            start_elevation = end_elevation;
        }

        tracing::debug!(
            sections = count,
            final_elevation = start_elevation,
            "solved elevations"
        );
        Ok(())
    }

    /// Slope two adjacent sections share at their seam: level when either side
    /// is effectively flat, otherwise the mean of both raw slopes.
    fn seam_slope(&self, before: &Section, after: &Section) -> f64 {
        let (a, b) = (before.slope(), after.slope());
        if a.abs() < self.slope_increment || b.abs() < self.slope_increment {
            0.0
        } else {
            (a + b) / 2.0
        }
    }

    /// One end of a sloped section at its seam with `neighbor`.
    ///
    /// An end piece may stay unpinned within a full increment of a level
    /// neighbor, but only within half an increment of a sloped one, whose own
    /// end piece may be unpinned too.
    fn seam_end(&self, before: &Section, after: &Section, neighbor: &Section) -> SectionEnd {
        #[allow(clippy::float_cmp)]
        let level = neighbor.rise() == 0.0;
        SectionEnd {
            slope: self.seam_slope(before, after),
            tolerance: if level {
                self.slope_increment
            } else {
                self.slope_increment / 2.0
            },
            pinned: false,
        }
    }

    /// Returns the elevation of every piece boundary of one section
    /// (`lengths.len() + 1` values).
    fn relax(
        &self,
        section: usize,
        lengths: &[f64],
        start_elevation: f64,
        end_elevation: f64,
        mut start: SectionEnd,
        mut end: SectionEnd,
    ) -> std::result::Result<Vec<f64>, ElevationError> {
        let n = lengths.len();
        let mut profile = vec![start_elevation; n + 1];
        profile[n] = end_elevation;

        if n < MIN_SMOOTHED_PIECES {
            tracing::warn!(section, pieces = n, "section too short to smooth; ramping linearly");
            ramp(&mut profile, lengths, 0, n);
            return Ok(profile);
        }

        let increment = self.slope_increment;

        // The center gap is pieces `front..back`.
        let mut front = 0;
        let mut back = n;

        let mut iterations = 0;
        loop {
            let gap_length: f64 = lengths[front..back].iter().sum();
            let gap_slope = slope_angle(profile[back] - profile[front], gap_length);
            let front_off = start.is_off(gap_slope, increment);
            let back_off = end.is_off(gap_slope, increment);
            if !front_off && !back_off {
                break;
            }

            // Only nudges count toward the cap, not the first pin at a seam.
            if (front_off && start.pinned) || (back_off && end.pinned) {
                if iterations == self.iteration_cap {
                    return Err(ElevationError::IterationCapExceeded {
                        section,
                        cap: self.iteration_cap,
                    });
                }
                iterations += 1;
            }

            if front_off {
                if back - front < 2 {
                    return Err(ElevationError::GapExhausted { section });
                }
                start.advance(gap_slope, increment);
                commit_front(&mut profile, lengths, &mut front, start.slope);
            }
            if back_off {
                if back - front < 2 {
                    return Err(ElevationError::GapExhausted { section });
                }
                end.advance(gap_slope, increment);
                commit_back(&mut profile, lengths, &mut back, end.slope);
            }
        }

        tracing::trace!(section, iterations, bent = n - (back - front), "relaxed section");
        ramp(&mut profile, lengths, front, back);
        Ok(profile)
    }
}

/// Slope state of one end of the center gap.
#[derive(Debug, Clone, Copy)]
struct SectionEnd {
    /// Slope of the last piece committed at this end, or the seam slope
    /// before anything is committed.
    slope: f64,
    /// Allowed distance from the gap slope while nothing is committed.
    tolerance: f64,
    pinned: bool,
}

impl SectionEnd {
    fn is_off(&self, gap_slope: f64, increment: f64) -> bool {
        let allowed = if self.pinned { increment } else { self.tolerance };
        (gap_slope - self.slope).abs() >= allowed
    }

    /// Pins the end piece at the seam slope, or nudges once it is pinned.
    fn advance(&mut self, gap_slope: f64, increment: f64) {
        if self.pinned {
            self.slope = step_toward(self.slope, gap_slope, increment);
        }
        self.pinned = true;
    }
}

fn step_toward(slope: f64, target: f64, increment: f64) -> f64 {
    slope + increment.copysign(target - slope)
}

/// Fixes piece `front` at `slope` and moves the gap's front edge past it.
fn commit_front(profile: &mut [f64], lengths: &[f64], front: &mut usize, slope: f64) {
    profile[*front + 1] = profile[*front] + lengths[*front] * slope.tan();
    *front += 1;
}

/// Fixes piece `back - 1` at `slope` and moves the gap's back edge before it.
fn commit_back(profile: &mut [f64], lengths: &[f64], back: &mut usize, slope: f64) {
    profile[*back - 1] = profile[*back] - lengths[*back - 1] * slope.tan();
    *back -= 1;
}

/// Fills boundaries strictly between `front` and `back` with a constant-slope
/// ramp; both end elevations are left untouched.
fn ramp(profile: &mut [f64], lengths: &[f64], front: usize, back: usize) {
    let total: f64 = lengths[front..back].iter().sum();
    let rise = profile[back] - profile[front];
    let base = profile[front];
    let mut travelled = 0.0;
    for k in front..back.saturating_sub(1) {
        travelled += lengths[k];
        profile[k + 1] = base + rise * travelled / total;
    }
}
