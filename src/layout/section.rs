use std::ops::RangeInclusive;

use crate::error::LayoutError;
use crate::math::planar::slope_angle;
use crate::math::PIECE_EPSILON;

/// Turning sense of a curve, viewed from above.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Counter-clockwise.
    Left,
    /// Clockwise.
    Right,
}

impl Turn {
    /// Sign of the rotation about `+Y` that this turn applies to directions.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Turn::Left => 1.0,
            Turn::Right => -1.0,
        }
    }
}

/// One authored segment of a track layout.
///
/// Lengths are in the internal length unit, `sweep` in radians. `rise` is the
/// elevation gained from the start of the section to its finish.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Section {
    Straight { length: f64, rise: f64 },
    CurveLeft { radius: f64, sweep: f64, rise: f64 },
    CurveRight { radius: f64, sweep: f64, rise: f64 },
}

impl Section {
    /// A straight run.
    #[must_use]
    pub fn straight(length: f64, rise: f64) -> Self {
        Self::Straight { length, rise }
    }

    /// A counter-clockwise curve with its sweep authored in degrees.
    #[must_use]
    pub fn curve_left_degrees(radius: f64, degrees: f64, rise: f64) -> Self {
        Self::CurveLeft {
            radius,
            sweep: degrees.to_radians(),
            rise,
        }
    }

    /// A clockwise curve with its sweep authored in degrees.
    #[must_use]
    pub fn curve_right_degrees(radius: f64, degrees: f64, rise: f64) -> Self {
        Self::CurveRight {
            radius,
            sweep: degrees.to_radians(),
            rise,
        }
    }

    /// Elevation change over the section.
    #[must_use]
    pub fn rise(&self) -> f64 {
        match *self {
            Self::Straight { rise, .. }
            | Self::CurveLeft { rise, .. }
            | Self::CurveRight { rise, .. } => rise,
        }
    }

    /// Length of the section's centerline projected onto the horizontal plane.
    #[must_use]
    pub fn horizontal_length(&self) -> f64 {
        match *self {
            Self::Straight { length, .. } => length,
            Self::CurveLeft { radius, sweep, .. } | Self::CurveRight { radius, sweep, .. } => {
                radius * sweep
            }
        }
    }

    /// Raw slope angle (radians) of the section taken as a single ramp.
    #[must_use]
    pub fn slope(&self) -> f64 {
        slope_angle(self.rise(), self.horizontal_length())
    }

    pub(crate) fn scaled(self, factor: f64) -> Self {
        match self {
            Self::Straight { length, rise } => Self::Straight {
                length: length * factor,
                rise: rise * factor,
            },
            Self::CurveLeft { radius, sweep, rise } => Self::CurveLeft {
                radius: radius * factor,
                sweep,
                rise: rise * factor,
            },
            Self::CurveRight { radius, sweep, rise } => Self::CurveRight {
                radius: radius * factor,
                sweep,
                rise: rise * factor,
            },
        }
    }

    /// Checks the section against the track's half width.
    pub(crate) fn validate(&self, index: usize, half_width: f64) -> Result<(), LayoutError> {
        let rise = self.rise();
        if !rise.is_finite() {
            return Err(LayoutError::InvalidParameter {
                parameter: "rise",
                value: rise,
            });
        }
        match *self {
            Self::Straight { length, .. } => {
                if !length.is_finite() || length <= 0.0 {
                    return Err(LayoutError::InvalidParameter {
                        parameter: "length",
                        value: length,
                    });
                }
                if length <= PIECE_EPSILON {
                    return Err(LayoutError::EmptySection { section: index });
                }
            }
            Self::CurveLeft { radius, sweep, .. } | Self::CurveRight { radius, sweep, .. } => {
                if !radius.is_finite() || radius <= half_width {
                    return Err(LayoutError::InvalidParameter {
                        parameter: "radius",
                        value: radius,
                    });
                }
                if !sweep.is_finite() || sweep <= 0.0 {
                    return Err(LayoutError::InvalidParameter {
                        parameter: "sweep",
                        value: sweep,
                    });
                }
                if sweep <= PIECE_EPSILON {
                    return Err(LayoutError::EmptySection { section: index });
                }
            }
        }
        Ok(())
    }
}

/// Inclusive range of piece indices generated from one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    /// Index of the first piece of the section.
    pub begin: usize,
    /// Index of the last piece of the section.
    pub end: usize,
}

impl SectionSpan {
    /// Number of pieces in the section.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.begin + 1
    }

    /// Always `false`; a span covers at least one piece.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The piece indices covered by the span.
    #[must_use]
    pub fn indices(&self) -> RangeInclusive<usize> {
        self.begin..=self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn curve_length_is_radius_times_sweep() {
        let s = Section::curve_left_degrees(50.0, 180.0, 0.0);
        assert_relative_eq!(s.horizontal_length(), 50.0 * PI);
    }

    #[test]
    fn slope_uses_horizontal_length() {
        let s = Section::straight(300.0, 60.0);
        assert_relative_eq!(s.slope(), (0.2_f64).atan());
    }

    #[test]
    fn scaling_leaves_sweep_alone() {
        let s = Section::curve_right_degrees(2.0, 90.0, 1.0).scaled(25.4);
        let Section::CurveRight { radius, sweep, rise } = s else {
            panic!("variant changed");
        };
        assert_relative_eq!(radius, 50.8);
        assert_relative_eq!(sweep, PI / 2.0);
        assert_relative_eq!(rise, 25.4);
    }

    #[test]
    fn radius_inside_half_width_is_rejected() {
        let s = Section::curve_left_degrees(10.0, 90.0, 0.0);
        assert_eq!(
            s.validate(0, 10.0),
            Err(LayoutError::InvalidParameter {
                parameter: "radius",
                value: 10.0
            })
        );
    }

    #[test]
    fn vanishing_straight_is_an_empty_section() {
        let s = Section::straight(0.0005, 0.0);
        assert_eq!(s.validate(3, 10.0), Err(LayoutError::EmptySection { section: 3 }));
    }

    #[test]
    fn negative_length_is_rejected() {
        assert!(Section::straight(-5.0, 0.0).validate(0, 10.0).is_err());
        assert!(Section::straight(f64::NAN, 0.0).validate(0, 10.0).is_err());
    }

    #[test]
    fn span_length_is_inclusive() {
        let span = SectionSpan { begin: 30, end: 45 };
        assert_eq!(span.len(), 16);
        assert_eq!(span.indices().count(), 16);
    }
}
