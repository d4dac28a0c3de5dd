//! Layout descriptors: the validated input of the generation pipeline.

pub mod catalog;
mod characteristics;
mod horizon;
mod section;

pub use characteristics::{Characteristics, Color, LengthUnit};
pub use horizon::{FaceSpec, HorizonFaces, HorizonSpec, COLOR_MARKER};
pub use section::{Section, SectionSpan, Turn};

use crate::error::LayoutError;
use crate::math::planar::horizontal;
use crate::math::{Point3, Vector3, TOLERANCE};

/// Starting pose of the track path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Origin {
    /// Location of the first path point; its `y` is the starting elevation.
    pub location: Point3,
    /// Horizontal unit direction of travel at the first path point.
    pub direction: Vector3,
}

impl Origin {
    #[must_use]
    pub fn new(location: Point3, direction: Vector3) -> Self {
        Self {
            location,
            direction,
        }
    }
}

/// A complete, validated track layout.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutDescriptor {
    characteristics: Characteristics,
    origin: Origin,
    sections: Vec<Section>,
}

impl LayoutDescriptor {
    /// Creates a layout whose lengths are already in millimetres.
    ///
    /// # Errors
    ///
    /// See [`LayoutDescriptor::with_unit`].
    pub fn new(
        characteristics: Characteristics,
        origin: Origin,
        sections: Vec<Section>,
    ) -> Result<Self, LayoutError> {
        Self::with_unit(LengthUnit::Millimeters, characteristics, origin, sections)
    }

    /// Creates a layout authored in `unit`, converting every length to
    /// millimetres before validating.
    ///
    /// The origin direction is projected onto the horizontal plane and
    /// normalized.
    ///
    /// # Errors
    ///
    /// Returns a [`LayoutError`] if there are no sections, the origin direction
    /// has no horizontal component, or any dimension is invalid.
    pub fn with_unit(
        unit: LengthUnit,
        characteristics: Characteristics,
        origin: Origin,
        sections: Vec<Section>,
    ) -> Result<Self, LayoutError> {
        let factor = unit.to_millimeters();
        let characteristics = characteristics.scaled(factor);
        let sections: Vec<Section> = sections.into_iter().map(|s| s.scaled(factor)).collect();

        characteristics.validate()?;
        if sections.is_empty() {
            return Err(LayoutError::NoSections);
        }
        let half_width = characteristics.half_width();
        for (index, section) in sections.iter().enumerate() {
            section.validate(index, half_width)?;
        }

        let direction = horizontal(&origin.direction);
        let norm = direction.norm();
        if !norm.is_finite() || norm < TOLERANCE {
            return Err(LayoutError::ZeroDirection);
        }
        let location = origin.location * factor;
        if let Some(&value) = location.coords.iter().find(|c| !c.is_finite()) {
            return Err(LayoutError::InvalidParameter {
                parameter: "origin location",
                value,
            });
        }

        Ok(Self {
            characteristics,
            origin: Origin::new(location, direction / norm),
            sections,
        })
    }

    #[must_use]
    pub fn characteristics(&self) -> &Characteristics {
        &self.characteristics
    }

    #[must_use]
    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Sum of all section rises; zero for a layout that closes vertically.
    #[must_use]
    pub fn total_rise(&self) -> f64 {
        self.sections.iter().map(Section::rise).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn characteristics() -> Characteristics {
        Characteristics::new(
            20.0,
            5.0,
            10.0,
            5.0,
            Color(0x90_5020),
            HorizonSpec::parse(500.0, ["!ffffff"; 6]).unwrap(),
        )
    }

    fn origin() -> Origin {
        Origin::new(Point3::new(-150.0, 5.0, 50.0), Vector3::new(2.0, 0.0, 0.0))
    }

    #[test]
    fn direction_is_normalized() {
        let layout =
            LayoutDescriptor::new(characteristics(), origin(), vec![Section::straight(100.0, 0.0)])
                .unwrap();
        assert_relative_eq!(layout.origin().direction, Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn tilted_direction_is_flattened() {
        let o = Origin::new(Point3::origin(), Vector3::new(3.0, 7.0, 4.0));
        let layout =
            LayoutDescriptor::new(characteristics(), o, vec![Section::straight(100.0, 0.0)]).unwrap();
        assert_relative_eq!(layout.origin().direction, Vector3::new(0.6, 0.0, 0.8));
    }

    #[test]
    fn vertical_direction_is_rejected() {
        let o = Origin::new(Point3::origin(), Vector3::new(0.0, 1.0, 0.0));
        let result = LayoutDescriptor::new(characteristics(), o, vec![Section::straight(1.0, 0.0)]);
        assert_eq!(result, Err(LayoutError::ZeroDirection));
    }

    #[test]
    fn non_finite_origin_reports_the_offending_coordinate() {
        let o = Origin::new(Point3::new(1.0, f64::INFINITY, 2.0), Vector3::x());
        let result = LayoutDescriptor::new(characteristics(), o, vec![Section::straight(1.0, 0.0)]);
        assert_eq!(
            result,
            Err(LayoutError::InvalidParameter {
                parameter: "origin location",
                value: f64::INFINITY,
            })
        );
    }

    #[test]
    fn empty_layout_is_rejected() {
        let result = LayoutDescriptor::new(characteristics(), origin(), vec![]);
        assert_eq!(result, Err(LayoutError::NoSections));
    }

    #[test]
    fn inches_are_converted_once() {
        let layout = LayoutDescriptor::with_unit(
            LengthUnit::Inches,
            characteristics(),
            origin(),
            vec![Section::straight(10.0, 1.0)],
        )
        .unwrap();
        assert_relative_eq!(layout.characteristics().track_width, 508.0);
        assert_relative_eq!(layout.sections()[0].horizontal_length(), 254.0);
        assert_relative_eq!(layout.sections()[0].rise(), 25.4);
        assert_relative_eq!(layout.origin().location.y, 127.0);
    }

    #[test]
    fn total_rise_sums_sections() {
        let layout = LayoutDescriptor::new(
            characteristics(),
            origin(),
            vec![
                Section::straight(300.0, 20.0),
                Section::curve_left_degrees(50.0, 180.0, 5.0),
                Section::straight(300.0, -25.0),
            ],
        )
        .unwrap();
        assert_relative_eq!(layout.total_rise(), 0.0);
    }
}
