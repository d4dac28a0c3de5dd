use crate::error::LayoutError;

use super::Color;

/// Prefix marking a face spec as a solid color instead of an image name.
pub const COLOR_MARKER: char = '!';

/// Appearance of one horizon face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FaceSpec {
    /// A named image resource, resolved by the rendering collaborator.
    Image(String),
    /// A solid color.
    Color(Color),
}

impl FaceSpec {
    /// Parses an authored face spec: `"!rrggbb"` is a solid color, anything
    /// else names an image.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidFaceSpec`] for an empty spec or a
    /// malformed color.
    pub fn parse(spec: &str) -> Result<Self, LayoutError> {
        let spec = spec.trim();
        if spec.is_empty() {
            return Err(LayoutError::InvalidFaceSpec("empty face spec".into()));
        }
        match spec.strip_prefix(COLOR_MARKER) {
            Some(hex) => Ok(Self::Color(Color::from_hex(hex)?)),
            None => Ok(Self::Image(spec.to_owned())),
        }
    }
}

/// The six horizon faces, in west, east, sky, ground, north, south order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HorizonFaces {
    pub west: FaceSpec,
    pub east: FaceSpec,
    pub sky: FaceSpec,
    pub ground: FaceSpec,
    pub north: FaceSpec,
    pub south: FaceSpec,
}

/// Horizon parameters carried by the layout characteristics.
#[derive(Debug, Clone, PartialEq)]
pub struct HorizonSpec {
    /// Distance from the world origin to each horizon wall.
    pub distance: f64,
    pub faces: HorizonFaces,
}

impl HorizonSpec {
    /// Builds a horizon spec from authored face strings in west, east, sky,
    /// ground, north, south order.
    ///
    /// # Errors
    ///
    /// Returns an error if the distance is not positive or any face spec is
    /// malformed.
    pub fn parse(distance: f64, faces: [&str; 6]) -> Result<Self, LayoutError> {
        if !distance.is_finite() || distance <= 0.0 {
            return Err(LayoutError::InvalidParameter {
                parameter: "horizon distance",
                value: distance,
            });
        }
        let [west, east, sky, ground, north, south] = faces;
        Ok(Self {
            distance,
            faces: HorizonFaces {
                west: FaceSpec::parse(west)?,
                east: FaceSpec::parse(east)?,
                sky: FaceSpec::parse(sky)?,
                ground: FaceSpec::parse(ground)?,
                north: FaceSpec::parse(north)?,
                south: FaceSpec::parse(south)?,
            },
        })
    }
}
