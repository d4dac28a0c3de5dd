//! The box of six faces that surrounds a track.

use crate::layout::{Characteristics, FaceSpec};
use crate::math::{Point3, Vector3};

/// Which wall of the horizon box a face is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacePosition {
    West,
    East,
    Sky,
    Ground,
    North,
    South,
}

impl FacePosition {
    /// All positions in authored order.
    pub const ALL: [Self; 6] = [
        Self::West,
        Self::East,
        Self::Sky,
        Self::Ground,
        Self::North,
        Self::South,
    ];

    /// Unit vector from the box center toward this wall.
    #[must_use]
    pub fn outward(self) -> Vector3 {
        match self {
            Self::West => Vector3::x(),
            Self::East => -Vector3::x(),
            Self::Sky => Vector3::y(),
            Self::Ground => -Vector3::y(),
            Self::North => Vector3::z(),
            Self::South => -Vector3::z(),
        }
    }

    /// Corner indices of this wall, counter-clockwise seen from inside the box.
    #[must_use]
    pub fn quad(self) -> [u32; 4] {
        match self {
            Self::West => [1, 5, 7, 3],
            Self::East => [0, 2, 6, 4],
            Self::Sky => [2, 3, 7, 6],
            Self::Ground => [0, 4, 5, 1],
            Self::North => [4, 6, 7, 5],
            Self::South => [0, 1, 3, 2],
        }
    }
}

/// One wall of the horizon box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HorizonFace {
    pub position: FacePosition,
    pub spec: FaceSpec,
    /// Indices into [`HorizonBox::corners`].
    pub quad: [u32; 4],
}

/// An axis-aligned cube viewed from inside.
#[derive(Debug, Clone, PartialEq)]
pub struct HorizonBox {
    pub center: Point3,
    pub half_extent: f64,
    pub faces: [HorizonFace; 6],
}

impl HorizonBox {
    /// The 8 corners. Bits 0, 1 and 2 of the index select the positive
    /// `x`, `y` and `z` side respectively.
    #[must_use]
    pub fn corners(&self) -> [Point3; 8] {
        std::array::from_fn(|i| {
            let side = |bit: usize| if i & (1 << bit) == 0 { -1.0 } else { 1.0 };
            self.center + Vector3::new(side(0), side(1), side(2)) * self.half_extent
        })
    }

    /// The face at `position`.
    #[must_use]
    pub fn face(&self, position: FacePosition) -> &HorizonFace {
        // Faces are stored in `FacePosition::ALL` order.
        &self.faces[position as usize]
    }

    /// Whether `point` lies strictly inside the box.
    #[must_use]
    pub fn contains(&self, point: &Point3) -> bool {
        (*point - self.center).amax() < self.half_extent
    }
}

/// Builds the horizon box for a layout.
pub struct MakeHorizon<'a> {
    characteristics: &'a Characteristics,
}

impl<'a> MakeHorizon<'a> {
    /// Creates a new `MakeHorizon` operation.
    #[must_use]
    pub fn new(characteristics: &'a Characteristics) -> Self {
        Self { characteristics }
    }

    /// Executes the operation. The floor of the box sits one track thickness
    /// below the ground plane.
    #[must_use]
    pub fn execute(&self) -> HorizonBox {
        let horizon = &self.characteristics.horizon;
        let distance = horizon.distance;
        let specs = &horizon.faces;
        let spec = |position: FacePosition| match position {
            FacePosition::West => specs.west.clone(),
            FacePosition::East => specs.east.clone(),
            FacePosition::Sky => specs.sky.clone(),
            FacePosition::Ground => specs.ground.clone(),
            FacePosition::North => specs.north.clone(),
            FacePosition::South => specs.south.clone(),
        };

        HorizonBox {
            center: Point3::new(0.0, distance - self.characteristics.track_thickness, 0.0),
            half_extent: distance,
            faces: FacePosition::ALL.map(|position| HorizonFace {
                position,
                spec: spec(position),
                quad: position.quad(),
            }),
        }
    }
}
