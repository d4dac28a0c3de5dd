pub mod error;
pub mod horizon;
pub mod host;
pub mod layout;
pub mod math;
pub mod mesh;
pub mod piece;
pub mod pipeline;

pub use error::{Result, TrackError};
pub use layout::LayoutDescriptor;
pub use pipeline::{GenerateTrack, Track};
