use serde::{Deserialize, Serialize};

/// A reconstructed 3D detector hit, the node unit of the pipeline.
///
/// Implement this for caller-owned containers so the pipeline can read
/// positions without copying. The identifier is opaque: it is only cloned
/// into the output track candidates.
pub trait SpacePoint {
    type Id: Clone;

    /// Global position (x, y, z) in mm.
    fn position(&self) -> [f32; 3];

    /// Identifier reported in track candidates.
    fn id(&self) -> Self::Id;
}

/// Plain spacepoint record as read from CSV, YAML or JSON files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawSpacePoint {
    pub id: u64,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl SpacePoint for RawSpacePoint {
    type Id = u64;

    fn position(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    fn id(&self) -> u64 {
        self.id
    }
}

impl<T: SpacePoint + ?Sized> SpacePoint for &T {
    type Id = T::Id;

    fn position(&self) -> [f32; 3] {
        (**self).position()
    }

    fn id(&self) -> Self::Id {
        (**self).id()
    }
}
