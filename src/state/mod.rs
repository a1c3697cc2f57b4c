pub mod pointers;
pub mod snapshot;
pub mod transform;

pub use pointers::{Contact, PointerSet};
pub use snapshot::{FarPair, ReferenceSnapshot};
pub use transform::TransformState;
