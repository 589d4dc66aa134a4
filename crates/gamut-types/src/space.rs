// Collaborator trait for representation spaces

use std::any::Any;
use std::fmt::Debug;

use crate::id::SpaceId;

/// Boxed trait object for a space instance
pub type BoxedSpace = Box<dyn Space>;

/// Contract a representation space satisfies to participate in the engine.
///
/// A space instance is an opaque value holding a fixed-length ordered
/// numeric vector. The engine never retains instances beyond a single
/// convert call; lifecycle is owned by the space type itself.
pub trait Space: Debug + Send + Sync {
    /// Runtime tag of this instance's space
    fn space_id(&self) -> SpaceId;

    /// Export the instance's state as an ordered numeric vector
    fn components(&self) -> Vec<f64>;

    /// Construct a fresh instance from this instance's own vector.
    ///
    /// Serves the identity fast path: always succeeds for a self-consistent
    /// instance, always returns an object distinct from `self`, and needs
    /// no descriptor store lookup.
    fn rebuild(&self) -> BoxedSpace;

    /// Downcast seam for conversion hooks that want the concrete
    /// predecessor type rather than its exported vector.
    fn as_any(&self) -> &dyn Any;
}
