// Core type definitions for the gamut conversion engine
//
// A "space" is one numeric representation of an underlying quantity.
// This crate defines the stable handle for a space, the descriptor record
// a space registers with, the collaborator trait every participating
// space implements, and the schema checks a descriptor must pass before
// it is trusted.

//-----------------------------------------------------------------------------
// Module Exports
//-----------------------------------------------------------------------------

pub mod descriptor;
pub mod id;
pub mod schema;
pub mod space;

//-----------------------------------------------------------------------------
// Type Re-exports
//-----------------------------------------------------------------------------

pub use descriptor::{ConvertHook, Descriptor, DescriptorSummary, SpaceConstructor};
pub use id::SpaceId;
pub use schema::{is_well_formed, validate};
pub use space::{BoxedSpace, Space};
