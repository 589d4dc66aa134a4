// Gamut conversion engine
//
// A generic registry-and-dispatch engine for converting between numeric
// representation spaces: a descriptor store, a directed graph of declared
// one-hop conversions, a breadth-first path resolver with memoization, and
// a step executor that invokes either a type-specific conversion hook or a
// positional constructor fallback.
//
// The engine validates structural reachability and registration integrity
// only; numeric correctness of the individual conversions belongs to the
// collaborating space types.

//-----------------------------------------------------------------------------
// Module Exports
//-----------------------------------------------------------------------------

mod executor;
pub mod graph;
pub mod path;
pub mod registry;

//-----------------------------------------------------------------------------
// Type Re-exports
//-----------------------------------------------------------------------------

pub use graph::ConversionGraph;
pub use path::ConversionPath;
pub use registry::SpaceRegistry;

// Re-export the boundary types callers need alongside the registry
pub use gamut_error::{
    ConversionError, GamutError, NotFoundError, RegistrationError, SchemaError,
};
pub use gamut_types::{
    BoxedSpace, ConvertHook, Descriptor, DescriptorSummary, Space, SpaceConstructor, SpaceId,
};
