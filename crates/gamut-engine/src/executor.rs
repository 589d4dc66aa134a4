// Step executor: walks a resolved conversion path hop by hop
//
// Each hop is re-validated against live metadata before it runs, which is
// what surfaces stale cached paths and direct targets that were never
// registered. The destination's conversion hook, when present, always
// takes precedence over the positional constructor fallback.

use gamut_error::ConversionError;
use gamut_types::{BoxedSpace, Space, SpaceId};

use crate::registry::SpaceRegistry;
use tracing::trace;

/// Produce a new instance of the destination space representing the same
/// underlying quantity as `value`.
pub(crate) fn convert(
    registry: &SpaceRegistry,
    value: &dyn Space,
    destination: &SpaceId,
) -> Result<BoxedSpace, ConversionError> {
    let source = value.space_id();

    // Identity fast path: no store or resolver involvement
    if &source == destination {
        trace!(space = %source, "identity conversion");
        return Ok(value.rebuild());
    }

    // Both endpoints must be registered before any path is attempted
    if !registry.is_registered(&source) {
        return Err(ConversionError::NotRegistered(source.as_str().to_string()));
    }
    if !registry.is_registered(destination) {
        return Err(ConversionError::NotRegistered(
            destination.as_str().to_string(),
        ));
    }

    let path = registry.resolve_path(&source, destination)?;

    let mut current: BoxedSpace = value.rebuild();
    let mut current_name = source;
    for next_name in path.steps().iter().skip(1) {
        current = execute_hop(registry, current.as_ref(), &current_name, next_name)?;
        current_name = next_name.clone();
    }
    Ok(current)
}

/// Execute a single hop from `from` to `to`
fn execute_hop(
    registry: &SpaceRegistry,
    value: &dyn Space,
    from: &SpaceId,
    to: &SpaceId,
) -> Result<BoxedSpace, ConversionError> {
    // The hop must still be a declared direct target of its predecessor;
    // a cached path can outlive the metadata it was resolved against.
    let from_descriptor = registry
        .descriptor(from)
        .ok_or_else(|| ConversionError::UnregisteredStep(from.as_str().to_string()))?;
    if !from_descriptor.declares_target(to) {
        return Err(ConversionError::UndeclaredHop {
            from: from.as_str().to_string(),
            to: to.as_str().to_string(),
        });
    }

    // Direct targets may name spaces that were never registered
    let to_descriptor = registry
        .descriptor(to)
        .ok_or_else(|| ConversionError::UnregisteredStep(to.as_str().to_string()))?;

    let result = match to_descriptor.convert_hook {
        Some(hook) => {
            trace!(from = %from, to = %to, "executing conversion hook");
            hook(value)?
        }
        None => {
            trace!(from = %from, to = %to, "executing positional fallback");
            (to_descriptor.constructor)(&value.components())?
        }
    };
    Ok(result)
}
