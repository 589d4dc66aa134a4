// Schema validation for descriptor records
//
// Used both at registration and defensively at retrieval, so a record
// that was corrupted after admission is still caught before it is
// trusted.

use gamut_error::{SchemaError, SchemaResult};

use crate::descriptor::Descriptor;

/// Check that a descriptor record is well-formed.
///
/// Field presence and constructor callability are guaranteed statically;
/// the value-level constraints checked here are a non-blank name, a
/// non-empty description, and non-blank direct-target entries.
pub fn validate(descriptor: &Descriptor) -> SchemaResult<()> {
    if descriptor.name.as_str().trim().is_empty() {
        return Err(SchemaError::EmptyName);
    }
    if descriptor.description.trim().is_empty() {
        return Err(SchemaError::EmptyDescription(
            descriptor.name.as_str().to_string(),
        ));
    }
    for target in &descriptor.direct_targets {
        if target.as_str().trim().is_empty() {
            return Err(SchemaError::EmptyTarget(
                descriptor.name.as_str().to_string(),
            ));
        }
    }
    Ok(())
}

/// Non-throwing twin of [`validate`] for callers that prefer conditional
/// flow over propagated failures.
pub fn is_well_formed(descriptor: &Descriptor) -> bool {
    validate(descriptor).is_ok()
}
