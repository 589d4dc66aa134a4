// Descriptor records for the space registry

use std::fmt;

use serde::{Deserialize, Serialize};

use gamut_error::ConversionError;

use crate::id::SpaceId;
use crate::space::{BoxedSpace, Space};

/// Positional constructor: builds an instance of the described space from
/// an ordered numeric vector. This is the "self-reference" of the record
/// and the fallback conversion path.
pub type SpaceConstructor = fn(&[f64]) -> Result<BoxedSpace, ConversionError>;

/// Type-specific conversion hook: accepts an instance of a declared
/// predecessor space and returns an instance of the described space.
/// When present it always takes precedence over the positional fallback.
pub type ConvertHook = fn(&dyn Space) -> Result<BoxedSpace, ConversionError>;

/// Registration record for one representation space.
///
/// `direct_targets` is the ordered list of names reachable in one declared
/// hop. Targets may reference names not yet (or never) registered; that is
/// legal at registration time and fails lazily at execution time.
#[derive(Clone)]
pub struct Descriptor {
    /// Unique, non-empty space name
    pub name: SpaceId,
    /// Human-readable description
    pub description: String,
    /// Positional constructor for the space
    pub constructor: SpaceConstructor,
    /// Declared one-hop conversion targets, in discovery order
    pub direct_targets: Vec<SpaceId>,
    /// Optional hook converting a predecessor instance into this space
    pub convert_hook: Option<ConvertHook>,
}

impl Descriptor {
    /// Create a descriptor with no targets and no hook
    pub fn new(
        name: impl Into<SpaceId>,
        description: impl Into<String>,
        constructor: SpaceConstructor,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            constructor,
            direct_targets: Vec::new(),
            convert_hook: None,
        }
    }

    /// Append one direct target
    pub fn with_target(mut self, target: impl Into<SpaceId>) -> Self {
        self.direct_targets.push(target.into());
        self
    }

    /// Append direct targets in order
    pub fn with_targets<I, T>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<SpaceId>,
    {
        self.direct_targets.extend(targets.into_iter().map(Into::into));
        self
    }

    /// Set the conversion hook
    pub fn with_hook(mut self, hook: ConvertHook) -> Self {
        self.convert_hook = Some(hook);
        self
    }

    /// Whether `target` is a declared one-hop edge of this space
    pub fn declares_target(&self, target: &SpaceId) -> bool {
        self.direct_targets.contains(target)
    }

    /// Serializable snapshot of this record
    pub fn summary(&self) -> DescriptorSummary {
        DescriptorSummary {
            name: self.name.clone(),
            description: self.description.clone(),
            direct_targets: self.direct_targets.clone(),
            has_hook: self.convert_hook.is_some(),
        }
    }
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descriptor")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("direct_targets", &self.direct_targets)
            .field("has_hook", &self.convert_hook.is_some())
            .finish()
    }
}

/// Serializable view of a descriptor (function pointers elided)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptorSummary {
    pub name: SpaceId,
    pub description: String,
    pub direct_targets: Vec<SpaceId>,
    pub has_hook: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone)]
    struct Stub(Vec<f64>);

    impl Space for Stub {
        fn space_id(&self) -> SpaceId {
            SpaceId::new("stub")
        }

        fn components(&self) -> Vec<f64> {
            self.0.clone()
        }

        fn rebuild(&self) -> BoxedSpace {
            Box::new(self.clone())
        }

        fn as_any(&self) -> &dyn std::any::Any {
            self
        }
    }

    fn construct_stub(components: &[f64]) -> Result<BoxedSpace, ConversionError> {
        Ok(Box::new(Stub(components.to_vec())))
    }

    #[test]
    fn builder_preserves_target_order() {
        let descriptor = Descriptor::new("stub", "test space", construct_stub)
            .with_target("a")
            .with_targets(["b", "c"]);
        let names: Vec<&str> = descriptor
            .direct_targets
            .iter()
            .map(SpaceId::as_str)
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert!(descriptor.declares_target(&SpaceId::new("b")));
        assert!(!descriptor.declares_target(&SpaceId::new("d")));
    }

    #[test]
    fn summary_elides_function_pointers() {
        let descriptor =
            Descriptor::new("stub", "test space", construct_stub).with_target("a");
        let summary = descriptor.summary();
        assert_eq!(summary.name, SpaceId::new("stub"));
        assert!(!summary.has_hook);

        let json = serde_json::to_string(&summary).expect("summary serializes");
        assert!(json.contains("\"stub\""));
    }
}
