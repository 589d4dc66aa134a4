// Concrete representation spaces for the gamut engine
//
// Each space module exposes its concrete type and a pure `descriptor()`
// function; nothing registers itself as a side effect of being defined.
// `standard_registry` is the single composition root that admits every
// known space and hands the store to the host.
//
// Declared one-hop edges route everything through RGB:
//
//   rgb -> {hsl, hsv, cmy, xyz}
//   hsl -> rgb, hsv -> rgb, cmy -> rgb, xyz -> rgb
//
// so e.g. HSL -> HSV resolves as the two-hop path hsl -> rgb -> hsv.

pub mod cmy;
pub mod hsl;
pub mod hsv;
pub mod rgb;
pub mod xyz;

pub use cmy::Cmy;
pub use hsl::Hsl;
pub use hsv::Hsv;
pub use rgb::Rgb;
pub use xyz::Xyz;

use gamut_engine::SpaceRegistry;
use gamut_error::RegistrationError;
use tracing::debug;

/// Build a registry with every space this crate knows about.
///
/// The host owns the returned value and decides how to share it; there is
/// no ambient global registry.
pub fn standard_registry() -> Result<SpaceRegistry, RegistrationError> {
    let registry = SpaceRegistry::new();
    for descriptor in [
        rgb::descriptor(),
        hsl::descriptor(),
        hsv::descriptor(),
        cmy::descriptor(),
        xyz::descriptor(),
    ] {
        registry.register(descriptor)?;
    }
    debug!(spaces = registry.len(), "built standard space registry");
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composition_root_registers_every_space() {
        let registry = standard_registry().expect("all descriptors admit");
        assert_eq!(registry.len(), 5);
        for name in [rgb::NAME, hsl::NAME, hsv::NAME, cmy::NAME, xyz::NAME] {
            assert!(registry.is_registered(&name.into()));
        }
    }
}
