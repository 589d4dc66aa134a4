// CIE XYZ space: tristimulus values under the D65 white point,
// linear-sRGB primaries (no companding)

use std::any::Any;

use gamut_error::ConversionError;
use gamut_types::{BoxedSpace, Descriptor, Space, SpaceId};

use crate::rgb;

/// Registered name of this space
pub const NAME: &str = "xyz";

/// CIE XYZ tristimulus value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl Space for Xyz {
    fn space_id(&self) -> SpaceId {
        SpaceId::new(NAME)
    }

    fn components(&self) -> Vec<f64> {
        vec![self.x, self.y, self.z]
    }

    fn rebuild(&self) -> BoxedSpace {
        Box::new(*self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Positional constructor: [x, y, z]
pub fn construct(components: &[f64]) -> Result<BoxedSpace, ConversionError> {
    match components {
        [x, y, z] => Ok(Box::new(Xyz::new(*x, *y, *z))),
        other => Err(ConversionError::Construction {
            space: NAME.to_string(),
            reason: format!("expected 3 components, got {}", other.len()),
        }),
    }
}

/// Registration record for the XYZ space
pub fn descriptor() -> Descriptor {
    Descriptor::new(NAME, "CIE XYZ tristimulus space (D65)", construct)
        .with_target(rgb::NAME)
        .with_hook(from_predecessor)
}

/// Conversion hook: RGB is the only declared predecessor
pub fn from_predecessor(value: &dyn Space) -> Result<BoxedSpace, ConversionError> {
    match (value.space_id().as_str(), value.components().as_slice()) {
        (rgb::NAME, &[r, g, b]) => Ok(Box::new(from_rgb(r, g, b))),
        (other, _) => Err(ConversionError::Hook {
            space: NAME.to_string(),
            reason: format!("no formula for predecessor '{other}'"),
        }),
    }
}

fn from_rgb(r: f64, g: f64, b: f64) -> Xyz {
    // Linear-sRGB to XYZ, D65 white point
    Xyz::new(
        0.412_456_4 * r + 0.357_576_1 * g + 0.180_437_5 * b,
        0.212_672_9 * r + 0.715_152_2 * g + 0.072_175_0 * b,
        0.019_333_9 * r + 0.119_192_0 * g + 0.950_304_1 * b,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_maps_near_d65_white_point() {
        let xyz = from_rgb(1.0, 1.0, 1.0);
        assert!((xyz.x - 0.9505).abs() < 1e-3);
        assert!((xyz.y - 1.0).abs() < 1e-3);
        assert!((xyz.z - 1.0891).abs() < 1e-3);
    }
}
