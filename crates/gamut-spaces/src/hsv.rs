// HSV space: hue in degrees [0, 360), saturation and value in [0, 1]

use std::any::Any;

use gamut_error::ConversionError;
use gamut_types::{BoxedSpace, Descriptor, Space, SpaceId};

use crate::rgb;

/// Registered name of this space
pub const NAME: &str = "hsv";

/// Hue/saturation/value value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }
}

impl Space for Hsv {
    fn space_id(&self) -> SpaceId {
        SpaceId::new(NAME)
    }

    fn components(&self) -> Vec<f64> {
        vec![self.h, self.s, self.v]
    }

    fn rebuild(&self) -> BoxedSpace {
        Box::new(*self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Positional constructor: [h, s, v]
pub fn construct(components: &[f64]) -> Result<BoxedSpace, ConversionError> {
    match components {
        [h, s, v] => Ok(Box::new(Hsv::new(*h, *s, *v))),
        other => Err(ConversionError::Construction {
            space: NAME.to_string(),
            reason: format!("expected 3 components, got {}", other.len()),
        }),
    }
}

/// Registration record for the HSV space
pub fn descriptor() -> Descriptor {
    Descriptor::new(NAME, "hue/saturation/value color space", construct)
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

fn from_rgb(r: f64, g: f64, b: f64) -> Hsv {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let s = if max == 0.0 { 0.0 } else { delta / max };
    Hsv::new(rgb::hue_degrees(r, g, b, max, delta), s, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pure_red_is_full_value() {
        let hsv = from_rgb(1.0, 0.0, 0.0);
        assert_eq!(hsv.h, 0.0);
        assert!((hsv.s - 1.0).abs() < 1e-9);
        assert!((hsv.v - 1.0).abs() < 1e-9);
    }

    #[test]
    fn black_has_zero_saturation() {
        let hsv = from_rgb(0.0, 0.0, 0.0);
        assert_eq!(hsv.s, 0.0);
        assert_eq!(hsv.v, 0.0);
    }
}
