// HSL space: hue in degrees [0, 360), saturation and lightness in [0, 1]

use std::any::Any;

use gamut_error::ConversionError;
use gamut_types::{BoxedSpace, Descriptor, Space, SpaceId};

use crate::rgb;

/// Registered name of this space
pub const NAME: &str = "hsl";

/// Hue/saturation/lightness value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
}

impl Space for Hsl {
    fn space_id(&self) -> SpaceId {
        SpaceId::new(NAME)
    }

    fn components(&self) -> Vec<f64> {
        vec![self.h, self.s, self.l]
    }

    fn rebuild(&self) -> BoxedSpace {
        Box::new(*self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Positional constructor: [h, s, l]
pub fn construct(components: &[f64]) -> Result<BoxedSpace, ConversionError> {
    match components {
        [h, s, l] => Ok(Box::new(Hsl::new(*h, *s, *l))),
        other => Err(ConversionError::Construction {
            space: NAME.to_string(),
            reason: format!("expected 3 components, got {}", other.len()),
        }),
    }
}

/// Registration record for the HSL space
pub fn descriptor() -> Descriptor {
    Descriptor::new(NAME, "hue/saturation/lightness color space", construct)
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

fn from_rgb(r: f64, g: f64, b: f64) -> Hsl {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;
    let s = if delta == 0.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * l - 1.0).abs())
    };
    Hsl::new(rgb::hue_degrees(r, g, b, max, delta), s, l)
}
