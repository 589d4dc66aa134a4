// CMY space: subtractive cyan/magenta/yellow, each channel in [0, 1]

use std::any::Any;

use gamut_error::ConversionError;
use gamut_types::{BoxedSpace, Descriptor, Space, SpaceId};

use crate::rgb;

/// Registered name of this space
pub const NAME: &str = "cmy";

/// Subtractive CMY value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cmy {
    pub c: f64,
    pub m: f64,
    pub y: f64,
}

impl Cmy {
    pub fn new(c: f64, m: f64, y: f64) -> Self {
        Self { c, m, y }
    }
}

impl Space for Cmy {
    fn space_id(&self) -> SpaceId {
        SpaceId::new(NAME)
    }

    fn components(&self) -> Vec<f64> {
        vec![self.c, self.m, self.y]
    }

    fn rebuild(&self) -> BoxedSpace {
        Box::new(*self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Positional constructor: [c, m, y]
pub fn construct(components: &[f64]) -> Result<BoxedSpace, ConversionError> {
    match components {
        [c, m, y] => Ok(Box::new(Cmy::new(*c, *m, *y))),
        other => Err(ConversionError::Construction {
            space: NAME.to_string(),
            reason: format!("expected 3 components, got {}", other.len()),
        }),
    }
}

/// Registration record for the CMY space
pub fn descriptor() -> Descriptor {
    Descriptor::new(NAME, "subtractive cyan/magenta/yellow color space", construct)
        .with_target(rgb::NAME)
        .with_hook(from_predecessor)
}

/// Conversion hook: RGB is the only declared predecessor
pub fn from_predecessor(value: &dyn Space) -> Result<BoxedSpace, ConversionError> {
    match (value.space_id().as_str(), value.components().as_slice()) {
        (rgb::NAME, &[r, g, b]) => Ok(Box::new(Cmy::new(1.0 - r, 1.0 - g, 1.0 - b))),
        (other, _) => Err(ConversionError::Hook {
            space: NAME.to_string(),
            reason: format!("no formula for predecessor '{other}'"),
        }),
    }
}
