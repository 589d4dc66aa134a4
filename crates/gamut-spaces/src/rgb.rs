// RGB space: additive red/green/blue, each channel in [0, 1]
//
// RGB is the interchange hub: every other space declares an edge to or
// from it, and its conversion hook holds the inverse formula for each
// declared predecessor.

use std::any::Any;

use gamut_error::ConversionError;
use gamut_types::{BoxedSpace, Descriptor, Space, SpaceId};

use crate::{cmy, hsl, hsv, xyz};

/// Registered name of this space
pub const NAME: &str = "rgb";

/// Additive RGB value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

impl Space for Rgb {
    fn space_id(&self) -> SpaceId {
        SpaceId::new(NAME)
    }

    fn components(&self) -> Vec<f64> {
        vec![self.r, self.g, self.b]
    }

    fn rebuild(&self) -> BoxedSpace {
        Box::new(*self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Positional constructor: [r, g, b]
pub fn construct(components: &[f64]) -> Result<BoxedSpace, ConversionError> {
    match components {
        [r, g, b] => Ok(Box::new(Rgb::new(*r, *g, *b))),
        other => Err(ConversionError::Construction {
            space: NAME.to_string(),
            reason: format!("expected 3 components, got {}", other.len()),
        }),
    }
}

/// Registration record for the RGB space
pub fn descriptor() -> Descriptor {
    Descriptor::new(NAME, "additive red/green/blue color space", construct)
        .with_targets([hsl::NAME, hsv::NAME, cmy::NAME, xyz::NAME])
        .with_hook(from_predecessor)
}

/// Conversion hook: dispatches to the inverse formula for the declared
/// predecessor that produced `value`.
pub fn from_predecessor(value: &dyn Space) -> Result<BoxedSpace, ConversionError> {
    let components = value.components();
    let tag = value.space_id();
    let rgb = match (tag.as_str(), components.as_slice()) {
        (hsl::NAME, [h, s, l]) => from_hsl(*h, *s, *l),
        (hsv::NAME, [h, s, v]) => from_hsv(*h, *s, *v),
        (cmy::NAME, [c, m, y]) => from_cmy(*c, *m, *y),
        (xyz::NAME, [x, y, z]) => from_xyz(*x, *y, *z),
        (other, _) => {
            return Err(ConversionError::Hook {
                space: NAME.to_string(),
                reason: format!("no inverse formula for predecessor '{other}'"),
            })
        }
    };
    Ok(Box::new(rgb))
}

/// Hue sector expansion shared by the HSL and HSV inverses
fn hue_chroma_to_rgb(hue_degrees: f64, chroma: f64, offset: f64) -> (f64, f64, f64) {
    let sector = (hue_degrees.rem_euclid(360.0)) / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let (r1, g1, b1) = match sector {
        s if s < 1.0 => (chroma, x, 0.0),
        s if s < 2.0 => (x, chroma, 0.0),
        s if s < 3.0 => (0.0, chroma, x),
        s if s < 4.0 => (0.0, x, chroma),
        s if s < 5.0 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    (r1 + offset, g1 + offset, b1 + offset)
}

fn from_hsl(h: f64, s: f64, l: f64) -> Rgb {
    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let offset = l - chroma / 2.0;
    let (r, g, b) = hue_chroma_to_rgb(h, chroma, offset);
    Rgb::new(r, g, b)
}

fn from_hsv(h: f64, s: f64, v: f64) -> Rgb {
    let chroma = v * s;
    let offset = v - chroma;
    let (r, g, b) = hue_chroma_to_rgb(h, chroma, offset);
    Rgb::new(r, g, b)
}

fn from_cmy(c: f64, m: f64, y: f64) -> Rgb {
    Rgb::new(1.0 - c, 1.0 - m, 1.0 - y)
}

fn from_xyz(x: f64, y: f64, z: f64) -> Rgb {
    // Inverse of the linear-sRGB D65 matrix in xyz.rs
    Rgb::new(
        3.240_454_2 * x - 1.537_138_5 * y - 0.498_531_4 * z,
        -0.969_266_0 * x + 1.876_010_8 * y + 0.041_556_0 * z,
        0.055_643_4 * x - 0.204_025_9 * y + 1.057_225_2 * z,
    )
}

/// Hue in degrees [0, 360) from channel extrema, shared by the HSL and
/// HSV forward formulas.
pub(crate) fn hue_degrees(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    if delta == 0.0 {
        return 0.0;
    }
    let sector = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    sector * 60.0
}
