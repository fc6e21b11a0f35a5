//! Color values and the color helper arguments.

use super::{to_reals, Real};
use crate::error::ValueError;

/// A color with integral channels in 0..=255.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba([f64; 4]);

/// A color with channels in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgbaf([f64; 4]);

fn with_alpha(channels: &[f64], opaque: f64) -> Result<[f64; 4], ValueError> {
    match *channels {
        [r, g, b] => Ok([r, g, b, opaque]),
        [r, g, b, a] => Ok([r, g, b, a]),
        _ => Err(ValueError::Shape {
            expected: "3 or 4".to_owned(),
            found: channels.len(),
        }),
    }
}

impl Rgba {
    /// Builds a color from 3 or 4 channels; 3 channels are fully opaque.
    ///
    /// # Errors
    ///
    /// [`ValueError::Shape`] on another channel count, [`ValueError::Invalid`]
    /// on a channel that is not an integer in 0..=255.
    pub fn new<T: Real>(channels: impl IntoIterator<Item = T>) -> Result<Self, ValueError> {
        let channels = with_alpha(&to_reals(channels), 255.0)?;
        if Self::is_valid(&channels) {
            Ok(Self(channels))
        } else {
            Err(ValueError::Invalid(format!(
                "rgba channels must be integers in 0..=255, got {channels:?}"
            )))
        }
    }

    /// Reports whether `channels` is a well-formed 3- or 4-channel color.
    #[must_use]
    pub fn is_valid(channels: &[f64]) -> bool {
        matches!(channels.len(), 3 | 4)
            && channels
                .iter()
                .all(|c| c.is_finite() && c.fract() == 0.0 && (0.0..=255.0).contains(c))
    }

    /// The four channels.
    #[must_use]
    pub fn channels(&self) -> [f64; 4] {
        self.0
    }

    /// Scales to fractional channels.
    #[must_use]
    pub fn to_rgbaf(self) -> Rgbaf {
        Rgbaf(self.0.map(|c| c / 255.0))
    }
}

impl Rgbaf {
    /// Builds a color from 3 or 4 channels; 3 channels are fully opaque.
    ///
    /// # Errors
    ///
    /// [`ValueError::Shape`] on another channel count, [`ValueError::Invalid`]
    /// on a channel outside 0.0..=1.0.
    pub fn new<T: Real>(channels: impl IntoIterator<Item = T>) -> Result<Self, ValueError> {
        let channels = with_alpha(&to_reals(channels), 1.0)?;
        if Self::is_valid(&channels) {
            Ok(Self(channels))
        } else {
            Err(ValueError::Invalid(format!(
                "rgbaf channels must be in 0.0..=1.0, got {channels:?}"
            )))
        }
    }

    /// Reports whether `channels` is a well-formed 3- or 4-channel color.
    #[must_use]
    pub fn is_valid(channels: &[f64]) -> bool {
        matches!(channels.len(), 3 | 4) && channels.iter().all(|c| (0.0..=1.0).contains(c))
    }

    /// The four channels.
    #[must_use]
    pub fn channels(&self) -> [f64; 4] {
        self.0
    }

    /// Scales to integral channels, rounding to the nearest integer.
    #[must_use]
    pub fn to_rgba(self) -> Rgba {
        Rgba(self.0.map(|c| (c * 255.0).round()))
    }
}

/// A resolved color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorValue {
    /// Integral channels.
    Rgba(Rgba),
    /// Fractional channels.
    Rgbaf(Rgbaf),
}

impl ColorValue {
    /// The color as integral channels.
    #[must_use]
    pub fn to_rgba(self) -> Rgba {
        match self {
            ColorValue::Rgba(c) => c,
            ColorValue::Rgbaf(c) => c.to_rgba(),
        }
    }

    /// The color as fractional channels.
    #[must_use]
    pub fn to_rgbaf(self) -> Rgbaf {
        match self {
            ColorValue::Rgba(c) => c.to_rgbaf(),
            ColorValue::Rgbaf(c) => c,
        }
    }
}

/// Any of the accepted color spellings.
///
/// Integer channel lists are read as RGBA and floating-point ones as RGBAF.
/// Packed integers above `0xFFFFFF` carry an alpha byte (`0xRRGGBBAA`);
/// smaller ones are opaque `0xRRGGBB`. Text is a hex string (`#rrggbb`,
/// `#rrggbbaa`, with or without the `#`) or a CSS basic color name.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorArg {
    /// Integral channels.
    Rgba(Vec<f64>),
    /// Fractional channels.
    Rgbaf(Vec<f64>),
    /// A packed integer.
    Packed(u32),
    /// A hex string or color name.
    Text(String),
}

const NAMED: &[(&str, u32)] = &[
    ("black", 0x000000),
    ("silver", 0xC0C0C0),
    ("gray", 0x808080),
    ("grey", 0x808080),
    ("white", 0xFFFFFF),
    ("maroon", 0x800000),
    ("red", 0xFF0000),
    ("purple", 0x800080),
    ("fuchsia", 0xFF00FF),
    ("green", 0x008000),
    ("lime", 0x00FF00),
    ("olive", 0x808000),
    ("yellow", 0xFFFF00),
    ("navy", 0x000080),
    ("blue", 0x0000FF),
    ("teal", 0x008080),
    ("aqua", 0x00FFFF),
    ("orange", 0xFFA500),
];

fn unpack(bytes: [u8; 4]) -> ColorValue {
    ColorValue::Rgba(Rgba(bytes.map(f64::from)))
}

fn unpack_rgb(packed: u32) -> ColorValue {
    let [_, r, g, b] = packed.to_be_bytes();
    unpack([r, g, b, 255])
}

impl ColorArg {
    /// Resolves the argument to a color.
    ///
    /// # Errors
    ///
    /// [`ValueError::Shape`] for channel lists of the wrong length and
    /// [`ValueError::Invalid`] for out-of-range channels, malformed hex
    /// strings and unknown names.
    pub fn resolve(&self) -> Result<ColorValue, ValueError> {
        match self {
            ColorArg::Rgba(channels) => Rgba::new(channels.iter().copied()).map(ColorValue::Rgba),
            ColorArg::Rgbaf(channels) => {
                Rgbaf::new(channels.iter().copied()).map(ColorValue::Rgbaf)
            }
            ColorArg::Packed(packed) if *packed > 0x00FF_FFFF => Ok(unpack(packed.to_be_bytes())),
            ColorArg::Packed(packed) => Ok(unpack_rgb(*packed)),
            ColorArg::Text(text) => parse_text(text),
        }
    }

    /// Reports whether the argument resolves.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.resolve().is_ok()
    }
}

fn parse_text(text: &str) -> Result<ColorValue, ValueError> {
    let trimmed = text.trim();
    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if matches!(hex.len(), 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        let packed = u32::from_str_radix(hex, 16)
            .map_err(|e| ValueError::Invalid(format!("`{text}`: {e}")))?;
        return Ok(if hex.len() == 8 {
            unpack(packed.to_be_bytes())
        } else {
            unpack_rgb(packed)
        });
    }
    let name = trimmed.to_ascii_lowercase();
    NAMED
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, packed)| unpack_rgb(*packed))
        .ok_or_else(|| ValueError::Invalid(format!("`{text}` is not a color")))
}

macro_rules! integral_channels {
    ($($t:ty),*) => {
        $(
            impl<const N: usize> From<[$t; N]> for ColorArg {
                fn from(channels: [$t; N]) -> Self {
                    ColorArg::Rgba(to_reals(channels))
                }
            }

            impl From<Vec<$t>> for ColorArg {
                fn from(channels: Vec<$t>) -> Self {
                    ColorArg::Rgba(to_reals(channels))
                }
            }
        )*
    };
}

macro_rules! fractional_channels {
    ($($t:ty),*) => {
        $(
            impl<const N: usize> From<[$t; N]> for ColorArg {
                fn from(channels: [$t; N]) -> Self {
                    ColorArg::Rgbaf(to_reals(channels))
                }
            }

            impl From<Vec<$t>> for ColorArg {
                fn from(channels: Vec<$t>) -> Self {
                    ColorArg::Rgbaf(to_reals(channels))
                }
            }
        )*
    };
}

integral_channels!(u8, u16, u32, i32, i64);
fractional_channels!(f32, f64);

impl From<u32> for ColorArg {
    fn from(packed: u32) -> Self {
        ColorArg::Packed(packed)
    }
}

impl From<&str> for ColorArg {
    fn from(text: &str) -> Self {
        ColorArg::Text(text.to_owned())
    }
}

impl From<String> for ColorArg {
    fn from(text: String) -> Self {
        ColorArg::Text(text)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn three_channels_are_opaque() {
        assert_eq!(Rgba::new([255, 0, 0]).unwrap().channels(), [255.0, 0.0, 0.0, 255.0]);
        assert_eq!(Rgbaf::new([1.0, 0.5, 0.0]).unwrap().channels(), [1.0, 0.5, 0.0, 1.0]);
    }

    #[test]
    fn out_of_range_channels_are_invalid() {
        assert!(matches!(Rgba::new([256, 0, 0, 0]), Err(ValueError::Invalid(_))));
        assert!(matches!(Rgba::new([1.5, 0.0, 0.0, 0.0]), Err(ValueError::Invalid(_))));
        assert!(matches!(Rgbaf::new([1.5, 0.0, 0.0]), Err(ValueError::Invalid(_))));
        assert!(matches!(Rgba::new([0, 0]), Err(ValueError::Shape { found: 2, .. })));
    }

    #[test]
    fn is_valid_never_fails() {
        assert!(Rgba::is_valid(&[255.0, 204.0, 0.0, 255.0]));
        assert!(!Rgba::is_valid(&[255.0, 204.0, 0.0, -1.0]));
        assert!(!Rgba::is_valid(&[f64::NAN, 0.0, 0.0]));
        assert!(!Rgbaf::is_valid(&[]));
    }

    #[test]
    fn packed_integers_carry_alpha_above_24_bits() {
        let opaque = ColorArg::from(0xFF_00_00_u32).resolve().unwrap();
        assert_eq!(opaque.to_rgba().channels(), [255.0, 0.0, 0.0, 255.0]);
        let translucent = ColorArg::from(0xFF_00_00_80_u32).resolve().unwrap();
        assert_eq!(translucent.to_rgba().channels(), [255.0, 0.0, 0.0, 128.0]);
    }

    #[test]
    fn hex_strings_and_names_resolve() {
        for text in ["#ff0000", "ff0000", "#FF0000FF", "red", " Red "] {
            let color = ColorArg::from(text).resolve().unwrap();
            assert_eq!(color.to_rgba().channels(), [255.0, 0.0, 0.0, 255.0], "{text}");
        }
        assert!(!ColorArg::from("#ff00").is_valid());
        assert!(!ColorArg::from("chartreuse-ish").is_valid());
    }

    #[test]
    fn channel_type_picks_the_representation() {
        assert!(matches!(ColorArg::from([255u8, 0, 0]), ColorArg::Rgba(_)));
        assert!(matches!(ColorArg::from(vec![1.0, 0.0, 0.0]), ColorArg::Rgbaf(_)));
    }

    #[test]
    fn conversions_scale_channels() {
        let color = Rgba::new([255, 0, 51, 255]).unwrap();
        assert_eq!(color.to_rgbaf().channels(), [1.0, 0.0, 0.2, 1.0]);
        assert_eq!(color.to_rgbaf().to_rgba(), color);
    }
}
