//! The [`Color`] value type and its CSS text form.
//!
//! Colors are stored as 8-bit sRGB channels plus a floating alpha in
//! `[0, 1]`. The text form accepts the notations a dashboard theme file
//! uses (`#RRGGBB`, `rgba(...)`, `hsl(...)`) and prints back the shortest
//! of `#RRGGBB` or `rgba(r, g, b, a)`.

use std::fmt;
use std::str::FromStr;

/// Failure to read a CSS color string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    #[error("empty color value")]
    Empty,
    #[error("invalid hex color {0:?}")]
    InvalidHex(String),
    #[error("unrecognized color format {0:?}")]
    UnknownFormat(String),
    #[error("unknown color function {name:?} in {input:?}")]
    UnknownFunction { name: String, input: String },
    #[error("color {input:?} has {found} components, expected 3 or 4")]
    Arity { input: String, found: usize },
    #[error("invalid component {component:?} in color {input:?}")]
    InvalidComponent { input: String, component: String },
}

/// An sRGB color with straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: f32,
}

/// A color in HSL space: hue in degrees `[0, 360)`, saturation and
/// lightness in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

const fn clamp_alpha(a: f32) -> f32 {
    // NaN and -0.0 fail both comparisons and collapse to +0.0.
    if a >= 1.0 {
        1.0
    } else if a > 0.0 {
        a
    } else {
        0.0
    }
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0.0);

    /// Opaque color from channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Color with explicit alpha, clamped to `[0, 1]`.
    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self {
            r,
            g,
            b,
            a: clamp_alpha(a),
        }
    }

    #[inline]
    pub const fn r(self) -> u8 {
        self.r
    }

    #[inline]
    pub const fn g(self) -> u8 {
        self.g
    }

    #[inline]
    pub const fn b(self) -> u8 {
        self.b
    }

    #[inline]
    pub const fn a(self) -> f32 {
        self.a
    }

    /// Same channels with a new alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::rgba(self.r, self.g, self.b, a)
    }

    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a >= 1.0
    }

    /// Convert to HSL. Alpha is dropped.
    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if (max - min).abs() < f64::EPSILON {
            return Hsl { h: 0.0, s: 0.0, l };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        Hsl { h: h * 60.0, s, l }
    }

    /// Build a color from HSL components and an alpha.
    pub fn from_hsl(hsl: Hsl, a: f32) -> Self {
        let h = hsl.h.rem_euclid(360.0) / 360.0;
        let s = hsl.s.clamp(0.0, 1.0);
        let l = hsl.l.clamp(0.0, 1.0);

        if s == 0.0 {
            let v = channel_from_unit(l);
            return Self::rgba(v, v, v, a);
        }

        let q = if l < 0.5 {
            l * (1.0 + s)
        } else {
            l + s - l * s
        };
        let p = 2.0 * l - q;
        Self::rgba(
            channel_from_unit(hue_to_rgb(p, q, h + 1.0 / 3.0)),
            channel_from_unit(hue_to_rgb(p, q, h)),
            channel_from_unit(hue_to_rgb(p, q, h - 1.0 / 3.0)),
            a,
        )
    }
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn channel_from_unit(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(ColorParseError::Empty);
        }
        if let Some(digits) = input.strip_prefix('#') {
            return parse_hex(digits).ok_or_else(|| ColorParseError::InvalidHex(input.to_string()));
        }
        if input.eq_ignore_ascii_case("transparent") {
            return Ok(Self::TRANSPARENT);
        }

        let (Some(open), true) = (input.find('('), input.ends_with(')')) else {
            return Err(ColorParseError::UnknownFormat(input.to_string()));
        };
        let name = input[..open].trim().to_ascii_lowercase();
        let args: Vec<&str> = input[open + 1..input.len() - 1]
            .split(',')
            .map(str::trim)
            .collect();
        if args.len() != 3 && args.len() != 4 {
            return Err(ColorParseError::Arity {
                input: input.to_string(),
                found: args.len(),
            });
        }

        match name.as_str() {
            "rgb" | "rgba" => parse_rgb_args(input, &args),
            "hsl" | "hsla" => parse_hsl_args(input, &args),
            _ => Err(ColorParseError::UnknownFunction {
                name,
                input: input.to_string(),
            }),
        }
    }
}

fn parse_hex(digits: &str) -> Option<Color> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&digits[i..=i], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    match digits.len() {
        3 => Some(Color::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
        4 => Some(Color::rgba(
            nibble(0)?,
            nibble(1)?,
            nibble(2)?,
            f32::from(nibble(3)?) / 255.0,
        )),
        6 => Some(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Color::rgba(
            byte(0)?,
            byte(2)?,
            byte(4)?,
            f32::from(byte(6)?) / 255.0,
        )),
        _ => None,
    }
}

fn invalid(input: &str, component: &str) -> ColorParseError {
    ColorParseError::InvalidComponent {
        input: input.to_string(),
        component: component.to_string(),
    }
}

fn parse_number(input: &str, component: &str, max: f64) -> Result<f64, ColorParseError> {
    match component.parse::<f64>() {
        Ok(v) if v.is_finite() && (0.0..=max).contains(&v) => Ok(v),
        _ => Err(invalid(input, component)),
    }
}

fn parse_alpha(input: &str, args: &[&str]) -> Result<f32, ColorParseError> {
    let Some(component) = args.get(3) else {
        return Ok(1.0);
    };
    if let Some(pct) = component.strip_suffix('%') {
        return parse_number(input, pct.trim(), 100.0)
            .map(|v| (v / 100.0) as f32)
            .map_err(|_| invalid(input, component));
    }
    match component.parse::<f32>() {
        Ok(v) if v.is_finite() && (0.0..=1.0).contains(&v) => Ok(v),
        _ => Err(invalid(input, component)),
    }
}

fn parse_rgb_args(input: &str, args: &[&str]) -> Result<Color, ColorParseError> {
    let mut channels = [0u8; 3];
    for (slot, component) in channels.iter_mut().zip(args) {
        *slot = parse_number(input, component, 255.0)?.round() as u8;
    }
    let a = parse_alpha(input, args)?;
    Ok(Color::rgba(channels[0], channels[1], channels[2], a))
}

fn parse_hsl_args(input: &str, args: &[&str]) -> Result<Color, ColorParseError> {
    let h = args[0]
        .trim_end_matches("deg")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| invalid(input, args[0]))?;
    let percent = |component: &str| {
        let digits = component.strip_suffix('%').unwrap_or(component).trim();
        parse_number(input, digits, 100.0)
            .map(|v| v / 100.0)
            .map_err(|_| invalid(input, component))
    };
    let s = percent(args[1])?;
    let l = percent(args[2])?;
    let a = parse_alpha(input, args)?;
    Ok(Color::from_hsl(Hsl { h, s, l }, a))
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Color {
        s.parse().unwrap()
    }

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(parse("#3CB043"), Color::rgb(0x3C, 0xB0, 0x43));
        assert_eq!(parse("#3cb043"), Color::rgb(0x3C, 0xB0, 0x43));
    }

    #[test]
    fn parses_short_hex_by_doubling_nibbles() {
        assert_eq!(parse("#fa0"), Color::rgb(0xFF, 0xAA, 0x00));
        let c = parse("#fa08");
        assert_eq!((c.r(), c.g(), c.b()), (0xFF, 0xAA, 0x00));
        assert!((c.a() - 0x88 as f32 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn parses_eight_digit_hex_alpha() {
        let c = parse("#3CB04326");
        assert_eq!(c.with_alpha(1.0), Color::rgb(0x3C, 0xB0, 0x43));
        assert!((c.a() - 38.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn parses_rgb_and_rgba_functions() {
        assert_eq!(parse("rgb(204, 204, 220)"), Color::rgb(204, 204, 220));
        assert_eq!(
            parse("rgba(36, 41, 46,  0.12)"),
            Color::rgba(36, 41, 46, 0.12)
        );
        assert_eq!(parse("RGBA(36,41,46,1)"), Color::rgb(36, 41, 46));
        assert_eq!(parse("rgba(0, 0, 0, 50%)"), Color::rgba(0, 0, 0, 0.5));
    }

    #[test]
    fn parses_hsl_functions() {
        assert_eq!(parse("hsl(0, 100%, 50%)"), Color::rgb(255, 0, 0));
        assert_eq!(parse("hsl(120deg, 100%, 25%)"), Color::rgb(0, 128, 0));
        assert_eq!(parse("hsla(0, 0%, 100%, 0.5)"), Color::rgba(255, 255, 255, 0.5));
    }

    #[test]
    fn parses_transparent_keyword() {
        assert_eq!(parse("transparent"), Color::TRANSPARENT);
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!("".parse::<Color>(), Err(ColorParseError::Empty));
        assert!(matches!(
            "#12345".parse::<Color>(),
            Err(ColorParseError::InvalidHex(_))
        ));
        assert!(matches!(
            "#ggg".parse::<Color>(),
            Err(ColorParseError::InvalidHex(_))
        ));
        assert!(matches!(
            "blue".parse::<Color>(),
            Err(ColorParseError::UnknownFormat(_))
        ));
        assert!(matches!(
            "cmyk(1, 2, 3)".parse::<Color>(),
            Err(ColorParseError::UnknownFunction { .. })
        ));
        assert!(matches!(
            "rgb(1, 2)".parse::<Color>(),
            Err(ColorParseError::Arity { found: 2, .. })
        ));
        assert!(matches!(
            "rgb(256, 0, 0)".parse::<Color>(),
            Err(ColorParseError::InvalidComponent { .. })
        ));
        assert!(matches!(
            "rgba(0, 0, 0, 1.5)".parse::<Color>(),
            Err(ColorParseError::InvalidComponent { .. })
        ));
    }

    #[test]
    fn display_uses_hex_when_opaque() {
        assert_eq!(Color::rgb(0x3C, 0xB0, 0x43).to_string(), "#3CB043");
        assert_eq!(Color::BLACK.to_string(), "#000000");
    }

    #[test]
    fn display_uses_rgba_when_translucent() {
        assert_eq!(
            Color::rgba(204, 204, 220, 0.12).to_string(),
            "rgba(204, 204, 220, 0.12)"
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        for color in [
            Color::rgb(1, 2, 3),
            Color::rgba(36, 41, 46, 0.64),
            parse("#3CB04326"),
            Color::TRANSPARENT,
        ] {
            assert_eq!(parse(&color.to_string()), color);
        }
    }

    #[test]
    fn alpha_is_clamped() {
        assert_eq!(Color::rgba(1, 2, 3, 2.0).a(), 1.0);
        assert_eq!(Color::rgba(1, 2, 3, -1.0).a(), 0.0);
        assert_eq!(Color::rgba(1, 2, 3, f32::NAN).a(), 0.0);
    }

    #[test]
    fn negative_zero_alpha_prints_as_zero() {
        let c = parse("rgba(1, 2, 3, -0)");
        assert!(c.a().is_sign_positive());
        assert_eq!(c.to_string(), "rgba(1, 2, 3, 0)");
        assert_eq!(Color::rgba(1, 2, 3, -0.0).to_string(), "rgba(1, 2, 3, 0)");
    }

    #[test]
    fn hsl_round_trip_is_stable_for_primaries() {
        for color in [
            Color::rgb(255, 0, 0),
            Color::rgb(0, 255, 0),
            Color::rgb(0, 0, 255),
            Color::rgb(128, 128, 128),
        ] {
            assert_eq!(Color::from_hsl(color.to_hsl(), 1.0), color);
        }
    }

    #[test]
    fn gray_has_zero_saturation() {
        let hsl = Color::rgb(153, 153, 153).to_hsl();
        assert_eq!(hsl.s, 0.0);
        assert!((hsl.l - 0.6).abs() < 1e-9);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_css_strings() {
        let color: Color = serde_json::from_str("\"rgba(36, 41, 46, 0.5)\"").unwrap();
        assert_eq!(color, Color::rgba(36, 41, 46, 0.5));
        assert_eq!(
            serde_json::to_string(&Color::rgb(255, 153, 0)).unwrap(),
            "\"#FF9900\""
        );
        assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
    }
}
