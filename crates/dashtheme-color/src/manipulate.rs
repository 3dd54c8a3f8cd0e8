//! Color transforms used to derive theme variants.
//!
//! Coefficients are unit fractions and are clamped to `[0, 1]`; a NaN
//! coefficient behaves as `0`. Channel results truncate toward zero, so
//! repeated small adjustments never overshoot. Alpha is carried through
//! unchanged unless the transform is about alpha.

use crate::color::{Color, Hsl};
use crate::contrast::luminance;

/// Luminance above which [`emphasize`] darkens instead of lightening.
pub const EMPHASIS_PIVOT: f64 = 0.5;

fn unit(v: f64) -> f64 {
    if v > 0.0 { v.min(1.0) } else { 0.0 }
}

fn map_channels(color: Color, f: impl Fn(f64) -> f64) -> Color {
    let apply = |c: u8| f(f64::from(c)).clamp(0.0, 255.0) as u8;
    Color::rgba(
        apply(color.r()),
        apply(color.g()),
        apply(color.b()),
        color.a(),
    )
}

/// Mix each channel toward white by `coefficient`.
#[must_use]
pub fn lighten(color: Color, coefficient: f64) -> Color {
    let k = unit(coefficient);
    map_channels(color, |c| c + (255.0 - c) * k)
}

/// Scale each channel toward black by `coefficient`.
#[must_use]
pub fn darken(color: Color, coefficient: f64) -> Color {
    let k = unit(coefficient);
    map_channels(color, |c| c * (1.0 - k))
}

/// Replace the opacity of `color`.
#[must_use]
pub fn alpha(color: Color, value: f64) -> Color {
    color.with_alpha(unit(value) as f32)
}

/// Darken light colors and lighten dark ones by `coefficient`.
#[must_use]
pub fn emphasize(color: Color, coefficient: f64) -> Color {
    if luminance(color, None) > EMPHASIS_PIVOT {
        darken(color, coefficient)
    } else {
        lighten(color, coefficient)
    }
}

/// Add `round(255 * amount / 100)` to every channel.
///
/// `amount` is a percentage in `[-100, 100]`.
#[must_use]
pub fn brighten(color: Color, amount: f64) -> Color {
    let delta = (255.0 * amount.clamp(-100.0, 100.0) / 100.0).round();
    map_channels(color, |c| c + delta)
}

/// Lower HSL lightness by `amount` percentage points.
#[must_use]
pub fn darken_hsl(color: Color, amount: f64) -> Color {
    let hsl = color.to_hsl();
    let l = (hsl.l - amount / 100.0).clamp(0.0, 1.0);
    Color::from_hsl(Hsl { l, ..hsl }, color.a())
}
