//! WCAG relative luminance and contrast ratio.
//!
//! Translucent colors are measured as they would appear over a canvas:
//! pass the surface the color is drawn on and it is alpha-composited first.

use crate::color::Color;

/// sRGB transfer function, unit channel to linear light.
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Channels of `color` composited over `canvas`, on the 0..=255 scale.
///
/// The canvas alpha is ignored: it is treated as the opaque backdrop.
pub fn composite_over(color: Color, canvas: Color) -> [f64; 3] {
    let a = f64::from(color.a());
    let mix = |fg: u8, bg: u8| f64::from(fg) * a + f64::from(bg) * (1.0 - a);
    [
        mix(color.r(), canvas.r()),
        mix(color.g(), canvas.g()),
        mix(color.b(), canvas.b()),
    ]
}

/// Relative luminance in `[0, 1]`, rounded to three decimals.
///
/// Without a canvas the alpha channel is ignored.
pub fn luminance(color: Color, canvas: Option<Color>) -> f64 {
    let channels = match canvas {
        Some(canvas) => composite_over(color, canvas),
        None => [
            f64::from(color.r()),
            f64::from(color.g()),
            f64::from(color.b()),
        ],
    };
    let [r, g, b] = channels.map(|c| srgb_to_linear(c / 255.0));
    let lum = 0.2126 * r + 0.7152 * g + 0.0722 * b;
    (lum * 1000.0).round() / 1000.0
}

/// Contrast ratio between a foreground and a background, in `[1, 21]`.
///
/// Only the background is composited over `canvas`; the foreground is
/// measured as-is.
pub fn contrast_ratio(foreground: Color, background: Color, canvas: Option<Color>) -> f64 {
    let lum_fg = luminance(foreground, None);
    let lum_bg = luminance(background, canvas);
    (lum_fg.max(lum_bg) + 0.05) / (lum_fg.min(lum_bg) + 0.05)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn srgb_to_linear_boundaries() {
        assert!((srgb_to_linear(0.0) - 0.0).abs() < 1e-10);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
        assert!(srgb_to_linear(0.03) < srgb_to_linear(0.04));
    }

    #[test]
    fn luminance_of_black_and_white() {
        assert_eq!(luminance(Color::BLACK, None), 0.0);
        assert_eq!(luminance(Color::WHITE, None), 1.0);
    }

    #[test]
    fn luminance_is_rounded_to_three_decimals() {
        let lum = luminance(Color::rgb(0x3C, 0xB0, 0x43), None);
        assert_eq!(lum, (lum * 1000.0).round() / 1000.0);
        assert!(lum > 0.3 && lum < 0.4, "got {lum}");
    }

    #[test]
    fn black_on_white_is_21() {
        let ratio = contrast_ratio(Color::BLACK, Color::WHITE, None);
        assert!((ratio - 21.0).abs() < 1e-9, "got {ratio}");
    }

    #[test]
    fn identical_colors_have_ratio_one() {
        let c = Color::rgb(0x1F, 0x1F, 0x1F);
        assert_eq!(contrast_ratio(c, c, None), 1.0);
    }

    #[test]
    fn ratio_is_symmetric_without_canvas() {
        let a = Color::rgb(0xE5, 0x58, 0x4D);
        let b = Color::rgb(0x1F, 0x1F, 0x1F);
        assert_eq!(contrast_ratio(a, b, None), contrast_ratio(b, a, None));
    }

    #[test]
    fn translucent_background_is_composited_over_canvas() {
        let veil = Color::rgba(255, 255, 255, 0.1);
        let canvas = Color::rgb(0x1F, 0x1F, 0x1F);
        let composited = contrast_ratio(Color::WHITE, veil, Some(canvas));
        // Without a canvas the veil reads as solid white.
        assert_eq!(contrast_ratio(Color::WHITE, veil, None), 1.0);
        assert!(composited > 10.0, "got {composited}");
    }

    #[test]
    fn opaque_color_ignores_canvas() {
        let c = Color::rgb(0x3C, 0xB0, 0x43);
        assert_eq!(luminance(c, Some(Color::BLACK)), luminance(c, None));
    }
}
