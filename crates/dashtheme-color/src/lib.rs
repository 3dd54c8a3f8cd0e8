#![forbid(unsafe_code)]

//! Color primitives for dashtheme.
//!
//! # Role in dashtheme
//! `dashtheme-color` is the color-math layer underneath the palette
//! resolver. It knows nothing about themes: it parses and prints CSS
//! colors and derives new colors from old ones.
//!
//! # This crate provides
//! - [`Color`], an sRGB value with straight alpha and a CSS text form.
//! - [`lighten`], [`darken`], [`alpha`] and [`emphasize`] for deriving
//!   interaction and tint variants.
//! - [`luminance`] and [`contrast_ratio`] for WCAG-style readability checks,
//!   including compositing translucent colors over a canvas.
//! - [`brighten`] and [`darken_hsl`] for fixed-step hover adjustments.

/// Color value type and CSS parsing.
pub mod color;
/// Relative luminance and contrast ratio.
pub mod contrast;
/// Lighten, darken, alpha and emphasis transforms.
pub mod manipulate;

pub use color::{Color, ColorParseError, Hsl};
pub use contrast::{composite_over, contrast_ratio, luminance, srgb_to_linear};
pub use manipulate::{EMPHASIS_PIVOT, alpha, brighten, darken, darken_hsl, emphasize, lighten};
