#![forbid(unsafe_code)]

//! Theme color resolution for dashtheme.
//!
//! # Role in dashtheme
//! `dashtheme-palette` turns a partial color override (usually read from a
//! theme file) into the complete, internally consistent set of color tokens
//! that UI components read: semantic roles with their derived variants,
//! text/background/border groups, and the contrast and emphasis helpers.
//!
//! # This crate provides
//! - [`resolve`] and [`resolve_json`], the entry points.
//! - [`ColorsInput`], the override model, deserializable from JSON.
//! - [`DARK_COLORS`] and [`LIGHT_COLORS`], the built-in literal tables.
//! - [`ResolvedColors`] with [`get_contrast_text`](ResolvedColors::get_contrast_text),
//!   [`emphasize`](ResolvedColors::emphasize) and
//!   [`hover_color`](ResolvedColors::hover_color).
//! - [`shadows`] for the elevation shadow tokens.
//!
//! # Example
//!
//! ```
//! use dashtheme_color::{Color, lighten};
//! use dashtheme_palette::{ColorsInput, ThemeMode, resolve};
//!
//! let colors = resolve(&ColorsInput::for_mode(ThemeMode::Dark)).unwrap();
//! assert_eq!(colors.primary.shade, lighten(colors.primary.main, 0.15));
//! assert_eq!(colors.get_contrast_text(Color::WHITE), Color::BLACK);
//! ```
//!
//! Resolution is a pure function of its input and the two static tables,
//! so it can be called from any thread without coordination.

/// Built-in color sets.
pub mod base;
/// Configuration errors.
pub mod error;
/// Non-role color groups and their overrides.
pub mod groups;
/// Caller overrides.
pub mod input;
/// Light/dark mode.
pub mod mode;
/// Named palette colors.
pub mod palette;
/// Resolution entry points and the resolved color set.
pub mod resolve;
/// Semantic roles and role completion.
pub mod role;
/// Elevation shadows.
pub mod shadows;

pub use base::{BaseColorSet, ColorSet, DARK_COLORS, LIGHT_COLORS, base_colors};
pub use error::{ConfigurationError, ThemeError};
pub use groups::{
    ActionColors, ActionColorsInput, BackgroundColors, BackgroundColorsInput, BorderColors,
    BorderColorsInput, CustomColors, CustomColorsInput, Gradients, GradientsInput, MenuColors,
    MenuColorsInput, TextColors, TextColorsInput,
};
pub use input::ColorsInput;
pub use mode::ThemeMode;
pub use resolve::{ContrastText, ResolvedColors, resolve, resolve_json};
pub use role::{
    BORDER_TRANSPARENT_ALPHA, ColorRole, Derivation, RichColor, RichColorInput,
    TRANSPARENT_ALPHA,
};
pub use shadows::{ThemeShadows, shadows};
