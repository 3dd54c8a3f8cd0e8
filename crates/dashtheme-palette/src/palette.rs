//! Named colors the built-in color sets are assembled from.

use dashtheme_color::Color;

pub const WHITE: Color = Color::WHITE;
pub const BLACK: Color = Color::BLACK;

/// Dashboard background and card layer of the light set.
pub const GRAY_90: Color = Color::rgb(0xF4, 0xF5, 0xF5);
pub const GRAY_100: Color = Color::rgb(0xF4, 0xF5, 0xF5);

pub const PRIMARY_DARK_MAIN: Color = Color::rgb(0x3C, 0xB0, 0x43);
pub const PRIMARY_DARK_TEXT: Color = Color::rgb(0x6E, 0x9F, 0xFF);
pub const RED_DARK_MAIN: Color = Color::rgb(0xE5, 0x58, 0x4D);
pub const GREEN_DARK_MAIN: Color = Color::rgb(0x1A, 0x7F, 0x4B);
pub const GREEN_DARK_TEXT: Color = Color::rgb(0x6C, 0xCF, 0x8E);
pub const ORANGE_DARK_MAIN: Color = Color::rgb(0xFF, 0x99, 0x00);
pub const ORANGE_DARK_TEXT: Color = Color::rgb(0xFB, 0xAD, 0x37);

pub const BLUE_LIGHT_MAIN: Color = Color::rgb(0x38, 0x71, 0xDC);
pub const BLUE_LIGHT_TEXT: Color = Color::rgb(0x1F, 0x62, 0xE0);
pub const RED_LIGHT_MAIN: Color = Color::rgb(0xE0, 0x22, 0x6E);
pub const RED_LIGHT_TEXT: Color = Color::rgb(0xCF, 0x0E, 0x5B);
pub const GREEN_LIGHT_MAIN: Color = Color::rgb(0x1B, 0x85, 0x5E);
pub const GREEN_LIGHT_TEXT: Color = Color::rgb(0x0A, 0x76, 0x4E);
pub const ORANGE_LIGHT_MAIN: Color = Color::rgb(0xFF, 0x99, 0x00);
pub const ORANGE_LIGHT_TEXT: Color = Color::rgb(0xB5, 0x51, 0x0D);

pub const ACCENT_1: Color = Color::rgb(0x3C, 0xB0, 0x43);
pub const ACCENT_1_PRESSED: Color = Color::rgb(0x34, 0x98, 0x3A);
pub const ACCENT_1_HOVERED: Color = Color::rgb(0x41, 0xBE, 0x48);
pub const ACCENT_2: Color = Color::rgb(0x4D, 0x4D, 0x4D);
pub const ACCENT_ERROR: Color = Color::rgb(0xE5, 0x58, 0x4D);
pub const ACCENT_ERROR_HOVERED: Color = Color::rgb(0xCE, 0x3C, 0x31);

pub const TEXT_CONST_PRIMARY: Color = Color::rgb(0xFF, 0xFF, 0xFF);
pub const TEXT_CONST_QUATERNARY: Color = Color::rgb(0xCC, 0xCC, 0xCC);
pub const TEXT_SECONDARY: Color = Color::rgb(0xE6, 0xE6, 0xE6);
pub const TEXT_TERTIARY: Color = Color::rgb(0x99, 0x99, 0x99);

pub const SURFACE_PRIMARY: Color = Color::rgb(0x26, 0x26, 0x26);
pub const SURFACE_SECONDARY: Color = Color::rgb(0x2E, 0x2E, 0x2E);
pub const BACKGROUND_SECONDARY: Color = Color::rgb(0x1F, 0x1F, 0x1F);
pub const BACKGROUND_CONST_PRIMARY: Color = Color::rgb(0x26, 0x26, 0x26);
pub const BORDER_SECONDARY: Color = Color::rgb(0x40, 0x40, 0x40);
pub const BORDER_TERTIARY: Color = Color::rgb(0x59, 0x59, 0x59);

/// Near-white used for translucent overlays in the dark set.
pub const fn white_base(a: f32) -> Color {
    Color::rgba(204, 204, 220, a)
}

/// Near-black used for translucent overlays in the light set.
pub const fn black_base(a: f32) -> Color {
    Color::rgba(36, 41, 46, a)
}
