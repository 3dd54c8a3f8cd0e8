//! The two built-in color sets.
//!
//! Both tables are plain literals. Where one field mirrors another (the
//! dark `secondary.text` is the dark `text.primary`) the value is written
//! out again rather than referenced.

use std::borrow::Cow;

use serde::Serialize;

use crate::groups::{
    ActionColors, BackgroundColors, BorderColors, CustomColors, Gradients, MenuColors, TextColors,
};
use crate::mode::ThemeMode;
use crate::palette::{self, black_base, white_base};
use crate::role::{ColorRole, RichColorInput};

/// A complete theme color set, generic over how roles are represented.
///
/// Built-in tables use [`RichColorInput`] roles; resolution turns them into
/// [`RichColor`](crate::RichColor) roles.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorSet<R> {
    pub mode: ThemeMode,

    pub primary: R,
    pub secondary: R,
    pub info: R,
    pub error: R,
    pub success: R,
    pub warning: R,

    pub text: TextColors,
    pub background: BackgroundColors,
    pub menu: MenuColors,
    pub border: BorderColors,
    pub gradients: Gradients,
    pub action: ActionColors,
    pub custom: CustomColors,

    pub hover_factor: f64,
    pub contrast_threshold: f64,
    pub tonal_offset: f64,
}

/// A built-in color set with partially specified roles.
pub type BaseColorSet = ColorSet<RichColorInput>;

impl<R> ColorSet<R> {
    /// The role slot for `role`.
    pub fn role(&self, role: ColorRole) -> &R {
        match role {
            ColorRole::Primary => &self.primary,
            ColorRole::Secondary => &self.secondary,
            ColorRole::Info => &self.info,
            ColorRole::Error => &self.error,
            ColorRole::Success => &self.success,
            ColorRole::Warning => &self.warning,
        }
    }
}

/// The built-in color set for `mode`.
pub fn base_colors(mode: ThemeMode) -> &'static BaseColorSet {
    match mode {
        ThemeMode::Dark => &DARK_COLORS,
        ThemeMode::Light => &LIGHT_COLORS,
    }
}

pub static DARK_COLORS: BaseColorSet = ColorSet {
    mode: ThemeMode::Dark,

    primary: RichColorInput::main(palette::PRIMARY_DARK_MAIN)
        .with_text(palette::ACCENT_1)
        .with_border(palette::PRIMARY_DARK_TEXT),
    secondary: RichColorInput::main(white_base(0.10))
        .with_shade(white_base(0.14))
        .with_transparent(white_base(0.08))
        .with_text(palette::TEXT_SECONDARY)
        .with_contrast_text(white_base(1.0))
        .with_border(white_base(0.08)),
    info: RichColorInput::main(palette::RED_DARK_MAIN).with_text(palette::TEXT_SECONDARY),
    error: RichColorInput::main(palette::RED_DARK_MAIN).with_text(palette::ACCENT_ERROR),
    success: RichColorInput::main(palette::GREEN_DARK_MAIN).with_text(palette::GREEN_DARK_TEXT),
    warning: RichColorInput::main(palette::ORANGE_DARK_MAIN).with_text(palette::ORANGE_DARK_TEXT),

    text: TextColors {
        accent1: palette::ACCENT_1,
        primary: palette::TEXT_SECONDARY,
        secondary: palette::TEXT_SECONDARY,
        tertiary: palette::TEXT_TERTIARY,
        quaternary: palette::TEXT_CONST_QUATERNARY,
        disabled: white_base(0.6),
        link: palette::ACCENT_1,
        max_contrast: palette::WHITE,
        active: palette::TEXT_CONST_PRIMARY,
    },
    background: BackgroundColors {
        canvas: palette::BACKGROUND_SECONDARY,
        primary: palette::BACKGROUND_SECONDARY,
        const_primary: palette::BACKGROUND_CONST_PRIMARY,
        secondary: palette::SURFACE_PRIMARY,
        surface_primary: palette::SURFACE_PRIMARY,
        button_hovered: palette::ACCENT_2,
        surface_secondary: palette::SURFACE_SECONDARY,
    },
    menu: MenuColors {
        active: palette::ACCENT_1,
        hovered: palette::ACCENT_1,
        pressed: palette::ACCENT_1_PRESSED,
        font_color: palette::TEXT_CONST_QUATERNARY,
        selected_hovered: palette::ACCENT_1_HOVERED,
        font_color_hovered: palette::TEXT_CONST_PRIMARY,
    },
    border: BorderColors {
        weak: white_base(0.12),
        medium: white_base(0.20),
        strong: white_base(0.30),
        secondary: palette::BORDER_SECONDARY,
        tertiary: palette::BORDER_TERTIARY,
    },
    gradients: Gradients {
        brand_vertical: Cow::Borrowed("linear-gradient(0.01deg, #F55F3E 0.01%, #FF8833 99.99%)"),
        brand_horizontal: Cow::Borrowed("linear-gradient(270deg, #F55F3E 0%, #FF8833 100%)"),
    },
    action: ActionColors {
        selected: white_base(0.12),
        selected_border: palette::ORANGE_DARK_MAIN,
        hover: white_base(0.16),
        hover_opacity: 0.08,
        focus: white_base(0.16),
        disabled_background: white_base(0.04),
        disabled_text: white_base(0.6),
        disabled_opacity: 0.38,
    },
    custom: CustomColors {
        accent_accent1: palette::ACCENT_1,
        hover_error_button: palette::ACCENT_ERROR_HOVERED,
    },

    hover_factor: 0.03,
    contrast_threshold: 3.0,
    tonal_offset: 0.15,
};

pub static LIGHT_COLORS: BaseColorSet = ColorSet {
    mode: ThemeMode::Light,

    primary: RichColorInput::main(palette::BLUE_LIGHT_MAIN)
        .with_border(palette::BLUE_LIGHT_TEXT)
        .with_text(palette::BLUE_LIGHT_TEXT),
    secondary: RichColorInput::main(black_base(0.08))
        .with_shade(black_base(0.15))
        .with_transparent(black_base(0.08))
        .with_contrast_text(black_base(1.0))
        .with_text(palette::TEXT_SECONDARY)
        .with_border(black_base(0.12)),
    info: RichColorInput::main(palette::BLUE_LIGHT_MAIN).with_text(palette::BLUE_LIGHT_TEXT),
    error: RichColorInput::main(palette::RED_LIGHT_MAIN)
        .with_text(palette::ACCENT_ERROR)
        .with_border(palette::RED_LIGHT_TEXT),
    success: RichColorInput::main(palette::GREEN_LIGHT_MAIN).with_text(palette::GREEN_LIGHT_TEXT),
    warning: RichColorInput::main(palette::ORANGE_LIGHT_MAIN).with_text(palette::ORANGE_LIGHT_TEXT),

    text: TextColors {
        accent1: palette::ACCENT_1,
        primary: palette::TEXT_SECONDARY,
        secondary: palette::TEXT_SECONDARY,
        tertiary: palette::TEXT_TERTIARY,
        quaternary: palette::TEXT_CONST_QUATERNARY,
        disabled: black_base(0.64),
        link: palette::BLUE_LIGHT_TEXT,
        max_contrast: palette::BLACK,
        active: palette::TEXT_CONST_PRIMARY,
    },
    background: BackgroundColors {
        canvas: palette::GRAY_90,
        primary: palette::WHITE,
        const_primary: palette::BACKGROUND_CONST_PRIMARY,
        secondary: palette::GRAY_100,
        surface_primary: palette::SURFACE_PRIMARY,
        button_hovered: palette::ACCENT_2,
        surface_secondary: palette::SURFACE_SECONDARY,
    },
    menu: MenuColors {
        active: palette::ACCENT_1,
        hovered: palette::ACCENT_1,
        pressed: palette::ACCENT_1_PRESSED,
        font_color: palette::TEXT_CONST_QUATERNARY,
        selected_hovered: palette::ACCENT_1_HOVERED,
        font_color_hovered: palette::TEXT_CONST_PRIMARY,
    },
    border: BorderColors {
        weak: black_base(0.12),
        medium: black_base(0.30),
        strong: black_base(0.40),
        secondary: palette::BORDER_SECONDARY,
        tertiary: palette::BORDER_TERTIARY,
    },
    gradients: Gradients {
        brand_vertical: Cow::Borrowed("linear-gradient(0.01deg, #F53E4C -31.2%, #FF8833 113.07%)"),
        brand_horizontal: Cow::Borrowed("linear-gradient(90deg, #FF8833 0%, #F53E4C 100%)"),
    },
    action: ActionColors {
        selected: black_base(0.08),
        selected_border: palette::ORANGE_LIGHT_MAIN,
        hover: black_base(0.12),
        hover_opacity: 0.08,
        focus: black_base(0.12),
        disabled_background: black_base(0.04),
        disabled_text: black_base(0.64),
        disabled_opacity: 0.38,
    },
    custom: CustomColors {
        accent_accent1: palette::ACCENT_1,
        hover_error_button: palette::ACCENT_ERROR_HOVERED,
    },

    hover_factor: 0.03,
    contrast_threshold: 3.0,
    tonal_offset: 0.2,
};
