//! Non-role color groups of a theme and their partial overrides.
//!
//! Each group comes as a pair: the complete group stored in a color set and
//! an `*Input` twin whose fields are all optional. Merging copies every set
//! field of the override over the group and leaves the rest alone.

use std::borrow::Cow;

use dashtheme_color::Color;
use serde::{Deserialize, Serialize};

macro_rules! color_group {
    (
        $(#[$meta:meta])*
        $name:ident / $input:ident {
            $( $(#[$fmeta:meta])* $field:ident : $ty:ty ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            $( $(#[$fmeta])* pub $field: $ty, )*
        }

        #[doc = concat!("Partial override for [`", stringify!($name), "`].")]
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase", deny_unknown_fields)]
        pub struct $input {
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl $input {
            /// True when the override sets nothing.
            pub fn is_empty(&self) -> bool {
                true $( && self.$field.is_none() )*
            }
        }

        impl $name {
            /// Overwrite every field the override sets.
            pub fn merge(&mut self, patch: &$input) {
                $(
                    if let Some(value) = &patch.$field {
                        self.$field = value.clone();
                    }
                )*
            }
        }
    };
}

color_group! {
    /// Text and icon colors.
    TextColors / TextColorsInput {
        accent1: Color,
        primary: Color,
        secondary: Color,
        tertiary: Color,
        quaternary: Color,
        disabled: Color,
        link: Color,
        /// Auto white or black text on colored backgrounds.
        max_contrast: Color,
        active: Color,
    }
}

color_group! {
    /// Surface colors.
    BackgroundColors / BackgroundColorsInput {
        /// Dashboard and body background.
        canvas: Color,
        /// Primary content pane background (panels).
        primary: Color,
        const_primary: Color,
        /// Cards and elements that stand out on the primary background.
        secondary: Color,
        surface_primary: Color,
        button_hovered: Color,
        surface_secondary: Color,
    }
}

color_group! {
    /// Navigation menu states.
    MenuColors / MenuColorsInput {
        active: Color,
        hovered: Color,
        pressed: Color,
        font_color: Color,
        selected_hovered: Color,
        font_color_hovered: Color,
    }
}

color_group! {
    /// Divider and outline colors.
    BorderColors / BorderColorsInput {
        weak: Color,
        medium: Color,
        strong: Color,
        secondary: Color,
        tertiary: Color,
    }
}

color_group! {
    /// CSS gradient expressions for brand surfaces.
    Gradients / GradientsInput {
        brand_vertical: Cow<'static, str>,
        brand_horizontal: Cow<'static, str>,
    }
}

color_group! {
    /// Interaction feedback colors and opacities.
    ActionColors / ActionColorsInput {
        /// Selected menu item or select option.
        selected: Color,
        /// Selected items where a background change alone is not enough.
        selected_border: Color,
        /// Hovered menu item or select option.
        hover: Color,
        /// Hover opacity for buttons and colored backgrounds.
        hover_opacity: f64,
        /// Focused menu item or select option.
        focus: Color,
        disabled_background: Color,
        disabled_text: Color,
        disabled_opacity: f64,
    }
}

color_group! {
    /// Product-specific extras.
    CustomColors / CustomColorsInput {
        accent_accent1: Color,
        hover_error_button: Color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn border() -> BorderColors {
        BorderColors {
            weak: Color::rgba(0, 0, 0, 0.12),
            medium: Color::rgba(0, 0, 0, 0.3),
            strong: Color::rgba(0, 0, 0, 0.4),
            secondary: Color::rgb(0x40, 0x40, 0x40),
            tertiary: Color::rgb(0x59, 0x59, 0x59),
        }
    }

    #[test]
    fn merge_overwrites_only_set_fields() {
        let mut group = border();
        let patch = BorderColorsInput {
            strong: Some(Color::WHITE),
            ..Default::default()
        };
        group.merge(&patch);
        assert_eq!(group.strong, Color::WHITE);
        assert_eq!(group.weak, border().weak);
        assert_eq!(group.tertiary, border().tertiary);
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let mut group = border();
        let patch = BorderColorsInput::default();
        assert!(patch.is_empty());
        group.merge(&patch);
        assert_eq!(group, border());
    }

    #[test]
    fn input_parses_camel_case_and_rejects_unknown_keys() {
        let patch: ActionColorsInput =
            serde_json::from_str(r##"{"selectedBorder": "#F00", "hoverOpacity": 0.2}"##).unwrap();
        assert_eq!(patch.selected_border, Some(Color::rgb(255, 0, 0)));
        assert_eq!(patch.hover_opacity, Some(0.2));
        assert!(!patch.is_empty());
        assert!(serde_json::from_str::<ActionColorsInput>(r#"{"hoverOpactiy": 0.2}"#).is_err());
    }

    #[test]
    fn gradient_overrides_take_owned_strings() {
        let mut gradients = Gradients {
            brand_vertical: Cow::Borrowed("a"),
            brand_horizontal: Cow::Borrowed("b"),
        };
        let patch: GradientsInput =
            serde_json::from_str(r#"{"brandHorizontal": "linear-gradient(red, blue)"}"#).unwrap();
        gradients.merge(&patch);
        assert_eq!(gradients.brand_horizontal, "linear-gradient(red, blue)");
        assert_eq!(gradients.brand_vertical, "a");
    }
}
