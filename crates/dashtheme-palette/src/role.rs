//! Semantic color roles and the rule that completes them.
//!
//! A role starts as a [`RichColorInput`] where only `main` is mandatory and
//! is completed into a [`RichColor`] by [`RichColorInput::complete`]. Each
//! derived field depends only on fields resolved before it:
//! `main → text → border → border_transparent`, with `shade`, `transparent`
//! and `contrast_text` hanging off `main`.

use std::fmt;

use dashtheme_color::{Color, alpha, darken, lighten};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::ConfigurationError;
use crate::mode::ThemeMode;
use crate::resolve::ContrastText;

/// Opacity of a role's `transparent` tint.
pub const TRANSPARENT_ALPHA: f64 = 0.15;
/// Opacity of a role's `border_transparent` tint.
pub const BORDER_TRANSPARENT_ALPHA: f64 = 0.25;

/// A named color purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorRole {
    Primary,
    Secondary,
    Info,
    Error,
    Success,
    Warning,
}

impl ColorRole {
    pub const ALL: [ColorRole; 6] = [
        ColorRole::Primary,
        ColorRole::Secondary,
        ColorRole::Info,
        ColorRole::Error,
        ColorRole::Success,
        ColorRole::Warning,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ColorRole::Primary => "primary",
            ColorRole::Secondary => "secondary",
            ColorRole::Info => "info",
            ColorRole::Error => "error",
            ColorRole::Success => "success",
            ColorRole::Warning => "warning",
        }
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A partially specified role. Unset fields are derived on completion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RichColorInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shade: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transparent: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contrast_text: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_transparent: Option<Color>,
}

/// A fully resolved role.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RichColor {
    pub name: ColorRole,
    pub main: Color,
    pub text: Color,
    pub border: Color,
    pub shade: Color,
    pub transparent: Color,
    pub contrast_text: Color,
    pub border_transparent: Color,
}

/// Theme-wide inputs to role completion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Derivation {
    pub mode: ThemeMode,
    pub tonal_offset: f64,
    pub contrast: ContrastText,
}

impl RichColorInput {
    pub const EMPTY: RichColorInput = RichColorInput {
        main: None,
        text: None,
        border: None,
        shade: None,
        transparent: None,
        contrast_text: None,
        border_transparent: None,
    };

    /// A role with only its main color set.
    pub const fn main(main: Color) -> Self {
        Self {
            main: Some(main),
            ..Self::EMPTY
        }
    }

    #[must_use]
    pub const fn with_text(mut self, text: Color) -> Self {
        self.text = Some(text);
        self
    }

    #[must_use]
    pub const fn with_border(mut self, border: Color) -> Self {
        self.border = Some(border);
        self
    }

    #[must_use]
    pub const fn with_shade(mut self, shade: Color) -> Self {
        self.shade = Some(shade);
        self
    }

    #[must_use]
    pub const fn with_transparent(mut self, transparent: Color) -> Self {
        self.transparent = Some(transparent);
        self
    }

    #[must_use]
    pub const fn with_contrast_text(mut self, contrast_text: Color) -> Self {
        self.contrast_text = Some(contrast_text);
        self
    }

    #[must_use]
    pub const fn with_border_transparent(mut self, border_transparent: Color) -> Self {
        self.border_transparent = Some(border_transparent);
        self
    }

    /// Fill every unset field of this role.
    ///
    /// Fails when `main` is unset, before any other field is looked at.
    pub fn complete(
        &self,
        role: ColorRole,
        derivation: &Derivation,
    ) -> Result<RichColor, ConfigurationError> {
        let main = self.main.ok_or(ConfigurationError::MissingMain { role })?;

        let text = or_derive(role, "text", self.text, || main);
        let border = or_derive(role, "border", self.border, || text);
        let shade = or_derive(role, "shade", self.shade, || match derivation.mode {
            ThemeMode::Light => darken(main, derivation.tonal_offset),
            ThemeMode::Dark => lighten(main, derivation.tonal_offset),
        });
        let transparent = or_derive(role, "transparent", self.transparent, || {
            alpha(main, TRANSPARENT_ALPHA)
        });
        let contrast_text = or_derive(role, "contrast_text", self.contrast_text, || {
            derivation.contrast.pick(main)
        });
        let border_transparent = or_derive(role, "border_transparent", self.border_transparent, || {
            alpha(border, BORDER_TRANSPARENT_ALPHA)
        });

        Ok(RichColor {
            name: role,
            main,
            text,
            border,
            shade,
            transparent,
            contrast_text,
            border_transparent,
        })
    }
}

fn or_derive(
    role: ColorRole,
    field: &'static str,
    given: Option<Color>,
    derive: impl FnOnce() -> Color,
) -> Color {
    given.unwrap_or_else(|| {
        let color = derive();
        trace!(%role, field, %color, "derived role color");
        color
    })
}
