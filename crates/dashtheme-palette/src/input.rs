//! Caller overrides for theme colors.
//!
//! Every field is optional. A role given here replaces the built-in role
//! wholesale (its unset fields are derived, not taken from the built-in);
//! the other groups are merged field by field over the built-in set.

use serde::{Deserialize, Serialize};

use crate::groups::{
    ActionColorsInput, BackgroundColorsInput, BorderColorsInput, CustomColorsInput,
    GradientsInput, MenuColorsInput, TextColorsInput,
};
use crate::mode::ThemeMode;
use crate::role::{ColorRole, RichColorInput};

/// Partial theme colors, as read from a theme file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ColorsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<ThemeMode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<RichColorInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<RichColorInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<RichColorInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RichColorInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<RichColorInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<RichColorInput>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tonal_offset: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_factor: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contrast_threshold: Option<f64>,

    #[serde(skip_serializing_if = "TextColorsInput::is_empty")]
    pub text: TextColorsInput,
    #[serde(skip_serializing_if = "BackgroundColorsInput::is_empty")]
    pub background: BackgroundColorsInput,
    #[serde(skip_serializing_if = "MenuColorsInput::is_empty")]
    pub menu: MenuColorsInput,
    #[serde(skip_serializing_if = "BorderColorsInput::is_empty")]
    pub border: BorderColorsInput,
    #[serde(skip_serializing_if = "GradientsInput::is_empty")]
    pub gradients: GradientsInput,
    #[serde(skip_serializing_if = "ActionColorsInput::is_empty")]
    pub action: ActionColorsInput,
    #[serde(skip_serializing_if = "CustomColorsInput::is_empty")]
    pub custom: CustomColorsInput,
}

impl ColorsInput {
    /// Overrides for the given mode and nothing else.
    pub fn for_mode(mode: ThemeMode) -> Self {
        Self {
            mode: Some(mode),
            ..Self::default()
        }
    }

    /// Parse overrides from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The caller's override for `role`, if any.
    pub fn role(&self, role: ColorRole) -> Option<&RichColorInput> {
        match role {
            ColorRole::Primary => self.primary.as_ref(),
            ColorRole::Secondary => self.secondary.as_ref(),
            ColorRole::Info => self.info.as_ref(),
            ColorRole::Error => self.error.as_ref(),
            ColorRole::Success => self.success.as_ref(),
            ColorRole::Warning => self.warning.as_ref(),
        }
    }

    /// Mutable slot for `role`.
    pub fn role_mut(&mut self, role: ColorRole) -> &mut Option<RichColorInput> {
        match role {
            ColorRole::Primary => &mut self.primary,
            ColorRole::Secondary => &mut self.secondary,
            ColorRole::Info => &mut self.info,
            ColorRole::Error => &mut self.error,
            ColorRole::Success => &mut self.success,
            ColorRole::Warning => &mut self.warning,
        }
    }
}
