//! Resolution of caller overrides into a complete theme color set.

use std::ops::Deref;

use dashtheme_color::{Color, brighten, contrast_ratio, darken_hsl, emphasize};
use serde::Serialize;
use tracing::{debug, warn};

use crate::base::{ColorSet, DARK_COLORS, LIGHT_COLORS, base_colors};
use crate::error::{ConfigurationError, ThemeError};
use crate::input::ColorsInput;
use crate::role::{ColorRole, Derivation, RichColor};

/// Percentage step of the list-item hover adjustment.
const HOVER_STEP: f64 = 2.0;

/// Picks black or white text for a background.
///
/// The dark set's max-contrast color (white) wins when its contrast against
/// the background, composited over `surface`, reaches the threshold;
/// otherwise the light set's max-contrast color (black) is used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastText {
    threshold: f64,
    surface: Color,
}

impl ContrastText {
    pub const fn new(threshold: f64, surface: Color) -> Self {
        Self { threshold, surface }
    }

    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    pub const fn surface(&self) -> Color {
        self.surface
    }

    /// Text color for `background` at the bound threshold.
    pub fn pick(&self, background: Color) -> Color {
        self.pick_with(background, self.threshold)
    }

    /// Text color for `background` at an explicit threshold.
    pub fn pick_with(&self, background: Color, threshold: f64) -> Color {
        let dark = DARK_COLORS.text.max_contrast;
        if contrast_ratio(dark, background, Some(self.surface)) >= threshold {
            dark
        } else {
            LIGHT_COLORS.text.max_contrast
        }
    }
}

/// A fully resolved theme color set plus its bound helpers.
///
/// Derefs to the underlying [`ColorSet`], so `colors.primary.shade` reads
/// straight through.
///
/// The tuning scalars stored in the set are the built-in ones. Caller
/// overrides of those scalars only steer derivation; see [`ContrastText`]
/// and [`emphasis_factor`](Self::emphasis_factor).
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedColors {
    colors: ColorSet<RichColor>,
    contrast: ContrastText,
    emphasis: f64,
}

impl ResolvedColors {
    /// The contrast-text picker bound to this theme.
    pub fn contrast_text(&self) -> ContrastText {
        self.contrast
    }

    /// Readable text color for `background` at the theme's threshold.
    pub fn get_contrast_text(&self, background: Color) -> Color {
        self.contrast.pick(background)
    }

    /// Readable text color for `background` at `threshold`.
    pub fn get_contrast_text_with(&self, background: Color, threshold: f64) -> Color {
        self.contrast.pick_with(background, threshold)
    }

    /// Hover factor [`emphasize`](Self::emphasize) applies by default.
    pub fn emphasis_factor(&self) -> f64 {
        self.emphasis
    }

    /// Hover feedback color by the theme's hover factor.
    pub fn emphasize(&self, color: Color) -> Color {
        emphasize(color, self.emphasis)
    }

    /// Hover feedback color by an explicit amount.
    pub fn emphasize_by(&self, color: Color, amount: f64) -> Color {
        emphasize(color, amount)
    }

    /// Hover background for list items: a fixed brighten step in dark
    /// themes, a fixed lightness drop in light themes.
    pub fn hover_color(&self, color: Color) -> Color {
        if self.colors.mode.is_dark() {
            brighten(color, HOVER_STEP)
        } else {
            darken_hsl(color, HOVER_STEP)
        }
    }
}

impl Deref for ResolvedColors {
    type Target = ColorSet<RichColor>;

    fn deref(&self) -> &Self::Target {
        &self.colors
    }
}

impl Serialize for ResolvedColors {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.colors.serialize(serializer)
    }
}

/// Resolve caller overrides against the built-in set for their mode.
///
/// Roles are completed one by one in a fixed order; the first role without
/// a main color aborts resolution. Tuning scalars are never rejected: the
/// color transforms clamp their coefficients.
pub fn resolve(input: &ColorsInput) -> Result<ResolvedColors, ConfigurationError> {
    resolve_inner(input).inspect_err(|err| warn!(%err, "theme colors rejected"))
}

/// Parse overrides from JSON and resolve them.
pub fn resolve_json(json: &str) -> Result<ResolvedColors, ThemeError> {
    let input = ColorsInput::from_json_str(json)?;
    Ok(resolve(&input)?)
}

fn resolve_inner(input: &ColorsInput) -> Result<ResolvedColors, ConfigurationError> {
    let base = base_colors(input.mode.unwrap_or_default());
    let tonal_offset = input.tonal_offset.unwrap_or(base.tonal_offset);
    let hover_factor = input.hover_factor.unwrap_or(base.hover_factor);
    let contrast_threshold = input.contrast_threshold.unwrap_or(base.contrast_threshold);

    let contrast = ContrastText::new(contrast_threshold, base.background.primary);
    let derivation = Derivation {
        mode: base.mode,
        tonal_offset,
        contrast,
    };
    let complete = |role: ColorRole| {
        input
            .role(role)
            .unwrap_or_else(|| base.role(role))
            .complete(role, &derivation)
    };

    let primary = complete(ColorRole::Primary)?;
    let secondary = complete(ColorRole::Secondary)?;
    let info = complete(ColorRole::Info)?;
    let error = complete(ColorRole::Error)?;
    let success = complete(ColorRole::Success)?;
    let warning = complete(ColorRole::Warning)?;

    let mut text = base.text.clone();
    text.merge(&input.text);
    let mut background = base.background.clone();
    background.merge(&input.background);
    let mut menu = base.menu.clone();
    menu.merge(&input.menu);
    let mut border = base.border.clone();
    border.merge(&input.border);
    let mut gradients = base.gradients.clone();
    gradients.merge(&input.gradients);
    let mut action = base.action.clone();
    action.merge(&input.action);
    let mut custom = base.custom.clone();
    custom.merge(&input.custom);

    debug!(
        mode = %base.mode,
        overridden_roles = ?ColorRole::ALL
            .iter()
            .filter(|role| input.role(**role).is_some())
            .map(|role| role.name())
            .collect::<Vec<_>>(),
        tonal_offset,
        hover_factor,
        contrast_threshold,
        "resolved theme colors"
    );

    Ok(ResolvedColors {
        colors: ColorSet {
            mode: base.mode,
            primary,
            secondary,
            info,
            error,
            success,
            warning,
            text,
            background,
            menu,
            border,
            gradients,
            action,
            custom,
            hover_factor: base.hover_factor,
            contrast_threshold: base.contrast_threshold,
            tonal_offset: base.tonal_offset,
        },
        contrast,
        emphasis: hover_factor,
    })
}
