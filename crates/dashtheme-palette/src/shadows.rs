//! Elevation shadows.

use serde::Serialize;

/// CSS `box-shadow` values for the three elevation levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeShadows {
    pub z1: &'static str,
    pub z2: &'static str,
    pub z3: &'static str,
}

/// The shared elevation shadows. They do not vary with mode.
pub const fn shadows() -> ThemeShadows {
    ThemeShadows {
        z1: "0px 1px 2px rgba(1, 4, 9, 0.75)",
        z2: "0px 4px 8px rgba(1, 4, 9, 0.75)",
        z3: "0px 8px 24px rgb(1, 4, 9)",
    }
}
