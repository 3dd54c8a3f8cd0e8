//! Property-based invariant tests for the color transforms.
//!
//! 1. `lighten` never darkens a channel and `darken` never lightens one
//! 2. Both transforms keep alpha
//! 3. `alpha` only touches opacity
//! 4. Contrast ratio stays in `[1, 21]` and is symmetric without a canvas
//! 5. `emphasize` agrees with the luminance pivot
//! 6. Display output parses back to the same color

use dashtheme_color::{
    Color, EMPHASIS_PIVOT, alpha, contrast_ratio, darken, emphasize, lighten, luminance,
};
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

fn opaque_color() -> impl Strategy<Value = Color> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Color::rgb(r, g, b))
}

fn any_color() -> impl Strategy<Value = Color> {
    (any::<u8>(), any::<u8>(), any::<u8>(), 0.0f32..=1.0)
        .prop_map(|(r, g, b, a)| Color::rgba(r, g, b, a))
}

fn coefficient() -> impl Strategy<Value = f64> {
    0.0f64..=1.0
}

fn channels(c: Color) -> [u8; 3] {
    [c.r(), c.g(), c.b()]
}

// ═══════════════════════════════════════════════════════════════════════
// 1-2. Monotone channels, alpha carried through
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn lighten_is_monotone(color in any_color(), k in coefficient()) {
        let out = lighten(color, k);
        for (before, after) in channels(color).into_iter().zip(channels(out)) {
            prop_assert!(after >= before);
        }
        prop_assert_eq!(out.a(), color.a());
    }

    #[test]
    fn darken_is_monotone(color in any_color(), k in coefficient()) {
        let out = darken(color, k);
        for (before, after) in channels(color).into_iter().zip(channels(out)) {
            prop_assert!(after <= before);
        }
        prop_assert_eq!(out.a(), color.a());
    }

    #[test]
    fn full_coefficient_reaches_the_extremes(color in any_color()) {
        prop_assert_eq!(channels(lighten(color, 1.0)), [255, 255, 255]);
        prop_assert_eq!(channels(darken(color, 1.0)), [0, 0, 0]);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 3. Alpha only touches opacity
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn alpha_keeps_channels(color in any_color(), value in coefficient()) {
        let out = alpha(color, value);
        prop_assert_eq!(channels(out), channels(color));
        prop_assert_eq!(out.a(), value as f32);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 4-5. Contrast bounds and emphasis pivot
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn contrast_ratio_is_bounded_and_symmetric(a in opaque_color(), b in opaque_color()) {
        let ab = contrast_ratio(a, b, None);
        let ba = contrast_ratio(b, a, None);
        // 1.05 / 0.05 lands one ulp above 21.
        prop_assert!((1.0..=21.0 + 1e-9).contains(&ab), "ratio {} out of range", ab);
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn canvas_only_matters_for_translucent_backgrounds(
        fg in opaque_color(),
        bg in opaque_color(),
        canvas in opaque_color(),
    ) {
        prop_assert_eq!(
            contrast_ratio(fg, bg, Some(canvas)),
            contrast_ratio(fg, bg, None)
        );
    }

    #[test]
    fn emphasize_follows_luminance(color in opaque_color(), k in coefficient()) {
        let expected = if luminance(color, None) > EMPHASIS_PIVOT {
            darken(color, k)
        } else {
            lighten(color, k)
        };
        prop_assert_eq!(emphasize(color, k), expected);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 6. Text form round trip
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn display_parses_back(color in any_color()) {
        let text = color.to_string();
        let parsed: Color = text.parse().unwrap();
        prop_assert_eq!(parsed, color);
    }

    #[test]
    fn parse_never_panics(input in "\\PC{0,32}") {
        let _ = input.parse::<Color>();
    }
}
