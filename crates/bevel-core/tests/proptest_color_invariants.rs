//! Property-based tests for the colour model and ramp generation.
//!
//! 1. **Identity**: `shade(c, 1.0) == c` for every colour and strategy.
//! 2. **Direction**: darkening never raises a channel, lightening never
//!    lowers one.
//! 3. **Determinism**: generating a ramp twice gives identical ramps.
//! 4. **Mid colour**: commutative and idempotent.
//! 5. **Classification totality**: any raw shadow value maps to a profile.

use bevel_core::classify::{BorderProfile, ShadowKind, classify_border};
use bevel_core::color::{Color, Shading, mid_color, shade, tint};
use bevel_core::policy::ShadingPolicy;
use bevel_core::ramp::{ORIGINAL_SHADE, ShadeRamp};
use proptest::prelude::*;

fn any_color() -> impl Strategy<Value = Color> {
    (any::<u16>(), any::<u16>(), any::<u16>()).prop_map(|(r, g, b)| Color::new(r, g, b))
}

fn any_shading() -> impl Strategy<Value = Shading> {
    prop_oneof![Just(Shading::Simple), Just(Shading::Hsl), Just(Shading::Hsv), Just(Shading::Hcy)]
}

fn any_policy() -> impl Strategy<Value = ShadingPolicy> {
    (any_shading(), 0u8..=12, any::<bool>(), -50i32..100).prop_map(|(shading, contrast, darker, hl)| {
        ShadingPolicy {
            shading,
            contrast,
            darker_borders: darker,
            highlight_factor: hl,
            custom_shades: None,
        }
    })
}

proptest! {
    #[test]
    fn shade_identity(c in any_color(), shading in any_shading()) {
        prop_assert_eq!(shade(c, 1.0, shading), c);
    }

    #[test]
    fn darken_never_raises_a_channel(c in any_color(), shading in any_shading(), f in 0.0f64..1.0) {
        let out = shade(c, f, shading);
        prop_assert!(out.red <= c.red, "{:?} -> {:?}", c, out);
        prop_assert!(out.green <= c.green, "{:?} -> {:?}", c, out);
        prop_assert!(out.blue <= c.blue, "{:?} -> {:?}", c, out);
    }

    #[test]
    fn lighten_never_lowers_a_channel(c in any_color(), shading in any_shading(), f in 1.0f64..3.0) {
        let out = shade(c, f, shading);
        prop_assert!(out.red >= c.red, "{:?} -> {:?}", c, out);
        prop_assert!(out.green >= c.green, "{:?} -> {:?}", c, out);
        prop_assert!(out.blue >= c.blue, "{:?} -> {:?}", c, out);
    }

    #[test]
    fn ramp_is_deterministic(c in any_color(), policy in any_policy()) {
        let a = ShadeRamp::generate(c, &policy);
        let b = ShadeRamp::generate(c, &policy);
        prop_assert_eq!(a, b);
        prop_assert_eq!(a[ORIGINAL_SHADE], c);
    }

    #[test]
    fn mid_color_commutative(a in any_color(), b in any_color()) {
        prop_assert_eq!(mid_color(a, b), mid_color(b, a));
        prop_assert_eq!(mid_color(a, a), a);
    }

    #[test]
    fn tint_endpoints(a in any_color(), b in any_color()) {
        prop_assert_eq!(tint(a, b, 0.0), a);
        prop_assert_eq!(tint(a, b, 1.0), b);
    }

    #[test]
    fn border_classification_is_total(raw in any::<i32>()) {
        let profile = classify_border(ShadowKind::from(raw));
        if !(1..=4).contains(&raw) {
            prop_assert_eq!(profile, BorderProfile::Flat);
        }
    }
}
