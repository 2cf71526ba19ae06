//! Colour model: 16-bit RGB colours, colour-space conversion and shading.
//!
//! Every palette the engine draws with is derived from a handful of base
//! colours through [`shade`]. The shading strategy decides which colour space
//! the factor is applied in.

use serde::{Deserialize, Serialize};

/// Largest value of a 16-bit channel.
pub const CHANNEL_MAX: u16 = u16::MAX;

const CHANNEL_SCALE: f64 = CHANNEL_MAX as f64;

/// Luma above which lightening is compressed toward white more gently.
pub const BRIGHT_LUMA_THRESHOLD: f64 = 0.68;

/// A colour with 16-bit red, green and blue channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub red: u16,
    pub green: u16,
    pub blue: u16,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(CHANNEL_MAX, CHANNEL_MAX, CHANNEL_MAX);

    /// Create a colour from 16-bit channels.
    pub const fn new(red: u16, green: u16, blue: u16) -> Self {
        Self { red, green, blue }
    }

    /// Create a colour from 8-bit channels (`value << 8`).
    pub const fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::new((red as u16) << 8, (green as u16) << 8, (blue as u16) << 8)
    }

    /// Create a grey with all channels set to `value`.
    pub const fn grey(value: u16) -> Self {
        Self::new(value, value, value)
    }

    /// 8-bit channels (`value >> 8`).
    pub const fn to_rgb8(self) -> [u8; 3] {
        [(self.red >> 8) as u8, (self.green >> 8) as u8, (self.blue >> 8) as u8]
    }

    /// Whether every channel is zero.
    pub const fn is_black(self) -> bool {
        self.red == 0 && self.green == 0 && self.blue == 0
    }

    /// Channels as unit floats in `[0, 1]`.
    pub fn to_unit(self) -> [f64; 3] {
        [
            self.red as f64 / CHANNEL_SCALE,
            self.green as f64 / CHANNEL_SCALE,
            self.blue as f64 / CHANNEL_SCALE,
        ]
    }

    /// Build a colour from unit floats, clamping each channel to `[0, 1]`.
    pub fn from_unit(rgb: [f64; 3]) -> Self {
        Self::new(unit_to_channel(rgb[0]), unit_to_channel(rgb[1]), unit_to_channel(rgb[2]))
    }

    /// Rec. 709 luma in `[0, 1]`.
    pub fn luma(self) -> f64 {
        let [r, g, b] = self.to_unit();
        0.2126 * r + 0.7152 * g + 0.0722 * b
    }

    /// Convert to a peniko colour with the given opacity.
    pub fn with_alpha(self, alpha: f32) -> peniko::Color {
        peniko::Color::from(self).with_alpha(alpha.clamp(0.0, 1.0))
    }
}

impl From<Color> for peniko::Color {
    fn from(color: Color) -> Self {
        let [r, g, b] = color.to_rgb8();
        peniko::Color::from_rgb8(r, g, b)
    }
}

fn unit_to_channel(value: f64) -> u16 {
    if value.is_nan() {
        return 0;
    }
    (value.clamp(0.0, 1.0) * CHANNEL_SCALE).round() as u16
}

/// How a shade factor is applied to a colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shading {
    /// Multiply each RGB channel.
    Simple,
    /// Scale HSL lightness.
    Hsl,
    /// Scale HSV value, spilling overflow into saturation.
    #[default]
    Hsv,
    /// Luma-aware mixing toward black or white.
    Hcy,
}

/// Convert unit RGB to HSV. Hue is in degrees `[0, 360)`.
pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let v = max;
    let s = if max > 0.0 { delta / max } else { 0.0 };
    let h = hue_from_rgb(r, g, b, max, delta);
    (h, s, v)
}

/// Convert HSV (hue in degrees) to unit RGB.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s <= 0.0 {
        return (v, v, v);
    }
    let h = h.rem_euclid(360.0) / 60.0;
    let sector = h.floor();
    let f = h - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match sector as i32 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// Convert unit RGB to HSL. Hue is in degrees `[0, 360)`.
pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;
    let s = if delta <= 0.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * l - 1.0).abs())
    };
    let h = hue_from_rgb(r, g, b, max, delta);
    (h, s.clamp(0.0, 1.0), l)
}

/// Convert HSL (hue in degrees) to unit RGB.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let a = s * l.min(1.0 - l);
    let channel = |n: f64| {
        let k = (n + h.rem_euclid(360.0) / 30.0) % 12.0;
        l - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
    };
    (channel(0.0), channel(8.0), channel(4.0))
}

fn hue_from_rgb(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    if delta <= 0.0 {
        return 0.0;
    }
    let h = if max == r {
        60.0 * ((g - b) / delta)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    h.rem_euclid(360.0)
}

/// Scale HSV value by `factor`, moving any overflow into saturation.
fn scale_value(h: f64, s: f64, v: f64, factor: f64) -> (f64, f64, f64) {
    let mut s = s;
    let mut v = v * factor;
    if v > 1.0 {
        s = (s - (v - 1.0)).max(0.0);
        v = 1.0;
    }
    (h, s, v)
}

/// Shade `base` by `factor`.
///
/// A factor of exactly `1.0` returns `base` unchanged; greater factors
/// lighten, smaller ones darken. Negative factors are treated as zero and
/// every channel of the result is clamped to the 16-bit range.
pub fn shade(base: Color, factor: f64, shading: Shading) -> Color {
    if factor == 1.0 {
        return base;
    }
    let k = if factor.is_nan() { 1.0 } else { factor.max(0.0) };
    let [r, g, b] = base.to_unit();

    match shading {
        Shading::Simple => Color::from_unit([r * k, g * k, b * k]),
        Shading::Hsl => {
            let (h, s, l) = rgb_to_hsl(r, g, b);
            let (r, g, b) = hsl_to_rgb(h, s, (l * k).clamp(0.0, 1.0));
            Color::from_unit([r, g, b])
        }
        Shading::Hsv => {
            let (h, s, v) = rgb_to_hsv(r, g, b);
            let (h, s, v) = scale_value(h, s, v, k);
            let (r, g, b) = hsv_to_rgb(h, s, v);
            Color::from_unit([r, g, b])
        }
        Shading::Hcy => {
            if k < 1.0 {
                Color::from_unit([r * k, g * k, b * k])
            } else {
                let mut amount = (k - 1.0).min(1.0);
                if base.luma() > BRIGHT_LUMA_THRESHOLD {
                    amount /= 2.0;
                }
                let mix = |c: f64| c + (1.0 - c) * amount;
                Color::from_unit([mix(r), mix(g), mix(b)])
            }
        }
    }
}

/// Component-wise average of two colours.
pub fn mid_color(a: Color, b: Color) -> Color {
    let avg = |x: u16, y: u16| ((x as u32 + y as u32) / 2) as u16;
    Color::new(avg(a.red, b.red), avg(a.green, b.green), avg(a.blue, b.blue))
}

/// Linear interpolation from `base` toward `tint_color` by `amount` (`0..=1`).
pub fn tint(base: Color, tint_color: Color, amount: f64) -> Color {
    let t = if amount.is_nan() { 0.0 } else { amount.clamp(0.0, 1.0) };
    let lerp = |x: u16, y: u16| {
        let x = x as f64;
        (x + (y as f64 - x) * t).round().clamp(0.0, CHANNEL_SCALE) as u16
    };
    Color::new(
        lerp(base.red, tint_color.red),
        lerp(base.green, tint_color.green),
        lerp(base.blue, tint_color.blue),
    )
}

/// Cell colour used for the sorted column of a list view.
///
/// Black becomes a dark grey. Bright colours are darkened slightly and dark
/// ones lightened, with any value overflow taken out of saturation.
pub fn sorted_cell_color(color: Color) -> Color {
    if color.is_black() {
        return Color::grey(55 << 8);
    }
    let [r, g, b] = color.to_unit();
    let (h, s, v) = rgb_to_hsv(r, g, b);
    let factor = if v > 175.0 / 255.0 { 100.0 / 104.0 } else { 120.0 / 100.0 };
    let (h, s, v) = scale_value(h, s, v, factor);
    let (r, g, b) = hsv_to_rgb(h, s, v);
    Color::from_unit([r, g, b])
}

/// Whether a colour is too dark for dark text to be legible on it.
pub fn is_too_dark(color: Color) -> bool {
    let [r, g, b] = color.to_rgb8();
    (r as u32 * 299 + g as u32 * 587 + b as u32 * 114) / 1000 < 100
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Shading; 4] = [Shading::Simple, Shading::Hsl, Shading::Hsv, Shading::Hcy];

    #[test]
    fn test_rgb8_conversion() {
        let c = Color::from_rgb8(200, 100, 0);
        assert_eq!(c, Color::new(51200, 25600, 0));
        assert_eq!(c.to_rgb8(), [200, 100, 0]);
    }

    #[test]
    fn test_is_black() {
        assert!(Color::BLACK.is_black());
        assert!(!Color::new(0, 0, 1).is_black());
    }

    #[test]
    fn test_shade_identity() {
        let c = Color::new(12345, 54321, 999);
        for shading in ALL {
            assert_eq!(shade(c, 1.0, shading), c);
        }
    }

    #[test]
    fn test_shade_zero_is_black() {
        let c = Color::from_rgb8(200, 150, 100);
        for shading in [Shading::Simple, Shading::Hsv, Shading::Hcy, Shading::Hsl] {
            assert!(shade(c, 0.0, shading).is_black(), "{shading:?}");
        }
    }

    #[test]
    fn test_negative_factor_clamped() {
        let c = Color::from_rgb8(10, 20, 30);
        assert_eq!(shade(c, -3.0, Shading::Simple), Color::BLACK);
    }

    #[test]
    fn test_simple_shade_clamps() {
        let c = Color::new(60000, 100, 0);
        let lighter = shade(c, 2.0, Shading::Simple);
        assert_eq!(lighter.red, CHANNEL_MAX);
        assert_eq!(lighter.green, 200);
        assert_eq!(lighter.blue, 0);
    }

    #[test]
    fn test_hsv_overflow_moves_into_saturation() {
        let c = Color::from_rgb8(255, 0, 0);
        let lighter = shade(c, 1.5, Shading::Hsv);
        assert_eq!(lighter.red, CHANNEL_MAX);
        assert!(lighter.green > 0);
        assert_eq!(lighter.green, lighter.blue);
    }

    #[test]
    fn test_hcy_bright_colours_lighten_gently() {
        let dark = Color::grey(20000);
        let bright = Color::grey(60000);
        let dark_gain = shade(dark, 1.2, Shading::Hcy).red - dark.red;
        let bright_gain = shade(bright, 1.2, Shading::Hcy).red - bright.red;
        let expected_dark = ((CHANNEL_MAX - 20000) as f64 * 0.2).round() as u16;
        let expected_bright = ((CHANNEL_MAX - 60000) as f64 * 0.1).round() as u16;
        assert!((dark_gain as i32 - expected_dark as i32).abs() <= 1);
        assert!((bright_gain as i32 - expected_bright as i32).abs() <= 1);
    }

    #[test]
    fn test_hsv_round_trip() {
        let (h, s, v) = rgb_to_hsv(0.2, 0.4, 0.8);
        let (r, g, b) = hsv_to_rgb(h, s, v);
        assert!((r - 0.2).abs() < 1e-9);
        assert!((g - 0.4).abs() < 1e-9);
        assert!((b - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_hsl_round_trip() {
        let (h, s, l) = rgb_to_hsl(0.9, 0.3, 0.1);
        let (r, g, b) = hsl_to_rgb(h, s, l);
        assert!((r - 0.9).abs() < 1e-9);
        assert!((g - 0.3).abs() < 1e-9);
        assert!((b - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_mid_color() {
        let a = Color::new(0, 100, 65535);
        let b = Color::new(100, 0, 65535);
        assert_eq!(mid_color(a, b), Color::new(50, 50, 65535));
        assert_eq!(mid_color(a, b), mid_color(b, a));
        assert_eq!(mid_color(a, a), a);
    }

    #[test]
    fn test_tint() {
        let base = Color::grey(0);
        let target = Color::grey(10000);
        assert_eq!(tint(base, target, 0.4), Color::grey(4000));
        assert_eq!(tint(base, target, 0.0), base);
        assert_eq!(tint(base, target, 5.0), target);
    }

    #[test]
    fn test_sorted_cell_color() {
        assert_eq!(sorted_cell_color(Color::BLACK), Color::grey(55 << 8));

        let bright = Color::grey(65535);
        let darker = sorted_cell_color(bright);
        assert!(darker.red < bright.red);

        let dim = Color::grey(100 << 8);
        let lighter = sorted_cell_color(dim);
        assert!(lighter.red > dim.red);
    }

    #[test]
    fn test_is_too_dark() {
        assert!(is_too_dark(Color::from_rgb8(20, 20, 60)));
        assert!(!is_too_dark(Color::from_rgb8(230, 230, 230)));
    }

    #[test]
    fn test_peniko_conversion() {
        let c: peniko::Color = Color::from_rgb8(51, 102, 255).into();
        let [r, g, b, a] = c.components;
        assert!((r - 0.2).abs() < 1e-6);
        assert!((g - 0.4).abs() < 1e-6);
        assert!((b - 1.0).abs() < 1e-6);
        assert!((a - 1.0).abs() < 1e-6);
    }
}
