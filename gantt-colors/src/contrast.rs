//! WCAG 2.1 relative luminance and contrast ratio, and text color selection
//! for labels drawn on top of a computed bar color.

use crate::color::Color;

/// Default light label color.
pub const LIGHT_TEXT: &str = "#ffffff";

/// Default dark label color (slate-800).
pub const DARK_TEXT: &str = "#1e293b";

/// Minimum contrast against the light text color for light text to be chosen.
///
/// Lower than the 4.5:1 AA body-text threshold: white labels stay on saturated
/// mid-tone bars and dark labels are reserved for genuinely pale backgrounds.
pub const LIGHT_TEXT_MIN_CONTRAST: f64 = 2.0;

/// Light/dark label pair to choose between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextColors {
    pub light: String,
    pub dark: String,
}

impl TextColors {
    pub fn new(light: impl Into<String>, dark: impl Into<String>) -> Self {
        Self {
            light: light.into(),
            dark: dark.into(),
        }
    }

    /// Pick `light` when it reaches [`LIGHT_TEXT_MIN_CONTRAST`] on `background`, else `dark`.
    pub fn pick(&self, background: &str) -> &str {
        if light_text_is_legible(background, &self.light) {
            &self.light
        } else {
            &self.dark
        }
    }
}

impl Default for TextColors {
    fn default() -> Self {
        Self::new(LIGHT_TEXT, DARK_TEXT)
    }
}

/// WCAG conformance levels expressed as minimum contrast ratios.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContrastLevel {
    /// 3:1, large text at AA
    AaLarge,
    /// 4.5:1, body text at AA
    Aa,
    /// 7:1, body text at AAA
    Aaa,
}

impl ContrastLevel {
    pub fn min_ratio(self) -> f64 {
        match self {
            Self::AaLarge => 3.0,
            Self::Aa => 4.5,
            Self::Aaa => 7.0,
        }
    }
}

/// WCAG 2.1 relative luminance in `[0, 1]`.
///
/// Malformed input is measured as the fallback color.
pub fn relative_luminance(hex: &str) -> f64 {
    let color = Color::parse_or_fallback(hex);
    let lum = 0.2126 * linearize(color.r) + 0.7152 * linearize(color.g) + 0.0722 * linearize(color.b);
    lum.clamp(0.0, 1.0)
}

// sRGB channel -> linear light, WCAG 2.1 piecewise form
fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Contrast ratio in `[1, 21]`; symmetric in its arguments.
pub fn contrast_ratio(a: &str, b: &str) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (hi, lo) = if la >= lb { (la, lb) } else { (lb, la) };
    (hi + 0.05) / (lo + 0.05)
}

/// Whether `a` and `b` reach the contrast ratio required by `level`.
pub fn meets_contrast(a: &str, b: &str, level: ContrastLevel) -> bool {
    contrast_ratio(a, b) >= level.min_ratio()
}

fn light_text_is_legible(background: &str, light: &str) -> bool {
    contrast_ratio(background, light) >= LIGHT_TEXT_MIN_CONTRAST
}

/// Legible label color for `background` using the default light/dark pair.
pub fn pick_text_color(background: &str) -> String {
    TextColors::default().pick(background).to_string()
}

/// Legible label color for `background` choosing between `light` and `dark`.
pub fn pick_text_color_with(background: &str, light: &str, dark: &str) -> String {
    if light_text_is_legible(background, light) {
        light.to_string()
    } else {
        dark.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn test_luminance_extremes() {
        assert_eq!(relative_luminance("#000000"), 0.0);
        assert_eq!(relative_luminance("#ffffff"), 1.0);
    }

    #[test]
    fn test_black_white_ratio() {
        assert!((contrast_ratio("#000000", "#ffffff") - 21.0).abs() < 1e-9);
        assert!((contrast_ratio("#777777", "#777777") - 1.0).abs() < 1e-12);
    }

    #[rstest]
    #[case("#000000", "#ffffff")]
    #[case("#ffffff", "#1e293b")]
    #[case("#3b82f6", "#ffffff")]
    #[case("#fef3c7", "#1e293b")]
    #[case("#e5e7eb", "#1e293b")]
    #[case("#ffff00", "#1e293b")]
    #[case("#f28e2b", "#ffffff")]
    fn test_pick_text_color(#[case] background: &str, #[case] expected: &str) {
        assert_eq!(pick_text_color(background), expected);
    }

    #[test]
    fn test_pick_text_color_custom_pair() {
        assert_eq!(pick_text_color_with("#000000", "#eeeeee", "#111111"), "#eeeeee");
        assert_eq!(pick_text_color_with("#ffffff", "#eeeeee", "#111111"), "#111111");
    }

    #[test]
    fn test_malformed_background_uses_fallback() {
        // teal fallback carries white text
        assert_eq!(pick_text_color("nope"), LIGHT_TEXT);
        assert_eq!(pick_text_color(""), LIGHT_TEXT);
    }

    #[test]
    fn test_contrast_levels() {
        assert!(meets_contrast("#000000", "#ffffff", ContrastLevel::Aaa));
        assert!(!meets_contrast("#3b82f6", "#ffffff", ContrastLevel::Aa));
        assert!(meets_contrast("#3b82f6", "#ffffff", ContrastLevel::AaLarge));
    }

    proptest! {
        #[test]
        fn prop_contrast_symmetric_and_bounded(a: (u8, u8, u8), b: (u8, u8, u8)) {
            let ha = Color::rgb(a.0, a.1, a.2).to_hex();
            let hb = Color::rgb(b.0, b.1, b.2).to_hex();
            let ab = contrast_ratio(&ha, &hb);
            prop_assert_eq!(ab, contrast_ratio(&hb, &ha));
            prop_assert!((1.0..=21.0 + 1e-9).contains(&ab));
        }
    }
}
