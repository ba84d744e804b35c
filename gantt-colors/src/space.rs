//! Palette generation: monochrome ramps and expansion of curated palettes.

use std::collections::HashSet;

use crate::color::{hsl_to_hex, Color, Hsl, FALLBACK_COLOR};

/// Lightness stops of a monochrome ramp, darkest first.
pub const MONOCHROME_STOPS: [f64; 5] = [20.0, 35.0, 50.0, 65.0, 80.0];

/// Hue rotation applied per expansion round.
const EXPANSION_HUE_STEP: f64 = 25.0;

/// Lightness offset applied per pair of expansion rounds.
const EXPANSION_LIGHTNESS_STEP: f64 = 10.0;

/// Hue step between retries of a synthesized color (golden angle).
const RETRY_HUE_STEP: f64 = 137.508;

/// Lightness rung spacing between retries, wrapping within [15, 85].
const RETRY_LIGHTNESS_STEP: f64 = 7.0;

/// Saturation floor for retries, so near-gray sources still rotate visibly.
const RETRY_MIN_SATURATION: f64 = 35.0;

const MAX_RETRIES: usize = 256;

/// Five colors sharing the hue and saturation of `base`, lightness strictly
/// increasing from darkest to lightest.
///
/// Hue is preserved up to 8-bit rounding: a ramp color whose channels span
/// `d` units (max minus min) may drift by at most `60 / d` degrees, so
/// low-saturation bases drift by more than a degree at the dark end.
pub fn generate_monochrome_palette(base: &str) -> Vec<String> {
    let hsl = Color::parse_or_fallback(base).to_hsl();
    MONOCHROME_STOPS
        .iter()
        .map(|&l| Color::from_hsl(Hsl::new(hsl.h, hsl.s, l)).to_hex())
        .collect()
}

/// Resize `base` to exactly `target` colors.
///
/// Shrinking truncates. Growing keeps the base colors and appends variants
/// cycling through the base set: every full cycle (a "round") rotates hue
/// further and alternates darker/lighter with growing distance. A variant
/// that repeats an earlier color is retried along a hue and lightness ladder,
/// tinting gray sources, until it is new.
pub fn expand_palette<S: AsRef<str>>(base: &[S], target: usize) -> Vec<String> {
    let base: Vec<&str> = if base.is_empty() {
        vec![FALLBACK_COLOR]
    } else {
        base.iter().map(AsRef::as_ref).collect()
    };

    if target <= base.len() {
        return base[..target].iter().map(|s| s.to_string()).collect();
    }

    let n = base.len();
    let sources: Vec<Color> = base.iter().map(|s| Color::parse_or_fallback(s)).collect();
    let mut seen: HashSet<String> = sources.iter().map(|c| c.to_hex()).collect();
    let mut colors: Vec<String> = base.iter().map(|s| s.to_string()).collect();

    for i in n..target {
        let round = i / n;
        let src = sources[i % n].to_hsl();
        let hex = (0..MAX_RETRIES)
            .map(|attempt| expansion_variant(src, round, attempt))
            .find(|hex| !seen.contains(hex))
            .unwrap_or_else(|| expansion_variant(src, round, 0));
        seen.insert(hex.clone());
        colors.push(hex);
    }
    colors
}

fn expansion_variant(src: Hsl, round: usize, attempt: usize) -> String {
    let distance = EXPANSION_LIGHTNESS_STEP * round.div_ceil(2) as f64;
    let l = if round % 2 == 1 {
        src.l - distance
    } else {
        src.l + distance
    };
    let h = src.h + EXPANSION_HUE_STEP * round as f64;
    if attempt == 0 {
        return hsl_to_hex(Hsl::new(h, src.s, l.clamp(15.0, 85.0)));
    }

    let k = attempt as f64;
    let l = 15.0 + (l - 15.0 + k * RETRY_LIGHTNESS_STEP).rem_euclid(70.0);
    let s = src.s.max(RETRY_MIN_SATURATION);
    hsl_to_hex(Hsl::new(h + k * RETRY_HUE_STEP, s, l))
}
