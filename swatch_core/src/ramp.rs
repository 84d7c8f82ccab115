//! Linear ramps from a base color toward a fixed target.
//!
//! Index 0 is always the base itself; indices `1..count` move each channel
//! `i / count` of the way to the target. The fraction never reaches 1.

use crate::color::Rgb;

/// Mix toward black.
pub fn shades(base: Rgb, count: usize) -> Vec<Rgb> {
    ramp(base, count, |c, t| c * (1.0 - t))
}

/// Mix toward white.
pub fn tints(base: Rgb, count: usize) -> Vec<Rgb> {
    ramp(base, count, |c, t| c + (255.0 - c) * t)
}

/// Mix toward mid-gray (128 on every channel).
pub fn tones(base: Rgb, count: usize) -> Vec<Rgb> {
    ramp(base, count, |c, t| c + (128.0 - c) * t)
}

// `mix` receives a channel value and the fraction `i / count`.
fn ramp(base: Rgb, count: usize, mix: impl Fn(f64, f64) -> f64) -> Vec<Rgb> {
    let mut out = Vec::with_capacity(count.max(1));
    out.push(base);

    let r = base.r as f64;
    let g = base.g as f64;
    let b = base.b as f64;

    for i in 1..count {
        let factor = i as f64 / count as f64;
        out.push(Rgb::from_channels(
            mix(r, factor),
            mix(g, factor),
            mix(b, factor),
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{hex_to_rgb, rgb_to_hex};

    fn hexes(colors: &[Rgb]) -> Vec<String> {
        colors.iter().copied().map(rgb_to_hex).collect()
    }

    #[test]
    fn shades_of_white() {
        let out = shades(hex_to_rgb("#FFFFFF"), 4);
        assert_eq!(hexes(&out), ["#ffffff", "#bfbfbf", "#808080", "#404040"]);
    }

    #[test]
    fn shades_darken_every_channel() {
        let base = hex_to_rgb("#6464C8");
        let out = shades(base, 4);

        assert_eq!(out.len(), 4);
        assert_eq!(rgb_to_hex(out[0]), "#6464c8");
        for pair in out.windows(2) {
            assert!(pair[1].r <= pair[0].r);
            assert!(pair[1].g <= pair[0].g);
            assert!(pair[1].b <= pair[0].b);
        }
        let last = out[3];
        assert!(last.r < base.r && last.g < base.g && last.b < base.b);
        // factor 0.25
        assert_eq!(last, Rgb::new(25, 25, 50));
    }

    #[test]
    fn tints_move_toward_white() {
        let base = Rgb::new(0, 100, 255);
        let out = tints(base, 5);

        assert_eq!(out[0], base);
        for pair in out.windows(2) {
            for (a, b) in pair[0].channels().into_iter().zip(pair[1].channels()) {
                assert!(b >= a);
            }
        }
        // factor 0.8 of the way: 0 + 255 * 0.8 = 204, 100 + 155 * 0.8 = 224
        assert_eq!(out[4], Rgb::new(204, 224, 255));
    }

    #[test]
    fn tones_move_toward_gray_from_both_sides() {
        let base = Rgb::new(0, 128, 255);
        let out = tones(base, 4);

        assert_eq!(out[0], base);
        for pair in out.windows(2) {
            assert!(pair[1].r >= pair[0].r);
            assert_eq!(pair[1].g, 128);
            assert!(pair[1].b <= pair[0].b);
        }
        // factor 0.75: 0 + 128 * 0.75 = 96, 255 - 127 * 0.75 = 159.75
        assert_eq!(out[3], Rgb::new(96, 128, 160));
    }

    #[test]
    fn small_counts_yield_only_the_base() {
        let base = Rgb::new(10, 20, 30);
        for count in [0, 1] {
            assert_eq!(shades(base, count), vec![base]);
            assert_eq!(tints(base, count), vec![base]);
            assert_eq!(tones(base, count), vec![base]);
        }
    }
}
