//! Monochromatic palettes: sweep HSL lightness around the base color while
//! hue and saturation stay fixed.

use crate::color::{Rgb, hsl_to_rgb, rgb_to_hsl};

/// Lightest lightness the sweep produces.
pub const LIGHTNESS_CEILING: f64 = 0.99;
/// Darkest lightness the sweep produces.
pub const LIGHTNESS_FLOOR: f64 = 0.01;

/// Index at which the unmodified base sits in a palette of `count` colors.
pub fn base_index(count: usize) -> usize {
    count / 2
}

/// `count` colors ordered from lightest to darkest with `base` at
/// `count / 2`.
///
/// Colors before the base descend from [`LIGHTNESS_CEILING`] toward the
/// base lightness; colors after it descend toward [`LIGHTNESS_FLOOR`].
/// A side with no entries is skipped entirely, so `count` of 0 or 1 gives
/// `[base]` and `count` of 2 gives `[lightest, base]`.
pub fn monochromatic(base: Rgb, count: usize) -> Vec<Rgb> {
    let hsl = rgb_to_hsl(base);
    let l0 = hsl.l;
    let lighter = base_index(count);
    let darker = count.saturating_sub(lighter + 1);

    let mut out = Vec::with_capacity(count.max(1));

    if lighter > 0 {
        let step = (LIGHTNESS_CEILING - l0) / lighter as f64;
        for i in 0..lighter {
            let l = (LIGHTNESS_CEILING - i as f64 * step).min(LIGHTNESS_CEILING);
            out.push(hsl_to_rgb(hsl.with_lightness(l)));
        }
    }

    out.push(base);

    if darker > 0 {
        let step = (l0 - LIGHTNESS_FLOOR) / darker as f64;
        for i in 1..=darker {
            let l = (l0 - i as f64 * step).max(LIGHTNESS_FLOOR);
            out.push(hsl_to_rgb(hsl.with_lightness(l)));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{hex_to_rgb, rgb_to_hex};

    fn lightness(colors: &[Rgb]) -> Vec<f64> {
        colors.iter().map(|c| rgb_to_hsl(*c).l).collect()
    }

    #[test]
    fn base_sits_in_the_middle() {
        let base = hex_to_rgb("#6366F1");
        for count in 3..=50 {
            let out = monochromatic(base, count);
            assert_eq!(out.len(), count, "count {count}");
            assert_eq!(out[count / 2], base, "count {count}");
        }
    }

    #[test]
    fn lightness_is_non_increasing() {
        for hex in ["#6366F1", "#3366CC", "#E11D48", "#10B981", "#808080", "#1E293B"] {
            let base = hex_to_rgb(hex);
            for count in [3, 4, 5, 10, 17, 50] {
                let ls = lightness(&monochromatic(base, count));
                for pair in ls.windows(2) {
                    assert!(
                        pair[1] <= pair[0] + 1e-12,
                        "{hex} x{count}: {} then {}",
                        pair[0],
                        pair[1]
                    );
                }
            }
        }
    }

    #[test]
    fn ends_near_the_lightness_bounds() {
        let out = monochromatic(hex_to_rgb("#3366CC"), 9);
        let first = rgb_to_hsl(out[0]).l;
        let last = rgb_to_hsl(out[8]).l;
        assert!(first > 0.97, "first lightness {first}");
        assert!(last < 0.03, "last lightness {last}");
    }

    #[test]
    fn keeps_hue_of_the_base() {
        let base = hex_to_rgb("#E11D48");
        let h0 = rgb_to_hsl(base).h;
        // skip the extremes where 8-bit rounding blurs the hue
        let out = monochromatic(base, 7);
        for c in &out[1..6] {
            assert!((rgb_to_hsl(*c).h - h0).abs() < 0.02, "{c:?}");
        }
    }

    #[test]
    fn black_base_does_not_blow_up() {
        let out = monochromatic(hex_to_rgb("#000000"), 5);
        assert_eq!(out.len(), 5);
        assert_eq!(rgb_to_hex(out[2]), "#000000");
        // the floor clamps the darker side to 1% lightness
        assert_eq!(out[3], Rgb::new(3, 3, 3));
    }

    #[test]
    fn tiny_counts() {
        let base = Rgb::new(40, 80, 160);
        assert_eq!(monochromatic(base, 0), vec![base]);
        assert_eq!(monochromatic(base, 1), vec![base]);

        let two = monochromatic(base, 2);
        assert_eq!(two.len(), 2);
        assert_eq!(two[1], base);
        assert!(rgb_to_hsl(two[0]).l > 0.97);
    }
}
