use crate::core::data::raster::{OPAQUE_BLACK, pack_rgba};
use crate::core::util::map_value::map_value;

/// Escape counts cycle through the hue wheel every this many iterations.
pub const HUE_CYCLE: u32 = 64;
pub const SATURATION: f64 = 0.8;
pub const VALUE: f64 = 1.0;

/// Colours an escape count as a packed RGBA pixel.
///
/// Points that used the whole budget are inside the set and drawn black.
/// Everything else gets a hue from `(iterations mod 64) / 64` at fixed
/// saturation and full value.
#[inline]
#[must_use]
pub fn colour_for_iterations(iterations: u32, max_iterations: u32) -> u32 {
    if iterations >= max_iterations {
        return OPAQUE_BLACK;
    }

    let hue = map_value(
        f64::from(iterations % HUE_CYCLE),
        0.0,
        f64::from(HUE_CYCLE),
        0.0,
        1.0,
    );
    let (r, g, b) = hsv_to_rgb(hue, SATURATION, VALUE);

    pack_rgba(r, g, b, 255)
}

/// Six-sector HSV to RGB conversion. `hue` is in `[0, 1)`; channels are
/// truncated to 8 bits.
#[must_use]
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> (u8, u8, u8) {
    let h = hue * 6.0;
    let sector = h.floor();
    let f = h - sector;
    let p = value * (1.0 - saturation);
    let q = value * (1.0 - saturation * f);
    let t = value * (1.0 - saturation * (1.0 - f));

    let (r, g, b) = match (sector as i64).rem_euclid(6) {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    };

    (channel(r), channel(g), channel(b))
}

#[inline]
fn channel(component: f64) -> u8 {
    (component * 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unpack(pixel: u32) -> [u8; 4] {
        pixel.to_le_bytes()
    }

    #[test]
    fn test_inside_set_is_opaque_black() {
        assert_eq!(colour_for_iterations(100, 100), OPAQUE_BLACK);
        assert_eq!(unpack(colour_for_iterations(25, 25)), [0, 0, 0, 255]);
    }

    #[test]
    fn test_outside_set_is_opaque() {
        for iterations in 0..200 {
            assert_eq!(unpack(colour_for_iterations(iterations, 500))[3], 255);
        }
    }

    #[test]
    fn test_zero_iterations_is_red_sector() {
        let [r, g, b, _] = unpack(colour_for_iterations(0, 100));

        assert_eq!(r, 255);
        assert!((50..=51).contains(&g));
        assert!((50..=51).contains(&b));
    }

    #[test]
    fn test_quarter_cycle_is_green_dominant() {
        // hue 0.25 -> sector 1: (q, v, p)
        let [r, g, b, _] = unpack(colour_for_iterations(16, 100));

        assert_eq!(g, 255);
        assert!((152..=153).contains(&r));
        assert!((50..=51).contains(&b));
    }

    #[test]
    fn test_hue_repeats_every_cycle() {
        for iterations in 0..HUE_CYCLE {
            assert_eq!(
                colour_for_iterations(iterations, 1000),
                colour_for_iterations(iterations + HUE_CYCLE, 1000)
            );
        }
    }

    #[test]
    fn test_each_sector_has_expected_max_channel() {
        // Sector centres: 1/12, 3/12, ... 11/12.
        let expected_max = [0, 1, 1, 2, 2, 0];

        for (sector, &max_channel) in expected_max.iter().enumerate() {
            let hue = (sector as f64 + 0.5) / 6.0;
            let (r, g, b) = hsv_to_rgb(hue, SATURATION, VALUE);
            let channels = [r, g, b];

            assert_eq!(channels[max_channel], 255, "sector {} gave {:?}", sector, channels);
        }
    }

    #[test]
    fn test_zero_saturation_is_grey() {
        assert_eq!(hsv_to_rgb(0.3, 0.0, 1.0), (255, 255, 255));
        assert_eq!(hsv_to_rgb(0.7, 0.0, 0.0), (0, 0, 0));
    }
}
