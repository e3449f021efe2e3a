//! Color math — RGB ↔ HSV without external dependencies.
//! RGB channels are bytes (0–255); HSV components are f64 in 0.0–1.0.

/// Component order for each hue sector, indexing into `[v, q, t, p]`.
const SECTORS: [[usize; 3]; 6] = [
    [0, 2, 3], // v, t, p
    [1, 0, 3], // q, v, p
    [3, 0, 2], // p, v, t
    [3, 1, 0], // p, q, v
    [2, 3, 0], // t, p, v
    [0, 3, 1], // v, p, q
];

fn to_byte(x: f64) -> u8 {
    (x * 255.0).round().clamp(0.0, 255.0) as u8
}

/// HSV → RGB. `h`, `s`, `v` in 0.0–1.0; `h == 1.0` wraps to red.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (u8, u8, u8) {
    let h6 = h * 6.0;
    let floor = h6.floor();
    let f = h6 - floor;
    let sector = (floor as i64).rem_euclid(6) as usize;

    let components = [
        to_byte(v),
        to_byte(v * (1.0 - f * s)),
        to_byte(v * (1.0 - (1.0 - f) * s)),
        to_byte(v * (1.0 - s)),
    ];
    let [r, g, b] = SECTORS[sector];
    (components[r], components[g], components[b])
}

/// RGB → HSV. Black and greys report a hue (and for black a saturation) of 0.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let (r, g, b) = (r as f64, g as f64, b as f64);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    if max == 0.0 {
        return (0.0, 0.0, 0.0);
    }
    let v = max / 255.0;
    let delta = max - min;
    let s = delta / max;
    if delta == 0.0 {
        return (0.0, s, v);
    }

    let mut h = if r == max {
        (g - b) / delta
    } else if g == max {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };
    h /= 6.0;
    if h < 0.0 {
        h += 1.0;
    }

    (h, s, v)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_black_and_grey() {
        assert_eq!(rgb_to_hsv(0, 0, 0), (0.0, 0.0, 0.0));
        let (h, s, v) = rgb_to_hsv(128, 128, 128);
        assert_eq!(h, 0.0);
        assert_eq!(s, 0.0);
        assert!(close(v, 128.0 / 255.0));
    }

    #[test]
    fn test_primary_hues() {
        let (h, s, v) = rgb_to_hsv(255, 0, 0);
        assert!(close(h, 0.0) && close(s, 1.0) && close(v, 1.0));
        let (h, _, _) = rgb_to_hsv(0, 255, 0);
        assert!(close(h, 1.0 / 3.0));
        let (h, _, _) = rgb_to_hsv(0, 0, 255);
        assert!(close(h, 2.0 / 3.0));
    }

    #[test]
    fn test_negative_hue_wraps() {
        // magenta-ish red: red max, blue above green
        let (h, _, _) = rgb_to_hsv(255, 0, 128);
        assert!(h > 0.9 && h < 1.0);
    }

    #[test]
    fn test_sector_boundaries() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), (255, 0, 0));
        assert_eq!(hsv_to_rgb(1.0 / 3.0, 1.0, 1.0), (0, 255, 0));
        assert_eq!(hsv_to_rgb(2.0 / 3.0, 1.0, 1.0), (0, 0, 255));
        assert_eq!(hsv_to_rgb(1.0, 1.0, 1.0), hsv_to_rgb(0.0, 1.0, 1.0));
    }

    #[test]
    fn test_every_sector() {
        assert_eq!(hsv_to_rgb(1.0 / 6.0, 1.0, 1.0), (255, 255, 0));
        assert_eq!(hsv_to_rgb(0.5, 1.0, 1.0), (0, 255, 255));
        assert_eq!(hsv_to_rgb(5.0 / 6.0, 1.0, 1.0), (255, 0, 255));
        assert_eq!(hsv_to_rgb(0.75, 1.0, 1.0), (128, 0, 255));
    }

    #[test]
    fn test_achromatic_output() {
        assert_eq!(hsv_to_rgb(0.4, 0.0, 0.5), (128, 128, 128));
        assert_eq!(hsv_to_rgb(0.9, 1.0, 0.0), (0, 0, 0));
    }

    #[test]
    fn test_hsv_round_trip() {
        for r in (0..=255u16).step_by(3) {
            for g in (0..=255u16).step_by(5) {
                for b in (0..=255u16).step_by(7) {
                    let (r, g, b) = (r as u8, g as u8, b as u8);
                    let (h, s, v) = rgb_to_hsv(r, g, b);
                    let (r2, g2, b2) = hsv_to_rgb(h, s, v);
                    assert!((r as i16 - r2 as i16).abs() <= 1, "{r},{g},{b}");
                    assert!((g as i16 - g2 as i16).abs() <= 1, "{r},{g},{b}");
                    assert!((b as i16 - b2 as i16).abs() <= 1, "{r},{g},{b}");
                }
            }
        }
    }
}
