/*
 * Palette Module
 *
 * Sequential yellow-green-blue color ramp used to color boids by speed.
 * Slow boids are pale yellow, boids at max_velocity are deep blue.
 */

// Nine-class YlGnBu stops, light to dark
const YL_GN_BU: [[u8; 3]; 9] = [
    [0xff, 0xff, 0xd9],
    [0xed, 0xf8, 0xb1],
    [0xc7, 0xe9, 0xb4],
    [0x7f, 0xcd, 0xbb],
    [0x41, 0xb6, 0xc4],
    [0x1d, 0x91, 0xc0],
    [0x22, 0x5e, 0xa8],
    [0x25, 0x34, 0x94],
    [0x08, 0x1d, 0x58],
];

// Sample the ramp at t in [0, 1], clamped. Returns linear RGB in [0, 1].
pub fn yl_gn_bu(t: f32) -> [f32; 3] {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let scaled = t * (YL_GN_BU.len() - 1) as f32;
    let i = (scaled.floor() as usize).min(YL_GN_BU.len() - 2);
    let frac = scaled - i as f32;

    let lo = YL_GN_BU[i];
    let hi = YL_GN_BU[i + 1];
    let mut rgb = [0.0; 3];
    for c in 0..3 {
        let a = lo[c] as f32 / 255.0;
        let b = hi[c] as f32 / 255.0;
        rgb[c] = a + (b - a) * frac;
    }
    rgb
}

// Map a speed onto the ramp over the domain [0, max_velocity]
pub fn speed_color(speed: f32, max_velocity: f32) -> [f32; 3] {
    if max_velocity <= 0.0 {
        return yl_gn_bu(0.0);
    }
    yl_gn_bu(speed / max_velocity)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: [f32; 3], b: [u8; 3]) -> bool {
        a.iter()
            .zip(b.iter())
            .all(|(x, y)| (x - *y as f32 / 255.0).abs() < 1e-5)
    }

    #[test]
    fn ramp_endpoints_match_first_and_last_stops() {
        assert!(approx(yl_gn_bu(0.0), YL_GN_BU[0]));
        assert!(approx(yl_gn_bu(1.0), YL_GN_BU[8]));
    }

    #[test]
    fn out_of_domain_values_are_clamped() {
        assert_eq!(yl_gn_bu(-3.0), yl_gn_bu(0.0));
        assert_eq!(yl_gn_bu(7.0), yl_gn_bu(1.0));
        assert_eq!(yl_gn_bu(f32::NAN), yl_gn_bu(0.0));
    }

    #[test]
    fn faster_boids_are_darker() {
        let luminance = |c: [f32; 3]| c[0] + c[1] + c[2];
        let slow = luminance(speed_color(0.2, 2.0));
        let fast = luminance(speed_color(1.8, 2.0));
        assert!(fast < slow);
    }

    #[test]
    fn zero_max_velocity_maps_to_lightest_stop() {
        assert!(approx(speed_color(1.0, 0.0), YL_GN_BU[0]));
    }
}
