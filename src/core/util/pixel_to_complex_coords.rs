use crate::core::data::complex::Complex;
use crate::core::data::resolution::Resolution;

// Plane units per pixel at scale 1.0: a quarter of the shorter side spans one unit,
// so the default view covers roughly [-2, 2].
fn pixels_per_unit(resolution: Resolution) -> f64 {
    resolution.min_side() as f64 * 0.25
}

// Integer halves so the centre pixel lands exactly on the focus.
fn centre(resolution: Resolution) -> (f64, f64) {
    (
        (resolution.width() / 2) as f64,
        (resolution.height() / 2) as f64,
    )
}

/// Maps a pixel coordinate to the complex plane for the given view.
#[must_use]
pub fn pixel_to_complex(
    x: f64,
    y: f64,
    resolution: Resolution,
    focus: Complex,
    scale: f64,
) -> Complex {
    let (centre_x, centre_y) = centre(resolution);
    let offset = Complex::new(x - centre_x, y - centre_y);

    offset / pixels_per_unit(resolution) * scale + focus
}

/// Inverse of [`pixel_to_complex`], returning fractional pixel coordinates.
#[must_use]
pub fn complex_to_pixel(
    c: Complex,
    resolution: Resolution,
    focus: Complex,
    scale: f64,
) -> (f64, f64) {
    let (centre_x, centre_y) = centre(resolution);
    let offset = (c - focus) / scale * pixels_per_unit(resolution);

    (offset.real + centre_x, offset.imag + centre_y)
}

/// Plane distance covered by a pixel displacement at the given scale.
#[must_use]
pub fn pixel_delta_to_complex(dx: f64, dy: f64, resolution: Resolution, scale: f64) -> Complex {
    Complex::new(dx, dy) / pixels_per_unit(resolution) * scale
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn resolution(width: u32, height: u32) -> Resolution {
        Resolution::new(width, height).unwrap()
    }

    #[test]
    fn test_centre_pixel_maps_to_focus() {
        let focus = Complex::new(-0.75, 0.1);

        let result = pixel_to_complex(50.0, 50.0, resolution(100, 100), focus, 0.5);

        assert_eq!(result, focus);
    }

    #[test]
    fn test_centre_pixel_of_odd_resolution_maps_to_focus() {
        let focus = Complex::new(0.3, -0.2);

        let result = pixel_to_complex(50.0, 33.0, resolution(101, 67), focus, 2.0);

        assert_eq!(result, focus);
    }

    #[test]
    fn test_default_view_spans_classic_range() {
        let res = resolution(100, 100);

        let top_left = pixel_to_complex(0.0, 0.0, res, Complex::ZERO, 1.0);
        let right_edge = pixel_to_complex(100.0, 50.0, res, Complex::ZERO, 1.0);

        assert_eq!(top_left, Complex::new(-2.0, -2.0));
        assert_eq!(right_edge, Complex::new(2.0, 0.0));
    }

    #[test]
    fn test_shorter_side_sets_the_unit() {
        // 200x100: a quarter of the height (25px) is one unit
        let result = pixel_to_complex(125.0, 50.0, resolution(200, 100), Complex::ZERO, 1.0);

        assert_eq!(result, Complex::new(1.0, 0.0));
    }

    #[test]
    fn test_scale_shrinks_the_view() {
        let result = pixel_to_complex(0.0, 50.0, resolution(100, 100), Complex::ZERO, 0.25);

        assert_eq!(result, Complex::new(-0.5, 0.0));
    }

    #[test]
    fn test_is_bit_reproducible() {
        let res = resolution(640, 480);
        let focus = Complex::new(-1.0079296875, 0.3112109375);

        let a = pixel_to_complex(17.0, 311.0, res, focus, 1.953125e-3);
        let b = pixel_to_complex(17.0, 311.0, res, focus, 1.953125e-3);

        assert_eq!(a.real.to_bits(), b.real.to_bits());
        assert_eq!(a.imag.to_bits(), b.imag.to_bits());
    }

    #[test]
    fn test_round_trip_within_epsilon() {
        let res = resolution(640, 480);
        let focus = Complex::new(-0.7453, 0.1127);
        let scale = 0.005;

        for &(x, y) in &[(0.0, 0.0), (639.0, 479.0), (320.0, 240.0), (17.0, 401.0)] {
            let c = pixel_to_complex(x, y, res, focus, scale);
            let (px, py) = complex_to_pixel(c, res, focus, scale);

            assert!((px - x).abs() < EPSILON, "x: {} -> {}", x, px);
            assert!((py - y).abs() < EPSILON, "y: {} -> {}", y, py);
        }
    }

    #[test]
    fn test_pixel_delta_matches_transform_difference() {
        let res = resolution(300, 200);
        let focus = Complex::new(0.25, -0.5);
        let scale = 0.125;

        let a = pixel_to_complex(10.0, 20.0, res, focus, scale);
        let b = pixel_to_complex(40.0, -5.0, res, focus, scale);
        let delta = pixel_delta_to_complex(30.0, -25.0, res, scale);

        assert!(((b - a).real - delta.real).abs() < EPSILON);
        assert!(((b - a).imag - delta.imag).abs() < EPSILON);
    }
}
