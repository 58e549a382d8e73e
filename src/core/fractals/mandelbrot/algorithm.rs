use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex;

const ESCAPE_RADIUS: f64 = 2.0;

/// Smoothed escape time of `c` under `z <- z² + c`, in `[0, max_iterations]`.
///
/// An escaping point returns its 1-based escape iteration minus `ln(log2(|z|))`,
/// clamped at zero. A point that survives the whole budget returns
/// `max_iterations - 1`.
#[must_use]
pub fn smooth_escape(c: Complex, max_iterations: u32) -> f64 {
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        z = z * z + c;
        let magnitude = z.magnitude();

        if magnitude > ESCAPE_RADIUS {
            let completed = (iteration + 1) as f64;
            return (completed - magnitude.log2().ln()).max(0.0);
        }
    }

    max_iterations.saturating_sub(1) as f64
}

/// Escape-time evaluation bound to one view snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    resolution: Resolution,
    focus: Complex,
    scale: f64,
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = f64;

    fn resolution(&self) -> Resolution {
        self.resolution
    }

    fn compute(&self, pixel: Point) -> Self::Success {
        let c = pixel_to_complex(
            pixel.x as f64,
            pixel.y as f64,
            self.resolution,
            self.focus,
            self.scale,
        );

        smooth_escape(c, self.max_iterations)
    }
}

impl MandelbrotAlgorithm {
    pub fn new(
        resolution: Resolution,
        focus: Complex,
        scale: f64,
        max_iterations: u32,
    ) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        if !(scale.is_finite() && scale > 0.0) {
            return Err(MandelbrotError::InvalidScaleError { scale });
        }

        if !focus.is_finite() {
            return Err(MandelbrotError::NonFiniteFocusError);
        }

        Ok(Self {
            resolution,
            focus,
            scale,
            max_iterations,
        })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}
