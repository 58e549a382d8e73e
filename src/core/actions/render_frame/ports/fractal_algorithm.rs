use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;

/// Per-pixel computation over a fixed frame.
pub trait FractalAlgorithm {
    type Success;

    fn resolution(&self) -> Resolution;

    fn compute(&self, pixel: Point) -> Self::Success;
}
