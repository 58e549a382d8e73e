use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled};
use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::frame_buffer::{BYTES_PER_PIXEL, RowResult};
use crate::core::data::point::Point;

/// Computes and colours one row. Polls `cancel` at the row start and every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels after that.
pub(crate) fn render_row<Alg, CMap, C>(
    y: i32,
    algorithm: &Alg,
    colour_map: &CMap,
    cancel: &C,
) -> Result<RowResult, Cancelled>
where
    Alg: FractalAlgorithm + ?Sized,
    CMap: ColourMap<Alg::Success> + ?Sized,
    C: CancelToken + ?Sized,
{
    let width = algorithm.resolution().width() as i32;
    let mut row = Vec::with_capacity(width as usize * BYTES_PER_PIXEL);

    for (i, x) in (0..width).enumerate() {
        if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
            return Err(Cancelled);
        }

        let colour = colour_map.map(algorithm.compute(Point { x, y }));
        row.extend_from_slice(&[colour.r, colour.g, colour.b]);
    }

    Ok(row)
}
