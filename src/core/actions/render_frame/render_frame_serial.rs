use crate::core::actions::cancellation::NeverCancel;
use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::render_frame::render_row::render_row;
use crate::core::data::frame_buffer::{FrameBuffer, FrameBufferError};

/// Single-threaded reference renderer, used to check the parallel path.
pub fn render_frame_serial<Alg, CMap>(
    algorithm: &Alg,
    colour_map: &CMap,
) -> Result<FrameBuffer, FrameBufferError>
where
    Alg: FractalAlgorithm + ?Sized,
    CMap: ColourMap<Alg::Success> + ?Sized,
{
    let resolution = algorithm.resolution();

    let rows = (0..resolution.height() as i32)
        .map(|y| match render_row(y, algorithm, colour_map, &NeverCancel) {
            Ok(row) => row,
            Err(_) => unreachable!("NeverCancel token should never signal cancellation"),
        })
        .collect();

    FrameBuffer::from_rows(resolution, rows)
}
