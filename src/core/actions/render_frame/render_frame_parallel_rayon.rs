use rayon::prelude::*;

use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::render_frame::render_row::render_row;
use crate::core::data::frame_buffer::{FrameBuffer, FrameBufferError, RowResult};

/// Error type for cancelable frame rendering.
///
/// Cancellation is expected control flow when a newer request supersedes
/// this one; callers should drop it silently rather than report it.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderFrameError {
    Cancelled(Cancelled),
    FrameBuffer(FrameBufferError),
}

impl std::fmt::Display for RenderFrameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderFrameError::Cancelled(c) => write!(f, "{}", c),
            RenderFrameError::FrameBuffer(e) => write!(f, "frame buffer error: {}", e),
        }
    }
}

impl std::error::Error for RenderFrameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderFrameError::Cancelled(c) => Some(c),
            RenderFrameError::FrameBuffer(e) => Some(e),
        }
    }
}

impl From<FrameBufferError> for RenderFrameError {
    fn from(err: FrameBufferError) -> Self {
        Self::FrameBuffer(err)
    }
}

/// Renders a full frame with one rayon task per row.
///
/// Rows only read the algorithm and colour map; the finished rows are merged
/// into the frame on the calling thread once every task has joined.
pub fn render_frame_parallel_rayon<Alg, CMap>(
    algorithm: &Alg,
    colour_map: &CMap,
) -> Result<FrameBuffer, FrameBufferError>
where
    Alg: FractalAlgorithm + Sync + ?Sized,
    CMap: ColourMap<Alg::Success> + Sync + ?Sized,
{
    render_frame_parallel_rayon_cancelable(algorithm, colour_map, &NeverCancel).map_err(|e| {
        match e {
            RenderFrameError::FrameBuffer(err) => err,
            RenderFrameError::Cancelled(_) => {
                unreachable!("NeverCancel token should never signal cancellation")
            }
        }
    })
}

/// Like [`render_frame_parallel_rayon`], but gives up as soon as `cancel` reports
/// true. Rows poll the token at their start and periodically within the row.
pub fn render_frame_parallel_rayon_cancelable<Alg, CMap, C>(
    algorithm: &Alg,
    colour_map: &CMap,
    cancel: &C,
) -> Result<FrameBuffer, RenderFrameError>
where
    Alg: FractalAlgorithm + Sync + ?Sized,
    CMap: ColourMap<Alg::Success> + Sync + ?Sized,
    C: CancelToken + ?Sized,
{
    let resolution = algorithm.resolution();

    let rows: Result<Vec<RowResult>, Cancelled> = (0..resolution.height() as i32)
        .into_par_iter()
        .map(|y| render_row(y, algorithm, colour_map, cancel))
        .collect();

    let rows = rows.map_err(RenderFrameError::Cancelled)?;

    Ok(FrameBuffer::from_rows(resolution, rows)?)
}
