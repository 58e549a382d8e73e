use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::resolution::Resolution;
use crate::core::fractals::mandelbrot::render::{RenderViewportError, render_cancelable};
use crate::core::fractals::mandelbrot::viewport_state::ViewportState;
use crate::core::actions::cancellation::CancelToken;

/// Snapshot of everything needed for one render job.
///
/// Taken when the render is requested, so later viewport changes never leak
/// into a render that is already running.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pub resolution: Resolution,
    pub viewport: ViewportState,
}

impl RenderRequest {
    #[must_use]
    pub fn new(resolution: Resolution, viewport: ViewportState) -> Self {
        Self {
            resolution,
            viewport,
        }
    }

    pub(crate) fn render<C: CancelToken + ?Sized>(
        &self,
        cancel: &C,
    ) -> Result<FrameBuffer, RenderViewportError> {
        render_cancelable(&self.viewport, self.resolution, cancel)
    }
}
