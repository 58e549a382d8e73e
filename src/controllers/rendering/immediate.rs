use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use log::{info, warn};

use crate::controllers::ports::frame_sink::FrameSink;
use crate::controllers::ports::render_scheduler::RenderScheduler;
use crate::controllers::rendering::data::frame_data::FrameData;
use crate::controllers::rendering::data::render_request::RenderRequest;
use crate::controllers::rendering::events::{RenderError, RenderEvent};
use crate::core::actions::cancellation::NeverCancel;

/// Renders on the calling thread; `schedule` returns once the frame is presented.
pub struct ImmediateRenderer {
    generation: AtomicU64,
    sink: Arc<dyn FrameSink>,
}

impl ImmediateRenderer {
    pub fn new(sink: Arc<dyn FrameSink>) -> Self {
        Self {
            generation: AtomicU64::new(0),
            sink,
        }
    }
}

impl RenderScheduler for ImmediateRenderer {
    fn schedule(&self, request: RenderRequest) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let start = Instant::now();
        let result = request.render(&NeverCancel);
        let render_duration = start.elapsed();

        match result {
            Ok(frame) => {
                info!(
                    "generation {} rendered {}x{} in {:?}",
                    generation,
                    request.resolution.width(),
                    request.resolution.height(),
                    render_duration
                );
                self.sink.present(RenderEvent::Frame(FrameData {
                    generation,
                    frame,
                    render_duration,
                }));
            }
            Err(err) => {
                warn!("generation {} failed: {}", generation, err);
                self.sink.present(RenderEvent::Error(RenderError {
                    generation,
                    message: err.to_string(),
                }));
            }
        }

        generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::rendering::latest_frame::LatestFrameSink;
    use crate::core::data::colour::Colour;
    use crate::core::data::complex::Complex;
    use crate::core::data::resolution::Resolution;
    use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourModeKind;
    use crate::core::fractals::mandelbrot::colour_mapping::palette::Palette;
    use crate::core::fractals::mandelbrot::viewport_state::ViewportState;

    fn request() -> RenderRequest {
        let viewport = ViewportState::new(
            Complex::ZERO,
            1.0,
            20,
            ColourModeKind::Simple,
            Palette::new(&[Colour::BLACK, Colour::WHITE]).unwrap(),
        )
        .unwrap();

        RenderRequest::new(Resolution::new(6, 4).unwrap(), viewport)
    }

    #[test]
    fn schedule_presents_frame_before_returning() {
        let sink = Arc::new(LatestFrameSink::new());
        let renderer = ImmediateRenderer::new(Arc::clone(&sink) as Arc<dyn FrameSink>);

        let generation = renderer.schedule(request());
        let frame = sink.take_frame().expect("frame should be presented");

        assert_eq!(generation, 1);
        assert_eq!(frame.generation, 1);
        assert_eq!(frame.frame.buffer_size(), 6 * 4 * 3);
    }

    #[test]
    fn generations_increase() {
        let sink = Arc::new(LatestFrameSink::new());
        let renderer = ImmediateRenderer::new(Arc::clone(&sink) as Arc<dyn FrameSink>);

        assert_eq!(renderer.schedule(request()), 1);
        assert_eq!(renderer.schedule(request()), 2);
        assert_eq!(sink.take_frame().map(|f| f.generation), Some(2));
    }
}
