use std::sync::{Mutex, PoisonError};

use crate::controllers::ports::frame_sink::FrameSink;
use crate::controllers::rendering::data::frame_data::FrameData;
use crate::controllers::rendering::events::{RenderError, RenderEvent};

/// Keeps only the newest frame and the newest error, for headless use.
#[derive(Debug, Default)]
pub struct LatestFrameSink {
    frame: Mutex<Option<FrameData>>,
    error: Mutex<Option<RenderError>>,
}

impl LatestFrameSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take_frame(&self) -> Option<FrameData> {
        self.frame
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    pub fn take_error(&self) -> Option<RenderError> {
        self.error
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

impl FrameSink for LatestFrameSink {
    fn present(&self, event: RenderEvent) {
        match event {
            RenderEvent::Frame(frame) => {
                let mut guard = self.frame.lock().unwrap_or_else(PoisonError::into_inner);
                // out-of-order delivery must never replace a newer frame
                if guard.as_ref().is_none_or(|current| current.generation < frame.generation) {
                    *guard = Some(frame);
                }
            }
            RenderEvent::Error(error) => {
                *self.error.lock().unwrap_or_else(PoisonError::into_inner) = Some(error);
            }
        }
    }
}
