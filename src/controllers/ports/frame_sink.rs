use crate::controllers::rendering::events::RenderEvent;

/// Receives finished frames and render failures, e.g. a display surface.
pub trait FrameSink: Send + Sync {
    fn present(&self, event: RenderEvent);
}
