use crate::controllers::rendering::data::render_request::RenderRequest;

pub trait RenderScheduler {
    /// Queues a full render of `request` and returns its generation number.
    /// Generations increase by one per call, starting at 1.
    fn schedule(&self, request: RenderRequest) -> u64;
}
