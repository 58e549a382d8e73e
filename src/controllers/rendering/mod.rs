//! Render scheduling for the viewport controller.
//!
//! Two [`RenderScheduler`](crate::controllers::ports::render_scheduler::RenderScheduler)
//! implementations:
//! - [`ImmediateRenderer`]: renders synchronously on the caller's thread
//! - [`BackgroundRenderer`]: one worker thread, newest request wins, superseded
//!   renders are cancelled and their results dropped

mod background;
pub mod data;
pub mod events;
mod immediate;
mod latest_frame;

pub use background::BackgroundRenderer;
pub use immediate::ImmediateRenderer;
pub use latest_frame::LatestFrameSink;
