//! Port definitions for the controllers.
//!
//! Traits describing what the controllers need from the outside world: somewhere
//! to deliver finished frames, something that runs renders, and somewhere to write
//! a frame to disk.

pub mod file_presenter;
pub mod frame_sink;
pub mod render_scheduler;
