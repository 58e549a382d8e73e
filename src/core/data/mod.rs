pub mod colour;
pub mod complex;
pub mod frame_buffer;
pub mod point;
pub mod resolution;
