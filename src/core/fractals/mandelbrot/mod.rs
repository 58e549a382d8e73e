pub mod algorithm;
pub mod colour_mapping;
pub mod errors;
pub mod presets;
pub mod render;
pub mod viewport_state;
