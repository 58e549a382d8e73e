mod controllers;
mod core;
mod presenters;

pub use controllers::cli::controller::CliController;
pub use controllers::ports::{
    file_presenter::FilePresenterPort, frame_sink::FrameSink, render_scheduler::RenderScheduler,
};
pub use controllers::rendering::data::{frame_data::FrameData, render_request::RenderRequest};
pub use controllers::rendering::events::{RenderError, RenderEvent};
pub use controllers::rendering::{BackgroundRenderer, ImmediateRenderer, LatestFrameSink};
pub use controllers::viewport::commands::{ViewportCommand, Zoom};
pub use controllers::viewport::config::ViewerConfig;
pub use controllers::viewport::controller::{CommandOutcome, ViewportController};
pub use controllers::viewport::errors::ViewportError;
pub use controllers::viewport::explicit_view::{
    ExplicitField, ExplicitView, FieldError, FieldErrorReason, FieldInput, ValidatedView,
};
pub use presenters::file::ppm::PpmFilePresenter;

pub use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
pub use crate::core::actions::render_frame::ports::{
    colour_map::ColourMap, fractal_algorithm::FractalAlgorithm,
};
pub use crate::core::actions::render_frame::render_frame_parallel_rayon::{
    RenderFrameError, render_frame_parallel_rayon, render_frame_parallel_rayon_cancelable,
};
pub use crate::core::actions::render_frame::render_frame_serial::render_frame_serial;
pub use crate::core::data::{
    colour::Colour,
    complex::Complex,
    frame_buffer::{FrameBuffer, FrameBufferError},
    point::Point,
    resolution::{Resolution, ResolutionError},
};
pub use crate::core::fractals::mandelbrot::algorithm::{MandelbrotAlgorithm, smooth_escape};
pub use crate::core::fractals::mandelbrot::colour_mapping::{
    errors::ColourMapError,
    factory::{colour_at, mandelbrot_colour_map_factory},
    kinds::ColourModeKind,
    map::MandelbrotColourMap,
    palette::{ColourStop, Palette, PaletteError},
};
pub use crate::core::fractals::mandelbrot::errors::MandelbrotError;
pub use crate::core::fractals::mandelbrot::presets::{
    COORDINATE_PRESETS, CoordinatePreset, PALETTE_PRESETS, PalettePreset, PaletteSource,
};
pub use crate::core::fractals::mandelbrot::render::{
    RenderViewportError, render, render_cancelable,
};
pub use crate::core::fractals::mandelbrot::viewport_state::{ViewportState, ViewportStateError};
pub use crate::core::util::pixel_to_complex_coords::{
    complex_to_pixel, pixel_delta_to_complex, pixel_to_complex,
};
