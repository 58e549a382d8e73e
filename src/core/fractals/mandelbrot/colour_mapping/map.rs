use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourModeKind;

pub trait MandelbrotColourMap: ColourMap<f64> + Send + Sync {
    fn kind(&self) -> ColourModeKind;
}
