use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourModeKind;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::colour_mapping::palette::Palette;

/// Nearest-below palette lookup, no blending.
#[derive(Debug)]
pub struct MandelbrotSimple {
    palette: Palette,
    max_iterations: u32,
}

impl MandelbrotSimple {
    #[must_use]
    pub fn new(palette: Palette, max_iterations: u32) -> Self {
        Self {
            palette,
            max_iterations,
        }
    }
}

impl ColourMap<f64> for MandelbrotSimple {
    fn map(&self, iterations: f64) -> Colour {
        let (index, _) = self.palette.locate(iterations, self.max_iterations);
        self.palette.colour(index)
    }

    fn display_name(&self) -> &str {
        ColourModeKind::Simple.display_name()
    }
}

impl MandelbrotColourMap for MandelbrotSimple {
    fn kind(&self) -> ColourModeKind {
        ColourModeKind::Simple
    }
}
