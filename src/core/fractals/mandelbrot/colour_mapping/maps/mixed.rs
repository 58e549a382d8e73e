use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourModeKind;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::colour_mapping::maps::modulo::modulo_colour;
use crate::core::fractals::mandelbrot::colour_mapping::maps::smooth::smooth_colour;
use crate::core::fractals::mandelbrot::colour_mapping::palette::Palette;

/// Red from the smooth blend, green from the modulo cycle, blue from the
/// un-blended base entry of the smooth lookup.
#[derive(Debug)]
pub struct MandelbrotMixed {
    palette: Palette,
    max_iterations: u32,
}

impl MandelbrotMixed {
    #[must_use]
    pub fn new(palette: Palette, max_iterations: u32) -> Self {
        Self {
            palette,
            max_iterations,
        }
    }
}

impl ColourMap<f64> for MandelbrotMixed {
    fn map(&self, iterations: f64) -> Colour {
        let smooth = smooth_colour(&self.palette, iterations, self.max_iterations);
        let banded = modulo_colour(&self.palette, iterations);
        let (index, _) = self.palette.locate(iterations, self.max_iterations);

        Colour {
            r: smooth.r,
            g: banded.g,
            b: self.palette.colour(index).b,
        }
    }

    fn display_name(&self) -> &str {
        ColourModeKind::Mixed.display_name()
    }
}

impl MandelbrotColourMap for MandelbrotMixed {
    fn kind(&self) -> ColourModeKind {
        ColourModeKind::Mixed
    }
}
