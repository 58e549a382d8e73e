use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourModeKind;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::colour_mapping::palette::Palette;

/// Cycles through the palette by rounded iteration count, independent of the budget.
#[derive(Debug)]
pub struct MandelbrotModulo {
    palette: Palette,
}

impl MandelbrotModulo {
    #[must_use]
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }
}

pub(crate) fn modulo_colour(palette: &Palette, iterations: f64) -> Colour {
    // negative and NaN saturate to 0
    let rounded = iterations.round() as usize;
    palette.colour(rounded % palette.len())
}

impl ColourMap<f64> for MandelbrotModulo {
    fn map(&self, iterations: f64) -> Colour {
        modulo_colour(&self.palette, iterations)
    }

    fn display_name(&self) -> &str {
        ColourModeKind::Modulo.display_name()
    }
}

impl MandelbrotColourMap for MandelbrotModulo {
    fn kind(&self) -> ColourModeKind {
        ColourModeKind::Modulo
    }
}
