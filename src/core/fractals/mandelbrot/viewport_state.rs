use crate::core::data::complex::Complex;
use crate::core::data::resolution::Resolution;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_mapping::{
    errors::ColourMapError,
    factory::{check_palette, mandelbrot_colour_map_factory},
    kinds::ColourModeKind,
    map::MandelbrotColourMap,
    palette::Palette,
};
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportStateError {
    View(MandelbrotError),
    Colour(ColourMapError),
}

impl fmt::Display for ViewportStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::View(err) => write!(f, "invalid view: {}", err),
            Self::Colour(err) => write!(f, "invalid colouring: {}", err),
        }
    }
}

impl Error for ViewportStateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::View(err) => Some(err),
            Self::Colour(err) => Some(err),
        }
    }
}

impl From<MandelbrotError> for ViewportStateError {
    fn from(err: MandelbrotError) -> Self {
        Self::View(err)
    }
}

impl From<ColourMapError> for ViewportStateError {
    fn from(err: ColourMapError) -> Self {
        Self::Colour(err)
    }
}

fn check_scale(scale: f64) -> Result<(), MandelbrotError> {
    if !(scale.is_finite() && scale > 0.0) {
        return Err(MandelbrotError::InvalidScaleError { scale });
    }
    Ok(())
}

fn check_focus(focus: Complex) -> Result<(), MandelbrotError> {
    if !focus.is_finite() {
        return Err(MandelbrotError::NonFiniteFocusError);
    }
    Ok(())
}

/// Everything a render needs besides the resolution.
///
/// Setters validate before mutating, so a rejected value leaves the state as it was.
/// Clones are cheap: the palette is shared.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportState {
    focus: Complex,
    scale: f64,
    max_iterations: u32,
    colour_mode: ColourModeKind,
    palette: Palette,
    palette_preset: Option<usize>,
}

impl ViewportState {
    pub fn new(
        focus: Complex,
        scale: f64,
        max_iterations: u32,
        colour_mode: ColourModeKind,
        palette: Palette,
    ) -> Result<Self, ViewportStateError> {
        check_focus(focus)?;
        check_scale(scale)?;
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError.into());
        }
        check_palette(colour_mode, &palette)?;

        Ok(Self {
            focus,
            scale,
            max_iterations,
            colour_mode,
            palette,
            palette_preset: None,
        })
    }

    #[must_use]
    pub fn focus(&self) -> Complex {
        self.focus
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn colour_mode(&self) -> ColourModeKind {
        self.colour_mode
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Index into the palette preset table, `None` for a custom palette.
    #[must_use]
    pub fn palette_preset(&self) -> Option<usize> {
        self.palette_preset
    }

    pub fn set_focus(&mut self, focus: Complex) -> Result<(), MandelbrotError> {
        check_focus(focus)?;
        self.focus = focus;
        Ok(())
    }

    pub fn set_scale(&mut self, scale: f64) -> Result<(), MandelbrotError> {
        check_scale(scale)?;
        self.scale = scale;
        Ok(())
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) -> Result<(), MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        self.max_iterations = max_iterations;
        Ok(())
    }

    pub fn set_colour_mode(&mut self, colour_mode: ColourModeKind) -> Result<(), ColourMapError> {
        check_palette(colour_mode, &self.palette)?;
        self.colour_mode = colour_mode;
        Ok(())
    }

    pub fn set_palette(
        &mut self,
        palette: Palette,
        preset: Option<usize>,
    ) -> Result<(), ColourMapError> {
        check_palette(self.colour_mode, &palette)?;
        self.palette = palette;
        self.palette_preset = preset;
        Ok(())
    }

    /// Builds the per-pixel algorithm and colour map for one frame.
    pub fn build_pipeline(
        &self,
        resolution: Resolution,
    ) -> Result<(MandelbrotAlgorithm, Box<dyn MandelbrotColourMap>), ViewportStateError> {
        let algorithm =
            MandelbrotAlgorithm::new(resolution, self.focus, self.scale, self.max_iterations)?;
        let colour_map = mandelbrot_colour_map_factory(
            self.colour_mode,
            self.palette.clone(),
            self.max_iterations,
        )?;

        Ok((algorithm, colour_map))
    }
}
