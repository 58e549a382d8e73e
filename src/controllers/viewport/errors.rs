use crate::core::data::resolution::ResolutionError;
use crate::core::fractals::mandelbrot::colour_mapping::errors::ColourMapError;
use crate::core::fractals::mandelbrot::colour_mapping::palette::PaletteError;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::viewport_state::ViewportStateError;
use std::{error::Error, fmt};

/// A command that could not be applied. The viewport is left as it was and nothing is rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewportError {
    UnknownCoordinatePreset { index: usize, count: usize },
    UnknownPalettePreset { index: usize, count: usize },
    UnknownColourMode { index: usize },
    View(MandelbrotError),
    Colour(ColourMapError),
    Palette(PaletteError),
    Resolution(ResolutionError),
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCoordinatePreset { index, count } => {
                write!(f, "no coordinate preset {} ({} available)", index, count)
            }
            Self::UnknownPalettePreset { index, count } => {
                write!(f, "no palette preset {} ({} available)", index, count)
            }
            Self::UnknownColourMode { index } => write!(f, "no colour mode {}", index),
            Self::View(err) => write!(f, "{}", err),
            Self::Colour(err) => write!(f, "{}", err),
            Self::Palette(err) => write!(f, "{}", err),
            Self::Resolution(err) => write!(f, "{}", err),
        }
    }
}

impl Error for ViewportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::View(err) => Some(err),
            Self::Colour(err) => Some(err),
            Self::Palette(err) => Some(err),
            Self::Resolution(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MandelbrotError> for ViewportError {
    fn from(err: MandelbrotError) -> Self {
        Self::View(err)
    }
}

impl From<ColourMapError> for ViewportError {
    fn from(err: ColourMapError) -> Self {
        Self::Colour(err)
    }
}

impl From<PaletteError> for ViewportError {
    fn from(err: PaletteError) -> Self {
        Self::Palette(err)
    }
}

impl From<ResolutionError> for ViewportError {
    fn from(err: ResolutionError) -> Self {
        Self::Resolution(err)
    }
}

impl From<ViewportStateError> for ViewportError {
    fn from(err: ViewportStateError) -> Self {
        match err {
            ViewportStateError::View(err) => Self::View(err),
            ViewportStateError::Colour(err) => Self::Colour(err),
        }
    }
}
