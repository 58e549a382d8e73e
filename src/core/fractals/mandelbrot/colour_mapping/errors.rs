use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourModeKind;
use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColourMapError {
    PaletteTooShort {
        kind: ColourModeKind,
        required: usize,
        len: usize,
    },
    ZeroMaxIterations,
}

impl fmt::Display for ColourMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PaletteTooShort {
                kind,
                required,
                len,
            } => {
                write!(
                    f,
                    "{} colour mode needs at least {} palette colours, got {}",
                    kind, required, len
                )
            }
            Self::ZeroMaxIterations => {
                write!(f, "Maximum iterations must be greater than zero")
            }
        }
    }
}

impl Error for ColourMapError {}
