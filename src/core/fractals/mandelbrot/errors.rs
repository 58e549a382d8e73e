use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MandelbrotError {
    ZeroMaxIterationsError,
    InvalidScaleError { scale: f64 },
    NonFiniteFocusError,
}

impl fmt::Display for MandelbrotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterationsError => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::InvalidScaleError { scale } => {
                write!(f, "Scale must be a positive finite number, got {}", scale)
            }
            Self::NonFiniteFocusError => {
                write!(f, "Focus must have finite coordinates")
            }
        }
    }
}

impl Error for MandelbrotError {}
