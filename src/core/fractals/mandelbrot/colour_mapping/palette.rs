use crate::core::data::colour::Colour;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaletteError {
    Empty,
    ZeroSamples,
    StopOutOfRange { index: usize, position: f64 },
    StopsOutOfOrder { index: usize },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "palette must contain at least one colour"),
            Self::ZeroSamples => write!(f, "palette must be sampled at least once"),
            Self::StopOutOfRange { index, position } => {
                write!(f, "colour stop {} at {} is outside [0, 1]", index, position)
            }
            Self::StopsOutOfOrder { index } => {
                write!(f, "colour stop {} is before the previous stop", index)
            }
        }
    }
}

impl Error for PaletteError {}

/// A colour anchored at a relative position along a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColourStop {
    pub position: f64,
    pub colour: Colour,
}

impl ColourStop {
    #[must_use]
    pub const fn new(position: f64, colour: Colour) -> Self {
        Self { position, colour }
    }
}

/// Immutable, non-empty colour sequence. Clones share the same storage, so a
/// palette can be handed to every row task without copying.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colours: Arc<[Colour]>,
}

impl Palette {
    pub fn new(colours: &[Colour]) -> Result<Self, PaletteError> {
        if colours.is_empty() {
            return Err(PaletteError::Empty);
        }

        Ok(Self {
            colours: Arc::from(colours),
        })
    }

    /// Samples a stop gradient at `samples` evenly spaced positions across [0, 1].
    ///
    /// Positions before the first stop take its colour, positions after the
    /// last stop take the last colour.
    pub fn from_stops(stops: &[ColourStop], samples: usize) -> Result<Self, PaletteError> {
        if stops.is_empty() {
            return Err(PaletteError::Empty);
        }
        if samples == 0 {
            return Err(PaletteError::ZeroSamples);
        }

        for (index, stop) in stops.iter().enumerate() {
            if !(0.0..=1.0).contains(&stop.position) {
                return Err(PaletteError::StopOutOfRange {
                    index,
                    position: stop.position,
                });
            }
            if index > 0 && stop.position < stops[index - 1].position {
                return Err(PaletteError::StopsOutOfOrder { index });
            }
        }

        let colours: Vec<Colour> = (0..samples)
            .map(|i| {
                let position = if samples == 1 {
                    0.0
                } else {
                    i as f64 / (samples - 1) as f64
                };
                sample_stops(stops, position)
            })
            .collect();

        Self::new(&colours)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    // a Palette is never empty, kept for clippy's len-without-is-empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    #[must_use]
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    #[must_use]
    pub fn colour(&self, index: usize) -> Colour {
        self.colours[index.min(self.colours.len() - 1)]
    }

    /// Locates `iterations / max_iterations` on the palette.
    ///
    /// Returns the lower palette index, clamped to the last entry, and the
    /// fractional weight towards the next entry.
    #[must_use]
    pub fn locate(&self, iterations: f64, max_iterations: u32) -> (usize, f64) {
        let t = iterations / max_iterations.max(1) as f64;
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };

        let scaled = t * self.colours.len() as f64;
        let index = (scaled.floor() as usize).min(self.colours.len() - 1);

        (index, scaled.fract())
    }
}

fn sample_stops(stops: &[ColourStop], position: f64) -> Colour {
    let upper = stops.iter().position(|stop| stop.position >= position);

    match upper {
        None => stops[stops.len() - 1].colour,
        Some(0) => stops[0].colour,
        Some(index) => {
            let low = stops[index - 1];
            let high = stops[index];
            let span = high.position - low.position;

            if span <= 0.0 {
                high.colour
            } else {
                low.colour.lerp(high.colour, (position - low.position) / span)
            }
        }
    }
}
