//! Compiled-in view and palette presets.

use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::colour_mapping::palette::{
    ColourStop, Palette, PaletteError,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinatePreset {
    pub name: &'static str,
    pub focus: Complex,
    pub scale: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaletteSource {
    Colours(&'static [Colour]),
    /// Stops resampled into `samples` evenly spaced colours at load time.
    Blend {
        stops: &'static [ColourStop],
        samples: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PalettePreset {
    pub name: &'static str,
    pub source: PaletteSource,
}

impl PalettePreset {
    pub fn load(&self) -> Result<Palette, PaletteError> {
        match self.source {
            PaletteSource::Colours(colours) => Palette::new(colours),
            PaletteSource::Blend { stops, samples } => Palette::from_stops(stops, samples),
        }
    }
}

pub const COORDINATE_PRESETS: &[CoordinatePreset] = &[
    CoordinatePreset {
        name: "Overview",
        focus: Complex::new(0.0, 0.0),
        scale: 1.0,
    },
    CoordinatePreset {
        name: "Spiral arm",
        focus: Complex::new(-1.0079296875, 0.3112109375),
        scale: 1.953125e-3,
    },
    CoordinatePreset {
        name: "Seahorse valley",
        focus: Complex::new(-0.7453, 0.1127),
        scale: 6.5e-3,
    },
    CoordinatePreset {
        name: "Elephant valley",
        focus: Complex::new(0.2925, 0.0149),
        scale: 1.0e-2,
    },
    CoordinatePreset {
        name: "Triple spiral",
        focus: Complex::new(-0.088, 0.654),
        scale: 1.25e-2,
    },
    CoordinatePreset {
        name: "Mini brot",
        focus: Complex::new(-1.7685, 0.0),
        scale: 2.0e-3,
    },
];

const BLACK_WHITE: &[Colour] = &[Colour::BLACK, Colour::WHITE];

const FIRE: &[Colour] = &[
    Colour::rgb(0, 0, 0),
    Colour::rgb(128, 0, 0),
    Colour::rgb(255, 69, 0),
    Colour::rgb(255, 165, 0),
    Colour::rgb(255, 255, 0),
    Colour::rgb(255, 255, 255),
];

const OCEAN: &[Colour] = &[
    Colour::rgb(0, 0, 128),
    Colour::rgb(0, 64, 192),
    Colour::rgb(0, 191, 255),
    Colour::rgb(224, 255, 255),
    Colour::rgb(255, 255, 255),
];

const BANDS: &[Colour] = &[
    Colour::rgb(66, 30, 15),
    Colour::rgb(25, 7, 26),
    Colour::rgb(9, 1, 47),
    Colour::rgb(4, 4, 73),
    Colour::rgb(0, 7, 100),
    Colour::rgb(12, 44, 138),
    Colour::rgb(24, 82, 177),
    Colour::rgb(57, 125, 209),
    Colour::rgb(134, 181, 229),
    Colour::rgb(211, 236, 248),
    Colour::rgb(241, 233, 191),
    Colour::rgb(248, 201, 95),
    Colour::rgb(255, 170, 0),
    Colour::rgb(204, 128, 0),
    Colour::rgb(153, 87, 0),
    Colour::rgb(106, 52, 3),
];

// white, alice blue, green yellow, purple, cornsilk, pink, black
const PASTEL_BLEND: &[ColourStop] = &[
    ColourStop::new(0.0, Colour::rgb(255, 255, 255)),
    ColourStop::new(0.1, Colour::rgb(240, 248, 255)),
    ColourStop::new(0.2, Colour::rgb(173, 255, 47)),
    ColourStop::new(0.3, Colour::rgb(128, 0, 128)),
    ColourStop::new(0.5, Colour::rgb(255, 248, 220)),
    ColourStop::new(0.75, Colour::rgb(255, 192, 203)),
    ColourStop::new(1.0, Colour::rgb(0, 0, 0)),
];

pub const PALETTE_PRESETS: &[PalettePreset] = &[
    PalettePreset {
        name: "Pastel blend",
        source: PaletteSource::Blend {
            stops: PASTEL_BLEND,
            samples: 1000,
        },
    },
    PalettePreset {
        name: "Black and white",
        source: PaletteSource::Colours(BLACK_WHITE),
    },
    PalettePreset {
        name: "Fire",
        source: PaletteSource::Colours(FIRE),
    },
    PalettePreset {
        name: "Ocean",
        source: PaletteSource::Colours(OCEAN),
    },
    PalettePreset {
        name: "Bands",
        source: PaletteSource::Colours(BANDS),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourModeKind;

    #[test]
    fn coordinate_presets_are_valid_views() {
        for preset in COORDINATE_PRESETS {
            assert!(preset.scale > 0.0, "{} has a bad scale", preset.name);
            assert!(preset.focus.is_finite(), "{} has a bad focus", preset.name);
        }
    }

    #[test]
    fn palette_presets_load_for_every_mode() {
        for preset in PALETTE_PRESETS {
            let palette = preset.load().unwrap();
            for &kind in ColourModeKind::ALL {
                assert!(palette.len() >= kind.min_palette_len(), "{}", preset.name);
            }
        }
    }

    #[test]
    fn blend_preset_is_resampled() {
        let palette = PALETTE_PRESETS[0].load().unwrap();

        assert_eq!(palette.len(), 1000);
        assert_eq!(palette.colour(0), Colour::WHITE);
        assert_eq!(palette.colour(999), Colour::BLACK);
    }

    #[test]
    fn preset_names_are_unique() {
        for (i, a) in PALETTE_PRESETS.iter().enumerate() {
            for b in &PALETTE_PRESETS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
        for (i, a) in COORDINATE_PRESETS.iter().enumerate() {
            for b in &COORDINATE_PRESETS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
