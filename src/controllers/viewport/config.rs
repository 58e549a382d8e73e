use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourModeKind;
use crate::core::fractals::mandelbrot::presets::{
    COORDINATE_PRESETS, CoordinatePreset, PALETTE_PRESETS, PalettePreset,
};

const DEFAULT_FOCUS: Complex = Complex::new(-1.0079296875, 0.3112109375);
const DEFAULT_SCALE: f64 = 1.953125e-3;
const DEFAULT_MAX_ITERATIONS: u32 = 200;
const RESET_MAX_ITERATIONS: u32 = 300;
const DEFAULT_SIZE: u32 = 500;

/// Start-up view, reset budget and the preset tables a controller works from.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub initial_focus: Complex,
    pub initial_scale: f64,
    pub initial_max_iterations: u32,
    /// Iteration budget restored by a reset; focus and scale go back to the origin view.
    pub reset_max_iterations: u32,
    pub width: u32,
    pub height: u32,
    pub palette_preset: usize,
    pub colour_mode: ColourModeKind,
    pub coordinate_presets: &'static [CoordinatePreset],
    pub palette_presets: &'static [PalettePreset],
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            initial_focus: DEFAULT_FOCUS,
            initial_scale: DEFAULT_SCALE,
            initial_max_iterations: DEFAULT_MAX_ITERATIONS,
            reset_max_iterations: RESET_MAX_ITERATIONS,
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            palette_preset: 0,
            colour_mode: ColourModeKind::default(),
            coordinate_presets: COORDINATE_PRESETS,
            palette_presets: PALETTE_PRESETS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_existing_presets() {
        let config = ViewerConfig::default();

        assert!(config.palette_preset < config.palette_presets.len());
        assert!(!config.coordinate_presets.is_empty());
        assert_eq!(config.initial_max_iterations, 200);
        assert_eq!(config.reset_max_iterations, 300);
        assert_eq!((config.width, config.height), (500, 500));
    }
}
