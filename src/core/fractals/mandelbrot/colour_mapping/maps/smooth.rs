use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourModeKind;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::colour_mapping::palette::Palette;

/// Blends linearly between the two palette entries either side of
/// `iterations / max_iterations`. The top of the range clamps to the last entry.
#[derive(Debug)]
pub struct MandelbrotSmooth {
    palette: Palette,
    max_iterations: u32,
}

impl MandelbrotSmooth {
    #[must_use]
    pub fn new(palette: Palette, max_iterations: u32) -> Self {
        Self {
            palette,
            max_iterations,
        }
    }
}

pub(crate) fn smooth_colour(palette: &Palette, iterations: f64, max_iterations: u32) -> Colour {
    let (index, d) = palette.locate(iterations, max_iterations);

    if index + 1 >= palette.len() {
        return palette.colour(index);
    }

    palette.colour(index).lerp(palette.colour(index + 1), d)
}

impl ColourMap<f64> for MandelbrotSmooth {
    fn map(&self, iterations: f64) -> Colour {
        smooth_colour(&self.palette, iterations, self.max_iterations)
    }

    fn display_name(&self) -> &str {
        ColourModeKind::Smooth.display_name()
    }
}

impl MandelbrotColourMap for MandelbrotSmooth {
    fn kind(&self) -> ColourModeKind {
        ColourModeKind::Smooth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn black_white() -> Palette {
        Palette::new(&[Colour::BLACK, Colour::WHITE]).unwrap()
    }

    #[test]
    fn test_map_starts_at_first_colour() {
        let mapper = MandelbrotSmooth::new(black_white(), 100);

        assert_eq!(mapper.map(0.0), Colour::BLACK);
    }

    #[test]
    fn test_map_interpolates_within_first_band() {
        let mapper = MandelbrotSmooth::new(black_white(), 100);

        // t = 0.25 -> halfway between black and white
        assert_eq!(mapper.map(25.0), Colour::rgb(127, 127, 127));
    }

    #[test]
    fn test_map_last_band_returns_last_colour() {
        let mapper = MandelbrotSmooth::new(black_white(), 100);

        assert_eq!(mapper.map(60.0), Colour::WHITE);
        assert_eq!(mapper.map(99.0), Colour::WHITE);
    }

    #[test]
    fn test_map_at_full_budget_is_clamped_not_wrapped() {
        let palette =
            Palette::new(&[Colour::rgb(255, 0, 0), Colour::rgb(0, 255, 0), Colour::rgb(0, 0, 255)])
                .unwrap();
        let mapper = MandelbrotSmooth::new(palette, 100);

        assert_eq!(mapper.map(100.0), Colour::rgb(0, 0, 255));
        assert_eq!(mapper.map(1_000.0), Colour::rgb(0, 0, 255));
    }

    #[test]
    fn test_map_is_continuous_within_bands() {
        let palette =
            Palette::new(&[Colour::rgb(0, 40, 200), Colour::rgb(255, 90, 0), Colour::WHITE])
                .unwrap();
        let max_iterations = 90;
        let mapper = MandelbrotSmooth::new(palette.clone(), max_iterations);

        let epsilon = 0.01;
        let len = palette.len() as f64;
        let mut iterations = 0.0;

        while iterations + epsilon < max_iterations as f64 {
            let a = mapper.map(iterations);
            let b = mapper.map(iterations + epsilon);
            let (index, _) = palette.locate(iterations, max_iterations);

            // neighbouring entries bound how fast any channel may move, plus one for truncation
            let next = palette.colour(index + 1);
            let here = palette.colour(index);
            let step = epsilon / max_iterations as f64 * len;
            let bound = |x: u8, y: u8| (x as f64 - y as f64).abs() * step + 1.0;

            let crosses_band = palette.locate(iterations + epsilon, max_iterations).0 != index;
            if !crosses_band {
                assert!((a.r as f64 - b.r as f64).abs() <= bound(here.r, next.r));
                assert!((a.g as f64 - b.g as f64).abs() <= bound(here.g, next.g));
                assert!((a.b as f64 - b.b as f64).abs() <= bound(here.b, next.b));
            }

            iterations += 0.37;
        }
    }

    #[test]
    fn test_kind_and_display_name() {
        let mapper = MandelbrotSmooth::new(black_white(), 10);

        assert_eq!(mapper.kind(), ColourModeKind::Smooth);
        assert_eq!(mapper.display_name(), "Smooth");
    }
}
