use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::{
    errors::ColourMapError,
    kinds::ColourModeKind,
    map::MandelbrotColourMap,
    maps::{
        mixed::MandelbrotMixed, modulo::MandelbrotModulo, simple::MandelbrotSimple,
        smooth::MandelbrotSmooth,
    },
    palette::Palette,
};

/// Checks that `palette` has enough entries for `kind`.
pub fn check_palette(kind: ColourModeKind, palette: &Palette) -> Result<(), ColourMapError> {
    let required = kind.min_palette_len();

    if palette.len() < required {
        return Err(ColourMapError::PaletteTooShort {
            kind,
            required,
            len: palette.len(),
        });
    }

    Ok(())
}

pub fn mandelbrot_colour_map_factory(
    kind: ColourModeKind,
    palette: Palette,
    max_iterations: u32,
) -> Result<Box<dyn MandelbrotColourMap>, ColourMapError> {
    if max_iterations == 0 {
        return Err(ColourMapError::ZeroMaxIterations);
    }

    check_palette(kind, &palette)?;

    Ok(match kind {
        ColourModeKind::Smooth => Box::new(MandelbrotSmooth::new(palette, max_iterations)),
        ColourModeKind::Simple => Box::new(MandelbrotSimple::new(palette, max_iterations)),
        ColourModeKind::Modulo => Box::new(MandelbrotModulo::new(palette)),
        ColourModeKind::Mixed => Box::new(MandelbrotMixed::new(palette, max_iterations)),
    })
}

/// Colours a single escape value. Renders should build the map once through
/// [`mandelbrot_colour_map_factory`] instead.
pub fn colour_at(
    iterations: f64,
    max_iterations: u32,
    palette: &Palette,
    kind: ColourModeKind,
) -> Result<Colour, ColourMapError> {
    let map = mandelbrot_colour_map_factory(kind, palette.clone(), max_iterations)?;

    Ok(map.map(iterations))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn black_white() -> Palette {
        Palette::new(&[Colour::BLACK, Colour::WHITE]).unwrap()
    }

    #[test]
    fn factory_round_trip_for_all_kinds() {
        for &kind in ColourModeKind::ALL {
            let map = mandelbrot_colour_map_factory(kind, black_white(), 256).unwrap();
            assert_eq!(map.kind(), kind);
        }
    }

    #[test]
    fn display_names_match_between_kind_and_concrete() {
        for &kind in ColourModeKind::ALL {
            let map = mandelbrot_colour_map_factory(kind, black_white(), 256).unwrap();
            assert_eq!(map.display_name(), kind.display_name());
        }
    }

    #[test]
    fn display_names_are_unique() {
        let names: Vec<&str> = ColourModeKind::ALL
            .iter()
            .map(|k| k.display_name())
            .collect();
        for (i, name) in names.iter().enumerate() {
            for (j, other) in names.iter().enumerate() {
                if i != j {
                    assert_ne!(name, other, "Duplicate display name: {}", name);
                }
            }
        }
    }

    #[test]
    fn interpolating_modes_reject_single_colour_palette() {
        let single = Palette::new(&[Colour::WHITE]).unwrap();

        for kind in [ColourModeKind::Smooth, ColourModeKind::Mixed] {
            let result = mandelbrot_colour_map_factory(kind, single.clone(), 100);
            assert_eq!(
                result.err(),
                Some(ColourMapError::PaletteTooShort {
                    kind,
                    required: 2,
                    len: 1
                })
            );
        }
    }

    #[test]
    fn lookup_modes_accept_single_colour_palette() {
        let single = Palette::new(&[Colour::WHITE]).unwrap();

        for kind in [ColourModeKind::Simple, ColourModeKind::Modulo] {
            assert!(mandelbrot_colour_map_factory(kind, single.clone(), 100).is_ok());
        }
    }

    #[test]
    fn zero_iterations_rejected() {
        let result = mandelbrot_colour_map_factory(ColourModeKind::Simple, black_white(), 0);

        assert_eq!(result.err(), Some(ColourMapError::ZeroMaxIterations));
    }

    #[test]
    fn colour_at_matches_the_boxed_map() {
        let palette = Palette::new(&[Colour::BLACK, Colour::WHITE]).unwrap();

        assert_eq!(
            colour_at(49.0, 50, &palette, ColourModeKind::Simple),
            Ok(Colour::WHITE)
        );
        assert_eq!(
            colour_at(0.0, 50, &palette, ColourModeKind::Smooth),
            Ok(Colour::BLACK)
        );
        assert_eq!(
            colour_at(1.0, 0, &palette, ColourModeKind::Modulo),
            Err(ColourMapError::ZeroMaxIterations)
        );
    }
}
