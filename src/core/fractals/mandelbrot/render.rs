use crate::core::actions::cancellation::{CancelToken, NeverCancel};
use crate::core::actions::render_frame::render_frame_parallel_rayon::{
    RenderFrameError, render_frame_parallel_rayon_cancelable,
};
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::resolution::Resolution;
use crate::core::fractals::mandelbrot::viewport_state::{ViewportState, ViewportStateError};
use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq)]
pub enum RenderViewportError {
    Viewport(ViewportStateError),
    Frame(RenderFrameError),
}

impl RenderViewportError {
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Frame(RenderFrameError::Cancelled(_)))
    }
}

impl fmt::Display for RenderViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Viewport(err) => write!(f, "{}", err),
            Self::Frame(err) => write!(f, "{}", err),
        }
    }
}

impl Error for RenderViewportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Viewport(err) => Some(err),
            Self::Frame(err) => Some(err),
        }
    }
}

impl From<ViewportStateError> for RenderViewportError {
    fn from(err: ViewportStateError) -> Self {
        Self::Viewport(err)
    }
}

impl From<RenderFrameError> for RenderViewportError {
    fn from(err: RenderFrameError) -> Self {
        Self::Frame(err)
    }
}

/// Renders `viewport` from scratch at `resolution`.
pub fn render(
    viewport: &ViewportState,
    resolution: Resolution,
) -> Result<FrameBuffer, RenderViewportError> {
    render_cancelable(viewport, resolution, &NeverCancel)
}

pub fn render_cancelable<C: CancelToken + ?Sized>(
    viewport: &ViewportState,
    resolution: Resolution,
    cancel: &C,
) -> Result<FrameBuffer, RenderViewportError> {
    let (algorithm, colour_map) = viewport.build_pipeline(resolution)?;

    Ok(render_frame_parallel_rayon_cancelable(
        &algorithm,
        colour_map.as_ref(),
        cancel,
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::render_frame::render_frame_serial::render_frame_serial;
    use crate::core::data::colour::Colour;
    use crate::core::data::complex::Complex;
    use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourModeKind;
    use crate::core::fractals::mandelbrot::colour_mapping::palette::Palette;
    use crate::core::fractals::mandelbrot::presets::PALETTE_PRESETS;

    fn viewport(mode: ColourModeKind, palette: Palette, max_iterations: u32) -> ViewportState {
        ViewportState::new(Complex::ZERO, 1.0, max_iterations, mode, palette).unwrap()
    }

    #[test]
    fn test_centre_of_default_view_is_white_in_simple_mode() {
        let palette = Palette::new(&[Colour::BLACK, Colour::WHITE]).unwrap();
        let viewport = viewport(ColourModeKind::Simple, palette, 50);
        let resolution = Resolution::new(100, 100).unwrap();

        let frame = render(&viewport, resolution).unwrap();

        assert_eq!(frame.buffer_size(), 100 * 100 * 3);
        assert_eq!(frame.pixel(50, 50).unwrap(), Colour::WHITE);
        // the corner is outside the set and escapes at once
        assert_eq!(frame.pixel(0, 0).unwrap(), Colour::BLACK);
    }

    #[test]
    fn test_render_is_deterministic() {
        let palette = PALETTE_PRESETS[0].load().unwrap();
        let viewport = ViewportState::new(
            Complex::new(-0.7453, 0.1127),
            0.01,
            120,
            ColourModeKind::Smooth,
            palette,
        )
        .unwrap();
        let resolution = Resolution::new(64, 40).unwrap();

        let first = render(&viewport, resolution).unwrap();
        let second = render(&viewport, resolution).unwrap();

        assert_eq!(first.buffer(), second.buffer());
    }

    #[test]
    fn test_parallel_render_matches_serial_for_every_mode() {
        let resolution = Resolution::new(33, 21).unwrap();

        for &mode in ColourModeKind::ALL {
            let palette = PALETTE_PRESETS[2].load().unwrap();
            let viewport = viewport(mode, palette, 40);
            let (algorithm, colour_map) = viewport.build_pipeline(resolution).unwrap();

            let serial = render_frame_serial(&algorithm, colour_map.as_ref()).unwrap();
            let parallel = render(&viewport, resolution).unwrap();

            assert_eq!(parallel, serial, "{} differs", mode);
        }
    }

    #[test]
    fn test_cancelled_render_reports_cancellation() {
        let palette = Palette::new(&[Colour::BLACK, Colour::WHITE]).unwrap();
        let viewport = viewport(ColourModeKind::Smooth, palette, 10);
        let resolution = Resolution::new(8, 8).unwrap();

        let result = render_cancelable(&viewport, resolution, &|| true);

        assert!(result.unwrap_err().is_cancelled());
    }
}
