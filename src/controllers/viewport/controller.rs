use log::{debug, warn};

use crate::controllers::ports::render_scheduler::RenderScheduler;
use crate::controllers::rendering::data::render_request::RenderRequest;
use crate::controllers::viewport::commands::ViewportCommand;
use crate::controllers::viewport::config::ViewerConfig;
use crate::controllers::viewport::errors::ViewportError;
use crate::controllers::viewport::explicit_view::{ExplicitView, FieldError};
use crate::core::data::complex::Complex;
use crate::core::data::resolution::Resolution;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourModeKind;
use crate::core::fractals::mandelbrot::presets::PalettePreset;
use crate::core::fractals::mandelbrot::viewport_state::ViewportState;
use crate::core::util::pixel_to_complex_coords::{pixel_delta_to_complex, pixel_to_complex};

const RESET_SCALE: f64 = 1.0;

/// Result of an accepted command.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutcome {
    /// Generation of the render scheduled for the new state.
    pub generation: u64,
    /// Explicit fields that were left unchanged because their input was invalid.
    pub rejected: Vec<FieldError>,
}

/// Owns the viewport and turns commands into renders.
///
/// Every accepted command schedules exactly one full render of an immutable
/// snapshot. A command that fails leaves the viewport untouched and schedules nothing.
pub struct ViewportController<S: RenderScheduler> {
    config: ViewerConfig,
    state: ViewportState,
    resolution: Resolution,
    scheduler: S,
    last_generation: u64,
}

impl<S: RenderScheduler> ViewportController<S> {
    /// Builds the initial viewport from `config` and schedules its first render.
    pub fn new(config: ViewerConfig, scheduler: S) -> Result<Self, ViewportError> {
        let resolution = Resolution::new(config.width, config.height)?;
        let preset = palette_preset(&config, config.palette_preset)?;
        let palette = preset.load()?;

        let mut state = ViewportState::new(
            config.initial_focus,
            config.initial_scale,
            config.initial_max_iterations,
            config.colour_mode,
            palette.clone(),
        )?;
        state.set_palette(palette, Some(config.palette_preset))?;

        let mut controller = Self {
            config,
            state,
            resolution,
            scheduler,
            last_generation: 0,
        };
        controller.schedule_render();

        Ok(controller)
    }

    #[must_use]
    pub fn state(&self) -> &ViewportState {
        &self.state
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Generation of the most recently scheduled render.
    #[must_use]
    pub fn last_generation(&self) -> u64 {
        self.last_generation
    }

    pub fn handle(&mut self, command: ViewportCommand) -> Result<CommandOutcome, ViewportError> {
        debug!("handling {:?}", command);

        // work on a copy so a failure halfway through leaves nothing behind
        let mut next = self.state.clone();
        let mut resolution = self.resolution;
        let mut rejected = Vec::new();

        match command {
            ViewportCommand::Pan { dx, dy } => {
                let delta = pixel_delta_to_complex(dx, dy, resolution, next.scale());
                next.set_focus(next.focus() - delta)?;
            }
            ViewportCommand::ZoomAt { x, y, zoom } => {
                let focus = pixel_to_complex(x, y, resolution, next.focus(), next.scale());
                next.set_focus(focus)?;
                next.set_scale(next.scale() * zoom.factor())?;
            }
            ViewportCommand::SetExplicit(view) => {
                rejected = apply_explicit(&mut next, &view)?;
            }
            ViewportCommand::Reset => {
                next.set_focus(Complex::ZERO)?;
                next.set_scale(RESET_SCALE)?;
                next.set_max_iterations(self.config.reset_max_iterations)?;
            }
            ViewportCommand::SelectCoordinatePreset(index) => {
                let presets = self.config.coordinate_presets;
                let preset = presets
                    .get(index)
                    .ok_or(ViewportError::UnknownCoordinatePreset {
                        index,
                        count: presets.len(),
                    })?;
                next.set_focus(preset.focus)?;
                next.set_scale(preset.scale)?;
            }
            ViewportCommand::SelectPalettePreset(index) => {
                let palette = palette_preset(&self.config, index)?.load()?;
                next.set_palette(palette, Some(index))?;
            }
            ViewportCommand::SelectColourMode(index) => {
                let kind = ColourModeKind::from_index(index)
                    .ok_or(ViewportError::UnknownColourMode { index })?;
                next.set_colour_mode(kind)?;
            }
            ViewportCommand::Resize { width, height } => {
                resolution = Resolution::new(width, height)?;
            }
        }

        for field_error in &rejected {
            warn!("ignoring explicit input: {}", field_error);
        }

        self.state = next;
        self.resolution = resolution;
        let generation = self.schedule_render();

        Ok(CommandOutcome {
            generation,
            rejected,
        })
    }

    fn schedule_render(&mut self) -> u64 {
        let request = RenderRequest::new(self.resolution, self.state.clone());
        self.last_generation = self.scheduler.schedule(request);

        debug!(
            "scheduled generation {} at {} scale {:e}, {} iterations",
            self.last_generation,
            self.state.focus(),
            self.state.scale(),
            self.state.max_iterations()
        );

        self.last_generation
    }
}

fn palette_preset(config: &ViewerConfig, index: usize) -> Result<&PalettePreset, ViewportError> {
    config
        .palette_presets
        .get(index)
        .ok_or(ViewportError::UnknownPalettePreset {
            index,
            count: config.palette_presets.len(),
        })
}

fn apply_explicit(
    state: &mut ViewportState,
    view: &ExplicitView,
) -> Result<Vec<FieldError>, ViewportError> {
    let validated = view.validate();
    let focus = state.focus();

    state.set_focus(Complex::new(
        validated.x.unwrap_or(focus.real),
        validated.y.unwrap_or(focus.imag),
    ))?;

    if let Some(scale) = validated.scale {
        state.set_scale(scale)?;
    }

    if let Some(max_iterations) = validated.max_iterations {
        state.set_max_iterations(max_iterations)?;
    }

    Ok(validated.rejected)
}
