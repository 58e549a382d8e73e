use std::path::Path;
use std::sync::Arc;

use log::{info, warn};

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::ports::frame_sink::FrameSink;
use crate::controllers::rendering::data::frame_data::FrameData;
use crate::controllers::rendering::{ImmediateRenderer, LatestFrameSink};
use crate::controllers::viewport::commands::ViewportCommand;
use crate::controllers::viewport::config::ViewerConfig;
use crate::controllers::viewport::controller::{CommandOutcome, ViewportController};
use crate::controllers::viewport::errors::ViewportError;
use crate::core::data::frame_buffer::FrameBuffer;

/// Drives the viewport without a window: every command renders synchronously and
/// the newest frame can be written out through the presenter.
pub struct CliController<P: FilePresenterPort> {
    presenter: P,
    sink: Arc<LatestFrameSink>,
    viewport: ViewportController<ImmediateRenderer>,
    frame: Option<FrameData>,
}

impl<P: FilePresenterPort> CliController<P> {
    pub fn new(config: ViewerConfig, presenter: P) -> Result<Self, ViewportError> {
        let sink = Arc::new(LatestFrameSink::new());
        let renderer = ImmediateRenderer::new(Arc::clone(&sink) as Arc<dyn FrameSink>);
        let viewport = ViewportController::new(config, renderer)?;

        let mut controller = Self {
            presenter,
            sink,
            viewport,
            frame: None,
        };
        controller.collect_frame();

        Ok(controller)
    }

    pub fn handle(&mut self, command: ViewportCommand) -> Result<CommandOutcome, ViewportError> {
        let outcome = self.viewport.handle(command)?;
        self.collect_frame();

        Ok(outcome)
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportController<ImmediateRenderer> {
        &self.viewport
    }

    #[must_use]
    pub fn frame(&self) -> Option<&FrameBuffer> {
        self.frame.as_ref().map(|data| &data.frame)
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let Some(data) = &self.frame else {
            return Err(std::io::Error::other("no frame has been rendered"));
        };

        self.presenter.present(&data.frame, filepath.as_ref())?;
        info!(
            "wrote generation {} to {}",
            data.generation,
            filepath.as_ref().display()
        );

        Ok(())
    }

    fn collect_frame(&mut self) {
        if let Some(error) = self.sink.take_error() {
            warn!("generation {} failed: {}", error.generation, error.message);
        }

        if let Some(frame) = self.sink.take_frame() {
            self.frame = Some(frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::data::resolution::Resolution;
    use std::path::PathBuf;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingPresenter {
        written: Mutex<Vec<(PathBuf, Resolution)>>,
    }

    impl FilePresenterPort for RecordingPresenter {
        fn present(&self, frame: &FrameBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
            self.written
                .lock()
                .unwrap()
                .push((filepath.as_ref().to_path_buf(), frame.resolution()));
            Ok(())
        }
    }

    fn small_config() -> ViewerConfig {
        ViewerConfig {
            initial_focus: Complex::new(-0.5, 0.0),
            initial_scale: 1.0,
            initial_max_iterations: 30,
            width: 40,
            height: 30,
            ..ViewerConfig::default()
        }
    }

    #[test]
    fn test_initial_frame_is_available() {
        let controller = CliController::new(small_config(), RecordingPresenter::default()).unwrap();

        let frame = controller.frame().expect("initial frame");
        assert_eq!(frame.resolution(), Resolution::new(40, 30).unwrap());
    }

    #[test]
    fn test_write_uses_latest_frame() {
        let mut controller =
            CliController::new(small_config(), RecordingPresenter::default()).unwrap();

        controller
            .handle(ViewportCommand::Resize {
                width: 16,
                height: 8,
            })
            .unwrap();
        controller.write("out.ppm").unwrap();

        let written = controller.presenter.written.lock().unwrap();
        assert_eq!(
            written.as_slice(),
            &[(PathBuf::from("out.ppm"), Resolution::new(16, 8).unwrap())]
        );
    }

    #[test]
    fn test_rejected_command_keeps_previous_frame() {
        let mut controller =
            CliController::new(small_config(), RecordingPresenter::default()).unwrap();

        let result = controller.handle(ViewportCommand::SelectColourMode(17));

        assert!(result.is_err());
        assert_eq!(controller.viewport().last_generation(), 1);
        assert!(controller.frame().is_some());
    }
}
