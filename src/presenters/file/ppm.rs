use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::frame_buffer::FrameBuffer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes frames as binary (P6) PPM images.
#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

pub(crate) fn write_ppm(frame: &FrameBuffer, out: &mut impl Write) -> std::io::Result<()> {
    let resolution = frame.resolution();

    // P6 means binary RGB, then width, height and max colour value
    writeln!(out, "P6")?;
    writeln!(out, "{} {}", resolution.width(), resolution.height())?;
    writeln!(out, "255")?;
    out.write_all(frame.buffer())?;

    Ok(())
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, frame: &FrameBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let mut file = BufWriter::new(File::create(filepath)?);

        write_ppm(frame, &mut file)?;
        file.flush()
    }
}
