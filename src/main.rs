use mandelbrot_viewer::{CliController, PpmFilePresenter, ViewerConfig};

const OUTPUT_DIR: &str = "output";
const OUTPUT_FILE: &str = "output/mandelbrot.ppm";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    std::fs::create_dir_all(OUTPUT_DIR)?;

    let controller = CliController::new(ViewerConfig::default(), PpmFilePresenter::new())?;
    controller.write(OUTPUT_FILE)?;

    Ok(())
}
