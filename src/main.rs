use std::fs;

use fractal_gate::{MandelbrotConfig, PbmFilePresenter, RenderController};
use log::info;

const OUTPUT_PATH: &str = "output/mandelbrot.pbm";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = MandelbrotConfig::default();
    info!(
        "{} workers, admission queue of {}",
        config.workers, config.queue_capacity
    );

    let viewport = config.viewport()?;
    let mut controller = RenderController::new(config.build_generator()?, PbmFilePresenter::new());

    controller.generate(&viewport)?;
    fs::create_dir_all("output")?;
    controller.write(OUTPUT_PATH)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_returns_ok() {
        let result = main();

        assert!(result.is_ok());
    }
}
