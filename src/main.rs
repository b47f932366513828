use std::path::PathBuf;
use std::process::ExitCode;

use arbor::Scene;

fn main() -> ExitCode {
    env_logger::init();

    // Image paths from the command line seed the photo list; more can be
    // dropped onto the window while running.
    let images: Vec<PathBuf> = std::env::args().skip(1).map(PathBuf::from).collect();

    match Scene::new().with_seed(7).with_images(images).run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
