//! Headless fly-through player binary for `flyview`.

use std::path::Path;

use flyview::options::Options;
use flyview::tour::Tour;
use flyview::util::frame_timing::FrameTiming;
use flyview::{FlyviewError, ViewCommand, ViewerContext};

/// Play `tour_path` headless with the options from `options_path` (or the
/// defaults), logging the pose as it goes.
fn run(
    tour_path: &str,
    options_path: Option<&str>,
) -> Result<(), FlyviewError> {
    let options = match options_path {
        Some(path) => Options::load(Path::new(path))?,
        None => Options::default(),
    };
    let tour = Tour::load(Path::new(tour_path))?;
    log::info!(
        "loaded {tour_path}: {} keyframes, {} frames",
        tour.keyframes.len(),
        tour.end_frame
    );

    let mut timing = FrameTiming::new(options.playback.target_fps);
    let mut context = ViewerContext::new(options).with_tour(tour);
    if !context.is_tour_active() {
        context.execute(ViewCommand::ToggleTour);
    }

    while context.is_tour_active() && !context.quit_requested() {
        std::thread::sleep(timing.time_until_next_frame());
        let uniform = context.update();
        log::trace!("eye {:?} forward {:?}", uniform.position, uniform.forward);
        let _ = timing.end_frame();
    }

    context.execute(ViewCommand::ReportPosition);
    log::info!(
        "{} frames at {:.1} fps",
        timing.frames(),
        timing.fps()
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let mut args = std::env::args().skip(1);
    let Some(tour_path) = args.next() else {
        log::error!("Usage: flyview <tour.toml> [options.toml]");
        std::process::exit(1);
    };
    let options_path = args.next();

    if let Err(e) = run(&tour_path, options_path.as_deref()) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
