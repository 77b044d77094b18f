mod logging;
mod settings;
mod summary;

use settings::Settings;
use summary::TrajectorySummary;
use trajectory_lib::gpx_import::load_from_files;

fn main() {
    logging::setup_logging();
    let settings = Settings::from_cli();

    tracing::info!("Loading {} GPX files", settings.gpx_files.len());
    let trajectories = match load_from_files(settings.gpx_files.clone()) {
        Ok(trajectories) => trajectories,
        Err(e) => {
            tracing::error!("Failed to load GPX files: {}", e);
            std::process::exit(1);
        }
    };

    if trajectories.is_empty() {
        tracing::warn!("No track segments with valid points found");
    }

    for trajectory in &trajectories {
        let summary = TrajectorySummary::new(
            trajectory,
            settings.sample_fraction,
            settings.altitude_unit,
            &settings.altitude_property,
        );
        println!("{summary}");
    }
}
