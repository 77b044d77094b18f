use clap::Parser;
use std::path::PathBuf;
use trajectory_lib::AltitudeUnit;

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
/// Trajectory CLI - Summarize GPX tracks: length, duration, speed and sampled positions
pub struct Settings {
    /// GPX files to load
    #[clap(value_name = "FILE", required = true)]
    pub gpx_files: Vec<PathBuf>,

    /// Unit of the altitude property used for ECEF conversion
    #[clap(short = 'u', long, value_enum, default_value_t = AltitudeUnit::Kilometers)]
    pub altitude_unit: AltitudeUnit,

    /// Point property holding the altitude (GPX imports fill "altitude" in km and
    /// "altitude_m" in meters)
    #[clap(short = 'p', long, default_value = "altitude")]
    pub altitude_property: String,

    /// Fraction of the trajectory length at which to sample a point (pinned to 0-1)
    #[clap(short, long, default_value = "0.5")]
    pub sample_fraction: f64,
}

impl Settings {
    /// Parse from the command line, exiting with usage on error
    pub fn from_cli() -> Self {
        match Settings::try_parse() {
            Ok(args) => args,
            Err(e) => e.exit(),
        }
    }
}
