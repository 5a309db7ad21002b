use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use proximity_lib::ReferenceConfig;

/// Report format written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated `user_id`/`name` table.
    #[default]
    Text,
    /// Pretty-printed JSON document.
    Json,
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "List customers within a radius of a reference location, sorted by user_id"
)]
pub struct Cli {
    /// Customer file with one JSON object per line. Reads stdin when omitted or `-`.
    pub input: Option<PathBuf>,

    /// JSON file providing `latitude`, `longitude` and `radius_km`.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Reference latitude in decimal degrees.
    #[arg(long, allow_hyphen_values = true)]
    pub latitude: Option<f64>,

    /// Reference longitude in decimal degrees.
    #[arg(long, allow_hyphen_values = true)]
    pub longitude: Option<f64>,

    /// Inclusion radius in kilometres.
    #[arg(long = "radius-km", allow_hyphen_values = true)]
    pub radius_km: Option<f64>,

    /// Drop customers with this exact name (repeatable).
    #[arg(long = "exclude-name", value_name = "NAME")]
    pub exclude_names: Vec<String>,

    /// Add a distance column to the text report.
    #[arg(long)]
    pub with_distance: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log debug output to stderr (overridden by `RUST_LOG`).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Path to read from, or `None` for stdin.
    pub fn input_path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| path.as_os_str() != "-")
    }

    /// Defaults, overlaid by `--config`, overlaid by individual flags.
    pub fn reference_config(&self) -> Result<ReferenceConfig> {
        let mut config = match &self.config {
            Some(path) => ReferenceConfig::from_path(path)
                .with_context(|| format!("failed to read configuration {}", path.display()))?,
            None => ReferenceConfig::default(),
        };
        if let Some(latitude) = self.latitude {
            config.latitude = latitude;
        }
        if let Some(longitude) = self.longitude {
            config.longitude = longitude;
        }
        if let Some(radius_km) = self.radius_km {
            config.radius_km = radius_km;
        }
        Ok(config)
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclude_names.iter().any(|excluded| excluded == name)
    }
}
