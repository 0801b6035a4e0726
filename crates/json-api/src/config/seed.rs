//! Seed Config

use std::{fs, path::PathBuf};

use clap::Args;
use tracing::{info, warn};

use trustbase_app::seed::SeedData;

/// Initial store contents.
#[derive(Debug, Args)]
pub struct SeedConfig {
    /// Path to a JSON seed file; the built-in demo dataset is used when unset
    #[arg(long, env = "SEED_FILE")]
    pub seed_file: Option<PathBuf>,
}

impl SeedConfig {
    /// Resolve the seed data the store starts with.
    ///
    /// An unreadable or unparseable seed file logs a warning and falls back
    /// to an empty store rather than refusing to start.
    #[must_use]
    pub fn load(&self) -> SeedData {
        let Some(path) = &self.seed_file else {
            info!("no seed file configured, using built-in demo dataset");

            return SeedData::demo();
        };

        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(error) => {
                warn!("could not read seed file {}: {error}", path.display());

                return SeedData::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(seed) => seed,
            Err(error) => {
                warn!("could not parse seed file {}: {error}", path.display());

                SeedData::default()
            }
        }
    }
}
