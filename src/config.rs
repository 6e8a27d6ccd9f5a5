//! Command-line and environment configuration.

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};

use crate::course::{Course, default_catalogue};
use crate::error::{Error, Result};

/// Output format of the log subscriber.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Serve an in-memory course registry over HTTP.
#[derive(Debug, Parser)]
#[command(name = "course-registry", version, about)]
pub struct Config {
    /// Socket address to listen on.
    #[arg(long, env = "COURSE_REGISTRY_ADDR", default_value = "127.0.0.1:8000")]
    pub addr: SocketAddr,

    /// JSON file holding an array of courses to start with.
    #[arg(long, env = "COURSE_REGISTRY_SEED", conflicts_with = "empty")]
    pub seed: Option<PathBuf>,

    /// Start with no courses instead of the built-in catalogue.
    #[arg(long, env = "COURSE_REGISTRY_EMPTY")]
    pub empty: bool,

    /// Log output format.
    #[arg(long, env = "COURSE_REGISTRY_LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Courses the registry starts with: the seed file, nothing, or the
    /// built-in catalogue, in that order of precedence.
    pub fn initial_courses(&self) -> Result<Vec<Course>> {
        if let Some(path) = &self.seed {
            return load_seed(path);
        }
        if self.empty {
            return Ok(Vec::new());
        }
        Ok(default_catalogue())
    }
}

fn load_seed(path: &Path) -> Result<Vec<Course>> {
    let raw = fs::read(path).map_err(|source| Error::SeedRead { path: path.to_owned(), source })?;
    serde_json::from_slice(&raw).map_err(|source| Error::SeedParse { path: path.to_owned(), source })
}
