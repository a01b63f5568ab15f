use anyhow::{bail, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_kmer_size")]
    pub kmer_size: usize,
    #[serde(default = "default_sketch_size")]
    pub sketch_size: usize,
    #[serde(default = "default_threads")]
    pub threads: usize,
}

fn default_kmer_size() -> usize {
    21
}

fn default_sketch_size() -> usize {
    100
}

fn default_threads() -> usize {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            kmer_size: default_kmer_size(),
            sketch_size: default_sketch_size(),
            threads: default_threads(),
        }
    }
}

/// Parameters for one run, after CLI overrides are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub kmer_size: usize,
    pub sketch_size: usize,
    pub threads: usize,
}

impl Config {
    /// Location of the user configuration file, if a home directory is known.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "seqsketch", "seqsketch")
            .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
    }

    /// Load the user configuration, falling back to defaults when the file is
    /// missing or unusable.
    pub fn load() -> Self {
        if let Some(config_path) = Self::default_path() {
            if config_path.exists() {
                match Self::load_from(&config_path) {
                    Ok(config) => return config,
                    Err(e) => warn!("Ignoring configuration: {:#}", e),
                }
            }
        }
        Config::default()
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Apply command-line overrides and check the result.
    pub fn resolve(
        &self,
        kmer_size: Option<usize>,
        sketch_size: Option<usize>,
        threads: Option<usize>,
    ) -> Result<Settings> {
        let settings = Settings {
            kmer_size: kmer_size.unwrap_or(self.kmer_size),
            sketch_size: sketch_size.unwrap_or(self.sketch_size),
            threads: threads.unwrap_or(self.threads),
        };

        if settings.kmer_size == 0 {
            bail!("k-mer size must be at least 1");
        }
        if settings.sketch_size == 0 {
            bail!("sketch size must be at least 1");
        }
        if settings.threads == 0 {
            bail!("thread count must be at least 1");
        }
        Ok(settings)
    }
}
