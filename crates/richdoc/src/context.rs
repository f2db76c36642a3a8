//! Global context for CLI commands

use anyhow::{Context as _, Result};
use log::{debug, info};
use richdoc_core::config::consts::CONFIG_FILE_NAME;
use richdoc_core::{Config, Converter};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Where the effective configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

/// Loaded configuration plus output destination
pub struct Context {
    pub converter: Converter,
    pub config_source: ConfigSource,
    pub output: Option<PathBuf>,
}

impl Context {
    /// Resolves the configuration: `--config`/`RICHDOC_CONFIG`, then
    /// `./richdoc.toml`, then defaults
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly given config file is missing, or
    /// any config file cannot be parsed.
    pub fn new(config_path: Option<PathBuf>, output: Option<PathBuf>) -> Result<Self> {
        let (config, config_source) = match config_path {
            Some(path) => {
                let config = Config::from_file(&path)
                    .with_context(|| format!("Failed to load config {}", path.display()))?;
                (config, ConfigSource::File(path))
            }
            None => {
                let local = std::env::current_dir()?.join(CONFIG_FILE_NAME);
                if local.exists() {
                    let config = Config::from_file(&local)
                        .with_context(|| format!("Failed to load config {}", local.display()))?;
                    (config, ConfigSource::File(local))
                } else {
                    (Config::default(), ConfigSource::Defaults)
                }
            }
        };

        match &config_source {
            ConfigSource::File(path) => info!("using config {}", path.display()),
            ConfigSource::Defaults => debug!("no {CONFIG_FILE_NAME} found, using defaults"),
        }

        Ok(Self {
            converter: Converter::new(config),
            config_source,
            output,
        })
    }

    /// Sends command output to `--output` or stdout
    pub fn emit(&self, s: &str) -> Result<()> {
        crate::output::emit(s, self.output.as_deref())
    }
}

/// Reads a file, or stdin for `None` / `-`
pub fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}
