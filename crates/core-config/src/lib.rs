//! Configuration loading and parsing.
//!
//! Parses `smsseg.toml` (or an override path provided by the binary):
//!
//! ```toml
//! [encoding]
//! smart = true        # apply smart encoding unless told otherwise
//!
//! [output]
//! format = "json"     # "text" (default) or "json"
//! ```
//!
//! Every field is optional and unknown fields are ignored. A missing file
//! yields defaults; so does a file that fails to parse, after a warning under
//! the `config` target.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, io, path::PathBuf};
use tracing::{debug, warn};

pub const FILE_NAME: &str = "smsseg.toml";

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct EncodingConfig {
    #[serde(default)]
    pub smart: bool,
}

#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub encoding: EncodingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub path: Option<PathBuf>, // file the values came from, if any
    pub file: ConfigFile,
}

impl Config {
    pub fn smart_encoding(&self) -> bool {
        self.file.encoding.smart
    }

    pub fn output_format(&self) -> OutputFormat {
        self.file.output.format
    }
}

/// Best-effort config path: working directory first, then the platform
/// config dir (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    let local = PathBuf::from(FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("smsseg").join(FILE_NAME);
    }
    PathBuf::from(FILE_NAME)
}

/// Load configuration from `path`, or from [`discover`] when `None`.
///
/// Only I/O failures other than "not found" are errors.
pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(target: "config", path = %path.display(), "config_not_found");
            return Ok(Config::default());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("reading config {}", path.display()));
        }
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => {
            debug!(
                target: "config",
                path = %path.display(),
                smart = file.encoding.smart,
                format = ?file.output.format,
                "config_loaded"
            );
            Ok(Config {
                path: Some(path),
                file,
            })
        }
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_failed");
            Ok(Config::default())
        }
    }
}
