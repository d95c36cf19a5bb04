//! Configuration loading for the galaxy background.
//!
//! The configuration lives in `config.toml` inside the platform config
//! directory. Every key is optional; a missing file means defaults.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use galaxy_core::{PlanetData, StarData};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

const CONFIG_FILE: &str = "config.toml";

/// Errors raised while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Complete galaxy configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Seed for shape generation; a fresh one is drawn each session if unset.
    pub seed: Option<u64>,
    /// Delay between frames in milliseconds.
    pub frame_interval_ms: u64,
    pub background: Color,
    /// Maximum level written to the log file.
    pub log_level: String,
    pub planets: PlanetData,
    pub stars: StarData,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            frame_interval_ms: 33,
            background: Color::Rgb(0, 0, 0),
            log_level: "info".to_string(),
            planets: PlanetData::default(),
            stars: StarData::default(),
        }
    }
}

impl Config {
    /// Load from the platform config directory, falling back to defaults
    /// when the file does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                debug!("no config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load from an explicit path, falling back to defaults when it is missing.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "config file not found, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config = Self::parse(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse TOML text, filling missing keys with defaults.
    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "fatihg", "galaxy")
}

/// Location of `config.toml`, if the platform has a config directory.
pub fn config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// Directory the log file is written to.
pub fn log_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_local_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use galaxy_core::{Easing, RepeatMode};

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path =
            std::env::temp_dir().join(format!("galaxy-config-{}-{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_missing_file_is_default() {
        let path = std::env::temp_dir().join("galaxy-config-does-not-exist.toml");
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_override() {
        let config = Config::parse(
            r##"
seed = 42
background = "#101020"

[planets]
number_of_planets = 12
planet_colors = ["#ff0000", "white"]

[planets.animation]
easing = "fast-out-slow-in"

[stars]
max_edge_count = 6
"##,
        )
        .unwrap();

        assert_eq!(config.seed, Some(42));
        assert_eq!(config.background, Color::Rgb(0x10, 0x10, 0x20));
        assert_eq!(config.frame_interval_ms, 33);

        assert_eq!(config.planets.number_of_planets, 12);
        assert_eq!(
            config.planets.planet_colors,
            vec![Color::Rgb(255, 0, 0), Color::White]
        );
        assert_eq!(config.planets.max_planet_alpha, 0.5);
        assert_eq!(config.planets.animation.easing, Easing::FastOutSlowIn);
        assert_eq!(config.planets.animation.duration_ms, 30_000);
        assert_eq!(config.planets.animation.repeat, RepeatMode::Reverse);

        assert_eq!(config.stars.max_edge_count, 6);
        assert_eq!(config.stars.number_of_stars, 100);
    }

    #[test]
    fn test_restart_repeat_and_empty_palette() {
        let config = Config::parse(
            r#"
[stars]
star_colors = []

[stars.shining_animation]
duration_ms = 500
repeat = "restart"
"#,
        )
        .unwrap();
        assert!(config.stars.star_colors.is_empty());
        assert_eq!(config.stars.shining_animation.duration_ms, 500);
        assert_eq!(config.stars.shining_animation.repeat, RepeatMode::Restart);
        assert_eq!(config.stars.shining_animation.easing, Easing::FastOutSlowIn);
    }

    #[test]
    fn test_partial_star_animation_keeps_star_defaults() {
        let config = Config::parse("[stars.shining_animation]\nrepeat = \"restart\"\n").unwrap();
        let spec = config.stars.shining_animation;
        assert_eq!(spec.duration_ms, 3000);
        assert_eq!(spec.easing, Easing::FastOutSlowIn);
        assert_eq!(spec.repeat, RepeatMode::Restart);
    }

    #[test]
    fn test_partial_planet_animation_keeps_planet_defaults() {
        let config = Config::parse("[planets.animation]\nduration_ms = 1000\n").unwrap();
        let spec = config.planets.animation;
        assert_eq!(spec.duration_ms, 1000);
        assert_eq!(spec.easing, Easing::Linear);
        assert_eq!(spec.repeat, RepeatMode::Reverse);
        assert_eq!(config.stars.shining_animation.duration_ms, 3000);
    }

    #[test]
    fn test_load_from_file() {
        let path = temp_file("valid.toml", "frame_interval_ms = 16\nlog_level = \"debug\"\n");
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.frame_interval_ms, 16);
        assert_eq!(config.log_level, "debug");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let path = temp_file("invalid.toml", "seed = [not toml");
        let err = Config::load_from(&path).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("invalid.toml"));
    }

    #[test]
    fn test_wrong_type_is_parse_error() {
        assert!(Config::parse("frame_interval_ms = \"fast\"").is_err());
        assert!(Config::parse("[planets.animation]\neasing = \"bouncy\"").is_err());
    }
}
