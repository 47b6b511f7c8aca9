//! Session configuration loading and saving
//!
//! Uses RON (Rusty Object Notation) for a human-editable settings file.
//! Resolution, FOV, and clip planes are fixed for the session; changing
//! them means restarting with a new config.

use std::fs;
use std::path::Path;

use serde::{Serialize, Deserialize};

/// Fixed inputs for one render session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Screen resolution in pixels
    pub width: usize,
    pub height: usize,
    /// Horizontal field of view in radians (vertical derives from aspect)
    pub h_fov: f32,
    pub near: f32,
    pub far: f32,
    /// Camera step per input tick (not per second)
    pub move_speed: f32,
    /// Radians of look per pixel of mouse travel
    pub mouse_sensitivity: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            h_fov: std::f32::consts::FRAC_PI_3,
            near: 0.1,
            far: 100.0,
            move_speed: 1.0,
            mouse_sensitivity: 0.001,
        }
    }
}

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    SerializeError(ron::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl From<ron::Error> for ConfigError {
    fn from(e: ron::Error) -> Self {
        ConfigError::SerializeError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::SerializeError(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

/// Load a session config from a RON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SessionConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    Ok(load_config_from_str(&contents)?)
}

/// Load a session config from a RON string (for embedded defaults or testing)
pub fn load_config_from_str(s: &str) -> Result<SessionConfig, ron::error::SpannedError> {
    ron::from_str(s)
}

/// Save a session config to a RON file
pub fn save_config<P: AsRef<Path>>(config: &SessionConfig, path: P) -> Result<(), ConfigError> {
    let pretty = ron::ser::PrettyConfig::new().indentor("  ".to_string());
    let contents = ron::ser::to_string_pretty(config, pretty)?;
    fs::write(path, contents)?;
    Ok(())
}

/// Load the config at `path`, falling back to defaults when the file is
/// missing. A file that exists but fails to parse is reported and also
/// falls back, so a typo never blocks startup.
pub fn load_or_default<P: AsRef<Path>>(path: P) -> SessionConfig {
    let path = path.as_ref();
    if !path.exists() {
        return SessionConfig::default();
    }
    match load_config(path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Ignoring {}: {}", path.display(), e);
            SessionConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let source = "\
(
  width: 1024,
  height: 768,
  h_fov: 1.0471976,
  near: 0.5,
  far: 500.0,
  move_speed: 2.0,
  mouse_sensitivity: 0.002,
)
";
        let config = load_config_from_str(source).unwrap();
        assert_eq!(config.width, 1024);
        assert_eq!(config.height, 768);
        assert!((config.far - 500.0).abs() < 1e-6);
    }

    #[test]
    fn test_roundtrip_through_ron() {
        let config = SessionConfig::default();
        let text = ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new()).unwrap();
        let parsed = load_config_from_str(&text).unwrap();
        assert_eq!(parsed.width, config.width);
        assert!((parsed.h_fov - config.h_fov).abs() < 1e-6);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = load_or_default("definitely/not/a/real/path.ron");
        assert_eq!(config.width, SessionConfig::default().width);
    }
}
