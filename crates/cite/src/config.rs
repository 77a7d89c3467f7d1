//! User configuration persisted as TOML.
//!
//! ```toml
//! default_style = "chicago"
//! ```
//!
//! A missing file is not an error; the defaults apply until one is saved.

use super::*;

/// Persisted preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Style used when none is named explicitly
  pub default_style: String,
}

impl Default for Config {
  fn default() -> Self { Self { default_style: "chicago".to_string() } }
}

impl Config {
  /// Platform configuration directory joined with `cite/config.toml`.
  pub fn default_path() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join("cite").join("config.toml")
  }

  /// Sets the style used when none is named explicitly.
  pub fn with_default_style(mut self, style: impl Into<String>) -> Self {
    self.default_style = style.into();
    self
  }

  /// Loads the configuration at `path`, falling back to defaults when the file
  /// does not exist.
  #[instrument(skip_all, fields(path = %path.as_ref().display()))]
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    if !path.exists() {
      debug!("No configuration file, using defaults");
      return Ok(Self::default());
    }
    let config: Self = toml::from_str(&std::fs::read_to_string(path)?)?;
    config.validate()?;
    trace!(?config, "Loaded configuration");
    Ok(config)
  }

  /// Writes the configuration to `path`, creating parent directories.
  pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
    self.validate()?;
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, toml::to_string_pretty(self)?)?;
    debug!(path = %path.display(), "Saved configuration");
    Ok(())
  }

  fn validate(&self) -> Result<()> {
    if self.default_style.trim().is_empty() {
      return Err(CiteError::Config("default_style must name a citation style".to_string()));
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use tempfile::tempdir;

  use super::*;

  #[traced_test]
  #[test]
  fn test_missing_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let config = Config::load(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.default_style, "chicago");
    assert!(logs_contain("No configuration file"));
  }

  #[test]
  fn test_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    Config::default().with_default_style("mla").save(&path).unwrap();
    assert!(path.exists());

    let config = Config::load(&path).unwrap();
    assert_eq!(config.default_style, "mla");
  }

  #[test]
  fn test_partial_file_fills_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "# nothing set\n").unwrap();
    assert_eq!(Config::load(&path).unwrap(), Config::default());
  }

  #[test]
  fn test_malformed_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "default_style = [").unwrap();
    assert!(matches!(Config::load(&path), Err(CiteError::TomlDe(_))));
  }

  #[test]
  fn test_empty_style_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "default_style = \"  \"\n").unwrap();
    assert!(matches!(Config::load(&path), Err(CiteError::Config(_))));
    assert!(Config::default().with_default_style("").save(&path).is_err());
  }

  #[test]
  fn test_default_path() {
    let path = Config::default_path();
    assert!(path.ends_with("cite/config.toml") || path.ends_with("cite\\config.toml"));
  }
}
