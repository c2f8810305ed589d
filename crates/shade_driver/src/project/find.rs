use std::path::{Path, PathBuf};

use shade_config::ShadeProjectConfig;

use crate::project::errors::ProjectError;

pub const PROJECT_FILE: &str = "shade.toml";

/// Search upward from `start` for a directory containing shade.toml.
///
/// Returns the directory, not the file. `start` may itself be a file.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
  let mut current = if start.is_file() {
    start.parent()?.to_path_buf()
  } else {
    start.to_path_buf()
  };

  loop {
    if current.join(PROJECT_FILE).is_file() {
      return Some(current);
    }

    if !current.pop() {
      return None;
    }
  }
}

/// Load and validate a shade.toml file (the file path, not its directory).
pub fn load_project_toml(toml_path: &Path) -> Result<ShadeProjectConfig, ProjectError> {
  let content = std::fs::read_to_string(toml_path).map_err(|e| ProjectError::IoError {
    path: toml_path.to_path_buf(),
    source: e,
  })?;

  let config: ShadeProjectConfig = toml::from_str(&content).map_err(|e| ProjectError::TomlParseError {
    path: toml_path.to_path_buf(),
    message: e.to_string(),
  })?;

  if config.lowering.max_diagnostics == Some(0) {
    return Err(ProjectError::InvalidMaxDiagnostics {
      path: toml_path.to_path_buf(),
    });
  }

  Ok(config)
}
