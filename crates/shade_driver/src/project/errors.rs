use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ProjectError {
  /// No shade.toml found when searching upward from the given directory.
  NotFound { searched_from: PathBuf },

  IoError { path: PathBuf, source: std::io::Error },

  TomlParseError { path: PathBuf, message: String },

  /// `max_diagnostics = 0` would abort every method before its first diagnostic.
  InvalidMaxDiagnostics { path: PathBuf },
}

impl fmt::Display for ProjectError {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    match self {
      ProjectError::NotFound { searched_from } => {
        write!(f, "no shade.toml found (searched from '{}')", searched_from.display())
      },

      ProjectError::IoError { path, source } => {
        write!(f, "failed to read '{}': {}", path.display(), source)
      },

      ProjectError::TomlParseError { path, message } => {
        write!(f, "failed to parse '{}': {}", path.display(), message)
      },

      ProjectError::InvalidMaxDiagnostics { path } => {
        write!(f, "invalid max_diagnostics in '{}': must be at least 1", path.display())
      },
    }
  }
}

impl std::error::Error for ProjectError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      ProjectError::IoError { source, .. } => Some(source),
      _ => None,
    }
  }
}
