use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum DumpKind {
  /// The decoded request: effect tables, method tables and host node count.
  Request,
  /// Every resolver answer, by node.
  Bindings,
  Ir,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum DebugTrace {
  Request,
  Resolve,
  Lower,
}

/// Controls the verbosity level of CLI output.
///
/// - `Quiet`: No output except diagnostics
/// - `Detailed`: Structured progress output (default)
/// - `Verbose`: Detailed output with per-method phases
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputLevel {
  Quiet,
  #[default]
  Detailed,
  Verbose,
}

/// What happens when a method body calls something that is not a texture intrinsic.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvocationPolicy {
  /// Abort the method; reported apart from user diagnostics.
  #[default]
  Fatal,
  /// Report an unsupported-invocation diagnostic and keep lowering.
  Diagnostic,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoweringOptions {
  #[serde(default)]
  pub invocation_policy: InvocationPolicy,
  /// Abort a method once this many diagnostics were reported for it.
  #[serde(default)]
  pub max_diagnostics: Option<usize>,
}

impl LoweringOptions {
  pub fn new(
    invocation_policy: InvocationPolicy,
    max_diagnostics: Option<usize>,
  ) -> Self {
    Self {
      invocation_policy,
      max_diagnostics,
    }
  }

  /// Command-line values win over whatever was loaded from `shade.toml`.
  pub fn with_overrides(
    mut self,
    invocation_policy: Option<InvocationPolicy>,
    max_diagnostics: Option<usize>,
  ) -> Self {
    if let Some(policy) = invocation_policy {
      self.invocation_policy = policy;
    }

    if max_diagnostics.is_some() {
      self.max_diagnostics = max_diagnostics;
    }

    self
  }
}

/// Contents of `shade.toml`.
///
/// ```toml
/// [project]
/// name = "post-fx"
///
/// [lowering]
/// invocation_policy = "diagnostic"
/// max_diagnostics = 64
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShadeProjectConfig {
  #[serde(default)]
  pub project: ShadeProjectInfo,
  #[serde(default)]
  pub lowering: LoweringOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShadeProjectInfo {
  #[serde(default)]
  pub name: String,
}

#[derive(Debug, Clone, Default)]
pub struct ShadeConfig {
  pub project_config: Option<ShadeProjectConfig>,
  pub lowering: LoweringOptions,
  pub dump: Vec<DumpKind>,
  pub check_mode: bool,
  pub debug: bool,
  pub debug_trace: Vec<DebugTrace>,
  pub quiet: bool,
  pub verbose: u8,
  pub output_level: OutputLevel,
}

impl ShadeConfig {
  pub fn new_basic(
    debug: bool,
    debug_trace: Vec<DebugTrace>,
    quiet: bool,
    verbose: u8,
  ) -> Self {
    let output_level = if quiet {
      OutputLevel::Quiet
    } else if verbose > 0 {
      OutputLevel::Verbose
    } else {
      OutputLevel::Detailed
    };

    Self {
      debug,
      debug_trace,
      quiet,
      verbose,
      output_level,
      ..Self::default()
    }
  }

  /// Adopt the lowering options of a loaded project file.
  pub fn with_project(
    mut self,
    project: ShadeProjectConfig,
  ) -> Self {
    self.lowering = project.lowering.clone();
    self.project_config = Some(project);
    self
  }

  pub fn dumps(
    &self,
    kind: DumpKind,
  ) -> bool {
    self.dump.contains(&kind)
  }
}
