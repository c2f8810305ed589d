use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use shade_config::{DebugTrace, DumpKind, InvocationPolicy};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum DumpKindCli {
  /// Dump the decoded request: effect and method symbol tables
  Request,
  /// Dump every resolver binding, by node
  Bindings,
  /// Dump the lowered IR of each method
  Ir,
}

impl From<DumpKindCli> for DumpKind {
  fn from(value: DumpKindCli) -> DumpKind {
    match value {
      DumpKindCli::Request => DumpKind::Request,
      DumpKindCli::Bindings => DumpKind::Bindings,
      DumpKindCli::Ir => DumpKind::Ir,
    }
  }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum DebugTraceCli {
  Request,
  Resolve,
  Lower,
}

impl From<DebugTraceCli> for DebugTrace {
  fn from(value: DebugTraceCli) -> DebugTrace {
    match value {
      DebugTraceCli::Request => DebugTrace::Request,
      DebugTraceCli::Resolve => DebugTrace::Resolve,
      DebugTraceCli::Lower => DebugTrace::Lower,
    }
  }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum InvocationPolicyCli {
  /// Abort the method on calls that are not texture intrinsics
  Fatal,
  /// Report such calls as diagnostics and keep lowering
  Diagnostic,
}

impl From<InvocationPolicyCli> for InvocationPolicy {
  fn from(value: InvocationPolicyCli) -> InvocationPolicy {
    match value {
      InvocationPolicyCli::Fatal => InvocationPolicy::Fatal,
      InvocationPolicyCli::Diagnostic => InvocationPolicy::Diagnostic,
    }
  }
}

#[derive(clap::Args, Debug, Clone, PartialEq)]
pub struct LoweringArgs {
  /// Lowering request to read (JSON)
  pub file_path: String,

  /// How to treat calls that are not texture intrinsics (overrides shade.toml)
  #[arg(long, value_enum)]
  pub invocation_policy: Option<InvocationPolicyCli>,

  /// Abort a method after this many diagnostics (overrides shade.toml)
  #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
  pub max_diagnostics: Option<u64>,
}

#[derive(Parser, Debug, Clone, PartialEq)]
pub struct LowerCommand {
  #[command(flatten)]
  pub lowering: LoweringArgs,
}

#[derive(Parser, Debug, Clone, PartialEq)]
pub struct CheckCommand {
  #[command(flatten)]
  pub lowering: LoweringArgs,
}

#[derive(Subcommand, Clone, PartialEq)]
pub enum SubCommand {
  /// Lower every method of a request
  Lower(LowerCommand),
  /// Lower a request and only report diagnostics
  Check(CheckCommand),
}

impl SubCommand {
  pub fn lowering(&self) -> &LoweringArgs {
    match self {
      SubCommand::Lower(lower) => &lower.lowering,
      SubCommand::Check(check) => &check.lowering,
    }
  }
}

#[derive(Parser)]
#[command(author, version, about = "Shader method lowering", long_about = None)]
#[command(propagate_version = true)]
#[command(color = ColorChoice::Always)]
pub struct Cli {
  #[command(subcommand)]
  pub subcommand: SubCommand,

  /// Dump internal representations
  #[arg(long, value_enum, action = clap::ArgAction::Append, global = true)]
  pub dump: Vec<DumpKindCli>,

  /// Enable internal debug mode
  #[arg(long, default_value = "false", global = true)]
  pub debug: bool,

  /// Enable debug tracing for subsystems
  #[arg(long, value_enum, action = clap::ArgAction::Append, global = true)]
  pub debug_trace: Vec<DebugTraceCli>,

  /// Don't print any output except diagnostics
  #[arg(long, short = 'q', default_value = "false", global = true)]
  pub quiet: bool,

  /// Use verbose output
  #[arg(long, short, action = clap::ArgAction::Count, global = true)]
  pub verbose: u8,
}

#[cfg(test)]
mod tests {
  use clap::CommandFactory;

  use super::*;

  #[test]
  fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
  }

  #[test]
  fn parses_lower_with_overrides() {
    let cli = Cli::try_parse_from([
      "shade",
      "lower",
      "blur.json",
      "--dump",
      "ir",
      "--invocation-policy",
      "diagnostic",
      "--max-diagnostics",
      "8",
      "-vv",
    ])
    .unwrap();

    let lowering = cli.subcommand.lowering();
    assert_eq!(lowering.file_path, "blur.json");
    assert_eq!(lowering.invocation_policy, Some(InvocationPolicyCli::Diagnostic));
    assert_eq!(lowering.max_diagnostics, Some(8));
    assert!(cli.dump == vec![DumpKindCli::Ir]);
    assert_eq!(cli.verbose, 2);
  }

  #[test]
  fn zero_max_diagnostics_is_rejected() {
    assert!(Cli::try_parse_from(["shade", "check", "blur.json", "--max-diagnostics", "0"]).is_err());
  }
}
