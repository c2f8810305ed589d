mod cli;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser as ClapParser;
use colored::*;
use shade_config::{ShadeConfig, ShadeProjectConfig};
use shade_driver::lower_file;
use shade_driver::project::{PROJECT_FILE, find_project_root, load_project_toml};

use cli::{Cli, SubCommand};

/// shade.toml of the project the request belongs to, searched upward from the request.
fn load_project_config(file_path: &str) -> Option<ShadeProjectConfig> {
  let start = match std::env::current_dir() {
    Ok(cwd) => cwd.join(file_path),
    Err(_) => PathBuf::from(file_path),
  };

  let root = find_project_root(Path::new(&start))?;

  match load_project_toml(&root.join(PROJECT_FILE)) {
    Ok(config) => Some(config),
    Err(e) => {
      eprintln!("{} {}", "Error:".red().bold(), e);
      std::process::exit(1);
    },
  }
}

fn parse_cli_to_config(cli: &Cli) -> Arc<ShadeConfig> {
  let mut config = ShadeConfig::new_basic(
    cli.debug,
    cli.debug_trace.iter().copied().map(Into::into).collect(),
    cli.quiet,
    cli.verbose,
  );

  let lowering = cli.subcommand.lowering();

  if let Some(project) = load_project_config(&lowering.file_path) {
    config = config.with_project(project);
  }

  config.lowering = config.lowering.with_overrides(
    lowering.invocation_policy.map(Into::into),
    lowering.max_diagnostics.map(|limit| limit as usize),
  );

  config.dump = cli.dump.iter().copied().map(Into::into).collect();
  config.check_mode = matches!(cli.subcommand, SubCommand::Check(_));

  Arc::new(config)
}

fn main() {
  let cli = Cli::parse();
  let config = parse_cli_to_config(&cli);
  let file_path = cli.subcommand.lowering().file_path.clone();

  match lower_file(config, &file_path) {
    Ok(()) => {},
    Err(()) => std::process::exit(1),
  }
}
