use std::fmt::Write;
use std::path::Path;
use std::sync::Arc;

use colored::*;
use shade_config::{DebugTrace, DumpKind, ShadeConfig};
use shade_diagnostics::message::DiagnosticMessage;
use shade_log::{log_dbg, phase_log, phase_ok, phase_warn, trace_dbg};
use shade_lower::{LoweredMethod, Lowerer, LoweringContext, LoweringError};
use shade_type::definition::ParameterQualifier;
use shade_type::file::SourceMap;

use crate::request::LoweringRequest;
use crate::traced::TracingResolver;

/// Every method of one request, lowered in request order.
#[derive(Debug, Clone, PartialEq)]
pub struct LoweringSummary {
  pub methods: Vec<LoweredMethod>,
}

impl LoweringSummary {
  /// All user diagnostics, method by method.
  pub fn diagnostics(&self) -> impl Iterator<Item = &DiagnosticMessage> {
    self.methods.iter().flat_map(|m| m.diagnostics.iter())
  }

  pub fn diagnostic_count(&self) -> usize {
    self.methods.iter().map(|m| m.diagnostics.len()).sum()
  }

  pub fn fatal_count(&self) -> usize {
    self.methods.iter().filter(|m| m.fatal.is_some()).count()
  }

  pub fn has_errors(&self) -> bool {
    self.methods.iter().any(|m| m.has_errors())
  }

  pub fn method(
    &self,
    name: &str,
  ) -> Option<&LoweredMethod> {
    self.methods.iter().find(|m| m.name == name)
  }
}

fn dump_requested(
  config: &ShadeConfig,
  kind: DumpKind,
) -> bool {
  !config.check_mode && config.dumps(kind)
}

fn write_dump_output(content: &str) {
  println!("\n{}", content);
}

fn qualifier_name(qualifier: ParameterQualifier) -> &'static str {
  match qualifier {
    ParameterQualifier::In => "in",
    ParameterQualifier::Out => "out",
    ParameterQualifier::InOut => "inout",
  }
}

fn format_request(request: &LoweringRequest) -> String {
  let mut output = String::new();
  let effect = &request.effect;

  writeln!(output, "effect {}", effect.name).unwrap();
  for (_, constant) in effect.constants.iter() {
    writeln!(output, "  const {}: {}", constant.name, constant.data_type).unwrap();
  }
  for (_, literal) in effect.literals.iter() {
    writeln!(output, "  lit {}: {} = {}", literal.name, literal.data_type, literal.value).unwrap();
  }
  for (_, texture) in effect.textures.iter() {
    match texture.slot {
      Some(slot) => {
        writeln!(output, "  tex {}: {} (slot {})", texture.name, texture.data_type, slot).unwrap();
      },
      None => {
        writeln!(output, "  tex {}: {}", texture.name, texture.data_type).unwrap();
      },
    }
  }

  for method in &request.methods {
    let symbols = &method.symbols;
    writeln!(output, "method {} (body node {})", symbols.name, method.body.index()).unwrap();
    for (_, param) in symbols.parameters.iter() {
      writeln!(
        output,
        "  param {} {}: {}",
        qualifier_name(param.qualifier),
        param.name,
        param.data_type
      )
      .unwrap();
    }
    for (_, var) in symbols.variables.iter() {
      writeln!(output, "  var {}{}: {}", var.name, var.host_symbol, var.data_type).unwrap();
    }
  }

  write!(output, "nodes: {}, bindings: {}", request.nodes.len(), request.bindings.len()).unwrap();
  output
}

fn format_bindings(request: &LoweringRequest) -> String {
  request
    .bindings
    .sorted()
    .iter()
    .map(|(node, binding)| format!("node {}: {}", node.index(), binding))
    .collect::<Vec<_>>()
    .join("\n")
}

/// Lower every method of `request`. Methods are independent; a fatal error in one
/// does not stop the next.
pub fn lower_request(
  config: &ShadeConfig,
  request: &LoweringRequest,
) -> LoweringSummary {
  let resolver = TracingResolver::new(&request.bindings, config);
  let mut methods = Vec::with_capacity(request.methods.len());

  for method in &request.methods {
    phase_log!(config, "Lowering... {}", method.symbols.name);

    let ctx = LoweringContext::new(
      &request.nodes,
      &resolver,
      &method.symbols,
      &request.effect,
      &config.lowering,
    );
    let lowered = Lowerer::lower_method(ctx, method.body);

    trace_dbg!(
      config,
      DebugTrace::Lower,
      "{}: {} IR statements, {} diagnostics{}",
      lowered.name,
      lowered.body.as_ref().map(|body| body.count()).unwrap_or(0),
      lowered.diagnostics.len(),
      if lowered.fatal.is_some() { ", aborted" } else { "" }
    );

    methods.push(lowered);
  }

  LoweringSummary { methods }
}

fn report_fatal(
  method: &LoweredMethod,
  error: &LoweringError,
) {
  match error {
    LoweringError::TooManyDiagnostics(limit) => {
      eprintln!(
        "{} lowering of '{}' stopped after {} diagnostics",
        "Error:".red().bold(),
        method.name,
        limit
      );
    },
    _ => shade_diagnostics::render_internal_error(&format!("method '{}'", method.name), &error.to_string()),
  }
}

/// Lower a request file and report the outcome.
///
/// Diagnostics are rendered against the embedded source when the request carries
/// one. Returns `Err(())` when any method produced a diagnostic or aborted.
pub fn lower_file(
  config: Arc<ShadeConfig>,
  file_path: &str,
) -> Result<(), ()> {
  log_dbg!(&config, "reading request {}", file_path);

  let request = match LoweringRequest::load(Path::new(file_path)) {
    Ok(request) => request,
    Err(e) => {
      eprintln!("{} {}", "Error:".red().bold(), e);
      return Err(());
    },
  };

  trace_dbg!(
    &config,
    DebugTrace::Request,
    "effect '{}' with {} nodes, {} bindings, {} methods",
    request.effect.name,
    request.nodes.len(),
    request.bindings.len(),
    request.methods.len()
  );

  if dump_requested(&config, DumpKind::Request) {
    write_dump_output(&format_request(&request));
  }

  if dump_requested(&config, DumpKind::Bindings) {
    write_dump_output(&format_bindings(&request));
  }

  let mut sm = SourceMap::new();
  if let Some(source) = &request.source {
    sm.add_file(source.path.clone(), source.text.clone());
  }

  let summary = lower_request(&config, &request);

  for method in &summary.methods {
    for message in &method.diagnostics {
      shade_diagnostics::render(&message.report(), &sm);
    }

    if let Some(error) = &method.fatal {
      report_fatal(method, error);
    }
  }

  if dump_requested(&config, DumpKind::Ir) {
    for (lowered, method) in summary.methods.iter().zip(&request.methods) {
      if lowered.fatal.is_none() {
        write_dump_output(&shade_ir::display::print_method(
          &method.symbols,
          &request.effect,
          lowered.body.as_ref(),
        ));
      }
    }
  }

  if summary.has_errors() {
    phase_warn!(
      &config,
      "{} methods lowered with {} diagnostics, {} aborted",
      summary.methods.len(),
      summary.diagnostic_count(),
      summary.fatal_count()
    );
    return Err(());
  }

  phase_ok!(&config, "Lowered {} methods of {}", summary.methods.len(), request.effect.name);
  Ok(())
}
