use shade_ast::NodeId;
use shade_config::{DebugTrace, ShadeConfig};
use shade_log::trace_dbg;
use shade_lower::{Binding, ResolutionTable, SemanticResolver};

/// Answers from the request's resolution table, echoed under `--debug-trace resolve`.
pub(crate) struct TracingResolver<'a> {
  table: &'a ResolutionTable,
  config: &'a ShadeConfig,
}

impl<'a> TracingResolver<'a> {
  pub(crate) fn new(
    table: &'a ResolutionTable,
    config: &'a ShadeConfig,
  ) -> Self {
    Self { table, config }
  }
}

impl SemanticResolver for TracingResolver<'_> {
  fn resolve(
    &self,
    node: NodeId,
  ) -> Binding {
    let binding = self.table.resolve(node);
    trace_dbg!(self.config, DebugTrace::Resolve, "node {} -> {}", node.index(), binding);
    binding
  }
}
