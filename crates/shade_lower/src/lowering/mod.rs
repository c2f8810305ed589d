//! One host node in, one IR node (or nothing) out.
//!
//! `dispatch_*` hold the per-kind rules. The `lower_*` wrappers around them are the
//! recovery points: a recoverable error from anywhere below becomes a diagnostic and
//! the node is dropped, while fatal errors keep propagating.

mod expressions;
mod statements;

use shade_ast::NodeId;
use shade_ir::{Expression, Statement, VariableInitializer};
use shade_type::span::Span;

use crate::{
  Lowerer,
  error::{LoweringError, LoweringResult},
};

impl<'a> Lowerer<'a> {
  pub(crate) fn lower_statement(
    &mut self,
    node: NodeId,
  ) -> LoweringResult<Option<Statement>> {
    let result = self.dispatch_statement(node);
    self.recover(result)
  }

  pub(crate) fn lower_expression(
    &mut self,
    node: NodeId,
  ) -> LoweringResult<Option<Expression>> {
    let result = self.dispatch_expression(node);
    self.recover(result)
  }

  pub(crate) fn lower_variable_initializer(
    &mut self,
    node: NodeId,
  ) -> LoweringResult<Option<VariableInitializer>> {
    let result = self.dispatch_variable_initializer(node);
    self.recover(result)
  }

  /// Lower the statements of a block in order, dropping the ones that did not lower.
  pub(crate) fn lower_statements(
    &mut self,
    nodes: &[NodeId],
  ) -> LoweringResult<Vec<Statement>> {
    let mut statements = Vec::with_capacity(nodes.len());
    for node in nodes {
      if let Some(statement) = self.lower_statement(*node)? {
        statements.push(statement);
      }
    }
    Ok(statements)
  }

  /// Lower a header statement list (for-loop initializers or iterators). Every
  /// entry is lowered so all diagnostics are collected, but the list only exists
  /// if none of them was dropped.
  pub(crate) fn lower_statement_list(
    &mut self,
    nodes: &[NodeId],
  ) -> LoweringResult<Option<Vec<Statement>>> {
    let mut statements = Vec::with_capacity(nodes.len());
    let mut complete = true;
    for node in nodes {
      match self.lower_statement(*node)? {
        Some(statement) => statements.push(statement),
        None => complete = false,
      }
    }
    Ok(complete.then_some(statements))
  }

  /// Lower an argument list in order. `None` if any argument did not lower.
  pub(crate) fn lower_expressions(
    &mut self,
    nodes: &[NodeId],
  ) -> LoweringResult<Option<Vec<Expression>>> {
    let mut expressions = Vec::with_capacity(nodes.len());
    let mut complete = true;
    for node in nodes {
      match self.lower_expression(*node)? {
        Some(expression) => expressions.push(expression),
        None => complete = false,
      }
    }
    Ok(complete.then_some(expressions))
  }
}

fn unsupported(
  feature: &'static str,
  span: &Span,
) -> LoweringError {
  LoweringError::UnsupportedFeature {
    feature,
    span: span.clone(),
  }
}
