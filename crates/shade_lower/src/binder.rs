use shade_ast::NodeId;
use shade_ir::VariableReference;
use shade_type::definition::{ParameterId, VariableId};

use crate::{
  Lowerer,
  error::{LoweringError, LoweringResult},
  resolver::{Binding, LocalSymbol},
};

impl<'a> Lowerer<'a> {
  /// Bind an identifier or effect member reference to a registered shader symbol.
  ///
  /// Locals win over effect members. Parameters are found by name, variables by
  /// the resolver's symbol identity.
  pub(crate) fn bind_symbol(
    &self,
    node: NodeId,
  ) -> LoweringResult<VariableReference> {
    match self.resolution.binding(node) {
      Binding::Local {
        symbol,
        is_parameter: true,
      } => self.parameter_for(&symbol).map(VariableReference::Parameter),
      Binding::Local {
        symbol,
        is_parameter: false,
      } => self.variable_for(&symbol).map(VariableReference::Variable),
      Binding::Member { member_name, .. } => self.bind_effect_member(node, &member_name),
      Binding::Other { .. } | Binding::Unresolved => Err(LoweringError::UnresolvedSymbol {
        name: self.resolution.describe(node),
        span: self.resolution.span_of(node),
      }),
    }
  }

  /// The variable a declarator introduces. It must already be registered.
  pub(crate) fn bind_declared_variable(
    &self,
    node: NodeId,
    name: &str,
  ) -> LoweringResult<VariableId> {
    match self.resolution.binding(node) {
      Binding::Local {
        symbol,
        is_parameter: false,
      } => self.variable_for(&symbol),
      other => Err(LoweringError::invariant(format!(
        "declarator '{}' resolved as {} instead of a local",
        name, other
      ))),
    }
  }

  // Constant, then literal, then texture. The first table with the name wins.
  fn bind_effect_member(
    &self,
    node: NodeId,
    name: &str,
  ) -> LoweringResult<VariableReference> {
    let effect = self.ctx.effect;

    if let Some(id) = effect.constant_named(name) {
      return Ok(VariableReference::Constant(id));
    }

    if let Some(id) = effect.literal_named(name) {
      return Ok(VariableReference::Literal(id));
    }

    if let Some(id) = effect.texture_named(name) {
      return Ok(VariableReference::Texture(id));
    }

    Err(LoweringError::UnresolvedSymbol {
      name: name.to_string(),
      span: self.resolution.span_of(node),
    })
  }

  fn parameter_for(
    &self,
    symbol: &LocalSymbol,
  ) -> LoweringResult<ParameterId> {
    let method = self.ctx.method;

    match method.parameters_named(&symbol.name).as_slice() {
      [id] => Ok(*id),
      [] => Err(LoweringError::invariant(format!(
        "parameter '{}' is not registered for method '{}'",
        symbol.name, method.name
      ))),
      many => Err(LoweringError::invariant(format!(
        "parameter '{}' is registered {} times for method '{}'",
        symbol.name,
        many.len(),
        method.name
      ))),
    }
  }

  fn variable_for(
    &self,
    symbol: &LocalSymbol,
  ) -> LoweringResult<VariableId> {
    let method = self.ctx.method;

    match method.variables_for(symbol.id).as_slice() {
      [id] => Ok(*id),
      [] => Err(LoweringError::invariant(format!(
        "variable '{}' ({}) is not registered for method '{}'",
        symbol.name, symbol.id, method.name
      ))),
      many => Err(LoweringError::invariant(format!(
        "variable '{}' ({}) is registered {} times for method '{}'",
        symbol.name,
        symbol.id,
        many.len(),
        method.name
      ))),
    }
  }
}
