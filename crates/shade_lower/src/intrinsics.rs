use shade_ast::{HostNode, NodeId, expressions::HostExpression, expressions::invocation::HostInvocation};
use shade_ir::{Expression, IntrinsicFunction};

use crate::{
  Lowerer,
  error::{LoweringError, LoweringResult},
  resolver::{Binding, HostType},
};

/// Match a call shape against the intrinsic set. Only texture members qualify.
pub fn recognize_intrinsic(
  declaring_type: &HostType,
  member: &str,
  arguments: usize,
) -> Option<IntrinsicFunction> {
  if !declaring_type.is_texture() {
    return None;
  }

  match (member, arguments) {
    ("Sample", 1) => Some(IntrinsicFunction::Sample),
    ("Sample", 2) => Some(IntrinsicFunction::SampleLevel),
    _ => None,
  }
}

impl<'a> Lowerer<'a> {
  pub(crate) fn lower_invocation(
    &mut self,
    node: NodeId,
    invocation: &'a HostInvocation,
  ) -> LoweringResult<Option<Expression>> {
    let argument_count = invocation.arguments.len();
    let receiver = match self.node(invocation.target)? {
      HostNode::Expression(HostExpression::MemberReference(member)) => Some(member),
      _ => None,
    };

    let (target_name, member_binding) = match self.resolution.binding(node) {
      Binding::Member {
        declaring_type,
        member_name,
        ..
      } => (declaring_type.name().to_string(), Some((declaring_type, member_name))),
      // Delegates and other callable values.
      _ => (self.resolution.describe(invocation.target), None),
    };

    let unsupported = |member: &str| LoweringError::UnsupportedInvocation {
      target: target_name.clone(),
      member: member.to_string(),
      arguments: argument_count,
      span: invocation.span.clone(),
    };

    let Some((declaring_type, member)) = member_binding else {
      return Err(unsupported("Invoke"));
    };

    let (function, receiver) = match (recognize_intrinsic(&declaring_type, &member, argument_count), receiver) {
      (Some(function), Some(reference)) => (function, reference.target),
      _ => return Err(unsupported(&member)),
    };

    let target = self.lower_expression(receiver)?;
    let arguments = self.lower_expressions(&invocation.arguments)?;

    let (Some(target), Some(arguments)) = (target, arguments) else {
      return Ok(None);
    };

    Ok(Some(Expression::Intrinsic {
      target: Some(Box::new(target)),
      function,
      arguments,
    }))
  }
}

#[cfg(test)]
mod tests {
  use shade_type::types::DataType;

  use super::*;

  #[test]
  fn sample_arity_selects_the_intrinsic() {
    let texture = HostType::Shader(DataType::Texture2D);
    assert_eq!(recognize_intrinsic(&texture, "Sample", 1), Some(IntrinsicFunction::Sample));
    assert_eq!(recognize_intrinsic(&texture, "Sample", 2), Some(IntrinsicFunction::SampleLevel));
    assert_eq!(recognize_intrinsic(&texture, "Sample", 3), None);
    assert_eq!(recognize_intrinsic(&texture, "Load", 1), None);
  }

  #[test]
  fn cubemaps_sample_too() {
    let cube = HostType::Shader(DataType::CubeMap);
    assert_eq!(recognize_intrinsic(&cube, "Sample", 1), Some(IntrinsicFunction::Sample));
  }

  #[test]
  fn non_texture_types_never_match() {
    assert_eq!(recognize_intrinsic(&HostType::Shader(DataType::Float4), "Sample", 1), None);
    assert_eq!(recognize_intrinsic(&HostType::Named("Texture".to_string()), "Sample", 1), None);
  }
}
