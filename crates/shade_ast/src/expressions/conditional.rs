use serde::{Deserialize, Serialize};
use shade_type::span::Span;

use crate::NodeId;

/// `condition ? then_expression : else_expression`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostConditional {
  pub condition: NodeId,
  pub then_expression: NodeId,
  pub else_expression: NodeId,
  #[serde(default)]
  pub span: Span,
}

impl HostConditional {
  pub fn new(
    condition: NodeId,
    then_expression: NodeId,
    else_expression: NodeId,
    span: Span,
  ) -> Self {
    Self {
      condition,
      then_expression,
      else_expression,
      span,
    }
  }
}
