use serde::{Deserialize, Serialize};
use shade_type::span::Span;

use crate::NodeId;

/// `checked(expr)` or `unchecked(expr)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostCheckedExpression {
  pub expression: NodeId,
  #[serde(default)]
  pub span: Span,
}

impl HostCheckedExpression {
  pub fn new(
    expression: NodeId,
    span: Span,
  ) -> Self {
    Self { expression, span }
  }
}
