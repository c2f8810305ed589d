use serde::{Deserialize, Serialize};
use shade_type::span::Span;

use crate::NodeId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostExpressionStatement {
  pub expression: NodeId,
  #[serde(default)]
  pub span: Span,
}

impl HostExpressionStatement {
  pub fn new(
    expression: NodeId,
    span: Span,
  ) -> Self {
    Self { expression, span }
  }
}
