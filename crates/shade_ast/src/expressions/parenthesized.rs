use serde::{Deserialize, Serialize};
use shade_type::span::Span;

use crate::NodeId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostParenthesized {
  pub expression: NodeId,
  #[serde(default)]
  pub span: Span,
}

impl HostParenthesized {
  pub fn new(
    expression: NodeId,
    span: Span,
  ) -> Self {
    Self { expression, span }
  }
}
