use serde::{Deserialize, Serialize};
use shade_type::span::Span;

use crate::NodeId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostNamed {
  pub name: String,
  pub expression: NodeId,
  #[serde(default)]
  pub span: Span,
}

impl HostNamed {
  pub fn new(
    name: String,
    expression: NodeId,
    span: Span,
  ) -> Self {
    Self { name, expression, span }
  }
}
