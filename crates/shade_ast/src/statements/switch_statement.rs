use serde::{Deserialize, Serialize};
use shade_type::span::Span;

use crate::NodeId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostSwitch {
  pub expression: NodeId,
  /// Switch section declarations.
  pub sections: Vec<NodeId>,
  #[serde(default)]
  pub span: Span,
}

impl HostSwitch {
  pub fn new(
    expression: NodeId,
    sections: Vec<NodeId>,
    span: Span,
  ) -> Self {
    Self {
      expression,
      sections,
      span,
    }
  }
}
