use serde::{Deserialize, Serialize};
use shade_type::span::Span;

use crate::NodeId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostCast {
  pub type_name: String,
  pub expression: NodeId,
  #[serde(default)]
  pub span: Span,
}

impl HostCast {
  pub fn new(
    type_name: String,
    expression: NodeId,
    span: Span,
  ) -> Self {
    Self {
      type_name,
      expression,
      span,
    }
  }
}
