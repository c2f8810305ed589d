use serde::{Deserialize, Serialize};
use shade_type::span::Span;

use crate::NodeId;

/// `new Float4(x, y, z, 1)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostObjectCreation {
  pub type_name: String,
  pub arguments: Vec<NodeId>,
  #[serde(default)]
  pub span: Span,
}

impl HostObjectCreation {
  pub fn new(
    type_name: String,
    arguments: Vec<NodeId>,
    span: Span,
  ) -> Self {
    Self {
      type_name,
      arguments,
      span,
    }
  }
}
