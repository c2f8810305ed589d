use serde::{Deserialize, Serialize};
use shade_type::span::Span;

use crate::NodeId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostIndexer {
  pub target: NodeId,
  pub arguments: Vec<NodeId>,
  #[serde(default)]
  pub span: Span,
}

impl HostIndexer {
  pub fn new(
    target: NodeId,
    arguments: Vec<NodeId>,
    span: Span,
  ) -> Self {
    Self {
      target,
      arguments,
      span,
    }
  }
}
