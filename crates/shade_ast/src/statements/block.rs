use serde::{Deserialize, Serialize};
use shade_type::span::Span;

use crate::NodeId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostBlock {
  pub statements: Vec<NodeId>,
  #[serde(default)]
  pub span: Span,
}

impl HostBlock {
  pub fn new(
    statements: Vec<NodeId>,
    span: Span,
  ) -> Self {
    Self { statements, span }
  }
}
