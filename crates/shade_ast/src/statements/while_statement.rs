use serde::{Deserialize, Serialize};
use shade_type::span::Span;

use crate::NodeId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostWhile {
  pub condition: NodeId,
  pub body: NodeId,
  #[serde(default)]
  pub span: Span,
}

impl HostWhile {
  pub fn new(
    condition: NodeId,
    body: NodeId,
    span: Span,
  ) -> Self {
    Self { condition, body, span }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostDoWhile {
  pub body: NodeId,
  pub condition: NodeId,
  #[serde(default)]
  pub span: Span,
}

impl HostDoWhile {
  pub fn new(
    body: NodeId,
    condition: NodeId,
    span: Span,
  ) -> Self {
    Self { body, condition, span }
  }
}
