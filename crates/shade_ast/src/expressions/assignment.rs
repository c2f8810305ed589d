use serde::{Deserialize, Serialize};
use shade_type::span::Span;

use crate::NodeId;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostAssignmentOperator {
  Assign,
  Add,
  Subtract,
  Multiply,
  Divide,
  Modulus,
  ShiftLeft,
  ShiftRight,
  BitwiseAnd,
  BitwiseOr,
  ExclusiveOr,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostAssignment {
  pub left: NodeId,
  pub operator: HostAssignmentOperator,
  pub right: NodeId,
  #[serde(default)]
  pub span: Span,
}

impl HostAssignment {
  pub fn new(
    left: NodeId,
    operator: HostAssignmentOperator,
    right: NodeId,
    span: Span,
  ) -> Self {
    Self {
      left,
      operator,
      right,
      span,
    }
  }
}
