use serde::{Deserialize, Serialize};
use shade_type::span::Span;

use crate::NodeId;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostBinaryOperator {
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
  ConditionalAnd,
  ConditionalOr,
  Equality,
  Inequality,
  LessThan,
  LessThanOrEqual,
  GreaterThan,
  GreaterThanOrEqual,
}

impl HostBinaryOperator {
  pub const ALL: [HostBinaryOperator; 18] = [
    HostBinaryOperator::Add,
    HostBinaryOperator::Subtract,
    HostBinaryOperator::Multiply,
    HostBinaryOperator::Divide,
    HostBinaryOperator::Modulus,
    HostBinaryOperator::ShiftLeft,
    HostBinaryOperator::ShiftRight,
    HostBinaryOperator::BitwiseAnd,
    HostBinaryOperator::BitwiseOr,
    HostBinaryOperator::ExclusiveOr,
    HostBinaryOperator::ConditionalAnd,
    HostBinaryOperator::ConditionalOr,
    HostBinaryOperator::Equality,
    HostBinaryOperator::Inequality,
    HostBinaryOperator::LessThan,
    HostBinaryOperator::LessThanOrEqual,
    HostBinaryOperator::GreaterThan,
    HostBinaryOperator::GreaterThanOrEqual,
  ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostBinary {
  pub left: NodeId,
  pub operator: HostBinaryOperator,
  pub right: NodeId,
  #[serde(default)]
  pub span: Span,
}

impl HostBinary {
  pub fn new(
    left: NodeId,
    operator: HostBinaryOperator,
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
