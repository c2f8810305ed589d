use serde::{Deserialize, Serialize};
use shade_type::span::Span;

use crate::NodeId;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostUnaryOperator {
  Not,
  BitNot,
  Minus,
  Plus,
  Increment,
  Decrement,
  PostIncrement,
  PostDecrement,
  /// `*p`
  Dereference,
  /// `&x`
  AddressOf,
}

impl HostUnaryOperator {
  pub fn is_pointer_operator(&self) -> bool {
    matches!(self, HostUnaryOperator::Dereference | HostUnaryOperator::AddressOf)
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostUnary {
  pub operator: HostUnaryOperator,
  pub operand: NodeId,
  #[serde(default)]
  pub span: Span,
}

impl HostUnary {
  pub fn new(
    operator: HostUnaryOperator,
    operand: NodeId,
    span: Span,
  ) -> Self {
    Self { operator, operand, span }
  }
}
