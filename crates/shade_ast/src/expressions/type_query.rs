use serde::{Deserialize, Serialize};
use shade_type::span::Span;

use crate::NodeId;

/// Operand of `sizeof(T)`, `typeof(T)` and `default(T)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostTypeOperand {
  pub type_name: String,
  #[serde(default)]
  pub span: Span,
}

impl HostTypeOperand {
  pub fn new(
    type_name: String,
    span: Span,
  ) -> Self {
    Self { type_name, span }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostStackAlloc {
  pub type_name: String,
  pub count: NodeId,
  #[serde(default)]
  pub span: Span,
}

impl HostStackAlloc {
  pub fn new(
    type_name: String,
    count: NodeId,
    span: Span,
  ) -> Self {
    Self { type_name, count, span }
  }
}

/// `expression as T` or `expression is T`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostTypeTest {
  pub expression: NodeId,
  pub type_name: String,
  #[serde(default)]
  pub span: Span,
}

impl HostTypeTest {
  pub fn new(
    expression: NodeId,
    type_name: String,
    span: Span,
  ) -> Self {
    Self {
      expression,
      type_name,
      span,
    }
  }
}
