use serde::{Deserialize, Serialize};
use shade_type::span::Span;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostEmptyExpression {
  #[serde(default)]
  pub span: Span,
}

impl HostEmptyExpression {
  pub fn new(span: Span) -> Self {
    Self { span }
  }
}
