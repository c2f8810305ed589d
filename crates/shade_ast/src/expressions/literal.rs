use serde::{Deserialize, Serialize};
use shade_type::{span::Span, value::LiteralValue};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostLiteral {
  pub value: LiteralValue,
  #[serde(default)]
  pub span: Span,
}

impl HostLiteral {
  pub fn new(
    value: LiteralValue,
    span: Span,
  ) -> Self {
    Self { value, span }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostNull {
  #[serde(default)]
  pub span: Span,
}

impl HostNull {
  pub fn new(span: Span) -> Self {
    Self { span }
  }
}
