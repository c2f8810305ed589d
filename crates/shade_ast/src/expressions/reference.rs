use serde::{Deserialize, Serialize};
use shade_type::span::Span;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostThis {
  #[serde(default)]
  pub span: Span,
}

impl HostThis {
  pub fn new(span: Span) -> Self {
    Self { span }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostBase {
  #[serde(default)]
  pub span: Span,
}

impl HostBase {
  pub fn new(span: Span) -> Self {
    Self { span }
  }
}

/// A type used in expression position, e.g. `Math` in `Math.Max(a, b)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostTypeReference {
  pub type_name: String,
  #[serde(default)]
  pub span: Span,
}

impl HostTypeReference {
  pub fn new(
    type_name: String,
    span: Span,
  ) -> Self {
    Self { type_name, span }
  }
}
