use serde::{Deserialize, Serialize};
use shade_type::span::Span;

/// A lone `;`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostEmptyStatement {
  #[serde(default)]
  pub span: Span,
}

impl HostEmptyStatement {
  pub fn new(span: Span) -> Self {
    Self { span }
  }
}

/// `#if`, `#region` and friends, kept in the tree by the host parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostPreprocessorDirective {
  pub text: String,
  #[serde(default)]
  pub span: Span,
}

impl HostPreprocessorDirective {
  pub fn new(
    text: String,
    span: Span,
  ) -> Self {
    Self { text, span }
  }
}
