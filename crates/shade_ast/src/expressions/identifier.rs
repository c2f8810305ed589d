use serde::{Deserialize, Serialize};
use shade_type::span::Span;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostIdentifier {
  pub name: String,
  #[serde(default)]
  pub span: Span,
}

impl HostIdentifier {
  pub fn new(
    name: String,
    span: Span,
  ) -> Self {
    Self { name, span }
  }
}
