use serde::{Deserialize, Serialize};
use shade_type::span::Span;

use crate::NodeId;

/// `new float[n]` or `new float[] { ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostArrayCreation {
  pub element_type: String,
  #[serde(default)]
  pub sizes: Vec<NodeId>,
  #[serde(default)]
  pub initializer: Option<NodeId>,
  #[serde(default)]
  pub span: Span,
}

impl HostArrayCreation {
  pub fn new(
    element_type: String,
    sizes: Vec<NodeId>,
    initializer: Option<NodeId>,
    span: Span,
  ) -> Self {
    Self {
      element_type,
      sizes,
      initializer,
      span,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostArrayInitializer {
  pub elements: Vec<NodeId>,
  #[serde(default)]
  pub span: Span,
}

impl HostArrayInitializer {
  pub fn new(
    elements: Vec<NodeId>,
    span: Span,
  ) -> Self {
    Self { elements, span }
  }
}

/// The `[,]` rank suffix of an array type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostArraySpecifier {
  pub dimensions: u32,
  #[serde(default)]
  pub span: Span,
}

impl HostArraySpecifier {
  pub fn new(
    dimensions: u32,
    span: Span,
  ) -> Self {
    Self { dimensions, span }
  }
}
