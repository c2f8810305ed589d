use serde::{Deserialize, Serialize};
use shade_type::span::Span;

use crate::NodeId;

/// `float x = 1, y;`. Each declarator is its own [`HostVariableInitializer`] node so the
/// resolver can bind it to a local symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostVariableDeclaration {
  pub type_name: String,
  pub initializers: Vec<NodeId>,
  #[serde(default)]
  pub span: Span,
}

impl HostVariableDeclaration {
  pub fn new(
    type_name: String,
    initializers: Vec<NodeId>,
    span: Span,
  ) -> Self {
    Self {
      type_name,
      initializers,
      span,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostVariableInitializer {
  pub name: String,
  #[serde(default)]
  pub initializer: Option<NodeId>,
  #[serde(default)]
  pub span: Span,
}

impl HostVariableInitializer {
  pub fn new(
    name: String,
    initializer: Option<NodeId>,
    span: Span,
  ) -> Self {
    Self {
      name,
      initializer,
      span,
    }
  }
}
