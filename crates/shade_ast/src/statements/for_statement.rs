use serde::{Deserialize, Serialize};
use shade_type::span::Span;

use crate::NodeId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostFor {
  pub initializers: Vec<NodeId>,
  #[serde(default)]
  pub condition: Option<NodeId>,
  pub iterators: Vec<NodeId>,
  pub body: NodeId,
  #[serde(default)]
  pub span: Span,
}

impl HostFor {
  pub fn new(
    initializers: Vec<NodeId>,
    condition: Option<NodeId>,
    iterators: Vec<NodeId>,
    body: NodeId,
    span: Span,
  ) -> Self {
    Self {
      initializers,
      condition,
      iterators,
      body,
      span,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostForeach {
  pub type_name: String,
  pub variable_name: String,
  pub collection: NodeId,
  pub body: NodeId,
  #[serde(default)]
  pub span: Span,
}

impl HostForeach {
  pub fn new(
    type_name: String,
    variable_name: String,
    collection: NodeId,
    body: NodeId,
    span: Span,
  ) -> Self {
    Self {
      type_name,
      variable_name,
      collection,
      body,
      span,
    }
  }
}
