use serde::{Deserialize, Serialize};
use shade_type::span::Span;

use crate::NodeId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostLambda {
  #[serde(default)]
  pub parameters: Vec<String>,
  pub body: NodeId,
  #[serde(default)]
  pub span: Span,
}

impl HostLambda {
  pub fn new(
    parameters: Vec<String>,
    body: NodeId,
    span: Span,
  ) -> Self {
    Self {
      parameters,
      body,
      span,
    }
  }
}

/// `delegate (int x) { ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostAnonymousMethod {
  #[serde(default)]
  pub parameters: Vec<String>,
  pub body: NodeId,
  #[serde(default)]
  pub span: Span,
}

impl HostAnonymousMethod {
  pub fn new(
    parameters: Vec<String>,
    body: NodeId,
    span: Span,
  ) -> Self {
    Self {
      parameters,
      body,
      span,
    }
  }
}

/// `new { A = 1, B = x }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostAnonymousType {
  pub initializers: Vec<NodeId>,
  #[serde(default)]
  pub span: Span,
}

impl HostAnonymousType {
  pub fn new(
    initializers: Vec<NodeId>,
    span: Span,
  ) -> Self {
    Self { initializers, span }
  }
}
