//! Statements that wrap a body in a runtime guard of the host language.

use serde::{Deserialize, Serialize};
use shade_type::span::Span;

use crate::NodeId;

/// Body of a `checked { }` or `unchecked { }` statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostCheckedBlock {
  pub body: NodeId,
  #[serde(default)]
  pub span: Span,
}

impl HostCheckedBlock {
  pub fn new(
    body: NodeId,
    span: Span,
  ) -> Self {
    Self { body, span }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostFixed {
  pub type_name: String,
  pub variables: Vec<NodeId>,
  pub body: NodeId,
  #[serde(default)]
  pub span: Span,
}

impl HostFixed {
  pub fn new(
    type_name: String,
    variables: Vec<NodeId>,
    body: NodeId,
    span: Span,
  ) -> Self {
    Self {
      type_name,
      variables,
      body,
      span,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostLock {
  pub expression: NodeId,
  pub body: NodeId,
  #[serde(default)]
  pub span: Span,
}

impl HostLock {
  pub fn new(
    expression: NodeId,
    body: NodeId,
    span: Span,
  ) -> Self {
    Self { expression, body, span }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostTry {
  pub body: NodeId,
  /// Catch clause declarations.
  #[serde(default)]
  pub catches: Vec<NodeId>,
  #[serde(default)]
  pub finally: Option<NodeId>,
  #[serde(default)]
  pub span: Span,
}

impl HostTry {
  pub fn new(
    body: NodeId,
    catches: Vec<NodeId>,
    finally: Option<NodeId>,
    span: Span,
  ) -> Self {
    Self {
      body,
      catches,
      finally,
      span,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostUnsafe {
  pub body: NodeId,
  #[serde(default)]
  pub span: Span,
}

impl HostUnsafe {
  pub fn new(
    body: NodeId,
    span: Span,
  ) -> Self {
    Self { body, span }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostUsing {
  /// A variable declaration or an expression.
  pub resource: NodeId,
  pub body: NodeId,
  #[serde(default)]
  pub span: Span,
}

impl HostUsing {
  pub fn new(
    resource: NodeId,
    body: NodeId,
    span: Span,
  ) -> Self {
    Self { resource, body, span }
  }
}
