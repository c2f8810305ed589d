use serde::{Deserialize, Serialize};
use shade_type::span::Span;

use crate::NodeId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostReturn {
  #[serde(default)]
  pub value: Option<NodeId>,
  #[serde(default)]
  pub span: Span,
}

impl HostReturn {
  pub fn new(
    value: Option<NodeId>,
    span: Span,
  ) -> Self {
    Self { value, span }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostBreak {
  #[serde(default)]
  pub span: Span,
}

impl HostBreak {
  pub fn new(span: Span) -> Self {
    Self { span }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostContinue {
  #[serde(default)]
  pub span: Span,
}

impl HostContinue {
  pub fn new(span: Span) -> Self {
    Self { span }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GotoTarget {
  /// `goto label;`
  Label(String),
  /// `goto case 3;`
  Case(NodeId),
  /// `goto default;`
  Default,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostGoto {
  pub target: GotoTarget,
  #[serde(default)]
  pub span: Span,
}

impl HostGoto {
  pub fn new(
    target: GotoTarget,
    span: Span,
  ) -> Self {
    Self { target, span }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostLabel {
  pub label: String,
  #[serde(default)]
  pub span: Span,
}

impl HostLabel {
  pub fn new(
    label: String,
    span: Span,
  ) -> Self {
    Self { label, span }
  }
}

/// `yield return value;`, or `yield break;` when `value` is `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostYield {
  #[serde(default)]
  pub value: Option<NodeId>,
  #[serde(default)]
  pub span: Span,
}

impl HostYield {
  pub fn new(
    value: Option<NodeId>,
    span: Span,
  ) -> Self {
    Self { value, span }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostThrow {
  #[serde(default)]
  pub value: Option<NodeId>,
  #[serde(default)]
  pub span: Span,
}

impl HostThrow {
  pub fn new(
    value: Option<NodeId>,
    span: Span,
  ) -> Self {
    Self { value, span }
  }
}
