use serde::{Deserialize, Serialize};
use shade_type::span::Span;

use crate::NodeId;

/// `target(arguments)`. For member calls the target is a member reference; the
/// resolver binds the invocation node itself to the invoked member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostInvocation {
  pub target: NodeId,
  pub arguments: Vec<NodeId>,
  #[serde(default)]
  pub span: Span,
}

impl HostInvocation {
  pub fn new(
    target: NodeId,
    arguments: Vec<NodeId>,
    span: Span,
  ) -> Self {
    Self {
      target,
      arguments,
      span,
    }
  }
}
