use serde::{Deserialize, Serialize};
use shade_type::span::Span;

use crate::NodeId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostIf {
  pub condition: NodeId,
  pub then_branch: NodeId,
  #[serde(default)]
  pub else_branch: Option<NodeId>,
  #[serde(default)]
  pub span: Span,
}

impl HostIf {
  pub fn new(
    condition: NodeId,
    then_branch: NodeId,
    else_branch: Option<NodeId>,
    span: Span,
  ) -> Self {
    Self {
      condition,
      then_branch,
      else_branch,
      span,
    }
  }
}
