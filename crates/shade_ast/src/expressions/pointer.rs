use serde::{Deserialize, Serialize};
use shade_type::span::Span;

use crate::NodeId;

/// `target->member`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostPointerReference {
  pub target: NodeId,
  pub member_name: String,
  #[serde(default)]
  pub span: Span,
}

impl HostPointerReference {
  pub fn new(
    target: NodeId,
    member_name: String,
    span: Span,
  ) -> Self {
    Self {
      target,
      member_name,
      span,
    }
  }
}
