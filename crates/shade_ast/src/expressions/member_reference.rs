use serde::{Deserialize, Serialize};
use shade_type::span::Span;

use crate::NodeId;

/// `target.member`. Covers field access, swizzles and effect members reached through
/// `this`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostMemberReference {
  pub target: NodeId,
  pub member_name: String,
  #[serde(default)]
  pub span: Span,
}

impl HostMemberReference {
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
