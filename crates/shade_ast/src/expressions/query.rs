use serde::{Deserialize, Serialize};
use shade_type::span::Span;

use crate::NodeId;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryClauseKind {
  Continuation,
  From,
  Let,
  Where,
  Join,
  OrderBy,
  Ordering,
  Select,
  GroupBy,
}

impl QueryClauseKind {
  pub fn name(&self) -> &'static str {
    match self {
      QueryClauseKind::Continuation => "query-continuation",
      QueryClauseKind::From => "query-from",
      QueryClauseKind::Let => "query-let",
      QueryClauseKind::Where => "query-where",
      QueryClauseKind::Join => "query-join",
      QueryClauseKind::OrderBy => "query-orderby",
      QueryClauseKind::Ordering => "query-ordering",
      QueryClauseKind::Select => "query-select",
      QueryClauseKind::GroupBy => "query-group",
    }
  }
}

/// `from x in xs where ... select ...`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostQuery {
  pub clauses: Vec<NodeId>,
  #[serde(default)]
  pub span: Span,
}

impl HostQuery {
  pub fn new(
    clauses: Vec<NodeId>,
    span: Span,
  ) -> Self {
    Self { clauses, span }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostQueryClause {
  pub clause: QueryClauseKind,
  #[serde(default)]
  pub expressions: Vec<NodeId>,
  #[serde(default)]
  pub span: Span,
}

impl HostQueryClause {
  pub fn new(
    clause: QueryClauseKind,
    expressions: Vec<NodeId>,
    span: Span,
  ) -> Self {
    Self {
      clause,
      expressions,
      span,
    }
  }
}
