//! Host-language syntax tree handed to the lowering pass.
//!
//! Nodes live in a [`Store`] and refer to each other through [`NodeId`]. The tree is
//! produced by the host parser (or [`builder::HostAstBuilder`] in tests) and is never
//! mutated by the lowering pass.

pub mod builder;
pub mod declaration;
pub mod expressions;
pub mod statements;

use serde::{Deserialize, Serialize};
use shade_type::{Id, Store, span::Span};

use crate::declaration::HostDeclaration;
use crate::expressions::HostExpression;
use crate::statements::HostStatement;
use crate::statements::variable::HostVariableInitializer;

pub type NodeId = Id<HostNode>;
pub type HostAst = Store<HostNode>;

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum HostNode {
  Statement(HostStatement),
  Expression(HostExpression),
  /// One declarator of a variable declaration statement (`x = 1` in `float x = 1, y;`).
  VariableInitializer(HostVariableInitializer),
  /// Anything the parser can produce outside of a method body.
  Declaration(HostDeclaration),
}

impl HostNode {
  pub fn span(&self) -> &Span {
    match self {
      HostNode::Statement(stmt) => stmt.span(),
      HostNode::Expression(expr) => expr.span(),
      HostNode::VariableInitializer(init) => &init.span,
      HostNode::Declaration(decl) => &decl.span,
    }
  }

  pub fn kind_name(&self) -> &'static str {
    match self {
      HostNode::Statement(stmt) => stmt.kind_name(),
      HostNode::Expression(expr) => expr.kind_name(),
      HostNode::VariableInitializer(_) => "variable initializer",
      HostNode::Declaration(decl) => decl.kind.name(),
    }
  }

  pub fn as_expression(&self) -> Option<&HostExpression> {
    match self {
      HostNode::Expression(expr) => Some(expr),
      _ => None,
    }
  }
}
