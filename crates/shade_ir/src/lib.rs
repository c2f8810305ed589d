//! Shader intermediate representation produced by the lowering pass.
//!
//! The tree is owned: every node is exclusively owned by its parent and built
//! bottom-up, so there is no arena and no id indirection. Operand types are recorded
//! when a node is constructed and never revisited.

pub mod display;
pub mod expression;
pub mod operation;
pub mod statement;

pub use expression::{Expression, IntrinsicFunction, VariableReference};
pub use statement::{ForLoop, Statement, VariableInitializer};

/// Root of the IR: what a single host node lowers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShaderNode {
  Statement(Statement),
  Expression(Expression),
}

impl ShaderNode {
  pub fn into_statement(self) -> Option<Statement> {
    match self {
      ShaderNode::Statement(stmt) => Some(stmt),
      ShaderNode::Expression(_) => None,
    }
  }

  pub fn into_expression(self) -> Option<Expression> {
    match self {
      ShaderNode::Expression(expr) => Some(expr),
      ShaderNode::Statement(_) => None,
    }
  }
}
