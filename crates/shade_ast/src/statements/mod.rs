use serde::{Deserialize, Serialize};
use shade_type::span::Span;

use crate::statements::{
  block::HostBlock,
  expression_statement::HostExpressionStatement,
  for_statement::{HostFor, HostForeach},
  guarded::{HostCheckedBlock, HostFixed, HostLock, HostTry, HostUnsafe, HostUsing},
  if_statement::HostIf,
  jump::{HostBreak, HostContinue, HostGoto, HostLabel, HostReturn, HostThrow, HostYield},
  marker::{HostEmptyStatement, HostPreprocessorDirective},
  switch_statement::HostSwitch,
  variable::HostVariableDeclaration,
  while_statement::{HostDoWhile, HostWhile},
};

pub mod block;
pub mod expression_statement;
pub mod for_statement;
pub mod guarded;
pub mod if_statement;
pub mod jump;
pub mod marker;
pub mod switch_statement;
pub mod variable;
pub mod while_statement;

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HostStatement {
  Block(HostBlock),
  Expression(HostExpressionStatement),
  VariableDeclaration(HostVariableDeclaration),
  For(HostFor),
  Foreach(HostForeach),
  If(HostIf),
  While(HostWhile),
  DoWhile(HostDoWhile),
  Switch(HostSwitch),
  Return(HostReturn),
  Break(HostBreak),
  Continue(HostContinue),
  Goto(HostGoto),
  Label(HostLabel),
  Yield(HostYield),
  Throw(HostThrow),
  Checked(HostCheckedBlock),
  Unchecked(HostCheckedBlock),
  Fixed(HostFixed),
  Lock(HostLock),
  Try(HostTry),
  Unsafe(HostUnsafe),
  Using(HostUsing),
  Empty(HostEmptyStatement),
  PreprocessorDirective(HostPreprocessorDirective),
}

impl HostStatement {
  pub fn span(&self) -> &Span {
    match self {
      HostStatement::Block(stmt) => &stmt.span,
      HostStatement::Expression(stmt) => &stmt.span,
      HostStatement::VariableDeclaration(stmt) => &stmt.span,
      HostStatement::For(stmt) => &stmt.span,
      HostStatement::Foreach(stmt) => &stmt.span,
      HostStatement::If(stmt) => &stmt.span,
      HostStatement::While(stmt) => &stmt.span,
      HostStatement::DoWhile(stmt) => &stmt.span,
      HostStatement::Switch(stmt) => &stmt.span,
      HostStatement::Return(stmt) => &stmt.span,
      HostStatement::Break(stmt) => &stmt.span,
      HostStatement::Continue(stmt) => &stmt.span,
      HostStatement::Goto(stmt) => &stmt.span,
      HostStatement::Label(stmt) => &stmt.span,
      HostStatement::Yield(stmt) => &stmt.span,
      HostStatement::Throw(stmt) => &stmt.span,
      HostStatement::Checked(stmt) => &stmt.span,
      HostStatement::Unchecked(stmt) => &stmt.span,
      HostStatement::Fixed(stmt) => &stmt.span,
      HostStatement::Lock(stmt) => &stmt.span,
      HostStatement::Try(stmt) => &stmt.span,
      HostStatement::Unsafe(stmt) => &stmt.span,
      HostStatement::Using(stmt) => &stmt.span,
      HostStatement::Empty(stmt) => &stmt.span,
      HostStatement::PreprocessorDirective(stmt) => &stmt.span,
    }
  }

  pub fn kind_name(&self) -> &'static str {
    match self {
      HostStatement::Block(_) => "block",
      HostStatement::Expression(_) => "expression statement",
      HostStatement::VariableDeclaration(_) => "variable declaration",
      HostStatement::For(_) => "for statement",
      HostStatement::Foreach(_) => "foreach statement",
      HostStatement::If(_) => "if statement",
      HostStatement::While(_) => "while statement",
      HostStatement::DoWhile(_) => "do-while statement",
      HostStatement::Switch(_) => "switch statement",
      HostStatement::Return(_) => "return statement",
      HostStatement::Break(_) => "break statement",
      HostStatement::Continue(_) => "continue statement",
      HostStatement::Goto(_) => "goto statement",
      HostStatement::Label(_) => "label statement",
      HostStatement::Yield(_) => "yield statement",
      HostStatement::Throw(_) => "throw statement",
      HostStatement::Checked(_) => "checked statement",
      HostStatement::Unchecked(_) => "unchecked statement",
      HostStatement::Fixed(_) => "fixed statement",
      HostStatement::Lock(_) => "lock statement",
      HostStatement::Try(_) => "try statement",
      HostStatement::Unsafe(_) => "unsafe statement",
      HostStatement::Using(_) => "using statement",
      HostStatement::Empty(_) => "empty statement",
      HostStatement::PreprocessorDirective(_) => "preprocessor directive",
    }
  }
}
