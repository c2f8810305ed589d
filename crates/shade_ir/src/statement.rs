use shade_type::definition::VariableId;

use crate::expression::Expression;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableInitializer {
  pub variable: VariableId,
  pub initializer: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForLoop {
  pub initializers: Vec<Statement>,
  pub condition: Option<Expression>,
  pub iterators: Vec<Statement>,
  pub body: Box<Statement>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
  Block(Vec<Statement>),
  Expression(Expression),
  For(ForLoop),
  VariableDeclaration(Vec<VariableInitializer>),
  If {
    condition: Expression,
    then_branch: Box<Statement>,
    else_branch: Option<Box<Statement>>,
  },
  While {
    condition: Expression,
    body: Box<Statement>,
  },
  DoWhile {
    body: Box<Statement>,
    condition: Expression,
  },
  Return(Option<Expression>),
  Break,
  Continue,
}

impl Statement {
  pub fn kind_name(&self) -> &'static str {
    match self {
      Statement::Block(_) => "Block",
      Statement::Expression(_) => "Expression",
      Statement::For(_) => "For",
      Statement::VariableDeclaration(_) => "VariableDeclaration",
      Statement::If { .. } => "If",
      Statement::While { .. } => "While",
      Statement::DoWhile { .. } => "DoWhile",
      Statement::Return(_) => "Return",
      Statement::Break => "Break",
      Statement::Continue => "Continue",
    }
  }

  /// Number of statements in this subtree, counting `self`.
  pub fn count(&self) -> usize {
    1 + match self {
      Statement::Block(statements) => statements.iter().map(Statement::count).sum(),
      Statement::For(for_loop) => {
        for_loop.initializers.iter().map(Statement::count).sum::<usize>()
          + for_loop.iterators.iter().map(Statement::count).sum::<usize>()
          + for_loop.body.count()
      },
      Statement::If {
        then_branch,
        else_branch,
        ..
      } => then_branch.count() + else_branch.as_ref().map_or(0, |s| s.count()),
      Statement::While { body, .. } | Statement::DoWhile { body, .. } => body.count(),
      Statement::Expression(_)
      | Statement::VariableDeclaration(_)
      | Statement::Return(_)
      | Statement::Break
      | Statement::Continue => 0,
    }
  }
}
