use shade_ast::{
  HostNode, NodeId,
  statements::{HostStatement, for_statement::HostFor, if_statement::HostIf, variable::HostVariableDeclaration},
};
use shade_ir::{ForLoop, Statement, VariableInitializer};

use super::unsupported;
use crate::{
  Lowerer,
  error::{LoweringError, LoweringResult},
};

impl<'a> Lowerer<'a> {
  pub(super) fn dispatch_statement(
    &mut self,
    node: NodeId,
  ) -> LoweringResult<Option<Statement>> {
    let statement = match self.node(node)? {
      HostNode::Statement(statement) => statement,
      other => {
        return Err(LoweringError::invariant(format!(
          "{} in statement position",
          other.kind_name()
        )));
      },
    };

    match statement {
      HostStatement::Block(block) => Ok(Some(Statement::Block(self.lower_statements(&block.statements)?))),
      HostStatement::Expression(statement) => {
        Ok(self.lower_expression(statement.expression)?.map(Statement::Expression))
      },
      HostStatement::VariableDeclaration(declaration) => self.lower_variable_declaration(declaration),
      HostStatement::For(for_statement) => self.lower_for(for_statement),
      HostStatement::If(if_statement) => self.lower_if(if_statement),
      HostStatement::While(while_statement) => {
        let condition = self.lower_expression(while_statement.condition)?;
        let body = self.lower_statement(while_statement.body)?;

        match (condition, body) {
          (Some(condition), Some(body)) => Ok(Some(Statement::While {
            condition,
            body: Box::new(body),
          })),
          _ => Ok(None),
        }
      },
      HostStatement::DoWhile(do_while) => {
        let body = self.lower_statement(do_while.body)?;
        let condition = self.lower_expression(do_while.condition)?;

        match (body, condition) {
          (Some(body), Some(condition)) => Ok(Some(Statement::DoWhile {
            body: Box::new(body),
            condition,
          })),
          _ => Ok(None),
        }
      },
      HostStatement::Return(ret) => match ret.value {
        Some(value) => Ok(self.lower_expression(value)?.map(|value| Statement::Return(Some(value)))),
        None => Ok(Some(Statement::Return(None))),
      },
      HostStatement::Break(_) => Ok(Some(Statement::Break)),
      HostStatement::Continue(_) => Ok(Some(Statement::Continue)),
      HostStatement::Foreach(s) => Err(unsupported("foreach", &s.span)),
      HostStatement::Switch(s) => Err(unsupported("switch", &s.span)),
      HostStatement::Goto(s) => Err(unsupported("goto", &s.span)),
      HostStatement::Label(s) => Err(unsupported("label", &s.span)),
      HostStatement::Yield(s) => Err(unsupported("yield", &s.span)),
      HostStatement::Throw(s) => Err(unsupported("throw", &s.span)),
      HostStatement::Checked(s) => Err(unsupported("checked", &s.span)),
      HostStatement::Unchecked(s) => Err(unsupported("unchecked", &s.span)),
      HostStatement::Fixed(s) => Err(unsupported("fixed", &s.span)),
      HostStatement::Lock(s) => Err(unsupported("lock", &s.span)),
      HostStatement::Try(s) => Err(unsupported("try", &s.span)),
      HostStatement::Unsafe(s) => Err(unsupported("unsafe", &s.span)),
      HostStatement::Using(s) => Err(unsupported("using", &s.span)),
      HostStatement::Empty(s) => Err(unsupported("empty-statement", &s.span)),
      HostStatement::PreprocessorDirective(s) => Err(unsupported("preprocessor-directive", &s.span)),
    }
  }

  fn lower_variable_declaration(
    &mut self,
    declaration: &'a HostVariableDeclaration,
  ) -> LoweringResult<Option<Statement>> {
    let mut initializers = Vec::with_capacity(declaration.initializers.len());
    let mut complete = true;
    for node in &declaration.initializers {
      match self.lower_variable_initializer(*node)? {
        Some(initializer) => initializers.push(initializer),
        None => complete = false,
      }
    }

    Ok(complete.then_some(Statement::VariableDeclaration(initializers)))
  }

  pub(super) fn dispatch_variable_initializer(
    &mut self,
    node: NodeId,
  ) -> LoweringResult<Option<VariableInitializer>> {
    let declarator = match self.node(node)? {
      HostNode::VariableInitializer(declarator) => declarator,
      other => {
        return Err(LoweringError::invariant(format!(
          "{} in a variable declaration",
          other.kind_name()
        )));
      },
    };

    let variable = self.bind_declared_variable(node, &declarator.name)?;

    let initializer = match declarator.initializer {
      Some(value) => match self.lower_expression(value)? {
        Some(value) => Some(value),
        None => return Ok(None),
      },
      None => None,
    };

    Ok(Some(VariableInitializer { variable, initializer }))
  }

  fn lower_for(
    &mut self,
    for_statement: &'a HostFor,
  ) -> LoweringResult<Option<Statement>> {
    let initializers = self.lower_statement_list(&for_statement.initializers)?;
    let condition = match for_statement.condition {
      Some(condition) => Some(self.lower_expression(condition)?),
      None => None,
    };
    let iterators = self.lower_statement_list(&for_statement.iterators)?;
    let body = self.lower_statement(for_statement.body)?;

    let condition = match condition {
      Some(Some(condition)) => Some(condition),
      Some(None) => return Ok(None),
      None => None,
    };

    let (Some(initializers), Some(iterators), Some(body)) = (initializers, iterators, body) else {
      return Ok(None);
    };

    Ok(Some(Statement::For(ForLoop {
      initializers,
      condition,
      iterators,
      body: Box::new(body),
    })))
  }

  fn lower_if(
    &mut self,
    if_statement: &'a HostIf,
  ) -> LoweringResult<Option<Statement>> {
    let condition = self.lower_expression(if_statement.condition)?;
    let then_branch = self.lower_statement(if_statement.then_branch)?;
    let else_branch = match if_statement.else_branch {
      Some(else_branch) => Some(self.lower_statement(else_branch)?),
      None => None,
    };

    let (Some(condition), Some(then_branch)) = (condition, then_branch) else {
      return Ok(None);
    };

    let else_branch = match else_branch {
      Some(Some(else_branch)) => Some(Box::new(else_branch)),
      Some(None) => return Ok(None),
      None => None,
    };

    Ok(Some(Statement::If {
      condition,
      then_branch: Box::new(then_branch),
      else_branch,
    }))
  }
}
