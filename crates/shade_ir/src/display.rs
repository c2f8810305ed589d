//! Human-readable IR dump.
//!
//! Symbol references print with their binding class: `var:x`, `param:uv`,
//! `const:Radius`, `lit:Pi`, `tex:Diffuse`. Binary and unary operands carry the type
//! that was recorded when the node was built, e.g. `(var:x:float * 2:int)`.

use std::fmt::Write;

use shade_type::definition::{EffectSymbols, MethodSymbols};

use crate::{
  expression::{Expression, VariableReference},
  statement::{Statement, VariableInitializer},
};

pub struct IrPrinter<'a> {
  method: &'a MethodSymbols,
  effect: &'a EffectSymbols,
  indent: usize,
  output: String,
}

impl<'a> IrPrinter<'a> {
  pub fn new(
    method: &'a MethodSymbols,
    effect: &'a EffectSymbols,
  ) -> Self {
    Self {
      method,
      effect,
      indent: 0,
      output: String::new(),
    }
  }

  pub fn print_method(
    mut self,
    body: Option<&Statement>,
  ) -> String {
    write!(self.output, "method {} ", self.method.name).unwrap();
    match body {
      Some(body) => self.print_statement(body),
      None => self.output.push_str("<empty>"),
    }
    self.output.push('\n');
    self.output
  }

  pub fn print_single(
    mut self,
    statement: &Statement,
  ) -> String {
    self.print_statement(statement);
    self.output
  }

  fn write_indent(&mut self) {
    for _ in 0..self.indent {
      self.output.push_str("  ");
    }
  }

  fn print_statement(
    &mut self,
    statement: &Statement,
  ) {
    match statement {
      Statement::Block(statements) => {
        if statements.is_empty() {
          self.output.push_str("{}");
          return;
        }

        self.output.push_str("{\n");
        self.indent += 1;
        for child in statements {
          self.write_indent();
          self.print_statement(child);
          self.output.push('\n');
        }
        self.indent -= 1;
        self.write_indent();
        self.output.push('}');
      },
      Statement::Expression(_) | Statement::VariableDeclaration(_) => {
        self.print_inline(statement);
        self.output.push(';');
      },
      Statement::For(for_loop) => {
        self.output.push_str("for (");
        for (i, init) in for_loop.initializers.iter().enumerate() {
          if i > 0 {
            self.output.push_str(", ");
          }
          self.print_inline(init);
        }
        self.output.push_str("; ");
        if let Some(condition) = &for_loop.condition {
          let condition = self.expression(condition);
          self.output.push_str(&condition);
        }
        self.output.push_str("; ");
        for (i, iterator) in for_loop.iterators.iter().enumerate() {
          if i > 0 {
            self.output.push_str(", ");
          }
          self.print_inline(iterator);
        }
        self.output.push_str(") ");
        self.print_statement(&for_loop.body);
      },
      Statement::If {
        condition,
        then_branch,
        else_branch,
      } => {
        let condition = self.expression(condition);
        write!(self.output, "if ({}) ", condition).unwrap();
        self.print_statement(then_branch);
        if let Some(else_branch) = else_branch {
          self.output.push_str(" else ");
          self.print_statement(else_branch);
        }
      },
      Statement::While { condition, body } => {
        let condition = self.expression(condition);
        write!(self.output, "while ({}) ", condition).unwrap();
        self.print_statement(body);
      },
      Statement::DoWhile { body, condition } => {
        self.output.push_str("do ");
        self.print_statement(body);
        let condition = self.expression(condition);
        write!(self.output, " while ({});", condition).unwrap();
      },
      Statement::Return(value) => match value {
        Some(value) => {
          let value = self.expression(value);
          write!(self.output, "return {};", value).unwrap();
        },
        None => self.output.push_str("return;"),
      },
      Statement::Break => self.output.push_str("break;"),
      Statement::Continue => self.output.push_str("continue;"),
    }
  }

  /// Statement in for-loop header position: no trailing semicolon.
  fn print_inline(
    &mut self,
    statement: &Statement,
  ) {
    match statement {
      Statement::Expression(expr) => {
        let expr = self.expression(expr);
        self.output.push_str(&expr);
      },
      Statement::VariableDeclaration(initializers) => {
        let initializers: Vec<String> = initializers.iter().map(|init| self.initializer(init)).collect();
        write!(self.output, "var {}", initializers.join(", ")).unwrap();
      },
      _ => self.print_statement(statement),
    }
  }

  fn initializer(
    &self,
    init: &VariableInitializer,
  ) -> String {
    let (name, data_type) = match self.method.variables.try_get(&init.variable) {
      Some(variable) => (variable.name.as_str(), variable.data_type.name()),
      None => ("?", "?"),
    };

    match &init.initializer {
      Some(value) => format!("{}: {} = {}", name, data_type, self.expression(value)),
      None => format!("{}: {}", name, data_type),
    }
  }

  fn arguments(
    &self,
    arguments: &[Expression],
  ) -> String {
    arguments.iter().map(|arg| self.expression(arg)).collect::<Vec<_>>().join(", ")
  }

  fn expression(
    &self,
    expr: &Expression,
  ) -> String {
    match expr {
      Expression::Assignment { left, operator, right } => {
        format!("{} {} {}", self.expression(left), operator.symbol(), self.expression(right))
      },
      Expression::Binary {
        left,
        left_type,
        operator,
        right,
        right_type,
      } => format!(
        "({}:{} {} {}:{})",
        self.expression(left),
        left_type,
        operator.symbol(),
        self.expression(right),
        right_type
      ),
      Expression::Unary {
        operand,
        operand_type,
        operator,
      } => {
        if operator.is_postfix() {
          format!("({}:{}{})", self.expression(operand), operand_type, operator.symbol())
        } else {
          format!("({}{}:{})", operator.symbol(), self.expression(operand), operand_type)
        }
      },
      Expression::Indexer { target, arguments } => {
        format!("{}[{}]", self.expression(target), self.arguments(arguments))
      },
      Expression::Intrinsic {
        target,
        function,
        arguments,
      } => match target {
        Some(target) => format!(
          "{}.{}({})",
          self.expression(target),
          function.name(),
          self.arguments(arguments)
        ),
        None => format!("{}({})", function.name(), self.arguments(arguments)),
      },
      Expression::MemberReference { target, member, .. } => format!("{}.{}", self.expression(target), member),
      Expression::ObjectCreation { data_type, arguments } => format!("{}({})", data_type, self.arguments(arguments)),
      Expression::Literal(value) => value.to_string(),
      Expression::Variable(reference) => self.reference(reference),
      Expression::Cast { data_type, operand } => format!("({}){}", data_type, self.expression(operand)),
      Expression::Conditional {
        condition,
        then_expression,
        else_expression,
      } => format!(
        "({} ? {} : {})",
        self.expression(condition),
        self.expression(then_expression),
        self.expression(else_expression)
      ),
    }
  }

  fn reference(
    &self,
    reference: &VariableReference,
  ) -> String {
    let (prefix, name) = match reference {
      VariableReference::Variable(id) => ("var", self.method.variables.try_get(id).map(|v| v.name.as_str())),
      VariableReference::Parameter(id) => ("param", self.method.parameters.try_get(id).map(|p| p.name.as_str())),
      VariableReference::Constant(id) => ("const", self.effect.constants.try_get(id).map(|c| c.name.as_str())),
      VariableReference::Literal(id) => ("lit", self.effect.literals.try_get(id).map(|l| l.name.as_str())),
      VariableReference::Texture(id) => ("tex", self.effect.textures.try_get(id).map(|t| t.name.as_str())),
    };

    format!("{}:{}", prefix, name.unwrap_or("?"))
  }
}

pub fn print_method(
  method: &MethodSymbols,
  effect: &EffectSymbols,
  body: Option<&Statement>,
) -> String {
  IrPrinter::new(method, effect).print_method(body)
}

pub fn print_statement(
  method: &MethodSymbols,
  effect: &EffectSymbols,
  statement: &Statement,
) -> String {
  IrPrinter::new(method, effect).print_single(statement)
}

pub fn print_expression(
  method: &MethodSymbols,
  effect: &EffectSymbols,
  expr: &Expression,
) -> String {
  IrPrinter::new(method, effect).expression(expr)
}
