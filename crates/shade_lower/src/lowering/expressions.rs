use shade_ast::{
  HostNode, NodeId,
  expressions::{
    HostExpression,
    assignment::HostAssignmentOperator,
    binary::HostBinaryOperator,
    member_reference::HostMemberReference,
    unary::HostUnaryOperator,
  },
};
use shade_ir::{
  Expression,
  operation::{AssignmentOperation, BinaryOperation, UnaryOperation},
};
use shade_type::value::LiteralValue;

use super::unsupported;
use crate::{
  Lowerer,
  error::{LoweringError, LoweringResult},
  resolver::Binding,
};

impl<'a> Lowerer<'a> {
  pub(super) fn dispatch_expression(
    &mut self,
    node: NodeId,
  ) -> LoweringResult<Option<Expression>> {
    let expression = match self.node(node)? {
      HostNode::Expression(expression) => expression,
      other => {
        return Err(LoweringError::invariant(format!(
          "{} in expression position",
          other.kind_name()
        )));
      },
    };

    match expression {
      HostExpression::Assignment(assignment) => {
        let left = self.lower_expression(assignment.left)?;
        let right = self.lower_expression(assignment.right)?;

        match (left, right) {
          (Some(left), Some(right)) => Ok(Some(Expression::Assignment {
            left: Box::new(left),
            operator: assignment_operation(assignment.operator),
            right: Box::new(right),
          })),
          _ => Ok(None),
        }
      },
      HostExpression::Binary(binary) => {
        let left = self.lower_expression(binary.left)?;
        let right = self.lower_expression(binary.right)?;

        let (Some(left), Some(right)) = (left, right) else {
          return Ok(None);
        };

        let left_type = self.resolution.data_type_of(binary.left)?;
        let right_type = self.resolution.data_type_of(binary.right)?;

        Ok(Some(Expression::Binary {
          left: Box::new(left),
          left_type,
          operator: binary_operation(binary.operator),
          right: Box::new(right),
          right_type,
        }))
      },
      HostExpression::Unary(unary) => {
        let operator = match unary.operator {
          HostUnaryOperator::Not => UnaryOperation::Not,
          HostUnaryOperator::BitNot => UnaryOperation::BitNot,
          HostUnaryOperator::Minus => UnaryOperation::Neg,
          HostUnaryOperator::Plus => UnaryOperation::Plus,
          HostUnaryOperator::Increment => UnaryOperation::PreIncrement,
          HostUnaryOperator::Decrement => UnaryOperation::PreDecrement,
          HostUnaryOperator::PostIncrement => UnaryOperation::PostIncrement,
          HostUnaryOperator::PostDecrement => UnaryOperation::PostDecrement,
          HostUnaryOperator::Dereference | HostUnaryOperator::AddressOf => {
            return Err(unsupported("pointer-access", &unary.span));
          },
        };

        let Some(operand) = self.lower_expression(unary.operand)? else {
          return Ok(None);
        };

        let operand_type = self.resolution.data_type_of(unary.operand)?;

        Ok(Some(Expression::Unary {
          operand: Box::new(operand),
          operand_type,
          operator,
        }))
      },
      HostExpression::Identifier(_) => Ok(Some(Expression::Variable(self.bind_symbol(node)?))),
      HostExpression::Indexer(indexer) => {
        let target = self.lower_expression(indexer.target)?;
        let arguments = self.lower_expressions(&indexer.arguments)?;

        let (Some(target), Some(arguments)) = (target, arguments) else {
          return Ok(None);
        };

        Ok(Some(Expression::Indexer {
          target: Box::new(target),
          arguments,
        }))
      },
      HostExpression::MemberReference(member) => self.lower_member_reference(node, member),
      HostExpression::ObjectCreation(creation) => {
        let arguments = self.lower_expressions(&creation.arguments)?;
        let data_type = self.resolution.data_type_of(node)?;

        Ok(arguments.map(|arguments| Expression::ObjectCreation { data_type, arguments }))
      },
      HostExpression::Literal(literal) => match &literal.value {
        LiteralValue::Char(_) => Err(unsupported("char-literal", &literal.span)),
        LiteralValue::String(_) => Err(unsupported("string-literal", &literal.span)),
        value => Ok(Some(Expression::Literal(value.clone()))),
      },
      HostExpression::Invocation(invocation) => self.lower_invocation(node, invocation),
      HostExpression::Cast(cast) => {
        let Some(operand) = self.lower_expression(cast.expression)? else {
          return Ok(None);
        };

        let data_type = self.resolution.data_type_of(node)?;

        Ok(Some(Expression::Cast {
          data_type,
          operand: Box::new(operand),
        }))
      },
      HostExpression::Conditional(conditional) => {
        let condition = self.lower_expression(conditional.condition)?;
        let then_expression = self.lower_expression(conditional.then_expression)?;
        let else_expression = self.lower_expression(conditional.else_expression)?;

        match (condition, then_expression, else_expression) {
          (Some(condition), Some(then_expression), Some(else_expression)) => Ok(Some(Expression::Conditional {
            condition: Box::new(condition),
            then_expression: Box::new(then_expression),
            else_expression: Box::new(else_expression),
          })),
          _ => Ok(None),
        }
      },
      HostExpression::Parenthesized(parenthesized) => self.lower_expression(parenthesized.expression),
      HostExpression::Null(e) => Err(unsupported("null-literal", &e.span)),
      HostExpression::This(e) => Err(unsupported("this-reference", &e.span)),
      HostExpression::Base(e) => Err(unsupported("base-reference", &e.span)),
      HostExpression::TypeReference(e) => Err(unsupported("type-reference", &e.span)),
      HostExpression::ArraySpecifier(e) => Err(unsupported("array-specifier", &e.span)),
      HostExpression::NamedExpression(e) => Err(unsupported("named-expression", &e.span)),
      HostExpression::NamedArgument(e) => Err(unsupported("named-argument", &e.span)),
      HostExpression::Empty(e) => Err(unsupported("empty-expression", &e.span)),
      HostExpression::AnonymousMethod(e) => Err(unsupported("anonymous-method", &e.span)),
      HostExpression::Lambda(e) => Err(unsupported("lambda", &e.span)),
      HostExpression::AnonymousType(e) => Err(unsupported("anonymous-type", &e.span)),
      HostExpression::ArrayCreation(e) => Err(unsupported("array-creation", &e.span)),
      HostExpression::ArrayInitializer(e) => Err(unsupported("array-initializer", &e.span)),
      HostExpression::PointerReference(e) => Err(unsupported("pointer-access", &e.span)),
      HostExpression::SizeOf(e) => Err(unsupported("sizeof", &e.span)),
      HostExpression::TypeOf(e) => Err(unsupported("typeof", &e.span)),
      HostExpression::DefaultValue(e) => Err(unsupported("default-value", &e.span)),
      HostExpression::StackAlloc(e) => Err(unsupported("stackalloc", &e.span)),
      HostExpression::As(e) => Err(unsupported("as", &e.span)),
      HostExpression::Is(e) => Err(unsupported("is", &e.span)),
      HostExpression::Checked(e) => Err(unsupported("checked", &e.span)),
      HostExpression::Unchecked(e) => Err(unsupported("unchecked", &e.span)),
      HostExpression::Query(e) => Err(unsupported("query-expression", &e.span)),
      HostExpression::QueryClause(e) => Err(unsupported(e.clause.name(), &e.span)),
    }
  }

  /// `Radius` or `this.Radius` naming an effect member binds to the registered
  /// symbol. Anything else is field or swizzle access on a lowered target.
  fn lower_member_reference(
    &mut self,
    node: NodeId,
    member: &'a HostMemberReference,
  ) -> LoweringResult<Option<Expression>> {
    if let Binding::Member { declaring_type, .. } = self.resolution.binding(node) {
      if declaring_type.name() == self.ctx.effect.name {
        return Ok(Some(Expression::Variable(self.bind_symbol(node)?)));
      }
    }

    let Some(target) = self.lower_expression(member.target)? else {
      return Ok(None);
    };

    let target_type = self.resolution.data_type_of(member.target)?;

    Ok(Some(Expression::MemberReference {
      target: Box::new(target),
      target_type,
      member: member.member_name.clone(),
    }))
  }
}

fn assignment_operation(operator: HostAssignmentOperator) -> AssignmentOperation {
  match operator {
    HostAssignmentOperator::Assign => AssignmentOperation::Assign,
    HostAssignmentOperator::Add => AssignmentOperation::Add,
    HostAssignmentOperator::Subtract => AssignmentOperation::Sub,
    HostAssignmentOperator::Multiply => AssignmentOperation::Mul,
    HostAssignmentOperator::Divide => AssignmentOperation::Div,
    HostAssignmentOperator::Modulus => AssignmentOperation::Mod,
    HostAssignmentOperator::ShiftLeft => AssignmentOperation::BitShiftLeft,
    HostAssignmentOperator::ShiftRight => AssignmentOperation::BitShiftRight,
    HostAssignmentOperator::BitwiseAnd => AssignmentOperation::BitAnd,
    HostAssignmentOperator::BitwiseOr => AssignmentOperation::BitOr,
    HostAssignmentOperator::ExclusiveOr => AssignmentOperation::BitXor,
  }
}

fn binary_operation(operator: HostBinaryOperator) -> BinaryOperation {
  match operator {
    HostBinaryOperator::Add => BinaryOperation::Add,
    HostBinaryOperator::Subtract => BinaryOperation::Sub,
    HostBinaryOperator::Multiply => BinaryOperation::Mul,
    HostBinaryOperator::Divide => BinaryOperation::Div,
    HostBinaryOperator::Modulus => BinaryOperation::Mod,
    HostBinaryOperator::ShiftLeft => BinaryOperation::BitShiftLeft,
    HostBinaryOperator::ShiftRight => BinaryOperation::BitShiftRight,
    HostBinaryOperator::BitwiseAnd => BinaryOperation::BitAnd,
    HostBinaryOperator::BitwiseOr => BinaryOperation::BitOr,
    HostBinaryOperator::ExclusiveOr => BinaryOperation::BitXor,
    HostBinaryOperator::ConditionalAnd => BinaryOperation::And,
    HostBinaryOperator::ConditionalOr => BinaryOperation::Or,
    HostBinaryOperator::Equality => BinaryOperation::Equal,
    HostBinaryOperator::Inequality => BinaryOperation::NotEqual,
    HostBinaryOperator::LessThan => BinaryOperation::LessThan,
    HostBinaryOperator::LessThanOrEqual => BinaryOperation::LessEqual,
    HostBinaryOperator::GreaterThan => BinaryOperation::GreaterThan,
    HostBinaryOperator::GreaterThanOrEqual => BinaryOperation::GreaterEqual,
  }
}
