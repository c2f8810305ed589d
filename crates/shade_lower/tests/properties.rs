mod common;

use common::{Fixture, features};
use proptest::prelude::*;
use shade_ast::{NodeId, expressions::binary::HostBinaryOperator};
use shade_ir::{Expression, ShaderNode, Statement};
use shade_lower::{Lowerer, LoweringContext};
use shade_type::types::DataType;

const OPERAND_TYPES: [DataType; 8] = [
  DataType::Bool,
  DataType::Int,
  DataType::UInt,
  DataType::Float,
  DataType::Double,
  DataType::Float2,
  DataType::Float4,
  DataType::Float4x4,
];

fn operand_type() -> impl Strategy<Value = DataType> {
  prop::sample::select(OPERAND_TYPES.to_vec())
}

fn binary_operator() -> impl Strategy<Value = HostBinaryOperator> {
  prop::sample::select(HostBinaryOperator::ALL.to_vec())
}

#[derive(Debug, Clone, Copy)]
enum Line {
  Assign,
  Goto,
  Lock,
  Break,
}

fn line() -> impl Strategy<Value = Line> {
  prop_oneof![Just(Line::Assign), Just(Line::Goto), Just(Line::Lock), Just(Line::Break)]
}

/// A block with one statement per line. Returns the body and the number of lines
/// that are expected to survive lowering.
fn build_block(
  f: &mut Fixture,
  lines: &[Line],
) -> (NodeId, usize) {
  let x = f.local("x", DataType::Float);
  let mut statements = Vec::new();
  let mut kept = 0;

  for line in lines {
    let statement = match line {
      Line::Assign => {
        kept += 1;
        let left = f.use_local(&x);
        let right = f.ast.float(1.0);
        f.assign_statement(left, right)
      },
      Line::Goto => f.ast.goto_label("end"),
      Line::Lock => {
        let guard = f.use_local(&x);
        let body = f.ast.block(vec![]);
        f.ast.statement(|span| {
          shade_ast::statements::HostStatement::Lock(shade_ast::statements::guarded::HostLock::new(guard, body, span))
        })
      },
      Line::Break => {
        kept += 1;
        f.ast.break_statement()
      },
    };
    statements.push(statement);
  }

  (f.ast.block(statements), kept)
}

proptest! {
  /// Recorded operand types are the declared types of the operands, whatever the operator.
  #[test]
  fn binary_operand_types_follow_declarations(
    left_type in operand_type(),
    right_type in operand_type(),
    operator in binary_operator(),
  ) {
    let mut f = Fixture::new();
    let a = f.local("a", left_type);
    let b = f.local("b", right_type);
    let left = f.use_local(&a);
    let right = f.use_local(&b);
    let combined = f.ast.binary(left, operator, right);
    let statement = f.ast.expression_statement(combined);

    match f.lower(statement).body {
      Some(Statement::Expression(Expression::Binary { left_type: lt, right_type: rt, .. })) => {
        prop_assert_eq!(lt, left_type);
        prop_assert_eq!(rt, right_type);
      },
      other => prop_assert!(false, "unexpected body {:?}", other),
    }
  }

  /// Unsupported statements vanish, each with one diagnostic, and leave the rest alone.
  #[test]
  fn unsupported_statements_do_not_disturb_siblings(lines in prop::collection::vec(line(), 0..12)) {
    let mut f = Fixture::new();
    let (body, kept) = build_block(&mut f, &lines);

    let lowered = f.lower(body);
    prop_assert!(lowered.fatal.is_none());

    let expected: Vec<&str> = lines
      .iter()
      .filter_map(|line| match line {
        Line::Goto => Some("goto"),
        Line::Lock => Some("lock"),
        Line::Assign | Line::Break => None,
      })
      .collect();
    prop_assert_eq!(features(&lowered.diagnostics), expected);

    match lowered.body {
      Some(Statement::Block(statements)) => prop_assert_eq!(statements.len(), kept),
      other => prop_assert!(false, "unexpected body {:?}", other),
    }
  }

  /// Lowering the same tree twice gives the same result.
  #[test]
  fn lowering_is_deterministic(lines in prop::collection::vec(line(), 0..12)) {
    let mut f = Fixture::new();
    let (body, _) = build_block(&mut f, &lines);

    prop_assert_eq!(f.lower(body), f.lower(body));
  }
}

#[test]
fn lowering_a_node_twice_with_one_lowerer_is_idempotent() {
  let mut f = Fixture::new();
  let (body, _) = build_block(&mut f, &[Line::Assign, Line::Break]);

  let ctx = LoweringContext::new(f.ast.nodes(), &f.bindings, &f.method, &f.effect, &f.options);
  let mut lowerer = Lowerer::new(ctx);
  let first = lowerer.lower_node(body).unwrap();
  let second = lowerer.lower_node(body).unwrap();

  assert_eq!(first, second);
  assert!(matches!(first, Some(ShaderNode::Statement(Statement::Block(_)))));
  assert!(lowerer.diagnostics().is_empty());
}
