mod common;

use common::Fixture;
use insta::assert_snapshot;
use shade_ast::expressions::{binary::HostBinaryOperator, unary::HostUnaryOperator};
use shade_ir::{Expression, Statement, VariableReference};
use shade_lower::{Binding, HostType};
use shade_type::types::DataType;

#[test]
fn ir_for_loop_keeps_header_arity() {
  let mut f = Fixture::new();
  let i = f.local("i", DataType::Int);
  let x = f.local("x", DataType::Float);

  // for (i = 0; i < 10; i = i + 1) { x = x * 2; }
  let i0 = f.use_local(&i);
  let zero = f.ast.int(0);
  let init = f.assign_statement(i0, zero);

  let i1 = f.use_local(&i);
  let ten = f.ast.int(10);
  let condition = f.ast.binary(i1, HostBinaryOperator::LessThan, ten);

  let i2 = f.use_local(&i);
  let i3 = f.use_local(&i);
  let one = f.ast.int(1);
  let next = f.ast.binary(i3, HostBinaryOperator::Add, one);
  let step = f.assign_statement(i2, next);

  let x0 = f.use_local(&x);
  let x1 = f.use_local(&x);
  let two = f.ast.int(2);
  let doubled = f.ast.binary(x1, HostBinaryOperator::Multiply, two);
  let update = f.assign_statement(x0, doubled);
  let loop_body = f.ast.block(vec![update]);

  let for_loop = f.ast.for_loop(vec![init], Some(condition), vec![step], loop_body);
  let body = f.ast.block(vec![for_loop]);

  let lowered = f.lower(body);
  assert!(lowered.diagnostics.is_empty());

  match &lowered.body {
    Some(Statement::Block(statements)) => match statements.as_slice() {
      [Statement::For(for_loop)] => {
        assert_eq!(for_loop.initializers.len(), 1);
        assert!(for_loop.condition.is_some());
        assert_eq!(for_loop.iterators.len(), 1);
        match for_loop.body.as_ref() {
          Statement::Block(inner) => assert!(matches!(inner.as_slice(), [Statement::Expression(_)])),
          other => panic!("expected a block body, got {}", other.kind_name()),
        }
      },
      other => panic!("unexpected statements {:?}", other),
    },
    other => panic!("unexpected body {:?}", other),
  }

  assert_snapshot!(f.print(&lowered), @r"
  method Main {
    for (var:i = 0; (var:i:int < 10:int); var:i = (var:i:int + 1:int)) {
      var:x = (var:x:float * 2:int);
    }
  }
  ");
}

#[test]
fn ir_declarations_sample_and_constants() {
  let mut f = Fixture::new();
  let uv = f.param("uv", DataType::Float2);
  f.texture("Diffuse", DataType::Texture2D);
  f.constant("Radius", DataType::Float);
  let color = f.local("color", DataType::Float4);
  let w = f.local("w", DataType::Float);

  // float4 color = Diffuse.Sample(uv);
  let coords = f.use_param(&uv);
  let sampled = f.sample("Diffuse", vec![coords]);
  let color_decl = f.declarator(&color, Some(sampled));
  let declare_color = f.ast.declare("float4", vec![color_decl]);

  // float w = Radius * 0.5f;
  let radius = f.use_member("Radius", DataType::Float);
  let half = f.ast.float(0.5);
  let scaled = f.ast.binary(radius, HostBinaryOperator::Multiply, half);
  let w_decl = f.declarator(&w, Some(scaled));
  let declare_w = f.ast.declare("float", vec![w_decl]);

  // return color * w;
  let c = f.use_local(&color);
  let weight = f.use_local(&w);
  let product = f.ast.binary(c, HostBinaryOperator::Multiply, weight);
  let ret = f.ast.return_value(Some(product));

  let body = f.ast.block(vec![declare_color, declare_w, ret]);

  assert_snapshot!(f.lower_and_print(body), @r"
  method Main {
    var color: float4 = tex:Diffuse.Sample(param:uv);
    var w: float = (const:Radius:float * 0.5f:float);
    return (var:color:float4 * var:w:float);
  }
  ");
}

#[test]
fn ir_control_flow_casts_and_swizzles() {
  let mut f = Fixture::new();
  let uv = f.param("uv", DataType::Float2);
  let i = f.local("i", DataType::Int);
  let x = f.local("x", DataType::Float);
  let acc = f.local("acc", DataType::Float4);

  // while (i < 4) { if (i == 2) continue; else break; i++; }
  let i0 = f.use_local(&i);
  let four = f.ast.int(4);
  let while_condition = f.ast.binary(i0, HostBinaryOperator::LessThan, four);
  let i1 = f.use_local(&i);
  let two = f.ast.int(2);
  let if_condition = f.ast.binary(i1, HostBinaryOperator::Equality, two);
  let skip = f.ast.continue_statement();
  let stop = f.ast.break_statement();
  let branch = f.ast.if_else(if_condition, skip, Some(stop));
  let i2 = f.use_local(&i);
  let increment = f.ast.unary(HostUnaryOperator::PostIncrement, i2);
  let increment = f.ast.expression_statement(increment);
  let while_body = f.ast.block(vec![branch, increment]);
  let while_loop = f.ast.while_loop(while_condition, while_body);

  // do { x = (float)i; } while ((x > 1.0f) ? false : true);
  let x0 = f.use_local(&x);
  let i3 = f.use_local(&i);
  let cast = f.ast.cast("float", i3);
  f.bind_type(cast, DataType::Float);
  let convert = f.assign_statement(x0, cast);
  let do_body = f.ast.block(vec![convert]);
  let x1 = f.use_local(&x);
  let one = f.ast.float(1.0);
  let compare = f.ast.binary(x1, HostBinaryOperator::GreaterThan, one);
  let grouped = f.ast.parenthesized(compare);
  let no = f.ast.boolean(false);
  let yes = f.ast.boolean(true);
  let do_condition = f.ast.conditional(grouped, no, yes);
  let do_while = f.ast.do_while(do_body, do_condition);

  // acc.xy = uv;
  let target = f.use_local(&acc);
  let swizzle = f.ast.member(target, "xy");
  f.bind(
    swizzle,
    Binding::Member {
      declaring_type: HostType::Shader(DataType::Float4),
      member_name: "xy".to_string(),
      member_type: HostType::Shader(DataType::Float2),
    },
  );
  let coords = f.use_param(&uv);
  let store = f.assign_statement(swizzle, coords);

  let body = f.ast.block(vec![while_loop, do_while, store]);

  assert_snapshot!(f.lower_and_print(body), @r"
  method Main {
    while ((var:i:int < 4:int)) {
      if ((var:i:int == 2:int)) continue; else break;
      (var:i:int++);
    }
    do {
      var:x = (float)var:i;
    } while (((var:x:float > 1.0f:float) ? false : true));
    var:acc.xy = param:uv;
  }
  ");
}

#[test]
fn ir_constructors_indexers_and_multiple_declarators() {
  let mut f = Fixture::new();
  let uv = f.param("uv", DataType::Float2);
  f.constant("Weights", DataType::Float4);
  let i = f.local("i", DataType::Int);
  let a = f.local("a", DataType::Float);
  let b = f.local("b", DataType::Float);

  // float a = 1.0f, b;
  let one = f.ast.float(1.0);
  let a_decl = f.declarator(&a, Some(one));
  let b_decl = f.declarator(&b, None);
  let declare = f.ast.declare("float", vec![a_decl, b_decl]);

  // b = Weights[i];
  let b0 = f.use_local(&b);
  let weights = f.use_member("Weights", DataType::Float4);
  let index = f.use_local(&i);
  let element = f.ast.indexer(weights, vec![index]);
  let pick = f.assign_statement(b0, element);

  // return new float4(uv, 0, 1);
  let coords = f.use_param(&uv);
  let zero = f.ast.int(0);
  let unit = f.ast.int(1);
  let vector = f.ast.new_object("float4", vec![coords, zero, unit]);
  f.bind_type(vector, DataType::Float4);
  let ret = f.ast.return_value(Some(vector));

  let body = f.ast.block(vec![declare, pick, ret]);

  assert_snapshot!(f.lower_and_print(body), @r"
  method Main {
    var a: float = 1.0f, b: float;
    var:b = const:Weights[var:i];
    return float4(param:uv, 0, 1);
  }
  ");
}

#[test]
fn effect_members_bind_through_this() {
  let mut f = Fixture::new();
  let radius_id = f.constant("Radius", DataType::Float);
  let this = f.ast.this();
  let member = f.ast.member(this, "Radius");
  let binding = f.member_binding("Radius", HostType::Shader(DataType::Float));
  f.bind(member, binding);
  let ret = f.ast.return_value(Some(member));

  let lowered = f.lower(ret);
  assert!(lowered.diagnostics.is_empty(), "{:?}", lowered.diagnostics);
  assert_eq!(
    lowered.body,
    Some(Statement::Return(Some(Expression::Variable(VariableReference::Constant(radius_id)))))
  );
}

#[test]
fn constants_bind_by_identity() {
  let mut f = Fixture::new();
  f.constant("Bar", DataType::Float);
  let foo = f.constant("Foo", DataType::Float);
  let reference = f.use_member("Foo", DataType::Float);
  let statement = f.ast.return_value(Some(reference));

  let lowered = f.lower(statement);
  match lowered.body {
    Some(Statement::Return(Some(Expression::Variable(VariableReference::Constant(id))))) => {
      assert_eq!(id, foo);
      assert_eq!(f.effect.constant(&id).name, "Foo");
    },
    other => panic!("unexpected body {:?}", other),
  }
}

#[test]
fn member_kinds_are_tried_constant_literal_texture() {
  let mut f = Fixture::new();
  let texture = f.texture("Shared", DataType::Texture2D);
  let constant = f.constant("Shared", DataType::Float);
  let only_texture = f.texture("Env", DataType::CubeMap);

  let shared = f.use_member("Shared", DataType::Float);
  let env = f.use_member("Env", DataType::CubeMap);
  let first = f.ast.return_value(Some(shared));
  let second = f.ast.return_value(Some(env));

  assert_eq!(
    f.lower(first).body,
    Some(Statement::Return(Some(Expression::Variable(VariableReference::Constant(constant)))))
  );
  assert_ne!(
    f.lower(first).body,
    Some(Statement::Return(Some(Expression::Variable(VariableReference::Texture(texture)))))
  );
  assert_eq!(
    f.lower(second).body,
    Some(Statement::Return(Some(Expression::Variable(VariableReference::Texture(only_texture)))))
  );
}

#[test]
fn locals_shadow_effect_members() {
  let mut f = Fixture::new();
  f.constant("Radius", DataType::Float);
  let radius = f.local("Radius", DataType::Float);
  let reference = f.use_local(&radius);
  let statement = f.ast.return_value(Some(reference));

  assert_eq!(
    f.lower(statement).body,
    Some(Statement::Return(Some(Expression::Variable(VariableReference::Variable(
      shade_type::definition::VariableId::new(0)
    )))))
  );
}

#[test]
fn locals_with_equal_names_stay_distinct() {
  let mut f = Fixture::new();
  let outer = f.local("t", DataType::Float);
  let inner = f.local("t", DataType::Int);
  let outer_ref = f.use_local(&outer);
  let inner_ref = f.use_local(&inner);
  let sum = f.ast.binary(outer_ref, HostBinaryOperator::Add, inner_ref);
  let statement = f.ast.expression_statement(sum);

  match f.lower(statement).body {
    Some(Statement::Expression(Expression::Binary {
      left,
      left_type,
      right,
      right_type,
      ..
    })) => {
      assert_ne!(left, right);
      assert_eq!(left_type, DataType::Float);
      assert_eq!(right_type, DataType::Int);
    },
    other => panic!("unexpected body {:?}", other),
  }
}

#[test]
fn endless_for_has_no_condition() {
  let mut f = Fixture::new();
  let stop = f.ast.break_statement();
  let loop_body = f.ast.block(vec![stop]);
  let endless = f.ast.for_loop(vec![], None, vec![], loop_body);

  let lowered = f.lower(endless);
  match &lowered.body {
    Some(Statement::For(for_loop)) => {
      assert!(for_loop.condition.is_none());
      assert!(for_loop.initializers.is_empty());
    },
    other => panic!("unexpected body {:?}", other),
  }
  assert_eq!(f.print(&lowered), "method Main for (; ; ) {\n  break;\n}\n");
}

#[test]
fn sample_level_takes_two_arguments() {
  let mut f = Fixture::new();
  let uv = f.param("uv", DataType::Float2);
  f.texture("Env", DataType::CubeMap);
  let coords = f.use_param(&uv);
  let level = f.ast.float(2.0);
  let sampled = f.sample("Env", vec![coords, level]);
  let ret = f.ast.return_value(Some(sampled));

  let lowered = f.lower(ret);
  match &lowered.body {
    Some(Statement::Return(Some(Expression::Intrinsic {
      target,
      function,
      arguments,
    }))) => {
      assert!(target.is_some());
      assert_eq!(*function, shade_ir::IntrinsicFunction::SampleLevel);
      assert_eq!(arguments.len(), 2);
    },
    other => panic!("unexpected body {:?}", other),
  }
  assert_eq!(f.print(&lowered), "method Main return tex:Env.SampleLevel(param:uv, 2.0f);\n");
}
