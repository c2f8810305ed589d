//! Programmatic construction of host trees, for tests and tools that do not go
//! through the host parser.

use shade_type::{BytePosition, Store, file::FileId, span::Span, value::LiteralValue};

use crate::{
  HostNode, NodeId,
  declaration::{DeclarationKind, HostDeclaration},
  expressions::{
    HostExpression,
    assignment::{HostAssignment, HostAssignmentOperator},
    binary::{HostBinary, HostBinaryOperator},
    cast::HostCast,
    conditional::HostConditional,
    identifier::HostIdentifier,
    indexer::HostIndexer,
    invocation::HostInvocation,
    literal::{HostLiteral, HostNull},
    member_reference::HostMemberReference,
    object_creation::HostObjectCreation,
    parenthesized::HostParenthesized,
    reference::HostThis,
    unary::{HostUnary, HostUnaryOperator},
  },
  statements::{
    HostStatement,
    block::HostBlock,
    expression_statement::HostExpressionStatement,
    for_statement::HostFor,
    if_statement::HostIf,
    jump::{GotoTarget, HostBreak, HostContinue, HostGoto, HostReturn},
    marker::HostEmptyStatement,
    variable::{HostVariableDeclaration, HostVariableInitializer},
    while_statement::{HostDoWhile, HostWhile},
  },
};

/// Allocates nodes into a fresh arena.
///
/// Every node gets a one-byte synthetic span at a strictly increasing offset unless
/// [`HostAstBuilder::at`] was called right before, so diagnostics in tests still
/// point at distinct locations.
pub struct HostAstBuilder {
  nodes: Store<HostNode>,
  file: FileId,
  next_offset: u32,
  pending_span: Option<Span>,
}

impl HostAstBuilder {
  pub fn new(file: FileId) -> Self {
    Self {
      nodes: Store::new(),
      file,
      next_offset: 0,
      pending_span: None,
    }
  }

  pub fn file(&self) -> FileId {
    self.file
  }

  pub fn nodes(&self) -> &Store<HostNode> {
    &self.nodes
  }

  pub fn finish(self) -> Store<HostNode> {
    self.nodes
  }

  /// Use `start..end` as the span of the next allocated node.
  pub fn at(
    &mut self,
    start: u32,
    end: u32,
  ) -> &mut Self {
    self.pending_span = Some(Span::new(self.file, BytePosition(start), BytePosition(end)));
    self
  }

  fn take_span(&mut self) -> Span {
    if let Some(span) = self.pending_span.take() {
      return span;
    }

    let start = self.next_offset;
    self.next_offset += 1;
    Span::new(self.file, BytePosition(start), BytePosition(start + 1))
  }

  pub fn alloc(
    &mut self,
    node: HostNode,
  ) -> NodeId {
    self.nodes.alloc(node)
  }

  pub fn statement(
    &mut self,
    make: impl FnOnce(Span) -> HostStatement,
  ) -> NodeId {
    let span = self.take_span();
    self.alloc(HostNode::Statement(make(span)))
  }

  pub fn expression(
    &mut self,
    make: impl FnOnce(Span) -> HostExpression,
  ) -> NodeId {
    let span = self.take_span();
    self.alloc(HostNode::Expression(make(span)))
  }

  pub fn declaration(
    &mut self,
    kind: DeclarationKind,
    name: Option<&str>,
  ) -> NodeId {
    let span = self.take_span();
    self.alloc(HostNode::Declaration(HostDeclaration::new(
      kind,
      name.map(str::to_string),
      span,
    )))
  }

  // Statements

  pub fn block(
    &mut self,
    statements: Vec<NodeId>,
  ) -> NodeId {
    self.statement(|span| HostStatement::Block(HostBlock::new(statements, span)))
  }

  pub fn expression_statement(
    &mut self,
    expression: NodeId,
  ) -> NodeId {
    self.statement(|span| HostStatement::Expression(HostExpressionStatement::new(expression, span)))
  }

  pub fn declare(
    &mut self,
    type_name: &str,
    initializers: Vec<NodeId>,
  ) -> NodeId {
    self.statement(|span| {
      HostStatement::VariableDeclaration(HostVariableDeclaration::new(type_name.to_string(), initializers, span))
    })
  }

  pub fn variable(
    &mut self,
    name: &str,
    initializer: Option<NodeId>,
  ) -> NodeId {
    let span = self.take_span();
    self.alloc(HostNode::VariableInitializer(HostVariableInitializer::new(
      name.to_string(),
      initializer,
      span,
    )))
  }

  pub fn for_loop(
    &mut self,
    initializers: Vec<NodeId>,
    condition: Option<NodeId>,
    iterators: Vec<NodeId>,
    body: NodeId,
  ) -> NodeId {
    self.statement(|span| HostStatement::For(HostFor::new(initializers, condition, iterators, body, span)))
  }

  pub fn if_else(
    &mut self,
    condition: NodeId,
    then_branch: NodeId,
    else_branch: Option<NodeId>,
  ) -> NodeId {
    self.statement(|span| HostStatement::If(HostIf::new(condition, then_branch, else_branch, span)))
  }

  pub fn while_loop(
    &mut self,
    condition: NodeId,
    body: NodeId,
  ) -> NodeId {
    self.statement(|span| HostStatement::While(HostWhile::new(condition, body, span)))
  }

  pub fn do_while(
    &mut self,
    body: NodeId,
    condition: NodeId,
  ) -> NodeId {
    self.statement(|span| HostStatement::DoWhile(HostDoWhile::new(body, condition, span)))
  }

  pub fn return_value(
    &mut self,
    value: Option<NodeId>,
  ) -> NodeId {
    self.statement(|span| HostStatement::Return(HostReturn::new(value, span)))
  }

  pub fn break_statement(&mut self) -> NodeId {
    self.statement(|span| HostStatement::Break(HostBreak::new(span)))
  }

  pub fn continue_statement(&mut self) -> NodeId {
    self.statement(|span| HostStatement::Continue(HostContinue::new(span)))
  }

  pub fn goto_label(
    &mut self,
    label: &str,
  ) -> NodeId {
    self.statement(|span| HostStatement::Goto(HostGoto::new(GotoTarget::Label(label.to_string()), span)))
  }

  pub fn empty_statement(&mut self) -> NodeId {
    self.statement(|span| HostStatement::Empty(HostEmptyStatement::new(span)))
  }

  // Expressions

  pub fn identifier(
    &mut self,
    name: &str,
  ) -> NodeId {
    self.expression(|span| HostExpression::Identifier(HostIdentifier::new(name.to_string(), span)))
  }

  pub fn literal(
    &mut self,
    value: LiteralValue,
  ) -> NodeId {
    self.expression(|span| HostExpression::Literal(HostLiteral::new(value, span)))
  }

  pub fn int(
    &mut self,
    value: i64,
  ) -> NodeId {
    self.literal(LiteralValue::Int(value))
  }

  pub fn float(
    &mut self,
    value: f32,
  ) -> NodeId {
    self.literal(LiteralValue::Float(value.into()))
  }

  pub fn boolean(
    &mut self,
    value: bool,
  ) -> NodeId {
    self.literal(LiteralValue::Bool(value))
  }

  pub fn null(&mut self) -> NodeId {
    self.expression(|span| HostExpression::Null(HostNull::new(span)))
  }

  pub fn this(&mut self) -> NodeId {
    self.expression(|span| HostExpression::This(HostThis::new(span)))
  }

  pub fn assign(
    &mut self,
    left: NodeId,
    right: NodeId,
  ) -> NodeId {
    self.assign_with(left, HostAssignmentOperator::Assign, right)
  }

  pub fn assign_with(
    &mut self,
    left: NodeId,
    operator: HostAssignmentOperator,
    right: NodeId,
  ) -> NodeId {
    self.expression(|span| HostExpression::Assignment(HostAssignment::new(left, operator, right, span)))
  }

  pub fn binary(
    &mut self,
    left: NodeId,
    operator: HostBinaryOperator,
    right: NodeId,
  ) -> NodeId {
    self.expression(|span| HostExpression::Binary(HostBinary::new(left, operator, right, span)))
  }

  pub fn unary(
    &mut self,
    operator: HostUnaryOperator,
    operand: NodeId,
  ) -> NodeId {
    self.expression(|span| HostExpression::Unary(HostUnary::new(operator, operand, span)))
  }

  pub fn member(
    &mut self,
    target: NodeId,
    member_name: &str,
  ) -> NodeId {
    self.expression(|span| {
      HostExpression::MemberReference(HostMemberReference::new(target, member_name.to_string(), span))
    })
  }

  pub fn indexer(
    &mut self,
    target: NodeId,
    arguments: Vec<NodeId>,
  ) -> NodeId {
    self.expression(|span| HostExpression::Indexer(HostIndexer::new(target, arguments, span)))
  }

  pub fn invoke(
    &mut self,
    target: NodeId,
    arguments: Vec<NodeId>,
  ) -> NodeId {
    self.expression(|span| HostExpression::Invocation(HostInvocation::new(target, arguments, span)))
  }

  pub fn new_object(
    &mut self,
    type_name: &str,
    arguments: Vec<NodeId>,
  ) -> NodeId {
    self.expression(|span| {
      HostExpression::ObjectCreation(HostObjectCreation::new(type_name.to_string(), arguments, span))
    })
  }

  pub fn cast(
    &mut self,
    type_name: &str,
    expression: NodeId,
  ) -> NodeId {
    self.expression(|span| HostExpression::Cast(HostCast::new(type_name.to_string(), expression, span)))
  }

  pub fn conditional(
    &mut self,
    condition: NodeId,
    then_expression: NodeId,
    else_expression: NodeId,
  ) -> NodeId {
    self.expression(|span| {
      HostExpression::Conditional(HostConditional::new(condition, then_expression, else_expression, span))
    })
  }

  pub fn parenthesized(
    &mut self,
    expression: NodeId,
  ) -> NodeId {
    self.expression(|span| HostExpression::Parenthesized(HostParenthesized::new(expression, span)))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn synthetic_spans_are_distinct() {
    let mut b = HostAstBuilder::new(FileId::new(0));
    let x = b.identifier("x");
    let y = b.identifier("y");

    let nodes = b.finish();
    assert_ne!(nodes.get(&x).span(), nodes.get(&y).span());
  }

  #[test]
  fn explicit_span_applies_to_next_node_only() {
    let mut b = HostAstBuilder::new(FileId::new(0));
    let goto = b.at(40, 50).goto_label("end");
    let other = b.break_statement();

    let nodes = b.finish();
    assert_eq!(nodes.get(&goto).span().start, BytePosition(40));
    assert_eq!(nodes.get(&goto).span().end, BytePosition(50));
    assert_eq!(nodes.get(&other).span().start, BytePosition(0));
  }

  #[test]
  fn nodes_decode_from_tagged_json() {
    let nodes: Store<HostNode> = serde_json::from_str(
      r#"[
        { "category": "expression", "kind": "identifier", "name": "x" },
        { "category": "expression", "kind": "literal", "value": { "kind": "int", "value": 2 } },
        { "category": "expression", "kind": "binary", "left": 0, "operator": "multiply", "right": 1 },
        { "category": "statement", "kind": "goto", "target": { "label": "end" },
          "span": { "start": 12, "end": 21 } },
        { "category": "declaration", "kind": "attribute" }
      ]"#,
    )
    .unwrap();

    assert_eq!(nodes.len(), 5);
    match nodes.get(&NodeId::new(2)) {
      HostNode::Expression(HostExpression::Binary(binary)) => {
        assert_eq!(binary.left, NodeId::new(0));
        assert_eq!(binary.operator, HostBinaryOperator::Multiply);
      },
      other => panic!("unexpected node {:?}", other),
    }
    assert_eq!(nodes.get(&NodeId::new(3)).kind_name(), "goto statement");
    assert_eq!(nodes.get(&NodeId::new(3)).span().start, BytePosition(12));
    assert_eq!(nodes.get(&NodeId::new(4)).kind_name(), "attribute");
  }
}
