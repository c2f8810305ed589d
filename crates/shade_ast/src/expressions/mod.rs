use serde::{Deserialize, Serialize};
use shade_type::span::Span;

use crate::expressions::{
  anonymous::{HostAnonymousMethod, HostAnonymousType, HostLambda},
  array::{HostArrayCreation, HostArrayInitializer, HostArraySpecifier},
  assignment::HostAssignment,
  binary::HostBinary,
  cast::HostCast,
  checked::HostCheckedExpression,
  conditional::HostConditional,
  empty::HostEmptyExpression,
  identifier::HostIdentifier,
  indexer::HostIndexer,
  invocation::HostInvocation,
  literal::{HostLiteral, HostNull},
  member_reference::HostMemberReference,
  named::HostNamed,
  object_creation::HostObjectCreation,
  parenthesized::HostParenthesized,
  pointer::HostPointerReference,
  query::{HostQuery, HostQueryClause},
  reference::{HostBase, HostThis, HostTypeReference},
  type_query::{HostStackAlloc, HostTypeOperand, HostTypeTest},
  unary::HostUnary,
};

pub mod anonymous;
pub mod array;
pub mod assignment;
pub mod binary;
pub mod cast;
pub mod checked;
pub mod conditional;
pub mod empty;
pub mod identifier;
pub mod indexer;
pub mod invocation;
pub mod literal;
pub mod member_reference;
pub mod named;
pub mod object_creation;
pub mod parenthesized;
pub mod pointer;
pub mod query;
pub mod reference;
pub mod type_query;
pub mod unary;

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HostExpression {
  Assignment(HostAssignment),
  Binary(HostBinary),
  Unary(HostUnary),
  Identifier(HostIdentifier),
  Indexer(HostIndexer),
  MemberReference(HostMemberReference),
  ObjectCreation(HostObjectCreation),
  Literal(HostLiteral),
  Null(HostNull),
  Invocation(HostInvocation),
  Cast(HostCast),
  Conditional(HostConditional),
  Parenthesized(HostParenthesized),
  This(HostThis),
  Base(HostBase),
  TypeReference(HostTypeReference),
  ArraySpecifier(HostArraySpecifier),
  /// `Name = value` inside an object or anonymous type initializer.
  NamedExpression(HostNamed),
  /// `name: value` in an argument list.
  NamedArgument(HostNamed),
  Empty(HostEmptyExpression),
  AnonymousMethod(HostAnonymousMethod),
  Lambda(HostLambda),
  AnonymousType(HostAnonymousType),
  ArrayCreation(HostArrayCreation),
  ArrayInitializer(HostArrayInitializer),
  PointerReference(HostPointerReference),
  SizeOf(HostTypeOperand),
  TypeOf(HostTypeOperand),
  DefaultValue(HostTypeOperand),
  StackAlloc(HostStackAlloc),
  As(HostTypeTest),
  Is(HostTypeTest),
  Checked(HostCheckedExpression),
  Unchecked(HostCheckedExpression),
  Query(HostQuery),
  QueryClause(HostQueryClause),
}

impl HostExpression {
  pub fn span(&self) -> &Span {
    match self {
      HostExpression::Assignment(expr) => &expr.span,
      HostExpression::Binary(expr) => &expr.span,
      HostExpression::Unary(expr) => &expr.span,
      HostExpression::Identifier(expr) => &expr.span,
      HostExpression::Indexer(expr) => &expr.span,
      HostExpression::MemberReference(expr) => &expr.span,
      HostExpression::ObjectCreation(expr) => &expr.span,
      HostExpression::Literal(expr) => &expr.span,
      HostExpression::Null(expr) => &expr.span,
      HostExpression::Invocation(expr) => &expr.span,
      HostExpression::Cast(expr) => &expr.span,
      HostExpression::Conditional(expr) => &expr.span,
      HostExpression::Parenthesized(expr) => &expr.span,
      HostExpression::This(expr) => &expr.span,
      HostExpression::Base(expr) => &expr.span,
      HostExpression::TypeReference(expr) => &expr.span,
      HostExpression::ArraySpecifier(expr) => &expr.span,
      HostExpression::NamedExpression(expr) => &expr.span,
      HostExpression::NamedArgument(expr) => &expr.span,
      HostExpression::Empty(expr) => &expr.span,
      HostExpression::AnonymousMethod(expr) => &expr.span,
      HostExpression::Lambda(expr) => &expr.span,
      HostExpression::AnonymousType(expr) => &expr.span,
      HostExpression::ArrayCreation(expr) => &expr.span,
      HostExpression::ArrayInitializer(expr) => &expr.span,
      HostExpression::PointerReference(expr) => &expr.span,
      HostExpression::SizeOf(expr) => &expr.span,
      HostExpression::TypeOf(expr) => &expr.span,
      HostExpression::DefaultValue(expr) => &expr.span,
      HostExpression::StackAlloc(expr) => &expr.span,
      HostExpression::As(expr) => &expr.span,
      HostExpression::Is(expr) => &expr.span,
      HostExpression::Checked(expr) => &expr.span,
      HostExpression::Unchecked(expr) => &expr.span,
      HostExpression::Query(expr) => &expr.span,
      HostExpression::QueryClause(expr) => &expr.span,
    }
  }

  pub fn kind_name(&self) -> &'static str {
    match self {
      HostExpression::Assignment(_) => "assignment",
      HostExpression::Binary(_) => "binary expression",
      HostExpression::Unary(_) => "unary expression",
      HostExpression::Identifier(_) => "identifier",
      HostExpression::Indexer(_) => "indexer",
      HostExpression::MemberReference(_) => "member reference",
      HostExpression::ObjectCreation(_) => "object creation",
      HostExpression::Literal(_) => "literal",
      HostExpression::Null(_) => "null literal",
      HostExpression::Invocation(_) => "invocation",
      HostExpression::Cast(_) => "cast",
      HostExpression::Conditional(_) => "conditional expression",
      HostExpression::Parenthesized(_) => "parenthesized expression",
      HostExpression::This(_) => "this reference",
      HostExpression::Base(_) => "base reference",
      HostExpression::TypeReference(_) => "type reference",
      HostExpression::ArraySpecifier(_) => "array specifier",
      HostExpression::NamedExpression(_) => "named expression",
      HostExpression::NamedArgument(_) => "named argument",
      HostExpression::Empty(_) => "empty expression",
      HostExpression::AnonymousMethod(_) => "anonymous method",
      HostExpression::Lambda(_) => "lambda",
      HostExpression::AnonymousType(_) => "anonymous type",
      HostExpression::ArrayCreation(_) => "array creation",
      HostExpression::ArrayInitializer(_) => "array initializer",
      HostExpression::PointerReference(_) => "pointer reference",
      HostExpression::SizeOf(_) => "sizeof expression",
      HostExpression::TypeOf(_) => "typeof expression",
      HostExpression::DefaultValue(_) => "default value expression",
      HostExpression::StackAlloc(_) => "stackalloc expression",
      HostExpression::As(_) => "as expression",
      HostExpression::Is(_) => "is expression",
      HostExpression::Checked(_) => "checked expression",
      HostExpression::Unchecked(_) => "unchecked expression",
      HostExpression::Query(_) => "query expression",
      HostExpression::QueryClause(_) => "query clause",
    }
  }
}
