//! Read-only view of the host semantic resolver.
//!
//! The resolver itself lives outside this crate. Lowering only needs one answer per
//! node, a [`Binding`], and [`Resolution`] layers the typed queries the dispatcher
//! uses on top of that.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use shade_ast::{HostAst, HostNode, NodeId, expressions::HostExpression};
use shade_type::{definition::HostSymbolId, span::Span, types::DataType, value::LiteralValue};

use crate::error::{LoweringError, LoweringResult};

/// A host type as the resolver reports it. Types with a shader counterpart are
/// recognized by their shader name; everything else is kept by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HostType {
  Shader(DataType),
  Named(String),
}

impl HostType {
  pub fn name(&self) -> &str {
    match self {
      HostType::Shader(data_type) => data_type.name(),
      HostType::Named(name) => name,
    }
  }

  pub fn data_type(&self) -> Option<DataType> {
    match self {
      HostType::Shader(data_type) => Some(*data_type),
      HostType::Named(_) => None,
    }
  }

  pub fn is_texture(&self) -> bool {
    self.data_type().is_some_and(|ty| ty.is_texture())
  }
}

impl From<String> for HostType {
  fn from(name: String) -> Self {
    match DataType::from_name(&name) {
      Some(data_type) => HostType::Shader(data_type),
      None => HostType::Named(name),
    }
  }
}

impl From<HostType> for String {
  fn from(host_type: HostType) -> Self {
    match host_type {
      HostType::Shader(data_type) => data_type.name().to_string(),
      HostType::Named(name) => name,
    }
  }
}

impl fmt::Display for HostType {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    write!(f, "{}", self.name())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalSymbol {
  pub id: HostSymbolId,
  pub name: String,
  #[serde(rename = "type")]
  pub host_type: HostType,
}

/// What the resolver knows about one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Binding {
  Local {
    symbol: LocalSymbol,
    #[serde(default)]
    is_parameter: bool,
  },
  Member {
    declaring_type: HostType,
    member_name: String,
    member_type: HostType,
  },
  /// Any other expression: only its type is known.
  Other {
    #[serde(rename = "type")]
    host_type: HostType,
  },
  Unresolved,
}

impl Binding {
  pub fn host_type(&self) -> Option<&HostType> {
    match self {
      Binding::Local { symbol, .. } => Some(&symbol.host_type),
      Binding::Member { member_type, .. } => Some(member_type),
      Binding::Other { host_type } => Some(host_type),
      Binding::Unresolved => None,
    }
  }

  pub fn data_type(&self) -> Option<DataType> {
    self.host_type().and_then(HostType::data_type)
  }
}

impl fmt::Display for Binding {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    match self {
      Binding::Local { symbol, is_parameter } => write!(
        f,
        "{} {}{}: {}",
        if *is_parameter { "parameter" } else { "local" },
        symbol.name,
        symbol.id,
        symbol.host_type
      ),
      Binding::Member {
        declaring_type,
        member_name,
        member_type,
      } => write!(f, "member {}.{}: {}", declaring_type, member_name, member_type),
      Binding::Other { host_type } => write!(f, "value: {}", host_type),
      Binding::Unresolved => write!(f, "unresolved"),
    }
  }
}

pub trait SemanticResolver {
  fn resolve(
    &self,
    node: NodeId,
  ) -> Binding;
}

/// Resolver answers computed ahead of time, keyed by node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolutionTable {
  bindings: HashMap<NodeId, Binding>,
}

impl ResolutionTable {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn insert(
    &mut self,
    node: NodeId,
    binding: Binding,
  ) {
    self.bindings.insert(node, binding);
  }

  pub fn get(
    &self,
    node: &NodeId,
  ) -> Option<&Binding> {
    self.bindings.get(node)
  }

  pub fn len(&self) -> usize {
    self.bindings.len()
  }

  pub fn is_empty(&self) -> bool {
    self.bindings.is_empty()
  }

  /// Entries ordered by node id.
  pub fn sorted(&self) -> Vec<(NodeId, &Binding)> {
    let mut entries: Vec<_> = self.bindings.iter().map(|(id, binding)| (*id, binding)).collect();
    entries.sort_by_key(|(id, _)| id.index());
    entries
  }
}

impl SemanticResolver for ResolutionTable {
  fn resolve(
    &self,
    node: NodeId,
  ) -> Binding {
    self.bindings.get(&node).cloned().unwrap_or(Binding::Unresolved)
  }
}

#[derive(Clone, Copy)]
pub struct Resolution<'a> {
  resolver: &'a dyn SemanticResolver,
  ast: &'a HostAst,
}

impl<'a> Resolution<'a> {
  pub fn new(
    resolver: &'a dyn SemanticResolver,
    ast: &'a HostAst,
  ) -> Self {
    Self { resolver, ast }
  }

  pub fn binding(
    &self,
    node: NodeId,
  ) -> Binding {
    self.resolver.resolve(node)
  }

  /// Type that declares the member a node refers to, if it refers to a member.
  pub fn declaring_type_of(
    &self,
    node: NodeId,
  ) -> Option<HostType> {
    match self.binding(node) {
      Binding::Member { declaring_type, .. } => Some(declaring_type),
      _ => None,
    }
  }

  /// Shader type of the value a node evaluates to.
  pub fn data_type_of(
    &self,
    node: NodeId,
  ) -> LoweringResult<DataType> {
    let host_type = match self.binding(node) {
      Binding::Local { symbol, .. } => symbol.host_type,
      Binding::Member { member_type, .. } => member_type,
      Binding::Other { host_type } => host_type,
      Binding::Unresolved => return self.intrinsic_type_of(node),
    };

    host_type.data_type().ok_or_else(|| LoweringError::UnrepresentableType {
      type_name: host_type.name().to_string(),
      span: self.span_of(node),
    })
  }

  /// Literals and parentheses carry their own type when the resolver has no entry.
  fn intrinsic_type_of(
    &self,
    node: NodeId,
  ) -> LoweringResult<DataType> {
    match self.ast.try_get(&node) {
      Some(HostNode::Expression(HostExpression::Literal(literal))) => {
        literal.value.data_type().ok_or_else(|| LoweringError::UnrepresentableType {
          type_name: match literal.value {
            LiteralValue::Char(_) => "char".to_string(),
            _ => "string".to_string(),
          },
          span: literal.span.clone(),
        })
      },
      Some(HostNode::Expression(HostExpression::Parenthesized(inner))) => self.data_type_of(inner.expression),
      Some(HostNode::Expression(HostExpression::Identifier(_) | HostExpression::MemberReference(_))) | None => {
        Err(LoweringError::UnresolvedSymbol {
          name: self.describe(node),
          span: self.span_of(node),
        })
      },
      Some(other) => Err(LoweringError::MissingType {
        kind: other.kind_name().to_string(),
        span: other.span().clone(),
      }),
    }
  }

  /// Short user-facing name of a node for messages.
  pub fn describe(
    &self,
    node: NodeId,
  ) -> String {
    match self.ast.try_get(&node) {
      Some(HostNode::Expression(HostExpression::Identifier(identifier))) => identifier.name.clone(),
      Some(HostNode::Expression(HostExpression::MemberReference(member))) => member.member_name.clone(),
      Some(other) => other.kind_name().to_string(),
      None => format!("node {}", node.index()),
    }
  }

  pub fn span_of(
    &self,
    node: NodeId,
  ) -> Span {
    self.ast.try_get(&node).map(|n| n.span().clone()).unwrap_or_default()
  }
}

#[cfg(test)]
mod tests {
  use shade_ast::{builder::HostAstBuilder, expressions::binary::HostBinaryOperator};
  use shade_type::file::FileId;

  use super::*;

  #[test]
  fn host_types_decode_by_shader_name() {
    assert_eq!(HostType::from("float4".to_string()), HostType::Shader(DataType::Float4));
    assert_eq!(
      HostType::from("System.String".to_string()),
      HostType::Named("System.String".to_string())
    );
    assert!(HostType::Shader(DataType::CubeMap).is_texture());
    assert!(!HostType::Named("Texture".to_string()).is_texture());
  }

  #[test]
  fn table_decodes_from_json() {
    let table: ResolutionTable = serde_json::from_str(
      r#"{
        "0": { "kind": "local", "symbol": { "id": 7, "name": "x", "type": "float" } },
        "3": { "kind": "member", "declaring_type": "Blur", "member_name": "Radius", "member_type": "float" },
        "4": { "kind": "other", "type": "float3" }
      }"#,
    )
    .unwrap();

    assert_eq!(table.len(), 3);
    match table.resolve(NodeId::new(0)) {
      Binding::Local { symbol, is_parameter } => {
        assert_eq!(symbol.id, HostSymbolId(7));
        assert!(!is_parameter);
      },
      other => panic!("unexpected binding {}", other),
    }
    assert_eq!(table.resolve(NodeId::new(4)).data_type(), Some(DataType::Float3));
    assert_eq!(table.resolve(NodeId::new(9)), Binding::Unresolved);
  }

  #[test]
  fn literal_types_fall_back_to_the_value() {
    let mut b = HostAstBuilder::new(FileId::new(0));
    let one = b.int(1);
    let paren = b.parenthesized(one);
    let name = b.identifier("mystery");
    let sum = b.binary(name, HostBinaryOperator::Add, one);
    let ast = b.finish();

    let table = ResolutionTable::new();
    let resolution = Resolution::new(&table, &ast);

    assert_eq!(resolution.data_type_of(one), Ok(DataType::Int));
    assert_eq!(resolution.data_type_of(paren), Ok(DataType::Int));
    assert!(matches!(
      resolution.data_type_of(name),
      Err(LoweringError::UnresolvedSymbol { ref name, .. }) if name == "mystery"
    ));
    assert!(matches!(
      resolution.data_type_of(sum),
      Err(LoweringError::MissingType { ref kind, .. }) if kind == "binary expression"
    ));
  }

  #[test]
  fn named_types_are_not_representable() {
    let mut b = HostAstBuilder::new(FileId::new(0));
    let list = b.identifier("list");
    let ast = b.finish();

    let mut table = ResolutionTable::new();
    table.insert(
      list,
      Binding::Other {
        host_type: HostType::Named("List`1".to_string()),
      },
    );

    let resolution = Resolution::new(&table, &ast);
    assert!(matches!(
      resolution.data_type_of(list),
      Err(LoweringError::UnrepresentableType { ref type_name, .. }) if type_name == "List`1"
    ));
  }
}
