use serde::{Deserialize, Serialize};
use shade_type::span::Span;

/// Node kinds that only occur at type or namespace level. A well-formed method body
/// never contains one.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
  Attribute,
  AttributeSection,
  Namespace,
  TypeDeclaration,
  UsingDeclaration,
  UsingAliasDeclaration,
  ExternAlias,
  Delegate,
  Method,
  Property,
  Field,
  Event,
  Indexer,
  Operator,
  Constructor,
  Destructor,
  Accessor,
  Parameter,
  TypeParameter,
  Constraint,
  CatchClause,
  SwitchSection,
  CaseLabel,
  Comment,
}

impl DeclarationKind {
  pub fn name(&self) -> &'static str {
    match self {
      DeclarationKind::Attribute => "attribute",
      DeclarationKind::AttributeSection => "attribute section",
      DeclarationKind::Namespace => "namespace declaration",
      DeclarationKind::TypeDeclaration => "type declaration",
      DeclarationKind::UsingDeclaration => "using declaration",
      DeclarationKind::UsingAliasDeclaration => "using alias declaration",
      DeclarationKind::ExternAlias => "extern alias",
      DeclarationKind::Delegate => "delegate declaration",
      DeclarationKind::Method => "method declaration",
      DeclarationKind::Property => "property declaration",
      DeclarationKind::Field => "field declaration",
      DeclarationKind::Event => "event declaration",
      DeclarationKind::Indexer => "indexer declaration",
      DeclarationKind::Operator => "operator declaration",
      DeclarationKind::Constructor => "constructor declaration",
      DeclarationKind::Destructor => "destructor declaration",
      DeclarationKind::Accessor => "accessor",
      DeclarationKind::Parameter => "parameter declaration",
      DeclarationKind::TypeParameter => "type parameter",
      DeclarationKind::Constraint => "type constraint",
      DeclarationKind::CatchClause => "catch clause",
      DeclarationKind::SwitchSection => "switch section",
      DeclarationKind::CaseLabel => "case label",
      DeclarationKind::Comment => "comment",
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostDeclaration {
  pub kind: DeclarationKind,
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default)]
  pub span: Span,
}

impl HostDeclaration {
  pub fn new(
    kind: DeclarationKind,
    name: Option<String>,
    span: Span,
  ) -> Self {
    Self { kind, name, span }
  }
}
