//! Shader symbols registered by the declaration pass before a method is lowered.
//!
//! Every table is an append-only [`Store`]; the lowering pass only reads them.

use serde::{Deserialize, Serialize};

use crate::{Id, Store, span::Span, types::DataType, value::LiteralValue};

/// Identity of a local symbol as handed out by the host semantic resolver.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HostSymbolId(pub u32);

impl std::fmt::Display for HostSymbolId {
  fn fmt(
    &self,
    f: &mut std::fmt::Formatter<'_>,
  ) -> std::fmt::Result {
    write!(f, "#{}", self.0)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShaderVariable {
  pub name: String,
  pub data_type: DataType,
  /// The resolver symbol this variable was registered for.
  pub host_symbol: HostSymbolId,
  #[serde(default)]
  pub span: Span,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterQualifier {
  #[default]
  In,
  Out,
  InOut,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShaderParameter {
  pub name: String,
  pub data_type: DataType,
  #[serde(default)]
  pub qualifier: ParameterQualifier,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShaderConstant {
  pub name: String,
  pub data_type: DataType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShaderLiteral {
  pub name: String,
  pub data_type: DataType,
  pub value: LiteralValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShaderTexture {
  pub name: String,
  pub data_type: DataType,
  #[serde(default)]
  pub slot: Option<u32>,
}

pub type VariableId = Id<ShaderVariable>;
pub type ParameterId = Id<ShaderParameter>;
pub type ConstantId = Id<ShaderConstant>;
pub type LiteralId = Id<ShaderLiteral>;
pub type TextureId = Id<ShaderTexture>;

/// Variables and parameters of one shader method.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MethodSymbols {
  pub name: String,
  #[serde(default)]
  pub parameters: Store<ShaderParameter>,
  #[serde(default)]
  pub variables: Store<ShaderVariable>,
}

impl MethodSymbols {
  pub fn new(name: &str) -> Self {
    Self {
      name: name.to_string(),
      parameters: Store::new(),
      variables: Store::new(),
    }
  }

  pub fn add_parameter(
    &mut self,
    name: &str,
    data_type: DataType,
    qualifier: ParameterQualifier,
  ) -> ParameterId {
    self.parameters.alloc(ShaderParameter {
      name: name.to_string(),
      data_type,
      qualifier,
    })
  }

  pub fn add_variable(
    &mut self,
    name: &str,
    data_type: DataType,
    host_symbol: HostSymbolId,
    span: Span,
  ) -> VariableId {
    self.variables.alloc(ShaderVariable {
      name: name.to_string(),
      data_type,
      host_symbol,
      span,
    })
  }

  pub fn parameter(
    &self,
    id: &ParameterId,
  ) -> &ShaderParameter {
    self.parameters.get(id)
  }

  pub fn variable(
    &self,
    id: &VariableId,
  ) -> &ShaderVariable {
    self.variables.get(id)
  }

  /// All parameters with the given name, in declaration order.
  pub fn parameters_named(
    &self,
    name: &str,
  ) -> Vec<ParameterId> {
    self
      .parameters
      .iter()
      .filter(|(_, p)| p.name == name)
      .map(|(id, _)| id)
      .collect()
  }

  /// All variables registered for the given resolver symbol. Names are not consulted.
  pub fn variables_for(
    &self,
    host_symbol: HostSymbolId,
  ) -> Vec<VariableId> {
    self
      .variables
      .iter()
      .filter(|(_, v)| v.host_symbol == host_symbol)
      .map(|(id, _)| id)
      .collect()
  }
}

/// Constants, named literals and textures declared by an effect class.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EffectSymbols {
  pub name: String,
  #[serde(default)]
  pub constants: Store<ShaderConstant>,
  #[serde(default)]
  pub literals: Store<ShaderLiteral>,
  #[serde(default)]
  pub textures: Store<ShaderTexture>,
}

impl EffectSymbols {
  pub fn new(name: &str) -> Self {
    Self {
      name: name.to_string(),
      constants: Store::new(),
      literals: Store::new(),
      textures: Store::new(),
    }
  }

  pub fn add_constant(
    &mut self,
    name: &str,
    data_type: DataType,
  ) -> ConstantId {
    self.constants.alloc(ShaderConstant {
      name: name.to_string(),
      data_type,
    })
  }

  pub fn add_literal(
    &mut self,
    name: &str,
    data_type: DataType,
    value: LiteralValue,
  ) -> LiteralId {
    self.literals.alloc(ShaderLiteral {
      name: name.to_string(),
      data_type,
      value,
    })
  }

  pub fn add_texture(
    &mut self,
    name: &str,
    data_type: DataType,
    slot: Option<u32>,
  ) -> TextureId {
    self.textures.alloc(ShaderTexture {
      name: name.to_string(),
      data_type,
      slot,
    })
  }

  pub fn constant_named(
    &self,
    name: &str,
  ) -> Option<ConstantId> {
    self.constants.iter().find(|(_, c)| c.name == name).map(|(id, _)| id)
  }

  pub fn literal_named(
    &self,
    name: &str,
  ) -> Option<LiteralId> {
    self.literals.iter().find(|(_, l)| l.name == name).map(|(id, _)| id)
  }

  pub fn texture_named(
    &self,
    name: &str,
  ) -> Option<TextureId> {
    self.textures.iter().find(|(_, t)| t.name == name).map(|(id, _)| id)
  }

  pub fn constant(
    &self,
    id: &ConstantId,
  ) -> &ShaderConstant {
    self.constants.get(id)
  }

  pub fn literal(
    &self,
    id: &LiteralId,
  ) -> &ShaderLiteral {
    self.literals.get(id)
  }

  pub fn texture(
    &self,
    id: &TextureId,
  ) -> &ShaderTexture {
    self.textures.get(id)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn variables_are_found_by_identity_not_name() {
    let mut method = MethodSymbols::new("Main");
    let a = method.add_variable("x", DataType::Float, HostSymbolId(1), Span::default());
    let b = method.add_variable("x", DataType::Int, HostSymbolId(2), Span::default());

    assert_eq!(method.variables_for(HostSymbolId(2)), vec![b]);
    assert_eq!(method.variables_for(HostSymbolId(1)), vec![a]);
    assert!(method.variables_for(HostSymbolId(3)).is_empty());
  }

  #[test]
  fn effect_lookup_returns_first_registration() {
    let mut effect = EffectSymbols::new("Blur");
    let first = effect.add_constant("Radius", DataType::Float);
    effect.add_constant("Radius", DataType::Float);

    assert_eq!(effect.constant_named("Radius"), Some(first));
    assert_eq!(effect.texture_named("Radius"), None);
  }

  #[test]
  fn tables_decode_from_json() {
    let effect: EffectSymbols = serde_json::from_str(
      r#"{
        "name": "Sky",
        "textures": [{ "name": "Env", "data_type": "cubemap" }]
      }"#,
    )
    .unwrap();

    let id = effect.texture_named("Env").unwrap();
    assert_eq!(effect.texture(&id).data_type, DataType::CubeMap);
    assert!(effect.constants.is_empty());
  }
}
