use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Types that have a direct shader-language counterpart.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
  Void,
  Bool,
  Int,
  UInt,
  Float,
  Double,
  Bool2,
  Bool3,
  Bool4,
  Int2,
  Int3,
  Int4,
  UInt2,
  UInt3,
  UInt4,
  Float2,
  Float3,
  Float4,
  Float2x2,
  Float3x3,
  Float4x4,
  Sampler,
  Texture2D,
  CubeMap,
}

impl DataType {
  pub const ALL: [DataType; 24] = [
    DataType::Void,
    DataType::Bool,
    DataType::Int,
    DataType::UInt,
    DataType::Float,
    DataType::Double,
    DataType::Bool2,
    DataType::Bool3,
    DataType::Bool4,
    DataType::Int2,
    DataType::Int3,
    DataType::Int4,
    DataType::UInt2,
    DataType::UInt3,
    DataType::UInt4,
    DataType::Float2,
    DataType::Float3,
    DataType::Float4,
    DataType::Float2x2,
    DataType::Float3x3,
    DataType::Float4x4,
    DataType::Sampler,
    DataType::Texture2D,
    DataType::CubeMap,
  ];

  /// Texture objects are the only receivers of intrinsic member calls.
  pub fn is_texture(&self) -> bool {
    matches!(self, DataType::Texture2D | DataType::CubeMap)
  }

  pub fn is_scalar(&self) -> bool {
    matches!(
      self,
      DataType::Bool | DataType::Int | DataType::UInt | DataType::Float | DataType::Double
    )
  }

  pub fn is_vector(&self) -> bool {
    self.vector_size().is_some()
  }

  pub fn is_matrix(&self) -> bool {
    matches!(self, DataType::Float2x2 | DataType::Float3x3 | DataType::Float4x4)
  }

  pub fn vector_size(&self) -> Option<u8> {
    match self {
      DataType::Bool2 | DataType::Int2 | DataType::UInt2 | DataType::Float2 => Some(2),
      DataType::Bool3 | DataType::Int3 | DataType::UInt3 | DataType::Float3 => Some(3),
      DataType::Bool4 | DataType::Int4 | DataType::UInt4 | DataType::Float4 => Some(4),
      _ => None,
    }
  }

  /// Scalar type of a vector or matrix element; scalars map to themselves.
  pub fn element_type(&self) -> Option<DataType> {
    match self {
      DataType::Bool | DataType::Int | DataType::UInt | DataType::Float | DataType::Double => Some(*self),
      DataType::Bool2 | DataType::Bool3 | DataType::Bool4 => Some(DataType::Bool),
      DataType::Int2 | DataType::Int3 | DataType::Int4 => Some(DataType::Int),
      DataType::UInt2 | DataType::UInt3 | DataType::UInt4 => Some(DataType::UInt),
      DataType::Float2 | DataType::Float3 | DataType::Float4 => Some(DataType::Float),
      DataType::Float2x2 | DataType::Float3x3 | DataType::Float4x4 => Some(DataType::Float),
      DataType::Void | DataType::Sampler | DataType::Texture2D | DataType::CubeMap => None,
    }
  }

  pub fn name(&self) -> &'static str {
    match self {
      DataType::Void => "void",
      DataType::Bool => "bool",
      DataType::Int => "int",
      DataType::UInt => "uint",
      DataType::Float => "float",
      DataType::Double => "double",
      DataType::Bool2 => "bool2",
      DataType::Bool3 => "bool3",
      DataType::Bool4 => "bool4",
      DataType::Int2 => "int2",
      DataType::Int3 => "int3",
      DataType::Int4 => "int4",
      DataType::UInt2 => "uint2",
      DataType::UInt3 => "uint3",
      DataType::UInt4 => "uint4",
      DataType::Float2 => "float2",
      DataType::Float3 => "float3",
      DataType::Float4 => "float4",
      DataType::Float2x2 => "float2x2",
      DataType::Float3x3 => "float3x3",
      DataType::Float4x4 => "float4x4",
      DataType::Sampler => "sampler",
      DataType::Texture2D => "texture2d",
      DataType::CubeMap => "cubemap",
    }
  }

  pub fn from_name(name: &str) -> Option<DataType> {
    DataType::ALL.iter().copied().find(|ty| ty.name() == name)
  }
}

impl Display for DataType {
  fn fmt(
    &self,
    f: &mut std::fmt::Formatter<'_>,
  ) -> std::fmt::Result {
    write!(f, "{}", self.name())
  }
}
