use std::fmt::Display;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::types::DataType;

fn escape_special_characters(value: &str) -> String {
  value
    .replace("\\", "\\\\")
    .replace("\"", "\\\"")
    .replace("\n", "\\n")
    .replace("\r", "\\r")
    .replace("\t", "\\t")
    .replace("\0", "\\0")
}

/// Compile-time constant value as written in the host source.
#[derive(Debug, PartialEq, Clone, Hash, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum LiteralValue {
  Bool(bool),
  Int(i64),
  UInt(u64),
  Float(OrderedFloat<f32>),
  Double(OrderedFloat<f64>),
  Char(char),
  String(String),
}

impl LiteralValue {
  /// Shader type of the literal, or `None` for host-only literals (chars and strings).
  pub fn data_type(&self) -> Option<DataType> {
    match self {
      LiteralValue::Bool(_) => Some(DataType::Bool),
      LiteralValue::Int(_) => Some(DataType::Int),
      LiteralValue::UInt(_) => Some(DataType::UInt),
      LiteralValue::Float(_) => Some(DataType::Float),
      LiteralValue::Double(_) => Some(DataType::Double),
      LiteralValue::Char(_) | LiteralValue::String(_) => None,
    }
  }
}

impl Display for LiteralValue {
  fn fmt(
    &self,
    f: &mut std::fmt::Formatter<'_>,
  ) -> std::fmt::Result {
    match self {
      LiteralValue::Bool(b) => write!(f, "{}", b),
      LiteralValue::Int(i) => write!(f, "{}", i),
      LiteralValue::UInt(u) => write!(f, "{}u", u),
      LiteralValue::Float(x) => write!(f, "{:?}f", x.0),
      LiteralValue::Double(x) => write!(f, "{:?}", x.0),
      LiteralValue::Char(c) => write!(f, "'{}'", c.escape_default()),
      LiteralValue::String(s) => write!(f, "\"{}\"", escape_special_characters(s)),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display_keeps_suffixes() {
    assert_eq!(LiteralValue::Int(10).to_string(), "10");
    assert_eq!(LiteralValue::UInt(3).to_string(), "3u");
    assert_eq!(LiteralValue::Float(OrderedFloat(2.0)).to_string(), "2.0f");
    assert_eq!(LiteralValue::Double(OrderedFloat(0.5)).to_string(), "0.5");
    assert_eq!(LiteralValue::String("a\"b".to_string()).to_string(), "\"a\\\"b\"");
  }

  #[test]
  fn host_only_literals_have_no_shader_type() {
    assert_eq!(LiteralValue::Char('x').data_type(), None);
    assert_eq!(LiteralValue::Bool(true).data_type(), Some(DataType::Bool));
  }

  #[test]
  fn decodes_tagged_json() {
    let value: LiteralValue = serde_json::from_str(r#"{"kind":"float","value":1.5}"#).unwrap();
    assert_eq!(value, LiteralValue::Float(OrderedFloat(1.5)));
  }
}
