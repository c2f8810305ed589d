//! On-disk form of a lowering job.
//!
//! A request carries everything the external phases would normally hand over in
//! memory: the host tree of one effect class, the resolver's answers, and the
//! symbol tables registered for the effect and each of its shader methods.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use shade_ast::{HostAst, NodeId};
use shade_lower::ResolutionTable;
use shade_type::definition::{EffectSymbols, MethodSymbols};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestSource {
  pub path: PathBuf,
  pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodRequest {
  #[serde(flatten)]
  pub symbols: MethodSymbols,
  pub body: NodeId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoweringRequest {
  /// Host source the spans point into. Only used to render excerpts.
  #[serde(default)]
  pub source: Option<RequestSource>,
  pub effect: EffectSymbols,
  pub nodes: HostAst,
  #[serde(default)]
  pub bindings: ResolutionTable,
  #[serde(default)]
  pub methods: Vec<MethodRequest>,
}

#[derive(Debug)]
pub enum RequestError {
  IoError { path: PathBuf, source: std::io::Error },

  JsonError { path: Option<PathBuf>, message: String },

  /// A method body or binding names a node that is not in `nodes`.
  DanglingNode { context: String, node: u32, node_count: usize },
}

impl fmt::Display for RequestError {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    match self {
      RequestError::IoError { path, source } => {
        write!(f, "failed to read '{}': {}", path.display(), source)
      },

      RequestError::JsonError { path: Some(path), message } => {
        write!(f, "failed to parse '{}': {}", path.display(), message)
      },

      RequestError::JsonError { path: None, message } => write!(f, "failed to parse request: {}", message),

      RequestError::DanglingNode {
        context,
        node,
        node_count,
      } => write!(
        f,
        "{} refers to node {} but the request only has {} nodes",
        context, node, node_count
      ),
    }
  }
}

impl std::error::Error for RequestError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      RequestError::IoError { source, .. } => Some(source),
      _ => None,
    }
  }
}

impl LoweringRequest {
  pub fn from_json(text: &str) -> Result<Self, RequestError> {
    let request: LoweringRequest = serde_json::from_str(text).map_err(|e| RequestError::JsonError {
      path: None,
      message: e.to_string(),
    })?;

    request.validate()?;
    Ok(request)
  }

  pub fn load(path: &Path) -> Result<Self, RequestError> {
    let content = std::fs::read_to_string(path).map_err(|e| RequestError::IoError {
      path: path.to_path_buf(),
      source: e,
    })?;

    Self::from_json(&content).map_err(|e| match e {
      RequestError::JsonError { path: None, message } => RequestError::JsonError {
        path: Some(path.to_path_buf()),
        message,
      },
      other => other,
    })
  }

  /// Entry points and resolver keys must name existing nodes. Child references
  /// inside the tree are checked while lowering.
  pub fn validate(&self) -> Result<(), RequestError> {
    let node_count = self.nodes.len();

    for method in &self.methods {
      if !self.nodes.contains(&method.body) {
        return Err(RequestError::DanglingNode {
          context: format!("body of method '{}'", method.symbols.name),
          node: method.body.index(),
          node_count,
        });
      }
    }

    for (node, _) in self.bindings.sorted() {
      if !self.nodes.contains(&node) {
        return Err(RequestError::DanglingNode {
          context: "binding".to_string(),
          node: node.index(),
          node_count,
        });
      }
    }

    Ok(())
  }

  pub fn method(
    &self,
    name: &str,
  ) -> Option<&MethodRequest> {
    self.methods.iter().find(|m| m.symbols.name == name)
  }
}
