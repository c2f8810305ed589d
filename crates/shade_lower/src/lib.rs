//! Lowering of host method bodies into the shader IR.
//!
//! A [`Lowerer`] translates one method: it walks the host tree from the body node,
//! asks the resolver about identifiers and operand types, binds symbols against the
//! pre-registered tables and collects diagnostics for constructs a shader cannot
//! express. Nothing here mutates the tree, the resolver or the symbol tables.

mod binder;
pub mod error;
mod intrinsics;
mod lowering;
pub mod report;
pub mod resolver;

use shade_ast::{HostAst, HostNode, NodeId};
use shade_config::{InvocationPolicy, LoweringOptions};
use shade_diagnostics::message::DiagnosticMessage;
use shade_ir::{ShaderNode, Statement};
use shade_type::definition::{EffectSymbols, MethodSymbols};

pub use error::{LoweringError, LoweringResult};
pub use intrinsics::recognize_intrinsic;
pub use report::DiagnosticSink;
pub use resolver::{Binding, HostType, LocalSymbol, Resolution, ResolutionTable, SemanticResolver};

/// Everything a translation reads. Borrowed for the duration of one method.
#[derive(Clone, Copy)]
pub struct LoweringContext<'a> {
  pub ast: &'a HostAst,
  pub resolver: &'a dyn SemanticResolver,
  pub method: &'a MethodSymbols,
  pub effect: &'a EffectSymbols,
  pub options: &'a LoweringOptions,
}

impl<'a> LoweringContext<'a> {
  pub fn new(
    ast: &'a HostAst,
    resolver: &'a dyn SemanticResolver,
    method: &'a MethodSymbols,
    effect: &'a EffectSymbols,
    options: &'a LoweringOptions,
  ) -> Self {
    Self {
      ast,
      resolver,
      method,
      effect,
      options,
    }
  }
}

/// Result of lowering one method body.
///
/// `body` is `None` when the body itself was unsupported or when `fatal` is set.
/// Diagnostics reported before a fatal error are kept.
#[derive(Debug, Clone, PartialEq)]
pub struct LoweredMethod {
  pub name: String,
  pub body: Option<Statement>,
  pub diagnostics: Vec<DiagnosticMessage>,
  pub fatal: Option<LoweringError>,
}

impl LoweredMethod {
  pub fn has_errors(&self) -> bool {
    self.fatal.is_some() || !self.diagnostics.is_empty()
  }
}

pub struct Lowerer<'a> {
  ctx: LoweringContext<'a>,
  resolution: Resolution<'a>,
  sink: DiagnosticSink,
}

impl<'a> Lowerer<'a> {
  pub fn new(ctx: LoweringContext<'a>) -> Self {
    Self {
      ctx,
      resolution: Resolution::new(ctx.resolver, ctx.ast),
      sink: DiagnosticSink::new(ctx.options.max_diagnostics),
    }
  }

  /// Lower the body of `ctx.method`, starting at `body`.
  pub fn lower_method(
    ctx: LoweringContext<'a>,
    body: NodeId,
  ) -> LoweredMethod {
    let mut lowerer = Lowerer::new(ctx);
    let result = lowerer.lower_statement(body);
    let diagnostics = lowerer.sink.into_messages();
    let name = ctx.method.name.clone();

    match result {
      Ok(body) => LoweredMethod {
        name,
        body,
        diagnostics,
        fatal: None,
      },
      Err(error) => LoweredMethod {
        name,
        body: None,
        diagnostics,
        fatal: Some(error),
      },
    }
  }

  /// Lower a single statement or expression node.
  ///
  /// Recoverable errors become diagnostics and an `Ok(None)` result. Only statements
  /// and expressions can appear on their own inside a method body.
  pub fn lower_node(
    &mut self,
    node: NodeId,
  ) -> LoweringResult<Option<ShaderNode>> {
    match self.node(node)? {
      HostNode::Statement(_) => Ok(self.lower_statement(node)?.map(ShaderNode::Statement)),
      HostNode::Expression(_) => Ok(self.lower_expression(node)?.map(ShaderNode::Expression)),
      HostNode::VariableInitializer(initializer) => Err(LoweringError::invariant(format!(
        "initializer of '{}' outside of a variable declaration",
        initializer.name
      ))),
      HostNode::Declaration(declaration) => Err(LoweringError::invariant(format!(
        "{} inside a method body",
        declaration.kind.name()
      ))),
    }
  }

  pub fn diagnostics(&self) -> &[DiagnosticMessage] {
    self.sink.messages()
  }

  pub fn into_diagnostics(self) -> Vec<DiagnosticMessage> {
    self.sink.into_messages()
  }

  fn node(
    &self,
    node: NodeId,
  ) -> LoweringResult<&'a HostNode> {
    let ast: &'a HostAst = self.ctx.ast;
    ast
      .try_get(&node)
      .ok_or_else(|| LoweringError::invariant(format!("node {} is not part of the tree", node.index())))
  }

  fn is_recoverable(
    &self,
    error: &LoweringError,
  ) -> bool {
    match error {
      LoweringError::UnsupportedInvocation { .. } => {
        self.ctx.options.invocation_policy == InvocationPolicy::Diagnostic
      },
      other => other.is_recoverable(),
    }
  }

  /// Turn a recoverable error into a reported diagnostic and an absent node.
  fn recover<T>(
    &mut self,
    result: LoweringResult<Option<T>>,
  ) -> LoweringResult<Option<T>> {
    match result {
      Ok(lowered) => Ok(lowered),
      Err(error) if self.is_recoverable(&error) => {
        if let Some(message) = error.to_diagnostic() {
          self.sink.report(message)?;
        }
        Ok(None)
      },
      Err(error) => Err(error),
    }
  }
}
