use shade_ast::{NodeId, builder::HostAstBuilder};
use shade_config::{InvocationPolicy, LoweringOptions};
use shade_diagnostics::{diagnostic_report::Severity, message::DiagnosticMessage};
use shade_ir::display::print_method;
use shade_lower::{Binding, HostType, LocalSymbol, LoweredMethod, Lowerer, LoweringContext, ResolutionTable};
use shade_type::{
  definition::{ConstantId, EffectSymbols, HostSymbolId, MethodSymbols, ParameterQualifier, TextureId},
  file::FileId,
  span::Span,
  types::DataType,
};

/// A method under construction: host nodes, resolver answers and registered symbols.
pub struct Fixture {
  pub ast: HostAstBuilder,
  pub bindings: ResolutionTable,
  pub method: MethodSymbols,
  pub effect: EffectSymbols,
  pub options: LoweringOptions,
  next_symbol: u32,
}

#[allow(dead_code)]
impl Fixture {
  pub fn new() -> Self {
    Self {
      ast: HostAstBuilder::new(FileId::new(0)),
      bindings: ResolutionTable::new(),
      method: MethodSymbols::new("Main"),
      effect: EffectSymbols::new("Blur"),
      options: LoweringOptions::default(),
      next_symbol: 1,
    }
  }

  pub fn with_policy(
    mut self,
    policy: InvocationPolicy,
  ) -> Self {
    self.options.invocation_policy = policy;
    self
  }

  pub fn with_limit(
    mut self,
    limit: usize,
  ) -> Self {
    self.options.max_diagnostics = Some(limit);
    self
  }

  fn fresh_symbol(
    &mut self,
    name: &str,
    data_type: DataType,
  ) -> LocalSymbol {
    let id = HostSymbolId(self.next_symbol);
    self.next_symbol += 1;
    LocalSymbol {
      id,
      name: name.to_string(),
      host_type: HostType::Shader(data_type),
    }
  }

  /// Register a method variable and return the resolver symbol it belongs to.
  pub fn local(
    &mut self,
    name: &str,
    data_type: DataType,
  ) -> LocalSymbol {
    let symbol = self.fresh_symbol(name, data_type);
    self.method.add_variable(name, data_type, symbol.id, Span::default());
    symbol
  }

  /// A local the resolver knows about but the declaration pass never registered.
  pub fn unregistered_local(
    &mut self,
    name: &str,
    data_type: DataType,
  ) -> LocalSymbol {
    self.fresh_symbol(name, data_type)
  }

  pub fn param(
    &mut self,
    name: &str,
    data_type: DataType,
  ) -> LocalSymbol {
    self.method.add_parameter(name, data_type, ParameterQualifier::In);
    self.fresh_symbol(name, data_type)
  }

  pub fn constant(
    &mut self,
    name: &str,
    data_type: DataType,
  ) -> ConstantId {
    self.effect.add_constant(name, data_type)
  }

  pub fn texture(
    &mut self,
    name: &str,
    data_type: DataType,
  ) -> TextureId {
    self.effect.add_texture(name, data_type, None)
  }

  pub fn bind(
    &mut self,
    node: NodeId,
    binding: Binding,
  ) -> NodeId {
    self.bindings.insert(node, binding);
    node
  }

  pub fn bind_type(
    &mut self,
    node: NodeId,
    data_type: DataType,
  ) -> NodeId {
    self.bind(
      node,
      Binding::Other {
        host_type: HostType::Shader(data_type),
      },
    )
  }

  pub fn use_local(
    &mut self,
    symbol: &LocalSymbol,
  ) -> NodeId {
    let node = self.ast.identifier(&symbol.name);
    self.bind(
      node,
      Binding::Local {
        symbol: symbol.clone(),
        is_parameter: false,
      },
    )
  }

  pub fn use_param(
    &mut self,
    symbol: &LocalSymbol,
  ) -> NodeId {
    let node = self.ast.identifier(&symbol.name);
    self.bind(
      node,
      Binding::Local {
        symbol: symbol.clone(),
        is_parameter: true,
      },
    )
  }

  /// Bare identifier naming a member of the effect class.
  pub fn use_member(
    &mut self,
    name: &str,
    data_type: DataType,
  ) -> NodeId {
    let node = self.ast.identifier(name);
    let binding = self.member_binding(name, HostType::Shader(data_type));
    self.bind(node, binding)
  }

  pub fn member_binding(
    &self,
    name: &str,
    member_type: HostType,
  ) -> Binding {
    Binding::Member {
      declaring_type: HostType::Named(self.effect.name.clone()),
      member_name: name.to_string(),
      member_type,
    }
  }

  pub fn declarator(
    &mut self,
    symbol: &LocalSymbol,
    initializer: Option<NodeId>,
  ) -> NodeId {
    let node = self.ast.variable(&symbol.name, initializer);
    self.bind(
      node,
      Binding::Local {
        symbol: symbol.clone(),
        is_parameter: false,
      },
    )
  }

  pub fn assign_statement(
    &mut self,
    left: NodeId,
    right: NodeId,
  ) -> NodeId {
    let assignment = self.ast.assign(left, right);
    self.ast.expression_statement(assignment)
  }

  /// `receiver.member(arguments)` where the member is declared on `declaring_type`.
  pub fn call(
    &mut self,
    receiver: NodeId,
    declaring_type: HostType,
    member: &str,
    arguments: Vec<NodeId>,
  ) -> NodeId {
    let callee = self.ast.member(receiver, member);
    let invocation = self.ast.invoke(callee, arguments);
    self.bind(
      invocation,
      Binding::Member {
        declaring_type,
        member_name: member.to_string(),
        member_type: HostType::Shader(DataType::Float4),
      },
    )
  }

  /// `texture.Sample(arguments)` on a registered effect texture.
  pub fn sample(
    &mut self,
    texture: &str,
    arguments: Vec<NodeId>,
  ) -> NodeId {
    let texture_type = self
      .effect
      .texture_named(texture)
      .map(|id| self.effect.texture(&id).data_type)
      .unwrap_or(DataType::Texture2D);
    let receiver = self.use_member(texture, texture_type);
    self.call(receiver, HostType::Shader(texture_type), "Sample", arguments)
  }

  pub fn lower(
    &self,
    body: NodeId,
  ) -> LoweredMethod {
    let ctx = LoweringContext::new(
      self.ast.nodes(),
      &self.bindings,
      &self.method,
      &self.effect,
      &self.options,
    );
    Lowerer::lower_method(ctx, body)
  }

  pub fn print(
    &self,
    lowered: &LoweredMethod,
  ) -> String {
    print_method(&self.method, &self.effect, lowered.body.as_ref())
  }

  pub fn lower_and_print(
    &self,
    body: NodeId,
  ) -> String {
    let lowered = self.lower(body);
    assert!(lowered.fatal.is_none(), "unexpected fatal error: {:?}", lowered.fatal);
    self.print(&lowered)
  }
}

/// Format diagnostics for stable snapshot comparison (sorted by span)
#[allow(dead_code)]
pub fn format_diagnostics(messages: &[DiagnosticMessage]) -> String {
  let mut sorted: Vec<_> = messages.iter().map(DiagnosticMessage::report).collect();
  sorted.sort_by(|a, b| {
    a.primary_span
      .start
      .cmp(&b.primary_span.start)
      .then_with(|| a.error_code.cmp(&b.error_code))
  });

  if sorted.is_empty() {
    return "(no diagnostics)".to_string();
  }

  let mut output = String::new();
  for diag in &sorted {
    let severity = match diag.severity {
      Severity::Error => "ERROR",
      Severity::Warning => "WARN",
      Severity::Info => "INFO",
      Severity::Hint => "HINT",
    };
    output.push_str(&format!(
      "[{}] {}: {}\n  at {}-{}\n",
      severity, diag.error_code, diag.message, diag.primary_span.start.0, diag.primary_span.end.0,
    ));
    for note in &diag.notes {
      output.push_str(&format!("  note: {}\n", note));
    }
  }
  output
}

/// Feature names of all unsupported-construct diagnostics, in report order.
#[allow(dead_code)]
pub fn features(messages: &[DiagnosticMessage]) -> Vec<&'static str> {
  messages.iter().filter_map(DiagnosticMessage::feature).collect()
}
