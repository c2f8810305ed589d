use std::fmt;

use shade_type::span::Span;

use super::diagnostic_report::{Diagnostic, Severity};

/// User-facing lowering diagnostics. Internal invariant failures are not
/// diagnostics; they abort the method and are rendered with
/// [`crate::render_internal_error`].
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticMessage {
  UnsupportedFeature {
    /// Stable identifier of the construct, e.g. `"goto"` or `"lambda"`.
    feature: &'static str,
    span: Span,
  },
  UnresolvedSymbol {
    name: String,
    span: Span,
  },
  UnrepresentableType {
    type_name: String,
    span: Span,
  },
  /// An operand expression the resolver assigned no type to.
  MissingType {
    kind: String,
    span: Span,
  },
  UnsupportedInvocation {
    target: String,
    member: String,
    arguments: usize,
    span: Span,
  },
}

impl fmt::Display for DiagnosticMessage {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    match self {
      DiagnosticMessage::UnsupportedFeature { feature, .. } => {
        write!(f, "'{}' is not supported in shader code", feature)
      },
      DiagnosticMessage::UnresolvedSymbol { name, .. } => {
        write!(f, "'{}' does not refer to a shader variable, parameter or effect member", name)
      },
      DiagnosticMessage::UnrepresentableType { type_name, .. } => {
        write!(f, "Type '{}' has no shader representation", type_name)
      },
      DiagnosticMessage::MissingType { kind, .. } => {
        write!(f, "No type is known for this operand ({})", kind)
      },
      DiagnosticMessage::UnsupportedInvocation {
        target,
        member,
        arguments,
        ..
      } => write!(
        f,
        "Cannot call '{}.{}' with {} argument{} in shader code",
        target,
        member,
        arguments,
        if *arguments == 1 { "" } else { "s" }
      ),
    }
  }
}

impl DiagnosticMessage {
  pub fn primary_span(&self) -> Span {
    match self {
      DiagnosticMessage::UnsupportedFeature { span, .. }
      | DiagnosticMessage::UnresolvedSymbol { span, .. }
      | DiagnosticMessage::UnrepresentableType { span, .. }
      | DiagnosticMessage::MissingType { span, .. }
      | DiagnosticMessage::UnsupportedInvocation { span, .. } => span.clone(),
    }
  }

  pub fn code(&self) -> String {
    match self {
      DiagnosticMessage::UnsupportedFeature { .. } => "L0001",
      DiagnosticMessage::UnresolvedSymbol { .. } => "L0002",
      DiagnosticMessage::UnrepresentableType { .. } => "L0003",
      DiagnosticMessage::UnsupportedInvocation { .. } => "L0004",
      DiagnosticMessage::MissingType { .. } => "L0005",
    }
    .to_string()
  }

  /// Feature name of an unsupported-construct diagnostic.
  pub fn feature(&self) -> Option<&'static str> {
    match self {
      DiagnosticMessage::UnsupportedFeature { feature, .. } => Some(*feature),
      _ => None,
    }
  }

  fn level(&self) -> Severity {
    Severity::Error
  }

  fn notes(&self) -> Vec<String> {
    match self {
      DiagnosticMessage::UnsupportedInvocation { .. } => {
        vec!["only Sample(coords) and Sample(coords, level) on texture objects can be called".to_string()]
      },
      DiagnosticMessage::UnresolvedSymbol { .. } => {
        vec!["effect members must be declared as constants, literals or textures".to_string()]
      },
      DiagnosticMessage::MissingType { .. } => {
        vec!["operand types come from the semantic model of the host method".to_string()]
      },
      _ => vec![],
    }
  }

  pub fn report(&self) -> Diagnostic {
    self.report_with_severity(self.level())
  }

  pub fn report_with_severity(
    &self,
    severity: Severity,
  ) -> Diagnostic {
    let mut diagnostic = Diagnostic::new(severity, self.to_string(), self.code(), self.primary_span());
    for note in self.notes() {
      diagnostic = diagnostic.with_note(note);
    }
    diagnostic
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn unsupported_feature_reports_as_error() {
    let message = DiagnosticMessage::UnsupportedFeature {
      feature: "goto",
      span: Span::default(),
    };
    let diagnostic = message.report();

    assert_eq!(diagnostic.error_code, "L0001");
    assert_eq!(diagnostic.message, "'goto' is not supported in shader code");
    assert!(diagnostic.is_error());
    assert_eq!(message.feature(), Some("goto"));
  }

  #[test]
  fn invocation_message_pluralizes_arguments() {
    let message = DiagnosticMessage::UnsupportedInvocation {
      target: "texture2d".to_string(),
      member: "Load".to_string(),
      arguments: 1,
      span: Span::default(),
    };

    assert_eq!(message.to_string(), "Cannot call 'texture2d.Load' with 1 argument in shader code");
    assert_eq!(message.report().notes.len(), 1);
  }

  #[test]
  fn missing_type_names_the_expression_kind() {
    let message = DiagnosticMessage::MissingType {
      kind: "binary expression".to_string(),
      span: Span::default(),
    };
    let diagnostic = message.report();

    assert_eq!(diagnostic.error_code, "L0005");
    assert_eq!(diagnostic.message, "No type is known for this operand (binary expression)");
    assert_eq!(message.feature(), None);
  }

  #[test]
  fn downgraded_severity_keeps_code() {
    let message = DiagnosticMessage::UnresolvedSymbol {
      name: "Foo".to_string(),
      span: Span::default(),
    };
    let diagnostic = message.report_with_severity(Severity::Warning);

    assert_eq!(diagnostic.error_code, "L0002");
    assert!(!diagnostic.is_error());
  }
}
