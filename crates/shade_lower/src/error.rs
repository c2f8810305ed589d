use std::fmt;

use shade_diagnostics::message::DiagnosticMessage;
use shade_type::span::Span;

/// Why a host node could not be lowered.
///
/// The first four variants are user errors: a recovery point turns them into a
/// diagnostic and the node becomes `None`. The rest abort the whole method.
#[derive(Debug, Clone, PartialEq)]
pub enum LoweringError {
  UnsupportedFeature {
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
  /// The resolver has no type for a composite operand.
  MissingType {
    kind: String,
    span: Span,
  },
  /// A call that is not a texture intrinsic. Recoverable only under
  /// `InvocationPolicy::Diagnostic`.
  UnsupportedInvocation {
    target: String,
    member: String,
    arguments: usize,
    span: Span,
  },
  /// An earlier phase handed over something a well-formed method body cannot contain.
  InternalInvariantViolation(String),
  TooManyDiagnostics(usize),
}

pub type LoweringResult<T> = Result<T, LoweringError>;

impl LoweringError {
  pub fn invariant(reason: impl Into<String>) -> Self {
    LoweringError::InternalInvariantViolation(reason.into())
  }

  pub fn is_recoverable(&self) -> bool {
    matches!(
      self,
      LoweringError::UnsupportedFeature { .. }
        | LoweringError::UnresolvedSymbol { .. }
        | LoweringError::UnrepresentableType { .. }
        | LoweringError::MissingType { .. }
    )
  }

  pub fn to_diagnostic(&self) -> Option<DiagnosticMessage> {
    match self {
      LoweringError::UnsupportedFeature { feature, span } => Some(DiagnosticMessage::UnsupportedFeature {
        feature: *feature,
        span: span.clone(),
      }),
      LoweringError::UnresolvedSymbol { name, span } => Some(DiagnosticMessage::UnresolvedSymbol {
        name: name.clone(),
        span: span.clone(),
      }),
      LoweringError::UnrepresentableType { type_name, span } => Some(DiagnosticMessage::UnrepresentableType {
        type_name: type_name.clone(),
        span: span.clone(),
      }),
      LoweringError::MissingType { kind, span } => Some(DiagnosticMessage::MissingType {
        kind: kind.clone(),
        span: span.clone(),
      }),
      LoweringError::UnsupportedInvocation {
        target,
        member,
        arguments,
        span,
      } => Some(DiagnosticMessage::UnsupportedInvocation {
        target: target.clone(),
        member: member.clone(),
        arguments: *arguments,
        span: span.clone(),
      }),
      LoweringError::InternalInvariantViolation(_) | LoweringError::TooManyDiagnostics(_) => None,
    }
  }
}

impl fmt::Display for LoweringError {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    match self {
      LoweringError::UnsupportedFeature { feature, span } => {
        write!(f, "unsupported feature '{}' at {}", feature, span)
      },
      LoweringError::UnresolvedSymbol { name, span } => write!(f, "unresolved symbol '{}' at {}", name, span),
      LoweringError::UnrepresentableType { type_name, span } => {
        write!(f, "type '{}' has no shader representation (at {})", type_name, span)
      },
      LoweringError::MissingType { kind, span } => {
        write!(f, "no type known for {} operand at {}", kind, span)
      },
      LoweringError::UnsupportedInvocation {
        target,
        member,
        arguments,
        span,
      } => write!(
        f,
        "unsupported invocation '{}.{}' with {} argument(s) at {}",
        target, member, arguments, span
      ),
      LoweringError::InternalInvariantViolation(reason) => write!(f, "internal invariant violated: {}", reason),
      LoweringError::TooManyDiagnostics(limit) => {
        write!(f, "too many diagnostics: lowering stopped after {}", limit)
      },
    }
  }
}

impl std::error::Error for LoweringError {}
