use shade_diagnostics::message::DiagnosticMessage;

use crate::error::{LoweringError, LoweringResult};

/// Append-only collection of the diagnostics reported while lowering one method.
#[derive(Debug, Default)]
pub struct DiagnosticSink {
  messages: Vec<DiagnosticMessage>,
  limit: Option<usize>,
}

impl DiagnosticSink {
  pub fn new(limit: Option<usize>) -> Self {
    Self {
      messages: Vec::new(),
      limit,
    }
  }

  /// Record a diagnostic. Once the limit is reached the method is abandoned.
  pub fn report(
    &mut self,
    message: DiagnosticMessage,
  ) -> LoweringResult<()> {
    if let Some(limit) = self.limit {
      if self.messages.len() >= limit {
        return Err(LoweringError::TooManyDiagnostics(limit));
      }
    }

    self.messages.push(message);
    Ok(())
  }

  pub fn messages(&self) -> &[DiagnosticMessage] {
    &self.messages
  }

  pub fn len(&self) -> usize {
    self.messages.len()
  }

  pub fn is_empty(&self) -> bool {
    self.messages.is_empty()
  }

  pub fn into_messages(self) -> Vec<DiagnosticMessage> {
    self.messages
  }
}
