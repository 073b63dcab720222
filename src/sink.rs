use crate::error::{Diagnostic, Severity, ValidationResult};

/// Accumulates the findings of one validation pass.
///
/// Each pass owns its own sink, so independent passes never share state.
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    fatal: Vec<Diagnostic>,
    advisory: Vec<Diagnostic>,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route a diagnostic to the list matching its severity.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Fatal => self.fatal.push(diagnostic),
            Severity::Advisory => self.advisory.push(diagnostic),
        }
    }

    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        for d in diagnostics {
            self.push(d);
        }
    }

    pub fn fatal_count(&self) -> usize {
        self.fatal.len()
    }

    pub fn advisory_count(&self) -> usize {
        self.advisory.len()
    }

    pub fn into_result(self) -> ValidationResult {
        ValidationResult {
            fatal: self.fatal,
            advisory: self.advisory,
        }
    }
}
