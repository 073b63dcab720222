use crate::types::AncestorContext;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Diagnostic severity level.
///
/// `Fatal` findings make a document non-conformant; `Advisory` findings are
/// quality hints that never block conformance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Fatal,
    Advisory,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Fatal => write!(f, "fatal"),
            Severity::Advisory => write!(f, "advisory"),
        }
    }
}

/// A single finding produced by a rule.
///
/// `message` is self-contained: it already names the offending element, its
/// `id` when it has one, and the nearest identified ancestors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub rule: String,
    pub element: String,
    pub message: String,
    pub context: AncestorContext,
}

impl Diagnostic {
    /// Build a diagnostic located at `element`, whose ancestors are `ctx`.
    pub fn new(
        severity: Severity,
        rule: &str,
        element: &crate::types::Element,
        ctx: &AncestorContext,
        detail: impl fmt::Display,
    ) -> Self {
        let location = ctx.locate(element);
        Diagnostic {
            severity,
            rule: rule.to_string(),
            element: element.tag.clone(),
            message: format!("{}: {}", location, detail),
            context: ctx.enter(element),
        }
    }

    pub fn fatal(
        rule: &str,
        element: &crate::types::Element,
        ctx: &AncestorContext,
        detail: impl fmt::Display,
    ) -> Self {
        Self::new(Severity::Fatal, rule, element, ctx, detail)
    }

    pub fn advisory(
        rule: &str,
        element: &crate::types::Element,
        ctx: &AncestorContext,
        detail: impl fmt::Display,
    ) -> Self {
        Self::new(Severity::Advisory, rule, element, ctx, detail)
    }

    pub fn is_fatal(&self) -> bool {
        self.severity == Severity::Fatal
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} ({})", self.severity, self.message, self.rule)
    }
}

/// Result of validation: fatal findings and advisory findings, each in
/// document traversal order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub fatal: Vec<Diagnostic>,
    pub advisory: Vec<Diagnostic>,
}

impl ValidationResult {
    /// A document conforms iff no fatal diagnostic was produced.
    pub fn is_conformant(&self) -> bool {
        self.fatal.is_empty()
    }

    /// All diagnostics, fatal first.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.fatal.iter().chain(self.advisory.iter())
    }

    /// Diagnostics produced by the named rule, fatal first.
    pub fn by_rule<'a>(&'a self, rule: &'a str) -> impl Iterator<Item = &'a Diagnostic> + 'a {
        self.diagnostics().filter(move |d| d.rule == rule)
    }
}

/// Error kind for parse failures.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseErrorKind {
    Empty,
    Syntax,
    Structure,
    InvalidValue,
}

/// Produced by `parse` when markup cannot be turned into a document tree,
/// and by the value grammars in `primitives` when a leaf value is malformed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u64>,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, message: impl Into<String>) -> Self {
        ParseError {
            kind,
            message: message.into(),
            position: None,
        }
    }

    pub(crate) fn at(mut self, position: u64) -> Self {
        self.position = Some(position);
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(pos) = self.position {
            write!(f, "byte {}: {}", pos, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for ParseError {}
