//! Version-specific rule tables.
//!
//! Each profile owns one immutable [`RuleSet`]. Tables never fall through to
//! each other: a rule applies under a profile only if that profile's table
//! lists it. Rule bodies shared by both tables live in [`common`]; rules whose
//! severity differs per profile are thin wrappers in [`v2`] and [`v3`].

pub mod common;
pub mod v2;
pub mod v3;

use crate::enums::{ElementKind, Profile};
use crate::error::{Diagnostic, Severity};
use crate::types::{AncestorContext, Document, Element};

/// A pure check of one element in its ancestor context.
///
/// Rules append findings to `out` and never touch the tree.
pub type Rule = fn(&Element, &AncestorContext, &mut Vec<Diagnostic>);

/// A check of document-level facts outside the element tree (the prolog).
pub type PrologRule = fn(&Document, &mut Vec<Diagnostic>);

/// The complete rule table of one profile.
pub struct RuleSet {
    pub profile: Profile,
    /// Exact root `version` string this table targets.
    pub target_version: &'static str,
    /// Severity of a root `version` that differs from `target_version`.
    pub version_mismatch: Severity,
    pub prolog: &'static [PrologRule],
    pub table: &'static [(ElementKind, &'static [Rule])],
}

impl RuleSet {
    /// Rules registered for `kind`, in evaluation order.
    pub fn rules_for(&self, kind: ElementKind) -> &'static [Rule] {
        self.table
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, rules)| *rules)
            .unwrap_or(&[])
    }

    /// Number of element rules in the table.
    pub fn len(&self) -> usize {
        self.table.iter().map(|(_, rules)| rules.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0 && self.prolog.is_empty()
    }
}
