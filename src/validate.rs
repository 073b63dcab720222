//! Validation engine.
//!
//! Walks the document tree top-down along the ad structure
//! (`VAST → Ad → InLine → Creatives → Creative → Linear → …`), runs the
//! selected profile's rules at every node it reaches and collects all
//! findings in one pass. The engine never stops on a failed rule; it only
//! stops descending where a required container is absent.

use crate::enums::{ElementKind, Profile};
use crate::error::{Diagnostic, ValidationResult};
use crate::rules::RuleSet;
use crate::sink::DiagnosticSink;
use crate::types::{AncestorContext, Document, Element};
use serde::{Deserialize, Serialize};

/// Expected root element tag.
pub const ROOT_TAG: &str = "VAST";

/// Options for one validation pass.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateOptions {
    #[serde(default)]
    pub profile: Profile,
    /// Version to check instead of the root's `version` attribute, for
    /// legacy documents whose declared version is known to be wrong.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_override: Option<String>,
}

impl ValidateOptions {
    pub fn new(profile: Profile) -> Self {
        ValidateOptions {
            profile,
            version_override: None,
        }
    }

    pub fn with_version_override(mut self, version: impl Into<String>) -> Self {
        self.version_override = Some(version.into());
        self
    }
}

/// Validate a parsed document against the rule table of `profile`.
pub fn validate(doc: &Document, profile: Profile) -> ValidationResult {
    validate_with(doc, &ValidateOptions::new(profile))
}

/// Validate with explicit options.
pub fn validate_with(doc: &Document, options: &ValidateOptions) -> ValidationResult {
    let rules = options.profile.rule_set();
    log::debug!(
        "validating <{}> with profile {}",
        doc.root.tag,
        rules.profile
    );

    let mut walker = Walker {
        rules,
        sink: DiagnosticSink::new(),
    };
    walker.visit_document(doc, options.version_override.as_deref());

    let result = walker.sink.into_result();
    log::debug!(
        "validation finished: {} fatal, {} advisory",
        result.fatal.len(),
        result.advisory.len()
    );
    result
}

struct Walker {
    rules: &'static RuleSet,
    sink: DiagnosticSink,
}

impl Walker {
    fn apply(&mut self, kind: ElementKind, element: &Element, ctx: &AncestorContext) {
        let rules = self.rules.rules_for(kind);
        log::trace!("{} rule(s) for <{}> in {}", rules.len(), kind.tag(), ctx);
        let mut found = Vec::new();
        for rule in rules {
            rule(element, ctx, &mut found);
        }
        self.sink.extend(found);
    }

    fn visit_document(&mut self, doc: &Document, version_override: Option<&str>) {
        let root = &doc.root;
        let ctx = AncestorContext::new();

        if root.tag != ROOT_TAG {
            self.sink.push(Diagnostic::fatal(
                "root-element",
                root,
                &ctx,
                format!("root element must be <{}>, found <{}>", ROOT_TAG, root.tag),
            ));
            return;
        }

        let mut found = Vec::new();
        for rule in self.rules.prolog {
            rule(doc, &mut found);
        }
        self.sink.extend(found);

        self.check_version(root, &ctx, version_override.or(doc.declared_version()));

        self.apply(ElementKind::Vast, root, &ctx);
        let inner = ctx.enter(root);
        for ad in root.children_named("Ad") {
            self.visit_ad(ad, &inner);
        }
    }

    fn check_version(&mut self, root: &Element, ctx: &AncestorContext, declared: Option<&str>) {
        let target = self.rules.target_version;
        if declared == Some(target) {
            return;
        }
        let detail = match declared {
            Some(v) => format!("declared version '{}' but this profile requires exactly '{}'", v, target),
            None => format!("missing 'version' attribute, this profile requires exactly '{}'", target),
        };
        self.sink.push(Diagnostic::new(
            self.rules.version_mismatch,
            "version",
            root,
            ctx,
            detail,
        ));
    }

    fn visit_ad(&mut self, ad: &Element, ctx: &AncestorContext) {
        self.apply(ElementKind::Ad, ad, ctx);
        let inner = ctx.enter(ad);
        if let Some(inline) = ad.first_child("InLine") {
            self.visit_inline(inline, &inner);
        } else if ad.first_child("Wrapper").is_some() {
            log::debug!("{}: wrapper ad, not descending", ctx.locate(ad));
        }
    }

    fn visit_inline(&mut self, inline: &Element, ctx: &AncestorContext) {
        self.apply(ElementKind::InLine, inline, ctx);
        let inner = ctx.enter(inline);

        let mut saw_creatives = false;
        for child in &inline.children {
            match child.tag.as_str() {
                "Impression" => self.apply(ElementKind::Impression, child, &inner),
                "Creatives" if is_first(inline, child) => {
                    saw_creatives = true;
                    self.visit_creatives(child, &inner);
                }
                _ => {}
            }
        }
        if !saw_creatives {
            log::debug!("{}: no <Creatives>, stopping", ctx.locate(inline));
        }
    }

    fn visit_creatives(&mut self, creatives: &Element, ctx: &AncestorContext) {
        self.apply(ElementKind::Creatives, creatives, ctx);
        let inner = ctx.enter(creatives);
        for creative in creatives.children_named("Creative") {
            self.visit_creative(creative, &inner);
        }
    }

    fn visit_creative(&mut self, creative: &Element, ctx: &AncestorContext) {
        self.apply(ElementKind::Creative, creative, ctx);
        if let Some(linear) = creative.first_child("Linear") {
            self.visit_linear(linear, &ctx.enter(creative));
        }
    }

    fn visit_linear(&mut self, linear: &Element, ctx: &AncestorContext) {
        self.apply(ElementKind::Linear, linear, ctx);
        let inner = ctx.enter(linear);

        for child in &linear.children {
            if !is_first(linear, child) {
                continue;
            }
            match child.tag.as_str() {
                "TrackingEvents" => {
                    self.apply(ElementKind::TrackingEvents, child, &inner);
                    let events_ctx = inner.enter(child);
                    for tracking in child.children_named("Tracking") {
                        self.apply(ElementKind::Tracking, tracking, &events_ctx);
                    }
                }
                "VideoClicks" => self.apply(ElementKind::VideoClicks, child, &inner),
                "MediaFiles" => {
                    self.apply(ElementKind::MediaFiles, child, &inner);
                    let files_ctx = inner.enter(child);
                    for media in child.children_named("MediaFile") {
                        self.apply(ElementKind::MediaFile, media, &files_ctx);
                    }
                }
                _ => {}
            }
        }
    }
}

/// Whether `child` is the first child of `parent` carrying its tag.
fn is_first(parent: &Element, child: &Element) -> bool {
    parent
        .first_child(&child.tag)
        .is_some_and(|first| std::ptr::eq(first, child))
}
