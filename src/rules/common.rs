//! Rule bodies shared by both profile tables.
//!
//! A function here only runs under a profile whose table lists it (directly
//! or through a severity wrapper).

use crate::enums::{Delivery, TrackingEvent};
use crate::error::{Diagnostic, Severity};
use crate::primitives::{
    is_blank, is_boolean_literal, is_integer, is_media_type, is_skip_offset, is_time_offset,
};
use crate::types::{AncestorContext, Document, Element};

/// Legacy attribute names and their current replacements.
pub const RETIRED_ATTRIBUTES: [(&str, &str); 2] = [
    ("isScalable", "scalable"),
    ("keepAspectRatio", "maintainAspectRatio"),
];

const BOOLEAN_ATTRIBUTES: [&str; 4] = [
    "scalable",
    "maintainAspectRatio",
    "isScalable",
    "keepAspectRatio",
];

const NUMERIC_ATTRIBUTES: [&str; 3] = ["width", "height", "bitrate"];

// ─── Helpers ────────────────────────────────────────────────────────────────

/// Report a missing required singleton child, or one whose text is blank.
fn required_with_text(
    parent: &Element,
    ctx: &AncestorContext,
    tag: &str,
    rule_missing: &str,
    rule_text: &str,
    out: &mut Vec<Diagnostic>,
) {
    match parent.first_child(tag) {
        None => out.push(Diagnostic::fatal(
            rule_missing,
            parent,
            ctx,
            format!("missing required element <{}>", tag),
        )),
        Some(child) if child.has_blank_text() => out.push(Diagnostic::fatal(
            rule_text,
            child,
            &ctx.enter(parent),
            format!("element <{}> must have text content", tag),
        )),
        Some(_) => {}
    }
}

/// Report a one-or-more relationship with zero matches.
fn at_least_one(
    container: &Element,
    ctx: &AncestorContext,
    tag: &str,
    rule: &str,
    out: &mut Vec<Diagnostic>,
) {
    if container.children_named(tag).next().is_none() {
        out.push(Diagnostic::fatal(
            rule,
            container,
            ctx,
            format!(
                "<{}> must contain at least one <{}> element",
                container.tag, tag
            ),
        ));
    }
}

// ─── VAST ───────────────────────────────────────────────────────────────────

pub fn ad_required(root: &Element, ctx: &AncestorContext, out: &mut Vec<Diagnostic>) {
    at_least_one(root, ctx, "Ad", "ad-required", out);
}

pub fn xsi_namespace_declared(root: &Element, ctx: &AncestorContext, out: &mut Vec<Diagnostic>) {
    if !root.has_attr("xmlns:xsi") {
        out.push(Diagnostic::advisory(
            "xsi-namespace",
            root,
            ctx,
            "missing xmlns:xsi namespace declaration",
        ));
    }
}

// ─── Ad ─────────────────────────────────────────────────────────────────────

pub fn ad_id_present(ad: &Element, ctx: &AncestorContext, out: &mut Vec<Diagnostic>) {
    if ad.id().is_none() {
        out.push(Diagnostic::advisory(
            "ad-id",
            ad,
            ctx,
            "element <Ad> should have an 'id' attribute",
        ));
    }
}

pub fn ad_body_present(ad: &Element, ctx: &AncestorContext, out: &mut Vec<Diagnostic>) {
    if ad.first_child("InLine").is_none() && ad.first_child("Wrapper").is_none() {
        out.push(Diagnostic::fatal(
            "ad-body",
            ad,
            ctx,
            "must contain either <InLine> or <Wrapper>",
        ));
    }
}

// ─── InLine ─────────────────────────────────────────────────────────────────

pub fn ad_system_present(inline: &Element, ctx: &AncestorContext, out: &mut Vec<Diagnostic>) {
    required_with_text(
        inline,
        ctx,
        "AdSystem",
        "ad-system-required",
        "ad-system-text",
        out,
    );
}

pub fn ad_system_version(inline: &Element, ctx: &AncestorContext, out: &mut Vec<Diagnostic>) {
    if let Some(ad_system) = inline.first_child("AdSystem")
        && ad_system.attr("version").is_none_or(is_blank)
    {
        out.push(Diagnostic::fatal(
            "ad-system-version",
            ad_system,
            &ctx.enter(inline),
            "element <AdSystem> must have a non-empty 'version' attribute",
        ));
    }
}

pub fn ad_title_present(inline: &Element, ctx: &AncestorContext, out: &mut Vec<Diagnostic>) {
    required_with_text(
        inline,
        ctx,
        "AdTitle",
        "ad-title-required",
        "ad-title-text",
        out,
    );
}

pub fn description_not_blank(
    inline: &Element,
    ctx: &AncestorContext,
    out: &mut Vec<Diagnostic>,
) {
    if let Some(description) = inline.first_child("Description")
        && description.has_blank_text()
    {
        out.push(Diagnostic::advisory(
            "description-text",
            description,
            &ctx.enter(inline),
            "element <Description> is present but empty",
        ));
    }
}

pub fn error_has_macro(inline: &Element, ctx: &AncestorContext, out: &mut Vec<Diagnostic>) {
    if let Some(error) = inline.first_child("Error")
        && !error.text().contains("[ERRORCODE]")
    {
        out.push(Diagnostic::advisory(
            "error-macro",
            error,
            &ctx.enter(inline),
            "element <Error> should contain the [ERRORCODE] macro",
        ));
    }
}

pub fn impression_required(inline: &Element, ctx: &AncestorContext, out: &mut Vec<Diagnostic>) {
    at_least_one(inline, ctx, "Impression", "impression-required", out);
}

pub fn creatives_required(inline: &Element, ctx: &AncestorContext, out: &mut Vec<Diagnostic>) {
    if inline.first_child("Creatives").is_none() {
        out.push(Diagnostic::fatal(
            "creatives-required",
            inline,
            ctx,
            "missing required element <Creatives>",
        ));
    }
}

// ─── Impression ─────────────────────────────────────────────────────────────

pub fn impression_text(impression: &Element, ctx: &AncestorContext, out: &mut Vec<Diagnostic>) {
    if impression.has_blank_text() {
        out.push(Diagnostic::fatal(
            "impression-text",
            impression,
            ctx,
            "element <Impression> must have URL content",
        ));
    }
}

// ─── Creatives / Creative ───────────────────────────────────────────────────

pub fn creative_required(creatives: &Element, ctx: &AncestorContext, out: &mut Vec<Diagnostic>) {
    at_least_one(creatives, ctx, "Creative", "creative-required", out);
}

pub fn creative_id_present(creative: &Element, ctx: &AncestorContext, out: &mut Vec<Diagnostic>) {
    if creative.id().is_none() {
        out.push(Diagnostic::advisory(
            "creative-id",
            creative,
            ctx,
            "element <Creative> should have an 'id' attribute",
        ));
    }
}

pub fn creative_body_present(
    creative: &Element,
    ctx: &AncestorContext,
    out: &mut Vec<Diagnostic>,
) {
    let has_body = ["Linear", "NonLinearAds", "CompanionAds"]
        .into_iter()
        .any(|tag| creative.first_child(tag).is_some());
    if !has_body {
        out.push(Diagnostic::fatal(
            "creative-body",
            creative,
            ctx,
            "must contain <Linear>, <NonLinearAds> or <CompanionAds>",
        ));
    }
}

// ─── Linear ─────────────────────────────────────────────────────────────────

pub fn duration_valid(linear: &Element, ctx: &AncestorContext, out: &mut Vec<Diagnostic>) {
    required_with_text(
        linear,
        ctx,
        "Duration",
        "duration-required",
        "duration-text",
        out,
    );
    if let Some(duration) = linear.first_child("Duration")
        && !duration.has_blank_text()
    {
        let value = duration.text().trim();
        if !is_time_offset(value) {
            out.push(Diagnostic::fatal(
                "duration-format",
                duration,
                &ctx.enter(linear),
                format!(
                    "invalid <Duration> format '{}', expected HH:MM:SS or HH:MM:SS.mmm",
                    value
                ),
            ));
        }
    }
}

pub fn skipoffset_format(linear: &Element, ctx: &AncestorContext, out: &mut Vec<Diagnostic>) {
    if let Some(offset) = linear.attr("skipoffset")
        && !offset.is_empty()
        && !is_skip_offset(offset)
    {
        out.push(Diagnostic::advisory(
            "skipoffset-format",
            linear,
            ctx,
            format!(
                "invalid skipoffset '{}', expected HH:MM:SS, HH:MM:SS.mmm or a percentage such as 15%",
                offset
            ),
        ));
    }
}

pub fn media_files_required(linear: &Element, ctx: &AncestorContext, out: &mut Vec<Diagnostic>) {
    if linear.first_child("MediaFiles").is_none() {
        out.push(Diagnostic::fatal(
            "media-files-required",
            linear,
            ctx,
            "missing required element <MediaFiles>",
        ));
    }
}

// ─── Tracking ───────────────────────────────────────────────────────────────

pub fn tracking_event(tracking: &Element, ctx: &AncestorContext, out: &mut Vec<Diagnostic>) {
    match tracking.attr("event") {
        None | Some("") => out.push(Diagnostic::fatal(
            "tracking-event-required",
            tracking,
            ctx,
            "element <Tracking> must have an 'event' attribute",
        )),
        Some(event) if TrackingEvent::parse(event).is_none() => out.push(Diagnostic::advisory(
            "tracking-event-known",
            tracking,
            ctx,
            format!("unknown tracking event '{}' (may be custom)", event),
        )),
        Some(_) => {}
    }
}

pub fn tracking_text(tracking: &Element, ctx: &AncestorContext, out: &mut Vec<Diagnostic>) {
    if tracking.has_blank_text() {
        let event = tracking.attr("event").unwrap_or("unknown");
        out.push(Diagnostic::fatal(
            "tracking-text",
            tracking,
            ctx,
            format!("<Tracking event=\"{}\"> must have URL content", event),
        ));
    }
}

// ─── VideoClicks ────────────────────────────────────────────────────────────

/// A present-but-blank ClickThrough is fatal; an absent one is fine.
pub fn click_through_text(clicks: &Element, ctx: &AncestorContext, out: &mut Vec<Diagnostic>) {
    if let Some(click_through) = clicks.first_child("ClickThrough")
        && click_through.has_blank_text()
    {
        out.push(Diagnostic::fatal(
            "click-through-text",
            click_through,
            &ctx.enter(clicks),
            "element <ClickThrough> is empty; it must contain a URL or be removed",
        ));
    }
}

// ─── MediaFiles / MediaFile ─────────────────────────────────────────────────

pub fn media_file_required(files: &Element, ctx: &AncestorContext, out: &mut Vec<Diagnostic>) {
    at_least_one(files, ctx, "MediaFile", "media-file-required", out);
}

/// Required attributes. With `allow_empty`, presence alone satisfies the rule.
pub(crate) fn media_file_attrs(
    media: &Element,
    ctx: &AncestorContext,
    required: &[&str],
    allow_empty: bool,
    out: &mut Vec<Diagnostic>,
) {
    for attr in required {
        let satisfied = match media.attr(attr) {
            Some(value) => allow_empty || !value.is_empty(),
            None => false,
        };
        if !satisfied {
            out.push(Diagnostic::fatal(
                "media-file-attr",
                media,
                ctx,
                format!("missing required attribute '{}'", attr),
            ));
        }
    }
}

/// Presence of a legacy name is itself a defect, whatever else the element carries.
pub fn retired_attributes(media: &Element, ctx: &AncestorContext, out: &mut Vec<Diagnostic>) {
    for (legacy, current) in RETIRED_ATTRIBUTES {
        if media.has_attr(legacy) {
            out.push(Diagnostic::fatal(
                "retired-attribute",
                media,
                ctx,
                format!(
                    "uses retired attribute name '{}'; use '{}' (boolean)",
                    legacy, current
                ),
            ));
        }
    }
}

pub fn boolean_attributes(media: &Element, ctx: &AncestorContext, out: &mut Vec<Diagnostic>) {
    for attr in BOOLEAN_ATTRIBUTES {
        if let Some(value) = media.attr(attr)
            && !is_boolean_literal(value)
        {
            out.push(Diagnostic::advisory(
                "boolean-attribute",
                media,
                ctx,
                format!("attribute '{}' must be 'true' or 'false', found '{}'", attr, value),
            ));
        }
    }
}

pub(crate) fn numeric_attributes(
    media: &Element,
    ctx: &AncestorContext,
    severity: Severity,
    out: &mut Vec<Diagnostic>,
) {
    for attr in NUMERIC_ATTRIBUTES {
        if let Some(value) = media.attr(attr)
            && !value.is_empty()
            && !is_integer(value)
        {
            out.push(Diagnostic::new(
                severity,
                "numeric-attribute",
                media,
                ctx,
                format!("attribute '{}' must be a number, found '{}'", attr, value),
            ));
        }
    }
}

pub(crate) fn delivery_value(
    media: &Element,
    ctx: &AncestorContext,
    severity: Severity,
    out: &mut Vec<Diagnostic>,
) {
    if let Some(delivery) = media.attr("delivery")
        && !delivery.is_empty()
        && Delivery::parse(delivery).is_none()
    {
        out.push(Diagnostic::new(
            severity,
            "delivery-value",
            media,
            ctx,
            format!(
                "attribute 'delivery' must be 'progressive' or 'streaming', found '{}'",
                delivery
            ),
        ));
    }
}

pub fn media_type(media: &Element, ctx: &AncestorContext, out: &mut Vec<Diagnostic>) {
    if let Some(kind) = media.attr("type")
        && !kind.is_empty()
        && !is_media_type(kind)
    {
        out.push(Diagnostic::advisory(
            "media-type",
            media,
            ctx,
            format!("media type should start with 'video/' or 'audio/', found '{}'", kind),
        ));
    }
}

pub fn media_file_url(media: &Element, ctx: &AncestorContext, out: &mut Vec<Diagnostic>) {
    if media.has_blank_text() {
        out.push(Diagnostic::fatal(
            "media-file-url",
            media,
            ctx,
            "missing media file URL",
        ));
    }
}

// ─── Prolog ─────────────────────────────────────────────────────────────────

pub fn xml_declaration_present(doc: &Document, out: &mut Vec<Diagnostic>) {
    if doc.declaration.is_none() {
        out.push(Diagnostic::advisory(
            "xml-declaration",
            &doc.root,
            &AncestorContext::new(),
            "document has no XML declaration",
        ));
    }
}

pub fn declaration_encoding(doc: &Document, out: &mut Vec<Diagnostic>) {
    if let Some(decl) = &doc.declaration
        && decl.encoding.is_none()
    {
        out.push(Diagnostic::advisory(
            "declaration-encoding",
            &doc.root,
            &AncestorContext::new(),
            "XML declaration should specify an encoding",
        ));
    }
}
