//! Lenient 2.0 profile.
//!
//! Structural requirements and retired attribute names are fatal; value
//! format problems on MediaFile are only flagged. A root `version` other than
//! `2.0` is tolerated.

use super::common::*;
use super::{PrologRule, Rule, RuleSet};
use crate::enums::{ElementKind, Profile};
use crate::error::{Diagnostic, Severity};
use crate::types::{AncestorContext, Element};

fn media_file_attrs_present(media: &Element, ctx: &AncestorContext, out: &mut Vec<Diagnostic>) {
    media_file_attrs(media, ctx, &["delivery", "type"], true, out);
}

fn numeric_attributes_hint(media: &Element, ctx: &AncestorContext, out: &mut Vec<Diagnostic>) {
    numeric_attributes(media, ctx, Severity::Advisory, out);
}

fn delivery_value_hint(media: &Element, ctx: &AncestorContext, out: &mut Vec<Diagnostic>) {
    delivery_value(media, ctx, Severity::Advisory, out);
}

const VAST: &[Rule] = &[ad_required];
const AD: &[Rule] = &[ad_body_present];
const INLINE: &[Rule] = &[
    ad_system_present,
    ad_title_present,
    impression_required,
    creatives_required,
];
const IMPRESSION: &[Rule] = &[impression_text];
const CREATIVES: &[Rule] = &[creative_required];
const LINEAR: &[Rule] = &[duration_valid, skipoffset_format, media_files_required];
const TRACKING: &[Rule] = &[tracking_event, tracking_text];
const VIDEO_CLICKS: &[Rule] = &[click_through_text];
const MEDIA_FILES: &[Rule] = &[media_file_required];
const MEDIA_FILE: &[Rule] = &[
    retired_attributes,
    media_file_attrs_present,
    boolean_attributes,
    numeric_attributes_hint,
    delivery_value_hint,
    media_type,
    media_file_url,
];

const PROLOG: &[PrologRule] = &[];

pub static VAST_2_0: RuleSet = RuleSet {
    profile: Profile::Vast2,
    target_version: "2.0",
    version_mismatch: Severity::Advisory,
    prolog: PROLOG,
    table: &[
        (ElementKind::Vast, VAST),
        (ElementKind::Ad, AD),
        (ElementKind::InLine, INLINE),
        (ElementKind::Impression, IMPRESSION),
        (ElementKind::Creatives, CREATIVES),
        (ElementKind::Linear, LINEAR),
        (ElementKind::Tracking, TRACKING),
        (ElementKind::VideoClicks, VIDEO_CLICKS),
        (ElementKind::MediaFiles, MEDIA_FILES),
        (ElementKind::MediaFile, MEDIA_FILE),
    ],
};
