//! Strict 3.0 profile.
//!
//! Adds the AdSystem `version` attribute, width/height on MediaFile, creative
//! body and id checks, and prolog hints. Non-numeric dimensions, an unknown
//! `delivery` and a root `version` other than `3.0` are fatal here.

use super::common::*;
use super::{PrologRule, Rule, RuleSet};
use crate::enums::{ElementKind, Profile};
use crate::error::{Diagnostic, Severity};
use crate::types::{AncestorContext, Element};

fn media_file_attrs_non_empty(media: &Element, ctx: &AncestorContext, out: &mut Vec<Diagnostic>) {
    media_file_attrs(media, ctx, &["delivery", "type", "width", "height"], false, out);
}

fn numeric_attributes_strict(media: &Element, ctx: &AncestorContext, out: &mut Vec<Diagnostic>) {
    numeric_attributes(media, ctx, Severity::Fatal, out);
}

fn delivery_value_strict(media: &Element, ctx: &AncestorContext, out: &mut Vec<Diagnostic>) {
    delivery_value(media, ctx, Severity::Fatal, out);
}

const VAST: &[Rule] = &[ad_required, xsi_namespace_declared];
const AD: &[Rule] = &[ad_id_present, ad_body_present];
const INLINE: &[Rule] = &[
    ad_system_present,
    ad_system_version,
    ad_title_present,
    description_not_blank,
    error_has_macro,
    impression_required,
    creatives_required,
];
const IMPRESSION: &[Rule] = &[impression_text];
const CREATIVES: &[Rule] = &[creative_required];
const CREATIVE: &[Rule] = &[creative_id_present, creative_body_present];
const LINEAR: &[Rule] = &[duration_valid, skipoffset_format, media_files_required];
const TRACKING: &[Rule] = &[tracking_event, tracking_text];
const VIDEO_CLICKS: &[Rule] = &[click_through_text];
const MEDIA_FILES: &[Rule] = &[media_file_required];
const MEDIA_FILE: &[Rule] = &[
    media_file_attrs_non_empty,
    retired_attributes,
    boolean_attributes,
    numeric_attributes_strict,
    delivery_value_strict,
    media_type,
    media_file_url,
];

const PROLOG: &[PrologRule] = &[xml_declaration_present, declaration_encoding];

pub static VAST_3_0: RuleSet = RuleSet {
    profile: Profile::Vast3,
    target_version: "3.0",
    version_mismatch: Severity::Fatal,
    prolog: PROLOG,
    table: &[
        (ElementKind::Vast, VAST),
        (ElementKind::Ad, AD),
        (ElementKind::InLine, INLINE),
        (ElementKind::Impression, IMPRESSION),
        (ElementKind::Creatives, CREATIVES),
        (ElementKind::Creative, CREATIVE),
        (ElementKind::Linear, LINEAR),
        (ElementKind::Tracking, TRACKING),
        (ElementKind::VideoClicks, VIDEO_CLICKS),
        (ElementKind::MediaFiles, MEDIA_FILES),
        (ElementKind::MediaFile, MEDIA_FILE),
    ],
};
