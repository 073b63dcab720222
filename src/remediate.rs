//! Text-to-text repair of known deprecated constructs.
//!
//! Works on the raw markup, before parsing, so it also fixes documents that a
//! strict consumer would reject outright. It performs no semantic validation;
//! callers re-validate the result (see [`crate::repair`]).

use crate::rules::common::RETIRED_ATTRIBUTES;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// A start tag that mentions one of the retired attribute names. Quoted
/// values are consumed whole, so they may contain `>`.
static LEGACY_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"<[A-Za-z_](?:[^<>"']|"[^"]*"|'[^']*')*\s(?:isScalable|keepAspectRatio)\s*=(?:[^<>"']|"[^"]*"|'[^']*')*>"#,
    )
    .unwrap()
});

/// `<ClickThrough>` with an empty, whitespace-only or empty-CDATA body.
static EMPTY_CLICK_THROUGH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<ClickThrough(?:\s[^<>]*)?>\s*(?:<!\[CDATA\[\s*\]\]>\s*)?</ClickThrough\s*>")
        .unwrap()
});

static SELF_CLOSING_CLICK_THROUGH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<ClickThrough(?:\s[^<>]*)?/>").unwrap());

struct RetiredName {
    /// `<ws>legacy<ws>=<ws>value`, value single- or double-quoted.
    legacy: Regex,
    /// Whether the modern name is already in the tag.
    modern: Regex,
    replacement: String,
}

static RETIRED_NAMES: LazyLock<Vec<RetiredName>> = LazyLock::new(|| {
    RETIRED_ATTRIBUTES
        .iter()
        .map(|(legacy, modern)| RetiredName {
            legacy: Regex::new(&format!(
                r#"(\s+){}(\s*=\s*)("[^"]*"|'[^']*')"#,
                legacy
            ))
            .unwrap(),
            modern: Regex::new(&format!(r"\s{}\s*=", modern)).unwrap(),
            replacement: format!("${{1}}{}${{2}}${{3}}", modern),
        })
        .collect()
});

/// Outcome of [`remediate`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remediation {
    pub text: String,
    /// Legacy attributes renamed to their modern name.
    pub renamed_attributes: usize,
    /// Legacy attributes dropped because the modern name was already there.
    pub removed_attributes: usize,
    pub removed_click_throughs: usize,
}

impl Remediation {
    pub fn is_changed(&self) -> bool {
        self.renamed_attributes + self.removed_attributes + self.removed_click_throughs > 0
    }
}

/// Rewrite retired attribute names and drop empty `<ClickThrough>` elements.
///
/// Total and idempotent: `rewrite(&rewrite(x)) == rewrite(x)`.
pub fn rewrite(raw: &str) -> String {
    remediate(raw).text
}

/// Like [`rewrite`], also reporting what was changed.
pub fn remediate(raw: &str) -> Remediation {
    let mut report = Remediation::default();
    let mut text = raw.to_string();

    // Removing an attribute or element can splice a new match together.
    loop {
        let fixed = drop_empty_click_throughs(&fix_start_tags(&text, &mut report), &mut report);
        if fixed == text {
            break;
        }
        text = fixed;
    }
    report.text = text;

    if report.is_changed() {
        log::debug!(
            "remediation: {} renamed, {} removed, {} empty ClickThrough dropped",
            report.renamed_attributes,
            report.removed_attributes,
            report.removed_click_throughs
        );
    }
    report
}

fn fix_start_tags(text: &str, report: &mut Remediation) -> String {
    LEGACY_TAG_RE
        .replace_all(text, |caps: &regex::Captures<'_>| {
            let mut tag = caps[0].to_string();
            for name in RETIRED_NAMES.iter() {
                let count = name.legacy.find_iter(&tag).count();
                if count == 0 {
                    continue;
                }
                if name.modern.is_match(&tag) {
                    tag = name.legacy.replace_all(&tag, "").into_owned();
                    report.removed_attributes += count;
                } else {
                    tag = name
                        .legacy
                        .replace_all(&tag, name.replacement.as_str())
                        .into_owned();
                    report.renamed_attributes += count;
                }
            }
            tag
        })
        .into_owned()
}

fn drop_empty_click_throughs(text: &str, report: &mut Remediation) -> String {
    let mut out = text.to_string();
    for re in [&*EMPTY_CLICK_THROUGH_RE, &*SELF_CLOSING_CLICK_THROUGH_RE] {
        let count = re.find_iter(&out).count();
        if count > 0 {
            out = re.replace_all(&out, "").into_owned();
            report.removed_click_throughs += count;
        }
    }
    out
}
