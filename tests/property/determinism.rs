use proptest::prelude::*;
use vast_check::{Document, Element, Profile, Severity, validate};

const TAGS: &[&str] = &[
    "Ad", "InLine", "Wrapper", "AdSystem", "AdTitle", "Impression", "Creatives", "Creative",
    "Linear", "Duration", "TrackingEvents", "Tracking", "VideoClicks", "ClickThrough",
    "MediaFiles", "MediaFile", "Description", "Error",
];

const ATTRS: &[&str] = &[
    "id", "version", "event", "delivery", "type", "width", "height", "bitrate", "scalable",
    "isScalable", "keepAspectRatio", "skipoffset",
];

const VALUES: &[&str] = &[
    "", " ", "a1", "3.0", "2.0", "start", "bogus", "progressive", "streaming", "video/mp4",
    "text/html", "640", "wide", "true", "yes", "00:00:15", "15%",
];

const ROOTS: &[&str] = &["VAST", "VAST", "VAST", "VMAP"];

fn leaf() -> impl Strategy<Value = Element> {
    (
        prop::sample::select(TAGS),
        prop::collection::btree_map(prop::sample::select(ATTRS), prop::sample::select(VALUES), 0..4),
        prop::option::of(prop::sample::select(VALUES)),
    )
        .prop_map(|(tag, attrs, text)| {
            let mut el = Element::new(tag);
            for (k, v) in attrs {
                el = el.with_attr(k, v);
            }
            if let Some(t) = text {
                el = el.with_text(t);
            }
            el
        })
}

fn element() -> impl Strategy<Value = Element> {
    leaf().prop_recursive(6, 64, 6, |inner| {
        (leaf(), prop::collection::vec(inner, 0..6)).prop_map(|(mut el, children)| {
            el.children = children;
            el
        })
    })
}

fn document() -> impl Strategy<Value = Document> {
    (
        prop::sample::select(ROOTS),
        prop::sample::select(VALUES),
        prop::collection::vec(element(), 0..4),
    )
        .prop_map(|(root, version, children)| {
            let mut root = Element::new(root).with_attr("version", version);
            root.children = children;
            Document::new(root)
        })
}

fn profile() -> impl Strategy<Value = Profile> {
    prop_oneof![Just(Profile::Vast2), Just(Profile::Vast3)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn validation_is_deterministic(doc in document(), profile in profile()) {
        prop_assert_eq!(validate(&doc, profile), validate(&doc, profile));
    }

    #[test]
    fn conformant_iff_no_fatal(doc in document(), profile in profile()) {
        let result = validate(&doc, profile);
        prop_assert_eq!(result.is_conformant(), result.fatal.is_empty());
        prop_assert!(result.fatal.iter().all(|d| d.severity == Severity::Fatal));
        prop_assert!(result.advisory.iter().all(|d| d.severity == Severity::Advisory));
    }

    #[test]
    fn wrong_root_is_the_only_finding(doc in document(), profile in profile()) {
        let result = validate(&doc, profile);
        if doc.root.tag != "VAST" {
            prop_assert_eq!(result.fatal.len(), 1);
            prop_assert!(result.advisory.is_empty());
        }
    }

    #[test]
    fn messages_are_self_contained(doc in document(), profile in profile()) {
        let result = validate(&doc, profile);
        for d in result.diagnostics() {
            prop_assert!(d.message.starts_with(&d.element), "{}", d.message);
            if let Some(ad) = &d.context.ad_id {
                if d.element != "Ad" {
                    let expected = format!("Ad id={}", ad);
                    prop_assert!(d.message.contains(&expected), "{}", d.message);
                }
            }
        }
    }
}
