use proptest::prelude::*;
use vast_check::{escape_url_for_xml, remediate, rewrite};

/// Markup fragments that exercise the rewriter, glued together in any order.
const FRAGMENTS: &[&str] = &[
    "<ClickThrough></ClickThrough>",
    "<ClickThrough> \n </ClickThrough>",
    "<ClickThrough><![CDATA[]]></ClickThrough>",
    "<ClickThrough/>",
    "<ClickThrough>https://x.example.com</ClickThrough>",
    r#"<MediaFile isScalable="true">u</MediaFile>"#,
    r#"<MediaFile scalable="false" isScalable='true'/>"#,
    r#"<MediaFile keepAspectRatio = "1" maintainAspectRatio="0">u</MediaFile>"#,
    "<Clic",
    "kThrough>",
    " isScal",
    "able=\"x\"",
];

fn fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => prop::sample::select(FRAGMENTS).prop_map(str::to_string),
        1 => "[ <>/=\"a-zA-Z]{0,12}",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn rewrite_is_idempotent(parts in prop::collection::vec(fragment(), 0..12)) {
        let raw = parts.concat();
        let once = rewrite(&raw);
        prop_assert_eq!(rewrite(&once), once.clone(), "input: {:?}", raw);
    }

    #[test]
    fn unchanged_report_means_unchanged_text(parts in prop::collection::vec(fragment(), 0..12)) {
        let raw = parts.concat();
        let report = remediate(&raw);
        if !report.is_changed() {
            prop_assert_eq!(report.text, raw);
        }
    }

    #[test]
    fn rewrite_never_grows_click_throughs(parts in prop::collection::vec(fragment(), 0..12)) {
        let raw = parts.concat();
        let once = rewrite(&raw);
        prop_assert!(once.matches("<ClickThrough").count() <= raw.matches("<ClickThrough").count());
    }

    #[test]
    fn url_escaping_is_idempotent(url in "[a-z:/?&=;#x0-9.]{0,40}") {
        let once = escape_url_for_xml(&url);
        prop_assert_eq!(escape_url_for_xml(&once), once.clone());
        prop_assert!(once.replace("&amp;", "&").len() <= url.len());
    }
}
