use super::common::conformance_dir;
use std::fs;
use std::path::PathBuf;
use vast_check::ParseErrorKind;
use vast_check::parse::parse;

fn fixtures(kind: &str) -> Vec<PathBuf> {
    let dir = conformance_dir().join("parse").join(kind);
    assert!(
        dir.exists(),
        "Conformance fixture directory not found: {:?}",
        dir
    );
    let mut paths: Vec<PathBuf> = fs::read_dir(&dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("xml"))
        .collect();
    paths.sort();
    assert!(!paths.is_empty(), "No parse fixtures found in {:?}", dir);
    paths
}

#[test]
fn parse_valid_fixtures() {
    for path in fixtures("valid") {
        let content = fs::read_to_string(&path).unwrap();
        let result = parse(&content);
        assert!(
            result.is_ok(),
            "Expected valid parse for {:?}, got error: {:?}",
            path.file_name().unwrap(),
            result.err()
        );
        assert_eq!(result.unwrap().root.tag, "VAST");
    }
}

#[test]
fn parse_invalid_fixtures() {
    for path in fixtures("invalid") {
        let content = fs::read_to_string(&path).unwrap();
        let result = parse(&content);
        assert!(
            result.is_err(),
            "Expected parse error for {:?}, but parsed successfully",
            path.file_name().unwrap(),
        );
    }
}

#[test]
fn blank_input_is_empty_kind() {
    let content = fs::read_to_string(conformance_dir().join("parse/invalid/blank.xml")).unwrap();
    assert_eq!(parse(&content).unwrap_err().kind, ParseErrorKind::Empty);
}

#[test]
fn entities_and_cdata_are_decoded() {
    let content = fs::read_to_string(conformance_dir().join("parse/valid/wrapper.xml")).unwrap();
    let doc = parse(&content).unwrap();
    let wrapper = doc.root.first_child("Ad").unwrap().first_child("Wrapper").unwrap();
    assert_eq!(wrapper.first_child("AdSystem").unwrap().text(), "Acme & Partners");
    assert_eq!(
        wrapper.first_child("VASTAdTagURI").unwrap().text(),
        "https://ads.example.com/tag?x=1&y=2"
    );
    assert_eq!(
        wrapper.first_child("Impression").unwrap().text(),
        "https://t.example.com/imp?x=1&y=2"
    );
    let decl = doc.declaration.unwrap();
    assert_eq!(decl.version, "1.0");
    assert_eq!(decl.encoding, None);
}

#[test]
fn empty_element_has_no_text() {
    let content =
        fs::read_to_string(conformance_dir().join("parse/valid/legacy_attributes.xml")).unwrap();
    let doc = parse(&content).unwrap();
    let linear = doc
        .root
        .first_child("Ad")
        .and_then(|ad| ad.first_child("InLine"))
        .and_then(|inline| inline.first_child("Creatives"))
        .and_then(|c| c.first_child("Creative"))
        .and_then(|c| c.first_child("Linear"))
        .unwrap();
    let click_through = linear
        .first_child("VideoClicks")
        .and_then(|v| v.first_child("ClickThrough"))
        .unwrap();
    assert_eq!(click_through.text, None);
    assert!(click_through.has_blank_text());

    let media = linear
        .first_child("MediaFiles")
        .and_then(|m| m.first_child("MediaFile"))
        .unwrap();
    assert_eq!(media.attr("keepAspectRatio"), Some("true"));
    assert_eq!(media.attr("isScalable"), Some("true"));
}
