use super::common::{Fixture, rules};
use vast_check::{Profile, Severity, check};

#[test]
fn scenario_a_clean_document_is_conformant() {
    let result = check(&Fixture::default().render(), Profile::Vast3).unwrap();
    assert!(result.fatal.is_empty(), "{:#?}", result.fatal);
    assert!(result.advisory.is_empty(), "{:#?}", result.advisory);
}

#[test]
fn scenario_b_bad_duration_format() {
    let xml = Fixture::default().duration("15s").render();
    let result = check(&xml, Profile::Vast3).unwrap();
    assert_eq!(rules(&result.fatal), vec!["duration-format"]);
    assert!(result.fatal[0].message.contains("'15s'"));
    assert_eq!(result.fatal[0].element, "Duration");
}

#[test]
fn scenario_c_retired_attribute_name() {
    for attrs in [r#" isScalable="true""#, r#" scalable="true" isScalable="true""#] {
        let xml = Fixture::default().media_attrs(attrs).render();
        let result = check(&xml, Profile::Vast3).unwrap();
        assert_eq!(rules(&result.fatal), vec!["retired-attribute"], "attrs: {}", attrs);
        assert_eq!(
            result.fatal[0].message,
            "MediaFile id=m1 (Creative id=c1, Ad id=a1): uses retired attribute name \
             'isScalable'; use 'scalable' (boolean)"
        );
    }
}

#[test]
fn scenario_d_click_through_present_but_blank() {
    let xml = Fixture::default()
        .linear_extra("\n<VideoClicks><ClickThrough>   \n </ClickThrough></VideoClicks>")
        .render();
    let result = check(&xml, Profile::Vast3).unwrap();
    assert_eq!(rules(&result.fatal), vec!["click-through-text"]);

    let xml = Fixture::default()
        .linear_extra("\n<VideoClicks><ClickTracking>https://t.example.com/c</ClickTracking></VideoClicks>")
        .render();
    let result = check(&xml, Profile::Vast3).unwrap();
    assert_eq!(result.by_rule("click-through-text").count(), 0);
    assert!(result.is_conformant());
}

#[test]
fn scenario_e_version_mismatch_per_profile() {
    let xml = Fixture::default().version("2.0").render();
    let strict = check(&xml, Profile::Vast3).unwrap();
    assert_eq!(rules(&strict.fatal), vec!["version"]);
    assert_eq!(strict.fatal[0].severity, Severity::Fatal);

    // The lenient profile only flags a document declaring another version.
    let xml = Fixture::default().render();
    let lenient = check(&xml, Profile::Vast2).unwrap();
    assert!(lenient.fatal.is_empty(), "{:#?}", lenient.fatal);
    assert_eq!(rules(&lenient.advisory), vec!["version"]);
}

#[test]
fn scenario_f_empty_creatives_stops_descent() {
    let xml = Fixture::default().creatives("").render();
    for profile in [Profile::Vast2, Profile::Vast3] {
        let result = check(&xml, profile).unwrap();
        let expected_version = usize::from(profile == Profile::Vast2);
        assert_eq!(rules(&result.fatal), vec!["creative-required"], "{}", profile);
        assert_eq!(result.advisory.len(), expected_version, "{}", profile);
        assert!(
            result
                .diagnostics()
                .all(|d| !matches!(d.element.as_str(), "Linear" | "MediaFiles" | "MediaFile"))
        );
    }
}
