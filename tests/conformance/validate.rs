use super::common::{conformance_dir, rules};
use vast_check::{Profile, check};

/// A single validation test case from the suite.
#[derive(Debug, serde::Deserialize)]
struct TestCase {
    name: String,
    id: String,
    profile: Profile,
    input: String,
    expected: Expected,
}

#[derive(Debug, serde::Deserialize)]
struct Expected {
    fatal: Vec<String>,
    #[serde(default)]
    advisory: Option<Vec<String>>,
}

fn load_suite() -> Vec<TestCase> {
    let suite_path = conformance_dir().join("suite.yaml");
    assert!(
        suite_path.exists(),
        "Conformance fixture not found: {:?}",
        suite_path
    );
    let content = std::fs::read_to_string(&suite_path).unwrap();
    serde_saphyr::from_str(&content).unwrap()
}

#[test]
fn validate_conformance_suite() {
    let cases = load_suite();

    let mut passed = 0;
    let mut failed = 0;

    for case in &cases {
        let result = match check(&case.input, case.profile) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("  FAIL [{}] {}: parse error: {}", case.id, case.name, e);
                failed += 1;
                continue;
            }
        };

        let mut case_ok = true;

        let fatal = rules(&result.fatal);
        if fatal != case.expected.fatal {
            eprintln!(
                "  FAIL [{}] {}: expected fatal {:?}, got {:?}",
                case.id, case.name, case.expected.fatal, fatal
            );
            for d in &result.fatal {
                eprintln!("    - {}", d);
            }
            case_ok = false;
        }

        if let Some(expected_advisory) = &case.expected.advisory {
            let advisory = rules(&result.advisory);
            if &advisory != expected_advisory {
                eprintln!(
                    "  FAIL [{}] {}: expected advisory {:?}, got {:?}",
                    case.id, case.name, expected_advisory, advisory
                );
                for d in &result.advisory {
                    eprintln!("    - {}", d);
                }
                case_ok = false;
            }
        }

        if result.is_conformant() != case.expected.fatal.is_empty() {
            eprintln!(
                "  FAIL [{}] {}: conformance verdict disagrees with fatal list",
                case.id, case.name
            );
            case_ok = false;
        }

        if case_ok {
            passed += 1;
        } else {
            failed += 1;
        }
    }

    eprintln!(
        "\nValidation conformance: {} passed, {} failed out of {} total",
        passed,
        failed,
        cases.len()
    );

    assert!(passed > 0, "No validation conformance cases were tested");
    assert_eq!(failed, 0, "{} validation conformance tests failed", failed);
}

#[test]
fn suite_ids_are_unique() {
    let cases = load_suite();
    let mut ids: Vec<&str> = cases.iter().map(|c| c.id.as_str()).collect();
    ids.sort_unstable();
    let before = ids.len();
    ids.dedup();
    assert_eq!(before, ids.len(), "duplicate case ids in suite.yaml");
}

#[test]
fn every_diagnostic_message_names_its_element() {
    for case in load_suite() {
        let Ok(result) = check(&case.input, case.profile) else {
            continue;
        };
        for d in result.diagnostics() {
            assert!(
                d.message.starts_with(&d.element),
                "[{}] message does not lead with element <{}>: {}",
                case.id,
                d.element,
                d.message
            );
        }
    }
}
