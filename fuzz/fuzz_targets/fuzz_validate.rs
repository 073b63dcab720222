#![no_main]

use libfuzzer_sys::fuzz_target;
use vast_check::Profile;

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);
    if let Ok(doc) = vast_check::parse(&s) {
        for profile in [Profile::Vast2, Profile::Vast3] {
            let result = vast_check::validate(&doc, profile);
            assert_eq!(result.is_conformant(), result.fatal.is_empty());
        }
    }
});
