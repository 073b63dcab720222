#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);
    let once = vast_check::rewrite(&s);
    assert_eq!(vast_check::rewrite(&once), once);

    let escaped = vast_check::escape_url_for_xml(&s);
    assert_eq!(vast_check::escape_url_for_xml(&escaped), escaped);
});
