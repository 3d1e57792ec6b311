#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(formula) = actl_syntax::parse(s) {
            // A parsed formula must round-trip through its display form.
            let reparsed = actl_syntax::parse(&formula.to_string()).unwrap();
            assert_eq!(formula, reparsed);
        }
    }
});
