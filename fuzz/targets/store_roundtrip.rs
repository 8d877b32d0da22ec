#![no_main]

use std::collections::HashMap;

use libfuzzer_sys::fuzz_target;
use propfile::Properties;

/// Unescaped spaces at either end are trimmed on load.
fn representable(s: &str) -> bool {
    !s.starts_with(' ') && !s.ends_with(' ')
}

fuzz_target!(|entries: HashMap<String, String>| {
    let props: Properties = entries
        .into_iter()
        .filter(|(k, v)| {
            !k.is_empty() && !k.starts_with('#') && representable(k) && representable(v)
        })
        .collect();

    let text = props.to_text();
    let mut back = Properties::new();
    back.load_str(&text).expect("stored text must load");
    assert_eq!(back, props);
});
