#![no_main]

use std::collections::HashMap;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use propfile::{EscapePolicy, Parser};

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    data: Vec<u8>,
    strict: bool,
    chunk: u8,
}

fuzz_target!(|input: FuzzInput| {
    let policy = if input.strict {
        EscapePolicy::Strict
    } else {
        EscapePolicy::Extended
    };
    let chunk = usize::from(input.chunk).max(1);

    let mut whole: HashMap<String, String> = HashMap::new();
    let mut parser = Parser::new(policy);
    let whole_result = parser
        .feed(&input.data, &mut whole)
        .and_then(|()| parser.finish(&mut whole));

    // Splitting the input must not change the outcome.
    let mut split: HashMap<String, String> = HashMap::new();
    let mut parser = Parser::new(policy);
    let mut split_result = Ok(());
    for part in input.data.chunks(chunk) {
        split_result = parser.feed(part, &mut split);
        if split_result.is_err() {
            break;
        }
    }
    let split_result = split_result.and_then(|()| parser.finish(&mut split));

    assert_eq!(whole_result, split_result);
    assert_eq!(whole, split);
});
