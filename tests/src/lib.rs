//! Shared helpers for the workspace integration tests.

use proptest::prelude::*;

/// Input made only of characters the tokenizer accepts
pub fn well_formed_alphabet() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        "[0-9]{1,6}",
        "[ \t\n]{1,2}",
        Just("+".to_string()),
        Just("-".to_string()),
        Just("*".to_string()),
        Just("/".to_string()),
        Just("(".to_string()),
        Just(")".to_string()),
        Just("true ".to_string()),
        Just("false ".to_string()),
    ];
    prop::collection::vec(piece, 0..32).prop_map(|parts| parts.concat())
}
