// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    lowercase = { "enabled", ArchivalState::Enabled },
    uppercase = { "DISABLED", ArchivalState::Disabled },
    mixed = { "Unspecified", ArchivalState::Unspecified },
)]
fn archival_state_from_word_is_case_insensitive(word: &str, expected: ArchivalState) {
    assert_eq!(ArchivalState::from_word(word).unwrap(), expected);
}

#[parameterized(
    unknown = { "archived" },
    empty = { "" },
    padded = { " enabled" },
)]
fn archival_state_rejects_unknown_words(word: &str) {
    let err = ArchivalState::from_word(word).unwrap_err();
    assert!(matches!(
        err,
        SpecError::InvalidEnum {
            field: "archival state",
            ..
        }
    ));
}

#[test]
fn archival_words_round_trip() {
    for state in [
        ArchivalState::Unspecified,
        ArchivalState::Enabled,
        ArchivalState::Disabled,
    ] {
        assert_eq!(ArchivalState::from_word(state.as_word()).unwrap(), state);
    }
}

#[test]
fn named_spec_carries_stock_defaults() {
    let spec = NamespaceSpec::named("accounting");

    assert_eq!(spec.name, "accounting");
    assert_eq!(spec.retention, "365d");
    assert_eq!(spec.history_archival_state, "disabled");
    assert_eq!(spec.visibility_archival_state, "disabled");
    assert!(!spec.is_global);
    assert!(spec.data.is_empty());
}
