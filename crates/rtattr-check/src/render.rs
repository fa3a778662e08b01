//! Plain-text and JSON views of the capability table.
use rtattr_core::prelude::ValidatedAttributes;
use rtattr_model::{BackendKind, RuntimeKey};
use serde_json::{Value, json};

/// One `<key>\t<mandatory|optional|ignored>` line per declared key.
pub fn outcome_lines(backend: BackendKind, outcome: &ValidatedAttributes) -> Vec<String> {
    let accepted = outcome.accepted.iter().filter_map(|key| {
        key.requirement(backend)
            .map(|req| format!("{key}\t{req}"))
    });
    let ignored = outcome.ignored.iter().map(|key| format!("{key}\tignored"));

    accepted.chain(ignored).collect()
}

/// Whole table, one entry per key in table order.
pub fn matrix() -> Value {
    RuntimeKey::ALL
        .iter()
        .map(|key| {
            json!({
                "key": key,
                "mandatory": key.mandatory(),
                "optional": key.optional(),
            })
        })
        .collect()
}

/// Keys `backend` accepts, with their requirement.
pub fn backend_view(backend: BackendKind) -> Value {
    RuntimeKey::supported_on(backend)
        .filter_map(|key| {
            key.requirement(backend)
                .map(|req| json!({ "key": key, "requirement": req }))
        })
        .collect()
}
