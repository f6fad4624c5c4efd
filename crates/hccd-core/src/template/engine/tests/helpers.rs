//! Shared test helpers for template engine tests

use crate::template::engine::{TemplateContext, Value};

/// A card context with plain string fields
pub(super) fn card_context() -> TemplateContext {
    [
        ("name", Value::from("Goblin")),
        ("cost", Value::from("2")),
        ("text", Value::from("<b>Haste</b>")),
        ("empty", Value::from("")),
    ]
    .into_iter()
    .collect()
}

/// A card context where `rare` and `flavor` were mapped to false
pub(super) fn context_with_false() -> TemplateContext {
    [
        ("name", Value::from("Dragon")),
        ("rare", Value::Bool(false)),
        ("flavor", Value::Bool(false)),
        ("epic", Value::Bool(true)),
    ]
    .into_iter()
    .collect()
}
