//! Helper functions for template rendering

use super::{TemplateContext, Value};

/// Resolve a key against the section scopes, innermost first, then the context
///
/// `.` names the value of the innermost enclosing section.
pub(crate) fn resolve_key<'a>(
    context: &'a TemplateContext,
    scopes: &[&'a Value],
    key: &str,
) -> Option<&'a Value> {
    if key == "." {
        return scopes.last().copied();
    }
    context.get(key)
}

/// Section truthiness: any string (even empty) and `true` are truthy;
/// `false` and absent fields are falsy
pub(crate) fn is_truthy(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Str(_)) | Some(Value::Bool(true)))
}

/// Stringify a value for template output; `false` renders as nothing
pub(crate) fn stringify_value(value: &Value) -> &str {
    match value {
        Value::Str(s) => s,
        Value::Bool(true) => "true",
        Value::Bool(false) => "",
    }
}
