//! Template engine implementation

mod blocks;
mod helpers;
mod tokenize;

use crate::config::consts::NOT_FOUND_TEXT;
use crate::template::error::TemplateError;
use std::collections::HashMap;

use blocks::{parse_nodes, Node};
use helpers::{is_truthy, resolve_key, stringify_value};

/// A field value as seen by templates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Inserted verbatim, never escaped
    Str(String),
    /// `false` renders nothing and fails sections
    Bool(bool),
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// Template context holding the fields of one card
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    fields: HashMap<String, Value>,
}

impl TemplateContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field; an existing field with the same key is kept
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.entry(key.into()).or_insert_with(|| value.into());
    }

    /// Look up a field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for TemplateContext {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut context = Self::new();
        for (key, value) in iter {
            context.insert(key, value);
        }
        context
    }
}

/// A compiled logic-less template
///
/// Compile once, render many times. Rendering never fails: a field the
/// context does not define renders as the default value (`[NOT FOUND]`).
#[derive(Debug, Clone)]
pub struct TemplateEngine {
    nodes: Vec<Node>,
    default_value: String,
}

impl TemplateEngine {
    /// Compile a template
    ///
    /// # Errors
    ///
    /// [`TemplateError`] on unclosed tags and unbalanced sections.
    pub fn compile(template: &str) -> Result<Self, TemplateError> {
        Ok(Self {
            nodes: parse_nodes(template)?,
            default_value: NOT_FOUND_TEXT.to_string(),
        })
    }

    /// Replace the text rendered for undefined fields
    pub fn with_default_value(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = default_value.into();
        self
    }

    /// Render with the given context
    pub fn render(&self, context: &TemplateContext) -> String {
        let mut output = String::new();
        let mut scopes = Vec::new();
        self.render_nodes(&self.nodes, context, &mut scopes, &mut output);
        output
    }

    fn render_nodes<'a>(
        &self,
        nodes: &[Node],
        context: &'a TemplateContext,
        scopes: &mut Vec<&'a Value>,
        output: &mut String,
    ) {
        for node in nodes {
            match node {
                Node::Text(text) => output.push_str(text),
                Node::Variable(key) => match resolve_key(context, scopes, key) {
                    Some(value) => output.push_str(stringify_value(value)),
                    None => output.push_str(&self.default_value),
                },
                Node::Section {
                    key,
                    inverted,
                    children,
                } => {
                    let value = resolve_key(context, scopes, key);
                    if is_truthy(value) == *inverted {
                        continue;
                    }
                    match value {
                        Some(value) if !inverted => {
                            scopes.push(value);
                            self.render_nodes(children, context, scopes, output);
                            scopes.pop();
                        }
                        _ => self.render_nodes(children, context, scopes, output),
                    }
                }
            }
        }
    }
}

/// Convenience function to compile and render a template once
pub fn render(template: &str, context: &TemplateContext) -> Result<String, TemplateError> {
    Ok(TemplateEngine::compile(template)?.render(context))
}

#[cfg(test)]
mod tests;
