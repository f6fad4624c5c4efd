//! Block matching - turns the flat token stream into a section tree

use super::tokenize::{TokenKind, TokenStream};
use crate::template::error::TemplateError;

/// Compiled template node
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
    /// Literal text copied to the output
    Text(String),
    /// Field interpolation
    Variable(String),
    /// `{{#key}}...{{/key}}` or, when inverted, `{{^key}}...{{/key}}`
    Section {
        key: String,
        inverted: bool,
        children: Vec<Node>,
    },
}

/// An open section waiting for its closing tag
struct OpenSection {
    key: String,
    inverted: bool,
    line: usize,
    children: Vec<Node>,
}

/// Node list that new nodes are appended to: the innermost open section, or the root
fn current<'a>(root: &'a mut Vec<Node>, open: &'a mut [OpenSection]) -> &'a mut Vec<Node> {
    match open.last_mut() {
        Some(section) => &mut section.children,
        None => root,
    }
}

fn push_text(nodes: &mut Vec<Node>, text: &str) {
    if !text.is_empty() {
        nodes.push(Node::Text(text.to_string()));
    }
}

/// Parse a template into a node tree
///
/// Sections nest; each `{{/key}}` must close the innermost open section with
/// the same key.
///
/// # Performance
///
/// Single pass over the TokenStream.
pub(crate) fn parse_nodes(template: &str) -> Result<Vec<Node>, TemplateError> {
    let mut root = Vec::new();
    let mut open: Vec<OpenSection> = Vec::new();
    let mut cursor = 0;

    let mut tokens = TokenStream::new(template);
    for token in tokens.by_ref() {
        push_text(current(&mut root, &mut open), &template[cursor..token.start]);
        cursor = token.end();

        match token.kind {
            TokenKind::Variable { key } => {
                current(&mut root, &mut open).push(Node::Variable(key));
            }
            TokenKind::Comment => {}
            TokenKind::Malformed { message } => {
                return Err(TemplateError::MalformedSyntax {
                    message,
                    line: token.line,
                });
            }
            TokenKind::SectionStart { key, inverted } => {
                open.push(OpenSection {
                    key,
                    inverted,
                    line: token.line,
                    children: Vec::new(),
                });
            }
            TokenKind::SectionEnd { key } => {
                let section = open.pop().ok_or_else(|| TemplateError::UnexpectedClose {
                    key: key.clone(),
                    line: token.line,
                })?;

                if section.key != key {
                    return Err(TemplateError::MismatchedClose {
                        expected: section.key,
                        found: key,
                        line: token.line,
                    });
                }

                current(&mut root, &mut open).push(Node::Section {
                    key: section.key,
                    inverted: section.inverted,
                    children: section.children,
                });
            }
        }
    }

    if let Some(line) = tokens.unclosed_tag_line() {
        return Err(TemplateError::MalformedSyntax {
            message: "Unclosed tag: '{{' without matching '}}'".to_string(),
            line,
        });
    }

    if let Some(section) = open.pop() {
        return Err(TemplateError::UnclosedSection {
            key: section.key,
            line: section.line,
        });
    }

    push_text(&mut root, &template[cursor..]);
    Ok(root)
}
