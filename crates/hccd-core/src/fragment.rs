//! Card fragment extraction from the template document
//!
//! The template file is an ordinary HTML page the user can open in a browser
//! next to its stylesheet. Only the first element carrying the `card` class
//! is used as the per-card template.

use crate::error::{HccdError, Result};
use html5ever::parse_document;
use html5ever::serialize::{serialize, SerializeOpts, TraversalScope};
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom, SerializableHandle};
use std::fs;
use std::path::Path;

const CARD_CLASS: &str = "card";

/// Outer HTML of the first element whose class list contains `card`
///
/// Elements are visited in document order. Returns `None` when no element
/// matches.
pub fn extract_card_fragment(html: &str) -> Result<Option<String>> {
    let dom = parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut html.as_bytes())?;

    let Some(card) = find_card(&dom.document) else {
        return Ok(None);
    };

    let mut out = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };
    serialize(&mut out, &SerializableHandle::from(card), opts)?;

    Ok(Some(String::from_utf8_lossy(&out).into_owned()))
}

/// Read a template file and extract its card fragment
///
/// # Errors
///
/// `MissingInput` when the file does not exist, `CardFragmentNotFound` when
/// it has no `.card` element.
pub fn read_card_fragment(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(HccdError::MissingInput {
            path: path.to_path_buf(),
        });
    }

    let html = fs::read_to_string(path)?;
    extract_card_fragment(&html)?.ok_or_else(|| HccdError::CardFragmentNotFound {
        path: path.to_path_buf(),
    })
}

fn find_card(handle: &Handle) -> Option<Handle> {
    if let NodeData::Element { attrs, .. } = &handle.data {
        let is_card = attrs.borrow().iter().any(|attr| {
            attr.name.local.as_ref() == "class"
                && attr.value.split_ascii_whitespace().any(|c| c == CARD_CLASS)
        });
        if is_card {
            return Some(handle.clone());
        }
    }

    handle.children.borrow().iter().find_map(find_card)
}
