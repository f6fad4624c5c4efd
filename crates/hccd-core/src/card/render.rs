use crate::config::FalseValue;
use crate::data::Row;
use crate::error::Result;
use crate::template::{TemplateContext, TemplateEngine, Value};
use std::fmt;
use std::rc::Rc;

/// One card's finished HTML
///
/// Copies produced by the copies policy share the same buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCard(Rc<str>);

impl RenderedCard {
    pub fn new(html: impl Into<Rc<str>>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RenderedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Card template compiled once per run
#[derive(Debug, Clone)]
pub struct CardRenderer {
    engine: TemplateEngine,
    false_value: FalseValue,
}

impl CardRenderer {
    /// Compile the card fragment
    ///
    /// # Errors
    ///
    /// `TemplateSyntax` when the fragment has unbalanced tags or sections.
    pub fn compile(fragment: &str, false_value: FalseValue) -> Result<Self> {
        Ok(Self {
            engine: TemplateEngine::compile(fragment)?,
            false_value,
        })
    }

    /// Render one row
    ///
    /// With a false-value policy, cells equal to its sentinel are passed to
    /// the template as boolean false; every other cell stays a string.
    pub fn render(&self, row: &Row) -> RenderedCard {
        let context = self.context_for(row);
        RenderedCard::new(self.engine.render(&context))
    }

    fn context_for(&self, row: &Row) -> TemplateContext {
        match self.false_value.sentinel() {
            None => row.iter().map(|(k, v)| (k, Value::from(v))).collect(),
            Some(sentinel) => row
                .iter()
                .map(|(k, v)| {
                    let value = if v == sentinel {
                        Value::Bool(false)
                    } else {
                        Value::from(v)
                    };
                    (k, value)
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[(&str, &str)]) -> Row {
        cells.iter().copied().collect()
    }

    #[test]
    fn test_render_substitutes_cells_verbatim() {
        let renderer =
            CardRenderer::compile("<div>{{name}}: {{text}}</div>", FalseValue::Disabled).unwrap();
        let card = renderer.render(&row(&[("name", "Imp"), ("text", "<i>Flying</i>")]));
        assert_eq!(card.as_str(), "<div>Imp: <i>Flying</i></div>");
    }

    #[test]
    fn test_render_missing_column() {
        let renderer = CardRenderer::compile("{{cost}}", FalseValue::Disabled).unwrap();
        assert_eq!(renderer.render(&row(&[("name", "Imp")])).as_str(), "[NOT FOUND]");
    }

    #[test]
    fn test_disabled_policy_keeps_sentinels_as_text() {
        let template = "[{{a}}]{{#a}}yes{{/a}}{{^a}}no{{/a}}";
        let renderer = CardRenderer::compile(template, FalseValue::Disabled).unwrap();
        assert_eq!(renderer.render(&row(&[("a", "-")])).as_str(), "[-]yes");
        assert_eq!(renderer.render(&row(&[("a", "")])).as_str(), "[]yes");
    }

    #[test]
    fn test_dash_policy_maps_dash_to_false() {
        let template = "[{{a}}]{{#a}}yes{{/a}}{{^a}}no{{/a}}";
        let renderer = CardRenderer::compile(template, FalseValue::Dash).unwrap();
        assert_eq!(renderer.render(&row(&[("a", "-")])).as_str(), "[]no");
        assert_eq!(renderer.render(&row(&[("a", "")])).as_str(), "[]yes");
        assert_eq!(renderer.render(&row(&[("a", "x")])).as_str(), "[x]yes");
    }

    #[test]
    fn test_empty_policy_maps_empty_to_false() {
        let template = "{{#a}}yes{{/a}}{{^a}}no{{/a}}";
        let renderer = CardRenderer::compile(template, FalseValue::Empty).unwrap();
        assert_eq!(renderer.render(&row(&[("a", "")])).as_str(), "no");
        assert_eq!(renderer.render(&row(&[("a", "-")])).as_str(), "yes");
    }

    #[test]
    fn test_policy_is_noop_without_sentinel_cells() {
        let template = "<p>{{a}}|{{b}}</p>{{#b}}!{{/b}}";
        let cells = row(&[("a", "1"), ("b", "two")]);
        let plain = CardRenderer::compile(template, FalseValue::Disabled).unwrap();
        for policy in [FalseValue::Empty, FalseValue::Dash] {
            let mapped = CardRenderer::compile(template, policy).unwrap();
            assert_eq!(mapped.render(&cells), plain.render(&cells));
        }
    }

    #[test]
    fn test_compile_error_is_template_syntax() {
        let err = CardRenderer::compile("{{#a}}", FalseValue::Disabled).unwrap_err();
        assert!(err.to_string().starts_with("TEMPLATE_SYNTAX:"));
    }
}
