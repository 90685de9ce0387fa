//! HTML loading
//!
//! Parses raw HTML with `scraper` (html5ever) and converts the result into
//! our own [`Document`] tree. Comments, doctypes and processing instructions
//! are dropped; only elements and text survive.

use scraper::{ElementRef, Html};
use thiserror::Error;

use super::models::*;

/// Deepest element nesting accepted when building a [`Document`]
pub const MAX_DEPTH: usize = 512;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("page nesting exceeds {limit} levels")]
    NestingTooDeep { limit: usize },
}

impl Document {
    /// Parse an HTML page. Malformed markup is repaired by the HTML parser;
    /// the only failure is nesting deeper than [`MAX_DEPTH`].
    pub fn parse(html: &str) -> Result<Document, DomError> {
        Self::parse_with_limit(html, MAX_DEPTH)
    }

    pub fn parse_with_limit(html: &str, limit: usize) -> Result<Document, DomError> {
        let html = Html::parse_document(html);
        let root = convert_element(html.root_element(), 0, limit)?;
        Ok(Document::from_root(root))
    }
}

fn convert_element(source: ElementRef<'_>, depth: usize, limit: usize) -> Result<Element, DomError> {
    if depth > limit {
        return Err(DomError::NestingTooDeep { limit });
    }

    let value = source.value();
    let mut element = value
        .attrs()
        .fold(Element::new(value.name()), |element, (name, attr)| {
            element.with_attr(name, attr)
        });

    for child in source.children() {
        match child.value() {
            scraper::Node::Text(text) => {
                let text: &str = text;
                element.push_child(Node::Text(text.to_owned()));
            }
            scraper::Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    let converted = convert_element(child, depth + 1, limit)?;
                    element.push_child(Node::Element(converted));
                }
            }
            _ => {}
        }
    }

    Ok(element)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_attributes_and_text() {
        let document = Document::parse(
            r#"<html><body><ol data-type="definition-content-list"><li>one</li></ol></body></html>"#,
        )
        .unwrap();

        assert!(document.root().is("html"));
        let list = document.find_first(|e| e.is("ol")).unwrap();
        assert_eq!(list.attr("data-type"), Some("definition-content-list"));
        assert_eq!(list.text(), "one");
    }

    #[test]
    fn test_parse_drops_comments() {
        let document = Document::parse("<p>a<!-- hidden -->b</p>").unwrap();
        let paragraph = document.find_first(|e| e.is("p")).unwrap();
        assert_eq!(paragraph.text(), "ab");
    }

    #[test]
    fn test_parse_empty_input_still_builds_tree() {
        let document = Document::parse("").unwrap();
        assert!(document.root().is("html"));
        assert!(document.find_first(|e| e.is("body")).is_some());
    }

    #[test]
    fn test_nesting_limit() {
        // html(0) > body(1) > div(2) > div(3) > div(4)
        let html = "<div><div><div>too deep</div></div></div>";
        assert!(Document::parse_with_limit(html, 4).is_ok());
        assert!(matches!(
            Document::parse_with_limit(html, 3),
            Err(DomError::NestingTooDeep { limit: 3 })
        ));
    }
}
