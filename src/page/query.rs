//! Tree traversal operations
//!
//! Read-only walks over the tree: descendants matching a predicate (and the
//! first of them), and the direct children matching one.

use super::models::*;

/// Pre-order walk over descendant elements matching a predicate.
/// Matched elements are still descended into.
pub struct Descendants<'a, P> {
    stack: Vec<std::slice::Iter<'a, Node>>,
    predicate: P,
}

impl<'a, P> Iterator for Descendants<'a, P>
where
    P: Fn(&Element) -> bool,
{
    type Item = &'a Element;

    fn next(&mut self) -> Option<&'a Element> {
        while let Some(iter) = self.stack.last_mut() {
            match iter.next() {
                Some(Node::Element(element)) => {
                    self.stack.push(element.children().iter());
                    if (self.predicate)(element) {
                        return Some(element);
                    }
                }
                Some(Node::Text(_)) => {}
                None => {
                    self.stack.pop();
                }
            }
        }

        None
    }
}

impl Element {
    /// Every descendant element matching `predicate`, in document order.
    /// The element itself is not considered.
    pub fn descendants_matching<P>(&self, predicate: P) -> Descendants<'_, P>
    where
        P: Fn(&Element) -> bool,
    {
        Descendants {
            stack: vec![self.children().iter()],
            predicate,
        }
    }

    /// First descendant element (depth-first, pre-order) matching `predicate`.
    /// The element itself is not considered.
    pub fn find_first<P>(&self, predicate: P) -> Option<&Element>
    where
        P: Fn(&Element) -> bool,
    {
        self.descendants_matching(predicate).next()
    }

    /// Direct element children matching `predicate`, in document order
    pub fn children_matching<'a, P>(&'a self, predicate: P) -> impl Iterator<Item = &'a Element>
    where
        P: Fn(&Element) -> bool + 'a,
    {
        self.children().iter().filter_map(move |child| match child {
            Node::Element(element) if predicate(element) => Some(element),
            _ => None,
        })
    }
}

impl Document {
    /// Like [`Element::find_first`], but the root itself is a candidate
    pub fn find_first<P>(&self, predicate: P) -> Option<&Element>
    where
        P: Fn(&Element) -> bool,
    {
        if predicate(self.root()) {
            return Some(self.root());
        }
        self.root().find_first(predicate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Element {
        Element::new("body")
            .with_child(
                Element::new("div")
                    .with_attr("id", "outer")
                    .with_child(Element::new("p").with_attr("id", "nested").with_text("deep")),
            )
            .with_text("loose text")
            .with_child(Element::new("p").with_attr("id", "direct").with_text("shallow"))
    }

    #[test]
    fn test_find_first_is_preorder() {
        let body = sample();
        let first_p = body.find_first(|e| e.is("p")).unwrap();
        assert_eq!(first_p.attr("id"), Some("nested"));
    }

    #[test]
    fn test_find_first_skips_self() {
        let body = sample();
        assert!(body.find_first(|e| e.is("body")).is_none());

        let document = Document::from_root(body);
        assert_eq!(document.find_first(|e| e.is("body")).unwrap().tag(), "body");
    }

    #[test]
    fn test_children_matching_only_direct() {
        let body = sample();
        let ids: Vec<_> = body
            .children_matching(|e| e.is("p"))
            .filter_map(|e| e.attr("id"))
            .collect();
        assert_eq!(ids, vec!["direct"]);
    }

    #[test]
    fn test_descendants_matching_includes_nested_matches() {
        let list = Element::new("ol").with_child(
            Element::new("li")
                .with_text("top")
                .with_child(Element::new("ol").with_child(Element::new("li").with_text("sub"))),
        );
        let texts: Vec<_> = list
            .descendants_matching(|e| e.is("li"))
            .map(Element::text)
            .collect();
        assert_eq!(texts, vec!["topsub", "sub"]);
    }

    #[test]
    fn test_text_concatenates_in_order() {
        assert_eq!(sample().text(), "deeploose textshallow");
    }
}
