//! Child node model and children normalization.
//!
//! A child is a closed tagged union: either an [`Element`] (an instance of a
//! slot-gated component, carrying the identity tag the classifier inspects)
//! or content the slot protocol treats as opaque: text, an empty node, or a
//! fragment grouping other children. Classification never inspects arbitrary
//! runtime fields; the only capability check is the `Node::Element` match.

use std::fmt;

use crate::factory::SlotComponent;
use crate::props::Props;
use crate::types::SlotTag;

// =============================================================================
// Node
// =============================================================================

/// A child node in a parent's children collection.
#[derive(Debug, Clone)]
pub enum Node {
    /// Nothing. Dropped by [`flatten`]; also what a gated component renders
    /// while not activated.
    Empty,
    /// Opaque text run. Never classified.
    Text(String),
    /// Grouping wrapper. Expanded in place by [`flatten`], preserving the
    /// sequence order of its contents.
    Fragment(Vec<Node>),
    /// Instance of a slot-gated component.
    Element(Element),
}

impl Node {
    /// Create a text node.
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    /// Whether this node is [`Node::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, Node::Empty)
    }

    /// View this node as an element, if it is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }
}

// =============================================================================
// Element
// =============================================================================

/// An instance of a [`SlotComponent`]: the component, its props, and the
/// activation flag.
///
/// Elements are value-cloneable; clones share the underlying component
/// identity. The activation flag is an explicit field, not a prop, so it
/// never appears in the props forwarded to wrapped content.
#[derive(Clone)]
pub struct Element {
    component: SlotComponent,
    props: Props,
    activated: bool,
}

impl Element {
    pub(crate) fn new(component: SlotComponent, props: Props) -> Self {
        Self {
            component,
            props,
            activated: false,
        }
    }

    /// The identity tag this element classifies under.
    pub fn slot_tag(&self) -> &SlotTag {
        self.component.tag()
    }

    /// The instance props.
    pub fn props(&self) -> &Props {
        &self.props
    }

    /// Whether this instance has been activated by a classifier.
    pub fn is_activated(&self) -> bool {
        self.activated
    }

    /// True when `other` is an instance of the same underlying component.
    pub fn same_component(&self, other: &Element) -> bool {
        self.component.same_component(&other.component)
    }

    /// Derived copy with the activation flag set: same component identity,
    /// same props. The classifier stores only this copy in its result.
    pub fn activate(&self) -> Element {
        Element {
            component: self.component.clone(),
            props: self.props.clone(),
            activated: true,
        }
    }

    /// Derived copy with overridden props, keeping component identity and
    /// the activation flag.
    pub fn with_props(&self, props: Props) -> Element {
        Element {
            component: self.component.clone(),
            props,
            activated: self.activated,
        }
    }

    /// Render this instance through the component's memo gate.
    ///
    /// Renders [`Node::Empty`] unless activated; an activated instance
    /// renders the wrapped content with the instance props forwarded
    /// unchanged.
    pub fn render(&self) -> Node {
        self.component.render(&self.props, self.activated)
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.slot_tag().as_str())
            .field("activated", &self.activated)
            .field("props", &self.props)
            .finish()
    }
}

// =============================================================================
// Children Normalization
// =============================================================================

/// Flatten a children collection into a linear sequence of individual nodes.
///
/// Fragments are expanded recursively and empty nodes dropped; everything
/// else is kept, in sequence order. This is the normalization step the
/// classifier runs before its single matching pass.
pub fn flatten(children: &[Node]) -> Vec<Node> {
    let mut out = Vec::with_capacity(children.len());
    flatten_into(children, &mut out);
    out
}

fn flatten_into(children: &[Node], out: &mut Vec<Node>) {
    for child in children {
        match child {
            Node::Empty => {}
            Node::Fragment(nested) => flatten_into(nested, out),
            other => out.push(other.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::create_slot;
    use crate::types::Render;
    use std::rc::Rc;

    fn test_component(name: &str) -> SlotComponent {
        let content: Render = Rc::new(|_: &Props| Node::text("content"));
        create_slot(name).memo(content, None)
    }

    #[test]
    fn test_flatten_expands_fragments_in_order() {
        let children = vec![
            Node::text("a"),
            Node::Fragment(vec![
                Node::text("b"),
                Node::Fragment(vec![Node::text("c")]),
            ]),
            Node::text("d"),
        ];

        let flat = flatten(&children);
        let texts: Vec<&str> = flat
            .iter()
            .map(|n| match n {
                Node::Text(s) => s.as_str(),
                other => panic!("unexpected node {other:?}"),
            })
            .collect();

        assert_eq!(texts, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_flatten_drops_empty_nodes() {
        let children = vec![
            Node::Empty,
            Node::text("kept"),
            Node::Fragment(vec![Node::Empty]),
        ];

        let flat = flatten(&children);
        assert_eq!(flat.len(), 1);
        assert!(matches!(&flat[0], Node::Text(s) if s == "kept"));
    }

    #[test]
    fn test_flatten_empty_fragment_contributes_nothing() {
        let flat = flatten(&[Node::Fragment(vec![])]);
        assert!(flat.is_empty());
    }

    #[test]
    fn test_activate_is_a_derived_copy() {
        let component = test_component("Header");
        let Node::Element(original) = component.el(Props::new().with("title", "t")) else {
            panic!("el() must build an element node");
        };

        let activated = original.activate();

        assert!(!original.is_activated(), "original must stay untouched");
        assert!(activated.is_activated());
        assert_eq!(activated.props(), original.props(), "props carry over unchanged");
        assert!(activated.same_component(&original), "identity carries over");
    }

    #[test]
    fn test_with_props_keeps_identity_and_flag() {
        let component = test_component("Header");
        let Node::Element(element) = component.el(Props::new()) else {
            panic!("el() must build an element node");
        };

        let replaced = element.activate().with_props(Props::new().with("x", 1));

        assert!(replaced.is_activated());
        assert!(replaced.same_component(&element));
        assert_eq!(replaced.props(), &Props::new().with("x", 1));
    }

    #[test]
    fn test_as_element_only_matches_elements() {
        let component = test_component("Header");
        let element_node = component.el(Props::new());

        assert!(element_node.as_element().is_some());
        assert!(Node::text("t").as_element().is_none());
        assert!(Node::Empty.as_element().is_none());
    }
}
