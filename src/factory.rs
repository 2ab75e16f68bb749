//! Slot Factory - gated, identity-tagged component wrappers.
//!
//! Wraps a content component so it renders nothing until a classifier
//! activates it, and stamps it with the durable identity tag classification
//! keys on. One entry point per declaration style:
//!
//! - [`create_slot`] (enumerated): the caller declares a readable name and
//!   gets back a [`SlotMaker`], which exposes that name standalone and wraps
//!   content components under it.
//! - [`create_slot_component`] (alias map): wraps a content component
//!   directly under a freshly minted anonymous tag.
//!
//! Either way the output is a [`SlotComponent`]: renders [`Node::Empty`]
//! until activated, forwards props unchanged to the wrapped content once
//! activated, and skips re-renders through a [`RenderMemo`] judged by the
//! supplied comparator (default: shallow props equality).

use std::fmt;
use std::rc::Rc;

use crate::identity;
use crate::memo::RenderMemo;
use crate::node::{Element, Node};
use crate::props::Props;
use crate::types::{PropsAreEqual, Render, SlotTag};

// =============================================================================
// SlotComponent
// =============================================================================

/// A gated, identity-tagged component produced by the factory.
///
/// Cloning is cheap and shares the underlying component (tag, content,
/// memo cache): clones are the *same* component identity, which is what
/// lets every element instance of one component share its render cache.
#[derive(Clone)]
pub struct SlotComponent {
    inner: Rc<Inner>,
}

struct Inner {
    tag: SlotTag,
    content: Render,
    memo: RenderMemo,
}

impl SlotComponent {
    fn new(tag: SlotTag, content: Render, props_equal: Option<PropsAreEqual>) -> Self {
        Self {
            inner: Rc::new(Inner {
                tag,
                content,
                memo: RenderMemo::new(props_equal),
            }),
        }
    }

    /// The identity tag the classifier inspects. Immutable for the lifetime
    /// of the component.
    pub fn tag(&self) -> &SlotTag {
        &self.inner.tag
    }

    /// Build a (non-activated) element instance of this component.
    pub fn el(&self, props: Props) -> Node {
        Node::Element(Element::new(self.clone(), props))
    }

    /// True when `other` shares this component's identity.
    pub fn same_component(&self, other: &SlotComponent) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Render an instance: [`Node::Empty`] unless activated, otherwise the
    /// wrapped content with `props` forwarded unchanged. Routed through the
    /// memo gate, so equal inputs reuse the previous render.
    pub(crate) fn render(&self, props: &Props, activated: bool) -> Node {
        self.inner.memo.render_with(props, activated, || {
            if activated {
                (self.inner.content)(props)
            } else {
                Node::Empty
            }
        })
    }
}

impl fmt::Debug for SlotComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SlotComponent")
            .field(&self.inner.tag.as_str())
            .finish()
    }
}

// =============================================================================
// Enumerated variant
// =============================================================================

/// Maker returned by [`create_slot`].
///
/// Carries the declared slot name, readable standalone via
/// [`name`](Self::name), and wraps content components under it via
/// [`memo`](Self::memo). Every component made from one maker shares the
/// same tag.
pub struct SlotMaker {
    name: String,
}

impl SlotMaker {
    /// The declared slot name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Wrap `content` into a gated component tagged with the declared name.
    ///
    /// `props_equal` overrides the default shallow comparator for re-render
    /// skipping.
    pub fn memo(&self, content: Render, props_equal: Option<PropsAreEqual>) -> SlotComponent {
        SlotComponent::new(SlotTag::declared(&self.name), content, props_equal)
    }
}

/// Enumerated variant: declare a slot by readable name.
///
/// # Example
///
/// ```
/// use std::rc::Rc;
/// use named_slots::{create_slot, Node, Props, Render};
///
/// let header = create_slot("Header");
/// assert_eq!(header.name(), "Header");
///
/// let content: Render = Rc::new(|_: &Props| Node::text("header content"));
/// let component = header.memo(content, None);
/// assert_eq!(component.tag().as_str(), "Header");
/// ```
pub fn create_slot(name: impl Into<String>) -> SlotMaker {
    SlotMaker { name: name.into() }
}

// =============================================================================
// Alias variant
// =============================================================================

/// Alias variant: wrap a content component directly.
///
/// Identity is minted, not declared: the tag is a process-unique random
/// string (see [`crate::identity`]), generated once here and immutable
/// afterwards. Parents refer to the component through an alias declaration
/// mapping their public slot key to [`SlotComponent::tag`].
pub fn create_slot_component(content: Render, props_equal: Option<PropsAreEqual>) -> SlotComponent {
    SlotComponent::new(identity::mint(), content, props_equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::GENERATED_PREFIX;
    use crate::props::PropValue;
    use std::cell::Cell;

    fn passthrough_content() -> Render {
        Rc::new(|props: &Props| match props.get("label") {
            Some(PropValue::Text(s)) => Node::text(s.clone()),
            _ => Node::text("unlabeled"),
        })
    }

    #[test]
    fn test_maker_exposes_declared_name() {
        let maker = create_slot("Footer");
        assert_eq!(maker.name(), "Footer");
    }

    #[test]
    fn test_components_from_one_maker_share_the_tag() {
        let maker = create_slot("Header");
        let a = maker.memo(passthrough_content(), None);
        let b = maker.memo(passthrough_content(), None);

        assert_eq!(a.tag(), b.tag(), "one factory, one tag");
        assert!(!a.same_component(&b), "distinct components, same tag");
    }

    #[test]
    fn test_non_activated_instance_renders_nothing() {
        let component = create_slot("Header").memo(passthrough_content(), None);
        let Node::Element(element) = component.el(Props::new().with("label", "hi")) else {
            panic!("el() must build an element node");
        };

        assert!(
            element.render().is_empty(),
            "gated component must render nothing until activated"
        );
    }

    #[test]
    fn test_activated_instance_renders_content_with_props() {
        let component = create_slot("Header").memo(passthrough_content(), None);
        let Node::Element(element) = component.el(Props::new().with("label", "hi")) else {
            panic!("el() must build an element node");
        };

        match element.activate().render() {
            Node::Text(s) => assert_eq!(s, "hi", "props must be forwarded unchanged"),
            other => panic!("expected rendered content, got {other:?}"),
        }
    }

    #[test]
    fn test_activation_never_reaches_forwarded_props() {
        let seen = Rc::new(Cell::new(0usize));
        let seen_clone = seen.clone();
        let content: Render = Rc::new(move |props: &Props| {
            seen_clone.set(props.len());
            Node::Empty
        });

        let component = create_slot("Header").memo(content, None);
        let Node::Element(element) = component.el(Props::new().with("only", 1)) else {
            panic!("el() must build an element node");
        };
        element.activate().render();

        assert_eq!(seen.get(), 1, "content must see exactly the caller's props");
    }

    #[test]
    fn test_instances_of_one_component_share_the_memo() {
        let runs = Rc::new(Cell::new(0));
        let runs_clone = runs.clone();
        let content: Render = Rc::new(move |_: &Props| {
            runs_clone.set(runs_clone.get() + 1);
            Node::text("out")
        });

        let component = create_slot("Header").memo(content, None);
        let props = Props::new().with("k", 1);

        let Node::Element(first) = component.el(props.clone()) else {
            panic!("el() must build an element node");
        };
        let Node::Element(second) = component.el(props) else {
            panic!("el() must build an element node");
        };

        first.activate().render();
        second.activate().render();

        assert_eq!(runs.get(), 1, "equal props across instances reuse the render");
    }

    #[test]
    fn test_alias_variant_mints_prefixed_unique_tags() {
        let a = create_slot_component(passthrough_content(), None);
        let b = create_slot_component(passthrough_content(), None);

        assert!(a.tag().as_str().starts_with(GENERATED_PREFIX));
        assert!(b.tag().as_str().starts_with(GENERATED_PREFIX));
        assert_ne!(a.tag(), b.tag(), "each factory call mints its own tag");
    }

    #[test]
    fn test_custom_comparator_controls_skipping() {
        let runs = Rc::new(Cell::new(0));
        let runs_clone = runs.clone();
        let content: Render = Rc::new(move |_: &Props| {
            runs_clone.set(runs_clone.get() + 1);
            Node::text("out")
        });
        let by_id: PropsAreEqual = Rc::new(|a, b| a.get("id") == b.get("id"));

        let component = create_slot("Header").memo(content, Some(by_id));

        let Node::Element(first) = component.el(Props::new().with("id", 1).with("noise", 1))
        else {
            panic!("el() must build an element node");
        };
        let Node::Element(second) = component.el(Props::new().with("id", 1).with("noise", 2))
        else {
            panic!("el() must build an element node");
        };

        first.activate().render();
        second.activate().render();

        assert_eq!(runs.get(), 1, "comparator said equal, content must not re-run");
    }
}
