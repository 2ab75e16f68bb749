//! Re-render skipping - the memoization gate in front of wrapped content.
//!
//! A gated component re-renders only when its own inputs change, as judged
//! by an equality comparator. This module makes that host-framework
//! primitive explicit as a single-entry cache: the last accepted
//! `(props, activated)` pair and the node it produced.
//!
//! The comparator judges props only. The activation flag is always compared
//! exactly: a gate that ignored activation changes would never open.

use std::cell::RefCell;

use crate::node::Node;
use crate::props::Props;
use crate::types::PropsAreEqual;

/// Single-entry render cache parameterized by an equality comparator.
///
/// [`render_with`](Self::render_with) returns the cached node without
/// running content when the comparator judges the incoming props equal to
/// the previously accepted ones (and activation is unchanged). With no
/// custom comparator, plain [`Props`] equality is used.
pub struct RenderMemo {
    props_equal: Option<PropsAreEqual>,
    last: RefCell<Option<MemoEntry>>,
}

struct MemoEntry {
    props: Props,
    activated: bool,
    rendered: Node,
}

impl RenderMemo {
    /// Create a cache judging props with `props_equal`, or shallow equality
    /// when `None`.
    pub fn new(props_equal: Option<PropsAreEqual>) -> Self {
        Self {
            props_equal,
            last: RefCell::new(None),
        }
    }

    fn accepts(&self, prev: &MemoEntry, props: &Props, activated: bool) -> bool {
        if prev.activated != activated {
            return false;
        }
        match &self.props_equal {
            Some(equal) => equal(&prev.props, props),
            None => prev.props == *props,
        }
    }

    /// Render through the cache.
    ///
    /// `content` runs only on a miss; the borrow of the cache ends before
    /// content executes, so content is free to render other memoized
    /// components (including instances of the same one).
    pub fn render_with(
        &self,
        props: &Props,
        activated: bool,
        content: impl FnOnce() -> Node,
    ) -> Node {
        {
            let last = self.last.borrow();
            if let Some(prev) = last.as_ref() {
                if self.accepts(prev, props, activated) {
                    return prev.rendered.clone();
                }
            }
        }

        let rendered = content();
        *self.last.borrow_mut() = Some(MemoEntry {
            props: props.clone(),
            activated,
            rendered: rendered.clone(),
        });
        rendered
    }
}
