//! Core types for named-slots.
//!
//! These types define the identity and callback vocabulary everything else
//! builds on. Identity is kept separate from the machinery that consumes it:
//! a [`SlotTag`] says nothing about rendering, and a [`Render`] function
//! knows nothing about classification.

use std::fmt;
use std::rc::Rc;

use crate::node::Node;
use crate::props::Props;

// =============================================================================
// Slot Tag
// =============================================================================

/// The immutable identity string used to match a child to a slot.
///
/// A tag is minted exactly once, at component construction, and never
/// changes for the lifetime of the component. It is the *sole* key used for
/// classification: display text, component identity, and props never
/// participate in matching.
///
/// Two sourcing strategies exist:
/// - *declared*: a caller-supplied readable name ([`SlotTag::declared`]),
///   used with the enumerated-names declaration style.
/// - *generated*: a process-unique random string from [`crate::identity::mint`],
///   used with the alias-map style, where the public alias is decoupled from
///   the underlying identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlotTag(String);

impl SlotTag {
    /// Create a tag from a caller-declared readable name.
    pub fn declared(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlotTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SlotTag {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for SlotTag {
    fn from(name: String) -> Self {
        Self(name)
    }
}

// =============================================================================
// Callback Types
// =============================================================================

/// Content render function wrapped by a slot component.
///
/// Using Rc<dyn Fn> instead of Box<dyn Fn> allows the factory to share one
/// content function across component clones and element instances. This is
/// the standard pattern for callbacks that outlive a single call site.
pub type Render = Rc<dyn Fn(&Props) -> Node>;

/// Props equality comparator for re-render skipping.
///
/// Return true to declare the two prop bags equal, letting the memo gate
/// reuse the previous render. The default comparator (used when no custom
/// one is supplied) is plain [`Props`] equality.
pub type PropsAreEqual = Rc<dyn Fn(&Props, &Props) -> bool>;
