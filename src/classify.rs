//! Slot Classifier - partition children into a declaration-shaped mapping.
//!
//! Given a parent's raw children collection and its slot declaration, the
//! classifier produces a [`SlotMapping`]: exactly one entry per declared
//! key, in declaration order, each holding either an activated copy of the
//! matching child or nothing. Matching is by identity tag only; everything
//! else (text, empty nodes, elements with unrecognized tags) is silently
//! dropped from consideration.
//!
//! # Declarations and caching
//!
//! A declaration value owns its derived lookup structures, built lazily
//! exactly once: "declaration identity" is the value's own allocation, and
//! reusing the same declaration across render passes reuses the lookup.
//! Declaration contents are private, so the stale-cache hazard (mutating a
//! declaration in place) is unrepresentable; supplying a new declaration
//! value, even a structurally equal one, is intentional invalidation and
//! builds a fresh cache.
//!
//! # Tie-break
//!
//! If several children resolve to the same key, the later one in sequence
//! order wins. Not an error, not a warning.

use std::collections::{HashMap, HashSet};

use once_cell::unsync::OnceCell;
use tracing::trace;

use crate::node::{Element, Node, flatten};
use crate::types::SlotTag;

// =============================================================================
// Declarations
// =============================================================================

/// Enumerated declaration: an ordered set of slot names.
///
/// Duplicate names keep their first occurrence. Used with components made
/// by [`crate::factory::create_slot`], whose tag *is* the declared name.
pub struct SlotNames {
    names: Vec<String>,
    lookup: OnceCell<HashSet<String>>,
}

impl SlotNames {
    /// Declare slots by name, order-preserving.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ordered: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            if !ordered.contains(&name) {
                ordered.push(name);
            }
        }
        Self {
            names: ordered,
            lookup: OnceCell::new(),
        }
    }

    /// Declared names, in declaration order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Name-set lookup, built once for the lifetime of this declaration
    /// value.
    fn lookup(&self) -> &HashSet<String> {
        self.lookup
            .get_or_init(|| self.names.iter().cloned().collect())
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for SlotNames {
    fn from(names: [S; N]) -> Self {
        Self::new(names)
    }
}

/// Alias declaration: ordered public alias → underlying tag pairs.
///
/// Used with components made by [`crate::factory::create_slot_component`],
/// whose generated tag the parent never spells out. The parent declares a
/// readable alias for it instead. Tags should be unique across one declaration; a
/// repeated tag resolves to the LATER alias entry (reverse lookup would
/// otherwise be ambiguous). A repeated alias keeps its first position but
/// takes the later tag.
pub struct SlotAliases {
    aliases: Vec<(String, SlotTag)>,
    reverse: OnceCell<HashMap<SlotTag, String>>,
}

impl SlotAliases {
    /// Declare slots as (alias, tag) pairs, order-preserving.
    pub fn new<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, SlotTag)>,
        S: Into<String>,
    {
        let mut aliases: Vec<(String, SlotTag)> = Vec::new();
        for (alias, tag) in pairs {
            let alias = alias.into();
            match aliases.iter().position(|(existing, _)| *existing == alias) {
                Some(index) => aliases[index].1 = tag,
                None => aliases.push((alias, tag)),
            }
        }
        Self {
            aliases,
            reverse: OnceCell::new(),
        }
    }

    /// Declared (alias, tag) pairs, in declaration order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &SlotTag)> {
        self.aliases.iter().map(|(alias, tag)| (alias.as_str(), tag))
    }

    /// Reverse tag → alias lookup, built once for the lifetime of this
    /// declaration value. Later entries overwrite earlier ones for a
    /// repeated tag.
    fn reverse(&self) -> &HashMap<SlotTag, String> {
        self.reverse.get_or_init(|| {
            let mut map = HashMap::with_capacity(self.aliases.len());
            for (alias, tag) in &self.aliases {
                map.insert(tag.clone(), alias.clone());
            }
            map
        })
    }
}

// =============================================================================
// SlotMapping
// =============================================================================

/// Classification result: exactly one entry per declared key, iteration
/// order fixed by the declaration (never by child order).
///
/// Freshly constructed on every classification pass. Entries are either an
/// activated [`Element`] or empty.
#[derive(Debug)]
pub struct SlotMapping {
    keys: Vec<String>,
    filled: HashMap<String, Element>,
}

impl SlotMapping {
    fn empty_for(keys: Vec<String>) -> Self {
        Self {
            filled: HashMap::new(),
            keys,
        }
    }

    fn fill(&mut self, key: &str, element: Element) {
        if self.filled.insert(key.to_string(), element).is_some() {
            trace!(key, "slot entry overwritten by later child");
        }
    }

    /// Declared keys, in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Number of declared slots.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether nothing was declared.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Whether `key` was declared.
    pub fn is_declared(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    /// The activated element filling `key`, or `None` while the slot is
    /// empty (or the key undeclared).
    pub fn get(&self, key: &str) -> Option<&Element> {
        self.filled.get(key)
    }

    /// Iterate entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Element>)> {
        self.keys.iter().map(|k| (k.as_str(), self.filled.get(k)))
    }

    /// Render the entry at `key`: the activated element's output, or
    /// [`Node::Empty`] for an empty slot. This is what the parent drops
    /// into its own layout.
    pub fn render(&self, key: &str) -> Node {
        match self.filled.get(key) {
            Some(element) => element.render(),
            None => Node::Empty,
        }
    }
}

// =============================================================================
// Classification
// =============================================================================

/// Enumerated variant: classify `children` against declared slot names.
///
/// # Example
///
/// ```
/// use std::rc::Rc;
/// use named_slots::{create_slot, use_slots, Node, Props, Render, SlotNames};
///
/// let header = create_slot("Header");
/// let content: Render = Rc::new(|_: &Props| Node::text("header content"));
/// let component = header.memo(content, None);
///
/// let names = SlotNames::new(["Header", "Body"]);
/// let children = vec![Node::text("loose text"), component.el(Props::new())];
///
/// let slots = use_slots(&children, &names);
/// assert!(slots.get("Header").is_some());
/// assert!(slots.get("Body").is_none());
/// ```
pub fn use_slots(children: &[Node], names: &SlotNames) -> SlotMapping {
    let lookup = names.lookup();
    classify(children, names.names().to_vec(), |tag| {
        lookup.get(tag.as_str()).map(String::as_str)
    })
}

/// Alias variant: classify `children` against alias → tag pairs.
///
/// The public keys of the result are the aliases; matching still runs on
/// the underlying tags.
pub fn use_aliased_slots(children: &[Node], aliases: &SlotAliases) -> SlotMapping {
    let reverse = aliases.reverse();
    let keys: Vec<String> = aliases
        .aliases
        .iter()
        .map(|(alias, _)| alias.clone())
        .collect();
    classify(children, keys, |tag| reverse.get(tag).map(String::as_str))
}

/// Single-pass core shared by both declaration styles.
///
/// `resolve` is the reverse lookup from identity tag to public key.
/// Children that are not elements, and elements whose tag does not resolve,
/// contribute nothing. A match replaces the key's entry with an activated
/// derived copy of the child; later matches overwrite earlier ones.
fn classify<'d>(
    children: &[Node],
    keys: Vec<String>,
    resolve: impl Fn(&SlotTag) -> Option<&'d str>,
) -> SlotMapping {
    let mut mapping = SlotMapping::empty_for(keys);
    let mut matched = 0usize;

    for node in flatten(children) {
        let Node::Element(element) = node else { continue };
        let Some(key) = resolve(element.slot_tag()) else {
            continue;
        };
        mapping.fill(key, element.activate());
        matched += 1;
    }

    trace!(declared = mapping.len(), matched, "classified children");
    mapping
}
