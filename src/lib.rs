//! # named-slots
//!
//! Named slot classification and gating for declarative UI component trees.
//!
//! A parent component that lays out named regions ("Header", "Footer", ...)
//! accepts an arbitrary, unordered collection of children and re-projects
//! the ones that claim a region into its own layout. Children claim a region
//! through an immutable identity tag stamped on them by the slot factory;
//! the parent partitions its children with the classifier and renders each
//! region wherever it wants. A classified child renders nothing until the
//! classifier activates it.
//!
//! ## Architecture
//!
//! Classification is a single render-synchronous pass:
//!
//! ```text
//! children → flatten → tag → key lookup (cached per declaration) → SlotMapping
//!                                 matched children re-emitted activated
//! ```
//!
//! Two declaration styles drive one classification core:
//!
//! - *enumerated*: slots are declared by readable name ([`create_slot`] +
//!   [`use_slots`]). The component's tag IS the declared name.
//! - *alias map*: slots are anonymous generated identities behind public
//!   aliases ([`create_slot_component`] + [`use_aliased_slots`]). The
//!   readable alias is decoupled from the underlying tag.
//!
//! ## Modules
//!
//! - [`types`] - Core types (SlotTag, callback aliases)
//! - [`identity`] - Generated tag minting
//! - [`props`] - Props model and shallow comparison
//! - [`node`] - Child node model and children normalization
//! - [`memo`] - Re-render skipping for gated components
//! - [`factory`] - Slot Factory (gated, tagged component wrappers)
//! - [`classify`] - Slot Classifier (declaration → mapping)
//!
//! ## Example
//!
//! ```
//! use std::rc::Rc;
//! use named_slots::{create_slot, use_slots, Node, Props, Render, SlotNames};
//!
//! // The parent's slots, declared once.
//! let header = create_slot("Header");
//! let footer = create_slot("Footer");
//!
//! let header_content: Render = Rc::new(|_: &Props| Node::text("header"));
//! let footer_content: Render = Rc::new(|_: &Props| Node::text("footer"));
//! let header_component = header.memo(header_content, None);
//! let footer_component = footer.memo(footer_content, None);
//!
//! // Caller order does not matter: classification is by tag.
//! let children = vec![
//!     Node::text("ignored by classification"),
//!     footer_component.el(Props::new()),
//!     header_component.el(Props::new().with("title", "hello")),
//! ];
//!
//! let names = SlotNames::new(["Header", "Footer"]);
//! let slots = use_slots(&children, &names);
//!
//! assert!(slots.get("Header").is_some());
//! assert!(matches!(slots.render("Footer"), Node::Text(_)));
//! ```

pub mod classify;
pub mod factory;
pub mod identity;
pub mod memo;
pub mod node;
pub mod props;
pub mod types;

// Re-export commonly used items
pub use types::{PropsAreEqual, Render, SlotTag};

pub use props::{PropValue, Props, shallow_equal};

pub use node::{Element, Node, flatten};

pub use memo::RenderMemo;

pub use factory::{SlotComponent, SlotMaker, create_slot, create_slot_component};

pub use classify::{SlotAliases, SlotMapping, SlotNames, use_aliased_slots, use_slots};
