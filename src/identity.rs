//! Slot identity generation.
//!
//! Generated tags back the alias-map declaration style: the public alias a
//! parent declares is decoupled from the underlying identity, so the
//! identity only has to be unique, never readable. Minting happens once, at
//! component construction, and the result is stored as an immutable field of
//! the constructed component. There is no hidden process-wide counter, and
//! mint order is irrelevant to the value produced.

use uuid::Uuid;

use crate::types::SlotTag;

/// Prefix carried by every generated tag, so generated identities are
/// recognizable in logs and debug output.
pub const GENERATED_PREFIX: &str = "slot-";

/// Mint a process-unique slot tag.
///
/// Collision resistance comes from UUIDv4's random bits; two mints never
/// observe each other.
pub fn mint() -> SlotTag {
    let tag = SlotTag::from(format!("{}{}", GENERATED_PREFIX, Uuid::new_v4().simple()));
    tracing::trace!(tag = %tag, "minted slot tag");
    tag
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minted_tags_are_unique() {
        let a = mint();
        let b = mint();
        assert_ne!(a, b, "two mints must never produce the same tag");
    }

    #[test]
    fn test_minted_tags_carry_prefix() {
        let tag = mint();
        assert!(
            tag.as_str().starts_with(GENERATED_PREFIX),
            "generated tag {tag} should start with {GENERATED_PREFIX:?}"
        );
    }

    #[test]
    fn test_minted_tag_has_random_body() {
        let tag = mint();
        let body = &tag.as_str()[GENERATED_PREFIX.len()..];
        assert_eq!(body.len(), 32, "uuid simple form is 32 hex chars");
        assert!(body.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
