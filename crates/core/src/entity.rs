//! Entity trait: identity that survives field edits.

/// Anything stored in a report collection and addressed by id.
pub trait Entity {
    /// Identifier type, unique within a collection.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
