//! The read capability consumed by high-level components.
//!
//! This trait is the inversion point of the crate: anything that reports on
//! relationships depends on [`RelationshipQuery`], never on the concrete
//! [`RelationshipStore`](crate::relations::store::RelationshipStore).

use crate::relations::types::Person;

/// Read-only access to parent/child relationships.
///
/// Exposes exactly one operation so consumers learn nothing about how the
/// facts are held. Implementations must return a fresh iterator on every
/// call — results are lazy and restartable, with no cached state.
pub trait RelationshipQuery {
    /// All recorded children of the person with the given name, in the order
    /// the facts were added. An unknown name yields an empty iterator.
    fn find_all_children_of<'a>(
        &'a self,
        name: &'a str,
    ) -> Box<dyn Iterator<Item = &'a Person> + 'a>;
}
