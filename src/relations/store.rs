//! The low-level fact store.
//!
//! Holds an append-only sequence of [`RelationshipFact`]s. Mutation goes
//! through the paired-insert methods only; the fact list itself is never
//! handed out, so the symmetric-pair invariant cannot be broken from outside.

use tracing::debug;

use crate::relations::query::RelationshipQuery;
use crate::relations::types::{Person, RelationKind, RelationshipFact};

/// In-memory store of relationship facts.
///
/// Invariant: every `(A, Parent, B)` fact has a paired `(B, Child, A)` fact,
/// and every sibling fact has its mirror. Facts are only appended, never
/// removed, and duplicates are kept as-is.
#[derive(Debug, Default)]
pub struct RelationshipStore {
    facts: Vec<RelationshipFact>,
}

impl RelationshipStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `parent` is a parent of `child`.
    ///
    /// Appends the pair `(parent, Parent, child)` and `(child, Child, parent)`.
    /// Storing the same pair twice records it twice.
    pub fn add_parent_and_child(&mut self, parent: &Person, child: &Person) {
        self.facts
            .push(RelationshipFact::new(parent, RelationKind::Parent, child));
        self.facts
            .push(RelationshipFact::new(child, RelationKind::Child, parent));
        debug!(parent = %parent.name, child = %child.name, "stored parent/child fact pair");
    }

    /// Record that `a` and `b` are siblings, symmetrically.
    pub fn add_siblings(&mut self, a: &Person, b: &Person) {
        self.facts
            .push(RelationshipFact::new(a, RelationKind::Sibling, b));
        self.facts
            .push(RelationshipFact::new(b, RelationKind::Sibling, a));
        debug!(a = %a.name, b = %b.name, "stored sibling fact pair");
    }

    /// Number of stored facts (pairs count as two).
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}

impl RelationshipQuery for RelationshipStore {
    fn find_all_children_of<'a>(
        &'a self,
        name: &'a str,
    ) -> Box<dyn Iterator<Item = &'a Person> + 'a> {
        Box::new(
            self.facts
                .iter()
                .filter(move |f| f.kind == RelationKind::Parent && f.subject.name == name)
                .map(|f| &f.object),
        )
    }
}
