//! Core relationship type definitions.
//!
//! Defines [`Person`] (a named entity), [`RelationKind`] (the three
//! relationship categories), and [`RelationshipFact`] (a stored
//! subject–kind–object triple).

#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The three relationship kinds a fact can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    /// Subject is a parent of the object.
    Parent,
    /// Subject is a child of the object.
    Child,
    /// Subject and object are siblings.
    Sibling,
}

impl RelationKind {
    /// Stable string representation, matching the serde form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Parent => "parent",
            Self::Child => "child",
            Self::Sibling => "sibling",
        }
    }
}

impl std::fmt::Display for RelationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized relation kind.
#[derive(Debug, Error)]
#[error("unknown relation kind: {0}")]
pub struct UnknownKind(pub String);

impl std::str::FromStr for RelationKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "parent" => Ok(Self::Parent),
            "child" => Ok(Self::Child),
            "sibling" => Ok(Self::Sibling),
            _ => Err(UnknownKind(s.to_string())),
        }
    }
}

/// A named entity. Names are plain identifiers and not guaranteed unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// A stored relationship triple between two people.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationshipFact {
    /// UUID v7 (time-sortable) identifier.
    pub id: String,
    /// The person the fact is about.
    pub subject: Person,
    /// Relationship of the subject to the object.
    pub kind: RelationKind,
    /// The person the subject relates to.
    pub object: Person,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
}

impl RelationshipFact {
    /// Build a fact with a fresh ID and timestamp.
    pub(crate) fn new(subject: &Person, kind: RelationKind, object: &Person) -> Self {
        Self {
            id: uuid::Uuid::now_v7().to_string(),
            subject: subject.clone(),
            kind,
            object: object.clone(),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
