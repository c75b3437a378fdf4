//! Relationship facts, the query capability, and the report built on it.
//!
//! The dependency arrow runs one way: [`report::ReportGenerator`] depends on
//! the [`query::RelationshipQuery`] trait, and [`store::RelationshipStore`]
//! implements it. Neither side knows about the other.

pub mod query;
pub mod report;
pub mod store;
pub mod types;
