//! Parent/child relationship facts behind a query capability.
//!
//! A small demonstration of dependency inversion: the high-level
//! [`ReportGenerator`](relations::report::ReportGenerator) consumes the
//! [`RelationshipQuery`](relations::query::RelationshipQuery) trait, while the
//! low-level [`RelationshipStore`](relations::store::RelationshipStore)
//! provides it. Facts are symmetric pairs — adding "A parent-of B" also
//! records "B child-of A" — and the pairing is enforced by the store's
//! mutation methods, never by callers.
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from a TOML file and environment variables
//! - [`relations`] — Fact types, the store, the query capability, and the report

pub mod config;
pub mod relations;
