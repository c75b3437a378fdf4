//! The high-level report component.
//!
//! [`ReportGenerator`] is handed a [`RelationshipQuery`] capability at
//! construction time and never sees the concrete store.

use std::io::Write;

use crate::relations::query::RelationshipQuery;
use crate::relations::types::Person;

/// Renders "who has which children" reports from any query capability.
pub struct ReportGenerator<'a> {
    query: &'a dyn RelationshipQuery,
}

impl<'a> ReportGenerator<'a> {
    pub fn new(query: &'a dyn RelationshipQuery) -> Self {
        Self { query }
    }

    /// The recorded children of `name`, cloned out of the capability.
    pub fn children(&self, name: &str) -> Vec<Person> {
        self.query.find_all_children_of(name).cloned().collect()
    }

    /// One formatted line per recorded child of `name`.
    pub fn lines(&self, name: &str) -> Vec<String> {
        self.query
            .find_all_children_of(name)
            .map(|child| format!("{name} has a child called {child}"))
            .collect()
    }

    /// Write the report to `out`. A subject with no children writes nothing.
    pub fn write_report(&self, name: &str, out: &mut impl Write) -> std::io::Result<()> {
        for line in self.lines(name) {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relations::store::RelationshipStore;

    fn sample() -> RelationshipStore {
        let john = Person::new("John");
        let chris = Person::new("Chris");
        let matt = Person::new("Matt");

        let mut store = RelationshipStore::new();
        store.add_parent_and_child(&john, &chris);
        store.add_parent_and_child(&john, &matt);
        store
    }

    #[test]
    fn report_lines_match_format() {
        let store = sample();
        let report = ReportGenerator::new(&store);
        assert_eq!(
            report.lines("John"),
            [
                "John has a child called Chris",
                "John has a child called Matt",
            ]
        );
    }

    #[test]
    fn childless_subject_writes_nothing() {
        let store = sample();
        let report = ReportGenerator::new(&store);

        let mut out = Vec::new();
        report.write_report("Chris", &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn write_report_emits_one_line_per_child() {
        let store = sample();
        let report = ReportGenerator::new(&store);

        let mut out = Vec::new();
        report.write_report("John", &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "John has a child called Chris\nJohn has a child called Matt\n"
        );
    }
}
