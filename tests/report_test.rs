use kinship::relations::query::RelationshipQuery;
use kinship::relations::report::ReportGenerator;
use kinship::relations::store::RelationshipStore;
use kinship::relations::types::Person;

fn sample_store() -> RelationshipStore {
    let john = Person::new("John");
    let chris = Person::new("Chris");
    let matt = Person::new("Matt");

    let mut store = RelationshipStore::new();
    store.add_parent_and_child(&john, &chris);
    store.add_parent_and_child(&john, &matt);
    store
}

#[test]
fn report_over_store_capability() {
    let store = sample_store();
    let report = ReportGenerator::new(&store);

    let mut out = Vec::new();
    report.write_report("John", &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "John has a child called Chris\nJohn has a child called Matt\n"
    );
}

#[test]
fn childless_subject_produces_empty_report() {
    let store = sample_store();
    let report = ReportGenerator::new(&store);
    assert!(report.lines("Chris").is_empty());
}

#[test]
fn repeated_queries_agree() {
    let store = sample_store();
    let report = ReportGenerator::new(&store);
    assert_eq!(report.lines("John"), report.lines("John"));
}

/// A hand-rolled capability with no store behind it. The generator must work
/// against it unchanged — it only ever sees the trait.
struct FixedChildren {
    parent: String,
    children: Vec<Person>,
}

impl RelationshipQuery for FixedChildren {
    fn find_all_children_of<'a>(
        &'a self,
        name: &'a str,
    ) -> Box<dyn Iterator<Item = &'a Person> + 'a> {
        if name == self.parent {
            Box::new(self.children.iter())
        } else {
            Box::new(std::iter::empty())
        }
    }
}

#[test]
fn report_accepts_any_capability_impl() {
    let fixed = FixedChildren {
        parent: "Ada".into(),
        children: vec![Person::new("Grace"), Person::new("Edsger")],
    };
    let report = ReportGenerator::new(&fixed);

    assert_eq!(
        report.lines("Ada"),
        [
            "Ada has a child called Grace",
            "Ada has a child called Edsger",
        ]
    );
    assert!(report.lines("John").is_empty());
}
