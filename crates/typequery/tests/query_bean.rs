use proptest::prelude::*;
use std::{cell::RefCell, rc::Rc};
use typequery::{
    core::{
        obs::{MetricsEvent, MetricsSink, metrics_report, metrics_reset_all, with_metrics_sink},
        query::{CompareOp, ComparePredicate, OrderTerm},
    },
    prelude::*,
};
use ulid::Ulid;

///
/// Fixtures
///

struct Customer;

impl EntityKind for Customer {
    const ENTITY_NAME: &'static str = "Customer";
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Status {
    Active,
    Suspended,
}

text_value!(Status {
    Active => "ACTIVE",
    Suspended => "SUSPENDED",
});

query_bean! {
    /// Query bean for `Customer`.
    pub struct QCustomer for Customer {
        email: String,
        name: String,
        status: Status,
        account: Ulid,
        /// Postal code on the customer's address.
        code: String => "address",
        notes: String,
        r#type: String,
    }
}

fn leaf(predicate: Predicate) -> Option<Predicate> {
    Some(predicate)
}

fn and(nodes: Vec<Predicate>) -> Option<Predicate> {
    Some(Predicate::junction(JunctionKind::And, nodes))
}

///
/// Scenarios
///

#[test]
fn starts_with_on_bare_property() {
    let q = QCustomer::new();

    let back = q.email().starts_with("admin@");

    assert!(std::ptr::eq(back, &q));
    assert_eq!(
        q.build().unwrap().predicate,
        leaf(Predicate::compare("email", CompareOp::StartsWith, "admin@"))
    );
}

#[test]
fn ieq_on_prefixed_property() {
    let q = QCustomer::new();

    let back = q.code().ieq("NYC");

    assert!(std::ptr::eq(back, &q));
    assert_eq!(q.code().path().as_str(), "address.code");
    assert_eq!(
        q.build().unwrap().predicate,
        leaf(Predicate::compare_ci("address.code", CompareOp::Eq, "NYC"))
    );
}

#[test]
fn text_match_routes_query_to_doc_store() {
    let q = QCustomer::new();

    q.notes().text_match("full text query");
    let spec = q.build().unwrap();

    assert_eq!(spec.route, ExecutionRoute::DocStore);
    assert_eq!(
        spec.predicate,
        leaf(Predicate::text_match("notes", "full text query"))
    );
}

#[test]
fn raw_identifier_property_uses_the_bare_name() {
    let q = QCustomer::new();

    assert_eq!(q.r#type().path().as_str(), "type");

    q.r#type().eq("A");
    assert_eq!(
        q.build().unwrap().predicate,
        leaf(Predicate::compare("type", CompareOp::Eq, "A"))
    );
}

#[test]
fn queries_without_match_stay_on_primary_route() {
    let q = QCustomer::new();

    q.email().contains("@example.");

    assert_eq!(q.build().unwrap().route, ExecutionRoute::Primary);
}

///
/// Chaining
///

#[test]
fn long_chain_composes_conjunctively_in_call_order() {
    let q = QCustomer::new();

    q.email()
        .istarts_with("admin@")
        .name()
        .contains("rob")
        .status()
        .equal_to_type(Status::Active)
        .code()
        .ne("00000");

    assert_eq!(
        q.build().unwrap().predicate,
        and(vec![
            Predicate::compare_ci("email", CompareOp::StartsWith, "admin@"),
            Predicate::compare("name", CompareOp::Contains, "rob"),
            Predicate::compare("status", CompareOp::Eq, "ACTIVE"),
            Predicate::compare("address.code", CompareOp::Ne, "00000"),
        ])
    );
}

#[test]
fn junctions_chain_through_the_bean() {
    let q = QCustomer::new();

    q.status()
        .not_equal_to_type(Status::Suspended)
        .or()
        .email()
        .ends_with("@corp.example")
        .and()
        .name()
        .is_not_null()
        .code()
        .like("10_%")
        .end_junction()
        .end_junction();

    assert_eq!(
        q.build().unwrap().predicate,
        and(vec![
            Predicate::compare("status", CompareOp::Ne, "SUSPENDED"),
            Predicate::junction(
                JunctionKind::Or,
                vec![
                    Predicate::compare("email", CompareOp::EndsWith, "@corp.example"),
                    Predicate::junction(
                        JunctionKind::And,
                        vec![
                            Predicate::IsNotNull {
                                path: "name".to_string(),
                            },
                            Predicate::compare("address.code", CompareOp::Like, "10_%"),
                        ],
                    ),
                ],
            ),
        ])
    );
}

#[test]
fn not_junction_negates_its_body() {
    let q = QCustomer::new();

    q.not().email().icontains("spam").end_junction();

    assert_eq!(
        q.build().unwrap().predicate,
        leaf(Predicate::junction(
            JunctionKind::Not,
            vec![Predicate::compare_ci("email", CompareOp::Contains, "spam")],
        ))
    );
}

#[test]
fn unclosed_junction_is_a_build_error() {
    let q = QCustomer::new();

    q.or().email().eq("a@b.c");

    assert_eq!(q.build(), Err(QueryError::UnclosedJunction { depth: 1 }));
}

#[test]
fn ordering_is_recorded_on_the_spec() {
    let q = QCustomer::new();

    q.name().asc().email().desc();

    assert_eq!(
        q.build().unwrap().order,
        vec![
            OrderTerm {
                path: "name".to_string(),
                direction: OrderDirection::Asc,
            },
            OrderTerm {
                path: "email".to_string(),
                direction: OrderDirection::Desc,
            },
        ]
    );
}

///
/// Strong types
///

#[test]
fn ulid_property_compares_on_canonical_text() {
    let q = QCustomer::new();
    let account = Ulid::from_parts(1_700_000_000_000, 42);

    q.account().equal_to_type(account);

    assert_eq!(
        q.build().unwrap().predicate,
        leaf(Predicate::compare("account", CompareOp::Eq, account.to_string()))
    );
}

#[test]
fn in_list_converts_each_strong_value() {
    let q = QCustomer::new();

    q.status().in_list([Status::Active, Status::Suspended]);

    assert_eq!(
        q.build().unwrap().predicate,
        leaf(Predicate::InList {
            path: "status".to_string(),
            values: vec!["ACTIVE".to_string(), "SUSPENDED".to_string()],
        })
    );
}

#[test]
fn wildcards_are_placed_by_the_accumulator() {
    let q = QCustomer::new();

    q.email().starts_with("admin@");

    let Some(Predicate::Compare(cmp)) = q.build().unwrap().predicate else {
        panic!("expected a compare predicate");
    };
    assert_eq!(cmp.value, "admin@");
    assert_eq!(cmp.like_pattern().as_deref(), Some("admin@%"));
}

///
/// Config, metrics, handoff
///

#[test]
fn config_from_toml_limits_predicates() {
    let config = QueryConfig::from_toml_str("metrics = false\nmax_predicates = 1\n").unwrap();
    let q = QCustomer::with_config(config);

    q.email().eq("a").name().eq("b");

    assert_eq!(
        q.build(),
        Err(QueryError::TooManyPredicates { limit: 1, count: 2 })
    );
}

#[derive(Default)]
struct RecordingSink {
    events: RefCell<Vec<MetricsEvent>>,
}

impl MetricsSink for RecordingSink {
    fn record(&self, event: MetricsEvent) {
        self.events.borrow_mut().push(event);
    }
}

#[test]
fn one_metrics_event_per_wrapper_call_plus_build() {
    let sink = Rc::new(RecordingSink::default());

    with_metrics_sink(sink.clone(), || {
        let q = QCustomer::new();
        q.email().ieq("x").name().iequal_to("y").notes().text_match("z");
        q.build().unwrap();
    });

    let events = sink.events.borrow();
    assert_eq!(events.len(), 4);
    assert_eq!(
        events[3],
        MetricsEvent::QueryBuilt {
            entity: "Customer",
            predicates: 3,
            route: ExecutionRoute::DocStore,
        }
    );
}

#[test]
fn global_metrics_count_built_queries() {
    metrics_reset_all();

    let q = QCustomer::new();
    q.email().eq("a");
    q.build().unwrap();

    let report = metrics_report();
    assert_eq!(report.counters.ops.queries_built, 1);
    assert_eq!(report.counters.entities["Customer"].predicates_built, 1);
}

#[test]
fn debug_bean_builds_the_same_spec() {
    let q = QCustomer::new();
    q.debug().email().eq("a");

    let spec = q.build().unwrap();

    assert_eq!(spec.entity, "Customer");
    assert_eq!(spec.predicate_count(), 1);
}

#[test]
fn built_spec_serializes_for_handoff() {
    let q = QCustomer::new();
    q.code().istarts_with("10").notes().text_match("urgent");

    let spec = q.build().unwrap();
    let json = serde_json::to_value(&spec).unwrap();

    assert_eq!(json["entity"], "Customer");
    assert_eq!(json["route"], "DocStore");
    let back: QuerySpec = serde_json::from_value(json).unwrap();
    assert_eq!(back, spec);
}

proptest! {
    #[test]
    fn ieq_and_iequal_to_build_identical_specs(value in ".{0,16}") {
        let a = QCustomer::new();
        let b = QCustomer::new();

        a.name().ieq(value.clone());
        b.name().iequal_to(value.clone());

        prop_assert_eq!(a.build().unwrap(), b.build().unwrap());
        prop_assert_eq!(
            a.build().unwrap().predicate,
            Some(Predicate::Compare(ComparePredicate::insensitive(
                "name",
                CompareOp::Eq,
                value,
            )))
        );
    }
}
