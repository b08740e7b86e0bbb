//! Metrics sink boundary.
//!
//! Query-building code MUST NOT depend on obs::metrics directly.
//! All instrumentation flows through MetricsEvent and MetricsSink.
use crate::{
    obs::metrics,
    query::{Casing, CompareOp, ExecutionRoute, JunctionKind},
};
use std::{cell::RefCell, rc::Rc};

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<Rc<dyn MetricsSink>>> = const { RefCell::new(None) };
}

///
/// PredicateKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PredicateKind {
    Compare { op: CompareOp, casing: Casing },
    Match,
    Null,
    InList,
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetricsEvent {
    PredicateAppended {
        kind: PredicateKind,
    },
    JunctionOpened {
        kind: JunctionKind,
    },
    QueryBuilt {
        entity: &'static str,
        predicates: u64,
        route: ExecutionRoute,
    },
    BuildFailed {
        entity: &'static str,
    },
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

/// GlobalMetricsSink
/// Default thread-local sink that writes into global metrics state.
/// Acts as the concrete sink when no scoped override is installed.

pub(crate) struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent) {
        match event {
            MetricsEvent::PredicateAppended { kind } => {
                metrics::with_state_mut(|m| {
                    m.ops.predicates_appended = m.ops.predicates_appended.saturating_add(1);

                    match kind {
                        PredicateKind::Compare { op, casing } => {
                            if op.is_pattern() {
                                m.ops.pattern_predicates =
                                    m.ops.pattern_predicates.saturating_add(1);
                            }
                            if casing.is_insensitive() {
                                m.ops.case_insensitive_predicates =
                                    m.ops.case_insensitive_predicates.saturating_add(1);
                            }
                        }
                        PredicateKind::Match => {
                            m.ops.text_matches = m.ops.text_matches.saturating_add(1);
                        }
                        PredicateKind::Null | PredicateKind::InList => {}
                    }
                });
            }

            MetricsEvent::JunctionOpened { .. } => {
                metrics::with_state_mut(|m| {
                    m.ops.junctions_opened = m.ops.junctions_opened.saturating_add(1);
                });
            }

            MetricsEvent::QueryBuilt {
                entity,
                predicates,
                route,
            } => {
                metrics::with_state_mut(|m| {
                    m.ops.queries_built = m.ops.queries_built.saturating_add(1);
                    if route == ExecutionRoute::DocStore {
                        m.ops.doc_store_routes = m.ops.doc_store_routes.saturating_add(1);
                    }

                    let entry = m.entities.entry(entity.to_string()).or_default();
                    entry.queries_built = entry.queries_built.saturating_add(1);
                    entry.predicates_built = entry.predicates_built.saturating_add(predicates);
                });
            }

            MetricsEvent::BuildFailed { entity } => {
                metrics::with_state_mut(|m| {
                    m.ops.build_failures = m.ops.build_failures.saturating_add(1);

                    let entry = m.entities.entry(entity.to_string()).or_default();
                    entry.build_failures = entry.build_failures.saturating_add(1);
                });
            }
        }
    }
}

pub(crate) const GLOBAL_METRICS_SINK: GlobalMetricsSink = GlobalMetricsSink;

pub(crate) fn record(event: MetricsEvent) {
    let sink = SINK_OVERRIDE.with(|cell| cell.borrow().clone());

    match sink {
        Some(sink) => sink.record(event),
        None => GLOBAL_METRICS_SINK.record(event),
    }
}

/// Snapshot the current metrics state.
#[must_use]
pub fn metrics_report() -> metrics::EventReport {
    metrics::report()
}

/// Reset all metrics state.
pub fn metrics_reset_all() {
    metrics::reset_all();
}

/// Run a closure with a temporary metrics sink override.
/// The previous sink is restored on every exit, including unwind.
pub fn with_metrics_sink<T>(sink: Rc<dyn MetricsSink>, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<Rc<dyn MetricsSink>>);

    impl Drop for Guard {
        fn drop(&mut self) {
            let prev = self.0.take();
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = prev;
            });
        }
    }

    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink));
    let _guard = Guard(prev);

    f()
}

///
/// TESTS
///
