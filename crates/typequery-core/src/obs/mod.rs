//! Observability: query-construction telemetry and sink abstractions.

pub(crate) mod metrics;
pub(crate) mod sink;

// re-exports
pub use metrics::{EntityCounters, EventOps, EventReport, EventState};
pub use sink::{
    MetricsEvent, MetricsSink, PredicateKind, metrics_report, metrics_reset_all,
    with_metrics_sink,
};
