use crate::{
    config::QueryConfig,
    error::QueryError,
    obs::sink::{self, MetricsEvent},
    query::{
        expr::{ExpressionList, Expressions},
        predicate::JunctionKind,
        spec::QuerySpec,
    },
};
use std::{cell::Cell, fmt, marker::PhantomData};

///
/// EntityKind
///
/// Marker for a persistent entity that query beans are built against.
///

pub trait EntityKind {
    const ENTITY_NAME: &'static str;
}

///
/// QueryRoot
///
/// A query under construction. Property wrappers borrow the root, append to
/// its accumulator and return the same reference; the junction methods
/// below do the same so chains are never interrupted.
///
/// Root-level predicates compose conjunctively. `or()`, `and()` and `not()`
/// open a nested junction that lasts until the matching `end_junction()`.
///

pub trait QueryRoot {
    type Expr: Expressions;

    fn expr(&self) -> &Self::Expr;

    /// Open a disjunction.
    fn or(&self) -> &Self {
        self.expr().start_junction(JunctionKind::Or);
        self
    }

    /// Open an explicit conjunction, typically inside an `or()`.
    fn and(&self) -> &Self {
        self.expr().start_junction(JunctionKind::And);
        self
    }

    /// Open a negated conjunction.
    #[allow(clippy::should_implement_trait)]
    fn not(&self) -> &Self {
        self.expr().start_junction(JunctionKind::Not);
        self
    }

    /// Close the innermost open junction.
    fn end_junction(&self) -> &Self {
        self.expr().end_junction();
        self
    }
}

///
/// QueryBean
///
/// Base root for one entity type. Owns the expression list; generated query
/// beans wrap one of these and add a property accessor per field.
///

pub struct QueryBean<E: EntityKind> {
    expr: ExpressionList,
    config: QueryConfig,
    debug: Cell<bool>,
    _marker: PhantomData<E>,
}

impl<E: EntityKind> Default for QueryBean<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EntityKind> QueryBean<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(QueryConfig::default())
    }

    #[must_use]
    pub fn with_config(config: QueryConfig) -> Self {
        Self {
            expr: ExpressionList::with_metrics(config.metrics),
            debug: Cell::new(config.debug),
            config,
            _marker: PhantomData,
        }
    }

    /// Print the query when it is built.
    pub fn debug(&self) -> &Self {
        self.debug.set(true);
        self
    }

    #[must_use]
    pub const fn config(&self) -> &QueryConfig {
        &self.config
    }

    /// Snapshot the accumulated predicates, order and route into a
    /// `QuerySpec`. The bean is unchanged and may be built again.
    pub fn build(&self) -> Result<QuerySpec, QueryError> {
        let entity = E::ENTITY_NAME;

        let built = match self.expr.finish(self.config.max_predicates) {
            Ok(built) => built,
            Err(err) => {
                self.record(MetricsEvent::BuildFailed { entity });
                self.trace(format_args!("query {entity} rejected: {err}"));

                return Err(err);
            }
        };

        self.record(MetricsEvent::QueryBuilt {
            entity,
            predicates: u64::try_from(built.count).unwrap_or(u64::MAX),
            route: built.route,
        });

        let spec = QuerySpec {
            entity: entity.to_string(),
            predicate: built.predicate,
            order: built.order,
            route: built.route,
        };
        self.trace(format_args!("{}", Explain(&spec)));

        Ok(spec)
    }

    fn record(&self, event: MetricsEvent) {
        if self.config.metrics {
            sink::record(event);
        }
    }

    fn trace(&self, args: fmt::Arguments<'_>) {
        if self.debug.get() {
            println!("[debug] {args}");
        }
    }
}

impl<E: EntityKind> QueryRoot for QueryBean<E> {
    type Expr = ExpressionList;

    fn expr(&self) -> &Self::Expr {
        &self.expr
    }
}

impl<E: EntityKind> fmt::Debug for QueryBean<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryBean")
            .field("entity", &E::ENTITY_NAME)
            .field("expr", &self.expr)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

///
/// Explain
///
/// One-line rendering of a built query for debug output.
///

struct Explain<'a>(&'a QuerySpec);

impl fmt::Display for Explain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spec = self.0;

        write!(f, "query {} route={}", spec.entity, spec.route)?;
        if let Some(predicate) = &spec.predicate {
            write!(f, " where {predicate}")?;
        }
        for (i, term) in spec.order.iter().enumerate() {
            let sep = if i == 0 { " order by " } else { ", " };
            write!(f, "{sep}{} {}", term.path, term.direction)?;
        }

        Ok(())
    }
}

///
/// TESTS
///
