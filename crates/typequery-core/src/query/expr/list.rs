use crate::{
    error::QueryError,
    obs::sink::{self, MetricsEvent, PredicateKind},
    query::{
        expr::Expressions,
        predicate::{JunctionKind, Predicate},
        spec::{ExecutionRoute, OrderDirection, OrderTerm},
    },
};
use std::cell::{Cell, RefCell};

///
/// Frame
///
/// One open junction. The bottom frame is the query root and is always an
/// implicit `And`.
///

#[derive(Debug)]
struct Frame {
    kind: JunctionKind,
    nodes: Vec<Predicate>,
}

impl Frame {
    const fn new(kind: JunctionKind) -> Self {
        Self {
            kind,
            nodes: Vec::new(),
        }
    }
}

///
/// ExpressionList
///
/// Default accumulator owned by a query bean. Nodes are kept in call order;
/// root-level nodes compose conjunctively and nested junctions close into a
/// single `Junction` node on their parent.
///
/// Not `Sync`: a list is built by one call chain on one thread.
///

#[derive(Debug)]
pub struct ExpressionList {
    frames: RefCell<Vec<Frame>>,
    order: RefCell<Vec<OrderTerm>>,
    route: Cell<ExecutionRoute>,
    stray_ends: Cell<usize>,
    metrics: bool,
}

impl Default for ExpressionList {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpressionList {
    #[must_use]
    pub fn new() -> Self {
        Self::with_metrics(true)
    }

    /// Create a list that does (or does not) report to the metrics sink.
    #[must_use]
    pub fn with_metrics(metrics: bool) -> Self {
        Self {
            frames: RefCell::new(vec![Frame::new(JunctionKind::And)]),
            order: RefCell::new(Vec::new()),
            route: Cell::new(ExecutionRoute::Primary),
            stray_ends: Cell::new(0),
            metrics,
        }
    }

    /// Number of leaf predicates appended so far, open junctions included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames
            .borrow()
            .iter()
            .flat_map(|frame| frame.nodes.iter())
            .map(Predicate::leaf_count)
            .sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of junctions currently open.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.borrow().len().saturating_sub(1)
    }

    #[must_use]
    pub fn route(&self) -> ExecutionRoute {
        self.route.get()
    }

    /// Snapshot of the root-level nodes in call order.
    #[must_use]
    pub fn predicates(&self) -> Vec<Predicate> {
        self.frames
            .borrow()
            .first()
            .map(|frame| frame.nodes.clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn order(&self) -> Vec<OrderTerm> {
        self.order.borrow().clone()
    }

    /// Validate the accumulated tree and snapshot it.
    ///
    /// The list itself is left untouched, so a bean may be built repeatedly.
    pub fn finish(&self, max_predicates: Option<usize>) -> Result<BuiltExpressions, QueryError> {
        if self.stray_ends.get() > 0 {
            return Err(QueryError::UnbalancedJunction);
        }

        let depth = self.depth();
        if depth > 0 {
            return Err(QueryError::UnclosedJunction { depth });
        }

        let count = self.len();
        if let Some(limit) = max_predicates
            && count > limit
        {
            return Err(QueryError::TooManyPredicates { limit, count });
        }

        let mut nodes = self.predicates();
        let predicate = match nodes.len() {
            0 => None,
            1 => nodes.pop(),
            _ => Some(Predicate::junction(JunctionKind::And, nodes)),
        };

        Ok(BuiltExpressions {
            predicate,
            order: self.order(),
            route: self.route(),
            count,
        })
    }

    fn record(&self, event: MetricsEvent) {
        if self.metrics {
            sink::record(event);
        }
    }
}

impl Expressions for ExpressionList {
    fn append(&self, predicate: Predicate) {
        if predicate.contains_match() {
            self.route.set(ExecutionRoute::DocStore);
        }
        if let Some(kind) = kind_of(&predicate) {
            self.record(MetricsEvent::PredicateAppended { kind });
        }

        if let Some(frame) = self.frames.borrow_mut().last_mut() {
            frame.nodes.push(predicate);
        }
    }

    fn order_by(&self, path: &str, direction: OrderDirection) {
        self.order.borrow_mut().push(OrderTerm {
            path: path.to_string(),
            direction,
        });
    }

    fn start_junction(&self, kind: JunctionKind) {
        self.record(MetricsEvent::JunctionOpened { kind });
        self.frames.borrow_mut().push(Frame::new(kind));
    }

    fn end_junction(&self) {
        let mut frames = self.frames.borrow_mut();

        // the root frame is never closed
        if frames.len() < 2 {
            self.stray_ends.set(self.stray_ends.get() + 1);
            return;
        }

        let Some(frame) = frames.pop() else {
            return;
        };

        // empty junctions add nothing to the query
        if frame.nodes.is_empty() {
            return;
        }

        if let Some(parent) = frames.last_mut() {
            parent.nodes.push(Predicate::junction(frame.kind, frame.nodes));
        }
    }
}

///
/// BuiltExpressions
///
/// Validated snapshot of an `ExpressionList`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BuiltExpressions {
    pub predicate: Option<Predicate>,
    pub order: Vec<OrderTerm>,
    pub route: ExecutionRoute,
    pub count: usize,
}

fn kind_of(predicate: &Predicate) -> Option<PredicateKind> {
    match predicate {
        Predicate::Compare(cmp) => Some(PredicateKind::Compare {
            op: cmp.op,
            casing: cmp.casing,
        }),
        Predicate::Match { .. } => Some(PredicateKind::Match),
        Predicate::IsNull { .. } | Predicate::IsNotNull { .. } => Some(PredicateKind::Null),
        Predicate::InList { .. } => Some(PredicateKind::InList),
        Predicate::Junction { .. } => None,
    }
}
