use crate::query::predicate::Predicate;
use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// ExecutionRoute
///
/// Which backend a built query must run against. A single full-text
/// `match` predicate anywhere in the query routes it to the document store.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
pub enum ExecutionRoute {
    #[default]
    #[display("primary")]
    Primary,
    #[display("doc_store")]
    DocStore,
}

///
/// OrderDirection
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
pub enum OrderDirection {
    #[display("asc")]
    Asc,
    #[display("desc")]
    Desc,
}

///
/// OrderTerm
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct OrderTerm {
    pub path: String,
    pub direction: OrderDirection,
}

///
/// QuerySpec
///
/// Immutable snapshot produced by building a query bean.
///
/// `QuerySpec` represents fully constructed query intent, but not an
/// execution plan. It is the handoff point between the builder layer and
/// whatever executes the query.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct QuerySpec {
    pub entity: String,
    pub predicate: Option<Predicate>,
    pub order: Vec<OrderTerm>,
    pub route: ExecutionRoute,
}

impl QuerySpec {
    /// Number of leaf predicates in this query.
    #[must_use]
    pub fn predicate_count(&self) -> usize {
        self.predicate.as_ref().map_or(0, Predicate::leaf_count)
    }

    #[must_use]
    pub fn is_doc_store(&self) -> bool {
        self.route == ExecutionRoute::DocStore
    }
}

///
/// TESTS
///
