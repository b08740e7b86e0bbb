//! Module: query
//! Responsibility: typed, fluent construction of string-property predicates
//! and their handoff as an immutable `QuerySpec`.
//! Does not own: execution, pagination or backend rendering.

pub(crate) mod expr;
pub(crate) mod path;
pub(crate) mod predicate;
pub(crate) mod property;
pub(crate) mod root;
pub(crate) mod spec;

// re-exports
pub use expr::{BuiltExpressions, ExpressionList, Expressions};
pub use path::PropertyPath;
pub use predicate::{Casing, CompareOp, ComparePredicate, JunctionKind, Predicate};
pub use property::PString;
pub use root::{EntityKind, QueryBean, QueryRoot};
pub use spec::{ExecutionRoute, OrderDirection, OrderTerm, QuerySpec};
