//! Module: query::expr
//! Responsibility: the expression accumulator contract and its default
//! in-memory implementation.
//! Does not own: property path resolution or backend rendering.
//! Boundary: property wrappers call into `Expressions`; query beans own an
//! `ExpressionList`.

mod list;


pub use list::{BuiltExpressions, ExpressionList};

use crate::query::{
    predicate::{CompareOp, JunctionKind, Predicate},
    spec::OrderDirection,
};

///
/// Expressions
///
/// Ordered, append-only accumulator of predicate nodes attached to one query
/// root. Receivers are `&self` so a root can be borrowed by several property
/// wrappers in one chain; implementations use interior mutability and are
/// single-threaded.
///
/// Every factory method appends exactly one node through `append`, passing
/// the path and values through untouched. Validation, if any, belongs to the
/// implementation.
///

pub trait Expressions {
    /// Append one predicate node to the current junction.
    fn append(&self, predicate: Predicate);

    /// Add an order-by term.
    fn order_by(&self, path: &str, direction: OrderDirection);

    /// Open a nested junction; later appends land inside it.
    fn start_junction(&self, kind: JunctionKind);

    /// Close the innermost open junction.
    fn end_junction(&self);

    // ------------------------------------------------------------------
    // Equality
    // ------------------------------------------------------------------

    fn eq(&self, path: &str, value: String) {
        self.append(Predicate::compare(path, CompareOp::Eq, value));
    }

    fn ne(&self, path: &str, value: String) {
        self.append(Predicate::compare(path, CompareOp::Ne, value));
    }

    fn ieq(&self, path: &str, value: String) {
        self.append(Predicate::compare_ci(path, CompareOp::Eq, value));
    }

    // ------------------------------------------------------------------
    // Patterns
    // ------------------------------------------------------------------

    fn like(&self, path: &str, value: String) {
        self.append(Predicate::compare(path, CompareOp::Like, value));
    }

    fn starts_with(&self, path: &str, value: String) {
        self.append(Predicate::compare(path, CompareOp::StartsWith, value));
    }

    fn ends_with(&self, path: &str, value: String) {
        self.append(Predicate::compare(path, CompareOp::EndsWith, value));
    }

    fn contains(&self, path: &str, value: String) {
        self.append(Predicate::compare(path, CompareOp::Contains, value));
    }

    fn ilike(&self, path: &str, value: String) {
        self.append(Predicate::compare_ci(path, CompareOp::Like, value));
    }

    fn istarts_with(&self, path: &str, value: String) {
        self.append(Predicate::compare_ci(path, CompareOp::StartsWith, value));
    }

    fn iends_with(&self, path: &str, value: String) {
        self.append(Predicate::compare_ci(path, CompareOp::EndsWith, value));
    }

    fn icontains(&self, path: &str, value: String) {
        self.append(Predicate::compare_ci(path, CompareOp::Contains, value));
    }

    // ------------------------------------------------------------------
    // Full text
    // ------------------------------------------------------------------

    /// Full-text match. A query holding one of these executes against the
    /// document store.
    fn text_match(&self, path: &str, value: String) {
        self.append(Predicate::text_match(path, value));
    }

    // ------------------------------------------------------------------
    // Structural
    // ------------------------------------------------------------------

    fn is_null(&self, path: &str) {
        self.append(Predicate::IsNull {
            path: path.to_string(),
        });
    }

    fn is_not_null(&self, path: &str) {
        self.append(Predicate::IsNotNull {
            path: path.to_string(),
        });
    }

    fn in_list(&self, path: &str, values: Vec<String>) {
        self.append(Predicate::InList {
            path: path.to_string(),
            values,
        });
    }
}
