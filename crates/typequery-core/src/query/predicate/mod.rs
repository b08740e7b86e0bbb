//! Module: query::predicate
//! Responsibility: predicate node vocabulary appended by the accumulator.
//! Does not own: rendering to any backend query language.

mod ast;


pub use ast::{Casing, CompareOp, ComparePredicate, JunctionKind, Predicate};
