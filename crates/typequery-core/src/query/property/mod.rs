//! Module: query::property
//! Responsibility: typed property wrappers handed out by query roots.
//! Does not own: predicate storage (the accumulator) or path navigation.
//! Boundary: user-facing fluent layer; every call returns the root.

mod string;


pub use string::PString;
