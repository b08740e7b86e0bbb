//! Core runtime for typequery: typed property wrappers, the expression
//! accumulator, query roots and the `QuerySpec` handoff.
#![warn(unreachable_pub)]

#[macro_use]
mod macros;

pub mod config;
pub mod error;
pub mod obs;
pub mod query;
pub mod text;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// Prelude
///
/// Prelude contains only query-building vocabulary and the traits needed
/// for method resolution.
///

pub mod prelude {
    pub use crate::{
        query::{EntityKind, Expressions as _, PString, QueryRoot, QuerySpec},
        text::TextValue,
    };
}
