//! ## Crate layout
//! - `core`: property wrappers, expression accumulator, query beans,
//!   configuration, errors and observability.
//!
//! The `prelude` module brings the query-building surface and the traits
//! needed for method resolution into scope.

pub use typequery_core as core;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//
// Macros
//

pub use typequery_core::{query_bean, text_value};

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::core::{
        config::QueryConfig,
        error::QueryError,
        query::{
            EntityKind, ExecutionRoute, Expressions as _, JunctionKind, OrderDirection, PString,
            Predicate, QueryRoot as _, QuerySpec,
        },
        text::TextValue,
    };
    pub use crate::{query_bean, text_value};
    pub use serde::{Deserialize, Serialize};
}
