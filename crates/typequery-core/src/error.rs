use thiserror::Error as ThisError;

///
/// PathError
///
/// Rejected property names and prefixes. Generated query beans never see
/// this: their names and prefixes are checked in `const` items at compile
/// time.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum PathError {
    #[error("property name must not be empty")]
    EmptyName,

    #[error("property name '{name}' contains invalid character {ch:?}")]
    InvalidName { name: String, ch: char },

    #[error("property prefix '{prefix}' must be dot-separated names without whitespace or '#'")]
    InvalidPrefix { prefix: String },
}

///
/// QueryError
///
/// Structural problems with an accumulated predicate tree, surfaced when a
/// query bean is built into a `QuerySpec`.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum QueryError {
    #[error("{depth} junction(s) left open; call end_junction() before building")]
    UnclosedJunction { depth: usize },

    #[error("end_junction() called with no open junction")]
    UnbalancedJunction,

    #[error("query has {count} predicates; configured limit is {limit}")]
    TooManyPredicates { limit: usize, count: usize },
}

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("invalid query config: {0}")]
    Parse(#[from] toml::de::Error),
}
