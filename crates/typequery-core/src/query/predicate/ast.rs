use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// Predicate AST
///
/// Pure, backend-agnostic representation of string-property predicates.
/// Nodes store the bare values handed over by property wrappers. Wildcard
/// placement and casing are described, not applied; a backend renders them.
///

///
/// CompareOp
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[repr(u8)]
pub enum CompareOp {
    #[display("eq")]
    Eq = 0x01,
    #[display("ne")]
    Ne = 0x02,
    #[display("like")]
    Like = 0x03,
    #[display("starts_with")]
    StartsWith = 0x04,
    #[display("ends_with")]
    EndsWith = 0x05,
    #[display("contains")]
    Contains = 0x06,
}

impl CompareOp {
    #[must_use]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Whether this operator is rendered as a LIKE pattern.
    #[must_use]
    pub const fn is_pattern(self) -> bool {
        matches!(
            self,
            Self::Like | Self::StartsWith | Self::EndsWith | Self::Contains
        )
    }
}

///
/// Casing
///
/// Case sensitivity requested for a text comparison.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Casing {
    #[default]
    Sensitive,
    Insensitive,
}

impl Casing {
    #[must_use]
    pub const fn is_insensitive(self) -> bool {
        matches!(self, Self::Insensitive)
    }
}

///
/// ComparePredicate
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ComparePredicate {
    pub path: String,
    pub op: CompareOp,
    pub value: String,
    pub casing: Casing,
}

impl ComparePredicate {
    #[must_use]
    pub fn new(path: impl Into<String>, op: CompareOp, value: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            op,
            value: value.into(),
            casing: Casing::Sensitive,
        }
    }

    #[must_use]
    pub fn insensitive(path: impl Into<String>, op: CompareOp, value: impl Into<String>) -> Self {
        Self {
            casing: Casing::Insensitive,
            ..Self::new(path, op, value)
        }
    }

    /// LIKE pattern for pattern operators, with wildcards placed around the
    /// bare value. `Like` values are used verbatim; nothing is escaped.
    #[must_use]
    pub fn like_pattern(&self) -> Option<String> {
        let value = &self.value;

        match self.op {
            CompareOp::Like => Some(value.clone()),
            CompareOp::StartsWith => Some(format!("{value}%")),
            CompareOp::EndsWith => Some(format!("%{value}")),
            CompareOp::Contains => Some(format!("%{value}%")),
            CompareOp::Eq | CompareOp::Ne => None,
        }
    }
}

///
/// JunctionKind
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
pub enum JunctionKind {
    #[default]
    #[display("and")]
    And,
    #[display("or")]
    Or,
    #[display("not")]
    Not,
}

///
/// Predicate
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Predicate {
    Compare(ComparePredicate),
    Match {
        path: String,
        value: String,
    },
    IsNull {
        path: String,
    },
    IsNotNull {
        path: String,
    },
    InList {
        path: String,
        values: Vec<String>,
    },
    Junction {
        kind: JunctionKind,
        nodes: Vec<Self>,
    },
}

impl Predicate {
    #[must_use]
    pub fn compare(path: impl Into<String>, op: CompareOp, value: impl Into<String>) -> Self {
        Self::Compare(ComparePredicate::new(path, op, value))
    }

    #[must_use]
    pub fn compare_ci(path: impl Into<String>, op: CompareOp, value: impl Into<String>) -> Self {
        Self::Compare(ComparePredicate::insensitive(path, op, value))
    }

    #[must_use]
    pub fn text_match(path: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Match {
            path: path.into(),
            value: value.into(),
        }
    }

    #[must_use]
    pub const fn junction(kind: JunctionKind, nodes: Vec<Self>) -> Self {
        Self::Junction { kind, nodes }
    }

    /// Property path this node addresses, if it is a leaf.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Compare(cmp) => Some(&cmp.path),
            Self::Match { path, .. }
            | Self::IsNull { path }
            | Self::IsNotNull { path }
            | Self::InList { path, .. } => Some(path),
            Self::Junction { .. } => None,
        }
    }

    /// Whether this tree contains a full-text match anywhere.
    #[must_use]
    pub fn contains_match(&self) -> bool {
        match self {
            Self::Match { .. } => true,
            Self::Junction { nodes, .. } => nodes.iter().any(Self::contains_match),
            _ => false,
        }
    }

    /// Number of leaf nodes in this tree.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Junction { nodes, .. } => nodes.iter().map(Self::leaf_count).sum(),
            _ => 1,
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compare(cmp) => {
                let ci = if cmp.casing.is_insensitive() { "_ci" } else { "" };
                write!(f, "{} {}{ci} {:?}", cmp.path, cmp.op, cmp.value)
            }
            Self::Match { path, value } => write!(f, "{path} match {value:?}"),
            Self::IsNull { path } => write!(f, "{path} is_null"),
            Self::IsNotNull { path } => write!(f, "{path} is_not_null"),
            Self::InList { path, values } => write!(f, "{path} in {values:?}"),
            Self::Junction { kind, nodes } => {
                if *kind == JunctionKind::Not {
                    f.write_str("not ")?;
                }
                let sep = if *kind == JunctionKind::Or { " or " } else { " and " };

                f.write_str("(")?;
                for (i, node) in nodes.iter().enumerate() {
                    if i > 0 {
                        f.write_str(sep)?;
                    }
                    write!(f, "{node}")?;
                }
                f.write_str(")")
            }
        }
    }
}
