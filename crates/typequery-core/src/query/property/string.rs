use crate::{
    query::{
        expr::Expressions, path::PropertyPath, root::QueryRoot, spec::OrderDirection,
    },
    text::TextValue,
};
use std::{borrow::Borrow, fmt, marker::PhantomData};

///
/// PString
///
/// Property wrapper for a string-backed property whose declared type is `T`.
///
/// Holds the property's resolved path and a shared borrow of its query root.
/// Every operation appends exactly one node to the root's accumulator and
/// hands back the same root reference, so chains read
/// `q.email().starts_with("admin@").name().contains("rob")`.
///
/// Only `equal_to_type`, `not_equal_to_type` and `in_list` take `T`; the
/// pattern operations are textual and take plain strings. Values are
/// forwarded as-is; an empty string is a valid argument here.
///

pub struct PString<'q, R, T> {
    path: PropertyPath,
    root: &'q R,
    _marker: PhantomData<fn(&T)>,
}

impl<'q, R, T> PString<'q, R, T>
where
    R: QueryRoot,
    T: TextValue,
{
    /// Wrapper for a property declared directly on `root`.
    #[doc(hidden)]
    #[must_use]
    pub fn new(name: &'static str, root: &'q R) -> Self {
        Self::at(PropertyPath::new(name), root)
    }

    /// Wrapper for a property reached through `prefix`.
    #[doc(hidden)]
    #[must_use]
    pub fn with_prefix(name: &'static str, root: &'q R, prefix: impl Into<String>) -> Self {
        Self::at(PropertyPath::with_prefix(name, prefix), root)
    }

    const fn at(path: PropertyPath, root: &'q R) -> Self {
        Self {
            path,
            root,
            _marker: PhantomData,
        }
    }

    /// The resolved property path.
    #[must_use]
    pub const fn path(&self) -> &PropertyPath {
        &self.path
    }

    // ------------------------------------------------------------------
    // Strong-typed equality
    // ------------------------------------------------------------------

    /// Is equal to, taking the declared type rather than its text.
    pub fn equal_to_type(&self, value: impl Borrow<T>) -> &'q R {
        self.expr().eq(self.name(), value.borrow().to_text());
        self.root
    }

    /// Is not equal to, taking the declared type rather than its text.
    pub fn not_equal_to_type(&self, value: impl Borrow<T>) -> &'q R {
        self.expr().ne(self.name(), value.borrow().to_text());
        self.root
    }

    /// Is one of the given values.
    pub fn in_list<I>(&self, values: I) -> &'q R
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let values = values
            .into_iter()
            .map(|value| value.borrow().to_text())
            .collect();

        self.expr().in_list(self.name(), values);
        self.root
    }

    // ------------------------------------------------------------------
    // Text equality
    // ------------------------------------------------------------------

    /// Is equal to, as raw text.
    pub fn eq(&self, value: impl Into<String>) -> &'q R {
        self.expr().eq(self.name(), value.into());
        self.root
    }

    /// Is not equal to, as raw text.
    pub fn ne(&self, value: impl Into<String>) -> &'q R {
        self.expr().ne(self.name(), value.into());
        self.root
    }

    /// Case insensitive is equal to.
    pub fn ieq(&self, value: impl Into<String>) -> &'q R {
        self.case_insensitive_eq(value.into())
    }

    /// Case insensitive is equal to. Same as [`PString::ieq`].
    pub fn iequal_to(&self, value: impl Into<String>) -> &'q R {
        self.case_insensitive_eq(value.into())
    }

    // ------------------------------------------------------------------
    // Patterns
    // ------------------------------------------------------------------

    /// Like; include `%` and `_` placeholders as necessary.
    pub fn like(&self, value: impl Into<String>) -> &'q R {
        self.expr().like(self.name(), value.into());
        self.root
    }

    /// Starts with; the accumulator appends the `%` wildcard.
    pub fn starts_with(&self, value: impl Into<String>) -> &'q R {
        self.expr().starts_with(self.name(), value.into());
        self.root
    }

    /// Ends with; the accumulator prepends the `%` wildcard.
    pub fn ends_with(&self, value: impl Into<String>) -> &'q R {
        self.expr().ends_with(self.name(), value.into());
        self.root
    }

    /// Contains; the accumulator wraps the value in `%` wildcards.
    pub fn contains(&self, value: impl Into<String>) -> &'q R {
        self.expr().contains(self.name(), value.into());
        self.root
    }

    /// Case insensitive like.
    pub fn ilike(&self, value: impl Into<String>) -> &'q R {
        self.expr().ilike(self.name(), value.into());
        self.root
    }

    /// Case insensitive starts with.
    pub fn istarts_with(&self, value: impl Into<String>) -> &'q R {
        self.expr().istarts_with(self.name(), value.into());
        self.root
    }

    /// Case insensitive ends with.
    pub fn iends_with(&self, value: impl Into<String>) -> &'q R {
        self.expr().iends_with(self.name(), value.into());
        self.root
    }

    /// Case insensitive contains.
    pub fn icontains(&self, value: impl Into<String>) -> &'q R {
        self.expr().icontains(self.name(), value.into());
        self.root
    }

    /// Full-text match.
    ///
    /// A query holding a match executes against the document store rather
    /// than the primary store.
    #[doc(alias = "match")]
    pub fn text_match(&self, value: impl Into<String>) -> &'q R {
        self.expr().text_match(self.name(), value.into());
        self.root
    }

    // ------------------------------------------------------------------
    // Structural
    // ------------------------------------------------------------------

    pub fn is_null(&self) -> &'q R {
        self.expr().is_null(self.name());
        self.root
    }

    pub fn is_not_null(&self) -> &'q R {
        self.expr().is_not_null(self.name());
        self.root
    }

    // ------------------------------------------------------------------
    // Ordering
    // ------------------------------------------------------------------

    /// Order by this property ascending.
    pub fn asc(&self) -> &'q R {
        self.expr().order_by(self.name(), OrderDirection::Asc);
        self.root
    }

    /// Order by this property descending.
    pub fn desc(&self) -> &'q R {
        self.expr().order_by(self.name(), OrderDirection::Desc);
        self.root
    }

    // ------------------------------------------------------------------
    // Internal helpers
    // ------------------------------------------------------------------

    fn case_insensitive_eq(&self, value: String) -> &'q R {
        self.expr().ieq(self.name(), value);
        self.root
    }

    fn expr(&self) -> &'q R::Expr {
        self.root.expr()
    }

    fn name(&self) -> &str {
        self.path.as_str()
    }
}

impl<R, T> fmt::Debug for PString<'_, R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PString")
            .field("path", &self.path)
            .field("type", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}
