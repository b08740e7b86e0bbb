//! Test doubles shared by unit tests.

use crate::query::{
    Expressions, JunctionKind, OrderDirection, PString, Predicate, QueryRoot,
};
use std::cell::RefCell;

///
/// Call
///
/// One accumulator call as seen by `RecordingExpr`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Call {
    Eq(String, String),
    Ne(String, String),
    Ieq(String, String),
    Like(String, String),
    StartsWith(String, String),
    EndsWith(String, String),
    Contains(String, String),
    Ilike(String, String),
    IstartsWith(String, String),
    IendsWith(String, String),
    Icontains(String, String),
    Match(String, String),
    IsNull(String),
    IsNotNull(String),
    InList(String, Vec<String>),
    OrderBy(String, OrderDirection),
    Start(JunctionKind),
    End,
    Append(Predicate),
}

///
/// RecordingExpr
///
/// Accumulator double that records each factory call by name, so tests can
/// check the wrapper's side of the contract without the default list.
///

#[derive(Debug, Default)]
pub(crate) struct RecordingExpr {
    calls: RefCell<Vec<Call>>,
}

impl RecordingExpr {
    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn push(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

macro_rules! record_text {
    ($($method:ident => $variant:ident),* $(,)?) => {
        $(
            fn $method(&self, path: &str, value: String) {
                self.push(Call::$variant(path.to_string(), value));
            }
        )*
    };
}

impl Expressions for RecordingExpr {
    fn append(&self, predicate: Predicate) {
        self.push(Call::Append(predicate));
    }

    fn order_by(&self, path: &str, direction: OrderDirection) {
        self.push(Call::OrderBy(path.to_string(), direction));
    }

    fn start_junction(&self, kind: JunctionKind) {
        self.push(Call::Start(kind));
    }

    fn end_junction(&self) {
        self.push(Call::End);
    }

    record_text! {
        eq => Eq,
        ne => Ne,
        ieq => Ieq,
        like => Like,
        starts_with => StartsWith,
        ends_with => EndsWith,
        contains => Contains,
        ilike => Ilike,
        istarts_with => IstartsWith,
        iends_with => IendsWith,
        icontains => Icontains,
        text_match => Match,
    }

    fn is_null(&self, path: &str) {
        self.push(Call::IsNull(path.to_string()));
    }

    fn is_not_null(&self, path: &str) {
        self.push(Call::IsNotNull(path.to_string()));
    }

    fn in_list(&self, path: &str, values: Vec<String>) {
        self.push(Call::InList(path.to_string(), values));
    }
}

///
/// TestRoot
///

#[derive(Debug, Default)]
pub(crate) struct TestRoot {
    expr: RecordingExpr,
}

impl TestRoot {
    pub(crate) fn prop<T: crate::text::TextValue>(
        &self,
        name: &'static str,
    ) -> PString<'_, Self, T> {
        PString::new(name, self)
    }

    pub(crate) fn prefixed<T: crate::text::TextValue>(
        &self,
        name: &'static str,
        prefix: &str,
    ) -> PString<'_, Self, T> {
        PString::with_prefix(name, self, prefix)
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.expr.calls()
    }
}

impl QueryRoot for TestRoot {
    type Expr = RecordingExpr;

    fn expr(&self) -> &Self::Expr {
        &self.expr
    }
}
