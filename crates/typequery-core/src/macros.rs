// query_bean
/// Declare a query bean for an entity: a root wrapping `QueryBean<E>` with
/// one typed accessor per string property.
///
/// ```ignore
/// query_bean! {
///     pub struct QCustomer for Customer {
///         email: String,
///         status: Status,
///         code: String => "address",
///     }
/// }
///
/// let q = QCustomer::new();
/// q.email().istarts_with("admin@").status().equal_to_type(Status::Active);
/// let spec = q.build()?;
/// ```
///
/// `=> "prefix"` places the property under a dotted path prefix. Raw
/// identifiers lose their marker (`r#type` is the path `type`). Property
/// names and prefixes are checked in `const` items, so a malformed one is
/// a compile error.
#[macro_export]
macro_rules! query_bean {
    (@prefix) => { "" };
    (@prefix $prefix:literal) => { $prefix };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident for $entity:ty {
            $(
                $(#[$prop_meta:meta])*
                $prop:ident : $ty:ty $(=> $prefix:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            bean: $crate::query::QueryBean<$entity>,
        }

        impl $name {
            #[must_use]
            pub fn new() -> Self {
                Self {
                    bean: $crate::query::QueryBean::new(),
                }
            }

            #[must_use]
            pub fn with_config(config: $crate::config::QueryConfig) -> Self {
                Self {
                    bean: $crate::query::QueryBean::with_config(config),
                }
            }

            /// Print the query when it is built.
            pub fn debug(&self) -> &Self {
                self.bean.debug();
                self
            }

            /// Snapshot this query into a `QuerySpec`.
            pub fn build(
                &self,
            ) -> ::core::result::Result<$crate::query::QuerySpec, $crate::error::QueryError> {
                self.bean.build()
            }

            $(
                $(#[$prop_meta])*
                pub fn $prop(&self) -> $crate::query::PString<'_, Self, $ty> {
                    const NAME: &str = $crate::query::PropertyPath::checked_name(
                        $crate::query::PropertyPath::unraw(::core::stringify!($prop)),
                    );
                    const PREFIX: &str = $crate::query::PropertyPath::checked_prefix(
                        $crate::query_bean!(@prefix $($prefix)?),
                    );

                    $crate::query::PString::with_prefix(NAME, self, PREFIX)
                }
            )*
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $crate::query::QueryRoot for $name {
            type Expr = $crate::query::ExpressionList;

            fn expr(&self) -> &Self::Expr {
                $crate::query::QueryRoot::expr(&self.bean)
            }
        }
    };
}
