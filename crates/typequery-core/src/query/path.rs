use crate::error::PathError;
use std::{borrow::Cow, fmt};

///
/// PropertyPath
///
/// Resolved, dotted identifier of a scalar attribute on the entity graph.
/// The effective path is computed once at construction: `name`, or
/// `prefix.name` when a non-empty prefix is supplied.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct PropertyPath {
    name: &'static str,
    prefix: Option<String>,
    resolved: Cow<'static, str>,
}

impl PropertyPath {
    /// Path for a property on the query root itself.
    ///
    /// Panics on an empty name or one containing whitespace, `.` or `#`; in
    /// a `const` context this is a compile error.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        let name = Self::checked_name(name);

        Self {
            name,
            prefix: None,
            resolved: Cow::Borrowed(name),
        }
    }

    /// Path for a property reached through a dotted prefix.
    ///
    /// Same panics as [`PropertyPath::new`], and panics on a prefix with
    /// whitespace, `#`, an empty segment, or a leading or trailing `.`.
    /// An empty prefix is ignored.
    #[must_use]
    pub fn with_prefix(name: &'static str, prefix: impl Into<String>) -> Self {
        let path = Self::new(name);
        let prefix = prefix.into();
        assert!(
            !invalid_prefix(&prefix),
            "property prefix must be dot-separated names without whitespace or '#'"
        );

        path.prefixed(prefix)
    }

    /// Fallible constructor for names that are not known at compile time.
    pub fn try_new(name: &'static str) -> Result<Self, PathError> {
        validate_name(name)?;

        Ok(Self::new(name))
    }

    /// Fallible prefixed constructor.
    pub fn try_with_prefix(
        name: &'static str,
        prefix: impl Into<String>,
    ) -> Result<Self, PathError> {
        let path = Self::try_new(name)?;
        let prefix = prefix.into();
        if invalid_prefix(&prefix) {
            return Err(PathError::InvalidPrefix { prefix });
        }

        Ok(path.prefixed(prefix))
    }

    /// Check a property name and hand it back unchanged.
    ///
    /// Generated query beans evaluate this in a `const` item, so a bad name
    /// stops the build instead of producing a malformed path.
    #[must_use]
    pub const fn checked_name(name: &'static str) -> &'static str {
        assert!(!name.is_empty(), "property name must not be empty");
        assert!(
            invalid_char(name).is_none(),
            "property name must not contain whitespace, '.' or '#'"
        );

        name
    }

    /// Check a path prefix and hand it back unchanged. `""` is accepted.
    #[must_use]
    pub const fn checked_prefix(prefix: &'static str) -> &'static str {
        assert!(
            !invalid_prefix(prefix),
            "property prefix must be dot-separated names without whitespace or '#'"
        );

        prefix
    }

    /// Strip a raw identifier marker: `r#type` names the property `type`.
    #[must_use]
    pub const fn unraw(ident: &'static str) -> &'static str {
        let bytes = ident.as_bytes();
        if bytes.len() <= 2 || bytes[0] != b'r' || bytes[1] != b'#' {
            return ident;
        }

        let (_, rest) = bytes.split_at(2);
        match std::str::from_utf8(rest) {
            Ok(name) => name,
            Err(_) => ident,
        }
    }

    fn prefixed(self, prefix: String) -> Self {
        if prefix.is_empty() {
            return self;
        }

        let resolved = format!("{prefix}.{}", self.name);

        Self {
            name: self.name,
            prefix: Some(prefix),
            resolved: Cow::Owned(resolved),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// The effective dotted path handed to the accumulator.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.resolved
    }
}

impl AsRef<str> for PropertyPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ----------------------------------------------------------------------
// Internal helpers (not public API)
// ----------------------------------------------------------------------

fn validate_name(name: &str) -> Result<(), PathError> {
    if name.is_empty() {
        return Err(PathError::EmptyName);
    }

    if let Some(byte) = invalid_char(name) {
        return Err(PathError::InvalidName {
            name: name.to_string(),
            ch: char::from(byte),
        });
    }

    Ok(())
}

const fn invalid_char(name: &str) -> Option<u8> {
    let bytes = name.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if b == b'.' || b == b'#' || b.is_ascii_whitespace() {
            return Some(b);
        }
        i += 1;
    }

    None
}

// Every `.`-separated segment must be non-empty and free of whitespace and `#`.
const fn invalid_prefix(prefix: &str) -> bool {
    let bytes = prefix.as_bytes();
    if bytes.is_empty() {
        return false;
    }

    let mut prev = b'.';
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if b == b'#' || b.is_ascii_whitespace() || (b == b'.' && prev == b'.') {
            return true;
        }
        prev = b;
        i += 1;
    }

    prev == b'.'
}

///
/// TESTS
///
