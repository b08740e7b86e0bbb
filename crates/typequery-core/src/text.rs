use std::borrow::Cow;

///
/// TextValue
///
/// A strong type whose stored representation is text. `to_text` is the one
/// conversion from the domain type to its canonical text form; property
/// wrappers call it at their strongly-typed entry points only.
///

pub trait TextValue {
    fn to_text(&self) -> String;
}

impl TextValue for str {
    fn to_text(&self) -> String {
        self.to_string()
    }
}

impl TextValue for String {
    fn to_text(&self) -> String {
        self.clone()
    }
}

impl TextValue for Cow<'_, str> {
    fn to_text(&self) -> String {
        self.to_string()
    }
}

impl TextValue for char {
    fn to_text(&self) -> String {
        self.to_string()
    }
}

impl TextValue for ulid::Ulid {
    fn to_text(&self) -> String {
        self.to_string()
    }
}

impl<T: TextValue + ?Sized> TextValue for &T {
    fn to_text(&self) -> String {
        T::to_text(self)
    }
}

impl<T: TextValue + ?Sized> TextValue for Box<T> {
    fn to_text(&self) -> String {
        T::to_text(self)
    }
}

///
/// text_value!
///
/// Implement `TextValue` for a unit-variant enum, mapping each variant to
/// its stored text.
///
/// ```ignore
/// text_value!(Status { Active => "ACTIVE", Closed => "CLOSED" });
/// ```
///

#[macro_export]
macro_rules! text_value {
    ($ty:ty { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $crate::text::TextValue for $ty {
            fn to_text(&self) -> ::std::string::String {
                match self {
                    $(Self::$variant => ::std::string::String::from($text),)+
                }
            }
        }
    };
}

///
/// TESTS
///
