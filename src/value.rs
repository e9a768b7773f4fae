use std::fmt;

use crate::{Error, Result};

/// Type tag of a registered option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Bool,
    Int,
    UInt,
    Float,
    Double,
    Long,
    Char,
    String,
}

impl Kind {
    pub fn name(self) -> &'static str {
        match self {
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::UInt => "unsigned int",
            Kind::Float => "float",
            Kind::Double => "double",
            Kind::Long => "long",
            Kind::Char => "char",
            Kind::String => "string",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A type an option can be bound to.
///
/// Implemented for `bool`, `i32`, `u32`, `f32`, `f64`, `i64`, `char` and `String` only:
///
/// ```compile_fail
/// struct Port(u16);
///
/// impl argbind::Value for Port {
///     const KIND: argbind::Kind = argbind::Kind::Bool;
///
///     fn from_word(word: &str) -> Option<Self> {
///         word.parse().ok().map(Port)
///     }
/// }
/// ```
pub trait Value: sealed::Sealed + Sized {
    const KIND: Kind;

    /// Converts a single command line word, `None` if the word is not a legal `Self`.
    fn from_word(word: &str) -> Option<Self>;
}

/// Values that can be collected by options taking more than one word.
///
/// Everything but `bool`: flags never take a value on the command line.
pub trait Element: Value {}

macro_rules! from_str_values {
    ($($ty:ty => $kind:ident),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        impl Value for $ty {
            const KIND: Kind = Kind::$kind;

            fn from_word(word: &str) -> Option<Self> {
                word.parse().ok()
            }
        }

        impl Element for $ty {}
    )*};
}

from_str_values! {
    i32 => Int,
    u32 => UInt,
    f32 => Float,
    f64 => Double,
    i64 => Long,
}

impl sealed::Sealed for bool {}

impl Value for bool {
    const KIND: Kind = Kind::Bool;

    fn from_word(word: &str) -> Option<Self> {
        if word.eq_ignore_ascii_case("true") {
            Some(true)
        } else if word.eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            None
        }
    }
}

impl sealed::Sealed for char {}

impl Value for char {
    const KIND: Kind = Kind::Char;

    fn from_word(word: &str) -> Option<Self> {
        word.chars().next()
    }
}

impl Element for char {}

impl sealed::Sealed for String {}

impl Value for String {
    const KIND: Kind = Kind::String;

    fn from_word(word: &str) -> Option<Self> {
        Some(word.to_string())
    }
}

impl Element for String {}

pub(crate) fn convert<T: Value>(word: &str) -> Result<T> {
    T::from_word(word)
        .ok_or_else(|| Error::ValueConversionFailure { expected: T::KIND, text: word.to_string() })
}

/// Type-erased write target of a descriptor.
pub(crate) trait Destination {
    fn kind(&self) -> Kind;
    fn bind(&mut self, word: &str) -> Result<()>;
}

pub(crate) struct Scalar<'a, T>(pub(crate) &'a mut T);

/// Appends every value, or keeps only the last one when `replace` is set.
pub(crate) struct Sequence<'a, T> {
    pub(crate) values: &'a mut Vec<T>,
    pub(crate) replace: bool,
}

impl<T: Value> Destination for Scalar<'_, T> {
    fn kind(&self) -> Kind {
        T::KIND
    }

    fn bind(&mut self, word: &str) -> Result<()> {
        *self.0 = convert(word)?;
        Ok(())
    }
}

impl<T: Element> Destination for Sequence<'_, T> {
    fn kind(&self) -> Kind {
        T::KIND
    }

    fn bind(&mut self, word: &str) -> Result<()> {
        let value = convert(word)?;
        if self.replace {
            self.values.clear();
        }
        self.values.push(value);
        Ok(())
    }
}
