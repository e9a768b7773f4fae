//! Moderately simple long-option parser that writes straight into your variables.
//!
//! You describe every option up front by handing the [`Registry`] a mutable reference to the
//! variable that should receive it, then call [`Registry::parse`] once. Values are converted
//! according to the variable's type and written in place.
//!
//! ```
//! use argbind::{Param, Parsed, Registry};
//!
//! let mut iterations = 0i32;
//! let mut seeds: Vec<f32> = Vec::new();
//! let mut name = String::new();
//! let mut help = false;
//!
//! let mut registry = Registry::new();
//! registry.register(Param::new(&mut iterations, "--iterations", "The number of iterations."))?;
//! registry.register(Param::list(&mut seeds, 3, "--seeds", "The seeds.").required(false))?;
//! registry.register(Param::new(&mut name, "--name", "The run name.").default_value("simulation"))?;
//! registry.register(Param::help(&mut help))?;
//!
//! let parsed = registry.parse(["--iterations=5", "--seeds", "1.0", "2.0", "3.0"])?;
//! assert_eq!(parsed, Parsed::Complete);
//! drop(registry);
//!
//! assert_eq!(iterations, 5);
//! assert_eq!(seeds, [1.0, 2.0, 3.0]);
//! assert_eq!(name, "simulation");
//! assert!(!help);
//! # Ok::<(), argbind::Error>(())
//! ```
//!
//! Syntax accepted on the command line:
//!
//! * `--opt value` and `--opt=value` are the same thing,
//! * values with spaces are double-quoted: `--name "Jane Q"`,
//! * boolean options take no value, being present makes them `true`,
//! * an option with arity `N` eats exactly the next `N` words, an unbounded option eats everything
//!   up to the end of the invocation, so it has to come last.

use std::{ffi::OsString, process};

mod help;
mod parser;
mod registry;
mod value;

pub use crate::{
    parser::Parser,
    registry::{Arity, Descriptor, Param, Parsed, Registry},
    value::{Element, Kind, Value},
};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong while registering options or parsing an invocation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A word in option position does not match any registered long phrase.
    #[error("Unrecognized option '{0}' in invocation")]
    UnknownOption(String),
    /// A default value could not be converted to the option's type.
    #[error("Unrecognized default value for option '{long_phrase}': '{value}'")]
    InvalidDefaultValue { long_phrase: String, value: String },
    /// A value word could not be converted to the option's type.
    #[error(
        "Error in argument (expected type {expected}): {text}. \
         Options which expect infinite arguments should be last"
    )]
    ValueConversionFailure { expected: Kind, text: String },
    /// A required option was never given all of its values.
    #[error("Option '{long_phrase}' required, and not found, or incomplete")]
    MissingRequiredOption { long_phrase: String },
    /// A fixed-arity option was registered with zero values.
    #[error("Option '{long_phrase}' must take at least one argument")]
    ZeroArity { long_phrase: String },
    #[error("Can't parse arguments, invalid utf8: {0:?}")]
    NonUtf8Argument(OsString),
}

impl Error {
    /// Whether the error comes from registration rather than from parsing an invocation.
    pub fn is_config(&self) -> bool {
        matches!(self, Error::InvalidDefaultValue { .. } | Error::ZeroArity { .. })
    }

    /// Prints the error to stderr and terminates the process with a non-zero status.
    pub fn exit(self) -> ! {
        eprintln!("{self}");
        process::exit(1)
    }
}
