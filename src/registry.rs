use std::{collections::BTreeMap, fmt};

use crate::{
    help,
    value::{Destination, Element, Kind, Scalar, Sequence, Value},
    Error, Parser, Result,
};

/// Long phrase which stops parsing as soon as it is seen.
pub(crate) const HELP: &str = "--help";

/// How many value words an option consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    /// Everything up to the end of the invocation.
    Unbounded,
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exactly(n) => write!(f, "{n}"),
            Arity::Unbounded => f.write_str("any number of"),
        }
    }
}

/// What a successful [`Registry::parse`] ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parsed {
    /// Every word was consumed and all required options are set.
    Complete,
    /// `--help` was seen; the rest of the invocation was skipped and nothing was validated.
    Help,
}

/// Registration request for one option, see [`Registry::register`].
pub struct Param<'a> {
    destination: Box<dyn Destination + 'a>,
    long_phrase: String,
    help_phrase: String,
    arity: Arity,
    required: Option<bool>,
    default_value: String,
}

impl<'a> Param<'a> {
    /// Option taking exactly one value, required unless it gets a default.
    pub fn new<T: Value + 'a>(
        destination: &'a mut T,
        long_phrase: impl Into<String>,
        help_phrase: impl Into<String>,
    ) -> Self {
        Param::with_destination(
            Box::new(Scalar(destination)),
            Arity::Exactly(1),
            long_phrase,
            help_phrase,
        )
    }

    /// Option taking exactly `arity` values, appended to `destination` in order.
    ///
    /// With an arity of 1 the list behaves like a single value: a default is written at
    /// registration and a value from the command line replaces the contents.
    pub fn list<T: Element + 'a>(
        destination: &'a mut Vec<T>,
        arity: usize,
        long_phrase: impl Into<String>,
        help_phrase: impl Into<String>,
    ) -> Self {
        Param::with_destination(
            Box::new(Sequence { values: destination, replace: arity == 1 }),
            Arity::Exactly(arity),
            long_phrase,
            help_phrase,
        )
    }

    /// Option swallowing every remaining word of the invocation, words that look like other
    /// options included. It has to be the last option given.
    pub fn unbounded<T: Element + 'a>(
        destination: &'a mut Vec<T>,
        long_phrase: impl Into<String>,
        help_phrase: impl Into<String>,
    ) -> Self {
        Param::with_destination(
            Box::new(Sequence { values: destination, replace: false }),
            Arity::Unbounded,
            long_phrase,
            help_phrase,
        )
    }

    /// The conventional `--help` flag.
    pub fn help(destination: &'a mut bool) -> Self {
        Param::new(destination, HELP, "Prints this help message.")
    }

    /// Default applied at registration. Makes the option optional unless [`Param::required`]
    /// says otherwise.
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self
    }

    /// Overrides whether the option must appear. Flags are never required.
    pub fn required(mut self, yes: bool) -> Self {
        self.required = Some(yes);
        self
    }

    fn with_destination(
        destination: Box<dyn Destination + 'a>,
        arity: Arity,
        long_phrase: impl Into<String>,
        help_phrase: impl Into<String>,
    ) -> Self {
        Param {
            destination,
            long_phrase: long_phrase.into(),
            help_phrase: help_phrase.into(),
            arity,
            required: None,
            default_value: String::new(),
        }
    }
}

/// A registered option together with its write target.
pub struct Descriptor<'a> {
    kind: Kind,
    destination: Box<dyn Destination + 'a>,
    long_phrase: String,
    help_phrase: String,
    arity: Arity,
    required: bool,
    is_set: bool,
    default_value: String,
}

impl Descriptor<'_> {
    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn long_phrase(&self) -> &str {
        &self.long_phrase
    }

    pub fn help_phrase(&self) -> &str {
        &self.help_phrase
    }

    pub fn arity(&self) -> Arity {
        self.arity
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Whether the option received all of its values.
    pub fn is_set(&self) -> bool {
        self.is_set
    }

    pub fn default_value(&self) -> &str {
        &self.default_value
    }

    fn seed(&mut self, value: &str) -> Result<()> {
        self.destination.bind(value).map_err(|_| Error::InvalidDefaultValue {
            long_phrase: self.long_phrase.clone(),
            value: value.to_string(),
        })
    }
}

impl fmt::Debug for Descriptor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descriptor")
            .field("kind", &self.kind)
            .field("long_phrase", &self.long_phrase)
            .field("arity", &self.arity)
            .field("required", &self.required)
            .field("is_set", &self.is_set)
            .field("default_value", &self.default_value)
            .finish()
    }
}

/// Values still owed to the option being read.
enum Remaining {
    Values(usize),
    Unbounded,
}

/// Table of expected options, keyed by long phrase.
///
/// The registry borrows every destination mutably for `'a`; drop it (or just stop using it) to
/// read the parsed values. It is meant to parse a single invocation: parsing twice re-appends into
/// list destinations.
#[derive(Default)]
pub struct Registry<'a> {
    index: BTreeMap<String, usize>,
    descriptors: Vec<Descriptor<'a>>,
}

impl<'a> Registry<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an option, replacing any earlier one with the same long phrase.
    ///
    /// Flags and single-valued options with a default are written immediately, so the variable
    /// holds a legal value even if the option never shows up.
    pub fn register(&mut self, param: Param<'a>) -> Result<()> {
        let Param { destination, long_phrase, help_phrase, arity, required, default_value } = param;
        let kind = destination.kind();
        let mut descriptor = Descriptor {
            kind,
            destination,
            long_phrase,
            help_phrase,
            arity,
            required: required.unwrap_or(default_value.is_empty()),
            is_set: false,
            default_value,
        };

        if kind == Kind::Bool {
            descriptor.arity = Arity::Exactly(1);
            descriptor.required = false;
            descriptor.is_set = true;
            let value = match descriptor.default_value.as_str() {
                "" => "false".to_string(),
                it => it.to_string(),
            };
            descriptor.seed(&value)?;
        } else {
            if descriptor.arity == Arity::Exactly(0) {
                return Err(Error::ZeroArity { long_phrase: descriptor.long_phrase });
            }
            if descriptor.arity == Arity::Exactly(1) && !descriptor.default_value.is_empty() {
                let value = descriptor.default_value.clone();
                descriptor.seed(&value)?;
            }
        }

        log::debug!("registered {descriptor:?}");
        match self.index.get(&descriptor.long_phrase) {
            Some(&i) => {
                log::warn!(
                    "option `{}` registered twice, keeping the last one",
                    descriptor.long_phrase
                );
                self.descriptors[i] = descriptor;
            }
            None => {
                self.index.insert(descriptor.long_phrase.clone(), self.descriptors.len());
                self.descriptors.push(descriptor);
            }
        }
        Ok(())
    }

    pub fn get(&self, long_phrase: &str) -> Option<&Descriptor<'a>> {
        self.index.get(long_phrase).map(|&i| &self.descriptors[i])
    }

    /// Registered options in ascending long phrase order.
    pub fn iter(&self) -> impl Iterator<Item = &Descriptor<'a>> + '_ {
        self.index.values().map(move |&i| &self.descriptors[i])
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Parses an invocation (program name excluded) and writes every value into its destination.
    pub fn parse<I, S>(&mut self, args: I) -> Result<Parsed>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.parse_words(&Parser::new(args))
    }

    /// Like [`Registry::parse`], with the arguments of the current process.
    pub fn parse_env(&mut self) -> Result<Parsed> {
        self.parse_words(&Parser::new_from_env()?)
    }

    pub fn render_help(&self) -> String {
        help::render(self)
    }

    fn parse_words(&mut self, p: &Parser) -> Result<Parsed> {
        let mut reading: Option<(usize, Remaining)> = None;
        for word in p.words() {
            match &mut reading {
                None => {
                    let &i = self
                        .index
                        .get(word)
                        .ok_or_else(|| Error::UnknownOption(word.to_string()))?;
                    let descriptor = &mut self.descriptors[i];
                    if descriptor.kind != Kind::Bool {
                        let remaining = match descriptor.arity {
                            Arity::Exactly(n) => Remaining::Values(n),
                            Arity::Unbounded => Remaining::Unbounded,
                        };
                        reading = Some((i, remaining));
                        continue;
                    }
                    descriptor.destination.bind("true")?;
                    log::debug!("flag `{word}` set");
                    if word == HELP {
                        return Ok(Parsed::Help);
                    }
                }
                Some((i, remaining)) => {
                    let descriptor = &mut self.descriptors[*i];
                    descriptor.destination.bind(word)?;
                    log::debug!("bound `{word}` to `{}`", descriptor.long_phrase);
                    let done = match remaining {
                        Remaining::Values(n) => {
                            *n -= 1;
                            *n == 0
                        }
                        // Satisfied from the first value on, and never done.
                        Remaining::Unbounded => {
                            descriptor.is_set = true;
                            false
                        }
                    };
                    if done {
                        descriptor.is_set = true;
                        reading = None;
                    }
                }
            }
        }

        for descriptor in self.iter() {
            if descriptor.required && !descriptor.is_set {
                return Err(Error::MissingRequiredOption {
                    long_phrase: descriptor.long_phrase.clone(),
                });
            }
        }
        Ok(Parsed::Complete)
    }
}
