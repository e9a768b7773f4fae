use std::{env, ops::Range};

use crate::{Error, Result};

/// Re-tokenized view of an invocation.
///
/// The raw arguments are joined with single spaces, every `=` not escaped with a backslash becomes
/// a space, and the resulting line is split into words again. A word starting with `"` runs up to
/// the next unescaped `"`, so it may contain spaces; the quotes are not part of the word.
pub struct Parser {
    line: String,
    spans: Vec<Range<usize>>,
}

impl Parser {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut joined = String::new();
        for (i, arg) in args.into_iter().enumerate() {
            if i > 0 {
                joined.push(' ');
            }
            joined.push_str(arg.as_ref());
        }

        let line = unescaped_equals_to_spaces(&joined);
        let spans = scan(&line);
        log::debug!("tokenized `{line}` into {} words", spans.len());
        Self { line, spans }
    }

    /// Arguments of the current process, without the program name.
    pub fn new_from_env() -> Result<Self> {
        let args = env::args_os()
            .skip(1)
            .map(|arg| arg.into_string().map_err(Error::NonUtf8Argument))
            .collect::<Result<Vec<_>>>()?;
        Ok(Parser::new(args))
    }

    /// The working line the word ranges point into.
    pub fn line(&self) -> &str {
        &self.line
    }

    /// Half-open ranges of every word, left to right.
    pub fn spans(&self) -> &[Range<usize>] {
        &self.spans
    }

    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.spans.iter().map(move |span| &self.line[span.clone()])
    }
}

fn unescaped_equals_to_spaces(text: &str) -> String {
    let mut res = String::with_capacity(text.len());
    let mut prev = None;
    for c in text.chars() {
        if c == '=' && prev != Some('\\') {
            res.push(' ');
        } else {
            res.push(c);
        }
        prev = Some(c);
    }
    res
}

// All delimiters are ASCII, so byte offsets always land on char boundaries.
fn scan(line: &str) -> Vec<Range<usize>> {
    let bytes = line.as_bytes();
    let mut res = Vec::new();
    let mut at = 0;
    while at < bytes.len() {
        match bytes[at] {
            b' ' => at += 1,
            b'"' => {
                let start = at + 1;
                let end = (start..bytes.len())
                    .find(|&i| bytes[i] == b'"' && bytes[i - 1] != b'\\')
                    .unwrap_or(bytes.len());
                log::trace!("quoted word at {start}..{end}");
                res.push(start..end);
                at = end + 1;
            }
            _ => {
                let end =
                    bytes[at..].iter().position(|&b| b == b' ').map_or(bytes.len(), |i| at + i);
                log::trace!("word at {at}..{end}");
                res.push(at..end);
                at = end;
            }
        }
    }
    res
}
