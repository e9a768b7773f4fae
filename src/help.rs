use std::fmt::Write;

use crate::{Arity, Kind, Registry};

macro_rules! w {
    ($($tt:tt)*) => {
        {
            let _ = write!($($tt)*);
        }
    };
}

const INDENT: &str = "    ";

pub(crate) fn render(registry: &Registry<'_>) -> String {
    let mut buf = String::new();
    for descriptor in registry.iter() {
        w!(buf, "{}\n", descriptor.long_phrase());
        w!(buf, "{INDENT}{}\n", descriptor.help_phrase());
        if descriptor.kind() != Kind::Bool {
            let (arity, kind) = (descriptor.arity(), descriptor.kind());
            let plural = if arity == Arity::Exactly(1) { "" } else { "s" };
            w!(buf, "{INDENT}{arity} argument{plural} of type {kind}.\n");
        }
        if !descriptor.is_required() {
            w!(buf, "{INDENT}default: '{}'\n", descriptor.default_value());
        }
    }
    buf
}
