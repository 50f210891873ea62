use crate::descriptor::ConfigValue;
use std::fmt;

const MAX_DEPTH: usize = 2;
const MAX_ITEMS: usize = 5;
const MAX_STRING_CHARS: usize = 100;

/// Renders a [`ConfigValue`] for use in a diagnostic message.
///
/// Rendering never fails and is bounded: nested lists and maps are elided
/// past a fixed depth, long collections are truncated, long strings are
/// clipped, and opaque values (callables, model objects) render as a short
/// tag rather than their contents.
pub struct SafeDisplay<'a> {
    depth: usize,
    value: &'a ConfigValue,
}
impl<'a> SafeDisplay<'a> {
    pub fn new(value: &'a ConfigValue) -> Self {
        Self {
            depth: 0,
            value,
        }
    }

    fn nested(&self, value: &'a ConfigValue) -> Self {
        Self {
            depth: self.depth + 1,
            value,
        }
    }

    fn fmt_items<I, T>(
        &self,
        f: &mut fmt::Formatter<'_>,
        len: usize,
        items: I,
        mut fmt_item: impl FnMut(&mut fmt::Formatter<'_>, T) -> fmt::Result,
    ) -> fmt::Result
    where
        I: Iterator<Item = T>,
    {
        for (idx, item) in items.take(MAX_ITEMS).enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            fmt_item(f, item)?;
        }
        if len > MAX_ITEMS {
            write!(f, ", ...{} more", len - MAX_ITEMS)?;
        }
        Ok(())
    }
}
impl fmt::Display for SafeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            ConfigValue::Null => f.write_str("null"),
            ConfigValue::Boolean(bool) => write!(f, "{bool}"),
            ConfigValue::Int(int) => write!(f, "{int}"),
            ConfigValue::Float(float) => write!(f, "{float:?}"),
            ConfigValue::String(str) if str.is_empty() =>
                f.write_str("(empty string)"),
            ConfigValue::String(str) => {
                if str.chars().count() > MAX_STRING_CHARS {
                    let clipped: String = str.chars().take(MAX_STRING_CHARS).collect();
                    write!(f, "{clipped:?}...")
                } else {
                    write!(f, "{str:?}")
                }
            },
            ConfigValue::List(_) | ConfigValue::Map(_) if self.depth >= MAX_DEPTH =>
                f.write_str(if matches!(self.value, ConfigValue::List(_)) {
                    "[...]"
                } else {
                    "{...}"
                }),
            ConfigValue::List(list) => {
                f.write_str("[")?;
                self.fmt_items(f, list.len(), list.iter(), |f, item| {
                    write!(f, "{}", self.nested(item))
                })?;
                f.write_str("]")
            },
            ConfigValue::Map(descriptor) => {
                f.write_str("{")?;
                self.fmt_items(f, descriptor.len(), descriptor.iter(), |f, (key, item)| {
                    write!(f, "{key}: {}", self.nested(item))
                })?;
                f.write_str("}")
            },
            ConfigValue::Type(type_ref) => write!(f, "{type_ref}"),
            ConfigValue::Callable(callable) =>
                write!(f, "<{} function>", callable.kind_name()),
            ConfigValue::Field(field) =>
                write!(f, "<field definition {:?}>", field.name()),
            ConfigValue::Argument(arg) =>
                write!(f, "<argument {:?}>", arg.name()),
        }
    }
}

/// Shorthand for `SafeDisplay::new(value).to_string()`.
pub fn print_safe(value: &ConfigValue) -> String {
    SafeDisplay::new(value).to_string()
}
