use std::fmt::{self, Write};

use super::RenderContext;
use crate::{value::iso_8601, BuildError, ParamMap, ParamValue};

impl RenderContext<'_> {
    /// Writes `key: value` pairs separated by a single space, as used by both argument
    /// lists and input objects.
    pub(super) fn write_entries(&mut self, buffer: &mut String, entries: &ParamMap) -> Result<(), BuildError> {
        let mut entries = entries.iter().peekable();

        while let Some((key, value)) = entries.next() {
            write!(buffer, "{key}: ")?;
            self.write_value(buffer, value)?;

            if entries.peek().is_some() {
                buffer.push(' ');
            }
        }

        Ok(())
    }

    /// Empty lists and objects are written as nothing, never as empty brackets.
    fn write_value(&mut self, buffer: &mut String, value: &ParamValue) -> Result<(), BuildError> {
        match value {
            ParamValue::Null => buffer.push_str("null"),
            ParamValue::Boolean(value) => write!(buffer, "{value}")?,
            ParamValue::Int(value) => write!(buffer, "{value}")?,
            ParamValue::Float(value) => write_float(buffer, *value)?,
            ParamValue::String(value) => self.write_string(buffer, value)?,
            ParamValue::DateTime(value) => write!(buffer, "\"{}\"", iso_8601(value))?,
            ParamValue::List(items) if !items.is_empty() => {
                self.enter()?;
                buffer.push_str("[ ");

                let mut items = items.iter().peekable();

                while let Some(item) = items.next() {
                    self.write_value(buffer, item)?;

                    if items.peek().is_some() {
                        buffer.push_str(", ");
                    }
                }

                buffer.push_str(" ]");
                self.leave();
            }
            ParamValue::Object(entries) if !entries.is_empty() => {
                self.enter()?;
                buffer.push_str("{ ");
                self.write_entries(buffer, entries)?;
                buffer.push_str(" }");
                self.leave();
            }
            ParamValue::List(_) | ParamValue::Object(_) => (),
        }

        Ok(())
    }

    fn write_string(&self, buffer: &mut String, value: &str) -> Result<(), BuildError> {
        if self.config.escape_strings {
            write_quoted(buffer, value)?;
        } else {
            buffer.push('"');
            buffer.push_str(value);
            buffer.push('"');
        }

        Ok(())
    }
}

/// Same notation as ECMAScript number to string: exponent form below `1e-6` and from `1e21`
/// on, `-0` as `0`.
fn write_float(out: &mut impl Write, value: f64) -> fmt::Result {
    if value == 0.0 {
        return out.write_char('0');
    }

    if value.is_infinite() {
        return out.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
    }

    let magnitude = value.abs();

    if !(1e-6..1e21).contains(&magnitude) && !value.is_nan() {
        let formatted = format!("{value:e}");

        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => write!(out, "{mantissa}e+{exponent}"),
            _ => out.write_str(&formatted),
        };
    }

    write!(out, "{value}")
}

pub(super) fn write_quoted(out: &mut impl Write, s: &str) -> fmt::Result {
    out.write_char('"')?;
    for c in s.chars() {
        match c {
            '\r' => out.write_str("\\r"),
            '\n' => out.write_str("\\n"),
            '\t' => out.write_str("\\t"),
            '\\' => out.write_str("\\\\"),
            '"' => out.write_str("\\\""),
            c if c.is_control() => write!(out, "\\u{:04X}", c as u32),
            c => out.write_char(c),
        }?
    }
    out.write_char('"')
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{write_float, write_quoted};

    fn quoted(s: &str) -> String {
        let mut out = String::new();
        write_quoted(&mut out, s).unwrap();
        out
    }

    #[test]
    fn escapes() {
        assert_eq!(quoted("plain"), r#""plain""#);
        assert_eq!(quoted(r#"say "hi""#), r#""say \"hi\"""#);
        assert_eq!(quoted("a\\b"), r#""a\\b""#);
        assert_eq!(quoted("line\nbreak\ttab\r"), r#""line\nbreak\ttab\r""#);
        assert_eq!(quoted("\u{1}"), r#""\u0001""#);
    }

    #[rstest]
    #[case(1.5, "1.5")]
    #[case(2.0, "2")]
    #[case(-0.0, "0")]
    #[case(0.000001, "0.000001")]
    #[case(1e-7, "1e-7")]
    #[case(-2.5e-8, "-2.5e-8")]
    #[case(1e20, "100000000000000000000")]
    #[case(1e21, "1e+21")]
    #[case(1.5e22, "1.5e+22")]
    #[case(f64::INFINITY, "Infinity")]
    #[case(f64::NAN, "NaN")]
    fn floats(#[case] value: f64, #[case] expected: &str) {
        let mut out = String::new();
        write_float(&mut out, value).unwrap();
        assert_eq!(out, expected);
    }
}
