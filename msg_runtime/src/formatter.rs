/* Text rendering for messages - one "name: value" line per set value.
   Repeated fields emit one line per element; unset singular fields and empty
   repeated fields are skipped. Output is for humans and logs, it is not
   parsed back. */

use crate::value::Value;
use std::fmt::{self, Write};

/* Scalars that know how to render themselves in message text */
pub trait TextScalar {
    fn write_text<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result;
}

impl TextScalar for str {
    fn write_text<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        write!(out, "{:?}", self)
    }
}

impl TextScalar for String {
    fn write_text<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        self.as_str().write_text(out)
    }
}

impl TextScalar for [u8] {
    fn write_text<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        write!(out, "b\"{}\"", self.escape_ascii())
    }
}

impl TextScalar for Vec<u8> {
    fn write_text<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        self.as_slice().write_text(out)
    }
}

macro_rules! impl_text_scalar_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TextScalar for $ty {
                fn write_text<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
                    write!(out, "{}", self)
                }
            }
        )*
    };
}

impl_text_scalar_display!(bool, i32, i64, u32, u64, f32, f64);

impl TextScalar for Value {
    fn write_text<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        match self {
            Value::String(v) => v.write_text(out),
            Value::Bool(v) => v.write_text(out),
            Value::I32(v) => v.write_text(out),
            Value::I64(v) => v.write_text(out),
            Value::U32(v) => v.write_text(out),
            Value::U64(v) => v.write_text(out),
            Value::F32(v) => v.write_text(out),
            Value::F64(v) => v.write_text(out),
            Value::Bytes(v) => v.write_text(out),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_text(f)
    }
}

pub struct TextWriter<'a, W: Write + ?Sized> {
    out: &'a mut W,
}

impl<'a, W: Write + ?Sized> TextWriter<'a, W> {
    pub fn new(out: &'a mut W) -> Self {
        Self { out }
    }

    pub fn singular<T: TextScalar + ?Sized>(&mut self, name: &str, value: Option<&T>) -> fmt::Result {
        match value {
            Some(value) => self.line(name, value),
            None => Ok(()),
        }
    }

    pub fn repeated<T: TextScalar>(&mut self, name: &str, values: &[T]) -> fmt::Result {
        for value in values {
            self.line(name, value)?;
        }
        Ok(())
    }

    fn line<T: TextScalar + ?Sized>(&mut self, name: &str, value: &T) -> fmt::Result {
        write!(self.out, "{}: ", name)?;
        value.write_text(&mut *self.out)?;
        self.out.write_char('\n')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strings_are_quoted_and_escaped() {
        let mut out = String::new();
        TextWriter::new(&mut out)
            .repeated("tags", &["plain".to_string(), "say \"hi\"".to_string()])
            .unwrap();
        assert_eq!(out, "tags: \"plain\"\ntags: \"say \\\"hi\\\"\"\n");
    }

    #[test]
    fn unset_and_empty_fields_are_skipped() {
        let mut out = String::new();
        let mut writer = TextWriter::new(&mut out);
        writer.singular::<u64>("id", None).unwrap();
        writer.repeated::<String>("tags", &[]).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn bytes_render_as_escaped_literal() {
        assert_eq!(Value::Bytes(vec![b'a', 0]).to_string(), "b\"a\\x00\"");
        assert_eq!(Value::I64(-3).to_string(), "-3");
    }
}
