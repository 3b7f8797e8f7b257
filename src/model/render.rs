//! `name=value` text rendering of model fields.

use std::fmt;

use chrono::NaiveDate;

use super::AdditionalFields;

/// A value that can appear on the right-hand side of `name=value`.
pub trait FieldValue {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Some(value) => value.render(f),
            None => f.write_str("null"),
        }
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            item.render(f)?;
        }
        f.write_str("]")
    }
}

impl FieldValue for AdditionalFields {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        f.write_str("}")
    }
}

macro_rules! render_with_display {
    ($($ty:ty),+) => {
        $(
            impl FieldValue for $ty {
                fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )+
    };
}

render_with_display!(i32, String, NaiveDate);
