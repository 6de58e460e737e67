//! Helper for the `{Name: value, ..}` [`fmt::Display`] form shared by request types, which only
//! lists members that are present.
use std::fmt;

#[must_use = "must call `finish` to close the braces"]
pub struct DisplayFields<'a, 'b: 'a> {
    fmt: &'a mut fmt::Formatter<'b>,
    result: fmt::Result,
    has_fields: bool,
}

pub fn display_fields<'a, 'b: 'a>(fmt: &'a mut fmt::Formatter<'b>) -> DisplayFields<'a, 'b> {
    let result = fmt.write_str("{");
    DisplayFields {
        fmt,
        result,
        has_fields: false,
    }
}

impl DisplayFields<'_, '_> {
    fn write_name(&mut self, name: &str) -> fmt::Result {
        if self.has_fields {
            self.fmt.write_str(", ")?;
        }
        self.has_fields = true;

        self.fmt.write_str(name)?;
        self.fmt.write_str(": ")
    }

    pub fn field<V: fmt::Display + ?Sized>(&mut self, name: &str, value: Option<&V>) -> &mut Self {
        if let Some(value) = value {
            self.result = self
                .result
                .and_then(|_| self.write_name(name))
                .and_then(|_| fmt::Display::fmt(value, self.fmt));
        }
        self
    }

    /// Writes a list member as `[a, b, ..]`.
    pub fn list<V: fmt::Display>(&mut self, name: &str, values: Option<&[V]>) -> &mut Self {
        if let Some(values) = values {
            self.result = self.result.and_then(|_| {
                self.write_name(name)?;
                self.fmt.write_str("[")?;

                for (idx, value) in values.iter().enumerate() {
                    if idx > 0 {
                        self.fmt.write_str(", ")?;
                    }
                    fmt::Display::fmt(value, self.fmt)?;
                }

                self.fmt.write_str("]")
            });
        }
        self
    }

    pub fn finish(&mut self) -> fmt::Result {
        self.result.and_then(|_| self.fmt.write_str("}"))
    }
}
