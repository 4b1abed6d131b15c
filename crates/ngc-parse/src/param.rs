//! Parameter references and assignments.
//!
//! References (`#5`, `#[4+1]`, `#<probe>`) read the *committed* tables,
//! so a value assigned earlier on the same line is not visible yet.
//! Assignments write the *pending* tables; the line finalizer commits
//! them. Named parameters are case-insensitive, so keys are folded to
//! lowercase on both read and write.

use ngc_util::{Error, Number, Result};

use crate::{LineParser, Setting};

impl<'a> LineParser<'a> {
    /// Dispatches a `#` reference to the numeric or named form.
    pub(crate) fn parameter_value(&mut self) -> Result<Number> {
        if self.cursor.peek_char(1) == '<' && self.dialect.features().named_parameters {
            self.named_parameter()
        } else {
            self.numeric_parameter()
        }
    }

    /// `#` followed by an integer or a bracketed expression; the result
    /// indexes the committed numeric table.
    pub(crate) fn numeric_parameter(&mut self) -> Result<Number> {
        self.cursor.skip_blanks();
        self.expect_char('#', "expected '#'")?;
        let index = self.parameter_index()?;
        self.state.parameter(index)
    }

    /// `#<name>`; the lowercase-folded name indexes the committed named
    /// table. Only available when the dialect enables named parameters.
    pub(crate) fn named_parameter(&mut self) -> Result<Number> {
        self.cursor.skip_blanks();
        if !self.dialect.features().named_parameters {
            return Err(self.error("named parameters are not available in this dialect"));
        }
        self.expect_char('#', "expected '#'")?;
        self.expect_char('<', "expected '<'")?;
        let name = self.parameter_name()?;
        self.state.named_parameter(&name)
    }

    /// A line-level assignment: `#i = value` or `#<name> = value`.
    /// Writes the pending table and reports the assignment for the
    /// line's record.
    pub(crate) fn parameter_setting(&mut self) -> Result<Setting> {
        self.expect_char('#', "expected '#'")?;

        if self.cursor.current_char() == '<' && self.dialect.features().named_parameters {
            self.cursor.advance();
            let name = self.parameter_name()?;
            self.cursor.skip_blanks();
            self.expect_char('=', "expected '=' after parameter")?;
            let value = self.real_value()?;
            self.state.set_named_parameter(&name, value);
            Ok(Setting::Named(name, value))
        } else {
            let index = self
                .try_integer()?
                .ok_or_else(|| self.error("expected a parameter index"))?;
            self.cursor.skip_blanks();
            self.expect_char('=', "expected '=' after parameter")?;
            let value = self.real_value()?;
            self.state.set_parameter(index, value);
            Ok(Setting::Numeric(index, value))
        }
    }

    /// The index of a numeric parameter. An expression index must
    /// evaluate to an integer-valued number.
    fn parameter_index(&mut self) -> Result<i64> {
        self.cursor.skip_blanks();
        if self.cursor.current_char() == '[' {
            let value = self.expression()?;
            value
                .as_integer()
                .ok_or(Error::ExpectedInteger(value.as_f64()))
        } else {
            self.try_integer()?
                .ok_or_else(|| self.error("expected a parameter index"))
        }
    }

    /// The characters between `#<` and `>`, folded to lowercase.
    fn parameter_name(&mut self) -> Result<String> {
        let mut name = String::new();
        loop {
            if self.cursor.is_at_end() {
                return Err(self.error("unterminated parameter name"));
            }
            let c = self.cursor.current_char();
            self.cursor.advance();
            if c == '>' {
                break;
            }
            name.push(c);
        }
        if name.is_empty() {
            return Err(self.error("empty parameter name"));
        }
        Ok(name.to_lowercase())
    }
}
