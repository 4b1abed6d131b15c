//! Numeric literal scanning.
//!
//! G-code permits blanks *inside* a literal: `0. 12 34` is the number
//! `0.1234`. Digits, spaces and tabs are consumed as one run and the
//! blanks are stripped before conversion. A leading `-` binds to the
//! literal itself.

use ngc_util::{Number, Result};

use crate::LineParser;

impl<'a> LineParser<'a> {
    /// `number <- float / integer`.
    pub(crate) fn number(&mut self) -> Result<Number> {
        self.cursor.skip_blanks();
        let negative = self.cursor.match_char('-');
        let sign = if negative { "-" } else { "" };
        let int_digits = self.digit_run();

        if self.cursor.match_char('.') {
            let frac_digits = self.digit_run();
            if frac_digits.is_empty() {
                return Err(self.error("expected digits after decimal point"));
            }
            let text = format!("{sign}{int_digits}.{frac_digits}");
            let value = text
                .parse::<f64>()
                .map_err(|_| self.error(format!("invalid number '{text}'")))?;
            Ok(Number::Float(value))
        } else {
            if int_digits.is_empty() {
                return Err(self.error("expected a number"));
            }
            let text = format!("{sign}{int_digits}");
            let value = text
                .parse::<i64>()
                .map_err(|_| self.error(format!("integer literal '{text}' out of range")))?;
            Ok(Number::Int(value))
        }
    }

    /// An integer, or `None` (cursor restored) when no digits follow.
    pub(crate) fn try_integer(&mut self) -> Result<Option<i64>> {
        let mark = self.cursor.position();
        self.cursor.skip_blanks();
        let negative = self.cursor.match_char('-');
        let digits = self.digit_run();
        if digits.is_empty() {
            self.cursor.restore(mark);
            return Ok(None);
        }
        let text = format!("{}{digits}", if negative { "-" } else { "" });
        let value = text
            .parse::<i64>()
            .map_err(|_| self.error(format!("integer literal '{text}' out of range")))?;
        Ok(Some(value))
    }

    /// Consumes digits, spaces and tabs; returns the digits only.
    fn digit_run(&mut self) -> String {
        let mut digits = String::new();
        loop {
            match self.cursor.current_char() {
                c @ '0'..='9' => {
                    digits.push(c);
                    self.cursor.advance();
                }
                ' ' | '\t' => self.cursor.advance(),
                _ => break,
            }
        }
        digits
    }
}
