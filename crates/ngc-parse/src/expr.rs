//! Expression parsing and evaluation.
//!
//! Expressions are folded to a [`Number`] as they are parsed; there is
//! no AST. Each precedence level is its own production (`l1` the
//! loosest, `l3` the tightest), looping over `operator operand` pairs
//! and folding left-to-right into an accumulator, which makes every
//! level left-associative.

use ngc_util::{BinOp, Number, Result, UnaryOp};

use crate::LineParser;

impl<'a> LineParser<'a> {
    /// An optionally signed real value (the `word_number` and `operand`
    /// productions share this shape).
    pub(crate) fn signed_real_value(&mut self) -> Result<Number> {
        self.cursor.skip_blanks();
        if self.cursor.match_char('-') {
            return Ok(self.real_value()?.negate());
        }
        self.cursor.match_char('+');
        self.real_value()
    }

    /// `real_value <- expression / parameter / unary_operation / number`.
    ///
    /// The alternatives are disjoint on their first character, so one
    /// peek decides.
    pub(crate) fn real_value(&mut self) -> Result<Number> {
        self.cursor.skip_blanks();
        match self.cursor.current_char() {
            '[' => self.expression(),
            '#' => self.parameter_value(),
            c if c.is_ascii_alphabetic() => self.unary_operation(),
            _ => self.number(),
        }
    }

    /// A bracketed expression: `[` l1 `]`.
    pub(crate) fn expression(&mut self) -> Result<Number> {
        self.cursor.skip_blanks();
        self.expect_char('[', "expected '['")?;
        let value = self.l1_operation()?;
        self.cursor.skip_blanks();
        self.expect_char(']', "expected ']'")?;
        Ok(value)
    }

    pub(crate) fn l1_operation(&mut self) -> Result<Number> {
        let mut value = self.l2_operation()?;
        while let Some(op) = self.l1_operator() {
            let operand = self.l2_operation()?;
            value = op.apply(value, operand)?;
        }
        Ok(value)
    }

    fn l2_operation(&mut self) -> Result<Number> {
        let mut value = self.l3_operation()?;
        while let Some(op) = self.l2_operator() {
            let operand = self.l3_operation()?;
            value = op.apply(value, operand)?;
        }
        Ok(value)
    }

    fn l3_operation(&mut self) -> Result<Number> {
        let mut value = self.signed_real_value()?;
        while let Some(op) = self.l3_operator() {
            let operand = self.signed_real_value()?;
            value = op.apply(value, operand)?;
        }
        Ok(value)
    }

    /// `+`, `-`, `and`, `or`, `xor` (names case-insensitive). A letter
    /// run that is not one of the names backtracks; the caller's
    /// surrounding rule will report the error.
    fn l1_operator(&mut self) -> Option<BinOp> {
        self.cursor.skip_blanks();
        match self.cursor.current_char() {
            '+' => {
                self.cursor.advance();
                Some(BinOp::Add)
            }
            '-' => {
                self.cursor.advance();
                Some(BinOp::Sub)
            }
            c if c.is_ascii_alphabetic() => {
                let mark = self.cursor.position();
                let name = self.letter_run();
                if name.eq_ignore_ascii_case("and") {
                    Some(BinOp::And)
                } else if name.eq_ignore_ascii_case("or") {
                    Some(BinOp::Or)
                } else if name.eq_ignore_ascii_case("xor") {
                    Some(BinOp::Xor)
                } else {
                    self.cursor.restore(mark);
                    None
                }
            }
            _ => None,
        }
    }

    /// `*` (but not `**`) or `/`.
    fn l2_operator(&mut self) -> Option<BinOp> {
        self.cursor.skip_blanks();
        match self.cursor.current_char() {
            '*' if self.cursor.peek_char(1) != '*' => {
                self.cursor.advance();
                Some(BinOp::Mul)
            }
            '/' => {
                self.cursor.advance();
                Some(BinOp::Div)
            }
            _ => None,
        }
    }

    /// `**`.
    fn l3_operator(&mut self) -> Option<BinOp> {
        self.cursor.skip_blanks();
        if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '*' {
            self.cursor.advance();
            self.cursor.advance();
            Some(BinOp::Pow)
        } else {
            None
        }
    }

    /// A unary function applied to a bracketed expression: `sin[90]`.
    fn unary_operation(&mut self) -> Result<Number> {
        let start = self.cursor.position();
        let name = self.letter_run();
        let op = UnaryOp::from_name(&name)
            .ok_or_else(|| self.error_at(start, format!("unknown unary operator '{name}'")))?;
        let argument = self.expression()?;
        op.apply(argument)
    }

    /// Consumes a run of ASCII letters.
    fn letter_run(&mut self) -> String {
        let mut name = String::new();
        while self.cursor.current_char().is_ascii_alphabetic() {
            name.push(self.cursor.current_char());
            self.cursor.advance();
        }
        name
    }
}
