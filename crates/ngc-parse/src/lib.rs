//! ngc-parse - Parser and partial evaluator for RS274/NGC G-code
//!
//! This crate reads G-code source text and returns, for each line, a
//! [`Line`] listing the executable words in canonical execution order
//! along with comments, parameter assignments and the optional line
//! number. Expressions, parameter references and unary functions are
//! evaluated during the parse, so every word number comes out as a plain
//! [`Number`].
//!
//! # Grammar overview
//!
//! ```text
//! line      := '/'? ('N' integer)? (word | setting | comment)*
//! word      := letter sign? real_value
//! setting   := '#' integer '=' real_value
//!            | '#<' name '>' '=' real_value          (extended dialect)
//! real_value := '[' l1 ']' | '#' param | unary '[' l1 ']' | number
//! ```
//!
//! Binary operator precedence, lowest to highest, all left-associative:
//!
//! | Level | Operators                |
//! |-------|--------------------------|
//! | 1     | `+` `-` `and` `or` `xor` |
//! | 2     | `*` `/`                  |
//! | 3     | `**`                     |
//!
//! # Parameters and the two-phase state
//!
//! A [`Parser`] owns a [`MachineState`] that persists across lines.
//! Within one line, parameter lookups see the values the parameters had
//! when the line started; assignments only take effect once the line
//! completes:
//!
//! ```
//! use ngc_parse::{Dialect, MachineState, Number, Parser};
//!
//! let state = MachineState::new().with_parameters([(1, Number::Int(1000))]);
//! let mut parser = Parser::with_state(Dialect::rs274ngc(), state);
//!
//! let lines = parser.parse("#1 = 1 G0 X#1 #1 = 2")?;
//! // X#1 still saw the old value ...
//! assert_eq!(lines[0].to_string(), "G0 X1000");
//! // ... and the rightmost assignment won the commit.
//! assert_eq!(parser.machine_state().parameter(1)?, Number::Int(2));
//! # Ok::<(), ngc_parse::Error>(())
//! ```

mod cursor;
mod expr;
mod num;
mod param;
mod state;

pub use state::MachineState;

pub use ngc_dialect::{Dialect, Features};
pub use ngc_util::{Error, Line, Number, Result, Word};

use indexmap::IndexMap;
use tracing::{debug, trace};

use cursor::Cursor;

/// The grammar production [`Parser::parse_rule`] starts from.
///
/// `Line` is what [`Parser::parse`] uses; the others exist for
/// evaluating sub-expressions on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartRule {
    Line,
    Word,
    RealValue,
    Expression,
    Operation,
    Number,
    NumericParameter,
    NamedParameter,
}

/// The value produced by parsing a single grammar rule.
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed {
    Line(Line),
    Word(Word),
    Number(Number),
}

/// A stateful G-code parser for one dialect.
///
/// The parser keeps an internal machine state which is updated as lines
/// are parsed, so repeated `parse` calls behave like one continuous
/// program:
///
/// ```
/// use ngc_parse::{Dialect, MachineState, Number, Parser};
///
/// let state = MachineState::new().with_parameters([(123, Number::Int(0))]);
/// let mut parser = Parser::with_state(Dialect::rs274ngc(), state);
///
/// let first = parser.parse("#123 = 1 G0 X#123")?; // X evaluates to 0
/// let second = parser.parse("#123 = 1 G0 X#123")?; // X evaluates to 1
/// assert_eq!(first[0].to_string(), "G0 X0");
/// assert_eq!(second[0].to_string(), "G0 X1");
/// # Ok::<(), ngc_parse::Error>(())
/// ```
pub struct Parser {
    dialect: &'static Dialect,
    state: MachineState,
}

impl Parser {
    /// Creates a parser with an empty machine state.
    pub fn new(dialect: &'static Dialect) -> Self {
        Self::with_state(dialect, MachineState::new())
    }

    /// Creates a parser seeded with the given machine state. The state
    /// is owned by the parser; clone it first if you need to keep the
    /// seed around.
    pub fn with_state(dialect: &'static Dialect, state: MachineState) -> Self {
        Self { dialect, state }
    }

    pub fn dialect(&self) -> &'static Dialect {
        self.dialect
    }

    /// The current machine state.
    pub fn machine_state(&self) -> &MachineState {
        &self.state
    }

    /// Parses raw G-code into one [`Line`] per source line.
    ///
    /// Lines are parsed in order against the shared machine state, so a
    /// parameter assigned on one line is visible from the next line on.
    /// Empty source lines are legal and produce empty [`Line`] values.
    pub fn parse(&mut self, source: &str) -> Result<Vec<Line>> {
        source.lines().map(|line| self.parse_line(line)).collect()
    }

    /// Parses a single source line.
    pub fn parse_line(&mut self, source: &str) -> Result<Line> {
        trace!(line = source, dialect = self.dialect.name(), "parsing line");
        // A failed parse may have left writes behind; resynchronize.
        self.state.rollback();
        LineParser::new(source, self.dialect, &mut self.state).line()
    }

    /// Parses `input` starting from an arbitrary grammar rule. The whole
    /// input must be consumed.
    ///
    /// Rules other than [`StartRule::Line`] never write parameters and
    /// never commit.
    pub fn parse_rule(&mut self, rule: StartRule, input: &str) -> Result<Parsed> {
        if rule == StartRule::Line {
            return self.parse_line(input).map(Parsed::Line);
        }

        let mut parser = LineParser::new(input, self.dialect, &mut self.state);
        let parsed = match rule {
            StartRule::Line => unreachable!(),
            StartRule::Word => Parsed::Word(parser.word()?),
            StartRule::RealValue => Parsed::Number(parser.real_value()?),
            StartRule::Expression => Parsed::Number(parser.expression()?),
            StartRule::Operation => Parsed::Number(parser.l1_operation()?),
            StartRule::Number => Parsed::Number(parser.number()?),
            StartRule::NumericParameter => Parsed::Number(parser.numeric_parameter()?),
            StartRule::NamedParameter => Parsed::Number(parser.named_parameter()?),
        };
        parser.expect_end()?;
        Ok(parsed)
    }
}

/// A parameter assignment collected while parsing a line.
pub(crate) enum Setting {
    Numeric(i64, Number),
    Named(String, Number),
}

/// Parser for one source line. Short-lived: the surrounding [`Parser`]
/// creates one per line and discards it afterwards.
pub(crate) struct LineParser<'a> {
    cursor: Cursor<'a>,
    dialect: &'static Dialect,
    state: &'a mut MachineState,
}

impl<'a> LineParser<'a> {
    fn new(source: &'a str, dialect: &'static Dialect, state: &'a mut MachineState) -> Self {
        Self {
            cursor: Cursor::new(source),
            dialect,
            state,
        }
    }

    /// The `line` rule and the finalizer in one pass.
    fn line(&mut self) -> Result<Line> {
        self.cursor.skip_blanks();

        if self.cursor.match_char('/') {
            if self.state.is_block_delete_switch_enabled() {
                // The line is skipped wholesale; its raw text survives
                // as a comment and nothing is evaluated or committed.
                debug!(line = self.cursor.source(), "skipping block-deleted line");
                return Ok(Line {
                    comments: vec![self.cursor.source().to_string()],
                    ..Line::default()
                });
            }
        }

        let line_number = self.line_number()?;

        let mut words = Vec::new();
        let mut comments = Vec::new();
        let mut numeric_assignments = IndexMap::new();
        let mut named_assignments = IndexMap::new();

        loop {
            self.cursor.skip_blanks();
            match self.cursor.current_char() {
                '\0' if self.cursor.is_at_end() => break,
                '(' => comments.push(self.comment()?),
                ';' if self.dialect.features().semicolon_comments => {
                    comments.push(self.semicolon_comment());
                    break;
                }
                '#' => match self.parameter_setting()? {
                    Setting::Numeric(index, value) => {
                        // Later assignments on the same line overwrite
                        // earlier ones.
                        numeric_assignments.insert(index, value);
                    }
                    Setting::Named(name, value) => {
                        named_assignments.insert(name, value);
                    }
                },
                c if c.is_ascii_alphabetic() => words.push(self.word()?),
                c => return Err(self.error(format!("unexpected character '{c}'"))),
            }
        }

        // Stable by construction: words sharing an ordering keep their
        // source order.
        words.sort_by_key(|word| word.ordering);

        self.state.commit();

        Ok(Line {
            line_number,
            words,
            comments,
            numeric_assignments,
            named_assignments,
        })
    }

    /// `N` followed by an integer. A lone `N` with no integer backtracks
    /// and is left for the word parser to reject.
    fn line_number(&mut self) -> Result<Option<i64>> {
        self.cursor.skip_blanks();
        if !matches!(self.cursor.current_char(), 'N' | 'n') {
            return Ok(None);
        }
        let mark = self.cursor.position();
        self.cursor.advance();
        match self.try_integer()? {
            Some(number) => Ok(Some(number)),
            None => {
                self.cursor.restore(mark);
                Ok(None)
            }
        }
    }

    /// A word: one letter and an evaluated number, resolved against the
    /// dialect tables.
    pub(crate) fn word(&mut self) -> Result<Word> {
        self.cursor.skip_blanks();
        let letter = self.cursor.current_char();
        if !letter.is_ascii_alphabetic() {
            return Err(self.error("expected a word letter"));
        }
        self.cursor.advance();
        let number = self.signed_real_value()?;

        let letter = letter.to_ascii_uppercase();
        let info = self
            .dialect
            .resolve(letter, number)
            .ok_or(Error::UnknownWord { letter, number })?;
        Ok(Word::new(letter, number, info.ordering))
    }

    /// `( ... )` - the text between the parentheses.
    fn comment(&mut self) -> Result<String> {
        self.cursor.advance();
        let start = self.cursor.position();
        while !self.cursor.is_at_end() && self.cursor.current_char() != ')' {
            self.cursor.advance();
        }
        if self.cursor.is_at_end() {
            return Err(self.error("unterminated comment"));
        }
        let text = self.cursor.slice_from(start).to_string();
        self.cursor.advance();
        Ok(text)
    }

    /// `; ...` - everything to the end of the line, sans leading blanks.
    fn semicolon_comment(&mut self) -> String {
        self.cursor.advance();
        self.cursor.skip_blanks();
        let text = self.cursor.remaining().to_string();
        while !self.cursor.is_at_end() {
            self.cursor.advance();
        }
        text
    }

    /// Fails unless only blanks remain.
    pub(crate) fn expect_end(&mut self) -> Result<()> {
        self.cursor.skip_blanks();
        if self.cursor.is_at_end() {
            Ok(())
        } else {
            Err(self.error(format!(
                "unexpected trailing input '{}'",
                self.cursor.remaining()
            )))
        }
    }

    pub(crate) fn expect_char(&mut self, expected: char, message: &str) -> Result<()> {
        if self.cursor.match_char(expected) {
            Ok(())
        } else {
            Err(self.error(message))
        }
    }

    pub(crate) fn error(&self, message: impl Into<String>) -> Error {
        self.error_at(self.cursor.position(), message)
    }

    pub(crate) fn error_at(&self, position: usize, message: impl Into<String>) -> Error {
        Error::Parse {
            column: position + 1,
            message: message.into(),
        }
    }
}
