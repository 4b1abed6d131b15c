//! Parsed lines.

use std::fmt;

use indexmap::IndexMap;

use crate::number::Number;
use crate::word::Word;

/// One fully parsed source line.
///
/// `words` is sorted by execution order (stable, so words sharing an
/// ordering keep their source order). The assignment maps record the
/// last value written to each parameter on the line; the machine state
/// holds the committed values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Line {
    /// The `N...` label, if present.
    pub line_number: Option<i64>,

    /// Executable words in canonical execution order.
    pub words: Vec<Word>,

    /// Comment texts in source order, without their delimiters.
    pub comments: Vec<String>,

    /// Numeric parameter assignments; the rightmost write wins.
    pub numeric_assignments: IndexMap<i64, Number>,

    /// Named parameter assignments (extended dialect), keys folded to
    /// lowercase; the rightmost write wins.
    pub named_assignments: IndexMap<String, Number>,
}

/// Renders the line back to G-code text. Comments always come out in
/// parenthesized form, even if they were written with a semicolon.
impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(n) = self.line_number {
            parts.push(format!("N{n}"));
        }
        parts.extend(self.words.iter().map(Word::to_string));
        parts.extend(self.comments.iter().map(|c| format!("({c})")));
        f.write_str(&parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_empty() {
        assert_eq!(Line::default().to_string(), "");
    }

    #[test]
    fn test_display_full() {
        let line = Line {
            line_number: Some(10),
            words: vec![
                Word::new('G', Number::Int(1), 210),
                Word::new('X', Number::Float(1.5), 999),
            ],
            comments: vec!["hello".into()],
            ..Default::default()
        };
        assert_eq!(line.to_string(), "N10 G1 X1.5 (hello)");
    }

    #[test]
    fn test_assignments_compare_by_content() {
        let mut a = Line::default();
        a.numeric_assignments.insert(1, Number::Int(2));
        let mut b = Line::default();
        b.numeric_assignments.insert(1, Number::Int(2));
        assert_eq!(a, b);
    }
}
