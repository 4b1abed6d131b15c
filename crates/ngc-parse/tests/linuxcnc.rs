//! End-to-end tests for the LinuxCNC dialect: named parameters,
//! semicolon comments, and the extended word table.

use indexmap::IndexMap;

use ngc_parse::{Dialect, Error, Line, MachineState, Number, Parsed, Parser, StartRule, Word};

// ============================================================================
// HELPERS
// ============================================================================

fn named_state(parameters: impl IntoIterator<Item = (&'static str, i64)>) -> MachineState {
    MachineState::new().with_named_parameters(
        parameters
            .into_iter()
            .map(|(name, value)| (name, Number::Int(value))),
    )
}

fn word(letter: char, number: impl Into<Number>) -> Word {
    let number = number.into();
    let letter = letter.to_ascii_uppercase();
    let info = Dialect::linuxcnc()
        .resolve(letter, number)
        .unwrap_or_else(|| panic!("word {letter}{number} not in the dialect tables"));
    Word::new(letter, number, info.ordering)
}

// ============================================================================
// NAMED PARAMETERS
// ============================================================================

#[test]
fn test_named_parameter_lookup() {
    let mut parser = Parser::with_state(Dialect::linuxcnc(), named_state([("defined", 123)]));
    assert_eq!(
        parser.parse_rule(StartRule::NamedParameter, "#<defined>"),
        Ok(Parsed::Number(Number::Int(123)))
    );
}

#[test]
fn test_named_parameter_lookup_is_case_insensitive() {
    let mut parser = Parser::with_state(Dialect::linuxcnc(), named_state([("Defined", 123)]));
    assert_eq!(
        parser.parse_rule(StartRule::NamedParameter, "#<DEFINED>"),
        Ok(Parsed::Number(Number::Int(123)))
    );
}

#[test]
fn test_named_parameter_errors() {
    let mut parser = Parser::with_state(Dialect::linuxcnc(), named_state([("defined", 123)]));
    assert_eq!(
        parser.parse_rule(StartRule::NamedParameter, "#<undefined>"),
        Err(Error::UndefinedParameter("#<undefined>".into()))
    );
    assert!(matches!(
        parser.parse_rule(StartRule::NamedParameter, "#banana"),
        Err(Error::Parse { .. })
    ));
    assert!(matches!(
        parser.parse_rule(StartRule::NamedParameter, "#<>"),
        Err(Error::Parse { .. })
    ));
    assert!(matches!(
        parser.parse_rule(StartRule::NamedParameter, "#<unterminated"),
        Err(Error::Parse { .. })
    ));
}

#[test]
fn test_named_parameters_unavailable_in_baseline() {
    let mut parser = Parser::new(Dialect::rs274ngc());
    assert!(matches!(
        parser.parse_rule(StartRule::NamedParameter, "#<x>"),
        Err(Error::Parse { .. })
    ));
}

// ============================================================================
// SEMICOLON COMMENTS
// ============================================================================

#[test]
fn test_semicolon_comment_takes_the_whole_line() {
    let mut parser = Parser::new(Dialect::linuxcnc());
    assert_eq!(
        parser.parse_line("; L10 G0 X0").unwrap(),
        Line {
            comments: vec!["L10 G0 X0".into()],
            ..Line::default()
        }
    );
}

#[test]
fn test_semicolon_comment_after_words() {
    let mut parser = Parser::new(Dialect::linuxcnc());
    assert_eq!(
        parser
            .parse_line("G0 (first comment) X1 (second comment) ;semicolon comment (still)")
            .unwrap(),
        Line {
            words: vec![word('g', 0), word('x', 1)],
            comments: vec![
                "first comment".into(),
                "second comment".into(),
                "semicolon comment (still)".into(),
            ],
            ..Line::default()
        }
    );
}

#[test]
fn test_semicolon_comment_renders_parenthesized() {
    let mut parser = Parser::new(Dialect::linuxcnc());
    let line = parser.parse_line("; a comment").unwrap();
    assert_eq!(line.to_string(), "(a comment)");
}

// ============================================================================
// NAMED ASSIGNMENTS
// ============================================================================

#[test]
fn test_named_assignment_reads_pre_commit_value() {
    let initial = named_state([("defined", 10), ("param", 1)]);
    let mut parser = Parser::with_state(Dialect::linuxcnc(), initial.clone());

    // X#<param> sees the value from the start of the line, not the 10
    // assigned just before it.
    assert_eq!(
        parser.parse_line("#<param> = #<defined> G0 X#<param>").unwrap(),
        Line {
            words: vec![word('g', 0), word('x', 1)],
            named_assignments: IndexMap::from([("param".to_string(), Number::Int(10))]),
            ..Line::default()
        }
    );

    // The initial state is untouched; the parser's state has committed.
    assert_eq!(initial.named_parameter("param").unwrap(), Number::Int(1));
    let state = parser.machine_state();
    assert_eq!(state.named_parameter("defined").unwrap(), Number::Int(10));
    assert_eq!(state.named_parameter("param").unwrap(), Number::Int(10));
}

#[test]
fn test_named_assignment_folds_case() {
    let mut parser = Parser::new(Dialect::linuxcnc());
    let line = parser.parse_line("#<Depth> = 2").unwrap();
    assert_eq!(
        line.named_assignments,
        IndexMap::from([("depth".to_string(), Number::Int(2))])
    );
    // Committed under the folded key, readable in any case.
    let line = parser.parse_line("G0 Z#<DEPTH>").unwrap();
    assert_eq!(line.words[1].number, Number::Int(2));
}

// ============================================================================
// PROGRAMS
// ============================================================================

#[test]
fn test_program() {
    // A small integration test using the language features together.
    let mut parser = Parser::with_state(Dialect::linuxcnc(), named_state([("defined", 10)]));

    let source = [
        "#<first> = 1 #123 = 1 G0 X#<defined> G53", // set G53, G0 X10, assign variables
        "N10 #123 = 2 G#<first> X#123 ; a comment", // G1 X1
        "; another comment",
    ]
    .join("\n");

    let lines = parser.parse(&source).unwrap();

    assert_eq!(
        lines,
        vec![
            Line {
                words: vec![word('g', 53), word('g', 0), word('X', 10)],
                named_assignments: IndexMap::from([("first".to_string(), Number::Int(1))]),
                numeric_assignments: IndexMap::from([(123, Number::Int(1))]),
                ..Line::default()
            },
            Line {
                line_number: Some(10),
                words: vec![word('g', 1), word('x', 1)],
                comments: vec!["a comment".into()],
                numeric_assignments: IndexMap::from([(123, Number::Int(2))]),
                ..Line::default()
            },
            Line {
                comments: vec!["another comment".into()],
                ..Line::default()
            },
        ]
    );

    let state = parser.machine_state();
    assert_eq!(state.parameters().len(), 1);
    assert_eq!(state.parameter(123).unwrap(), Number::Int(2));
    assert_eq!(state.named_parameters().len(), 2);
    assert_eq!(state.named_parameter("first").unwrap(), Number::Int(1));
    assert_eq!(state.named_parameter("defined").unwrap(), Number::Int(10));
}

#[test]
fn test_nested_parameters_and_precedence() {
    let state = MachineState::new().with_parameters([(0, Number::Int(0)), (1, Number::Int(1))]);
    let mut parser = Parser::with_state(Dialect::linuxcnc(), state);

    // G[#[#1-sin[90]]]: #1 - sin[90] folds to 0.0, indexing #0, which
    // holds 0 - so the word is G0. The X expression exercises the three
    // binary levels and ln[1] = 0.
    let line = parser
        .parse_line("G[#[#1-sin[90]]] X[1 * 1/1 - 1 ** 1 + LN[1]]")
        .unwrap();

    assert_eq!(line.words, vec![word('g', 0), word('X', 0.0)]);
    assert_eq!(line.words[0].ordering, 210);
}

#[test]
fn test_extended_words_parse() {
    let mut parser = Parser::new(Dialect::linuxcnc());
    let line = parser.parse_line("G33.1 Z-1 K0.5").unwrap();
    assert_eq!(line.words[0], word('g', 33.1));
    assert_eq!(line.words[0].ordering, 210);
}

#[test]
fn test_dropped_baseline_words_lose_their_metadata() {
    // G84 is a modal command in the baseline, but LinuxCNC dropped it:
    // there it only resolves through the generic G letter entry.
    let mut baseline = Parser::new(Dialect::rs274ngc());
    assert_eq!(baseline.parse_line("G84").unwrap().words[0].ordering, 210);

    let mut linuxcnc = Parser::new(Dialect::linuxcnc());
    assert_eq!(linuxcnc.parse_line("G84").unwrap().words[0].ordering, 999);
}

#[test]
fn test_block_delete_with_semicolon_comment() {
    let state = MachineState::new().with_block_delete_switch(true);
    let mut parser = Parser::with_state(Dialect::linuxcnc(), state);
    assert_eq!(
        parser.parse_line("/ G0 X1 ; gone").unwrap(),
        Line {
            comments: vec!["/ G0 X1 ; gone".into()],
            ..Line::default()
        }
    );
}
