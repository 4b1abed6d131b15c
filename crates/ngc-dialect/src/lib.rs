//! ngc-dialect - Per-dialect word tables and feature sets
//!
//! A [`Dialect`] bundles everything that distinguishes one flavor of
//! G-code from another: the reference grammar text, the static word
//! tables, and the switches for optional language features. The parser
//! is parameterized by a dialect value instead of being subclassed per
//! dialect.
//!
//! Two dialects are built in:
//!
//! - [`Dialect::rs274ngc`] - the baseline RS274/NGC language.
//! - [`Dialect::linuxcnc`] - the LinuxCNC extension: named parameters,
//!   semicolon comments, and additional words (minus `G84`/`G87`, which
//!   LinuxCNC dropped).
//!
//! Word metadata is resolved in two steps: the full `letter + number`
//! key first (`G38.2`), then the bare letter (`X`). Commands live in the
//! word table; argument-like letters live in the letter table with a
//! late ordering so they sort after the commands that consume them.

mod linuxcnc;
mod rs274ngc;

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use ngc_util::{Number, WordInfo};

/// Optional language features a dialect may enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Features {
    /// `#<name>` references and `#<name> = value` assignments.
    pub named_parameters: bool,

    /// `; comment to end of line`.
    pub semicolon_comments: bool,
}

/// A bundle of grammar, word tables and features that determines which
/// forms of G-code are accepted.
pub struct Dialect {
    name: &'static str,
    grammar: &'static str,
    features: Features,
    letters: &'static [(char, WordInfo)],
    words: &'static [(&'static str, WordInfo)],
    letter_index: OnceLock<FxHashMap<char, WordInfo>>,
    word_index: OnceLock<FxHashMap<&'static str, WordInfo>>,
}

static RS274NGC: Dialect = Dialect {
    name: "rs274ngc",
    grammar: rs274ngc::GRAMMAR,
    features: Features {
        named_parameters: false,
        semicolon_comments: false,
    },
    letters: rs274ngc::LETTERS,
    words: rs274ngc::WORDS,
    letter_index: OnceLock::new(),
    word_index: OnceLock::new(),
};

static LINUXCNC: Dialect = Dialect {
    name: "linuxcnc",
    grammar: linuxcnc::GRAMMAR,
    features: Features {
        named_parameters: true,
        semicolon_comments: true,
    },
    letters: rs274ngc::LETTERS,
    words: linuxcnc::WORDS,
    letter_index: OnceLock::new(),
    word_index: OnceLock::new(),
};

impl Dialect {
    /// The baseline RS274/NGC dialect.
    pub fn rs274ngc() -> &'static Dialect {
        &RS274NGC
    }

    /// The LinuxCNC dialect of RS274/NGC.
    pub fn linuxcnc() -> &'static Dialect {
        &LINUXCNC
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The reference PEG grammar this dialect implements.
    pub fn grammar(&self) -> &'static str {
        self.grammar
    }

    pub fn features(&self) -> Features {
        self.features
    }

    /// Metadata for a bare letter (`X`, `F`, ...), case-insensitive.
    pub fn letter_info(&self, letter: char) -> Option<WordInfo> {
        self.letter_index
            .get_or_init(|| self.letters.iter().copied().collect())
            .get(&letter.to_ascii_uppercase())
            .copied()
    }

    /// Metadata for a full word key (`G0`, `G38.2`, `M30`, ...).
    pub fn word_info(&self, key: &str) -> Option<WordInfo> {
        self.word_index
            .get_or_init(|| self.words.iter().copied().collect())
            .get(key)
            .copied()
    }

    /// Resolves a parsed `(letter, number)` pair: the full key wins over
    /// the bare letter. Integer numbers render without a decimal point,
    /// floats with the minimal digits that round-trip, matching the keys
    /// in the word tables.
    pub fn resolve(&self, letter: char, number: Number) -> Option<WordInfo> {
        let key = format!("{}{}", letter.to_ascii_uppercase(), number);
        self.word_info(&key)
            .or_else(|| self.letter_info(letter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_key_wins_over_letter() {
        let dialect = Dialect::rs274ngc();
        let g0 = dialect.resolve('G', Number::Int(0)).unwrap();
        assert_eq!(g0.ordering, 210);
        assert_eq!(g0.modal_group, 1);
        // No table entry for G999; the G letter entry is the fallback.
        let g999 = dialect.resolve('g', Number::Int(999)).unwrap();
        assert_eq!(g999.ordering, 999);
    }

    #[test]
    fn test_float_keys() {
        let dialect = Dialect::rs274ngc();
        let probe = dialect.resolve('G', Number::Float(38.2)).unwrap();
        assert_eq!(probe.modal_group, 1);
        assert_eq!(dialect.word_info("G38.2").unwrap(), probe);
        // A fractionless float renders as G0.0 and misses the word table.
        let g = dialect.resolve('G', Number::Float(0.0)).unwrap();
        assert_eq!(g.ordering, 999);
    }

    #[test]
    fn test_argument_letters() {
        let dialect = Dialect::rs274ngc();
        assert_eq!(dialect.letter_info('x').unwrap().ordering, 999);
        assert_eq!(dialect.letter_info('F').unwrap().ordering, 30);
        assert_eq!(dialect.letter_info('S').unwrap().ordering, 40);
        assert_eq!(dialect.letter_info('T').unwrap().ordering, 50);
        assert!(dialect.letter_info('N').is_none());
    }

    #[test]
    fn test_linuxcnc_additions_and_removals() {
        let linuxcnc = Dialect::linuxcnc();
        assert!(linuxcnc.word_info("G33.1").is_some());
        assert!(linuxcnc.word_info("G5.2").is_some());
        assert!(linuxcnc.word_info("M66").is_some());
        // LinuxCNC dropped these two canned cycles.
        assert!(linuxcnc.word_info("G84").is_none());
        assert!(linuxcnc.word_info("G87").is_none());
        // Both exist in the baseline.
        assert!(Dialect::rs274ngc().word_info("G84").is_some());
        assert!(Dialect::rs274ngc().word_info("G87").is_some());
        assert!(Dialect::rs274ngc().word_info("G33.1").is_none());
    }

    #[test]
    fn test_features() {
        assert!(!Dialect::rs274ngc().features().named_parameters);
        assert!(!Dialect::rs274ngc().features().semicolon_comments);
        assert!(Dialect::linuxcnc().features().named_parameters);
        assert!(Dialect::linuxcnc().features().semicolon_comments);
    }

    #[test]
    fn test_grammar_text_present() {
        assert!(Dialect::rs274ngc().grammar().contains("l1_operation"));
        assert!(Dialect::linuxcnc().grammar().contains("named_parameter"));
    }
}
