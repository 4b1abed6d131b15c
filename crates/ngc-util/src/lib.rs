//! ngc-util - Shared types for the NGC G-code parser
//!
//! This crate holds the leaf types every other crate in the workspace
//! builds on:
//!
//! - [`Number`] - the value domain of G-code arithmetic, an exact integer
//!   or a floating-point number. The distinction is visible to users
//!   (`G0` and `G0.0` are different word-table keys), so it is kept as a
//!   tagged sum instead of collapsing everything to `f64`.
//! - [`BinOp`] / [`UnaryOp`] - the operators of the expression language
//!   together with their evaluation rules (degrees for trig, always-float
//!   division, truthiness logic, and so on).
//! - [`WordInfo`], [`Word`] and [`Line`] - the static word metadata and
//!   the values produced by parsing.
//! - [`Error`] - the error taxonomy shared across the workspace.
//!
//! Nothing in here parses text or keeps state; that lives in `ngc-parse`.

pub mod error;
pub mod line;
pub mod number;
pub mod ops;
pub mod word;

pub use error::{Error, Result};
pub use line::Line;
pub use number::Number;
pub use ops::{BinOp, UnaryOp};
pub use word::{Word, WordInfo};
