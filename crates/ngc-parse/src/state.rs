//! Machine state: parameter tables and the block-delete switch.
//!
//! Parameter writes take effect only after the current line completes.
//! The state therefore keeps two copies of each table: lookups read the
//! *committed* copy, assignments write the *pending* copy, and the line
//! finalizer promotes pending to committed once the whole line has been
//! evaluated. A failed parse never commits; the pending tables are
//! resynchronized from the committed ones before the next line starts.

use rustc_hash::FxHashMap;

use ngc_util::{Error, Number, Result};

/// The mutable state a parser carries across lines.
#[derive(Debug, Clone, Default)]
pub struct MachineState {
    parameters: FxHashMap<i64, Number>,
    pending_parameters: FxHashMap<i64, Number>,
    named_parameters: FxHashMap<String, Number>,
    pending_named_parameters: FxHashMap<String, Number>,
    block_delete_switch: bool,
}

impl MachineState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds numeric parameters. The values land in both the pending and
    /// committed tables; the caller's collection is consumed, never
    /// aliased.
    pub fn with_parameters<I>(mut self, parameters: I) -> Self
    where
        I: IntoIterator<Item = (i64, Number)>,
    {
        for (index, value) in parameters {
            self.pending_parameters.insert(index, value);
        }
        self.commit();
        self
    }

    /// Seeds named parameters (extended dialect). Keys are folded to
    /// lowercase, matching the case-insensitive lookup rule.
    pub fn with_named_parameters<K, I>(mut self, parameters: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Number)>,
    {
        for (name, value) in parameters {
            self.pending_named_parameters
                .insert(name.into().to_lowercase(), value);
        }
        self.commit();
        self
    }

    /// Sets the block-delete switch: when enabled, lines starting with
    /// `/` are skipped entirely.
    pub fn with_block_delete_switch(mut self, enabled: bool) -> Self {
        self.block_delete_switch = enabled;
        self
    }

    pub fn is_block_delete_switch_enabled(&self) -> bool {
        self.block_delete_switch
    }

    /// The committed numeric parameter table.
    pub fn parameters(&self) -> &FxHashMap<i64, Number> {
        &self.parameters
    }

    /// The committed named parameter table.
    pub fn named_parameters(&self) -> &FxHashMap<String, Number> {
        &self.named_parameters
    }

    /// Reads a numeric parameter. Only committed values are visible, so
    /// an assignment earlier on the same line does not affect the result.
    pub fn parameter(&self, index: i64) -> Result<Number> {
        self.parameters
            .get(&index)
            .copied()
            .ok_or_else(|| Error::UndefinedParameter(format!("#{index}")))
    }

    /// Reads a named parameter, case-insensitively.
    pub fn named_parameter(&self, name: &str) -> Result<Number> {
        let name = name.to_lowercase();
        self.named_parameters
            .get(&name)
            .copied()
            .ok_or_else(|| Error::UndefinedParameter(format!("#<{name}>")))
    }

    /// Writes a numeric parameter into the pending table. Invisible to
    /// lookups until [`commit`](Self::commit) runs.
    pub fn set_parameter(&mut self, index: i64, value: Number) {
        self.pending_parameters.insert(index, value);
    }

    /// Writes a named parameter into the pending table, folding the key.
    pub fn set_named_parameter(&mut self, name: &str, value: Number) {
        self.pending_named_parameters
            .insert(name.to_lowercase(), value);
    }

    /// Promotes pending writes into the committed tables. After this the
    /// two copies of each table are equal.
    pub fn commit(&mut self) {
        self.parameters = self.pending_parameters.clone();
        self.named_parameters = self.pending_named_parameters.clone();
    }

    /// Discards pending writes, restoring the pending tables to the
    /// committed values.
    pub fn rollback(&mut self) {
        self.pending_parameters = self.parameters.clone();
        self.pending_named_parameters = self.named_parameters.clone();
    }
}
