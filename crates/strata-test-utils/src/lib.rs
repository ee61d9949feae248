//! Test utilities and mock types for Strata development.
//!
//! Provides mock implementations of the simulation seams
//! ([`RandomSource`], [`FieldSink`]) and a set of [`fixtures`] with known
//! rules and states.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use strata_core::{Field, FieldSink, SinkError};
use strata_engine::RandomSource;

/// Mock [`RandomSource`] that replays a fixed script of values.
///
/// Each draw returns the next scripted value reduced modulo the bound,
/// cycling back to the start when the script runs out. An empty script
/// always yields 0.
pub struct ScriptedSource {
    script: Vec<u8>,
    pos: usize,
    draws: usize,
}

impl ScriptedSource {
    pub fn new(script: impl Into<Vec<u8>>) -> Self {
        Self {
            script: script.into(),
            pos: 0,
            draws: 0,
        }
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl RandomSource for ScriptedSource {
    fn uniform_below(&mut self, bound: u8) -> u8 {
        self.draws += 1;
        if self.script.is_empty() {
            return 0;
        }
        let v = self.script[self.pos] % bound.max(1);
        self.pos = (self.pos + 1) % self.script.len();
        v
    }
}

/// Mock [`FieldSink`] that keeps a copy of every field it receives.
#[derive(Default)]
pub struct RecordingSink {
    fields: Vec<Field>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fields received, oldest first.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// The most recent field, if any.
    pub fn last(&self) -> Option<&Field> {
        self.fields.last()
    }
}

impl FieldSink for RecordingSink {
    fn consume(&mut self, field: &Field) -> Result<(), SinkError> {
        self.fields.push(field.clone());
        Ok(())
    }
}

/// Mock [`FieldSink`] that rejects every field with an I/O error.
pub struct FailingSink {
    pub reason: String,
}

impl FailingSink {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl FieldSink for FailingSink {
    fn consume(&mut self, _field: &Field) -> Result<(), SinkError> {
        Err(SinkError::Io {
            reason: self.reason.clone(),
        })
    }
}
