//! wikidata-people Extractor - Person relation extraction pipeline
//!
//! Filters parsed triples against the fixed person relation table and
//! fans matching subject/object pairs out to one writer per relation.

use std::collections::BTreeMap;

use serde::Serialize;

use wdp_core::{Relation, Result};

pub mod pipeline;
pub mod writer;

pub use pipeline::{extract, run};
pub use writer::{MemorySink, RelationFiles};

/// Destination for extracted relation pairs
pub trait RelationSink {
    /// Append one `subject`/`object` pair to the relation's output
    fn write(&mut self, relation: Relation, subject: &str, object: &str) -> Result<()>;

    /// Flush and release every output
    fn finish(self) -> Result<()>
    where
        Self: Sized;
}

/// Counters aggregated over one extraction run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractStats {
    /// Input lines read
    pub lines_read: u64,
    /// Lines that split into exactly three fields
    pub triples_parsed: u64,
    /// Lines skipped for having another field count
    pub malformed_lines: u64,
    /// Pairs written across all relations
    pub triples_written: u64,
    /// Pairs written per relation
    pub per_relation: BTreeMap<Relation, u64>,
    /// Wall-clock duration of the run in milliseconds
    pub elapsed_ms: u64,
}

impl ExtractStats {
    /// Record one pair written for a relation
    pub fn record(&mut self, relation: Relation) {
        self.triples_written += 1;
        *self.per_relation.entry(relation).or_insert(0) += 1;
    }

    /// Pairs written for a relation
    pub fn written(&self, relation: Relation) -> u64 {
        self.per_relation.get(&relation).copied().unwrap_or(0)
    }

    /// Parsed triples whose predicate is not a person relation
    pub fn discarded(&self) -> u64 {
        self.triples_parsed - self.triples_written
    }
}
