//! Relation writers
//!
//! [`RelationFiles`] owns one buffered file per relation inside the output
//! directory. All files are created up front, so an unusable directory
//! fails before any input is read. Dropping the value (e.g. on an early
//! error) still flushes and closes every handle.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use wdp_core::{OutputConfig, Relation, Result, WdpError};

use crate::RelationSink;

// ============================================================================
// File-backed sink
// ============================================================================

/// One tab-separated output file per relation
pub struct RelationFiles {
    dir: PathBuf,
    /// Indexed by relation discriminant, in `Relation::ALL` order
    writers: Vec<BufWriter<File>>,
}

impl RelationFiles {
    /// Create (truncating) every relation file inside an existing directory
    pub fn create(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(WdpError::OutputDirMissing(dir.to_path_buf()));
        }

        let mut writers = Vec::with_capacity(Relation::ALL.len());
        for relation in Relation::ALL {
            debug_assert_eq!(relation as usize, writers.len());
            let path = dir.join(relation.name());
            let file = File::create(&path).map_err(|e| WdpError::OutputOpen { path, source: e })?;
            writers.push(BufWriter::new(file));
        }

        tracing::debug!("Opened {} relation files in {}", writers.len(), dir.display());

        Ok(Self {
            dir: dir.to_path_buf(),
            writers,
        })
    }

    /// Create the relation files described by the output configuration
    pub fn from_config(config: &OutputConfig) -> Result<Self> {
        if config.create_dir && !config.dir.is_dir() {
            std::fs::create_dir_all(&config.dir).map_err(|e| WdpError::OutputOpen {
                path: config.dir.clone(),
                source: e,
            })?;
        }
        Self::create(&config.dir)
    }

    /// Output directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl RelationSink for RelationFiles {
    fn write(&mut self, relation: Relation, subject: &str, object: &str) -> Result<()> {
        writeln!(self.writers[relation as usize], "{subject}\t{object}")
            .map_err(|e| WdpError::OutputWrite { relation, source: e })
    }

    fn finish(self) -> Result<()> {
        let mut first_error = None;
        for (relation, mut writer) in Relation::ALL.into_iter().zip(self.writers) {
            if let Err(e) = writer.flush() {
                tracing::error!("Failed to flush {}: {}", relation, e);
                first_error.get_or_insert(WdpError::OutputWrite { relation, source: e });
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

// ============================================================================
// In-memory sink
// ============================================================================

/// Sink that keeps written pairs in memory, in write order
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Vec<(Relation, String, String)>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// All written pairs, in write order
    pub fn records(&self) -> &[(Relation, String, String)] {
        &self.records
    }

    /// Output lines of one relation, formatted as they would be on disk
    pub fn lines(&self, relation: Relation) -> Vec<String> {
        self.records
            .iter()
            .filter(|(r, _, _)| *r == relation)
            .map(|(_, s, o)| format!("{s}\t{o}"))
            .collect()
    }
}

impl RelationSink for MemorySink {
    fn write(&mut self, relation: Relation, subject: &str, object: &str) -> Result<()> {
        self.records.push((relation, subject.to_string(), object.to_string()));
        Ok(())
    }

    fn finish(self) -> Result<()> {
        Ok(())
    }
}
