//! wikidata-people Core - Domain models and shared types
//!
//! This crate defines the core abstractions used by the extraction pipeline:
//! - Triples read from an N-Triples dump
//! - The fixed person relation table (predicate code -> relation name)
//! - Common error types
//! - Configuration management

pub mod config;

pub use config::{
    AppConfig, ConfigError, LoggingConfig, OutputConfig, ParserConfig, PipelineConfig,
};

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Core error types for extraction runs
#[derive(Error, Debug)]
pub enum WdpError {
    #[error("Failed to open input dump {path}: {source}")]
    InputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read input dump at line {line}: {source}")]
    InputRead {
        line: u64,
        #[source]
        source: std::io::Error,
    },

    #[error("Output directory does not exist: {0}")]
    OutputDirMissing(PathBuf),

    #[error("Failed to open output file {path}: {source}")]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write relation {relation}: {source}")]
    OutputWrite {
        relation: Relation,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, WdpError>;

// ============================================================================
// Triples
// ============================================================================

/// A normalized (Subject, Predicate, Object) triple
///
/// Each field is an identifier with its URI prefix already stripped,
/// e.g. `Q42`, `P19`, `Q350`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triple {
    pub subject: String,
    pub predicate: String,
    pub object: String,
}

impl Triple {
    /// Create a new triple
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }

    /// Relation this triple maps to, if its predicate is a known person relation
    pub fn relation(&self) -> Option<Relation> {
        Relation::from_predicate(&self.predicate)
    }
}

// ============================================================================
// Person Relations
// ============================================================================

/// Person relations extracted from the dump, one output file each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Relation {
    HasCountry,       // P17
    HasBirthPlace,    // P19
    HasDeathPlace,    // P20
    HasGender,        // P21
    HasFather,        // P22
    HasMother,        // P25
    HasSpouse,        // P26
    HasNationality,   // P27
    HasChild,         // P40
    IsLocatedIn,      // P131
    ContainsLocation, // P150
    HasSibling,       // P3373
    HasStepParent,    // P3448
}

impl Relation {
    /// Every relation, in predicate table order
    pub const ALL: [Relation; 13] = [
        Self::HasCountry,
        Self::HasBirthPlace,
        Self::HasDeathPlace,
        Self::HasGender,
        Self::HasFather,
        Self::HasMother,
        Self::HasSpouse,
        Self::HasNationality,
        Self::HasChild,
        Self::IsLocatedIn,
        Self::ContainsLocation,
        Self::HasSibling,
        Self::HasStepParent,
    ];

    /// Look up the relation for a normalized predicate code
    pub fn from_predicate(predicate: &str) -> Option<Self> {
        match predicate {
            "P17" => Some(Self::HasCountry),
            "P19" => Some(Self::HasBirthPlace),
            "P20" => Some(Self::HasDeathPlace),
            "P21" => Some(Self::HasGender),
            "P22" => Some(Self::HasFather),
            "P25" => Some(Self::HasMother),
            "P26" => Some(Self::HasSpouse),
            "P27" => Some(Self::HasNationality),
            "P40" => Some(Self::HasChild),
            "P131" => Some(Self::IsLocatedIn),
            "P150" => Some(Self::ContainsLocation),
            "P3373" => Some(Self::HasSibling),
            "P3448" => Some(Self::HasStepParent),
            _ => None,
        }
    }

    /// Wikidata predicate code
    pub fn predicate(&self) -> &'static str {
        match self {
            Self::HasCountry => "P17",
            Self::HasBirthPlace => "P19",
            Self::HasDeathPlace => "P20",
            Self::HasGender => "P21",
            Self::HasFather => "P22",
            Self::HasMother => "P25",
            Self::HasSpouse => "P26",
            Self::HasNationality => "P27",
            Self::HasChild => "P40",
            Self::IsLocatedIn => "P131",
            Self::ContainsLocation => "P150",
            Self::HasSibling => "P3373",
            Self::HasStepParent => "P3448",
        }
    }

    /// Relation name, also used as the output file name
    pub fn name(&self) -> &'static str {
        match self {
            Self::HasCountry => "hasCountry",
            Self::HasBirthPlace => "hasBirthPlace",
            Self::HasDeathPlace => "hasDeathPlace",
            Self::HasGender => "hasGender",
            Self::HasFather => "hasFather",
            Self::HasMother => "hasMother",
            Self::HasSpouse => "hasSpouse",
            Self::HasNationality => "hasNationality",
            Self::HasChild => "hasChild",
            Self::IsLocatedIn => "isLocatedIn",
            Self::ContainsLocation => "containsLocation",
            Self::HasSibling => "hasSibling",
            Self::HasStepParent => "hasStepParent",
        }
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_relation_table() {
        let expected = [
            ("P17", "hasCountry"),
            ("P19", "hasBirthPlace"),
            ("P20", "hasDeathPlace"),
            ("P21", "hasGender"),
            ("P22", "hasFather"),
            ("P25", "hasMother"),
            ("P26", "hasSpouse"),
            ("P27", "hasNationality"),
            ("P40", "hasChild"),
            ("P131", "isLocatedIn"),
            ("P150", "containsLocation"),
            ("P3373", "hasSibling"),
            ("P3448", "hasStepParent"),
        ];

        for (predicate, name) in expected {
            let relation = Relation::from_predicate(predicate).unwrap();
            assert_eq!(relation.name(), name);
            assert_eq!(relation.predicate(), predicate);
        }
    }

    #[test]
    fn test_relation_all_is_complete_and_distinct() {
        let names: HashSet<_> = Relation::ALL.iter().map(|r| r.name()).collect();
        let predicates: HashSet<_> = Relation::ALL.iter().map(|r| r.predicate()).collect();
        assert_eq!(names.len(), 13);
        assert_eq!(predicates.len(), 13);

        for (i, relation) in Relation::ALL.into_iter().enumerate() {
            assert_eq!(Relation::from_predicate(relation.predicate()), Some(relation));
            assert_eq!(relation as usize, i);
        }
    }

    #[test]
    fn test_unknown_predicates() {
        assert_eq!(Relation::from_predicate("P31"), None);
        assert_eq!(Relation::from_predicate("p19"), None);
        assert_eq!(Relation::from_predicate("hasBirthPlace"), None);
        assert_eq!(Relation::from_predicate(""), None);
    }

    #[test]
    fn test_triple_relation() {
        let triple = Triple::new("Q1", "P19", "Q2");
        assert_eq!(triple.relation(), Some(Relation::HasBirthPlace));

        let other = Triple::new("Q1", "P31", "Q5");
        assert_eq!(other.relation(), None);
    }

    #[test]
    fn test_relation_display() {
        assert_eq!(Relation::HasStepParent.to_string(), "hasStepParent");
    }
}
