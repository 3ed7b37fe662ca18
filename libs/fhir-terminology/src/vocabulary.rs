//! The per-type literal table behind every coded value.

use std::fmt;
use std::hash::Hash;

use crate::error::Result;

/// One entry of a vocabulary's literal table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Concept {
    /// Wire-format literal, exactly as it appears in payloads.
    pub code: &'static str,
    /// Human display label.
    pub display: &'static str,
}

/// Type-erased vocabulary descriptor.
///
/// Carries the same table a [`Vocabulary`] implementor exposes through its
/// associated items, in a form that can be stored in runtime registries and
/// looked up by system URI.
#[derive(Debug, Clone, Copy)]
pub struct VocabularyInfo {
    /// Computer-friendly vocabulary name, e.g. `"EncounterStatus"`.
    pub name: &'static str,
    /// Canonical system URI, e.g. `http://hl7.org/fhir/encounter-status`.
    pub system: &'static str,
    /// Full literal table in definition order.
    pub concepts: &'static [Concept],
}

impl VocabularyInfo {
    /// Case-sensitive table lookup.
    pub fn find(&self, code: &str) -> Option<&'static Concept> {
        self.concepts.iter().find(|c| c.code == code)
    }

    /// Whether `code` is a legal literal of this vocabulary.
    pub fn contains(&self, code: &str) -> bool {
        self.find(code).is_some()
    }

    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }
}

/// A closed, specification-defined set of string literals.
///
/// Implementors are fieldless `Copy` enums produced by the
/// [`code_system!`](crate::code_system) macro; the set of members and the
/// literal table are fixed at compile time. Matching is byte-exact: literal
/// spellings come from an external standard and are never normalized, so
/// vocabularies may legally contain siblings differing only by case.
pub trait Vocabulary: Copy + Eq + Hash + fmt::Debug + Sized + 'static {
    /// Computer-friendly vocabulary name.
    const NAME: &'static str;

    /// Canonical system URI identifying this vocabulary. Fixed per type,
    /// not per instance.
    const SYSTEM: &'static str;

    /// The `(code, display)` table in definition order.
    const CONCEPTS: &'static [Concept];

    /// Type-erased descriptor for runtime registries.
    const INFO: VocabularyInfo = VocabularyInfo {
        name: Self::NAME,
        system: Self::SYSTEM,
        concepts: Self::CONCEPTS,
    };

    /// The wire-format literal for this member.
    fn code(self) -> &'static str;

    /// The human display label for this member.
    fn display(self) -> &'static str;

    /// Parses a wire literal. Total over [`Self::CONCEPTS`]; anything else
    /// fails with [`Error::UnrecognizedCode`](crate::Error::UnrecognizedCode).
    fn from_code(code: &str) -> Result<Self>;

    /// All members, in the same order as [`Self::CONCEPTS`].
    fn values() -> &'static [Self];

    /// The table entry for this member.
    fn concept(self) -> &'static Concept {
        let code = self.code();
        Self::CONCEPTS
            .iter()
            .find(|c| c.code == code)
            .expect("member set and concept table always agree")
    }
}
